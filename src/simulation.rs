//! Per-frame ordering of the tile simulation.
//!
//! Every frame runs the same chain inside `Update`: pointer intake, target
//! resolution, clock advance, grid update, then publishing tile state to the
//! renderer. Rendering happens after `Update`, so the chain doubles as the
//! barrier between simulation and drawing.

use bevy::prelude::*;

/// Ordered phases of one simulation frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Fold raw pointer events into the projector (last write wins).
    Intake,
    /// Resolve the pointer ray into the world-space target.
    ResolvePointer,
    /// Advance simulation time from the host clock.
    AdvanceClock,
    /// Update every tile.
    UpdateGrid,
    /// Copy tile state onto render entities.
    Publish,
}

/// Configuration for the simulation clock.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct SimulationConfig {
    /// Simulation time units per host second.
    pub time_scale: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { time_scale: 0.5 }
    }
}

/// Simulation time derived from host elapsed time.
#[derive(Resource, Debug, Reflect)]
pub struct SimulationClock {
    time_scale: f32,
    time: f32,
    frames: u64,
}

impl SimulationClock {
    /// A clock at time zero scaling host seconds by `time_scale`.
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale,
            time: 0.0,
            frames: 0,
        }
    }

    /// Sets simulation time from the host's total elapsed seconds.
    ///
    /// Derived from the absolute host clock, never accumulated.
    pub fn advance(&mut self, host_elapsed_secs: f32) -> f32 {
        self.time = host_elapsed_secs * self.time_scale;
        self.frames += 1;
        self.time
    }

    /// Current simulation time.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Number of frames advanced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Configures the frame chain and owns the simulation clock.
pub struct SimulationPlugin(pub SimulationConfig);

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SimulationConfig>()
            .register_type::<SimulationClock>()
            .insert_resource(self.0.clone())
            .insert_resource(SimulationClock::new(self.0.time_scale))
            .configure_sets(
                Update,
                (
                    SimulationSet::Intake,
                    SimulationSet::ResolvePointer,
                    SimulationSet::AdvanceClock,
                    SimulationSet::UpdateGrid,
                    SimulationSet::Publish,
                )
                    .chain(),
            )
            .add_systems(Update, advance_clock.in_set(SimulationSet::AdvanceClock));
    }
}

fn advance_clock(time: Res<Time>, mut clock: ResMut<SimulationClock>) {
    clock.advance(time.elapsed_secs());
    if clock.frames() == 1 {
        debug!("simulation clock started (scale {})", clock.time_scale);
    }
}
