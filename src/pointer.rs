//! Pointer projection: screen cursor → world-space target on the interaction plane.
//!
//! The cursor is sampled in viewport pixels during intake. Once per frame the
//! stage camera casts a ray through the latest sample; a hit moves
//! [`PointerTarget`], a miss leaves it where it was.

mod entities;
mod projector;
mod systems;

pub use entities::PointerTarget;

use bevy::prelude::*;

use crate::simulation::SimulationSet;
use projector::{InteractionPlane, PointerProjector};

/// Configuration for pointer projection.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct PointerConfig {
    /// Center of the interaction plane.
    pub plane_center: Vec3,
    /// Width and height of the interaction plane.
    pub plane_size: Vec2,
    /// Target position before the first hit (outside the grid).
    pub initial_target: Vec3,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            plane_center: Vec3::ZERO,
            plane_size: Vec2::splat(12.0),
            initial_target: Vec3::new(20.0, 20.0, 0.0),
        }
    }
}

/// Pointer intake, ray resolution, and click diagnostics.
pub struct PointerPlugin(pub PointerConfig);

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        let plane = InteractionPlane::new(self.0.plane_center, self.0.plane_size);
        app.register_type::<PointerConfig>()
            .register_type::<PointerTarget>()
            .insert_resource(self.0.clone())
            .insert_resource(PointerTarget::new(self.0.initial_target))
            .insert_resource(PointerProjector::new(plane))
            .add_systems(Update, systems::track_pointer.in_set(SimulationSet::Intake))
            .add_systems(
                Update,
                systems::resolve_pointer_target.in_set(SimulationSet::ResolvePointer),
            )
            .add_systems(
                Update,
                systems::report_clicks.after(SimulationSet::ResolvePointer),
            );
    }
}
