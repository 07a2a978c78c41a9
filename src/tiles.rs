//! Tile grid: lattice construction, per-frame noise/proximity update, and
//! publishing tile state onto render entities.

mod entities;
mod startup_systems;
mod systems;
mod tile;
mod tile_grid;

pub use entities::{TileBoard, TileFace};

use bevy::prelude::*;

use crate::noise_field::NoiseField;
use crate::simulation::SimulationSet;

/// Nested configuration for the tile subsystem.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct TilesConfig {
    /// Lattice layout.
    pub lattice: LatticeSettings,
    /// Noise displacement, proximity glow, and decay constants.
    pub motion: MotionSettings,
    /// Geometry and material constants.
    pub appearance: AppearanceSettings,
}

/// Column/row layout of the tile lattice.
#[derive(Clone, Debug, Reflect)]
pub struct LatticeSettings {
    /// Number of columns (x direction).
    pub num_cols: u32,
    /// Number of rows (y direction).
    pub num_rows: u32,
    /// Distance between columns; odd columns also drop by this much in y.
    pub spacing_x: f32,
    /// Distance between rows.
    pub spacing_y: f32,
    /// World x of column 0.
    pub start_x: f32,
    /// World y of row 0 in even columns.
    pub start_y: f32,
}

/// Per-frame motion and glow constants.
#[derive(Clone, Debug, Reflect)]
pub struct MotionSettings {
    /// Seed for the displacement noise permutation table.
    pub noise_seed: u32,
    /// Spatial frequency applied to tile positions before sampling noise.
    pub noise_frequency: f32,
    /// Noise-to-height multiplier.
    pub height_scale: f32,
    /// Distance to the pointer target below which a tile lights up.
    pub proximity_radius: f32,
    /// Emissive intensity set while a tile is within the radius.
    pub peak_intensity: f32,
    /// Emissive intensity lost per update outside the radius.
    pub decay_step: f32,
    /// How much the ripple hue lags per unit of distance from the target.
    pub hue_distance_falloff: f32,
    /// Saturation of the ripple color.
    pub ripple_saturation: f32,
    /// Lightness of the ripple color.
    pub ripple_lightness: f32,
}

/// Tile geometry and material constants.
#[derive(Clone, Debug, Reflect)]
pub struct AppearanceSettings {
    /// Edge length of the tile cube.
    pub tile_size: f32,
    /// Fixed roll about +Z applied before the spinning yaw (degrees).
    pub roll_degrees: f32,
    /// Emissive color shown while a tile is focused.
    pub highlight_color: Color,
    /// Multiplier from `[0, 1]` emissive intensity to HDR radiance.
    pub emissive_gain: f32,
}

impl Default for TilesConfig {
    fn default() -> Self {
        Self {
            lattice: LatticeSettings {
                num_cols: 50,
                num_rows: 26,
                spacing_x: 0.2,
                spacing_y: 0.4,
                start_x: -5.0,
                start_y: -5.0,
            },
            motion: MotionSettings {
                noise_seed: 0,
                noise_frequency: 0.33,
                height_scale: 0.5,
                proximity_radius: 0.5,
                peak_intensity: 0.5,
                decay_step: 0.005,
                hue_distance_falloff: 0.1,
                ripple_saturation: 1.0,
                ripple_lightness: 0.5,
            },
            appearance: AppearanceSettings {
                tile_size: 0.2,
                roll_degrees: 45.0,
                highlight_color: Color::srgb_u8(0xff, 0x99, 0x00),
                emissive_gain: 8.0,
            },
        }
    }
}

/// Tile plugin: lattice spawn at startup, simulation and publishing per frame.
pub struct TilesPlugin(pub TilesConfig);

impl Plugin for TilesPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<TilesConfig>()
            .register_type::<TileFace>()
            .insert_resource(self.0.clone())
            .insert_resource(NoiseField::new(self.0.motion.noise_seed))
            .add_systems(Startup, startup_systems::spawn_tiles)
            .add_systems(
                Update,
                systems::apply_param_changes.in_set(SimulationSet::Intake),
            )
            .add_systems(
                Update,
                systems::update_tiles
                    .in_set(SimulationSet::UpdateGrid)
                    .run_if(any_with_component::<TileBoard>),
            )
            .add_systems(
                Update,
                systems::publish_tile_visuals
                    .in_set(SimulationSet::Publish)
                    .run_if(any_with_component::<TileBoard>),
            );
    }
}
