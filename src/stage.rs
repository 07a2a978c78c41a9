//! Scene staging: the orbiting bloom camera, the two swaying point lights, a
//! dim ambient fill and the clear color.
//!
//! The camera's home pose is `(0, 0, 8)` looking at the origin. A
//! [`ResetCamera`](crate::params::ResetCamera) request snaps it back there.

mod entities;
mod systems;

pub use entities::StageCamera;

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::simulation::SimulationSet;
use entities::{OrbitRig, SwayingLight};

/// Lens, bloom and orbit tuning for the stage camera.
#[derive(Clone, Debug, Reflect)]
pub struct CameraSettings {
    /// Point the home pose looks at.
    pub home_focus: Vec3,
    /// Distance of the home pose from its focus (along +Z).
    pub home_distance: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Bloom post-processing intensity.
    pub bloom_intensity: f32,
    /// Orbit speed (radians per pixel of left drag).
    pub rotate_sensitivity: f32,
    /// Pan speed (fraction of distance per pixel of right drag).
    pub pan_sensitivity: f32,
    /// Zoom fraction per scroll line.
    pub zoom_sensitivity: f32,
    /// Closest the camera may zoom toward its focus.
    pub min_distance: f32,
    /// Margin from vertical to prevent camera flip (radians).
    pub pitch_margin: f32,
}

/// One swaying point light.
#[derive(Clone, Debug, Reflect)]
pub struct LightSettings {
    /// Entity name.
    pub label: String,
    /// Light color.
    pub color: Color,
    /// Rest position; X is overwritten by the sway.
    pub position: Vec3,
    /// Luminous power in lumens.
    pub intensity: f32,
    /// Cut-off range.
    pub range: f32,
    /// Peak X offset of the sway.
    pub sway_amplitude: f32,
    /// Sway rate in radians per host second.
    pub sway_rate: f32,
    /// Sway phase in radians (`π/2` turns sine into cosine).
    pub sway_phase: f32,
}

/// Per-plugin configuration for the stage.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct StageConfig {
    /// Camera lens and controls.
    pub camera: CameraSettings,
    /// Point lights spawned at startup.
    pub lights: Vec<LightSettings>,
    /// Background color.
    pub clear_color: Color,
    /// Scene-wide ambient fill color.
    pub ambient_color: Color,
    /// Ambient brightness in cd/m².
    pub ambient_brightness: f32,
}

impl StageConfig {
    /// Ambient fill light for the whole scene.
    pub fn ambient_light(&self) -> GlobalAmbientLight {
        GlobalAmbientLight {
            color: self.ambient_color,
            brightness: self.ambient_brightness,
            ..default()
        }
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        let light = |label: &str, color: Color, position: Vec3, sway_phase: f32| LightSettings {
            label: label.into(),
            color,
            position,
            intensity: 400_000.0,
            range: 50.0,
            sway_amplitude: 5.0,
            sway_rate: 1.0,
            sway_phase,
        };
        Self {
            camera: CameraSettings {
                home_focus: Vec3::ZERO,
                home_distance: 8.0,
                fov_degrees: 75.0,
                near: 0.1,
                far: 1000.0,
                bloom_intensity: 0.3,
                rotate_sensitivity: 0.005,
                pan_sensitivity: 0.001,
                zoom_sensitivity: 0.1,
                min_distance: 0.5,
                pitch_margin: 0.05,
            },
            lights: vec![
                light(
                    "MagentaLight",
                    Color::srgb(1.0, 0.0, 1.0),
                    Vec3::new(5.0, 5.0, 5.0),
                    0.0,
                ),
                light(
                    "CyanLight",
                    Color::srgb(0.0, 1.0, 1.0),
                    Vec3::new(-5.0, -5.0, 5.0),
                    std::f32::consts::FRAC_PI_2,
                ),
            ],
            clear_color: Color::BLACK,
            ambient_color: Color::srgb_u8(0x40, 0x40, 0x40),
            ambient_brightness: 80.0,
        }
    }
}

/// Camera, orbit controls, camera reset and lights.
pub struct StagePlugin(pub StageConfig);

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<StageConfig>()
            .register_type::<StageCamera>()
            .register_type::<OrbitRig>()
            .register_type::<SwayingLight>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .insert_resource(self.0.ambient_light())
            .add_systems(Startup, systems::spawn_stage)
            .add_systems(
                Update,
                (systems::reset_camera, systems::orbit_camera)
                    .chain()
                    .before(SimulationSet::ResolvePointer),
            )
            .add_systems(Update, systems::sway_lights);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── scene resources ─────────────────────────────────────────────

    #[test]
    fn plugin_installs_dim_grey_ambient_and_black_background() {
        let mut app = App::new();
        app.add_plugins(StagePlugin(StageConfig::default()));

        let ambient = app.world().resource::<GlobalAmbientLight>();
        assert_eq!(ambient.color, Color::srgb_u8(0x40, 0x40, 0x40));
        assert_eq!(ambient.brightness, 80.0);
        assert_eq!(app.world().resource::<ClearColor>().0, Color::BLACK);
    }

    #[test]
    fn ambient_follows_config() {
        let cfg = StageConfig {
            ambient_color: Color::srgb(0.1, 0.2, 0.3),
            ambient_brightness: 5.0,
            ..StageConfig::default()
        };
        let ambient = cfg.ambient_light();
        assert_eq!(ambient.color, Color::srgb(0.1, 0.2, 0.3));
        assert_eq!(ambient.brightness, 5.0);
    }

    #[test]
    fn default_lights_match_scene_layout() {
        let cfg = StageConfig::default();
        let positions: Vec<Vec3> = cfg.lights.iter().map(|l| l.position).collect();
        assert_eq!(
            positions,
            vec![Vec3::new(5.0, 5.0, 5.0), Vec3::new(-5.0, -5.0, 5.0)]
        );
        assert!(cfg.lights.iter().all(|l| l.range == 50.0));
    }
}
