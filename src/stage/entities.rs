use bevy::ecs::system::SystemParam;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::StageConfig;
use crate::math;

/// Marker component for the camera the pointer ray is cast from.
#[derive(Component, Reflect)]
pub struct StageCamera;

/// Orbit camera state: the camera sits `distance` away from `focus`,
/// turned by `yaw` about +Y and `pitch` about its local X.
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect)]
pub struct OrbitRig {
    /// Point the camera looks at.
    pub focus: Vec3,
    /// Distance from the focus.
    pub distance: f32,
    /// Rotation about +Y (radians).
    pub yaw: f32,
    /// Elevation (radians), kept short of vertical.
    pub pitch: f32,
}

impl OrbitRig {
    /// A rig looking at `focus` from `distance` along +Z.
    pub fn new(focus: Vec3, distance: f32) -> Self {
        Self {
            focus,
            distance,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Orbits around the focus; pitch stops `margin` short of the poles.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32, margin: f32) {
        self.yaw += delta_yaw;
        self.pitch += math::clamp_pitch(self.pitch, delta_pitch, margin);
    }

    /// Slides the focus in the view plane, scaled by distance.
    pub fn pan(&mut self, screen_delta: Vec2, right: Vec3, up: Vec3, sensitivity: f32) {
        let step = self.distance * sensitivity;
        self.focus += (-right * screen_delta.x + up * screen_delta.y) * step;
    }

    /// Moves toward (positive `amount`) or away from the focus.
    pub fn zoom(&mut self, amount: f32, min_distance: f32) {
        self.distance = (self.distance * (1.0 - amount)).max(min_distance);
    }

    /// Camera transform for the current rig state.
    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        Transform::from_translation(self.focus + rotation * Vec3::new(0.0, 0.0, self.distance))
            .looking_at(self.focus, Vec3::Y)
    }
}

/// Horizontal sway of a scene light: `x = amplitude * sin(rate * t + phase)`.
#[derive(Component, Reflect)]
pub struct SwayingLight {
    /// Peak offset along X.
    pub amplitude: f32,
    /// Angular rate in radians per host second.
    pub rate: f32,
    /// Phase offset in radians.
    pub phase: f32,
}

impl SwayingLight {
    /// X coordinate at `secs` host seconds.
    pub fn x_at(&self, secs: f32) -> f32 {
        self.amplitude * (self.rate * secs + self.phase).sin()
    }
}

/// Bundled input for the orbit camera system.
#[derive(SystemParam)]
pub struct OrbitInput<'w, 's> {
    /// Mouse buttons (left orbits, right pans).
    pub buttons: Res<'w, ButtonInput<MouseButton>>,
    /// Raw mouse motion.
    pub motion: MessageReader<'w, 's, MouseMotion>,
    /// Wheel zoom.
    pub scroll: MessageReader<'w, 's, MouseWheel>,
    /// Used to leave the pointer to egui windows.
    pub egui: EguiContexts<'w, 's>,
    /// Camera tuning.
    pub cfg: Res<'w, StageConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "got {a:?}, expected {b:?}");
    }

    // ── orbit rig ───────────────────────────────────────────────────

    #[test]
    fn home_rig_sits_on_positive_z_looking_at_focus() {
        let tf = OrbitRig::new(Vec3::ZERO, 8.0).transform();
        assert_near(tf.translation, Vec3::new(0.0, 0.0, 8.0));
        assert_near(*tf.forward(), Vec3::NEG_Z);
    }

    #[test]
    fn rotation_keeps_distance() {
        let mut rig = OrbitRig::new(Vec3::new(1.0, 2.0, 0.0), 8.0);
        rig.rotate(0.7, 0.4, 0.05);
        let tf = rig.transform();
        assert!((tf.translation.distance(rig.focus) - 8.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_stops_short_of_vertical() {
        let mut rig = OrbitRig::new(Vec3::ZERO, 8.0);
        rig.rotate(0.0, 10.0, 0.05);
        assert!((rig.pitch - (std::f32::consts::FRAC_PI_2 - 0.05)).abs() < 1e-5);
    }

    #[test]
    fn zoom_respects_minimum_distance() {
        let mut rig = OrbitRig::new(Vec3::ZERO, 8.0);
        rig.zoom(0.5, 1.0);
        assert!((rig.distance - 4.0).abs() < 1e-6);
        rig.zoom(0.99, 1.0);
        assert_eq!(rig.distance, 1.0);
    }

    #[test]
    fn pan_moves_focus_against_drag() {
        let mut rig = OrbitRig::new(Vec3::ZERO, 10.0);
        rig.pan(Vec2::new(100.0, 0.0), Vec3::X, Vec3::Y, 0.001);
        assert_near(rig.focus, Vec3::new(-1.0, 0.0, 0.0));
    }

    // ── swaying light ───────────────────────────────────────────────

    #[test]
    fn sine_and_cosine_sway() {
        let sine = SwayingLight {
            amplitude: 5.0,
            rate: 1.0,
            phase: 0.0,
        };
        let cosine = SwayingLight {
            amplitude: 5.0,
            rate: 1.0,
            phase: std::f32::consts::FRAC_PI_2,
        };
        assert!(sine.x_at(0.0).abs() < 1e-6);
        assert!((cosine.x_at(0.0) - 5.0).abs() < 1e-5);
        assert!((sine.x_at(std::f32::consts::FRAC_PI_2) - 5.0).abs() < 1e-5);
    }
}
