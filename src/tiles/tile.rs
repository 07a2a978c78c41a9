use bevy::prelude::*;

use super::MotionSettings;
use crate::math;
use crate::noise_field::NoiseField;

/// Default colors handed to each tile at construction.
///
/// Copied by value into every tile so that later per-tile color changes stay
/// local to that tile.
#[derive(Clone, Copy, Debug)]
pub struct TilePalette {
    /// Surface color.
    pub base: Color,
    /// Glow color.
    pub emissive: Color,
    /// Glow color override while focused.
    pub highlight: Color,
}

/// Read-only inputs shared by every tile for one frame.
pub struct FrameCtx<'a> {
    /// Simulation time.
    pub time: f32,
    /// World-space pointer target.
    pub target: Vec3,
    /// Yaw added per update (radians).
    pub rotation_speed: f32,
    /// Displacement noise.
    pub noise: &'a NoiseField,
    /// Motion and glow constants.
    pub motion: &'a MotionSettings,
}

/// One grid cell: fixed lattice placement plus volatile height, spin and glow.
#[derive(Clone, Debug)]
pub struct Tile {
    grid_position: UVec2,
    base_position: Vec2,
    height: f32,
    yaw: f32,
    base_color: Color,
    emissive_color: Color,
    highlight_color: Color,
    emissive_intensity: f32,
    is_focused: bool,
}

impl Tile {
    /// A resting, unlit tile at `base_position`.
    pub fn new(grid_position: UVec2, base_position: Vec2, palette: &TilePalette) -> Self {
        Self {
            grid_position,
            base_position,
            height: 0.0,
            yaw: 0.0,
            base_color: palette.base,
            emissive_color: palette.emissive,
            highlight_color: palette.highlight,
            emissive_intensity: 0.0,
            is_focused: false,
        }
    }

    /// Advances the tile by one frame.
    ///
    /// Height follows the noise field. Within the proximity radius of the
    /// target the tile snaps to peak glow in the ripple color; outside it the
    /// glow fades by a fixed step. Yaw always advances by the rotation speed.
    pub fn update(&mut self, frame: &FrameCtx) {
        let m = frame.motion;
        self.height = frame.noise.sample(
            self.base_position.x * m.noise_frequency,
            self.base_position.y * m.noise_frequency,
            frame.time,
        ) * m.height_scale;

        let distance = self.position().distance(frame.target);
        if distance < m.proximity_radius {
            let hue = math::ripple_hue(frame.time, distance, m.hue_distance_falloff);
            let color = math::hsl_color(hue, m.ripple_saturation, m.ripple_lightness);
            self.base_color = color;
            self.emissive_color = color;
            self.emissive_intensity = m.peak_intensity;
        } else {
            self.emissive_intensity = math::decay_intensity(self.emissive_intensity, m.decay_step);
        }

        self.yaw = (self.yaw + frame.rotation_speed).rem_euclid(std::f32::consts::TAU);
    }

    /// Marks the tile as explicitly selected (or not).
    ///
    /// While focused the displayed glow color is the highlight color; the
    /// tile's own emissive color is kept and shows again once unfocused.
    pub fn set_focused(&mut self, is_focused: bool) {
        self.is_focused = is_focused;
    }

    /// Overwrites the surface color.
    pub fn set_base_color(&mut self, color: Color) {
        self.base_color = color;
    }

    /// Overwrites the glow color.
    pub fn set_emissive_color(&mut self, color: Color) {
        self.emissive_color = color;
    }

    /// Lattice `(column, row)`.
    pub fn grid_position(&self) -> UVec2 {
        self.grid_position
    }

    /// Resting `(x, y)` in world space.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn base_position(&self) -> Vec2 {
        self.base_position
    }

    /// Current world position, with the noise height on z.
    pub fn position(&self) -> Vec3 {
        self.base_position.extend(self.height)
    }

    /// Accumulated spin about the tile's vertical axis, in `[0, TAU)`.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Orientation handed to the renderer: a fixed `roll` about +Z, then the
    /// accumulated yaw about +Y.
    pub fn render_rotation(&self, roll: f32) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_z(roll)
    }

    /// Transform handed to the renderer.
    pub fn render_transform(&self, roll: f32) -> Transform {
        Transform::from_translation(self.position()).with_rotation(self.render_rotation(roll))
    }

    /// Current surface color.
    pub fn base_color(&self) -> Color {
        self.base_color
    }

    /// Glow color as presented to the renderer (highlight while focused).
    pub fn displayed_emissive(&self) -> Color {
        if self.is_focused {
            self.highlight_color
        } else {
            self.emissive_color
        }
    }

    /// Glow strength in `[0, peak]`.
    pub fn emissive_intensity(&self) -> f32 {
        self.emissive_intensity
    }
}
