//! Live-tunable tile parameters and the panel that edits them.
//!
//! [`TileParams`] is the single writer of rotation speed and the default tile
//! colors. Every setter clamps its input and returns the [`ParamChange`] that
//! the tile grid must apply; the panel forwards those as messages.

mod systems;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Initial parameter values and bounds.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct ParamsConfig {
    /// Initial per-frame rotation in radians.
    pub rotation_speed: f32,
    /// Upper bound for rotation speed (the lower bound is zero).
    pub max_rotation_speed: f32,
    /// Default tile surface color.
    pub base_color: Color,
    /// Default tile glow color.
    pub emissive_color: Color,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 0.01,
            max_rotation_speed: 0.1,
            base_color: Color::WHITE,
            emissive_color: Color::srgb(1.0, 0.0, 0.0),
        }
    }
}

/// A parameter edit that tiles must observe.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum ParamChange {
    /// New per-frame rotation speed (already clamped).
    RotationSpeed(f32),
    /// New base color for every tile.
    BaseColor(Color),
    /// New default emissive color for every tile.
    EmissiveColor(Color),
}

/// Request to move the camera back to its home pose.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ResetCamera;

/// Process-wide tunable values read by every tile.
#[derive(Resource, Debug)]
pub struct TileParams {
    rotation_speed: f32,
    max_rotation_speed: f32,
    base_color: Color,
    emissive_color: Color,
}

impl TileParams {
    /// Builds the store from config, clamping the initial rotation speed.
    pub fn from_config(cfg: &ParamsConfig) -> Self {
        let mut params = Self {
            rotation_speed: 0.0,
            max_rotation_speed: cfg.max_rotation_speed.max(0.0),
            base_color: cfg.base_color,
            emissive_color: cfg.emissive_color,
        };
        params.set_rotation_speed(cfg.rotation_speed);
        params
    }

    /// Per-frame rotation in radians, always within `[0, max_rotation_speed]`.
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Upper bound accepted by [`Self::set_rotation_speed`].
    pub fn max_rotation_speed(&self) -> f32 {
        self.max_rotation_speed
    }

    /// Default tile surface color.
    pub fn base_color(&self) -> Color {
        self.base_color
    }

    /// Default tile glow color.
    pub fn emissive_color(&self) -> Color {
        self.emissive_color
    }

    /// Sets rotation speed, clamped to `[0, max]`. NaN is treated as zero.
    pub fn set_rotation_speed(&mut self, speed: f32) -> ParamChange {
        let speed = if speed.is_nan() { 0.0 } else { speed };
        self.rotation_speed = speed.clamp(0.0, self.max_rotation_speed);
        ParamChange::RotationSpeed(self.rotation_speed)
    }

    /// Sets the default surface color.
    pub fn set_base_color(&mut self, color: Color) -> ParamChange {
        self.base_color = color;
        ParamChange::BaseColor(color)
    }

    /// Sets the default glow color.
    pub fn set_emissive_color(&mut self, color: Color) -> ParamChange {
        self.emissive_color = color;
        ParamChange::EmissiveColor(color)
    }
}

/// Parameter store, change messages, and the egui parameter panel.
pub struct ParamsPlugin(pub ParamsConfig);

impl Plugin for ParamsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ParamsConfig>()
            .insert_resource(self.0.clone())
            .insert_resource(TileParams::from_config(&self.0))
            .add_message::<ParamChange>()
            .add_message::<ResetCamera>()
            .add_systems(EguiPrimaryContextPass, systems::draw_parameter_panel);
    }
}
