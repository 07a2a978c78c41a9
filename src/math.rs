//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / color inputs, making them straightforward to unit-test.

use bevy::prelude::{Color, LinearRgba};

/// Hue of the proximity ripple, wrapped into `[0, 1)`.
///
/// The hue advances with simulation time and lags behind with distance from
/// the pointer target, so rings of color travel outward from the pointer.
pub fn ripple_hue(time: f32, distance: f32, distance_falloff: f32) -> f32 {
    (time - distance * distance_falloff).rem_euclid(1.0)
}

/// Converts a hue in turns (`[0, 1)`, wrapped) plus saturation and lightness
/// into a [`Color`].
pub fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color {
    Color::hsl(hue.rem_euclid(1.0) * 360.0, saturation, lightness)
}

/// 8-bit sRGB channels of a color, as edited by color pickers.
pub fn to_srgb_u8(color: Color) -> [u8; 3] {
    let c = color.to_srgba();
    [c.red, c.green, c.blue].map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// One decay step of an emissive intensity, floored at zero.
pub fn decay_intensity(current: f32, step: f32) -> f32 {
    (current - step).max(0.0)
}

/// Scales a color into the HDR radiance handed to the renderer's emissive slot.
///
/// `gain` lifts the `[0, 1]` intensity into the range where bloom picks it up.
pub fn emissive_radiance(color: Color, intensity: f32, gain: f32) -> LinearRgba {
    let linear = color.to_linear();
    let k = intensity.max(0.0) * gain;
    LinearRgba::rgb(linear.red * k, linear.green * k, linear.blue * k)
}

/// Replaces non-finite noise output with zero and clamps the rest to `[-1, 1]`.
pub fn sanitize_noise(value: f64) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0) as f32
    } else {
        0.0
    }
}

/// Clamps a pitch angle so the camera cannot flip past vertical.
///
/// `current` is the existing pitch in radians and `delta` the desired change.
/// The result is clamped to `(-PI/2 + margin, PI/2 - margin)` and the
/// *effective* delta is returned (i.e. how much to actually rotate).
pub fn clamp_pitch(current: f32, delta: f32, margin: f32) -> f32 {
    let limit = std::f32::consts::FRAC_PI_2 - margin;
    let clamped = (current + delta).clamp(-limit, limit);
    clamped - current
}
