//! Continuous 3D noise driving tile displacement.

use bevy::prelude::*;
use noise::{NoiseFn, Perlin};

use crate::math;

/// Deterministic gradient-noise field sampled at `(x, y, time)`.
///
/// Wraps improved Perlin noise; the only state is the seeded permutation
/// table, so identical inputs always produce identical output.
#[derive(Resource, Clone)]
pub struct NoiseField {
    perlin: Perlin,
}

impl NoiseField {
    /// Builds a field from a permutation seed.
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Samples the field, always returning a finite value in `[-1, 1]`.
    pub fn sample(&self, x: f32, y: f32, t: f32) -> f32 {
        math::sanitize_noise(self.perlin.get([x as f64, y as f64, t as f64]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_give_identical_output() {
        let field = NoiseField::new(0);
        for i in 0..50 {
            let x = i as f32 * 0.137 - 3.0;
            let y = i as f32 * 0.071 + 1.5;
            let t = i as f32 * 0.01;
            assert_eq!(field.sample(x, y, t), field.sample(x, y, t));
        }
    }

    #[test]
    fn fields_with_same_seed_agree() {
        let a = NoiseField::new(7);
        let b = NoiseField::new(7);
        assert_eq!(a.sample(0.4, -1.2, 3.3), b.sample(0.4, -1.2, 3.3));
    }

    #[test]
    fn output_is_bounded_and_finite() {
        let field = NoiseField::new(0);
        for i in 0..400 {
            let v = field.sample(i as f32 * 0.33, i as f32 * -0.21, i as f32 * 0.05);
            assert!(v.is_finite());
            assert!((-1.0..=1.0).contains(&v), "sample {v} out of range");
        }
    }

    #[test]
    fn extreme_inputs_stay_finite() {
        let field = NoiseField::new(0);
        let v = field.sample(1.0e6 + 0.5, -2.5e6, 3.0e5 + 0.25);
        assert!(v.is_finite());
    }

    #[test]
    fn lattice_points_are_zero() {
        let field = NoiseField::new(0);
        assert_eq!(field.sample(0.0, 0.0, 0.0), 0.0);
        assert_eq!(field.sample(2.0, -3.0, 1.0), 0.0);
    }

    #[test]
    fn neighbouring_cells_change_gradually() {
        // Adjacent tiles are 0.2 apart at frequency 0.33.
        let field = NoiseField::new(0);
        let step = 0.2 * 0.33;
        for i in 0..100 {
            let x = i as f32 * step;
            let a = field.sample(x, 0.7, 0.3);
            let b = field.sample(x + step, 0.7, 0.3);
            assert!((a - b).abs() < 0.5, "jump of {} at x={x}", (a - b).abs());
        }
    }

    #[test]
    fn small_time_steps_change_gradually() {
        let field = NoiseField::new(0);
        let mut prev = field.sample(1.3, -0.4, 0.0);
        for frame in 1..200 {
            let t = frame as f32 * 0.0083;
            let v = field.sample(1.3, -0.4, t);
            assert!((v - prev).abs() < 0.1);
            prev = v;
        }
    }
}
