//! Summed wave trains producing the ocean displacement.
//!
//! The model is a stylized Gerstner variant: the phase advances at the
//! deep-water dispersion frequency plus a per-train speed term, and the
//! horizontal steepness factor is `choppiness / (k·L·0.01 + ε)`.
//!
//! ## Usage
//!
//! ```rust
//! use sim::water::{OceanConfig, WaveField};
//!
//! let field = WaveField::new(&OceanConfig::default());
//! let height = field.height(10.0, 5.0, 0.5);
//! ```

use bevy::math::{Vec2, Vec3};
use std::f32::consts::TAU;

use super::config::OceanConfig;
use crate::constants::{AMPLITUDE_FALLOFF_STEP, CHOPPINESS_EPSILON, GRAVITY};

/// A single configured wave train with its derived constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveTrain {
    /// Normalized direction (x, z)
    pub direction: Vec2,
    pub wavelength: f32,
    /// Wave number k = 2π / wavelength
    pub wavenumber: f32,
    pub amplitude: f32,
    /// Angular frequency ω = sqrt(g·k)
    pub omega: f32,
    /// Extra phase speed added to ω
    pub speed: f32,
    /// Horizontal steepness Q
    pub steepness: f32,
}

impl WaveTrain {
    fn new(
        index: usize,
        direction: Vec2,
        wavelength: f32,
        speed: f32,
        weight: f32,
        amplitude: f32,
        choppiness: f32,
    ) -> Self {
        let wavenumber = TAU / wavelength;
        Self {
            direction: direction.normalize_or_zero(),
            wavelength,
            wavenumber,
            amplitude: amplitude * weight * (1.0 - index as f32 * AMPLITUDE_FALLOFF_STEP),
            omega: (GRAVITY * wavenumber).sqrt(),
            speed,
            steepness: choppiness / (wavenumber * wavelength * 0.01 + CHOPPINESS_EPSILON),
        }
    }

    #[inline]
    pub fn phase(&self, x: f32, z: f32, time: f32) -> f32 {
        let along = self.direction.x * x + self.direction.y * z;
        self.wavenumber * along - (self.omega + self.speed) * time
    }

    /// Displacement contributed by this train alone.
    #[inline]
    pub fn displacement(&self, x: f32, z: f32, time: f32) -> Vec3 {
        let (sin_phase, cos_phase) = self.phase(x, z, time).sin_cos();
        let horizontal = self.steepness * self.amplitude * cos_phase;
        Vec3::new(
            horizontal * self.direction.x,
            self.amplitude * sin_phase,
            horizontal * self.direction.y,
        )
    }
}

/// Ordered set of wave trains plus the rest level of the surface.
///
/// Immutable once built, so it can be queried from any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveField {
    trains: Vec<WaveTrain>,
    level_y: f32,
}

impl WaveField {
    pub fn new(config: &OceanConfig) -> Self {
        let trains = config
            .trains
            .iter()
            .enumerate()
            .map(|(i, train)| {
                WaveTrain::new(
                    i,
                    train.direction,
                    train.wavelength,
                    train.speed,
                    train.weight,
                    config.amplitude,
                    config.choppiness,
                )
            })
            .collect();

        Self {
            trains,
            level_y: config.level_y,
        }
    }

    pub fn trains(&self) -> &[WaveTrain] {
        &self.trains
    }

    pub fn level_y(&self) -> f32 {
        self.level_y
    }

    /// Total displacement `(dx, dy, dz)` at `(x, z)` and time `t`.
    pub fn displacement(&self, x: f32, z: f32, time: f32) -> Vec3 {
        self.trains
            .iter()
            .fold(Vec3::ZERO, |acc, train| acc + train.displacement(x, z, time))
    }

    /// World height of the surface above `(x, z)`.
    pub fn height(&self, x: f32, z: f32, time: f32) -> f32 {
        self.level_y + self.displacement(x, z, time).y
    }

    /// Where a vertex resting at `base` ends up after displacement.
    /// The base y is replaced by the ocean level.
    pub fn displaced_position(&self, base: Vec3, time: f32) -> Vec3 {
        let d = self.displacement(base.x, base.z, time);
        Vec3::new(base.x + d.x, self.level_y + d.y, base.z + d.z)
    }

    /// Displace every vertex of `base` into `out`.
    ///
    /// Both buffers belong to the caller; `out` must be at least as long as `base`.
    pub fn apply_to_grid(&self, base: &[[f32; 3]], out: &mut [[f32; 3]], time: f32) {
        debug_assert!(out.len() >= base.len());

        for (src, dst) in base.iter().zip(out.iter_mut()) {
            let p = self.displaced_position(Vec3::from_array(*src), time);
            *dst = p.to_array();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::water::config::{OceanPreset, WaveTrainConfig};

    fn island_field() -> WaveField {
        WaveField::new(&OceanPreset::Islands.to_config(0.0))
    }

    #[test]
    fn test_origin_regression_fixture() {
        let d = island_field().displacement(0.0, 0.0, 0.0);
        assert!(d.y.abs() < 1e-4, "dy at origin should vanish, got {}", d.y);
        assert!((d.x - 322.178).abs() < 0.05, "dx = {}", d.x);
        assert!((d.z - 404.361).abs() < 0.05, "dz = {}", d.z);
    }

    #[test]
    fn test_amplitude_falls_off_per_train() {
        let amplitudes: Vec<f32> = island_field().trains().iter().map(|t| t.amplitude).collect();
        assert!((amplitudes[0] - 20.0).abs() < 1e-5);
        assert!((amplitudes[1] - 16.0).abs() < 1e-5);
        assert!((amplitudes[2] - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_displacement_is_finite() {
        let field = island_field();
        for &x in &[-8000.0, -123.4, 0.0, 0.5, 7999.0] {
            for &z in &[-8000.0, -1.0, 0.0, 42.0, 8000.0] {
                for &t in &[0.0, 0.016, 3.5, 600.0] {
                    let d = field.displacement(x, z, t);
                    assert!(d.is_finite(), "non-finite at ({x}, {z}, {t}): {d:?}");
                }
            }
        }
    }

    #[test]
    fn test_tiny_wavelength_stays_finite() {
        let mut config = OceanPreset::Islands.to_config(0.0);
        config.trains.push(WaveTrainConfig::new(0.0, 1.0, 1e-6, 1.0));
        let field = WaveField::new(&config);
        assert!(field.displacement(3.0, 4.0, 1.0).is_finite());
    }

    #[test]
    fn test_displacement_is_deterministic() {
        let a = island_field();
        let b = island_field();
        assert_eq!(a.displacement(12.5, -40.0, 2.25), b.displacement(12.5, -40.0, 2.25));
        assert_eq!(a.displacement(12.5, -40.0, 2.25), a.displacement(12.5, -40.0, 2.25));
    }

    #[test]
    fn test_displacement_is_continuous_in_time() {
        let field = island_field();
        let dt = 1e-4;
        let mut t = 0.0;
        while t < 5.0 {
            let a = field.displacement(150.0, -75.0, t);
            let b = field.displacement(150.0, -75.0, t + dt);
            // Summed horizontal speed is bounded by roughly 6700 units/s.
            assert!((a - b).length() < 1.0, "jump at t = {t}: {a:?} -> {b:?}");
            t += 0.25;
        }
    }

    #[test]
    fn test_displacement_is_continuous_in_space() {
        let field = island_field();
        let a = field.displacement(1000.0, 1000.0, 1.0);
        let b = field.displacement(1000.001, 1000.0, 1.0);
        assert!((a - b).length() < 0.05);
    }

    #[test]
    fn test_still_water_is_flat() {
        let field = WaveField::new(&OceanPreset::Still.to_config(-250.0));
        assert_eq!(field.height(10.0, 20.0, 3.0), -250.0);
        assert_eq!(field.displacement(10.0, 20.0, 3.0), Vec3::ZERO);
    }

    #[test]
    fn test_height_varies_with_time() {
        let field = island_field();
        let h1 = field.height(0.0, 0.0, 0.0);
        let h2 = field.height(0.0, 0.0, 0.1);
        assert!((h1 - h2).abs() > 0.01);
    }

    #[test]
    fn test_apply_to_grid_matches_point_queries() {
        let field = WaveField::new(&OceanPreset::Islands.to_config(-250.0));
        let base = [[0.0, 0.0, 0.0], [100.0, 0.0, -50.0], [-800.0, 0.0, 800.0]];
        let mut out = [[0.0; 3]; 3];
        field.apply_to_grid(&base, &mut out, 1.5);

        for (src, dst) in base.iter().zip(out.iter()) {
            let d = field.displacement(src[0], src[2], 1.5);
            assert_eq!(dst[0], src[0] + d.x);
            assert_eq!(dst[1], -250.0 + d.y);
            assert_eq!(dst[2], src[2] + d.z);
        }
    }
}
