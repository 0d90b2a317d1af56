//! Day/night sky blend driven by the relative heights of sun and moon.
//!
//! Colours chase their target exponentially so a sunrise fades in over a
//! few frames instead of snapping. Light intensities follow the light
//! directions directly.

use bevy::color::{Mix, Srgba};
use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use super::orbit::CelestialFrame;
use crate::constants::SKY_SMOOTHING_RATE;

const BLEND_EPSILON: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPalette {
    pub day_top: Srgba,
    pub day_bottom: Srgba,
    pub night_top: Srgba,
    pub night_bottom: Srgba,
}

impl Default for SkyPalette {
    fn default() -> Self {
        Self {
            day_top: Srgba::rgb(0.58, 0.75, 0.96),
            day_bottom: Srgba::rgb(0.85, 0.93, 1.00),
            night_top: Srgba::rgb(0.04, 0.07, 0.12),
            night_bottom: Srgba::rgb(0.00, 0.02, 0.08),
        }
    }
}

/// 0 when the moon dominates, 1 when the sun does.
pub fn blend_factor(sun_height: f32, moon_height: f32) -> f32 {
    let raw = (sun_height - moon_height) / (sun_height.abs() + moon_height.abs() + BLEND_EPSILON);
    (0.5 + 0.5 * raw).clamp(0.0, 1.0)
}

/// `(sun, moon)` light intensities for the given light directions.
pub fn light_intensities(sun_direction: Vec3, moon_direction: Vec3) -> (f32, f32) {
    let day_factor = (-sun_direction.y).max(0.0);
    let night_factor = (-moon_direction.y).max(0.0);
    (1.05 + 0.9 * day_factor, 0.22 + 0.25 * night_factor)
}

/// Sky output for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyState {
    pub top: Srgba,
    pub bottom: Srgba,
    pub blend: f32,
    pub sun_intensity: f32,
    pub moon_intensity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayNightBlend {
    palette: SkyPalette,
    smoothing_rate: f32,
    state: SkyState,
}

impl DayNightBlend {
    /// Starts from the night palette.
    pub fn new(palette: SkyPalette) -> Self {
        Self {
            palette,
            smoothing_rate: SKY_SMOOTHING_RATE,
            state: SkyState {
                top: palette.night_top,
                bottom: palette.night_bottom,
                blend: 0.0,
                sun_intensity: 1.6,
                moon_intensity: 0.35,
            },
        }
    }

    pub fn with_smoothing_rate(mut self, rate: f32) -> Self {
        self.smoothing_rate = rate;
        self
    }

    pub fn state(&self) -> &SkyState {
        &self.state
    }

    pub fn palette(&self) -> &SkyPalette {
        &self.palette
    }

    pub fn update(&mut self, frame: &CelestialFrame, dt: f32) -> SkyState {
        let k = blend_factor(frame.sun_height, frame.moon_height);
        let target_top = self.palette.night_top.mix(&self.palette.day_top, k);
        let target_bottom = self.palette.night_bottom.mix(&self.palette.day_bottom, k);
        let approach = (dt * self.smoothing_rate).min(1.0);

        let (sun_intensity, moon_intensity) =
            light_intensities(frame.sun_direction, frame.moon_direction);

        self.state = SkyState {
            top: self.state.top.mix(&target_top, approach),
            bottom: self.state.bottom.mix(&target_bottom, approach),
            blend: k,
            sun_intensity,
            moon_intensity,
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(sun_height: f32, moon_height: f32) -> CelestialFrame {
        CelestialFrame {
            sun_position: Vec3::new(0.0, sun_height, 10.0),
            moon_position: Vec3::new(0.0, moon_height, -10.0),
            sun_direction: Vec3::new(0.0, -sun_height, -10.0).normalize(),
            moon_direction: Vec3::new(0.0, -moon_height, 10.0).normalize(),
            sun_height,
            moon_height,
        }
    }

    fn close(a: Srgba, b: Srgba) -> bool {
        (a.red - b.red).abs() < 1e-4 && (a.green - b.green).abs() < 1e-4 && (a.blue - b.blue).abs() < 1e-4
    }

    #[test]
    fn test_blend_factor_is_monotonic_in_sun_height() {
        let moon = -300.0;
        let mut previous = blend_factor(-2000.0, moon);
        let mut sun = -2000.0;
        while sun <= 2000.0 {
            let k = blend_factor(sun, moon);
            assert!(k >= previous - 1e-6, "k dropped from {previous} to {k} at sun = {sun}");
            assert!((0.0..=1.0).contains(&k));
            previous = k;
            sun += 25.0;
        }
    }

    #[test]
    fn test_blend_factor_extremes() {
        assert!((blend_factor(1750.0, -1750.0) - 1.0).abs() < 1e-5);
        assert!(blend_factor(-1750.0, 1750.0).abs() < 1e-5);
        assert!((blend_factor(0.0, 0.0) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_light_intensities() {
        let (sun, moon) = light_intensities(Vec3::NEG_Y, Vec3::Y);
        assert!((sun - 1.95).abs() < 1e-5);
        assert!((moon - 0.22).abs() < 1e-5);
    }

    #[test]
    fn test_colors_approach_target_gradually() {
        let palette = SkyPalette::default();
        let mut blend = DayNightBlend::new(palette);
        let day = frame(1000.0, -1000.0);

        let first = blend.update(&day, 0.1);
        // approach = 0.2 of the way from night to day
        let expected = palette.night_top.mix(&palette.day_top, 0.2);
        assert!(close(first.top, expected), "{:?} vs {:?}", first.top, expected);

        let mut state = first;
        for _ in 0..200 {
            state = blend.update(&day, 0.05);
        }
        assert!(close(state.top, palette.day_top));
        assert!(close(state.bottom, palette.day_bottom));
    }

    #[test]
    fn test_large_dt_snaps_to_target() {
        let palette = SkyPalette::default();
        let mut blend = DayNightBlend::new(palette);
        let state = blend.update(&frame(1000.0, -1000.0), 1.0);
        assert!(close(state.top, palette.day_top));
    }
}
