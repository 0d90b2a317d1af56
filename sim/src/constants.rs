use bevy::prelude::*;

/// Gravity used by the wave dispersion relation (m/s²)
pub const GRAVITY: f32 = 9.81;

/// Guards the choppiness divisor against degenerate wavelengths.
pub const CHOPPINESS_EPSILON: f32 = 1e-3;

/// Amplitude lost by each successive wave train (as a fraction of the global amplitude).
pub const AMPLITUDE_FALLOFF_STEP: f32 = 0.2;

pub const DEFAULT_SPRING: f32 = 4.0;
pub const DEFAULT_DAMPING: f32 = 2.5;
pub const DEFAULT_FLOATER_RADIUS: f32 = 50.0;

pub const DEFAULT_SEPARATION_ITERATIONS: u32 = 2;
pub const DEFAULT_SEPARATION_GAP: f32 = 60.0;
pub const BOUNDARY_CLAMP_FRACTION: f32 = 0.98;

/// Minimum distance kept between an island and the sun or moon.
pub const CELESTIAL_MIN_DISTANCE: f32 = 180.0;

pub const GROUND_Y: f32 = -200.0;
pub const SPHERE_RADIUS: f32 = 2500.0;
pub const SPHERE_EXTRA_LIFT: f32 = 2100.0;
pub const SPHERE_CENTER: Vec3 = Vec3::new(0.0, GROUND_Y + SPHERE_RADIUS + SPHERE_EXTRA_LIFT, 0.0);

/// The ocean sits a little under the ground plane.
pub const OCEAN_LEVEL_Y: f32 = GROUND_Y - 50.0;

pub const SKY_SMOOTHING_RATE: f32 = 2.0;

pub const ISLAND_BASE_TARGET_SIZE: f32 = 560.0;
/// Exclusion radius as a fraction of the largest normalized extent.
pub const ISLAND_RADIUS_FACTOR: f32 = 0.52;
