//! Random placement of islands inside the boundary sphere.

use bevy::math::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::constants::{ISLAND_BASE_TARGET_SIZE, ISLAND_RADIUS_FACTOR};
use crate::physics::{OrbitingBody, Separable};
use crate::utils::random_unit_vector;

/// Radial shell an island is dropped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IslandBand {
    Inner,
    Outer,
}

impl IslandBand {
    /// Shell bounds as fractions of the sphere radius.
    pub fn range(self) -> (f32, f32) {
        match self {
            IslandBand::Inner => (0.22, 0.42),
            IslandBand::Outer => (0.62, 0.95),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IslandSpec {
    pub name: String,
    /// Multiplier on the base target size
    pub scale: f32,
    pub band: IslandBand,
    /// Up to this fraction of extra random size
    #[serde(default)]
    pub jitter: f32,
}

impl IslandSpec {
    pub fn new(name: &str, scale: f32, band: IslandBand) -> Self {
        Self {
            name: name.to_string(),
            scale,
            band,
            jitter: 0.0,
        }
    }

    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }
}

pub fn default_island_specs() -> Vec<IslandSpec> {
    vec![
        IslandSpec::new("mushroom", 1.5, IslandBand::Outer),
        IslandSpec::new("wolf", 6.0, IslandBand::Outer),
        IslandSpec::new("mining", 10.0, IslandBand::Inner).with_jitter(0.1),
        IslandSpec::new("lowpoly", 7.0, IslandBand::Inner).with_jitter(0.1),
    ]
}

/// A placed island. Its exclusion radius comes from its normalized size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Island {
    pub name: String,
    pub body: OrbitingBody,
    /// Euler angles (x = pitch, y = yaw, z = roll)
    pub rotation: Vec3,
    /// Hover phase offset in radians
    pub phase: f32,
    pub band: IslandBand,
    pub ready: bool,
}

impl Separable for Island {
    fn position(&self) -> Vec3 {
        self.body.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.body.position = position;
    }

    fn radius(&self) -> f32 {
        self.body.radius
    }

    fn is_active(&self) -> bool {
        self.ready
    }
}

/// Place `spec` at a random direction inside its band. The island starts not ready.
pub fn place_island(
    spec: &IslandSpec,
    center: Vec3,
    sphere_radius: f32,
    rng: &mut impl Rng,
) -> Island {
    let jitter = spec.jitter.max(0.0);
    let jitter_mul = if jitter == 0.0 {
        1.0
    } else {
        1.0 + rng.gen::<f32>() * jitter
    };
    let target_size = ISLAND_BASE_TARGET_SIZE * spec.scale * jitter_mul;

    let dir = random_unit_vector(rng);
    let (r_min, r_max) = spec.band.range();
    let distance = sphere_radius * (r_min + rng.gen::<f32>() * (r_max - r_min));

    Island {
        name: spec.name.clone(),
        body: OrbitingBody::new(center + dir * distance, target_size * ISLAND_RADIUS_FACTOR),
        rotation: Vec3::ZERO,
        phase: rng.gen::<f32>() * TAU,
        band: spec.band,
        ready: false,
    }
}
