//! Aggregate configuration for a floating-islands scene.

use serde::{Deserialize, Serialize};

use crate::constants::{CELESTIAL_MIN_DISTANCE, SPHERE_CENTER, SPHERE_RADIUS};
use crate::error::{ConfigError, Result};
use crate::islands::{default_island_specs, HoverParams, IslandSpec};
use crate::physics::{BuoyancyParams, SeparationParams, SphereBoundary};
use crate::sky::{OrbitConfig, SkyPalette};
use crate::water::OceanConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seeds island placement and separation tie-breaking
    pub seed: u64,
    pub ocean: OceanConfig,
    pub buoyancy: BuoyancyParams,
    pub separation: SeparationParams,
    pub boundary: SphereBoundary,
    pub orbit: OrbitConfig,
    /// Closest an island may get to the sun or moon (on top of its own radius)
    pub celestial_min_distance: f32,
    pub sky: SkyPalette,
    pub hover: HoverParams,
    pub islands: Vec<IslandSpec>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            ocean: OceanConfig::default(),
            buoyancy: BuoyancyParams::default(),
            separation: SeparationParams::default(),
            boundary: SphereBoundary::new(SPHERE_CENTER, SPHERE_RADIUS),
            orbit: OrbitConfig::default(),
            celestial_min_distance: CELESTIAL_MIN_DISTANCE,
            sky: SkyPalette::default(),
            hover: HoverParams::default(),
            islands: default_island_specs(),
        }
    }
}

impl SceneConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_ocean(mut self, ocean: OceanConfig) -> Self {
        self.ocean = ocean;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.ocean.validate()?;

        if !self.boundary.radius.is_finite() || self.boundary.radius <= 0.0 {
            return Err(ConfigError::InvalidBoundaryRadius(self.boundary.radius));
        }
        if !self.boundary.center.is_finite() {
            return Err(ConfigError::NonFinite("boundary.center"));
        }
        if !self.separation.gap.is_finite() || self.separation.gap < 0.0 {
            return Err(ConfigError::InvalidGap(self.separation.gap));
        }
        if !self.buoyancy.spring.is_finite() || !self.buoyancy.damping.is_finite() {
            return Err(ConfigError::NonFinite("buoyancy"));
        }
        if !self.celestial_min_distance.is_finite() {
            return Err(ConfigError::NonFinite("celestial_min_distance"));
        }
        for spec in &self.islands {
            if !spec.scale.is_finite() || spec.scale <= 0.0 {
                return Err(ConfigError::InvalidIslandScale {
                    name: spec.name.clone(),
                    scale: spec.scale,
                });
            }
        }
        Ok(())
    }
}
