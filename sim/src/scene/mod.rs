//! Simulation context for the floating-islands scene.
//!
//! [`IslandScene`] owns every piece of mutable simulation state and is
//! driven explicitly: `create` once, `step(dt)` every frame, then `dispose`.
//!
//! ## Frame order
//! 1. ocean clock and buoyancy for ready floaters
//! 2. sun/moon orbit and light intensities
//! 3. island hover, then separation against each other, the sun and moon,
//!    and the boundary sphere
//! 4. day/night sky blend

pub mod config;
pub mod plugin;

pub use config::SceneConfig;
pub use plugin::{IslandScenePlugin, LastStepSummary};

use bevy::math::Vec3;
use bevy_ecs::resource::Resource;
use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::islands::{apply_hover, place_island, Island};
use crate::physics::{
    ExclusionZone, Floater, FloaterHandle, FloaterRegistry, SeparationReport, SeparationResolver,
    SphereBoundary,
};
use crate::sky::{CelestialFrame, CelestialOrbit, DayNightBlend, SkyState};
use crate::water::WaveField;

/// Per-subsystem switches. A disabled subsystem is not stepped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsystemToggles {
    pub ocean: bool,
    pub islands: bool,
    pub sky: bool,
}

impl Default for SubsystemToggles {
    fn default() -> Self {
        Self {
            ocean: true,
            islands: true,
            sky: true,
        }
    }
}

/// What happened during one `step`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSummary {
    pub frame: u64,
    pub ocean_time: f32,
    pub floaters_stepped: usize,
    pub separation: Option<SeparationReport>,
    pub celestial: CelestialFrame,
    pub sky: SkyState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IslandSnapshot {
    pub name: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub radius: f32,
    pub ready: bool,
}

/// Serializable view of the whole scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub frame: u64,
    pub ocean_time: f32,
    pub orbit_clock: f32,
    pub islands: Vec<IslandSnapshot>,
    pub floaters: Vec<(FloaterHandle, Floater)>,
    pub celestial: CelestialFrame,
    pub sky: SkyState,
}

#[derive(Resource)]
pub struct IslandScene {
    config: SceneConfig,
    field: WaveField,
    ocean_time: f32,
    floaters: FloaterRegistry,
    islands: Vec<Island>,
    orbit: CelestialOrbit,
    celestial: CelestialFrame,
    resolver: SeparationResolver,
    sky: DayNightBlend,
    frame: u64,
    pub toggles: SubsystemToggles,
}

impl IslandScene {
    /// Build the scene and place every configured island.
    /// Islands start not ready; see [`IslandScene::set_island_ready`].
    pub fn create(config: SceneConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let boundary = config.boundary;

        let islands: Vec<Island> = config
            .islands
            .iter()
            .map(|spec| place_island(spec, boundary.center, boundary.radius, &mut rng))
            .collect();

        let orbit = CelestialOrbit::new(boundary.center, boundary.radius, config.orbit);
        let celestial = orbit.frame();
        let resolver = SeparationResolver::new(config.separation, rng.gen());

        info!(
            "Created island scene: {} islands, {} wave trains, seed {}",
            islands.len(),
            config.ocean.trains.len(),
            config.seed
        );

        Self {
            field: WaveField::new(&config.ocean),
            ocean_time: 0.0,
            floaters: FloaterRegistry::new(),
            islands,
            orbit,
            celestial,
            resolver,
            sky: DayNightBlend::new(config.sky),
            frame: 0,
            toggles: SubsystemToggles::default(),
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    pub fn ocean_time(&self) -> f32 {
        self.ocean_time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn boundary(&self) -> &SphereBoundary {
        &self.config.boundary
    }

    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    pub fn islands_mut(&mut self) -> &mut [Island] {
        &mut self.islands
    }

    /// Returns false if no island has this name.
    pub fn set_island_ready(&mut self, name: &str, ready: bool) -> bool {
        match self.islands.iter_mut().find(|island| island.name == name) {
            Some(island) => {
                island.ready = ready;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_islands_ready(&mut self) {
        for island in &mut self.islands {
            island.ready = true;
        }
    }

    pub fn floaters(&self) -> &FloaterRegistry {
        &self.floaters
    }

    pub fn floaters_mut(&mut self) -> &mut FloaterRegistry {
        &mut self.floaters
    }

    pub fn register_floater(&mut self, position: Vec3, radius: f32) -> FloaterHandle {
        self.floaters.register(position, radius)
    }

    pub fn unregister_floater(&mut self, handle: FloaterHandle) -> Option<Floater> {
        self.floaters.unregister(handle)
    }

    pub fn celestial(&self) -> &CelestialFrame {
        &self.celestial
    }

    pub fn sky(&self) -> &SkyState {
        self.sky.state()
    }

    /// Sun and moon as immovable obstacles for the islands.
    pub fn celestial_zones(&self) -> [ExclusionZone; 2] {
        [
            ExclusionZone {
                center: self.celestial.sun_position,
                min_distance: self.config.celestial_min_distance,
            },
            ExclusionZone {
                center: self.celestial.moon_position,
                min_distance: self.config.celestial_min_distance,
            },
        ]
    }

    /// Advance the scene by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> StepSummary {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            warn!("Ignoring invalid frame delta {dt}");
            0.0
        };
        self.frame += 1;
        self.ocean_time += dt;

        let floaters_stepped = if self.toggles.ocean {
            self.floaters
                .step_all(&self.field, self.ocean_time, dt, &self.config.buoyancy)
        } else {
            0
        };

        self.orbit.advance(dt);
        self.celestial = self.orbit.frame();

        let separation = if self.toggles.islands {
            let clock = self.orbit.clock();
            for (index, island) in self.islands.iter_mut().enumerate() {
                if island.ready {
                    apply_hover(island, index, clock, dt, &self.config.hover);
                }
            }
            let zones = self.celestial_zones();
            Some(
                self.resolver
                    .resolve(&mut self.islands, &zones, &self.config.boundary),
            )
        } else {
            None
        };

        let sky = if self.toggles.sky {
            self.sky.update(&self.celestial, dt)
        } else {
            *self.sky.state()
        };

        StepSummary {
            frame: self.frame,
            ocean_time: self.ocean_time,
            floaters_stepped,
            separation,
            celestial: self.celestial,
            sky,
        }
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            frame: self.frame,
            ocean_time: self.ocean_time,
            orbit_clock: self.orbit.clock(),
            islands: self
                .islands
                .iter()
                .map(|island| IslandSnapshot {
                    name: island.name.clone(),
                    position: island.body.position,
                    rotation: island.rotation,
                    radius: island.body.radius,
                    ready: island.ready,
                })
                .collect(),
            floaters: self.floaters.iter().map(|(h, f)| (h, *f)).collect(),
            celestial: self.celestial,
            sky: *self.sky.state(),
        }
    }

    /// Tear the scene down, returning its final state.
    pub fn dispose(self) -> SceneSnapshot {
        info!("Disposing island scene after {} frames", self.frame);
        self.snapshot()
    }
}
