//! Sun and moon circling the island sphere on opposite sides.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Horizontal orbit radius as a multiple of the sphere radius
    pub radius_factor: f32,
    /// Vertical swing as a multiple of the sphere radius
    pub height_factor: f32,
    /// Vertical oscillation rate relative to the horizontal one
    pub vertical_rate: f32,
    /// Orbit clock advance per second of frame time
    pub clock_rate: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius_factor: 2.0,
            height_factor: 0.7,
            vertical_rate: 0.8,
            clock_rate: 0.18,
        }
    }
}

/// Positions and light directions of both bodies at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialFrame {
    pub sun_position: Vec3,
    pub moon_position: Vec3,
    /// Direction the sunlight travels (from the sun toward the orbit center)
    pub sun_direction: Vec3,
    pub moon_direction: Vec3,
    /// Height above the orbit center
    pub sun_height: f32,
    pub moon_height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CelestialOrbit {
    center: Vec3,
    radius: f32,
    height: f32,
    config: OrbitConfig,
    clock: f32,
}

impl CelestialOrbit {
    pub fn new(center: Vec3, sphere_radius: f32, config: OrbitConfig) -> Self {
        Self {
            center,
            radius: sphere_radius * config.radius_factor,
            height: sphere_radius * config.height_factor,
            config,
            clock: 0.0,
        }
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn advance(&mut self, dt: f32) {
        self.clock += dt * self.config.clock_rate;
    }

    fn position_at(&self, angle: f32) -> Vec3 {
        self.center
            + Vec3::new(
                self.radius * angle.cos(),
                self.height * (angle * self.config.vertical_rate).sin(),
                self.radius * angle.sin(),
            )
    }

    pub fn frame(&self) -> CelestialFrame {
        let sun_position = self.position_at(self.clock);
        // The moon's vertical phase is shifted by π, not by π·vertical_rate.
        let moon_angle = self.clock + PI;
        let moon_position = self.center
            + Vec3::new(
                self.radius * moon_angle.cos(),
                self.height * (self.clock * self.config.vertical_rate + PI).sin(),
                self.radius * moon_angle.sin(),
            );

        CelestialFrame {
            sun_position,
            moon_position,
            sun_direction: (self.center - sun_position).normalize_or_zero(),
            moon_direction: (self.center - moon_position).normalize_or_zero(),
            sun_height: sun_position.y - self.center.y,
            moon_height: moon_position.y - self.center.y,
        }
    }
}
