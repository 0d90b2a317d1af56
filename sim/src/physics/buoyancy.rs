//! Spring-damper buoyancy that keeps floaters riding the wave surface.
//!
//! Each floater is pulled toward `surface height + radius`. Floaters do not
//! interact with each other.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{DEFAULT_DAMPING, DEFAULT_FLOATER_RADIUS, DEFAULT_SPRING};
use crate::water::WaveField;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuoyancyParams {
    /// Pull toward the target height
    pub spring: f32,
    /// Resistance to vertical velocity
    pub damping: f32,
}

impl Default for BuoyancyParams {
    fn default() -> Self {
        Self {
            spring: DEFAULT_SPRING,
            damping: DEFAULT_DAMPING,
        }
    }
}

/// A body whose height is driven by the ocean surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Floater {
    pub position: Vec3,
    /// Offset above the surface the floater settles at
    pub radius: f32,
    pub velocity_y: f32,
    /// False until the underlying body has finished loading
    pub ready: bool,
}

impl Floater {
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            radius,
            velocity_y: 0.0,
            ready: true,
        }
    }
}

impl Default for Floater {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DEFAULT_FLOATER_RADIUS)
    }
}

/// Advance one floater by one frame.
///
/// Velocity integrates with `dt`; the position then moves by the whole
/// velocity (no `dt`). Keep `dt` at frame scale (≲ 0.05 s).
pub fn step_floater(floater: &mut Floater, water_height: f32, dt: f32, params: &BuoyancyParams) {
    let desired_y = water_height + floater.radius;
    let error = desired_y - floater.position.y;
    floater.velocity_y += (params.spring * error - params.damping * floater.velocity_y) * dt;
    floater.position.y += floater.velocity_y;
}

/// Opaque handle returned by [`FloaterRegistry::register`]. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FloaterHandle(u32);

/// Explicit registry of floaters owned by the simulation context.
#[derive(Debug, Default, Clone)]
pub struct FloaterRegistry {
    floaters: BTreeMap<FloaterHandle, Floater>,
    next_id: u32,
}

impl FloaterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a ready floater at rest.
    pub fn register(&mut self, position: Vec3, radius: f32) -> FloaterHandle {
        let handle = FloaterHandle(self.next_id);
        self.next_id += 1;
        self.floaters.insert(handle, Floater::new(position, radius));
        handle
    }

    /// Removes the floater, returning its last state if it was registered.
    pub fn unregister(&mut self, handle: FloaterHandle) -> Option<Floater> {
        self.floaters.remove(&handle)
    }

    pub fn get(&self, handle: FloaterHandle) -> Option<&Floater> {
        self.floaters.get(&handle)
    }

    pub fn get_mut(&mut self, handle: FloaterHandle) -> Option<&mut Floater> {
        self.floaters.get_mut(&handle)
    }

    /// Returns false if the handle is unknown.
    pub fn set_ready(&mut self, handle: FloaterHandle, ready: bool) -> bool {
        match self.floaters.get_mut(&handle) {
            Some(floater) => {
                floater.ready = ready;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.floaters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floaters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FloaterHandle, &Floater)> {
        self.floaters.iter().map(|(h, f)| (*h, f))
    }

    /// Step every ready floater against the surface at time `time`.
    /// Returns how many floaters were stepped.
    pub fn step_all(
        &mut self,
        field: &WaveField,
        time: f32,
        dt: f32,
        params: &BuoyancyParams,
    ) -> usize {
        let mut stepped = 0;
        for floater in self.floaters.values_mut().filter(|f| f.ready) {
            let water_height = field.height(floater.position.x, floater.position.z, time);
            step_floater(floater, water_height, dt, params);
            stepped += 1;
        }
        stepped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::water::OceanPreset;

    #[test]
    fn test_converges_to_constant_target() {
        let params = BuoyancyParams::default();
        let mut floater = Floater::new(Vec3::ZERO, 2.0);
        let water = 8.0;
        let dt = 1.0 / 60.0;

        for _ in 0..900 {
            step_floater(&mut floater, water, dt, &params);
        }

        assert!(
            (floater.position.y - 10.0).abs() < 0.01,
            "floater settled at {}",
            floater.position.y
        );
        assert!(floater.velocity_y.abs() < 0.01);
    }

    #[test]
    fn test_floater_at_rest_stays_put() {
        let params = BuoyancyParams::default();
        let mut floater = Floater::new(Vec3::new(0.0, 55.0, 0.0), 50.0);
        step_floater(&mut floater, 5.0, 0.016, &params);
        assert_eq!(floater.position.y, 55.0);
        assert_eq!(floater.velocity_y, 0.0);
    }

    #[test]
    fn test_first_step_moves_toward_target() {
        let params = BuoyancyParams::default();
        let mut floater = Floater::new(Vec3::new(0.0, 100.0, 0.0), 10.0);
        step_floater(&mut floater, 0.0, 0.02, &params);
        // err = -90, v = 4 * -90 * 0.02
        assert!((floater.velocity_y + 7.2).abs() < 1e-5);
        assert!((floater.position.y - 92.8).abs() < 1e-4);
    }

    #[test]
    fn test_registry_lifecycle() {
        let mut registry = FloaterRegistry::new();
        let a = registry.register(Vec3::ZERO, DEFAULT_FLOATER_RADIUS);
        let b = registry.register(Vec3::ZERO, DEFAULT_FLOATER_RADIUS);
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);

        assert!(registry.unregister(a).is_some());
        assert!(registry.unregister(a).is_none());
        assert!(registry.get(a).is_none());
        assert_eq!(registry.len(), 1);

        let c = registry.register(Vec3::ZERO, DEFAULT_FLOATER_RADIUS);
        assert_ne!(c, a, "handles must not be reused");
        assert!(!registry.set_ready(a, false));
        assert!(registry.set_ready(b, false));
    }

    #[test]
    fn test_register_starts_ready_at_rest() {
        let mut registry = FloaterRegistry::new();
        let handle = registry.register(Vec3::new(4.0, -10.0, 2.0), 30.0);
        let floater = registry.get(handle).copied();
        assert_eq!(floater, Some(Floater::new(Vec3::new(4.0, -10.0, 2.0), 30.0)));
        assert!(floater.map(|f| f.ready && f.velocity_y == 0.0).unwrap_or(false));
    }

    #[test]
    fn test_step_all_skips_unready() {
        let field = WaveField::new(&OceanPreset::Still.to_config(0.0));
        let params = BuoyancyParams::default();
        let mut registry = FloaterRegistry::new();
        let ready = registry.register(Vec3::new(0.0, -20.0, 0.0), 5.0);
        let pending = registry.register(Vec3::new(0.0, -20.0, 0.0), 5.0);
        assert!(registry.set_ready(pending, false));

        assert_eq!(registry.step_all(&field, 0.0, 0.016, &params), 1);
        assert!(registry.get(ready).map(|f| f.position.y > -20.0).unwrap_or(false));
        assert_eq!(registry.get(pending).map(|f| f.position.y), Some(-20.0));
    }
}
