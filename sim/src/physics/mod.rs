//! Per-frame body physics: wave buoyancy and positional separation.

pub mod buoyancy;
pub mod separation;

pub use buoyancy::{BuoyancyParams, Floater, FloaterHandle, FloaterRegistry};
pub use separation::{
    ExclusionZone, OrbitingBody, Separable, SeparationParams, SeparationReport,
    SeparationResolver, SphereBoundary,
};
