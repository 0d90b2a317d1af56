//! Procedural ocean shared by buoyancy queries and surface displacement.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              OceanConfig (serde)              │
//! │  - Wave trains (direction, wavelength, speed) │
//! │  - Level, amplitude, choppiness               │
//! └──────────────────────┬───────────────────────┘
//!                        │
//!                        ▼
//!               ┌─────────────────┐
//!               │    WaveField    │  pure, Send + Sync
//!               └────────┬────────┘
//!           ┌────────────┴────────────┐
//!           ▼                         ▼
//!   ┌───────────────┐         ┌───────────────┐
//!   │   Buoyancy    │         │ Surface grid  │
//!   │ (height query)│         │ (caller-owned │
//!   │               │         │  vertex data) │
//!   └───────────────┘         └───────────────┘
//! ```

pub mod config;
pub mod field;
pub mod surface;

pub use config::{OceanConfig, OceanPreset, WaveTrainConfig};
pub use field::{WaveField, WaveTrain};
pub use surface::SurfaceGrid;
