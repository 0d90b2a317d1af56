pub mod constants;
pub mod error;
pub mod islands;
pub mod physics;
pub mod scene;
pub mod sets;
pub mod sky;
pub mod utils;
pub mod water;

pub use constants::*;
pub use error::ConfigError;
pub use scene::{IslandScene, IslandScenePlugin, SceneConfig, SceneSnapshot, StepSummary};
pub use water::{OceanConfig, OceanPreset, WaveField};
