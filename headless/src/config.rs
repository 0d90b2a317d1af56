use std::{fs, path::Path};

use bevy_log::info;
use clap::ValueEnum;
use ron::de::from_str;
use sim::{OceanPreset, SceneConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    Islands,
    Calm,
    Still,
}

impl From<PresetArg> for OceanPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Islands => OceanPreset::Islands,
            PresetArg::Calm => OceanPreset::Calm,
            PresetArg::Still => OceanPreset::Still,
        }
    }
}

/// Reads a scene config from a RON file, falling back to defaults when no
/// file exists at `path`.
pub fn load_scene_config(path: &Path) -> Result<SceneConfig, Box<dyn std::error::Error>> {
    if !path.exists() {
        info!(
            "Scene config {} not found, using defaults",
            path.display()
        );
        return Ok(SceneConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: SceneConfig = from_str(&contents)?;
    config.validate()?;

    info!("Loaded scene config from {}", path.display());
    Ok(config)
}

/// Applies command line overrides on top of a loaded config.
pub fn apply_overrides(
    mut config: SceneConfig,
    seed: Option<u64>,
    preset: Option<PresetArg>,
) -> SceneConfig {
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(preset) = preset {
        let level_y = config.ocean.level_y;
        config.ocean = OceanPreset::from(preset).to_config(level_y);
    }
    config
}
