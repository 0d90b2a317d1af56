//! Ocean configuration: wave trains plus global shaping parameters.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::OCEAN_LEVEL_Y;
use crate::error::{ConfigError, Result};

fn default_weight() -> f32 {
    1.0
}

/// Configuration for a single wave train.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveTrainConfig {
    /// Travel direction on the (x, z) plane. Normalized when the field is built.
    pub direction: Vec2,
    /// Wavelength in world units
    pub wavelength: f32,
    /// Extra phase speed added on top of the dispersion frequency
    pub speed: f32,
    /// Per-train amplitude multiplier
    #[serde(default = "default_weight")]
    pub weight: f32,
}

impl WaveTrainConfig {
    pub const fn new(dir_x: f32, dir_z: f32, wavelength: f32, speed: f32) -> Self {
        Self {
            direction: Vec2::new(dir_x, dir_z),
            wavelength,
            speed,
            weight: 1.0,
        }
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }
}

/// Wave trains of the floating-islands ocean.
pub const ISLAND_WAVE_TRAINS: [WaveTrainConfig; 3] = [
    WaveTrainConfig::new(1.0, 0.2, 300.0, 12.0),
    WaveTrainConfig::new(0.5, 0.85, 600.0, 9.0),
    WaveTrainConfig::new(-0.4, 0.9, 1100.0, 6.0),
];

/// Complete ocean configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OceanConfig {
    /// Rest height of the surface (Y coordinate)
    pub level_y: f32,
    /// Amplitude of the first train; later trains fall off linearly
    pub amplitude: f32,
    /// Scales the horizontal (crest-sharpening) displacement
    pub choppiness: f32,
    pub trains: Vec<WaveTrainConfig>,
}

impl Default for OceanConfig {
    fn default() -> Self {
        OceanPreset::default().to_config(OCEAN_LEVEL_Y)
    }
}

impl OceanConfig {
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_choppiness(mut self, choppiness: f32) -> Self {
        self.choppiness = choppiness;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.level_y.is_finite() {
            return Err(ConfigError::NonFinite("ocean.level_y"));
        }
        if !self.amplitude.is_finite() {
            return Err(ConfigError::NonFinite("ocean.amplitude"));
        }
        if !self.choppiness.is_finite() {
            return Err(ConfigError::NonFinite("ocean.choppiness"));
        }
        for (index, train) in self.trains.iter().enumerate() {
            if !train.wavelength.is_finite() || train.wavelength <= 0.0 {
                return Err(ConfigError::InvalidWavelength {
                    index,
                    wavelength: train.wavelength,
                });
            }
            if train.direction.length_squared() == 0.0 {
                return Err(ConfigError::ZeroDirection { index });
            }
            if !train.speed.is_finite() || !train.weight.is_finite() {
                return Err(ConfigError::NonFinite("ocean.trains"));
            }
        }
        Ok(())
    }
}

/// Preset ocean configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OceanPreset {
    /// Three long swells under the floating islands
    #[default]
    Islands,
    /// Same swells at a fraction of the height
    Calm,
    /// Flat water
    Still,
}

impl OceanPreset {
    pub fn to_config(self, level_y: f32) -> OceanConfig {
        let mut config = OceanConfig {
            level_y,
            amplitude: 20.0,
            choppiness: 0.9,
            trains: ISLAND_WAVE_TRAINS.to_vec(),
        };

        match self {
            OceanPreset::Islands => {}
            OceanPreset::Calm => {
                config.amplitude = 5.0;
                config.choppiness = 0.3;
            }
            OceanPreset::Still => {
                config.trains.clear();
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_train_counts() {
        assert_eq!(OceanPreset::Islands.to_config(0.0).trains.len(), 3);
        assert_eq!(OceanPreset::Calm.to_config(0.0).trains.len(), 3);
        assert_eq!(OceanPreset::Still.to_config(0.0).trains.len(), 0);
    }

    #[test]
    fn test_default_matches_island_ocean() {
        let config = OceanConfig::default();
        assert_eq!(config.level_y, -250.0);
        assert_eq!(config.amplitude, 20.0);
        assert_eq!(config.choppiness, 0.9);
        let wavelengths: Vec<f32> = config.trains.iter().map(|t| t.wavelength).collect();
        assert_eq!(wavelengths, vec![300.0, 600.0, 1100.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_trains() {
        let mut config = OceanConfig::default();
        config.trains[1].wavelength = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidWavelength {
                index: 1,
                wavelength: 0.0
            })
        );

        let mut config = OceanConfig::default();
        config.trains[2].direction = Vec2::ZERO;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDirection { index: 2 }));
    }
}
