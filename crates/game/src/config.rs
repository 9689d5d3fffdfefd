use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Smallest possible winning number
    pub min: i64,

    /// Largest possible winning number (inclusive)
    pub max: i64,

    /// Guesses allowed before the game is lost
    pub max_guesses: u32,

    /// Seed for the winning number, hint sampling and hint selection.
    /// Drawn from OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 100,
            max_guesses: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded game config from {}", path.as_ref().display());
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(GameError::invalid_config(format!(
                "min ({}) cannot exceed max ({})",
                self.min, self.max
            )));
        }

        if self.max == i64::MAX {
            return Err(GameError::invalid_config("max must be below i64::MAX"));
        }

        if self.max_guesses == 0 {
            return Err(GameError::invalid_config("max_guesses must be > 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("max = 500\nseed = 9\n").unwrap();
        assert_eq!(
            config,
            GameConfig {
                max: 500,
                seed: Some(9),
                ..GameConfig::default()
            }
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = GameConfig {
            min: 10,
            max: 5,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        config.max = 10;
        assert!(config.validate().is_ok());

        config.max_guesses = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        assert!(matches!(
            GameConfig::from_toml_str("max = \"lots\""),
            Err(GameError::ConfigParse(_))
        ));
    }
}
