//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types after
//! validation.

use crate::pool::default_items;
use flagquiz_domain::{DEFAULT_ROUNDS_PER_GAME, GameRules, Item, ItemPool, OutputFormat, QuizError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use flagquiz_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("rounds_per_game cannot be 0")]
    ZeroRounds,

    #[error("item name cannot be empty")]
    EmptyItemName,

    #[error("duplicate item in pool: {0}")]
    DuplicateItem(String),

    #[error("pool needs at least {required} items, got {size}")]
    PoolTooSmall { size: usize, required: usize },

    #[error("invalid game setup: {0}")]
    Invalid(QuizError),
}

impl From<QuizError> for ConfigValidationError {
    fn from(error: QuizError) -> Self {
        match error {
            QuizError::EmptyItemName => ConfigValidationError::EmptyItemName,
            QuizError::DuplicateItem(name) => ConfigValidationError::DuplicateItem(name),
            QuizError::PoolTooSmall { size, required } => {
                ConfigValidationError::PoolTooSmall { size, required }
            }
            QuizError::InvalidRules(_) => ConfigValidationError::ZeroRounds,
            other => ConfigValidationError::Invalid(other),
        }
    }
}

/// Raw game configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Rounds in one game
    pub rounds_per_game: usize,
    /// Fixed random seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            rounds_per_game: DEFAULT_ROUNDS_PER_GAME,
            seed: None,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Report format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// One pool entry from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileItemConfig {
    pub name: String,
    pub description: Option<String>,
}

/// Raw pool configuration from TOML
///
/// An empty item list selects the built-in flags.
///
/// ```toml
/// [[pool.items]]
/// name = "France"
/// description = "Three vertical stripes: blue, white, red"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePoolConfig {
    pub items: Vec<FileItemConfig>,
}

impl FilePoolConfig {
    /// Whether the built-in flags are used
    pub fn uses_defaults(&self) -> bool {
        self.items.is_empty()
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Game settings
    pub game: FileGameConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Item pool
    pub pool: FilePoolConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.to_rules()?;
        self.to_pool()?;
        Ok(())
    }

    /// Game rules described by this configuration
    pub fn to_rules(&self) -> Result<GameRules, ConfigValidationError> {
        if self.game.rounds_per_game == 0 {
            return Err(ConfigValidationError::ZeroRounds);
        }
        Ok(GameRules::new(self.game.rounds_per_game)?)
    }

    /// Item pool described by this configuration
    pub fn to_pool(&self) -> Result<ItemPool, ConfigValidationError> {
        if self.pool.uses_defaults() {
            return Ok(ItemPool::new(default_items())?);
        }

        let items = self
            .pool
            .items
            .iter()
            .map(|entry| {
                let item = Item::try_new(entry.name.trim())
                    .ok_or(ConfigValidationError::EmptyItemName)?;
                Ok(match &entry.description {
                    Some(description) => item.with_description(description.as_str()),
                    None => item,
                })
            })
            .collect::<Result<Vec<_>, ConfigValidationError>>()?;

        Ok(ItemPool::new(items)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[game]
rounds_per_game = 5
seed = 42

[output]
format = "full"
color = false

[[pool.items]]
name = "Chad"
description = "Blue, gold and red vertical stripes"

[[pool.items]]
name = "Romania"
description = "Blue, yellow and red vertical stripes"

[[pool.items]]
name = "Andorra"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.rounds_per_game, 5);
        assert_eq!(config.game.seed, Some(42));
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert_eq!(config.pool.items.len(), 3);

        let pool = config.to_pool().unwrap();
        assert_eq!(
            pool.get("Chad").and_then(Item::description),
            Some("Blue, gold and red vertical stripes")
        );
        assert!(pool.get("Andorra").unwrap().description().is_none());
        assert_eq!(config.to_rules().unwrap().rounds_per_game(), 5);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[game]
seed = 7
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.seed, Some(7));
        // Defaults should apply
        assert_eq!(config.game.rounds_per_game, 3);
        assert!(config.output.color);
        assert!(config.pool.uses_defaults());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.game.rounds_per_game, 3);
        assert!(config.game.seed.is_none());
        assert!(config.output.format.is_none());
        assert_eq!(config.to_pool().unwrap().len(), 11);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_rounds() {
        let toml_str = r#"
[game]
rounds_per_game = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::ZeroRounds)
        ));
    }

    #[test]
    fn test_validate_small_pool() {
        let toml_str = r#"
[[pool.items]]
name = "France"

[[pool.items]]
name = "Italy"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::PoolTooSmall {
                size: 2,
                required: 3
            })
        ));
    }

    #[test]
    fn test_validate_duplicate_and_blank_items() {
        let duplicate: FileConfig = toml::from_str(
            r#"
[[pool.items]]
name = "France"
[[pool.items]]
name = "Italy"
[[pool.items]]
name = "France"
"#,
        )
        .unwrap();
        assert!(matches!(
            duplicate.validate(),
            Err(ConfigValidationError::DuplicateItem(name)) if name == "France"
        ));

        let blank: FileConfig = toml::from_str(
            r#"
[[pool.items]]
name = "France"
[[pool.items]]
name = "  "
[[pool.items]]
name = "Italy"
"#,
        )
        .unwrap();
        assert!(matches!(
            blank.validate(),
            Err(ConfigValidationError::EmptyItemName)
        ));
    }
}
