//! Configuration file loading for guess-the-flag
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FLAGQUIZ_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./flagquiz.toml` or `./.flagquiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/guess-the-flag/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGameConfig, FileItemConfig, FileOutputConfig,
    FileOutputFormat, FilePoolConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
