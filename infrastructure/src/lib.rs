//! Infrastructure layer for guess-the-flag
//!
//! This crate contains adapters for the domain's ports: a `rand`-backed
//! random source, the built-in flag pool, and configuration file loading.

pub mod config;
pub mod pool;
pub mod random;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGameConfig, FileItemConfig,
    FileOutputConfig, FileOutputFormat, FilePoolConfig,
};
pub use pool::default_items;
pub use random::RandRandomSource;
