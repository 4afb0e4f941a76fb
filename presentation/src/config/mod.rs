//! Presentation-level configuration
//!
//! Configuration for output formatting.

use flagquiz_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format: "score", "full", or "json"
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Turn terminal colors on or off for the whole process
    pub fn apply_color(&self) {
        colored::control::set_override(self.color);
    }
}
