//! Output format value object

use serde::{Deserialize, Serialize};

/// How the end-of-game report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the final score (default)
    Score,
    /// Every round with the answer given
    Full,
    /// JSON report
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_score() {
        assert_eq!(OutputFormat::default(), OutputFormat::Score);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Full).unwrap();
        assert_eq!(json, "\"full\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
