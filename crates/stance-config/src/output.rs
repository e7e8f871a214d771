//! Output defaults for the CLI.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Output formats the CLI can render.
pub const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl OutputConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `format` is not a known format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if OUTPUT_FORMATS.contains(&self.format.as_str()) {
            return Ok(());
        }
        Err(ConfigError::InvalidValue {
            field: "output.format".to_string(),
            reason: format!(
                "expected one of {}, got '{}'",
                OUTPUT_FORMATS.join(", "),
                self.format
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_json() {
        let config = OutputConfig::default();
        assert_eq!(config.format, "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_format() {
        let config = OutputConfig {
            format: "yaml".to_string(),
        };
        match config.validate() {
            Err(ConfigError::InvalidValue { field, reason }) => {
                assert_eq!(field, "output.format");
                assert!(reason.contains("yaml"));
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }
}
