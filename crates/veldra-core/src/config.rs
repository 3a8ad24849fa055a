//! Runtime configuration for the command layer
//!
//! Two process-wide settings: the command prefix that marks a line as a
//! command attempt, and the access level at or below which failed dispatches
//! are silently ignored. Neither is persisted by this layer.

use crate::{AccessLevel, Result, VeldraError};
use serde::Deserialize;
use std::path::Path;

/// Command-layer settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandConfig {
    /// Leading marker that distinguishes a command attempt from chat
    pub prefix: String,

    /// Invokers at or below this level get no message on a failed dispatch;
    /// their line falls through to normal chat handling
    pub ignore_level: AccessLevel,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            prefix: "[".to_string(),
            ignore_level: AccessLevel::MIN,
        }
    }
}

impl CommandConfig {
    /// Load settings from a TOML file, falling back to defaults for
    /// unspecified keys
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CommandConfig = toml::from_str(&content)
            .map_err(|e| VeldraError::invalid(format!("invalid command config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(VeldraError::invalid(
                "command prefix must not be empty: every line would dispatch",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CommandConfig::default();
        assert_eq!(config.prefix, "[");
        assert_eq!(config.ignore_level, AccessLevel::Player);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let config = CommandConfig {
            prefix: String::new(),
            ..CommandConfig::default()
        };
        assert_matches!(config.validate(), Err(VeldraError::Invalid { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prefix = \"!\"").unwrap();
        writeln!(file, "ignore_level = \"Counselor\"").unwrap();

        let config = CommandConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.prefix, "!");
        assert_eq!(config.ignore_level, AccessLevel::Counselor);
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prefix = \".\"").unwrap();

        let config = CommandConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.prefix, ".");
        assert_eq!(config.ignore_level, AccessLevel::MIN);
    }

    #[test]
    fn test_load_missing_file() {
        let result = CommandConfig::load_from_file(Path::new("/nonexistent/commands.toml"));
        assert_matches!(result, Err(VeldraError::NotFound { .. }));
    }
}
