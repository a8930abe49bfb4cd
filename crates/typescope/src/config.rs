//! Inspector configuration, loaded from the `[inspector]` table of a TOML file.
//!
//! ```toml
//! [inspector]
//! null-arguments = "match-reference"
//! ambiguity = "first-match"
//! allow-non-public = true
//! ```
//!
//! Every key is optional; the defaults reproduce the plain matching rules.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How a null argument is matched against a declared parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NullArguments {
    /// Null matches any reference parameter, never a primitive one
    #[default]
    MatchReference,
    /// Null matches no parameter
    Reject,
}

/// What happens when several constructors accept the same arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ambiguity {
    /// First compatible constructor in declaration order wins
    #[default]
    FirstMatch,
    /// More than one compatible constructor is an error
    Reject,
}

/// Inspector settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct InspectorConfig {
    /// Null-argument matching policy
    pub null_arguments: NullArguments,
    /// Constructor ambiguity policy
    pub ambiguity: Ambiguity,
    /// Whether non-public constructors may be used for instantiation
    pub allow_non_public: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            null_arguments: NullArguments::default(),
            ambiguity: Ambiguity::default(),
            allow_non_public: true,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    inspector: InspectorConfig,
}

impl InspectorConfig {
    /// Create the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse config from TOML text. A missing `[inspector]` table yields defaults.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.inspector)
    }

    /// Set the null-argument policy
    pub fn with_null_arguments(mut self, policy: NullArguments) -> Self {
        self.null_arguments = policy;
        self
    }

    /// Set the ambiguity policy
    pub fn with_ambiguity(mut self, policy: Ambiguity) -> Self {
        self.ambiguity = policy;
        self
    }

    /// Allow or forbid non-public constructors
    pub fn with_non_public(mut self, allow: bool) -> Self {
        self.allow_non_public = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InspectorConfig::new();
        assert_eq!(config.null_arguments, NullArguments::MatchReference);
        assert_eq!(config.ambiguity, Ambiguity::FirstMatch);
        assert!(config.allow_non_public);
    }

    #[test]
    fn test_parse_full_table() {
        let config = InspectorConfig::from_str(
            r#"
[inspector]
null-arguments = "reject"
ambiguity = "reject"
allow-non-public = false
"#,
        )
        .unwrap();

        assert_eq!(config.null_arguments, NullArguments::Reject);
        assert_eq!(config.ambiguity, Ambiguity::Reject);
        assert!(!config.allow_non_public);
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let config = InspectorConfig::from_str("[inspector]\nambiguity = \"reject\"\n").unwrap();
        assert_eq!(config.ambiguity, Ambiguity::Reject);
        assert_eq!(config.null_arguments, NullArguments::MatchReference);
        assert!(config.allow_non_public);
    }

    #[test]
    fn test_missing_table() {
        let config = InspectorConfig::from_str("[other]\nkey = 1\n").unwrap();
        assert_eq!(config, InspectorConfig::default());
    }

    #[test]
    fn test_invalid_value() {
        let result = InspectorConfig::from_str("[inspector]\nnull-arguments = \"sometimes\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_builders() {
        let config = InspectorConfig::new()
            .with_null_arguments(NullArguments::Reject)
            .with_ambiguity(Ambiguity::Reject)
            .with_non_public(false);
        assert_eq!(config.null_arguments, NullArguments::Reject);
        assert_eq!(config.ambiguity, Ambiguity::Reject);
        assert!(!config.allow_non_public);
    }
}
