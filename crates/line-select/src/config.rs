//! Host configuration.
//!
//! Stored as JSON. Every field has a default, so a partial (or empty) object is valid.
//!
//! ```json
//! {
//!   "command_namespace": "karmchenki-expand-selection-to-line",
//!   "reveal_type": "default",
//!   "viewport_height": 40
//! }
//! ```

use crate::commands::DEFAULT_COMMAND_NAMESPACE;
use crate::editor::RevealType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading or validating a [`LineSelectConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file at {config_path}: {source}")]
    Read {
        /// Path of the config file.
        config_path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid JSON for this schema.
    #[error("failed to parse config file at {config_path}: {source}")]
    Parse {
        /// Path of the config file.
        config_path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Parsing or serializing an in-memory JSON string failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Namespaces must be non-empty and contain no whitespace.
    #[error("invalid command namespace '{0}'")]
    InvalidNamespace(String),
}

/// Line selection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSelectConfig {
    /// Prefix of the registered command ids.
    pub command_namespace: String,
    /// Scroll policy used when following the primary selection.
    pub reveal_type: RevealType,
    /// Viewport height in lines; `None` leaves scrolling to the host.
    pub viewport_height: Option<usize>,
}

impl Default for LineSelectConfig {
    fn default() -> Self {
        Self {
            command_namespace: DEFAULT_COMMAND_NAMESPACE.to_string(),
            reveal_type: RevealType::Default,
            viewport_height: None,
        }
    }
}

impl LineSelectConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A missing file yields `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let config: Self =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(Some(config))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check field values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ns = &self.command_namespace;
        if ns.is_empty() || ns.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidNamespace(ns.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = LineSelectConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LineSelectConfig::default());
        assert_eq!(config.command_namespace, DEFAULT_COMMAND_NAMESPACE);
    }

    #[test]
    fn test_partial_config() {
        let config = LineSelectConfig::from_json_str(
            r#"{ "reveal_type": "in_center_if_outside_viewport", "viewport_height": 30 }"#,
        )
        .unwrap();
        assert_eq!(config.reveal_type, RevealType::InCenterIfOutsideViewport);
        assert_eq!(config.viewport_height, Some(30));
        assert_eq!(config.command_namespace, DEFAULT_COMMAND_NAMESPACE);
    }

    #[test]
    fn test_invalid_namespace_rejected() {
        let err = LineSelectConfig::from_json_str(r#"{ "command_namespace": "a b" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNamespace(ns) if ns == "a b"));
    }

    #[test]
    fn test_unknown_reveal_type_is_parse_error() {
        let err = LineSelectConfig::from_json_str(r#"{ "reveal_type": "sideways" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = LineSelectConfig {
            command_namespace: "my-ext".to_string(),
            reveal_type: RevealType::AtTop,
            viewport_height: Some(12),
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(LineSelectConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = std::env::temp_dir().join("line-select-config-does-not-exist.json");
        assert!(LineSelectConfig::load_from_path(&path).unwrap().is_none());
    }
}
