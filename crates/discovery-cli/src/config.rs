//! Engine configuration
//!
//! Loaded from TOML. Every section and key is optional:
//!
//! ```toml
//! [defaults]
//! reach = 1000
//! impact = 3
//! confidence = 80
//! effort = 3
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

use discovery_model::ScoreDefaults;
use discovery_scoring::ScoringInput;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted key
        field: &'static str,
        /// What is wrong
        reason: String,
    },

    /// Log format name not recognized
    #[error("unknown log format: '{0}' (expected text or json)")]
    UnknownLogFormat(String),
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `warn` or `discovery_scoring=debug`
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Values used where an idea leaves a score field unset
    pub defaults: ScoreDefaults,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With score defaults
    #[must_use]
    pub fn with_defaults(mut self, defaults: ScoreDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// With log filter
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// With log format
    #[must_use]
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.logging.format = format;
        self
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// [`ConfigError::Parse`] or [`ConfigError::Invalid`]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, or defaults when `path` is `None`
    ///
    /// # Errors
    /// Any [`ConfigError`]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check defaults against scorer ranges and the log filter syntax
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] for the first bad value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.defaults;
        ScoringInput::new(d.reach, d.impact, d.confidence, d.effort)
            .validate()
            .map_err(|err| ConfigError::Invalid {
                field: "defaults",
                reason: err.to_string(),
            })?;

        EnvFilter::try_new(&self.logging.level).map_err(|err| ConfigError::Invalid {
            field: "logging.level",
            reason: err.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [defaults]
            reach = 250

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults, ScoreDefaults::default().with_reach(250));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn out_of_range_default_rejected() {
        let err = EngineConfig::from_toml_str("[defaults]\nimpact = 9\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "defaults", .. }), "{err}");
    }

    #[test]
    fn unknown_format_rejected() {
        let err = EngineConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn log_format_parse_error_is_typed() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLogFormat(ref name) if name == "xml"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = EngineConfig::load(Some(Path::new("/nonexistent/discovery.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/discovery.toml"));
    }

    #[test]
    fn builder() {
        let config = EngineConfig::new().with_log_level("debug").with_log_format(LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }
}
