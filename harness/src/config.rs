//! Suite configuration.
//!
//! Values come from defaults, then an optional TOML file, then command-line
//! overrides, each layer replacing only the fields it sets.

use mathfn::Backend;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// What to do after a tolerance violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first violation.
    #[default]
    FailFast,
    /// Run every check and collect all violations.
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Fields set from the command line. `None` keeps the underlying value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub backend: Option<Backend>,
    pub failure_policy: Option<FailurePolicy>,
    pub log_level: Option<String>,
    pub report_format: Option<ReportFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub backend: Backend,
    pub failure_policy: FailurePolicy,
    pub log_level: String,
    pub report_format: ReportFormat,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Std,
            failure_policy: FailurePolicy::FailFast,
            log_level: "info".to_string(),
            report_format: ReportFormat::Text,
        }
    }
}

impl SuiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a TOML document. Missing fields take defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = format;
        self
    }

    /// Applies every field set in `overrides` on top of `self`.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(backend) = overrides.backend {
            self.backend = backend;
        }
        if let Some(policy) = overrides.failure_policy {
            self.failure_policy = policy;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(format) = overrides.report_format {
            self.report_format = format;
        }
        self
    }

    /// Checks that `log_level` names a tracing level.
    pub fn validate(&self) -> ConfigResult<()> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid {
                message: format!(
                    "Log level must be one of {}, got '{}'",
                    LOG_LEVELS.join(", "),
                    self.log_level
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SuiteConfig::default();
        assert_eq!(config.backend, Backend::Std);
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.report_format, ReportFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SuiteConfig::new()
            .with_backend(Backend::Libm)
            .with_failure_policy(FailurePolicy::Continue)
            .with_log_level("DEBUG")
            .with_report_format(ReportFormat::Json);

        assert_eq!(config.backend, Backend::Libm);
        assert_eq!(config.failure_policy, FailurePolicy::Continue);
        assert_eq!(config.report_format, ReportFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = SuiteConfig::default().with_log_level("loud");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SuiteConfig::from_toml_str(
            r#"
backend = "libm"
failure_policy = "continue"
"#,
        )
        .unwrap();

        assert_eq!(config.backend, Backend::Libm);
        assert_eq!(config.failure_policy, FailurePolicy::Continue);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.report_format, ReportFormat::Text);
    }

    #[test]
    fn test_toml_rejects_unknown_backend() {
        let result = SuiteConfig::from_toml_str("backend = \"cuda\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_toml_rejects_bad_log_level() {
        let result = SuiteConfig::from_toml_str("log_level = \"chatty\"");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "report_format = \"json\"").unwrap();
        writeln!(file, "log_level = \"warn\"").unwrap();

        let config = SuiteConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.report_format, ReportFormat::Json);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let file = SuiteConfig::from_toml_str(
            r#"
backend = "libm"
failure_policy = "fail_fast"
log_level = "warn"
"#,
        )
        .unwrap();

        let config = file.with_overrides(ConfigOverrides {
            backend: Some(Backend::Std),
            failure_policy: Some(FailurePolicy::Continue),
            ..Default::default()
        });

        assert_eq!(config.backend, Backend::Std);
        assert_eq!(config.failure_policy, FailurePolicy::Continue);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.report_format, ReportFormat::Text);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let config = SuiteConfig::new().with_backend(Backend::Libm);
        assert_eq!(
            config.clone().with_overrides(ConfigOverrides::default()),
            config
        );
    }

    #[test]
    fn test_missing_file() {
        let result = SuiteConfig::from_toml_file("/nonexistent/suite.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
