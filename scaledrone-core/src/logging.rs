// Logging and tracing setup
// The library only emits `tracing` events; installing a subscriber is up to the caller

use tracing::{info, Span};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::error::{ScaledroneError, ScaledroneResult};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Directive string such as `scaledrone_core=debug,reqwest=warn`.
    /// Overrides `level` when set.
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Text,
            filter: None,
        }
    }
}

impl LogConfig {
    pub fn builder() -> LogConfigBuilder {
        LogConfigBuilder::default()
    }

    fn env_filter(&self) -> ScaledroneResult<EnvFilter> {
        let directives = self
            .filter
            .clone()
            .unwrap_or_else(|| self.level.as_str().to_string());
        EnvFilter::try_new(&directives)
            .map_err(|e| ScaledroneError::configuration(format!("Invalid log filter '{}': {}", directives, e)))
    }
}

#[derive(Default)]
pub struct LogConfigBuilder {
    config: LogConfig,
}

impl LogConfigBuilder {
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    pub fn format(mut self, format: LogFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn filter(mut self, directives: impl Into<String>) -> Self {
        self.config.filter = Some(directives.into());
        self
    }

    pub fn build(self) -> LogConfig {
        self.config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

/// Install a global `tracing-subscriber` fmt subscriber.
///
/// Fails instead of panicking when the filter is invalid or a global
/// subscriber has already been set.
pub fn init_logging(config: LogConfig) -> ScaledroneResult<()> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    result.map_err(|e| ScaledroneError::configuration(format!("Logging already initialized: {}", e)))?;

    info!(level = config.level.as_str(), format = ?config.format, "Logging initialized");
    Ok(())
}

/// Span wrapping a single API request
pub fn request_span(method: &str, path: &str) -> Span {
    tracing::debug_span!(
        "scaledrone_request",
        method = method,
        path = path,
        request_id = %generate_request_id()
    )
}

pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn redact<T: std::fmt::Display>(_value: T) -> String {
    "[REDACTED]".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = LogConfig::builder()
            .level(LogLevel::Debug)
            .format(LogFormat::Json)
            .build();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.filter.is_none());
    }

    #[test]
    fn invalid_filter_is_a_configuration_error() {
        let config = LogConfig::builder().filter("scaledrone_core=notalevel").build();
        let err = init_logging(config).unwrap_err();
        assert!(matches!(err, ScaledroneError::Configuration { .. }));
    }

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(generate_request_id(), generate_request_id());
    }

    #[test]
    fn redact_hides_value() {
        assert_eq!(redact("secret"), "[REDACTED]");
    }
}
