//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::config::constants::{
    API_KEY_ENV, DEFAULT_MAX_CONCURRENCY, DEFAULT_OUTPUT_PATH, DEFAULT_SKIPPED_OUTPUT_PATH,
    DEFAULT_TIMEOUT_SECS, ENDPOINT_ENV, GOOGLE_GEOCODE_ENDPOINT, MAX_CONCURRENCY_LIMIT,
};
use crate::error_handling::{ConfigValidationError, GeocodeError};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// What to do when a single address cannot be geocoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Abort the whole run on the first failed address; no output file is written
    Abort,
    /// Skip failed addresses, write the rest, and list the skipped ones in a diagnostics file
    Skip,
}

/// Run configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically:
///
/// ```no_run
/// use gps_geocoder::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: Some(PathBuf::from("addresses.csv")),
///     api_key: Some("my-key".to_string()),
///     max_concurrency: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gps_geocoder",
    version,
    about = "Geocodes a CSV file of addresses into GPS coordinates"
)]
pub struct Config {
    /// CSV file with one address per row in the first column (prompted for when omitted)
    pub file: Option<PathBuf>,

    /// Output CSV file (address, latitude, longitude)
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Diagnostics CSV listing skipped addresses (only written with --on-failure skip)
    #[arg(long, default_value = DEFAULT_SKIPPED_OUTPUT_PATH)]
    pub skipped_output: PathBuf,

    /// Google Maps API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Geocoding endpoint URL
    #[arg(long, env = ENDPOINT_ENV, default_value = GOOGLE_GEOCODE_ENDPOINT)]
    pub endpoint: String,

    /// Maximum number of lookups in flight at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Behaviour when an address cannot be geocoded
    #[arg(long, value_enum, default_value_t = FailurePolicy::Abort)]
    pub on_failure: FailurePolicy,

    /// Refuse to replace an existing output file
    #[arg(long)]
    pub no_overwrite: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            skipped_output: PathBuf::from(DEFAULT_SKIPPED_OUTPUT_PATH),
            api_key: None,
            endpoint: GOOGLE_GEOCODE_ENDPOINT.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            on_failure: FailurePolicy::Abort,
            no_overwrite: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks option ranges before any file or network access.
    ///
    /// # Errors
    ///
    /// Returns the first offending field with a message describing the accepted range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_concurrency == 0 {
            return Err(ConfigValidationError::new(
                "max_concurrency",
                "must be greater than 0",
            ));
        }
        if self.max_concurrency > MAX_CONCURRENCY_LIMIT {
            return Err(ConfigValidationError::new(
                "max_concurrency",
                format!("must be at most {MAX_CONCURRENCY_LIMIT}"),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "must be greater than 0",
            ));
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::new("endpoint", "must not be empty"));
        }
        Ok(())
    }

    /// Returns the configured API key, failing fast when it is absent or blank.
    pub fn require_api_key(&self) -> Result<&str, GeocodeError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(GeocodeError::MissingApiKey),
        }
    }

    /// Checks everything that can fail before the input file is known:
    /// option ranges, then the API key.
    ///
    /// # Errors
    ///
    /// The [`ConfigValidationError`] or [`GeocodeError::MissingApiKey`], both
    /// recoverable with `downcast_ref`.
    pub fn preflight(&self) -> anyhow::Result<()> {
        self.validate().context("Invalid configuration")?;
        self.require_api_key()?;
        Ok(())
    }

    /// Whether an existing output file may be replaced.
    pub fn overwrite(&self) -> bool {
        !self.no_overwrite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.file, None);
        assert_eq!(config.output, PathBuf::from("gps_coordinates.csv"));
        assert_eq!(config.endpoint, GOOGLE_GEOCODE_ENDPOINT);
        assert_eq!(config.max_concurrency, 1);
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.on_failure, FailurePolicy::Abort);
        assert!(config.overwrite());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let config = Config {
            max_concurrency: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "max_concurrency");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_validate_rejects_excessive_concurrency() {
        let config = Config {
            max_concurrency: MAX_CONCURRENCY_LIMIT + 1,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "max_concurrency");
        assert!(err.message.contains("50"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "timeout_seconds");
    }

    #[test]
    fn test_validate_rejects_blank_endpoint() {
        let config = Config {
            endpoint: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field, "endpoint");
    }

    #[test]
    fn test_require_api_key() {
        let mut config = Config::default();
        assert!(matches!(
            config.require_api_key(),
            Err(GeocodeError::MissingApiKey)
        ));

        config.api_key = Some("   ".to_string());
        assert!(matches!(
            config.require_api_key(),
            Err(GeocodeError::MissingApiKey)
        ));

        config.api_key = Some(" abc123 ".to_string());
        assert_eq!(config.require_api_key().unwrap(), "abc123");
    }

    #[test]
    fn test_preflight_rejects_invalid_options_before_key() {
        let config = Config {
            max_concurrency: 0,
            ..Default::default()
        };
        let err = config.preflight().unwrap_err();
        let validation = err
            .downcast_ref::<ConfigValidationError>()
            .expect("validation error comes first");
        assert_eq!(validation.field, "max_concurrency");
    }

    #[test]
    fn test_preflight_requires_api_key() {
        let config = Config::default();
        let err = config.preflight().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeocodeError>(),
            Some(GeocodeError::MissingApiKey)
        ));
    }

    #[test]
    fn test_preflight_accepts_valid_config() {
        let config = Config {
            api_key: Some("abc123".to_string()),
            ..Default::default()
        };
        assert!(config.preflight().is_ok());
    }
}
