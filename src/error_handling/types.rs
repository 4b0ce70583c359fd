//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! categories counted in [`super::ProcessingStats`].

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A configuration value outside its accepted range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What the accepted values are
    pub message: String,
}

impl ConfigValidationError {
    /// Creates an error for `field`.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors of the read → geocode → write pipeline.
///
/// Every variant is fatal under the default failure policy. Lookup failures
/// (`GeocodeProvider`, `GeocodeNotFound`) are skippable with `--on-failure skip`.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The input path does not exist or cannot be read.
    #[error("Input file not found or unreadable: {}", path.display())]
    InputFileNotFound {
        /// Path that was given
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A row of the input file cannot be turned into an address.
    #[error("Malformed input row {row}: {reason}")]
    MalformedInputRow {
        /// 1-based line number of the row
        row: u64,
        /// What is wrong with it
        reason: String,
    },

    /// Transport failure, non-2xx status, denied request, or malformed JSON.
    #[error("Geocoding provider error for address '{address}': {cause}")]
    GeocodeProvider {
        /// Address being looked up
        address: String,
        /// Transport, HTTP or provider message
        cause: String,
    },

    /// The provider answered but produced no usable result.
    #[error("No geocoding result for address '{address}' (provider status: {status})")]
    GeocodeNotFound {
        /// Address being looked up
        address: String,
        /// Provider status, e.g. `ZERO_RESULTS`
        status: String,
    },

    /// The output file cannot be created or written.
    #[error("Failed to write output file {}: {reason}", path.display())]
    OutputWrite {
        /// File that could not be written
        path: PathBuf,
        /// Underlying error message
        reason: String,
    },

    /// No API key configured.
    #[error("Missing API key: set GOOGLE_MAPS_API_KEY (environment or .env) or pass --api-key")]
    MissingApiKey,

    /// The run was interrupted before every address was geocoded.
    #[error("Run cancelled before all addresses were geocoded; no output was written")]
    Cancelled,
}

impl GeocodeError {
    /// Whether the error concerns a single address (and may be skipped).
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            GeocodeError::GeocodeProvider { .. } | GeocodeError::GeocodeNotFound { .. }
        )
    }
}

/// Categories of failed lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    /// The request could not be built (bad endpoint URL)
    HttpRequestBuilderError,
    /// No response within the configured timeout
    HttpRequestTimeoutError,
    /// Connection or DNS failure
    HttpRequestConnectError,
    /// Failure while reading the response body
    HttpRequestBodyError,
    /// Non-2xx status other than 401, 403 and 429
    HttpRequestStatusError,
    /// Any other transport error
    HttpRequestOtherError,
    // Response errors
    /// Body is not the expected JSON
    ResponseDecodeError,
    // Provider status errors
    /// REQUEST_DENIED, 401, 403
    ProviderRequestDenied,
    /// OVER_QUERY_LIMIT, OVER_DAILY_LIMIT, 429
    ProviderOverQueryLimit,
    /// INVALID_REQUEST
    ProviderInvalidRequest,
    /// ZERO_RESULTS, or OK with an empty result list
    ProviderZeroResults,
    /// UNKNOWN_ERROR or an unrecognised status
    ProviderUnknownStatus,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable label used in the statistics summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::ResponseDecodeError => "Malformed provider response",
            ErrorType::ProviderRequestDenied => "Request denied by provider",
            ErrorType::ProviderOverQueryLimit => "Provider quota exceeded",
            ErrorType::ProviderInvalidRequest => "Invalid request",
            ErrorType::ProviderZeroResults => "Zero results",
            ErrorType::ProviderUnknownStatus => "Unknown provider status",
        }
    }
}
