//! Geocoding data types.

use std::fmt;

use serde::Serialize;
use strum_macros::EnumString;

use crate::error_handling::{categorize_provider_status, ErrorType, GeocodeError};

/// A free-text address taken verbatim from the first column of an input row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Wraps an address string as-is.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Self(address.to_string())
    }
}

impl From<String> for Address {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Latitude and longitude in decimal degrees, as returned by the provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, -90 to 90
    pub latitude: f64,
    /// Longitude in degrees, -180 to 180
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One input address with its resolved coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedRecord {
    /// The address as read from the input
    pub address: Address,
    /// Where the provider placed it
    pub coordinate: Coordinate,
}

/// The `status` field of a Google Geocoding API response.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderStatus {
    /// At least one result was returned (or, rarely, none)
    Ok,
    /// The address was understood but matched nothing
    ZeroResults,
    /// Billing or key quota problem
    OverDailyLimit,
    /// Request rate or quota exceeded
    OverQueryLimit,
    /// The key is missing, invalid or not allowed to use the API
    RequestDenied,
    /// The query was missing or malformed
    InvalidRequest,
    /// Server-side error; a retry may succeed
    UnknownError,
    /// Any status not listed above, kept verbatim
    #[strum(default)]
    Other(String),
}

impl ProviderStatus {
    /// Parses a status string; unrecognised values are kept verbatim in `Other`.
    pub fn from_status(status: &str) -> Self {
        status
            .parse()
            .unwrap_or_else(|_| ProviderStatus::Other(status.to_string()))
    }

    /// The status string as sent by the provider.
    pub fn as_str(&self) -> &str {
        match self {
            ProviderStatus::Ok => "OK",
            ProviderStatus::ZeroResults => "ZERO_RESULTS",
            ProviderStatus::OverDailyLimit => "OVER_DAILY_LIMIT",
            ProviderStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            ProviderStatus::RequestDenied => "REQUEST_DENIED",
            ProviderStatus::InvalidRequest => "INVALID_REQUEST",
            ProviderStatus::UnknownError => "UNKNOWN_ERROR",
            ProviderStatus::Other(status) => status,
        }
    }
}

impl fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one lookup, before the caller decides how to treat failures.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeOutcome {
    /// First result's `geometry.location`
    Success(Coordinate),
    /// The provider answered without a usable result
    NotFound {
        /// Status the provider answered with
        status: ProviderStatus,
    },
    /// Transport failure, HTTP error, denied request, or undecodable body
    ProviderError {
        /// Failure category for the statistics
        kind: ErrorType,
        /// Message naming the failure; never contains the API key
        cause: String,
    },
}

impl GeocodeOutcome {
    /// Failure category, `None` on success.
    pub fn error_type(&self) -> Option<ErrorType> {
        match self {
            GeocodeOutcome::Success(_) => None,
            GeocodeOutcome::NotFound { status } => Some(categorize_provider_status(status)),
            GeocodeOutcome::ProviderError { kind, .. } => Some(*kind),
        }
    }

    /// Converts the outcome into the pipeline's error type, naming `address`.
    pub fn into_result(self, address: &Address) -> Result<Coordinate, GeocodeError> {
        match self {
            GeocodeOutcome::Success(coordinate) => Ok(coordinate),
            GeocodeOutcome::NotFound { status } => Err(GeocodeError::GeocodeNotFound {
                address: address.to_string(),
                status: status.to_string(),
            }),
            GeocodeOutcome::ProviderError { cause, .. } => Err(GeocodeError::GeocodeProvider {
                address: address.to_string(),
                cause,
            }),
        }
    }
}
