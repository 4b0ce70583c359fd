//! Google Geocoding API response decoding.
//!
//! Only the fields the pipeline needs are modelled; everything else in the
//! body is ignored.

use serde::Deserialize;

use super::types::{Coordinate, GeocodeOutcome, ProviderStatus};
use crate::error_handling::ErrorType;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

impl From<Location> for Coordinate {
    fn from(location: Location) -> Self {
        Coordinate::new(location.lat, location.lng)
    }
}

/// Classifies a 2xx response body.
///
/// `OK` with at least one result yields the first result's location. `OK`
/// without results and every other status except `REQUEST_DENIED` is a
/// `NotFound`; `REQUEST_DENIED` is an auth failure and reported as a provider
/// error, as is a body that does not decode.
pub fn classify_body(body: &[u8]) -> GeocodeOutcome {
    let response: GeocodeResponse = match serde_json::from_slice(body) {
        Ok(response) => response,
        Err(e) => {
            return GeocodeOutcome::ProviderError {
                kind: ErrorType::ResponseDecodeError,
                cause: format!("Malformed JSON response: {e}"),
            }
        }
    };

    match ProviderStatus::from_status(&response.status) {
        ProviderStatus::Ok => match response.results.into_iter().next() {
            Some(first) => GeocodeOutcome::Success(first.geometry.location.into()),
            None => GeocodeOutcome::NotFound {
                status: ProviderStatus::Ok,
            },
        },
        ProviderStatus::RequestDenied => GeocodeOutcome::ProviderError {
            kind: ErrorType::ProviderRequestDenied,
            cause: match response.error_message {
                Some(message) => format!("REQUEST_DENIED: {message}"),
                None => "REQUEST_DENIED".to_string(),
            },
        },
        status => {
            if let Some(message) = response.error_message {
                log::debug!("Provider returned {status}: {message}");
            }
            GeocodeOutcome::NotFound { status }
        }
    }
}
