//! Google Maps Geocoding API client.

use std::sync::Arc;

use log::debug;
use url::Url;

use super::response::classify_body;
use super::types::{Address, Coordinate, GeocodeOutcome};
use super::Geocoder;
use crate::error_handling::{
    categorize_http_status, categorize_reqwest_error, ErrorType, GeocodeError, ProcessingStats,
};

const REDACTED: &str = "REDACTED";

/// Builds `endpoint?address=...&key=...`.
///
/// Parameters are form-urlencoded: spaces become `+`, and every other reserved
/// or non-ASCII character (`,` `&` `#` ...) is percent-encoded.
pub fn build_request_url(endpoint: &str, address: &str, api_key: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(endpoint, &[("address", address), ("key", api_key)])
}

/// Renders a request URL with the `key` parameter masked, for logging.
pub(crate) fn redact_api_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "key" {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Geocoder backed by the Google Maps Geocoding API.
///
/// One GET per address, no retries. Failed lookups are counted in the shared
/// [`ProcessingStats`].
pub struct GoogleGeocoder {
    client: Arc<reqwest::Client>,
    endpoint: String,
    api_key: String,
    stats: Arc<ProcessingStats>,
}

impl GoogleGeocoder {
    /// Creates a geocoder sending requests to `endpoint` with `api_key`.
    pub fn new(
        client: Arc<reqwest::Client>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            stats,
        }
    }

    /// Performs one lookup and classifies the response.
    pub async fn lookup(&self, address: &Address) -> GeocodeOutcome {
        let url = match build_request_url(&self.endpoint, address.as_str(), &self.api_key) {
            Ok(url) => url,
            Err(e) => {
                return GeocodeOutcome::ProviderError {
                    kind: ErrorType::HttpRequestBuilderError,
                    cause: format!("Invalid endpoint URL '{}': {e}", self.endpoint),
                }
            }
        };
        debug!("GET {}", redact_api_key(&url));

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                return GeocodeOutcome::ProviderError {
                    kind: categorize_reqwest_error(&e),
                    // reqwest errors embed the request URL, which carries the key
                    cause: e.without_url().to_string(),
                }
            }
        };

        let status = response.status();
        if !status.is_success() {
            return GeocodeOutcome::ProviderError {
                kind: categorize_http_status(status),
                cause: format!("HTTP status {status}"),
            };
        }

        match response.bytes().await {
            Ok(body) => classify_body(&body),
            Err(e) => GeocodeOutcome::ProviderError {
                kind: categorize_reqwest_error(&e),
                cause: e.without_url().to_string(),
            },
        }
    }
}

impl Geocoder for GoogleGeocoder {
    async fn geocode(&self, address: &Address) -> Result<Coordinate, GeocodeError> {
        let outcome = self.lookup(address).await;
        if let Some(error_type) = outcome.error_type() {
            self.stats.increment_error(error_type);
        }
        outcome.into_result(address)
    }
}
