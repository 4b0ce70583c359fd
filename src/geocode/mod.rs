//! Address geocoding.
//!
//! This module provides:
//! - The [`Geocoder`] trait the pipeline is generic over
//! - [`GoogleGeocoder`], the Google Maps Geocoding API implementation
//! - Data types for addresses, coordinates and lookup outcomes

mod google;
mod response;
mod types;

use std::future::Future;

pub use google::{build_request_url, GoogleGeocoder};
pub use response::classify_body;
pub use types::{Address, Coordinate, GeocodeOutcome, GeocodedRecord, ProviderStatus};

use crate::error_handling::GeocodeError;

/// Resolves one address to one coordinate.
///
/// Implementations must fail with [`GeocodeError::GeocodeNotFound`] when the
/// provider has no result and [`GeocodeError::GeocodeProvider`] for transport or
/// provider failures, never by panicking.
pub trait Geocoder: Send + Sync + 'static {
    /// Looks up `address` and returns the coordinate of the best match.
    fn geocode(
        &self,
        address: &Address,
    ) -> impl Future<Output = Result<Coordinate, GeocodeError>> + Send;
}
