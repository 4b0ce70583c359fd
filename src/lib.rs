//! gps_geocoder library: batch address geocoding
//!
//! Reads a CSV file with one address per row, resolves each address to a
//! latitude/longitude pair with the Google Maps Geocoding API, and writes
//! `address,latitude,longitude` rows to an output CSV in input order.
//!
//! # Example
//!
//! ```no_run
//! use gps_geocoder::{run_geocode, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: Some(PathBuf::from("addresses.csv")),
//!     api_key: std::env::var("GOOGLE_MAPS_API_KEY").ok(),
//!     max_concurrency: 4,
//!     ..Default::default()
//! };
//!
//! let report = run_geocode(config).await?;
//! println!("Geocoded {} of {} addresses",
//!          report.geocoded, report.total_addresses);
//! # Ok(())
//! # }
//! ```
//!
//! Any [`Geocoder`] can drive the pipeline through [`run_pipeline`], which is
//! how the tests substitute deterministic providers.
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod geocode;
pub mod initialization;
pub mod input;
pub mod output;
mod run;

// Re-export public API
pub use app::prompt_for_input_file;
pub use config::{Config, FailurePolicy, LogFormat, LogLevel};
pub use error_handling::{
    ConfigValidationError, ErrorType, GeocodeError, InitializationError, ProcessingStats,
};
pub use geocode::{Address, Coordinate, GeocodedRecord, Geocoder, GoogleGeocoder};
pub use run::{run_geocode, run_pipeline, GeocodeReport, SkippedAddress};
