// Shared test helpers: a deterministic geocoder and temp file setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use gps_geocoder::{Address, Config, Coordinate, GeocodeError, Geocoder, LogLevel};
use tempfile::NamedTempFile;

/// Geocoder returning fixed coordinates; unknown addresses get ZERO_RESULTS.
#[allow(dead_code)] // Used by other test files
#[derive(Default)]
pub struct StubGeocoder {
    coordinates: HashMap<String, Coordinate>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

#[allow(dead_code)]
impl StubGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, address: &str, latitude: f64, longitude: f64) -> Self {
        self.coordinates
            .insert(address.to_string(), Coordinate::new(latitude, longitude));
        self
    }

    pub fn with_delay(mut self, address: &str, millis: u64) -> Self {
        self.delays
            .insert(address.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Geocoder for StubGeocoder {
    async fn geocode(&self, address: &Address) -> Result<Coordinate, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(address.as_str()) {
            tokio::time::sleep(*delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.coordinates
            .get(address.as_str())
            .copied()
            .ok_or_else(|| GeocodeError::GeocodeNotFound {
                address: address.to_string(),
                status: "ZERO_RESULTS".to_string(),
            })
    }
}

/// Writes `rows` (already CSV-formatted) to a temporary input file.
#[allow(dead_code)]
pub fn write_input(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for row in rows {
        writeln!(file, "{}", row).expect("Failed to write row");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Config writing its output files into `dir`.
#[allow(dead_code)]
pub fn test_config(dir: &Path) -> Config {
    Config {
        output: dir.join("gps_coordinates.csv"),
        skipped_output: dir.join("gps_coordinates_skipped.csv"),
        log_level: LogLevel::Error, // Reduce noise in tests
        ..Default::default()
    }
}
