//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including default file names, the provider endpoint, and concurrency limits.

/// Default output file, created in the current directory and overwritten on each run.
pub const DEFAULT_OUTPUT_PATH: &str = "gps_coordinates.csv";

/// Default diagnostics file listing addresses skipped under `--on-failure skip`.
pub const DEFAULT_SKIPPED_OUTPUT_PATH: &str = "gps_coordinates_skipped.csv";

/// Google Maps Geocoding API endpoint (JSON output).
pub const GOOGLE_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Environment variable holding the Google Maps API key.
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Environment variable overriding the geocoding endpoint (used for mock providers).
pub const ENDPOINT_ENV: &str = "GEOCODER_ENDPOINT";

/// Default number of in-flight lookups. One keeps the run strictly sequential.
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;

/// Upper bound accepted for `--max-concurrency`
pub const MAX_CONCURRENCY_LIMIT: usize = 50;

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Number of completed lookups after which the "this may take some time" notice is logged.
pub const PROGRESS_NOTICE_THRESHOLD: usize = 20;

/// Seconds between periodic progress log lines.
pub const LOGGING_INTERVAL: u64 = 5;

/// Interactive prompt shown when no input file is given on the command line.
pub const INPUT_PROMPT: &str = "Please enter name of csv file with full addresses: ";

/// User-Agent sent with every geocoding request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
