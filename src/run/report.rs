//! Run results.

use std::path::PathBuf;

use serde::Serialize;

use crate::geocode::Address;

/// An address left out of the output under `--on-failure skip`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedAddress {
    /// 1-based position of the address in the input
    pub row: usize,
    /// The address as read from the input
    pub address: Address,
    /// Human-readable failure, including the provider status or cause
    pub reason: String,
}

/// Results of a geocoding run.
#[derive(Debug, Clone)]
pub struct GeocodeReport {
    /// Number of addresses read from the input file
    pub total_addresses: usize,
    /// Number of rows written to the output file
    pub geocoded: usize,
    /// Addresses excluded from the output, in input order
    pub skipped: Vec<SkippedAddress>,
    /// Path of the written output file
    pub output_path: PathBuf,
    /// Path of the skipped-address diagnostics, when one was written
    pub skipped_path: Option<PathBuf>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}
