//! Run orchestration: read addresses, geocode them, write the results.

mod report;
mod task;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use tokio_util::sync::CancellationToken;

use crate::app::{
    log_progress, log_run_summary, print_error_statistics, shutdown_gracefully,
    spawn_interrupt_listener, spawn_progress_logger,
};
use crate::config::{Config, FailurePolicy};
use crate::error_handling::{GeocodeError, ProcessingStats};
use crate::geocode::{Address, GeocodedRecord, Geocoder, GoogleGeocoder};
use crate::initialization::init_client;
use crate::input::read_addresses;
use crate::output::write_outputs;

pub use report::{GeocodeReport, SkippedAddress};
use task::{dispatch_lookups, LookupSlots, ProgressCounters};

/// Geocodes the configured input file with the Google Maps Geocoding API.
///
/// This is the main entry point for the library. It validates the
/// configuration, requires an API key before touching the input, builds the
/// HTTP client and runs [`run_pipeline`]. Ctrl-C stops dispatching new lookups.
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration is invalid or no API key is configured
/// - No input file is set
/// - The HTTP client cannot be built
/// - Any pipeline step fails (see [`run_pipeline`])
///
/// Pipeline failures are [`GeocodeError`] values and can be recovered with
/// `anyhow::Error::downcast_ref`.
///
/// # Example
///
/// ```no_run
/// use gps_geocoder::{run_geocode, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     file: Some(PathBuf::from("addresses.csv")),
///     api_key: Some("my-key".to_string()),
///     ..Default::default()
/// };
/// let report = run_geocode(config).await?;
/// println!("Geocoded {} addresses", report.geocoded);
/// # Ok(())
/// # }
/// ```
pub async fn run_geocode(config: Config) -> Result<GeocodeReport> {
    config.preflight()?;
    let api_key = config.require_api_key()?.to_string();
    let input = config
        .file
        .clone()
        .ok_or_else(|| anyhow!("No input file given"))?;

    let stats = Arc::new(ProcessingStats::new());
    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let geocoder = Arc::new(GoogleGeocoder::new(
        client,
        config.endpoint.clone(),
        api_key,
        Arc::clone(&stats),
    ));

    let cancel = CancellationToken::new();
    let interrupt_listener = spawn_interrupt_listener(cancel.clone());
    let result = run_pipeline(&config, &input, geocoder, cancel).await;
    interrupt_listener.abort();

    print_error_statistics(&stats);

    Ok(result?)
}

/// Runs read → geocode → write with any [`Geocoder`].
///
/// Addresses are looked up with at most `config.max_concurrency` requests in
/// flight; the output keeps input order. Nothing is written unless every
/// address has an outcome, and under [`FailurePolicy::Abort`] nothing is
/// written if any lookup failed.
///
/// # Errors
///
/// - [`GeocodeError::InputFileNotFound`] / [`GeocodeError::MalformedInputRow`] from the reader,
///   before any lookup
/// - the first failed lookup in input order under [`FailurePolicy::Abort`]
/// - [`GeocodeError::Cancelled`] if `cancel` fired before every address was dispatched
/// - [`GeocodeError::OutputWrite`] from the writer
pub async fn run_pipeline<G: Geocoder>(
    config: &Config,
    input: &Path,
    geocoder: Arc<G>,
    cancel: CancellationToken,
) -> Result<GeocodeReport, GeocodeError> {
    let start_time = Instant::now();

    let addresses = read_addresses(input)?;
    let total = addresses.len();
    info!(
        "Geocoding {} address{} (max concurrency: {}, on failure: {:?})",
        total,
        if total == 1 { "" } else { "es" },
        config.max_concurrency,
        config.on_failure
    );

    let progress = ProgressCounters::default();
    let cancel_logging = CancellationToken::new();
    let logging_task = spawn_progress_logger(
        start_time,
        Arc::clone(&progress.completed),
        Arc::clone(&progress.failed),
        total,
        cancel_logging.clone(),
    );

    let lookups = dispatch_lookups(
        &addresses,
        geocoder,
        config.max_concurrency,
        config.on_failure,
        &cancel.child_token(),
        &progress,
    )
    .await;

    shutdown_gracefully(cancel_logging, Some(logging_task)).await;
    log_progress(start_time, &progress.completed, &progress.failed, total);

    let (records, skipped) = match collect_outcomes(addresses, lookups, config.on_failure) {
        Ok(collected) => collected,
        Err(e) => {
            warn!("Run aborted, no output file written");
            return Err(e);
        }
    };

    write_outputs(
        &config.output,
        &records,
        &config.skipped_output,
        &skipped,
        config.overwrite(),
    )?;
    let skipped_path = (!skipped.is_empty()).then(|| config.skipped_output.clone());

    let report = GeocodeReport {
        total_addresses: total,
        geocoded: records.len(),
        skipped,
        output_path: config.output.clone(),
        skipped_path,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    };
    log_run_summary(&report);
    Ok(report)
}

/// Applies the failure policy to the per-address results, in input order.
fn collect_outcomes(
    addresses: Vec<Address>,
    lookups: LookupSlots,
    policy: FailurePolicy,
) -> Result<(Vec<GeocodedRecord>, Vec<SkippedAddress>), GeocodeError> {
    let LookupSlots { slots, dispatched } = lookups;
    let mut records = Vec::with_capacity(addresses.len());
    let mut skipped = Vec::new();

    for (index, (address, slot)) in addresses.into_iter().zip(slots).enumerate() {
        let outcome = match slot {
            Some(outcome) => outcome,
            None if index < dispatched => Err(GeocodeError::GeocodeProvider {
                address: address.to_string(),
                cause: "lookup task did not complete".to_string(),
            }),
            None => return Err(GeocodeError::Cancelled),
        };

        match outcome {
            Ok(coordinate) => records.push(GeocodedRecord {
                address,
                coordinate,
            }),
            Err(e) if policy == FailurePolicy::Skip && e.is_lookup_failure() => {
                skipped.push(SkippedAddress {
                    row: index + 1,
                    address,
                    reason: e.to_string(),
                })
            }
            Err(e) => return Err(e),
        }
    }

    Ok((records, skipped))
}
