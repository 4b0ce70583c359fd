//! Progress logging utilities.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::LOGGING_INTERVAL;

/// Logs progress information about address lookups.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `completed` - Atomic counter of geocoded addresses
/// * `failed` - Atomic counter of failed lookups
/// * `total` - Number of addresses in the input
pub fn log_progress(
    start_time: Instant,
    completed: &Arc<AtomicUsize>,
    failed: &Arc<AtomicUsize>,
    total: usize,
) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let completed = completed.load(Ordering::SeqCst);
    let failed = failed.load(Ordering::SeqCst);
    let rate = if elapsed_secs > 0.0 {
        (completed + failed) as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Geocoded {}/{} addresses ({} failed) in {:.2} seconds (~{:.2} addresses/sec)",
        completed, total, failed, elapsed_secs, rate
    );
}

/// Spawns a task logging progress every `LOGGING_INTERVAL` seconds until `cancel` fires.
pub fn spawn_progress_logger(
    start_time: Instant,
    completed: Arc<AtomicUsize>,
    failed: Arc<AtomicUsize>,
    total: usize,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL));
        // The first tick completes immediately
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    log_progress(start_time, &completed, &failed, total);
                }
                _ = cancel.cancelled() => {
                    break;
                }
            }
        }
    })
}
