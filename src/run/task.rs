//! Lookup dispatch.
//!
//! Lookups run as spawned tasks bounded by a semaphore. Each task carries its
//! input index and its result lands in that slot, so output order is input
//! order whatever the completion order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

use crate::config::{FailurePolicy, PROGRESS_NOTICE_THRESHOLD};
use crate::error_handling::GeocodeError;
use crate::geocode::{Address, Coordinate, Geocoder};
use crate::initialization::init_semaphore;

pub(crate) type LookupResult = Result<Coordinate, GeocodeError>;

/// Shared counters read by the progress logger.
#[derive(Debug, Default, Clone)]
pub(crate) struct ProgressCounters {
    pub completed: Arc<AtomicUsize>,
    pub failed: Arc<AtomicUsize>,
    /// Finished lookups, successful or not
    pub processed: Arc<AtomicUsize>,
}

/// Per-address results, indexed like the input.
///
/// A `None` slot below `dispatched` belongs to a task that did not finish; a
/// `None` slot at or above it was never dispatched.
pub(crate) struct LookupSlots {
    pub slots: Vec<Option<LookupResult>>,
    pub dispatched: usize,
}

/// Geocodes `addresses` with at most `max_concurrency` lookups in flight.
///
/// Dispatch happens in input order and stops once `cancel` fires. Under
/// [`FailurePolicy::Abort`] the first failed lookup fires `cancel` itself;
/// lookups already in flight are awaited either way.
pub(crate) async fn dispatch_lookups<G: Geocoder>(
    addresses: &[Address],
    geocoder: Arc<G>,
    max_concurrency: usize,
    policy: FailurePolicy,
    cancel: &CancellationToken,
    progress: &ProgressCounters,
) -> LookupSlots {
    let semaphore = init_semaphore(max_concurrency);
    let mut slots: Vec<Option<LookupResult>> = Vec::with_capacity(addresses.len());
    slots.resize_with(addresses.len(), || None);

    let mut tasks = FuturesUnordered::new();
    let mut dispatched = 0;

    for (index, address) in addresses.iter().enumerate() {
        let permit = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            permit = Arc::clone(&semaphore).acquire_owned() => permit.ok(),
        };
        // A failing task cancels before releasing its permit
        let Some(permit) = permit.filter(|_| !cancel.is_cancelled()) else {
            debug!(
                "Stopped dispatching after {} of {} addresses",
                dispatched,
                addresses.len()
            );
            break;
        };
        dispatched += 1;

        let geocoder = Arc::clone(&geocoder);
        let address = address.clone();
        let cancel = cancel.clone();
        let completed = Arc::clone(&progress.completed);
        let failed = Arc::clone(&progress.failed);
        let processed = Arc::clone(&progress.processed);

        tasks.push(tokio::spawn(async move {
            let _permit = permit;
            let result = geocoder.geocode(&address).await;

            match &result {
                Ok(coordinate) => {
                    debug!(
                        "Geocoded '{}' -> ({}, {})",
                        address, coordinate.latitude, coordinate.longitude
                    );
                    completed.fetch_add(1, Ordering::SeqCst);
                }
                Err(e) => {
                    failed.fetch_add(1, Ordering::SeqCst);
                    match policy {
                        FailurePolicy::Abort => cancel.cancel(),
                        FailurePolicy::Skip => warn!("Skipping address {}: {e}", index + 1),
                    }
                }
            }
            if count_processed(&processed) {
                info!("This may take some time if there are a lot of addresses. Please wait...");
            }

            (index, result)
        }));
    }

    while let Some(joined) = tasks.next().await {
        match joined {
            Ok((index, result)) => slots[index] = Some(result),
            Err(join_error) => warn!("Lookup task panicked: {:?}", join_error),
        }
    }

    LookupSlots { slots, dispatched }
}

/// Counts one finished lookup. True exactly once, for the lookup that reaches
/// [`PROGRESS_NOTICE_THRESHOLD`].
fn count_processed(processed: &AtomicUsize) -> bool {
    processed.fetch_add(1, Ordering::SeqCst) + 1 == PROGRESS_NOTICE_THRESHOLD
}
