//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};
use crate::run::GeocodeReport;

/// Logs a one-line summary of a finished run.
pub fn log_run_summary(report: &GeocodeReport) {
    info!(
        "✅ Geocoded {} of {} address{} ({} skipped) in {:.1}s - results in {}",
        report.geocoded,
        report.total_addresses,
        if report.total_addresses == 1 { "" } else { "es" },
        report.skipped.len(),
        report.elapsed_seconds,
        report.output_path.display()
    );
}

/// Prints failed-lookup counts by category to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }
}
