//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for the pipeline, initialization and configuration
//! - Categorization of failed lookups (transport, HTTP status, provider status)
//! - Thread-safe failure counters

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_http_status, categorize_provider_status, categorize_reqwest_error,
};
pub use stats::ProcessingStats;
pub use types::{ConfigValidationError, ErrorType, GeocodeError, InitializationError};
