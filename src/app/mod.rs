//! Main application modules.
//!
//! This module provides the interactive prompt, progress logging, shutdown
//! handling, and statistics printing used by the run orchestration.

pub mod logging;
pub mod prompt;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use logging::{log_progress, spawn_progress_logger};
pub use prompt::prompt_for_input_file;
pub use shutdown::{shutdown_gracefully, spawn_interrupt_listener};
pub use statistics::{log_run_summary, print_error_statistics};
