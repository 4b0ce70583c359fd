//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `gps_geocoder` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - The interactive input file prompt
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use gps_geocoder::initialization::init_logger_with;
use gps_geocoder::{prompt_for_input_file, run_geocode, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists) so GOOGLE_MAPS_API_KEY
    // can live there; try the current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let mut config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Fail on bad options or a missing key before asking for anything
    if let Err(e) = config.preflight() {
        eprintln!("gps_geocoder error: {:#}", e);
        process::exit(1);
    }

    if config.file.is_none() {
        let stdin = std::io::stdin();
        match prompt_for_input_file(stdin.lock(), std::io::stdout()) {
            Ok(path) => config.file = Some(path),
            Err(e) => {
                eprintln!("gps_geocoder error: {:#}", e);
                process::exit(1);
            }
        }
    }

    match run_geocode(config).await {
        Ok(report) => {
            println!(
                "Complete. New output csv file, \"{}\" has been created!",
                report.output_path.display()
            );
            if let Some(skipped_path) = &report.skipped_path {
                println!(
                    "{} address{} could not be geocoded - see \"{}\"",
                    report.skipped.len(),
                    if report.skipped.len() == 1 { "" } else { "es" },
                    skipped_path.display()
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("gps_geocoder error: {:#}", e);
            process::exit(1);
        }
    }
}
