//! Result writer.
//!
//! Writes `address,latitude,longitude` rows without a header, quoting only
//! fields that contain the delimiter, a quote, or a line break.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::{info, warn};

use crate::error_handling::GeocodeError;
use crate::geocode::GeocodedRecord;
use crate::run::SkippedAddress;


/// Writes `records` to `path`, one row per record, in order.
///
/// The file is truncated when it exists and `overwrite` is set; otherwise an
/// existing file is an error.
///
/// # Errors
///
/// Returns [`GeocodeError::OutputWrite`] if the file cannot be created or written.
pub fn write_results(
    path: &Path,
    records: &[GeocodedRecord],
    overwrite: bool,
) -> Result<(), GeocodeError> {
    let file = open_output(path, overwrite)?;
    write_results_file(path, file, records)
}

/// Serializes `records` as headerless, minimally quoted CSV.
pub fn write_results_to_writer<W: Write>(
    writer: W,
    records: &[GeocodedRecord],
) -> Result<(), csv::Error> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in records {
        csv_writer.serialize((
            record.address.as_str(),
            record.coordinate.latitude,
            record.coordinate.longitude,
        ))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the skipped-address diagnostics (`row,address,reason`, with header).
///
/// # Errors
///
/// Returns [`GeocodeError::OutputWrite`] if the file cannot be created or written.
pub fn write_skipped(
    path: &Path,
    skipped: &[SkippedAddress],
    overwrite: bool,
) -> Result<(), GeocodeError> {
    let file = open_output(path, overwrite)?;
    write_skipped_file(path, file, skipped)
}

/// Writes the results and, when addresses were skipped, the diagnostics.
///
/// Both files are opened before either is written. If anything fails, the
/// files this call created are removed again, so a failed run never leaves
/// results without their diagnostics. Existing files that could not be
/// replaced are left untouched.
///
/// # Errors
///
/// Returns [`GeocodeError::OutputWrite`] for the first file that cannot be
/// created or written.
pub fn write_outputs(
    output_path: &Path,
    records: &[GeocodedRecord],
    skipped_path: &Path,
    skipped: &[SkippedAddress],
    overwrite: bool,
) -> Result<(), GeocodeError> {
    if skipped.is_empty() {
        return write_results(output_path, records, overwrite);
    }

    let skipped_file = open_output(skipped_path, overwrite)?;
    let output_file = match open_output(output_path, overwrite) {
        Ok(file) => file,
        Err(e) => {
            discard(skipped_path);
            return Err(e);
        }
    };

    let written = write_results_file(output_path, output_file, records)
        .and_then(|()| write_skipped_file(skipped_path, skipped_file, skipped));
    if let Err(e) = written {
        discard(output_path);
        discard(skipped_path);
        return Err(e);
    }
    Ok(())
}

fn write_results_file(
    path: &Path,
    file: File,
    records: &[GeocodedRecord],
) -> Result<(), GeocodeError> {
    write_results_to_writer(file, records).map_err(|e| output_error(path, e))?;
    info!(
        "Wrote {} row{} to {}",
        records.len(),
        if records.len() == 1 { "" } else { "s" },
        path.display()
    );
    Ok(())
}

fn write_skipped_file(
    path: &Path,
    file: File,
    skipped: &[SkippedAddress],
) -> Result<(), GeocodeError> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    for entry in skipped {
        csv_writer
            .serialize(entry)
            .map_err(|e| output_error(path, e))?;
    }
    csv_writer
        .flush()
        .map_err(|e| output_error(path, e))?;

    info!(
        "Listed {} skipped address{} in {}",
        skipped.len(),
        if skipped.len() == 1 { "" } else { "es" },
        path.display()
    );
    Ok(())
}

fn discard(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        warn!("Failed to remove incomplete output {}: {}", path.display(), e);
    }
}

fn open_output(path: &Path, overwrite: bool) -> Result<File, GeocodeError> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    options.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            GeocodeError::OutputWrite {
                path: path.to_path_buf(),
                reason: "file already exists and overwriting is disabled".to_string(),
            }
        } else {
            output_error(path, e)
        }
    })
}

fn output_error(path: &Path, e: impl std::fmt::Display) -> GeocodeError {
    GeocodeError::OutputWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
