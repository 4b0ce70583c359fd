//! Address reader.
//!
//! Reads a comma-delimited file without a header row and returns the first
//! column of every row, in file order.

use std::path::Path;

use csv::{Position, ReaderBuilder, StringRecord};
use log::info;

use crate::error_handling::GeocodeError;
use crate::geocode::Address;

#[cfg(test)]
mod tests;

/// Reads addresses from `path`.
///
/// # Errors
///
/// - [`GeocodeError::InputFileNotFound`] if the file cannot be read
/// - [`GeocodeError::MalformedInputRow`] if a row cannot be parsed or has no columns
pub fn read_addresses(path: &Path) -> Result<Vec<Address>, GeocodeError> {
    let data = std::fs::read(path).map_err(|source| GeocodeError::InputFileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let addresses = parse_addresses(&data)?;
    info!(
        "Read {} address{} from {}",
        addresses.len(),
        if addresses.len() == 1 { "" } else { "es" },
        path.display()
    );
    Ok(addresses)
}

/// Parses addresses from CSV bytes.
///
/// Rows may have any number of columns; only the first is used and it is taken
/// verbatim. A blank line is a row without columns and fails the parse.
pub fn parse_addresses(data: &[u8]) -> Result<Vec<Address>, GeocodeError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut addresses = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let start = csv_reader.position().clone();
        let fallback_row = addresses.len() as u64 + 1;
        let has_record = csv_reader
            .read_record(&mut record)
            .map_err(|e| GeocodeError::MalformedInputRow {
                row: e.position().map(|p| p.line()).unwrap_or(fallback_row),
                reason: e.to_string(),
            })?;

        // The parser drops empty lines before a record (or before end of input)
        if let Some(row) = skipped_blank_line(data, &start) {
            return Err(no_columns(row));
        }
        if !has_record {
            break;
        }
        addresses.push(first_column(&record, start.line())?);
    }
    Ok(addresses)
}

/// Line number of a blank line starting at `start`, if there is one.
fn skipped_blank_line(data: &[u8], start: &Position) -> Option<u64> {
    let mut offset = usize::try_from(start.byte()).ok()?;
    let mut line = start.line();
    // A CRLF terminator ends its record at the CR, leaving the LF behind
    if offset > 0 && data.get(offset - 1) == Some(&b'\r') && data.get(offset) == Some(&b'\n') {
        offset += 1;
        line += 1;
    }
    match data.get(offset) {
        Some(b'\n') | Some(b'\r') => Some(line),
        _ => None,
    }
}

fn no_columns(row: u64) -> GeocodeError {
    GeocodeError::MalformedInputRow {
        row,
        reason: "row has no columns".to_string(),
    }
}

fn first_column(record: &StringRecord, row: u64) -> Result<Address, GeocodeError> {
    record
        .get(0)
        .map(Address::from)
        .ok_or_else(|| no_columns(row))
}
