use std::io::Write;

use super::*;

fn addresses(input: &str) -> Vec<String> {
    parse_addresses(input.as_bytes())
        .expect("input should parse")
        .into_iter()
        .map(|a| a.as_str().to_string())
        .collect()
}

#[test]
fn test_reads_first_column_in_order() {
    let input = "444 De Haro St\n1 Infinite Loop\n350 Fifth Avenue\n";
    assert_eq!(
        addresses(input),
        vec!["444 De Haro St", "1 Infinite Loop", "350 Fifth Avenue"]
    );
}

#[test]
fn test_empty_input_yields_no_addresses() {
    assert!(addresses("").is_empty());
}

#[test]
fn test_quoted_field_keeps_embedded_commas() {
    let input = "\"444 De Haro St, San Francisco, CA 94107\",ignored\n";
    assert_eq!(
        addresses(input),
        vec!["444 De Haro St, San Francisco, CA 94107"]
    );
}

#[test]
fn test_unquoted_commas_split_columns() {
    // Unquoted commas start new columns; only the first is the address
    let input = "444 De Haro St, San Francisco, CA 94107\n";
    assert_eq!(addresses(input), vec!["444 De Haro St"]);
}

#[test]
fn test_rows_with_different_column_counts() {
    let input = "a\nb,c,d\ne,f\n";
    assert_eq!(addresses(input), vec!["a", "b", "e"]);
}

#[test]
fn test_addresses_are_taken_verbatim() {
    let input = "  12 Elm St  \n,second column only\n";
    assert_eq!(addresses(input), vec!["  12 Elm St  ", ""]);
}

#[test]
fn test_crlf_line_endings() {
    let input = "a\r\nb,c\r\nd\r\n";
    assert_eq!(addresses(input), vec!["a", "b", "d"]);
}

fn blank_row(input: &str) -> u64 {
    match parse_addresses(input.as_bytes()) {
        Err(GeocodeError::MalformedInputRow { row, reason }) => {
            assert_eq!(reason, "row has no columns");
            row
        }
        other => panic!("expected MalformedInputRow, got {other:?}"),
    }
}

#[test]
fn test_blank_line_between_rows_is_malformed() {
    assert_eq!(blank_row("a\n\nb\n"), 2);
    assert_eq!(blank_row("1 Main St\n2 Oak Ave\n\n3 Elm St\n"), 3);
}

#[test]
fn test_blank_line_with_crlf_is_malformed() {
    assert_eq!(blank_row("a\r\n\r\nb\r\n"), 2);
}

#[test]
fn test_leading_and_trailing_blank_lines_are_malformed() {
    assert_eq!(blank_row("\na\n"), 1);
    assert_eq!(blank_row("a\nb\n\n"), 3);
}

#[test]
fn test_quoted_empty_field_is_a_row() {
    assert_eq!(addresses("\"\"\nb\n"), vec!["", "b"]);
}

#[test]
fn test_no_header_detection() {
    let input = "Address\n1 Main St\n";
    assert_eq!(addresses(input), vec!["Address", "1 Main St"]);
}

#[test]
fn test_row_without_columns_is_malformed() {
    let err = first_column(&StringRecord::new(), 7).unwrap_err();
    match err {
        GeocodeError::MalformedInputRow { row, reason } => {
            assert_eq!(row, 7);
            assert_eq!(reason, "row has no columns");
        }
        other => panic!("expected MalformedInputRow, got {other:?}"),
    }
}

#[test]
fn test_invalid_utf8_is_malformed() {
    let input: &[u8] = b"1 Main St\n\xff\xfe Broken\n";
    let err = parse_addresses(input).unwrap_err();
    assert!(
        matches!(err, GeocodeError::MalformedInputRow { .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_missing_file_is_input_file_not_found() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("does_not_exist.csv");

    match read_addresses(&path) {
        Err(GeocodeError::InputFileNotFound { path: reported, .. }) => {
            assert_eq!(reported, path);
        }
        other => panic!("expected InputFileNotFound, got {other:?}"),
    }
}

#[test]
fn test_read_addresses_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "\"1 Main St, Springfield\"").expect("Failed to write");
    writeln!(file, "2 Oak Ave").expect("Failed to write");
    file.flush().expect("Failed to flush");

    let addresses = read_addresses(file.path()).expect("file should parse");
    assert_eq!(
        addresses,
        vec![
            Address::from("1 Main St, Springfield"),
            Address::from("2 Oak Ave")
        ]
    );
}
