//! Interactive input file prompt.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::config::INPUT_PROMPT;

/// Asks for the input file name and reads one line from `input`.
///
/// Surrounding whitespace, including the line break, is removed.
///
/// # Errors
///
/// Fails when the prompt cannot be written, `input` cannot be read, or the
/// answer is empty.
pub fn prompt_for_input_file<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<PathBuf> {
    writeln!(output, "{INPUT_PROMPT}").context("Failed to write prompt")?;
    write!(output, "> ").context("Failed to write prompt")?;
    output.flush().context("Failed to write prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read input file name")?;

    let name = line.trim();
    if name.is_empty() {
        bail!("No input file name given");
    }
    Ok(PathBuf::from(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_reads_file_name() {
        let mut output = Vec::new();
        let path = prompt_for_input_file("addresses.csv\n".as_bytes(), &mut output).unwrap();

        assert_eq!(path, PathBuf::from("addresses.csv"));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Please enter name of csv file with full addresses: \n> "
        );
    }

    #[test]
    fn test_prompt_trims_whitespace() {
        let path = prompt_for_input_file("  my addresses.csv \r\n".as_bytes(), Vec::new()).unwrap();
        assert_eq!(path, PathBuf::from("my addresses.csv"));
    }

    #[test]
    fn test_prompt_rejects_empty_answer() {
        let err = prompt_for_input_file("\n".as_bytes(), Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "No input file name given");
    }

    #[test]
    fn test_prompt_rejects_end_of_input() {
        assert!(prompt_for_input_file("".as_bytes(), Vec::new()).is_err());
    }
}
