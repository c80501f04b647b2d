use std::error::Error;
use std::io::{self, BufRead, Write};

use nsg_core::{ErrorInfo, NsgError};
use regex::Regex;

const DIGITS: &str = "^[0-9]+$";

/// Parses a non-negative decimal integer made of ASCII digits only.
///
/// Only the line terminator is stripped; surrounding spaces are malformed.
pub fn parse_natural(raw: &str, field: &str) -> Result<u64, NsgError> {
    let pattern = Regex::new(DIGITS).map_err(|err| {
        NsgError::Input(ErrorInfo::new("invalid-pattern", err.to_string()))
    })?;
    let trimmed = raw.trim_end_matches(['\n', '\r']);
    if !pattern.is_match(trimmed) {
        return Err(NsgError::Input(
            ErrorInfo::new("not-a-number", format!("{field} must be a non-negative integer"))
                .with_context("input", trimmed),
        ));
    }
    trimmed.parse::<u64>().map_err(|_| {
        NsgError::Input(
            ErrorInfo::new("out-of-range", format!("{field} does not fit in 64 bits"))
                .with_context("input", trimmed),
        )
    })
}

/// Prints `label` and reads one line from `reader`.
pub fn prompt(label: &str, reader: &mut dyn BufRead) -> Result<String, Box<dyn Error>> {
    let mut stdout = io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}

/// Raw text of the flag when present, otherwise one line prompted on stdin.
pub fn read_raw(flag: Option<&str>, label: &str) -> Result<String, Box<dyn Error>> {
    match flag {
        Some(raw) => Ok(raw.to_string()),
        None => prompt(label, &mut io::stdin().lock()),
    }
}

/// Uses the flag when present, otherwise prompts on stdin.
pub fn resolve(flag: Option<&str>, label: &str, field: &str) -> Result<u64, Box<dyn Error>> {
    Ok(parse_natural(&read_raw(flag, label)?, field)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_digit_strings() {
        assert_eq!(parse_natural("17", "genus").unwrap(), 17);
        assert_eq!(parse_natural("5\n", "genus").unwrap(), 5);
        assert_eq!(parse_natural("5\r\n", "genus").unwrap(), 5);
        assert_eq!(parse_natural("0", "genus").unwrap(), 0);
    }

    #[test]
    fn rejects_signs_and_letters() {
        for raw in ["", "\n", "-3", "+3", "3.0", "abc", "1 2", " 5", "5 ", "\t5", " 5\n"] {
            let err = parse_natural(raw, "genus").unwrap_err();
            assert_eq!(err.code(), "not-a-number", "input {raw:?}");
        }
    }

    #[test]
    fn rejects_overflow() {
        let err = parse_natural("99999999999999999999999", "genus").unwrap_err();
        assert_eq!(err.code(), "out-of-range");
    }

    #[test]
    fn flags_skip_the_prompt() {
        assert_eq!(read_raw(Some("7"), "Genus: ").unwrap(), "7");
    }

    #[test]
    fn prompt_reads_one_line() {
        let mut reader = io::Cursor::new(b"42\nrest\n".to_vec());
        assert_eq!(prompt("Genus: ", &mut reader).unwrap(), "42\n");
    }
}
