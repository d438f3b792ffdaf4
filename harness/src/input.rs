//! Reading arrangements from text.
//!
//! An arrangement is one line of whitespace-separated non-negative integers in
//! row-major order, e.g. `1 2 3 4 5 6 7 0 8`. This module only checks tokens
//! and their count; permutation and blank checks belong to the kernel.

use std::io::{BufRead, Write};

/// Error reading an arrangement.
#[derive(Debug)]
pub enum InputError {
    /// The line had no tokens.
    Empty,
    /// A token is not a non-negative integer.
    BadToken { index: usize, token: String },
    /// Token count differs from the configured `n²`.
    WrongCount { expected: usize, actual: usize },
    /// The reader hit end of input before a line was read.
    UnexpectedEof,
    /// Underlying I/O failure.
    Io(std::io::Error),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no values given"),
            Self::BadToken { index, token } => {
                write!(f, "value #{} ({token:?}) is not a non-negative integer", index + 1)
            }
            Self::WrongCount { expected, actual } => {
                write!(f, "expected {expected} values, got {actual}")
            }
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parse one arrangement line.
///
/// When `expected_len` is set the token count must match it exactly.
///
/// # Errors
///
/// Returns [`InputError`] for an empty line, a bad token, or a wrong count.
pub fn parse_arrangement(line: &str, expected_len: Option<usize>) -> Result<Vec<u32>, InputError> {
    let cells = line
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<u32>().map_err(|_| InputError::BadToken {
                index,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if cells.is_empty() {
        return Err(InputError::Empty);
    }
    if let Some(expected) = expected_len {
        if cells.len() != expected {
            return Err(InputError::WrongCount {
                expected,
                actual: cells.len(),
            });
        }
    }
    Ok(cells)
}

/// Write `prompt` on its own line, then read and parse one line.
///
/// # Errors
///
/// Returns [`InputError::UnexpectedEof`] at end of input, or any error from
/// [`parse_arrangement`].
pub fn prompt_arrangement<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    expected_len: Option<usize>,
) -> Result<Vec<u32>, InputError> {
    writeln!(writer, "{prompt}")?;
    writer.flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::UnexpectedEof);
    }
    parse_arrangement(&line, expected_len)
}
