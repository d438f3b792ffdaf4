//! Typed board construction errors.

/// Failure to build a [`crate::board::Board`] from a cell sequence.
///
/// Both variants are detected at construction time and never retried: the
/// kernel is deterministic, so the same cells always fail the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The cell count does not describe a square board of side `>= 2`.
    ///
    /// `side` is set when an explicit side length was requested and the cell
    /// count did not match it.
    InvalidDimension { len: usize, side: Option<usize> },
    /// The cells are not a permutation of `0..len` with exactly one blank.
    MalformedState { detail: String },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimension { len, side: None } => {
                write!(f, "invalid dimension: {len} cells is not a square board of side >= 2")
            }
            Self::InvalidDimension {
                len,
                side: Some(side),
            } => {
                write!(
                    f,
                    "invalid dimension: side {side} needs {} cells, got {len}",
                    side.saturating_mul(*side)
                )
            }
            Self::MalformedState { detail } => write!(f, "malformed state: {detail}"),
        }
    }
}

impl std::error::Error for BoardError {}
