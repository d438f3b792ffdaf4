//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Running out of frontier
//! is a normal outcome and is reported as
//! [`crate::search::SearchOutcome::Exhausted`], never as an error.

use tileslide_kernel::error::BoardError;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before the driver leaves `Ready`. No
/// `SearchGraph` is produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The initial or goal cells do not form a valid board.
    Board(BoardError),
    /// Initial and goal boards have different side lengths.
    SideMismatch { initial: usize, goal: usize },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Board(e) => write!(f, "{e}"),
            Self::SideMismatch { initial, goal } => {
                write!(f, "initial board is {initial}x{initial} but goal is {goal}x{goal}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            Self::SideMismatch { .. } => None,
        }
    }
}

impl From<BoardError> for SearchError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}
