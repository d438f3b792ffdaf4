//! Board states and slide generation.
//!
//! A [`Board`] is always valid once constructed: square, side `>= 2`, and a
//! permutation of `0..n²` where `0` is the blank. Every successor produced by
//! [`apply_move`] is a board of the same side.

pub mod moves;
pub mod parity;
pub mod state;

pub use moves::{apply_move, legal_moves, legal_slides, Direction};
pub use parity::reachable;
pub use state::{blank_position, side_for_len, Board, BLANK, MIN_SIDE};
