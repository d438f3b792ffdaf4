//! Tileslide Kernel: board states, legal slides, heuristics, and canonical hashing.
//!
//! # API Surface
//!
//! - [`board::Board`] -- a validated `n x n` arrangement with exactly one blank
//! - [`board::legal_moves`] / [`board::apply_move`] -- successor generation
//! - [`heuristic::misplaced_tiles`] -- the default remaining-distance estimate
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashes
//!
//! # Module Dependency Direction
//!
//! `error` ← `board` ← `heuristic`, and `proof` ← `board`.
//!
//! One-way only. No cycles. The kernel has no notion of search; it only knows
//! what a state is and which states are one slide apart.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod error;
pub mod heuristic;
pub mod proof;
