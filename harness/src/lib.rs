//! Tileslide Harness: everything around the search core.
//!
//! The harness reads arrangements, builds boards, runs the search, prints
//! progress, and persists reports. Search logic lives in `tileslide_search`.
//!
//! # Pipeline
//!
//! ```text
//! input::parse_arrangement() × 2 → runner::run()
//!   → Board::with_side() → search() [→ trace::ConsoleTrace]
//!   → RunReport → report::write_report_dir()
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod input;
pub mod render;
pub mod report;
pub mod runner;
pub mod trace;
