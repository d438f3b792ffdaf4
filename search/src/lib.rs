//! Tileslide Search: cost-guided search over sliding-tile boards with an
//! auditable expansion log.
//!
//! This crate depends only on `tileslide_kernel`, never on
//! `tileslide_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! tileslide_kernel  ←  tileslide_search  ←  tileslide_harness
//! (boards, hashing)    (frontier, driver)    (input, trace, reports, CLI)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchNode`] -- immutable node with `f == g + h`, stored in a [`node::NodeArena`]
//! - [`frontier::Frontier`] -- min-heap keyed by `(f, g)`
//! - [`visited::VisitedSet`] -- canonical keys of every state ever generated
//! - [`search::SearchDriver`] -- the `Ready → Running → Solved | Exhausted` loop
//! - [`policy::SearchPolicy`] -- which children re-enter the frontier
//! - [`observer::SearchObserver`] -- optional per-iteration trace callback
//! - [`graph::SearchGraph`] -- expansion-event audit log (canonical JSON)

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod observer;
pub mod path;
pub mod policy;
pub mod search;
pub mod visited;
