//! Proof module: canonical hashing and canonical JSON.
//!
//! Depends on nothing internal. `board` uses it for state fingerprints; the
//! search and harness crates use it for artifact digests.

pub mod canon;
pub mod hash;
pub mod hash_domain;
