//! Report directory persistence.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   search_graph.json   canonical JSON, the full SearchGraph
//!   report.json         canonical JSON, the RunReport
//!   graph_digest.txt    ASCII digest of search_graph.json ("sha256:...")
//! ```
//!
//! The directory path is never part of any hash surface. Verification is
//! fail-closed: missing files, extra files, non-canonical JSON, and digest
//! mismatches are all errors.

use std::collections::BTreeSet;
use std::path::Path;

use tileslide_kernel::proof::canon::{canonical_json_bytes, CanonError};
use tileslide_kernel::proof::hash::{canonical_hash, ContentHash};
use tileslide_kernel::proof::hash_domain::HashDomain;
use tileslide_search::graph::SearchGraph;

use crate::runner::RunReport;

const GRAPH_FILENAME: &str = "search_graph.json";
const REPORT_FILENAME: &str = "report.json";
const DIGEST_FILENAME: &str = "graph_digest.txt";

const REPORT_FILENAMES: &[&str] = &[GRAPH_FILENAME, REPORT_FILENAME, DIGEST_FILENAME];

/// Error writing or verifying a report directory.
#[derive(Debug)]
pub enum ReportError {
    Io { detail: String },
    Canon(CanonError),
    /// A required file is missing.
    MissingFile { filename: String },
    /// A file not in the layout exists in the directory.
    ExtraFile { name: String },
    /// A JSON file does not parse.
    Parse { filename: String, detail: String },
    /// A JSON file is valid but not in canonical form.
    NotCanonical { filename: String },
    /// A stored digest differs from the recomputed one.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Canon(e) => write!(f, "canonical JSON error: {e}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::ExtraFile { name } => write!(f, "unexpected extra file: {name}"),
            Self::Parse { filename, detail } => write!(f, "{filename}: parse error: {detail}"),
            Self::NotCanonical { filename } => write!(f, "{filename}: not canonical JSON"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(f, "digest mismatch: stored={stored}, recomputed={recomputed}")
            }
        }
    }
}

impl std::error::Error for ReportError {}

impl From<CanonError> for ReportError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// Digests recovered from a verified report directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedReport {
    /// Digest of `search_graph.json`.
    pub graph_digest: ContentHash,
    /// Digest of `report.json`.
    pub report_digest: ContentHash,
}

/// Write `report` and `graph` to `dir`, creating it if needed.
///
/// Returns the digest of the written `report.json`.
///
/// # Errors
///
/// Returns [`ReportError`] on I/O failure or canonical JSON error.
pub fn write_report_dir(
    dir: &Path,
    report: &RunReport,
    graph: &SearchGraph,
) -> Result<ContentHash, ReportError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportError::Io {
        detail: format!("create_dir_all {}: {e}", dir.display()),
    })?;

    let graph_bytes = graph.to_canonical_json_bytes()?;
    let graph_digest = canonical_hash(HashDomain::SearchGraph, &graph_bytes);
    let report_bytes = canonical_json_bytes(&report.to_json())?;

    write_atomic(&dir.join(GRAPH_FILENAME), &graph_bytes)?;
    write_atomic(&dir.join(REPORT_FILENAME), &report_bytes)?;
    write_atomic(&dir.join(DIGEST_FILENAME), graph_digest.as_str().as_bytes())?;

    Ok(canonical_hash(HashDomain::ReportArtifact, &report_bytes))
}

/// Re-read a report directory and check it end to end.
///
/// `graph_digest.txt` and the `graph_digest` field of `report.json` must both
/// equal the digest recomputed from `search_graph.json`.
///
/// # Errors
///
/// Returns [`ReportError`] on the first failed check.
pub fn verify_report_dir(dir: &Path) -> Result<VerifiedReport, ReportError> {
    let graph_bytes = read_required(dir, GRAPH_FILENAME)?;
    let report_bytes = read_required(dir, REPORT_FILENAME)?;
    let stored = read_required(dir, DIGEST_FILENAME)?;

    for filename in list_files(dir)? {
        if !REPORT_FILENAMES.contains(&filename.as_str()) {
            return Err(ReportError::ExtraFile { name: filename });
        }
    }

    ensure_canonical(GRAPH_FILENAME, &graph_bytes)?;
    let report_value = ensure_canonical(REPORT_FILENAME, &report_bytes)?;

    let recomputed = canonical_hash(HashDomain::SearchGraph, &graph_bytes);
    let stored_text = String::from_utf8_lossy(&stored);
    let stored = ContentHash::parse(stored_text.trim()).ok_or_else(|| ReportError::Parse {
        filename: DIGEST_FILENAME.to_string(),
        detail: format!("expected \"algorithm:hex\", got {:?}", stored_text.trim()),
    })?;
    if stored != recomputed {
        return Err(ReportError::DigestMismatch {
            stored: stored.as_str().to_string(),
            recomputed: recomputed.as_str().to_string(),
        });
    }
    let in_report = report_value["graph_digest"].as_str().unwrap_or_default();
    if in_report != recomputed.as_str() {
        return Err(ReportError::DigestMismatch {
            stored: in_report.to_string(),
            recomputed: recomputed.as_str().to_string(),
        });
    }

    Ok(VerifiedReport {
        graph_digest: recomputed,
        report_digest: canonical_hash(HashDomain::ReportArtifact, &report_bytes),
    })
}

fn ensure_canonical(filename: &str, bytes: &[u8]) -> Result<serde_json::Value, ReportError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| ReportError::Parse {
            filename: filename.to_string(),
            detail: e.to_string(),
        })?;
    if canonical_json_bytes(&value)? != bytes {
        return Err(ReportError::NotCanonical {
            filename: filename.to_string(),
        });
    }
    Ok(value)
}

/// Write via temp file + rename in the same directory.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportError> {
    let dir = path.parent().ok_or_else(|| ReportError::Io {
        detail: "no parent directory".into(),
    })?;
    let temp_name = format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);

    std::fs::write(&temp_path, content).map_err(|e| ReportError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| ReportError::Io {
        detail: format!("rename {} to {}: {e}", temp_path.display(), path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportError::MissingFile {
        filename: filename.to_string(),
    })
}

/// Regular files in `dir`, skipping leftover temp files.
fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportError> {
    let io = |e: std::io::Error| ReportError::Io {
        detail: format!("read_dir {}: {e}", dir.display()),
    };
    let mut files = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(io)? {
        let entry = entry.map_err(io)?;
        if !entry.file_type().map_err(io)?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if !name.starts_with(".tmp_") {
                files.insert(name.to_string());
            }
        }
    }
    Ok(files)
}
