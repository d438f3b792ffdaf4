//! Canonical JSON bytes: the one serialization used for hashing.
//!
//! Rules:
//!
//! 1. Object keys sorted lexicographically (byte order), at every depth.
//! 2. Compact separators, no whitespace.
//! 3. Numbers must be integers (`i64` or `u64`); floats are rejected so that
//!    digests never depend on float formatting.
//!
//! The value is first normalized (keys re-inserted in sorted order, numbers
//! checked) and then written with `serde_json`'s compact writer.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
    /// The compact writer failed.
    Write { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Write { detail } => write!(f, "canonical JSON write failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an integer.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let normalized = normalize(value)?;
    serde_json::to_vec(&normalized).map_err(|e| CanonError::Write {
        detail: e.to_string(),
    })
}

fn normalize(value: &serde_json::Value) -> Result<serde_json::Value, CanonError> {
    use serde_json::Value;

    Ok(match value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Value::Number(n.clone())
            } else {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(normalize)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = serde_json::Map::new();
            for key in keys {
                sorted.insert(key.clone(), normalize(&map[key])?);
            }
            Value::Object(sorted)
        }
        other => other.clone(),
    })
}
