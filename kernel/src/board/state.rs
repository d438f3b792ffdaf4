//! `Board`: one full arrangement of tiles and the blank.

use crate::error::BoardError;
use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// The value that marks the blank cell.
pub const BLANK: u32 = 0;

/// Smallest side length the search is defined for.
pub const MIN_SIDE: usize = 2;

/// A validated square arrangement of `side * side` cells in row-major order.
///
/// Invariants (enforced by every constructor):
/// - `cells.len() == side * side` and `side >= MIN_SIDE`
/// - `cells` is a permutation of `0..cells.len()`
/// - `blank` is the index of the single `BLANK` cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    side: usize,
    cells: Vec<u32>,
    blank: usize,
}

impl Board {
    /// Build a board, inferring the side length from the cell count.
    ///
    /// # Errors
    ///
    /// - [`BoardError::InvalidDimension`] if `cells.len()` is not a perfect
    ///   square of a side `>= 2`.
    /// - [`BoardError::MalformedState`] if the cells are not a permutation of
    ///   `0..len` with exactly one blank.
    pub fn new(cells: Vec<u32>) -> Result<Self, BoardError> {
        let side = side_for_len(cells.len())?;
        Self::with_side(side, cells)
    }

    /// Build a board with an explicit side length.
    ///
    /// # Errors
    ///
    /// - [`BoardError::InvalidDimension`] if `side < 2` or
    ///   `cells.len() != side * side`.
    /// - [`BoardError::MalformedState`] on a bad permutation or blank count.
    pub fn with_side(side: usize, cells: Vec<u32>) -> Result<Self, BoardError> {
        if side < MIN_SIDE || side.checked_mul(side) != Some(cells.len()) {
            return Err(BoardError::InvalidDimension {
                len: cells.len(),
                side: Some(side),
            });
        }
        let blank = blank_position(&cells)?;
        check_permutation(&cells)?;
        Ok(Self { side, cells, blank })
    }

    /// The solved arrangement `1, 2, ..., n²-1, 0` for a given side.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimension`] if `side < 2`.
    pub fn solved(side: usize) -> Result<Self, BoardError> {
        let len = side.checked_mul(side).ok_or(BoardError::InvalidDimension {
            len: usize::MAX,
            side: Some(side),
        })?;
        let upper = u32::try_from(len).map_err(|_| BoardError::InvalidDimension {
            len,
            side: Some(side),
        })?;
        let mut cells: Vec<u32> = (1..upper).collect();
        cells.push(BLANK);
        Self::with_side(side, cells)
    }

    /// Side length `n`.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells (`n²`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; boards have at least four cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Index of the blank cell.
    #[must_use]
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Value at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.cells.get(index).copied()
    }

    /// Return a copy with the values at `a` and `b` swapped.
    ///
    /// When one of the two indices is the blank this is a slide; the blank
    /// position of the copy follows the swapped value. The input is untouched.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range. Callers obtain indices from
    /// [`super::legal_moves`], which only yields in-range cells.
    #[must_use]
    pub fn apply_move(&self, a: usize, b: usize) -> Self {
        let mut cells = self.cells.clone();
        cells.swap(a, b);
        let blank = if self.blank == a {
            b
        } else if self.blank == b {
            a
        } else {
            self.blank
        };
        Self {
            side: self.side,
            cells,
            blank,
        }
    }

    /// Canonical dedup key: cell values in row-major order joined with `,`.
    #[must_use]
    pub fn canonical_key(&self) -> String {
        let mut key = String::with_capacity(self.cells.len() * 3);
        for (i, value) in self.cells.iter().enumerate() {
            if i > 0 {
                key.push(',');
            }
            key.push_str(&value.to_string());
        }
        key
    }

    /// Identity bytes for hashing: side as `u32` LE, then each cell as `u32` LE.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(4 * (self.cells.len() + 1));
        // side² cells each fit u32, so side does too.
        let side = u32::try_from(self.side).unwrap_or(u32::MAX);
        bytes.extend_from_slice(&side.to_le_bytes());
        for value in &self.cells {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    /// Domain-separated content hash of [`Board::identity_bytes`].
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(HashDomain::BoardIdentity, &self.identity_bytes())
    }

    /// Row-major rows, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.side)
    }
}

/// Rows separated by newlines; cells separated by a space; the blank is a space.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if *value == BLANK {
                    write!(f, "{:>width$}", "")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
        }
        Ok(())
    }
}

/// Position of the single blank in `cells`.
///
/// # Errors
///
/// Returns [`BoardError::MalformedState`] if there is no blank or more than one.
pub fn blank_position(cells: &[u32]) -> Result<usize, BoardError> {
    let mut found = None;
    for (i, value) in cells.iter().enumerate() {
        if *value != BLANK {
            continue;
        }
        if found.is_some() {
            let count = cells.iter().filter(|v| **v == BLANK).count();
            return Err(BoardError::MalformedState {
                detail: format!("expected exactly one blank, found {count}"),
            });
        }
        found = Some(i);
    }
    found.ok_or_else(|| BoardError::MalformedState {
        detail: "no blank cell (value 0)".into(),
    })
}

/// Side length `n` for a cell count of `n²`.
///
/// # Errors
///
/// Returns [`BoardError::InvalidDimension`] if `len` is not a perfect square
/// or the side would be smaller than [`MIN_SIDE`].
pub fn side_for_len(len: usize) -> Result<usize, BoardError> {
    let mut side = 0usize;
    while (side + 1).saturating_mul(side + 1) <= len {
        side += 1;
    }
    if side < MIN_SIDE || side * side != len {
        return Err(BoardError::InvalidDimension { len, side: None });
    }
    Ok(side)
}

fn check_permutation(cells: &[u32]) -> Result<(), BoardError> {
    let mut seen = vec![false; cells.len()];
    for (i, value) in cells.iter().enumerate() {
        let slot = usize::try_from(*value)
            .ok()
            .and_then(|v| seen.get_mut(v))
            .ok_or_else(|| BoardError::MalformedState {
                detail: format!(
                    "value {value} at index {i} is outside 0..{}",
                    cells.len()
                ),
            })?;
        if *slot {
            return Err(BoardError::MalformedState {
                detail: format!("value {value} appears more than once"),
            });
        }
        *slot = true;
    }
    Ok(())
}
