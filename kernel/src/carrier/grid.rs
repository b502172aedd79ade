//! `GridV1`: immutable R×C sliding-tile grid.
//!
//! # Layout
//!
//! Tiles are stored row-major in a single boxed slice. Value `0` is the
//! blank; every other value is a numbered tile. A well-formed grid holds each
//! value in `0..rows * cols` exactly once.
//!
//! # Coordinates
//!
//! [`Position`] uses `x` for the column and `y` for the row, both zero-based
//! from the top-left corner.
//!
//! # Construction vs validation
//!
//! [`GridV1::from_rows`] and [`GridV1::from_cells`] check shape only (non-empty,
//! rectangular). [`GridV1::validate`] checks the permutation invariant. The
//! split lets callers load user input first and report every malformation
//! through the same typed error.

use std::fmt;

use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// A tile value. `0` is the blank.
pub type Tile = u16;

/// The blank tile.
pub const BLANK: Tile = 0;

/// Largest number of cells a grid may hold (every value must fit in a [`Tile`]).
pub const MAX_CELLS: usize = Tile::MAX as usize + 1;

/// A cell coordinate: `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Typed failure for grid construction and validation. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[error("grid has no cells")]
    Empty,
    /// A row's length differs from the first row's length.
    #[error("row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A flat cell buffer does not match `rows * cols`.
    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
    /// The grid is larger than a [`Tile`] can number.
    #[error("grid of {cells} cells exceeds the {MAX_CELLS}-cell maximum")]
    TooLarge { cells: usize },
    /// A tile value lies outside `0..rows * cols`.
    #[error("tile {value} is outside 0..={max}")]
    ValueOutOfRange { value: Tile, max: usize },
    /// A tile value appears more than once.
    #[error("tile {value} appears more than once")]
    DuplicateValue { value: Tile },
    /// No blank (`0`) cell is present.
    #[error("grid has no blank tile")]
    MissingBlank,
    /// Two grids that must share dimensions do not.
    #[error("grid is {actual_rows}x{actual_cols}, expected {expected_rows}x{expected_cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
}

/// Canonical hashable identity of a grid's tile arrangement.
///
/// Two grids of the same dimensions are the same search state iff their
/// fingerprints are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(Box<[Tile]>);

/// `GridV1`: an immutable R×C tile arrangement.
///
/// There are no mutating methods. Successor grids are produced by
/// [`crate::operators::slide::apply`], which always allocates a fresh buffer,
/// so nodes sharing history never observe later changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridV1 {
    rows: usize,
    cols: usize,
    cells: Box<[Tile]>,
}

impl GridV1 {
    /// Build a grid from row vectors. Checks shape only.
    ///
    /// # Errors
    ///
    /// - [`GridError::Empty`] if there are no rows or the first row is empty.
    /// - [`GridError::RaggedRow`] if any row length differs from the first.
    /// - [`GridError::TooLarge`] if the grid has more than [`MAX_CELLS`] cells.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.is_empty() || cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Self::from_cells(rows.len(), cols, cells)
    }

    /// Build a grid from a flat row-major buffer. Checks shape only.
    ///
    /// # Errors
    ///
    /// - [`GridError::Empty`] if either dimension is zero.
    /// - [`GridError::CellCountMismatch`] if `cells.len() != rows * cols`.
    /// - [`GridError::TooLarge`] if the grid has more than [`MAX_CELLS`] cells.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Tile>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { cells: usize::MAX })?;
        if expected > MAX_CELLS {
            return Err(GridError::TooLarge { cells: expected });
        }
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: cells.into_boxed_slice(),
        })
    }

    /// The solved layout: tiles `1..R·C` in row-major order, blank last.
    ///
    /// # Errors
    ///
    /// Same shape errors as [`GridV1::from_cells`].
    pub fn ordered(rows: usize, cols: usize) -> Result<Self, GridError> {
        let total = rows.saturating_mul(cols);
        if total > MAX_CELLS {
            return Err(GridError::TooLarge { cells: total });
        }
        let mut cells: Vec<Tile> = (1..total)
            .map(|v| Tile::try_from(v).unwrap_or(Tile::MAX))
            .collect();
        cells.push(BLANK);
        Self::from_cells(rows, cols, cells)
    }

    /// Check the permutation invariant: each value in `0..R·C` exactly once.
    ///
    /// # Errors
    ///
    /// Returns the first violation found in row-major order
    /// ([`GridError::ValueOutOfRange`], [`GridError::DuplicateValue`]), or
    /// [`GridError::MissingBlank`] if the scan completes without a `0`.
    pub fn validate(&self) -> Result<(), GridError> {
        let max = self.cells.len() - 1;
        let mut seen = vec![false; self.cells.len()];
        for &value in self.cells.iter() {
            let idx = usize::from(value);
            if idx > max {
                return Err(GridError::ValueOutOfRange { value, max });
            }
            if seen[idx] {
                return Err(GridError::DuplicateValue { value });
            }
            seen[idx] = true;
        }
        if seen[usize::from(BLANK)] {
            Ok(())
        } else {
            Err(GridError::MissingBlank)
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty grids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `other` has the same dimensions.
    #[must_use]
    pub const fn same_shape(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Row-major tile buffer.
    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Tile at a position. Panics if out of bounds.
    #[must_use]
    pub fn tile_at(&self, pos: Position) -> Tile {
        self.cells[self.index_of(pos)]
    }

    /// Whether `pos` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    /// Row-major index of a position.
    #[must_use]
    pub const fn index_of(&self, pos: Position) -> usize {
        pos.y * self.cols + pos.x
    }

    /// Position of a row-major index.
    #[must_use]
    pub const fn position_of(&self, index: usize) -> Position {
        Position {
            x: index % self.cols,
            y: index / self.cols,
        }
    }

    /// Iterate `(position, tile)` pairs in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &t)| (self.position_of(i), t))
    }

    /// Locate the blank by row-major scan.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::MissingBlank`] if no cell holds `0`.
    pub fn blank_position(&self) -> Result<Position, GridError> {
        self.cells
            .iter()
            .position(|&t| t == BLANK)
            .map(|i| self.position_of(i))
            .ok_or(GridError::MissingBlank)
    }

    /// Canonical identity for duplicate detection.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint(self.cells.clone())
    }

    /// Serialize dimensions and tiles to bytes (little-endian).
    ///
    /// Layout: `rows: u32 ++ cols: u32 ++ tiles: u16*`. Used for content hashing.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(8 + self.cells.len() * 2);
        buf.extend_from_slice(&u32::try_from(self.rows).unwrap_or(u32::MAX).to_le_bytes());
        buf.extend_from_slice(&u32::try_from(self.cols).unwrap_or(u32::MAX).to_le_bytes());
        for tile in self.cells.iter() {
            buf.extend_from_slice(&tile.to_le_bytes());
        }
        buf
    }

    /// Domain-separated content hash of [`Self::identity_bytes`].
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(HashDomain::Grid, &self.identity_bytes())
    }

    /// Copy out as row vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.cols).map(<[Tile]>::to_vec).collect()
    }

    /// A copy with the tiles at `a` and `b` exchanged.
    pub(crate) fn with_swapped(&self, a: Position, b: Position) -> Self {
        let mut cells = self.cells.clone();
        cells.swap(self.index_of(a), self.index_of(b));
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

impl fmt::Display for GridV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.cells.iter().max().map_or(1, |m| m.to_string().len());
        for row in self.cells.chunks(self.cols) {
            for (i, tile) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
