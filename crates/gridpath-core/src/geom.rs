//! Geometry primitives: [`Point`] and [`Dims`].
//!
//! Cells are addressed by a single linear index in row-major order. [`Dims`]
//! owns the index ↔ (row, column) mapping; [`Point`] is the 2D view of an
//! index, with `x` as the column and `y` as the row.

use std::fmt;

use crate::error::GridError;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right (columns), Y grows down (rows).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Row-major: the same order as linear indices.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions: `columns` × `rows` cells, indexed `0..columns * rows`.
///
/// A `Dims` value is always non-empty; [`Dims::new`] rejects zero sizes and
/// sizes too large for `u32` search scores.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDims"))]
pub struct Dims {
    columns: usize,
    rows: usize,
}

impl Dims {
    /// Create dimensions for a `columns` × `rows` grid.
    pub fn new(columns: usize, rows: usize) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::ZeroDimension { columns, rows });
        }
        // Scores are u32 and no f value reaches cells + columns + rows.
        // Point coordinates are i32.
        let bound = columns
            .checked_mul(rows)
            .and_then(|cells| cells.checked_add(columns))
            .and_then(|n| n.checked_add(rows));
        if !bound.is_some_and(|n| u32::try_from(n).is_ok())
            || i32::try_from(columns).is_err()
            || i32::try_from(rows).is_err()
        {
            return Err(GridError::TooLarge { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Number of columns (cells per row).
    #[inline]
    pub const fn columns(self) -> usize {
        self.columns
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.columns * self.rows
    }

    /// Whether `index` addresses a cell of this grid.
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index < self.len()
    }

    /// Row of `index` (`index / columns`).
    #[inline]
    pub const fn row(self, index: usize) -> usize {
        index / self.columns
    }

    /// Column of `index` (`index % columns`).
    #[inline]
    pub const fn column(self, index: usize) -> usize {
        index % self.columns
    }

    /// Convert a linear index to a `Point`. The index is not bounds-checked.
    #[inline]
    pub fn point(self, index: usize) -> Point {
        Point::new(self.column(index) as i32, self.row(index) as i32)
    }

    /// Convert a `Point` to a linear index. Returns `None` if out of range.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        if x >= self.columns || y >= self.rows {
            return None;
        }
        Some(y * self.columns + x)
    }

    /// Fail with [`GridError::IndexOutOfRange`] unless `index` is in range.
    #[inline]
    pub fn check(self, index: usize) -> Result<usize, GridError> {
        if self.contains(index) {
            Ok(index)
        } else {
            Err(GridError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Whether `a` and `b` are 4-adjacent: one step apart in the same row or
    /// the same column. Steps never wrap across a row boundary.
    pub fn is_adjacent(self, a: usize, b: usize) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        (hi - lo == 1 && self.row(lo) == self.row(hi)) || hi - lo == self.columns
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDims {
    columns: usize,
    rows: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDims> for Dims {
    type Error = GridError;

    fn try_from(raw: RawDims) -> Result<Self, GridError> {
        Dims::new(raw.columns, raw.rows)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn dims_round_trip() {
        let d = Dims::new(4, 7).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        let back: Dims = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn dims_deserialize_validates() {
        let res: Result<Dims, _> = serde_json::from_str(r#"{"columns":0,"rows":3}"#);
        assert!(res.is_err());
    }
}
