//! Errors for malformed grids and out-of-range cell indices.

use std::fmt;

/// Errors raised when a grid or a search request is malformed.
///
/// An unreachable end cell is *not* an error: searches report it as an
/// empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one column and one row.
    ZeroDimension { columns: usize, rows: usize },
    /// The cell count (or a coordinate) does not fit the index types.
    TooLarge { columns: usize, rows: usize },
    /// A cell index outside `0..len`.
    IndexOutOfRange { index: usize, len: usize },
    /// A search endpoint sits on a blocked cell.
    BlockedEndpoint { index: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { columns, rows } => {
                write!(f, "grid must not be empty: {columns} columns x {rows} rows")
            }
            Self::TooLarge { columns, rows } => {
                write!(f, "grid too large: {columns} columns x {rows} rows")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "cell index {index} out of range for {len} cells")
            }
            Self::BlockedEndpoint { index } => {
                write!(f, "search endpoint {index} is blocked")
            }
        }
    }
}

impl std::error::Error for GridError {}
