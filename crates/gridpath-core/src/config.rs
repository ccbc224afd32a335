//! Board sizing configuration.

use crate::error::GridError;
use crate::geom::Dims;

/// Default number of columns on a board.
pub const DEFAULT_COLUMNS: usize = 18;
/// Default number of rows on a board.
pub const DEFAULT_ROWS: usize = 10;

/// Size of a board, validated into [`Dims`] when the board is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl BoardConfig {
    /// Create a configuration for a `columns` × `rows` board.
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Validate the configuration into grid dimensions.
    pub fn dims(&self) -> Result<Dims, GridError> {
        Dims::new(self.columns, self.rows)
    }
}
