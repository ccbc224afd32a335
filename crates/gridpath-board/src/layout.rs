//! ASCII board layouts.
//!
//! A layout is one line per row, all of the same width:
//!
//! ```text
//! S.#.
//! ..#E
//! ....
//! ```
//!
//! `.` is open, `#` a wall, `S` the start and `E` the end. Trailing blank
//! lines are ignored. Walls are recorded in row-major order.

use std::fmt;
use std::str::FromStr;

use gridpath_core::{Dims, GridError, Status};

use crate::board::Board;

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no rows.
    Empty,
    /// Row `row` is not as wide as the first row.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `.#SE`.
    InvalidChar { ch: char, row: usize, column: usize },
    /// A second `S` or `E`.
    DuplicateEndpoint {
        status: Status,
        row: usize,
        column: usize,
    },
    /// The layout does not describe a valid grid.
    Grid(GridError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout is empty"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout row {row} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidChar { ch, row, column } => write!(
                f,
                "layout contains invalid character \u{201c}{ch}\u{201d} at row {row}, column {column}"
            ),
            Self::DuplicateEndpoint {
                status,
                row,
                column,
            } => write!(
                f,
                "layout has a second {status} cell at row {row}, column {column}"
            ),
            Self::Grid(e) => write!(f, "layout: {e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for LayoutError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let used = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |last| last + 1);
        let rows = &lines[..used];
        let Some(first) = rows.first() else {
            return Err(LayoutError::Empty);
        };
        let width = first.chars().count();

        let mut statuses = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, ch) in line.chars().enumerate() {
                let status =
                    Status::from_char(ch).ok_or(LayoutError::InvalidChar { ch, row, column })?;
                statuses.push(status);
            }
        }

        let dims = Dims::new(width, rows.len())?;
        let mut board = Board::with_dims(dims);
        for (i, status) in statuses.into_iter().enumerate() {
            let slot = match status {
                Status::Start => &mut board.start,
                Status::End => &mut board.end,
                Status::Blocked => {
                    board.walls.push(i);
                    board.grid.set_status(i, status)?;
                    continue;
                }
                Status::Open => continue,
            };
            if slot.is_some() {
                return Err(LayoutError::DuplicateEndpoint {
                    status,
                    row: dims.row(i),
                    column: dims.column(i),
                });
            }
            *slot = Some(i);
            board.grid.set_status(i, status)?;
        }
        Ok(board)
    }
}

impl Board {
    /// Render the board's statuses in the layout format, one line per row.
    pub fn layout(&self) -> String {
        let dims = self.dims();
        let mut out = String::with_capacity(dims.len() + dims.rows());
        for (i, node) in self.grid.nodes().iter().enumerate() {
            if i > 0 && dims.column(i) == 0 {
                out.push('\n');
            }
            out.push(node.status().to_char());
        }
        out
    }
}
