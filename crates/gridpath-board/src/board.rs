//! The [`Board`]: selection state for one grid.
//!
//! A board tracks which cell is the start, which is the end, which cells are
//! walls, whether a "pick start" or "pick end" request is pending, and the
//! last path found. A presentation layer drives it with [`Board::click`],
//! [`Board::arm_start`], [`Board::arm_end`], [`Board::clear`] and
//! [`Board::find_path`], then reads the state back to draw it.

use gridpath_core::{BoardConfig, Dims, GridError, Status};
use gridpath_paths::PathGrid;
use log::debug;

/// What a [`Board::click`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Click {
    /// The cell became the start; `previous` is the start it replaced.
    StartSet { previous: Option<usize> },
    /// The cell became the end; `previous` is the end it replaced.
    EndSet { previous: Option<usize> },
    /// An open cell became a wall.
    WallAdded,
    /// A wall was removed.
    WallRemoved,
    /// The start was deselected and a new start pick is pending.
    StartCleared,
    /// The end was deselected and a new end pick is pending.
    EndCleared,
}

/// Outcome of [`Board::find_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Search {
    /// Start or end is not selected; nothing was searched.
    Skipped,
    /// The end cannot be reached from the start.
    NoPath,
    /// The cells after the start up to and including the end.
    Found(Vec<usize>),
}

/// Selection state for a grid, backed by a [`PathGrid`].
pub struct Board {
    pub(crate) grid: PathGrid,
    pub(crate) start: Option<usize>,
    pub(crate) end: Option<usize>,
    pub(crate) walls: Vec<usize>,
    path: Vec<usize>,
    pending_start: bool,
    pending_end: bool,
}

impl Board {
    /// Create a board of open cells with nothing selected.
    pub fn new(config: BoardConfig) -> Result<Self, GridError> {
        Ok(Self::with_dims(config.dims()?))
    }

    /// Create a board of open cells for already validated dimensions.
    pub fn with_dims(dims: Dims) -> Self {
        Self {
            grid: PathGrid::new(dims),
            start: None,
            end: None,
            walls: Vec::new(),
            path: Vec::new(),
            pending_start: false,
            pending_end: false,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The board dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.grid.dims()
    }

    /// Status of the cell at `index`.
    pub fn status(&self, index: usize) -> Result<Status, GridError> {
        self.grid.status(index)
    }

    /// The start cell, if selected.
    #[inline]
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// The end cell, if selected.
    #[inline]
    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// Wall cells in the order they were placed.
    #[inline]
    pub fn walls(&self) -> &[usize] {
        &self.walls
    }

    /// The last path found, ending at the end cell. Empty if the last search
    /// found nothing or the board was cleared since.
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The last path without its final (end) cell: the cells strictly
    /// between start and end.
    pub fn traversed(&self) -> &[usize] {
        match self.path.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// Whether the next click on an open cell selects the start.
    #[inline]
    pub fn pending_start(&self) -> bool {
        self.pending_start
    }

    /// Whether the next click on an open cell selects the end (when no start
    /// pick is pending).
    #[inline]
    pub fn pending_end(&self) -> bool {
        self.pending_end
    }

    /// The underlying engine grid.
    #[inline]
    pub fn grid(&self) -> &PathGrid {
        &self.grid
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Request that the next click on an open cell selects the start.
    pub fn arm_start(&mut self) {
        self.pending_start = true;
    }

    /// Request that the next click on an open cell selects the end.
    pub fn arm_end(&mut self) {
        self.pending_end = true;
    }

    /// Apply a click on the cell at `index`.
    ///
    /// On an open cell, a pending start pick wins over a pending end pick;
    /// with neither pending the cell becomes a wall. Clicking a wall removes
    /// it. Clicking the start or end deselects it and arms a new pick.
    pub fn click(&mut self, index: usize) -> Result<Click, GridError> {
        let click = match self.grid.status(index)? {
            Status::Open if self.pending_start => {
                let previous = self.start.replace(index);
                if let Some(p) = previous {
                    self.grid.set_status(p, Status::Open)?;
                }
                self.grid.set_status(index, Status::Start)?;
                self.pending_start = false;
                Click::StartSet { previous }
            }
            Status::Open if self.pending_end => {
                let previous = self.end.replace(index);
                if let Some(p) = previous {
                    self.grid.set_status(p, Status::Open)?;
                }
                self.grid.set_status(index, Status::End)?;
                self.pending_end = false;
                Click::EndSet { previous }
            }
            Status::Open => {
                self.grid.set_status(index, Status::Blocked)?;
                self.walls.push(index);
                Click::WallAdded
            }
            Status::Blocked => {
                self.grid.set_status(index, Status::Open)?;
                self.walls.retain(|&w| w != index);
                Click::WallRemoved
            }
            Status::Start => {
                self.grid.set_status(index, Status::Open)?;
                self.start = None;
                self.pending_start = true;
                Click::StartCleared
            }
            Status::End => {
                self.grid.set_status(index, Status::Open)?;
                self.end = None;
                self.pending_end = true;
                Click::EndCleared
            }
        };
        debug!("click {index}: {click:?}");
        Ok(click)
    }

    /// Remove every wall, the start, the end and the last path, and cancel
    /// pending picks.
    pub fn clear(&mut self) {
        self.grid.clear_statuses();
        self.walls.clear();
        self.path.clear();
        self.start = None;
        self.end = None;
        self.pending_start = false;
        self.pending_end = false;
        debug!("board cleared");
    }

    /// Search for a path from the start to the end.
    ///
    /// Returns [`Search::Skipped`] without touching the last path unless both
    /// endpoints are selected.
    pub fn find_path(&mut self) -> Result<Search, GridError> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            debug!("search skipped: start={:?} end={:?}", self.start, self.end);
            return Ok(Search::Skipped);
        };

        self.path.clear();
        let path = self.grid.find_path(start, end)?;
        self.path = path;
        if self.path.is_empty() {
            Ok(Search::NoPath)
        } else {
            Ok(Search::Found(self.path.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(columns: usize, rows: usize) -> Board {
        Board::new(BoardConfig::new(columns, rows)).unwrap()
    }

    #[test]
    fn new_board_is_empty() {
        let b = Board::new(BoardConfig::default()).unwrap();
        assert_eq!(b.dims().len(), 180);
        assert_eq!(b.start(), None);
        assert_eq!(b.end(), None);
        assert!(b.walls().is_empty());
        assert!(!b.pending_start() && !b.pending_end());
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(Board::new(BoardConfig::new(0, 4)).is_err());
    }

    #[test]
    fn plain_click_toggles_walls() {
        let mut b = board(3, 3);
        assert_eq!(b.click(4), Ok(Click::WallAdded));
        assert_eq!(b.click(2), Ok(Click::WallAdded));
        assert_eq!(b.status(4), Ok(Status::Blocked));
        assert_eq!(b.walls(), &[4, 2]);
        assert_eq!(b.click(4), Ok(Click::WallRemoved));
        assert_eq!(b.status(4), Ok(Status::Open));
        assert_eq!(b.walls(), &[2]);
    }

    #[test]
    fn armed_click_selects_start_then_end() {
        let mut b = board(3, 3);
        b.arm_start();
        assert_eq!(b.click(0), Ok(Click::StartSet { previous: None }));
        assert!(!b.pending_start());
        b.arm_end();
        assert_eq!(b.click(8), Ok(Click::EndSet { previous: None }));
        assert_eq!(b.start(), Some(0));
        assert_eq!(b.end(), Some(8));
        assert_eq!(b.status(0), Ok(Status::Start));
        assert_eq!(b.status(8), Ok(Status::End));
    }

    #[test]
    fn start_pick_wins_when_both_armed() {
        let mut b = board(3, 3);
        b.arm_end();
        b.arm_start();
        assert_eq!(b.click(1), Ok(Click::StartSet { previous: None }));
        assert!(b.pending_end());
        assert_eq!(b.click(2), Ok(Click::EndSet { previous: None }));
    }

    #[test]
    fn reselecting_start_reopens_previous() {
        let mut b = board(3, 3);
        b.arm_start();
        b.click(0).unwrap();
        b.arm_start();
        assert_eq!(b.click(5), Ok(Click::StartSet { previous: Some(0) }));
        assert_eq!(b.status(0), Ok(Status::Open));
        assert_eq!(b.start(), Some(5));
    }

    #[test]
    fn clicking_endpoint_deselects_and_rearms() {
        let mut b = board(3, 3);
        b.arm_start();
        b.click(0).unwrap();
        b.arm_end();
        b.click(8).unwrap();

        assert_eq!(b.click(0), Ok(Click::StartCleared));
        assert_eq!(b.start(), None);
        assert!(b.pending_start());
        assert_eq!(b.status(0), Ok(Status::Open));

        assert_eq!(b.click(8), Ok(Click::EndCleared));
        assert_eq!(b.end(), None);
        assert!(b.pending_end());

        // The next open click picks the start again.
        assert_eq!(b.click(3), Ok(Click::StartSet { previous: None }));
    }

    #[test]
    fn walls_cannot_become_endpoints() {
        let mut b = board(3, 3);
        b.click(4).unwrap();
        b.arm_start();
        // Clicking a wall removes it even while a start pick is pending.
        assert_eq!(b.click(4), Ok(Click::WallRemoved));
        assert!(b.pending_start());
    }

    #[test]
    fn click_out_of_range() {
        let mut b = board(3, 3);
        assert_eq!(
            b.click(9),
            Err(GridError::IndexOutOfRange { index: 9, len: 9 })
        );
    }

    #[test]
    fn find_path_needs_both_endpoints() {
        let mut b = board(3, 3);
        assert_eq!(b.find_path(), Ok(Search::Skipped));
        b.arm_start();
        b.click(0).unwrap();
        assert_eq!(b.find_path(), Ok(Search::Skipped));
    }

    #[test]
    fn find_path_found_and_traversed() {
        let mut b = board(3, 3);
        b.arm_start();
        b.click(0).unwrap();
        b.arm_end();
        b.click(8).unwrap();
        assert_eq!(b.find_path(), Ok(Search::Found(vec![1, 2, 5, 8])));
        assert_eq!(b.path(), &[1, 2, 5, 8]);
        assert_eq!(b.traversed(), &[1, 2, 5]);
    }

    #[test]
    fn find_path_reports_no_path() {
        let mut b = board(3, 3);
        b.arm_start();
        b.click(0).unwrap();
        b.arm_end();
        b.click(2).unwrap();
        for w in [1, 4, 7] {
            b.click(w).unwrap();
        }
        assert_eq!(b.find_path(), Ok(Search::NoPath));
        assert!(b.path().is_empty());
        assert!(b.traversed().is_empty());

        // Opening the wall in the middle reconnects the halves.
        b.click(4).unwrap();
        assert_eq!(b.find_path(), Ok(Search::Found(vec![3, 4, 5, 2])));
    }

    #[test]
    fn adjacent_endpoints_traverse_nothing() {
        let mut b = board(4, 1);
        b.arm_start();
        b.click(0).unwrap();
        b.arm_end();
        b.click(1).unwrap();
        assert_eq!(b.find_path(), Ok(Search::Found(vec![1])));
        assert!(b.traversed().is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut b = board(3, 3);
        b.arm_start();
        b.click(0).unwrap();
        b.arm_end();
        b.click(8).unwrap();
        b.click(4).unwrap();
        b.find_path().unwrap();
        b.arm_start();

        b.clear();
        assert_eq!(b.start(), None);
        assert_eq!(b.end(), None);
        assert!(b.walls().is_empty());
        assert!(b.path().is_empty());
        assert!(!b.pending_start() && !b.pending_end());
        for i in 0..9 {
            assert_eq!(b.status(i), Ok(Status::Open));
        }
    }

    #[test]
    fn clear_cancels_pick_armed_on_empty_board() {
        let mut b = board(3, 3);
        b.arm_start();
        b.arm_end();
        b.clear();
        assert!(!b.pending_start() && !b.pending_end());
        assert_eq!(b.click(4), Ok(Click::WallAdded));
        assert_eq!(b.start(), None);
    }
}
