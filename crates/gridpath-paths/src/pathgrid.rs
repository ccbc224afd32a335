use std::collections::VecDeque;

use gridpath_core::{Dims, GridError, Status};

use crate::neighbors::Neighbors;
use crate::node::Node;
use crate::sets::{ClosedSet, OpenSet};

// ---------------------------------------------------------------------------
// PathGrid
// ---------------------------------------------------------------------------

/// Node arena and search coordinator for one fixed-size grid.
///
/// `PathGrid` owns one [`Node`] per cell plus every scratch structure a
/// search needs (open heap, closed bitmap, neighbor buffer, BFS queue and
/// distance map), so repeated queries reuse their allocations. Searches take
/// `&mut self`: statuses cannot change while a search runs.
pub struct PathGrid {
    pub(crate) dims: Dims,
    pub(crate) nodes: Vec<Node>,
    // A* scratch
    pub(crate) open: OpenSet,
    pub(crate) closed: ClosedSet,
    pub(crate) expanded: usize,
    // BFS scratch
    pub(crate) bfs_map: Vec<u32>,
    pub(crate) bfs_queue: VecDeque<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Neighbors,
}

impl PathGrid {
    /// Create a grid of `dims.len()` open cells.
    pub fn new(dims: Dims) -> Self {
        let len = dims.len();
        Self {
            dims,
            nodes: (0..len).map(Node::new).collect(),
            open: OpenSet::new(len),
            closed: ClosedSet::new(len),
            expanded: 0,
            bfs_map: vec![crate::bfs::UNREACHABLE; len],
            bfs_queue: VecDeque::new(),
            nbuf: Neighbors::new(),
        }
    }

    /// The grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Status of the cell at `index`.
    pub fn status(&self, index: usize) -> Result<Status, GridError> {
        let i = self.dims.check(index)?;
        Ok(self.nodes[i].status)
    }

    /// Set the status of the cell at `index`.
    pub fn set_status(&mut self, index: usize, status: Status) -> Result<(), GridError> {
        let i = self.dims.check(index)?;
        self.nodes[i].status = status;
        Ok(())
    }

    /// Set every cell back to [`Status::Open`].
    pub fn clear_statuses(&mut self) {
        for n in self.nodes.iter_mut() {
            n.status = Status::Open;
        }
    }

    /// The node record at `index`, or `None` if out of range.
    #[inline]
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// All node records in index order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes moved to the closed set by the last A* search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Reset every node's transient search fields.
    pub(crate) fn reset_search(&mut self) {
        for n in self.nodes.iter_mut() {
            n.reset();
        }
        self.open.clear();
        self.closed.clear();
        self.expanded = 0;
    }

    /// Validate a search endpoint: in range and not blocked.
    pub(crate) fn check_endpoint(&self, index: usize) -> Result<usize, GridError> {
        let i = self.dims.check(index)?;
        if !self.nodes[i].status.is_passable() {
            return Err(GridError::BlockedEndpoint { index });
        }
        Ok(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: usize, rows: usize) -> PathGrid {
        PathGrid::new(Dims::new(columns, rows).unwrap())
    }

    #[test]
    fn new_grid_is_open() {
        let g = grid(4, 3);
        assert_eq!(g.nodes().len(), 12);
        for (i, n) in g.nodes().iter().enumerate() {
            assert_eq!(n.index(), i);
            assert_eq!(n.status(), Status::Open);
            assert_eq!(n.parent(), None);
        }
    }

    #[test]
    fn status_round_trip_and_bounds() {
        let mut g = grid(3, 3);
        g.set_status(4, Status::Blocked).unwrap();
        assert_eq!(g.status(4), Ok(Status::Blocked));
        assert_eq!(
            g.set_status(9, Status::Blocked),
            Err(GridError::IndexOutOfRange { index: 9, len: 9 })
        );
        assert!(g.status(100).is_err());
        assert!(g.node(9).is_none());
        g.clear_statuses();
        assert_eq!(g.status(4), Ok(Status::Open));
    }

    #[test]
    fn check_endpoint_rejects_walls() {
        let mut g = grid(3, 3);
        g.set_status(2, Status::Blocked).unwrap();
        assert_eq!(g.check_endpoint(0), Ok(0));
        assert_eq!(
            g.check_endpoint(2),
            Err(GridError::BlockedEndpoint { index: 2 })
        );
        assert!(g.check_endpoint(9).is_err());
    }
}
