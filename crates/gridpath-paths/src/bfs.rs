use gridpath_core::GridError;

use crate::PathGrid;

/// Sentinel distance meaning "unreachable" in BFS maps.
pub const UNREACHABLE: u32 = u32::MAX;

impl PathGrid {
    /// Compute a breadth-first distance map from `source`.
    ///
    /// Each step has cost 1 and blocked cells are never entered. The returned
    /// slice holds one distance per cell index, [`UNREACHABLE`] for cells with
    /// no route from `source`.
    pub fn bfs_map(&mut self, source: usize) -> Result<&[u32], GridError> {
        let si = self.check_endpoint(source)?;

        self.bfs_map.fill(UNREACHABLE);
        self.bfs_queue.clear();

        self.bfs_map[si] = 0;
        self.bfs_queue.push_back(si);

        while let Some(ci) = self.bfs_queue.pop_front() {
            let next = self.bfs_map[ci] + 1;
            let neighbors = self.nbuf.cardinal(self.dims, ci, |n| {
                self.nodes[n].status.is_passable() && self.bfs_map[n] == UNREACHABLE
            });
            for &ni in neighbors {
                self.bfs_map[ni] = next;
                self.bfs_queue.push_back(ni);
            }
        }

        Ok(self.bfs_map.as_slice())
    }

    /// Query the BFS distance at `index`.
    ///
    /// Returns [`UNREACHABLE`] if the index is out of range or was not
    /// reached by the last `bfs_map` call.
    pub fn bfs_at(&self, index: usize) -> u32 {
        self.bfs_map.get(index).copied().unwrap_or(UNREACHABLE)
    }
}
