use gridpath_core::GridError;
use log::{debug, trace};

use crate::PathGrid;
use crate::distance::grid_manhattan;

impl PathGrid {
    /// Compute a shortest 4-connected path from `start` to `end` using A*
    /// with a Manhattan heuristic.
    ///
    /// Returns the cells after `start` up to and including `end`, in
    /// start→end order. An empty path means `end` is unreachable (or
    /// `start == end`); a single step yields `[end]`.
    ///
    /// Among open nodes with equal `f`, the one discovered first is expanded
    /// first. A node already in the open set is re-parented only on a
    /// strictly cheaper route.
    ///
    /// Fails if either endpoint is out of range or blocked.
    pub fn find_path(&mut self, start: usize, end: usize) -> Result<Vec<usize>, GridError> {
        self.check_endpoint(start)?;
        self.check_endpoint(end)?;

        self.reset_search();
        self.open.push(start, 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = self.open.pop() else {
                break 'search false;
            };

            if ci == end {
                break 'search true;
            }

            self.closed.insert(ci);
            self.expanded += 1;
            let current_g = self.nodes[ci].g;
            trace!(
                "expand {ci} g={current_g} f={} open={}",
                self.nodes[ci].f,
                self.open.len()
            );

            let neighbors = nbuf.cardinal(self.dims, ci, |n| {
                self.nodes[n].status.is_passable() && !self.closed.contains(n)
            });

            for &ni in neighbors {
                let candidate = current_g + 1;
                let best = if !self.open.contains(ni) {
                    self.nodes[ni].h = grid_manhattan(self.dims, ni, end);
                    true
                } else {
                    candidate < self.nodes[ni].g
                };
                if !best {
                    continue;
                }

                let n = &mut self.nodes[ni];
                n.parent = Some(ci);
                n.g = candidate;
                n.f = n.g + n.h;
                self.open.push(ni, n.f);
            }
        };

        self.nbuf = nbuf;

        if !found {
            debug!(
                "no path {start} -> {end} ({} nodes expanded)",
                self.expanded
            );
            return Ok(Vec::new());
        }

        // Reconstruct path, leaving out the start.
        let mut path = Vec::new();
        let mut ci = end;
        while let Some(parent) = self.nodes[ci].parent {
            path.push(ci);
            ci = parent;
        }
        path.reverse();
        debug!(
            "path {start} -> {end}: {} steps ({} nodes expanded)",
            path.len(),
            self.expanded
        );
        Ok(path)
    }
}
