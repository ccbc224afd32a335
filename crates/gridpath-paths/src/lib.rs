//! Shortest paths on 4-connected grids.
//!
//! The engine is [`PathGrid`]: a dense arena of [`Node`]s, one per grid cell,
//! together with the scratch structures a search needs. It provides:
//!
//! - **A\*** shortest-path search with a Manhattan heuristic
//!   ([`PathGrid::find_path`])
//! - **BFS** unit-step distance maps ([`PathGrid::bfs_map`])
//!
//! Every move costs 1 and diagonal moves are never taken. All scratch
//! buffers are owned by the `PathGrid`, so repeated queries reuse their
//! allocations.
//!
//! ```
//! use gridpath_core::{Dims, Status};
//! use gridpath_paths::PathGrid;
//!
//! let mut grid = PathGrid::new(Dims::new(3, 3).unwrap());
//! for wall in [1, 4, 7] {
//!     grid.set_status(wall, Status::Blocked).unwrap();
//! }
//! assert!(grid.find_path(0, 2).unwrap().is_empty());
//! ```

mod astar;
mod bfs;
mod distance;
mod neighbors;
mod node;
mod pathgrid;
mod sets;

pub use bfs::UNREACHABLE;
pub use distance::grid_manhattan;
pub use neighbors::Neighbors;
pub use node::Node;
pub use pathgrid::PathGrid;
