//! Board state for the gridpath engine: start/end selection, walls, the
//! last path found, and an ASCII layout format.

pub mod board;
pub mod layout;

pub use board::{Board, Click, Search};
pub use layout::LayoutError;
