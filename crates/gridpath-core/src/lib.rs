//! **gridpath-core** — shared types for 4-connected grid pathfinding.
//!
//! This crate provides the foundational types used across the *gridpath*
//! workspace: grid geometry ([`Dims`], [`Point`]), the per-cell [`Status`],
//! the [`GridError`] type and the [`BoardConfig`] used to size a board.

pub mod config;
pub mod error;
pub mod geom;
pub mod status;

pub use config::BoardConfig;
pub use error::GridError;
pub use geom::{Dims, Point};
pub use status::Status;
