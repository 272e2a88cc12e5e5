//! **gridpath-core**: grid snapshots for shortest-path search.
//!
//! This crate provides the foundational types shared across the *gridpath*
//! crates: `(row, col)` geometry, cell kinds, an immutable rectangular
//! [`Grid`] snapshot and its plain-text format.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
mod text;

pub use cell::{Cell, CellKind};
pub use error::GridError;
pub use geom::{Bounds, BoundsIter, Coord, Direction};
pub use grid::Grid;
