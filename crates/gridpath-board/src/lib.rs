//! Editable pathfinding board.
//!
//! [`Board`] is the caller side of the search engine in `gridpath-paths`:
//! it holds the authoritative grid, applies wall toggles and endpoint drags
//! as new immutable snapshots, and turns "the grid changed while a path was
//! displayed" into a recompute request that is consumed once per batch of
//! edits. Rendering and raw device input stay with the front end, which
//! feeds [`Input`] events in and presents [`Outcome`]s and
//! [`Board::snapshot`] grids.

mod board;
mod config;
mod error;
mod input;

pub use board::Board;
pub use config::BoardConfig;
pub use error::BoardError;
pub use input::{Input, Outcome};
