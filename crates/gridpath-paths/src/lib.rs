//! Shortest-path search over grids with dynamic obstacles.
//!
//! The engine is a pure function of a grid snapshot and two coordinates:
//! [`PathFinder::find_path`] runs a priority-frontier (Dijkstra) search over
//! the four cardinal neighbours of each cell and returns either the path or
//! [`SearchResult::Unreachable`]. Malformed input is reported as a
//! [`SearchError`]; the engine never mutates its input and keeps no state
//! between calls.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | bounds and traversability |
//! | [`WeightedPather`] : [`Pather`] | per-step cost, required by [`PathFinder`] |
//!
//! [`Grid`](gridpath_core::Grid) implements both with a cost of 1 per step.

mod dijkstra;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod path;
#[cfg(test)]
mod proptests;
mod traits;

pub use dijkstra::{PathFinder, find_path};
pub use distance::manhattan;
pub use error::{Endpoint, EndpointFault, PathError, SearchError};
pub use neighbors::Expansion;
pub use path::{Path, SearchResult};
pub use traits::{Pather, WeightedPather};
