use std::fmt;

use gridpath_core::{Coord, Direction, GridError};
use thiserror::Error;

/// Which end of the requested path an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Target => f.write_str("target"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EndpointFault {
    OutOfBounds,
    Wall,
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointFault::OutOfBounds => f.write_str("out of bounds"),
            EndpointFault::Wall => f.write_str("on a wall"),
        }
    }
}

/// Malformed input to a search.
///
/// An unreachable target is not an error; it is reported as
/// [`SearchResult::Unreachable`](crate::SearchResult::Unreachable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The grid is empty or not rectangular.
    #[error("malformed grid: {0}")]
    MalformedGrid(#[from] GridError),
    /// The source or target is outside the grid or sits on a wall.
    #[error("invalid {endpoint} {coord}: {fault}")]
    InvalidEndpoints {
        endpoint: Endpoint,
        coord: Coord,
        fault: EndpointFault,
    },
    /// An expansion order that is not a permutation of the four directions.
    #[error("expansion order lists {0} more than once")]
    InvalidExpansion(Direction),
}

/// A coordinate sequence that cannot be a [`Path`](crate::Path).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path has no cells")]
    Empty,
    /// Two consecutive cells are not one cardinal step apart.
    #[error("path jumps from {from} to {to}")]
    Disjoint { from: Coord, to: Coord },
}
