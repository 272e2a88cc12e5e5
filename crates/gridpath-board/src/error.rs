use gridpath_core::{Coord, GridError};
use gridpath_paths::SearchError;
use thiserror::Error;

/// Errors raised by [`Board`](crate::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("invalid board configuration: {0}")]
    InvalidConfig(String),
    /// Start and end may not sit on a wall.
    #[error("cannot place an endpoint on the wall at {0}")]
    EndpointOnWall(Coord),
    /// Start and end may not share a cell.
    #[error("{0} already holds the other endpoint")]
    EndpointCollision(Coord),
}
