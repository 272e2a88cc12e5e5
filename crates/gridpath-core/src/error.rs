use thiserror::Error;

use crate::geom::{Bounds, Coord};

/// Errors raised while building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[error("grid is empty")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// More rows or columns than a coordinate can address.
    #[error("grid of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },
    /// The text format contained a character that names no cell kind.
    #[error("invalid cell symbol \u{201c}{ch}\u{201d} at {pos}")]
    InvalidSymbol { ch: char, pos: Coord },
    #[error("{coord} is outside the {bounds} grid")]
    OutOfBounds { coord: Coord, bounds: Bounds },
}
