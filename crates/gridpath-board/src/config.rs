//! Board configuration.

use gridpath_core::{Bounds, Coord};
use gridpath_paths::Expansion;

use crate::error::BoardError;

/// Configuration for creating a [`Board`](crate::Board).
///
/// The default is a 10×10 board with the start in the top-left corner, the
/// end in the bottom-right corner, and automatic recomputation of a
/// displayed path after edits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Coord,
    /// `None` places the end in the bottom-right corner.
    pub end: Option<Coord>,
    pub expansion: Expansion,
    /// Whether edits made while a path is displayed request a recompute
    /// (consumed by [`Board::settle`](crate::Board::settle)) or simply drop
    /// the path until the next explicit search.
    pub auto_recompute: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            start: Coord::ZERO,
            end: None,
            expansion: Expansion::default(),
            auto_recompute: true,
        }
    }
}

impl BoardConfig {
    /// A `rows × cols` board with the remaining settings at their defaults.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_start(mut self, start: Coord) -> Self {
        self.start = start;
        self
    }

    pub fn with_end(mut self, end: Coord) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_expansion(mut self, expansion: Expansion) -> Self {
        self.expansion = expansion;
        self
    }

    pub fn with_auto_recompute(mut self, on: bool) -> Self {
        self.auto_recompute = on;
        self
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.rows, self.cols)
    }

    /// The configured end, or the bottom-right corner.
    pub fn end(&self) -> Coord {
        self.end.unwrap_or(Coord::new(self.rows - 1, self.cols - 1))
    }

    /// Check dimensions and endpoint placement.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(BoardError::InvalidConfig(format!(
                "board must have at least one row and column, got {}",
                self.bounds()
            )));
        }
        let bounds = self.bounds();
        for (name, c) in [("start", self.start), ("end", self.end())] {
            if !bounds.contains(c) {
                return Err(BoardError::InvalidConfig(format!(
                    "{name} {c} is outside the {bounds} board"
                )));
            }
        }
        if self.start == self.end() {
            return Err(BoardError::InvalidConfig(format!(
                "start and end both at {}",
                self.start
            )));
        }
        Ok(())
    }
}
