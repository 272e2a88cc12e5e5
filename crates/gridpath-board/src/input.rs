//! Editor input and the outcomes reported back to the presenter.

use gridpath_core::Coord;

/// A pointer or button event, already mapped to grid coordinates by the
/// front end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Pointer pressed over a cell.
    Press(Coord),
    /// Pointer moved onto a cell.
    Enter(Coord),
    /// Pointer released; ends the current batch of edits.
    Release,
    /// The find/clear button.
    FindOrClear,
}

/// What a search-related operation did, for the front end to present.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A path is now displayed.
    PathShown { steps: usize },
    /// No path connects start and end; nothing is displayed.
    NoPath,
    /// The displayed path was removed.
    PathCleared,
}
