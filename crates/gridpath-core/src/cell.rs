//! The [`CellKind`] tag and the positioned [`Cell`].

use crate::geom::Coord;

/// What occupies a grid cell.
///
/// Only [`CellKind::Wall`] blocks movement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Path,
}

impl CellKind {
    /// Every kind, in declaration order.
    pub const ALL: [CellKind; 5] = [
        CellKind::Empty,
        CellKind::Wall,
        CellKind::Start,
        CellKind::End,
        CellKind::Path,
    ];

    /// Whether a path may pass through a cell of this kind.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// Character used by the text grid format.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Wall => '#',
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::Path => '*',
        }
    }

    /// Inverse of [`symbol`](Self::symbol).
    #[inline]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(CellKind::Empty),
            '#' => Some(CellKind::Wall),
            'S' => Some(CellKind::Start),
            'E' => Some(CellKind::End),
            '*' => Some(CellKind::Path),
            _ => None,
        }
    }
}

/// A cell kind together with its position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Coord,
    pub kind: CellKind,
}

impl Cell {
    #[inline]
    pub const fn new(pos: Coord, kind: CellKind) -> Self {
        Self { pos, kind }
    }

    /// Set the kind (builder).
    #[inline]
    pub const fn with_kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    #[inline]
    pub const fn is_traversable(self) -> bool {
        self.kind.is_traversable()
    }
}
