use gridpath_core::{Coord, Direction};

use crate::error::SearchError;

/// The fixed order in which a cell's cardinal neighbours are expanded.
///
/// The order decides which of several equally short paths a search
/// returns. For a given grid and order the result never varies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[Direction; 4]", into = "[Direction; 4]")
)]
pub struct Expansion {
    order: [Direction; 4],
}

impl Default for Expansion {
    /// Up, down, left, right.
    fn default() -> Self {
        Self {
            order: Direction::ALL,
        }
    }
}

impl Expansion {
    /// Create an expansion order. Each direction must appear exactly once.
    pub fn new(order: [Direction; 4]) -> Result<Self, SearchError> {
        for (i, d) in order.iter().enumerate() {
            if order[..i].contains(d) {
                return Err(SearchError::InvalidExpansion(*d));
            }
        }
        Ok(Self { order })
    }

    /// The directions in expansion order.
    #[inline]
    pub fn order(&self) -> [Direction; 4] {
        self.order
    }

    /// The four cardinal neighbours of `c` in expansion order, unfiltered.
    #[inline]
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + use<> {
        let order = self.order;
        order.into_iter().map(move |d| c.step(d))
    }
}

impl TryFrom<[Direction; 4]> for Expansion {
    type Error = SearchError;

    fn try_from(order: [Direction; 4]) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

impl From<Expansion> for [Direction; 4] {
    fn from(e: Expansion) -> Self {
        e.order
    }
}
