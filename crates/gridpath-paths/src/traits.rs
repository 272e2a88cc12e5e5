use gridpath_core::{Bounds, Coord, Grid};

/// Minimal pathfinding interface: the searchable rectangle and which of its
/// cells can be entered.
pub trait Pather {
    /// The rectangle searched. Coordinates outside it are never expanded.
    fn bounds(&self) -> Bounds;

    /// Whether a path may pass through `c`. Only called for in-bounds `c`.
    fn is_traversable(&self, c: Coord) -> bool;
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to the adjacent `to`. Must be > 0.
    fn cost(&self, from: Coord, to: Coord) -> u32;
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    #[inline]
    fn is_traversable(&self, c: Coord) -> bool {
        Grid::is_traversable(self, c)
    }
}

/// Every step on a [`Grid`] costs 1.
impl WeightedPather for Grid {
    #[inline]
    fn cost(&self, _from: Coord, _to: Coord) -> u32 {
        1
    }
}
