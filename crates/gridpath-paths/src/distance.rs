use gridpath_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// On an obstacle-free grid this is exactly the number of steps of a
/// shortest cardinal path.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
