use std::collections::HashSet;

use gridpath_core::Coord;

use crate::error::PathError;
use crate::traits::Pather;

/// A path from source to target, both included.
///
/// Consecutive coordinates are one cardinal step apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Coord>", into = "Vec<Coord>")
)]
pub struct Path(Vec<Coord>);

impl Path {
    /// A path that has already arrived: just `c`.
    #[inline]
    pub fn single(c: Coord) -> Self {
        Self(vec![c])
    }

    /// Wrap coordinates known to form a non-empty path.
    #[inline]
    pub(crate) fn from_vec(coords: Vec<Coord>) -> Self {
        debug_assert!(!coords.is_empty());
        Self(coords)
    }

    /// Number of cells on the path, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a path holds at least its source.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves, one less than [`len`](Self::len).
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    #[inline]
    pub fn source(&self) -> Coord {
        self.0[0]
    }

    #[inline]
    pub fn target(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.0.contains(&c)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Coord> {
        self.0
    }

    /// Whether this path can be walked on `pather`: every step is a single
    /// cardinal move, no cell repeats, and every cell is in bounds and
    /// traversable.
    pub fn is_walkable_on<P: Pather + ?Sized>(&self, pather: &P) -> bool {
        let bounds = pather.bounds();
        let mut seen = HashSet::with_capacity(self.0.len());
        let cells_ok = self
            .0
            .iter()
            .all(|&c| bounds.contains(c) && pather.is_traversable(c) && seen.insert(c));
        cells_ok && self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

impl TryFrom<Vec<Coord>> for Path {
    type Error = PathError;

    /// Accept `coords` if it is non-empty and every step is a single
    /// cardinal move.
    fn try_from(coords: Vec<Coord>) -> Result<Self, Self::Error> {
        if coords.is_empty() {
            return Err(PathError::Empty);
        }
        if let Some(w) = coords.windows(2).find(|w| !w[0].is_adjacent(w[1])) {
            return Err(PathError::Disjoint {
                from: w[0],
                to: w[1],
            });
        }
        Ok(Self(coords))
    }
}

impl From<Path> for Vec<Coord> {
    fn from(p: Path) -> Self {
        p.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Path {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Outcome of a well-formed search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchResult {
    /// A shortest path. Single-element when source and target coincide.
    Found(Path),
    /// No sequence of traversable cells connects source and target.
    Unreachable,
}

impl SearchResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Found(p) => Some(p),
            SearchResult::Unreachable => None,
        }
    }

    #[inline]
    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchResult::Found(p) => Some(p),
            SearchResult::Unreachable => None,
        }
    }

    /// Moves on the found path, `None` when unreachable.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.path().map(Path::steps)
    }
}
