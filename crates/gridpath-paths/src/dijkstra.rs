use std::collections::BinaryHeap;

use gridpath_core::{Bounds, CellKind, Coord, Grid, GridError};

use crate::error::{Endpoint, EndpointFault, SearchError};
use crate::frontier::Entry;
use crate::neighbors::Expansion;
use crate::path::{Path, SearchResult};
use crate::traits::WeightedPather;

/// Tentative distance of a cell not reached yet.
const UNREACHED: u64 = u64::MAX;

/// Single-source, single-target shortest-path search.
///
/// A `PathFinder` holds only configuration. Every table a search needs
/// (distances, settled flags, predecessors, the frontier) is allocated by
/// [`find_path`](Self::find_path) and dropped when it returns, so one finder
/// can serve any number of grids, sequentially or from several threads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathFinder {
    #[cfg_attr(feature = "serde", serde(default))]
    expansion: Expansion,
}

impl PathFinder {
    /// A finder using the default up, down, left, right expansion order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighbour expansion order (builder).
    pub fn with_expansion(mut self, expansion: Expansion) -> Self {
        self.expansion = expansion;
        self
    }

    #[inline]
    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    /// Compute a shortest path from `source` to `target`.
    ///
    /// Both endpoints must be in bounds and traversable, otherwise the search
    /// fails with [`SearchError::InvalidEndpoints`] (the source is checked
    /// first). When they coincide the result is the single-cell path without
    /// any search. A target that cannot be reached yields
    /// [`SearchResult::Unreachable`].
    ///
    /// The frontier is a binary heap keyed by tentative distance with lazy
    /// deletion: a cell may sit in the heap several times and every entry
    /// after the first to pop is discarded.
    pub fn find_path<P: WeightedPather + ?Sized>(
        &self,
        pather: &P,
        source: Coord,
        target: Coord,
    ) -> Result<SearchResult, SearchError> {
        let bounds = pather.bounds();
        if bounds.is_empty() {
            return Err(SearchError::MalformedGrid(GridError::Empty));
        }
        let si = check_endpoint(pather, Endpoint::Source, source)?;
        let ti = check_endpoint(pather, Endpoint::Target, target)?;

        if si == ti {
            return Ok(SearchResult::Found(Path::single(source)));
        }

        let len = bounds.len();
        let mut dist = vec![UNREACHED; len];
        let mut settled = vec![false; len];
        let mut prev: Vec<Option<usize>> = vec![None; len];
        let mut frontier = BinaryHeap::new();
        let mut seq: u64 = 0;

        dist[si] = 0;
        frontier.push(Entry {
            dist: 0,
            seq,
            idx: si,
        });

        while let Some(Entry { idx: ci, .. }) = frontier.pop() {
            if settled[ci] {
                continue;
            }
            settled[ci] = true;

            if ci == ti {
                return Ok(SearchResult::Found(reconstruct(&prev, bounds, ti)));
            }

            let cp = bounds.coord(ci);
            let current = dist[ci];
            for np in self.expansion.neighbors(cp) {
                let Some(ni) = bounds.index(np) else {
                    continue;
                };
                if settled[ni] || !pather.is_traversable(np) {
                    continue;
                }
                let candidate = current.saturating_add(u64::from(pather.cost(cp, np)));
                if candidate < dist[ni] {
                    dist[ni] = candidate;
                    prev[ni] = Some(ci);
                    seq += 1;
                    frontier.push(Entry {
                        dist: candidate,
                        seq,
                        idx: ni,
                    });
                }
            }
        }

        Ok(SearchResult::Unreachable)
    }

    /// Like [`find_path`](Self::find_path), on a grid given as nested rows.
    ///
    /// Empty or jagged rows fail with [`SearchError::MalformedGrid`].
    pub fn find_path_in_rows<R: AsRef<[CellKind]>>(
        &self,
        rows: &[R],
        source: Coord,
        target: Coord,
    ) -> Result<SearchResult, SearchError> {
        let grid = Grid::from_rows(rows)?;
        self.find_path(&grid, source, target)
    }
}

/// Shortest path on `grid` with the default expansion order.
pub fn find_path(grid: &Grid, source: Coord, target: Coord) -> Result<SearchResult, SearchError> {
    PathFinder::new().find_path(grid, source, target)
}

fn check_endpoint<P: WeightedPather + ?Sized>(
    pather: &P,
    endpoint: Endpoint,
    c: Coord,
) -> Result<usize, SearchError> {
    let invalid = |fault: EndpointFault| SearchError::InvalidEndpoints {
        endpoint,
        coord: c,
        fault,
    };
    let idx = pather
        .bounds()
        .index(c)
        .ok_or_else(|| invalid(EndpointFault::OutOfBounds))?;
    if !pather.is_traversable(c) {
        return Err(invalid(EndpointFault::Wall));
    }
    Ok(idx)
}

/// Walk predecessors back from `target` and reverse into source→target order.
fn reconstruct(prev: &[Option<usize>], bounds: Bounds, target: usize) -> Path {
    let mut coords = vec![bounds.coord(target)];
    let mut ci = target;
    while let Some(pi) = prev[ci] {
        coords.push(bounds.coord(pi));
        ci = pi;
    }
    coords.reverse();
    Path::from_vec(coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use gridpath_core::Direction;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    fn coords(result: &SearchResult) -> Vec<(i32, i32)> {
        result
            .path()
            .expect("expected a path")
            .iter()
            .map(|p| (p.row, p.col))
            .collect()
    }

    #[test]
    fn open_3x3_corner_to_corner() {
        let g = Grid::new(3, 3).unwrap();
        let r = find_path(&g, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(r.path().map(Path::len), Some(5));
        assert_eq!(coords(&r), vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn wall_column_separates() {
        let g = Grid::parse(
            "
            .#.
            .#.
            .#.
            ",
        )
        .unwrap();
        let r = find_path(&g, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(r, SearchResult::Unreachable);
    }

    #[test]
    fn single_row() {
        let g = Grid::new(1, 5).unwrap();
        let r = find_path(&g, c(0, 0), c(0, 4)).unwrap();
        let cols: Vec<i32> = r.path().unwrap().iter().map(|p| p.col).collect();
        assert_eq!(cols, vec![0, 1, 2, 3, 4]);
        assert!(r.path().unwrap().iter().all(|p| p.row == 0));
    }

    #[test]
    fn dead_end_source_routes_through_only_opening() {
        // Source at (1,1) is walled on top, left and right; the only exit is down.
        let g = Grid::parse(
            "
            .#...
            #S#..
            .....
            ....E
            ",
        )
        .unwrap();
        let r = find_path(&g, c(1, 1), c(3, 4)).unwrap();
        let p = r.path().unwrap();
        assert_eq!(p.steps(), 5);
        assert_eq!(p.coords()[1], c(2, 1));
        assert!(p.is_walkable_on(&g));
    }

    #[test]
    fn detour_around_wall() {
        let g = Grid::parse(
            "
            S..#...
            .#.#.#.
            .#...#E
            ",
        )
        .unwrap();
        let r = find_path(&g, c(0, 0), c(2, 6)).unwrap();
        let p = r.path().unwrap();
        assert!(p.is_walkable_on(&g));
        assert_eq!(p.steps(), 12);
    }

    #[test]
    fn same_cell_is_single_element_path() {
        let g = Grid::new(5, 5).unwrap();
        let r = find_path(&g, c(4, 4), c(4, 4)).unwrap();
        assert_eq!(coords(&r), vec![(4, 4)]);
        assert_eq!(r.steps(), Some(0));
    }

    #[test]
    fn same_cell_ignores_surrounding_walls() {
        let g = Grid::parse(
            "
            .#.
            #.#
            .#.
            ",
        )
        .unwrap();
        let r = find_path(&g, c(1, 1), c(1, 1)).unwrap();
        assert_eq!(coords(&r), vec![(1, 1)]);
        assert_eq!(find_path(&g, c(1, 1), c(0, 0)).unwrap(), SearchResult::Unreachable);
    }

    #[test]
    fn no_walls_matches_manhattan() {
        let g = Grid::new(6, 7).unwrap();
        for a in g.bounds() {
            for b in [c(0, 0), c(5, 6), c(2, 3), c(5, 0)] {
                let steps = find_path(&g, a, b).unwrap().steps().unwrap();
                assert_eq!(steps as u32, manhattan(a, b), "{a} -> {b}");
            }
        }
    }

    #[test]
    fn endpoint_on_wall() {
        let g = Grid::new(3, 3).unwrap().with(c(1, 1), CellKind::Wall).unwrap();
        assert_eq!(
            find_path(&g, c(1, 1), c(0, 0)),
            Err(SearchError::InvalidEndpoints {
                endpoint: Endpoint::Source,
                coord: c(1, 1),
                fault: EndpointFault::Wall,
            })
        );
        assert_eq!(
            find_path(&g, c(0, 0), c(1, 1)),
            Err(SearchError::InvalidEndpoints {
                endpoint: Endpoint::Target,
                coord: c(1, 1),
                fault: EndpointFault::Wall,
            })
        );
        // also when both coincide on the wall
        assert!(matches!(
            find_path(&g, c(1, 1), c(1, 1)),
            Err(SearchError::InvalidEndpoints {
                endpoint: Endpoint::Source,
                ..
            })
        ));
    }

    #[test]
    fn endpoint_out_of_bounds() {
        let g = Grid::new(2, 2).unwrap();
        for bad in [c(-1, 0), c(0, -1), c(2, 0), c(0, 2)] {
            assert_eq!(
                find_path(&g, c(0, 0), bad),
                Err(SearchError::InvalidEndpoints {
                    endpoint: Endpoint::Target,
                    coord: bad,
                    fault: EndpointFault::OutOfBounds,
                })
            );
            assert!(matches!(
                find_path(&g, bad, c(0, 0)),
                Err(SearchError::InvalidEndpoints {
                    endpoint: Endpoint::Source,
                    fault: EndpointFault::OutOfBounds,
                    ..
                })
            ));
        }
    }

    #[test]
    fn malformed_rows() {
        use gridpath_core::CellKind::Empty as E;
        let finder = PathFinder::new();
        let none: [[CellKind; 0]; 0] = [];
        assert_eq!(
            finder.find_path_in_rows(&none, c(0, 0), c(0, 0)),
            Err(SearchError::MalformedGrid(GridError::Empty))
        );
        assert!(matches!(
            finder.find_path_in_rows(&[vec![E, E], vec![E]], c(0, 0), c(0, 1)),
            Err(SearchError::MalformedGrid(GridError::Jagged { row: 1, .. }))
        ));
        let r = finder
            .find_path_in_rows(&[[E, E], [E, E]], c(0, 0), c(1, 1))
            .unwrap();
        assert_eq!(r.steps(), Some(2));
    }

    #[test]
    fn repeated_search_is_identical() {
        let g = Grid::parse(
            "
            ......
            .##.#.
            ...#..
            .#....
            ",
        )
        .unwrap();
        let first = find_path(&g, c(0, 0), c(3, 5)).unwrap();
        for _ in 0..5 {
            assert_eq!(find_path(&g, c(0, 0), c(3, 5)).unwrap(), first);
        }
    }

    #[test]
    fn expansion_order_breaks_ties() {
        let g = Grid::new(2, 2).unwrap();
        let down_first = find_path(&g, c(0, 0), c(1, 1)).unwrap();
        assert_eq!(coords(&down_first), vec![(0, 0), (1, 0), (1, 1)]);

        let right_first = PathFinder::new()
            .with_expansion(
                Expansion::new([
                    Direction::Right,
                    Direction::Down,
                    Direction::Left,
                    Direction::Up,
                ])
                .unwrap(),
            )
            .find_path(&g, c(0, 0), c(1, 1))
            .unwrap();
        assert_eq!(coords(&right_first), vec![(0, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn search_does_not_modify_grid() {
        let g = Grid::parse("S.#\n..#\n..E").unwrap();
        let before = g.to_string();
        let _ = find_path(&g, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(g.to_string(), before);
    }

    /// A pather where entering a `Path`-tagged cell costs more, to show the
    /// search stays correct with non-unit weights.
    struct Mud(Grid);

    impl crate::Pather for Mud {
        fn bounds(&self) -> Bounds {
            self.0.bounds()
        }
        fn is_traversable(&self, c: Coord) -> bool {
            self.0.is_traversable(c)
        }
    }

    impl WeightedPather for Mud {
        fn cost(&self, _from: Coord, to: Coord) -> u32 {
            if self.0.at(to) == Some(CellKind::Path) { 10 } else { 1 }
        }
    }

    #[test]
    fn weighted_costs_prefer_cheaper_detour() {
        let g = Grid::parse(
            "
            .*.
            .*.
            ...
            ",
        )
        .unwrap();
        let r = PathFinder::new().find_path(&Mud(g), c(0, 0), c(0, 2)).unwrap();
        assert_eq!(
            coords(&r),
            vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)]
        );
    }

    #[test]
    fn empty_pather_is_malformed() {
        struct Nothing;
        impl crate::Pather for Nothing {
            fn bounds(&self) -> Bounds {
                Bounds::new(0, 0)
            }
            fn is_traversable(&self, _: Coord) -> bool {
                true
            }
        }
        impl WeightedPather for Nothing {
            fn cost(&self, _: Coord, _: Coord) -> u32 {
                1
            }
        }
        assert_eq!(
            PathFinder::new().find_path(&Nothing, c(0, 0), c(0, 0)),
            Err(SearchError::MalformedGrid(GridError::Empty))
        );
    }

    #[test]
    fn finder_is_shareable_across_threads() {
        let g = Grid::new(8, 8).unwrap();
        let finder = PathFinder::new();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let g = g.clone();
                std::thread::spawn(move || finder.find_path(&g, c(0, 0), c(7, i)).unwrap())
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap().steps(), Some(7 + i));
        }
    }
}
