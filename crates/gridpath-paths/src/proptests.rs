//! Randomised checks of the search against a breadth-first oracle.

use std::collections::VecDeque;

use gridpath_core::{Bounds, CellKind, Coord, Grid};
use proptest::prelude::*;

use crate::{PathFinder, SearchResult, find_path, manhattan};

/// Random grid of up to 8×8 with ~30% walls; the two endpoints are kept open.
fn scenario() -> impl Strategy<Value = (Grid, Coord, Coord)> {
    (1..9i32, 1..9i32).prop_flat_map(|(rows, cols)| {
        let n = (rows * cols) as usize;
        (
            proptest::collection::vec(proptest::bool::weighted(0.3), n),
            0..rows,
            0..cols,
            0..rows,
            0..cols,
        )
            .prop_map(move |(walls, sr, sc, tr, tc)| {
                let source = Coord::new(sr, sc);
                let target = Coord::new(tr, tc);
                let bounds = Bounds::new(rows, cols);
                let grid = Grid::from_fn(rows, cols, |c| {
                    let wall = bounds.index(c).is_some_and(|i| walls[i]);
                    if wall && c != source && c != target {
                        CellKind::Wall
                    } else {
                        CellKind::Empty
                    }
                })
                .unwrap();
                (grid, source, target)
            })
    })
}

fn open_scenario() -> impl Strategy<Value = (Grid, Coord, Coord)> {
    (1..12i32, 1..12i32).prop_flat_map(|(rows, cols)| {
        (0..rows, 0..cols, 0..rows, 0..cols).prop_map(move |(sr, sc, tr, tc)| {
            (
                Grid::new(rows, cols).unwrap(),
                Coord::new(sr, sc),
                Coord::new(tr, tc),
            )
        })
    })
}

fn bfs_steps(grid: &Grid, source: Coord, target: Coord) -> Option<usize> {
    let b = grid.bounds();
    let mut dist: Vec<Option<usize>> = vec![None; b.len()];
    let mut queue = VecDeque::new();
    dist[b.index(source).unwrap()] = Some(0);
    queue.push_back(source);
    while let Some(p) = queue.pop_front() {
        let d = dist[b.index(p).unwrap()].unwrap();
        if p == target {
            return Some(d);
        }
        for n in p.neighbors_4() {
            if let Some(i) = b.index(n) {
                if grid.is_traversable(n) && dist[i].is_none() {
                    dist[i] = Some(d + 1);
                    queue.push_back(n);
                }
            }
        }
    }
    None
}

proptest! {
    #[test]
    fn length_matches_oracle((grid, source, target) in scenario()) {
        let result = find_path(&grid, source, target).unwrap();
        prop_assert_eq!(result.steps(), bfs_steps(&grid, source, target));
    }

    #[test]
    fn paths_are_walkable((grid, source, target) in scenario()) {
        if let SearchResult::Found(path) = find_path(&grid, source, target).unwrap() {
            prop_assert!(path.is_walkable_on(&grid));
            prop_assert_eq!(path.source(), source);
            prop_assert_eq!(path.target(), target);
        }
    }

    #[test]
    fn repeat_search_is_identical((grid, source, target) in scenario()) {
        let finder = PathFinder::new();
        let a = finder.find_path(&grid, source, target).unwrap();
        let b = finder.find_path(&grid, source, target).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn open_grid_is_manhattan((grid, source, target) in open_scenario()) {
        let steps = find_path(&grid, source, target).unwrap().steps().unwrap();
        prop_assert_eq!(steps as u32, manhattan(source, target));
    }

    #[test]
    fn same_endpoint_is_single_cell((grid, source, _target) in scenario()) {
        let result = find_path(&grid, source, source).unwrap();
        prop_assert_eq!(result.path().map(|p| p.coords().to_vec()), Some(vec![source]));
    }
}
