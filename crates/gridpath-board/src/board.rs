//! The editable [`Board`].
//!
//! A board is the single authoritative value behind an interactive path
//! editor. It owns the base grid (empty, wall, start and end cells only),
//! the displayed path and the pointer drag state. Every edit replaces the
//! grid with a new snapshot; searches always run on the current snapshot.
//!
//! Edits never search by themselves. An edit that invalidates a displayed
//! path raises a recompute request instead, and [`Board::settle`] consumes
//! that request once, so a whole drag gesture costs a single search.

use gridpath_core::{CellKind, Coord, Grid, GridError};
use gridpath_paths::{Expansion, Path, PathFinder, SearchResult};

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::input::{Input, Outcome};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Drag {
    Idle,
    Painting,
    Start,
    End,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mark {
    Start,
    End,
}

/// Editable grid with one start, one end, walls and an optional displayed
/// path.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    start: Coord,
    end: Coord,
    finder: PathFinder,
    auto_recompute: bool,
    path: Option<Path>,
    recompute: bool,
    drag: Drag,
}

impl Board {
    /// Create an empty board from a configuration.
    pub fn new(config: &BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let end = config.end();
        let grid = Grid::new(config.rows, config.cols)?
            .with_cells([(config.start, CellKind::Start), (end, CellKind::End)])?;
        Ok(Self {
            grid,
            start: config.start,
            end,
            finder: PathFinder::new().with_expansion(config.expansion),
            auto_recompute: config.auto_recompute,
            path: None,
            recompute: false,
            drag: Drag::Idle,
        })
    }

    /// Create a board from an existing grid.
    ///
    /// The grid must hold exactly one start and one end cell. `Path` cells
    /// are treated as empty; the new board displays no path.
    pub fn from_grid(grid: &Grid) -> Result<Self, BoardError> {
        let start = single(grid, CellKind::Start)?;
        let end = single(grid, CellKind::End)?;
        let base = grid.with_cells(grid.positions(CellKind::Path).map(|c| (c, CellKind::Empty)))?;
        Ok(Self {
            grid: base,
            start,
            end,
            finder: PathFinder::new(),
            auto_recompute: true,
            path: None,
            recompute: false,
            drag: Drag::Idle,
        })
    }

    /// The base grid, without the path overlay.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// The displayed path, if any.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    #[inline]
    pub fn is_path_shown(&self) -> bool {
        self.path.is_some()
    }

    /// Whether an edit is waiting for [`settle`](Self::settle) to recompute.
    #[inline]
    pub fn recompute_requested(&self) -> bool {
        self.recompute
    }

    #[inline]
    pub fn auto_recompute(&self) -> bool {
        self.auto_recompute
    }

    pub fn set_auto_recompute(&mut self, on: bool) {
        self.auto_recompute = on;
        if !on {
            self.recompute = false;
        }
    }

    /// Change the tie-break order. A displayed path is dropped like after
    /// any other edit.
    pub fn set_expansion(&mut self, expansion: Expansion) {
        if expansion == self.finder.expansion() {
            return;
        }
        self.finder = self.finder.with_expansion(expansion);
        self.invalidate();
    }

    /// The grid to render: the base grid with the displayed path drawn as
    /// `Path` cells. Start and end keep their own kinds.
    pub fn snapshot(&self) -> Result<Grid, BoardError> {
        let Some(path) = &self.path else {
            return Ok(self.grid.clone());
        };
        let overlay = path
            .iter()
            .filter(|&&c| self.grid.at(c) == Some(CellKind::Empty))
            .map(|&c| (c, CellKind::Path));
        Ok(self.grid.with_cells(overlay)?)
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    /// Flip an empty cell to a wall or a wall back to empty.
    ///
    /// Start and end cells are left alone. Returns whether the grid changed.
    pub fn toggle_wall(&mut self, c: Coord) -> Result<bool, BoardError> {
        let next = match self.kind_at(c)? {
            CellKind::Empty => CellKind::Wall,
            CellKind::Wall => CellKind::Empty,
            CellKind::Start | CellKind::End | CellKind::Path => return Ok(false),
        };
        self.grid = self.grid.with(c, next)?;
        log::trace!("cell {c} is now {next:?}");
        self.invalidate();
        Ok(true)
    }

    /// Move the start to `c`. Returns whether it moved.
    pub fn move_start(&mut self, c: Coord) -> Result<bool, BoardError> {
        self.move_mark(Mark::Start, c)
    }

    /// Move the end to `c`. Returns whether it moved.
    pub fn move_end(&mut self, c: Coord) -> Result<bool, BoardError> {
        self.move_mark(Mark::End, c)
    }

    fn move_mark(&mut self, mark: Mark, c: Coord) -> Result<bool, BoardError> {
        let (from, other, kind) = match mark {
            Mark::Start => (self.start, self.end, CellKind::Start),
            Mark::End => (self.end, self.start, CellKind::End),
        };
        let here = self.kind_at(c)?;
        if c == from {
            return Ok(false);
        }
        if c == other {
            return Err(BoardError::EndpointCollision(c));
        }
        if here == CellKind::Wall {
            return Err(BoardError::EndpointOnWall(c));
        }
        self.grid = self.grid.with_cells([(from, CellKind::Empty), (c, kind)])?;
        match mark {
            Mark::Start => self.start = c,
            Mark::End => self.end = c,
        }
        log::trace!("{kind:?} moved from {from} to {c}");
        self.invalidate();
        Ok(true)
    }

    /// A displayed path no longer matches the grid: drop it, and ask for a
    /// recompute if that is the policy.
    fn invalidate(&mut self) {
        if self.path.take().is_some() && self.auto_recompute {
            self.recompute = true;
        }
    }

    fn kind_at(&self, c: Coord) -> Result<CellKind, BoardError> {
        self.grid.at(c).ok_or_else(|| {
            BoardError::Grid(GridError::OutOfBounds {
                coord: c,
                bounds: self.grid.bounds(),
            })
        })
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Search from start to end on the current grid and display the result.
    pub fn find_path(&mut self) -> Result<Outcome, BoardError> {
        self.recompute = false;
        match self.finder.find_path(&self.grid, self.start, self.end)? {
            SearchResult::Found(path) => {
                let steps = path.steps();
                log::debug!("path from {} to {}: {steps} steps", self.start, self.end);
                self.path = Some(path);
                Ok(Outcome::PathShown { steps })
            }
            SearchResult::Unreachable => {
                log::debug!("no path from {} to {}", self.start, self.end);
                self.path = None;
                Ok(Outcome::NoPath)
            }
        }
    }

    /// Remove the displayed path.
    pub fn clear_path(&mut self) -> Outcome {
        self.path = None;
        self.recompute = false;
        log::debug!("path cleared");
        Outcome::PathCleared
    }

    /// The single find/clear action: clear a displayed path, otherwise search.
    pub fn find_or_clear(&mut self) -> Result<Outcome, BoardError> {
        if self.is_path_shown() {
            Ok(self.clear_path())
        } else {
            self.find_path()
        }
    }

    /// End of a batch of edits: run the requested recompute, if any.
    pub fn settle(&mut self) -> Result<Option<Outcome>, BoardError> {
        if !self.recompute {
            return Ok(None);
        }
        self.find_path().map(Some)
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Apply one input event.
    ///
    /// Pressing on the start or end begins dragging it; pressing anywhere
    /// else toggles that cell and begins painting. While the pointer is down,
    /// entering a cell moves the dragged endpoint there or toggles the cell.
    /// Endpoint moves that are not allowed are skipped and the endpoint stays
    /// on its last valid cell. Releasing ends the batch and settles.
    pub fn update(&mut self, input: Input) -> Result<Option<Outcome>, BoardError> {
        match input {
            Input::Press(c) => {
                self.drag = match self.kind_at(c)? {
                    CellKind::Start => Drag::Start,
                    CellKind::End => Drag::End,
                    _ => {
                        self.toggle_wall(c)?;
                        Drag::Painting
                    }
                };
                Ok(None)
            }
            Input::Enter(c) => {
                self.drag_to(c);
                Ok(None)
            }
            Input::Release => {
                self.drag = Drag::Idle;
                self.settle()
            }
            Input::FindOrClear => self.find_or_clear().map(Some),
        }
    }

    fn drag_to(&mut self, c: Coord) {
        let res = match self.drag {
            Drag::Idle => return,
            Drag::Painting => self.toggle_wall(c),
            Drag::Start => self.move_start(c),
            Drag::End => self.move_end(c),
        };
        if let Err(e) = res {
            log::debug!("drag onto {c} skipped: {e}");
        }
    }
}

fn single(grid: &Grid, kind: CellKind) -> Result<Coord, BoardError> {
    let mut it = grid.positions(kind);
    match (it.next(), it.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(BoardError::InvalidConfig(format!(
            "grid has no {kind:?} cell"
        ))),
        (Some(_), Some(_)) => Err(BoardError::InvalidConfig(format!(
            "grid has more than one {kind:?} cell"
        ))),
    }
}
