//! The [`Grid`] type: an immutable, rectangular snapshot of [`CellKind`]s.
//!
//! Cloning a `Grid` is cheap: clones share the same backing storage. Edits
//! never touch that storage in place; [`with`](Grid::with) and
//! [`with_cells`](Grid::with_cells) return a new snapshot and leave every
//! existing one unchanged, so a snapshot handed to a search stays valid no
//! matter what the editor does next.

use std::sync::Arc;

use crate::cell::{Cell, CellKind};
use crate::error::GridError;
use crate::geom::{Bounds, Coord};

/// A non-empty rectangular grid of cell kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Arc<Vec<CellKind>>,
    bounds: Bounds,
}

impl Grid {
    /// Create a `rows × cols` grid of empty cells.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        Self::from_fn(rows, cols, |_| CellKind::Empty)
    }

    /// Create a `rows × cols` grid whose cells are produced by `f`.
    pub fn from_fn(
        rows: i32,
        cols: i32,
        mut f: impl FnMut(Coord) -> CellKind,
    ) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::Empty);
        }
        let bounds = Bounds::new(rows, cols);
        let cells = bounds.iter().map(&mut f).collect();
        Ok(Self {
            cells: Arc::new(cells),
            bounds,
        })
    }

    /// Build a grid from nested rows.
    ///
    /// Fails with [`GridError::Empty`] when there are no rows or the first
    /// row has no cells, and with [`GridError::Jagged`] when any row's length
    /// differs from the first.
    pub fn from_rows<R: AsRef<[CellKind]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridError::Empty);
        }
        let bounds = bounds_for(rows.len(), width)?;
        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Jagged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells: Arc::new(cells),
            bounds,
        })
    }

    /// The rectangle covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// Kind of the cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellKind> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// The positioned cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, c: Coord) -> Option<Cell> {
        self.at(c).map(|kind| Cell::new(c, kind))
    }

    /// Whether `c` is in bounds and holds a wall.
    #[inline]
    pub fn is_wall(&self, c: Coord) -> bool {
        self.at(c) == Some(CellKind::Wall)
    }

    /// Whether `c` is in bounds and can be walked through.
    #[inline]
    pub fn is_traversable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(CellKind::is_traversable)
    }

    /// The cells of row `row`, or `None` if out of bounds.
    pub fn row(&self, row: i32) -> Option<&[CellKind]> {
        if row < 0 || row >= self.bounds.rows {
            return None;
        }
        let w = self.bounds.cols as usize;
        let start = row as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// A new snapshot with the cell at `c` set to `kind`.
    pub fn with(&self, c: Coord, kind: CellKind) -> Result<Grid, GridError> {
        self.with_cells([(c, kind)])
    }

    /// A new snapshot with every `(coord, kind)` pair applied in order.
    ///
    /// Fails without producing a snapshot if any coordinate is out of bounds.
    pub fn with_cells(
        &self,
        edits: impl IntoIterator<Item = (Coord, CellKind)>,
    ) -> Result<Grid, GridError> {
        let mut next = self.clone();
        let cells = Arc::make_mut(&mut next.cells);
        for (c, kind) in edits {
            let i = self.bounds.index(c).ok_or(GridError::OutOfBounds {
                coord: c,
                bounds: self.bounds,
            })?;
            cells[i] = kind;
        }
        Ok(next)
    }

    /// Row-major iterator over every cell.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bounds
            .iter()
            .zip(self.cells.iter())
            .map(|(pos, &kind)| Cell::new(pos, kind))
    }

    /// Row-major iterator over the positions holding `kind`.
    pub fn positions(&self, kind: CellKind) -> impl Iterator<Item = Coord> + '_ {
        self.iter().filter(move |c| c.kind == kind).map(|c| c.pos)
    }

    /// The first position (row-major) holding `kind`.
    pub fn find(&self, kind: CellKind) -> Option<Coord> {
        self.positions(kind).next()
    }

    /// How many cells hold `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Copy the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<CellKind>> {
        self.cells
            .chunks(self.bounds.cols as usize)
            .map(<[CellKind]>::to_vec)
            .collect()
    }
}

/// Bounds of a `rows` × `cols` grid, if both fit a coordinate.
fn bounds_for(rows: usize, cols: usize) -> Result<Bounds, GridError> {
    match (i32::try_from(rows), i32::try_from(cols)) {
        (Ok(r), Ok(c)) => Ok(Bounds::new(r, c)),
        _ => Err(GridError::TooLarge { rows, cols }),
    }
}
