//! Plain-text grid format.
//!
//! One line per row and one symbol per cell:
//!
//! ```text
//! S.#.
//! ..#.
//! ...E
//! ```
//!
//! See [`CellKind::symbol`] for the alphabet. Surrounding whitespace on each
//! line and blank leading or trailing lines are ignored, so grids can be
//! written as indented string literals.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::Coord;
use crate::grid::Grid;

impl Grid {
    /// Parse a grid from its text form.
    pub fn parse(s: &str) -> Result<Grid, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1);

        let mut rows = Vec::with_capacity(end);
        for (r, line) in lines[..end].iter().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(c, ch)| {
                    CellKind::from_symbol(ch).ok_or(GridError::InvalidSymbol {
                        ch,
                        pos: Coord::new(r as i32, c as i32),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Grid::from_rows(&rows)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for kind in self.row(r).unwrap_or_default() {
                write!(f, "{}", kind.symbol())?;
            }
        }
        Ok(())
    }
}
