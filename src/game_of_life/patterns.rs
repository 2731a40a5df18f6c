//! Built-in seed patterns

use super::Grid;
use crate::error::{GridError, GridResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Well-known starting patterns, stored as `(x, y)` offsets from their top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Glider,
    Blinker,
    Block,
    Beacon,
    Toad,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Glider,
        Pattern::Blinker,
        Pattern::Block,
        Pattern::Beacon,
        Pattern::Toad,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Glider => "glider",
            Pattern::Blinker => "blinker",
            Pattern::Block => "block",
            Pattern::Beacon => "beacon",
            Pattern::Toad => "toad",
        }
    }

    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
            Pattern::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Beacon => &[(0, 0), (1, 0), (0, 1), (2, 3), (3, 2), (3, 3)],
            Pattern::Toad => &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        }
    }

    /// Width and height of the smallest box containing the pattern
    pub fn bounding_box(self) -> (usize, usize) {
        self.cells()
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Stamp the pattern into `grid` with its top-left corner at (x, y).
    ///
    /// Nothing is written unless every cell fits.
    pub fn place(self, grid: &mut Grid, x: usize, y: usize) -> GridResult<()> {
        let out_of_bounds = |cx: usize, cy: usize| GridError::OutOfBounds {
            x: cx,
            y: cy,
            width: grid.width(),
            height: grid.height(),
        };

        let mut stamped = Vec::with_capacity(self.cells().len());
        for &(dx, dy) in self.cells() {
            // A cell past usize::MAX is reported at the offset itself.
            let (cx, cy) = match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(cx), Some(cy)) => (cx, cy),
                _ => return Err(out_of_bounds(x, y)),
            };
            if cx >= grid.width() || cy >= grid.height() {
                return Err(out_of_bounds(cx, cy));
            }
            stamped.push((cx, cy));
        }

        for (cx, cy) in stamped {
            grid.populate(cx, cy)?;
        }
        Ok(())
    }

    /// Render the pattern on its own, tightly cropped
    pub fn preview(self) -> GridResult<Grid> {
        let (w, h) = self.bounding_box();
        let mut grid = Grid::new();
        grid.set_world_size(w, h)?;
        self.place(&mut grid, 0, 0)?;
        Ok(grid)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GridError::UnknownPattern(s.to_string()))
    }
}
