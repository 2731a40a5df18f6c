//! Grid representation and the generation step for Game of Life

use super::rules::GameOfLifeRules;
use crate::error::{GridError, GridResult};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Glyph rendered for a living cell
pub const ALIVE_GLYPH: char = '◼';
/// Glyph rendered for a dead cell
pub const DEAD_GLYPH: char = '◻';

/// A fixed-size Game of Life grid with dead cells beyond its edges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    generation: u64,
}

/// Serializable view of a grid's live cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    pub alive: Vec<(usize, usize)>,
}

impl Grid {
    /// Create an empty 0x0 grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from rows of cells, `cells[y][x]`
    pub fn from_cells(cells: Vec<Vec<bool>>) -> GridResult<Self> {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);

        for (row, line) in cells.iter().enumerate() {
            if line.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    len: line.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: cells.into_iter().flatten().collect(),
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of steps taken since the world was last sized
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Reallocate the grid to `width` x `height` with every cell dead
    pub fn set_world_size(&mut self, width: usize, height: usize) -> GridResult<()> {
        let area = width.checked_mul(height).ok_or_else(|| {
            GridError::InvalidArgument(format!("world size {}x{} is too large", width, height))
        })?;

        self.width = width;
        self.height = height;
        self.cells = vec![false; area];
        self.generation = 0;
        Ok(())
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn checked_index(&self, x: usize, y: usize) -> GridResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(x, y))
    }

    /// Bring the cell at (x, y) to life
    pub fn populate(&mut self, x: usize, y: usize) -> GridResult<()> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = true;
        Ok(())
    }

    /// Kill the cell at (x, y)
    pub fn kill(&mut self, x: usize, y: usize) -> GridResult<()> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = false;
        Ok(())
    }

    pub fn cell_is_alive(&self, x: usize, y: usize) -> GridResult<bool> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Count living cells in the 3x3 window around (x, y), clamped to the grid
    pub fn number_of_live_neighbours(&self, x: usize, y: usize) -> GridResult<u8> {
        self.checked_index(x, y)?;
        Ok(self.count_neighbours(x, y))
    }

    // Caller guarantees (x, y) is inside the grid, so width and height are >= 1.
    fn count_neighbours(&self, x: usize, y: usize) -> u8 {
        let x_range = x.saturating_sub(1)..=(x + 1).min(self.width - 1);
        let y_range = y.saturating_sub(1)..=(y + 1).min(self.height - 1);

        let mut count = 0;
        for ny in y_range {
            for nx in x_range.clone() {
                if (nx, ny) != (x, y) && self.cells[self.index(nx, ny)] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance the grid one generation
    pub fn step(&mut self) {
        let next: Vec<bool> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let alive = self.cells[self.index(x, y)];
                GameOfLifeRules::should_be_alive(alive, self.count_neighbours(x, y))
            })
            .collect();

        self.cells = next;
        self.generation += 1;
    }

    /// Render rows top to bottom, one glyph per cell, without a trailing newline
    pub fn render(&self) -> String {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        if self.cells[self.index(x, y)] {
                            ALIVE_GLYPH
                        } else {
                            DEAD_GLYPH
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
    }

    /// Living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[self.index(x, y)] {
                    living.push((x, y));
                }
            }
        }
        living
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            generation: self.generation,
            alive: self.living_cells(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
