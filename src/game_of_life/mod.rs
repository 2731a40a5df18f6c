//! Game of Life core functionality

pub mod grid;
pub mod patterns;
pub mod rules;

pub use grid::{Grid, GridSnapshot, ALIVE_GLYPH, DEAD_GLYPH};
pub use patterns::Pattern;
pub use rules::GameOfLifeRules;
