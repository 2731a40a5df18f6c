//! Conway's Game of Life
//!
//! A bounded grid engine for the classic B3/S23 rules, with named seed
//! patterns and YAML-configured runs.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::{GridError, GridResult};
pub use game_of_life::{Grid, Pattern};

use anyhow::Result;

/// Build the configured world and evolve it, returning every generation including the seed
pub fn run_simulation(settings: &Settings) -> Result<Vec<Grid>> {
    let mut grid = settings.build_grid()?;
    let mut history = Vec::with_capacity(settings.simulation.generations + 1);
    history.push(grid.clone());

    for _ in 0..settings.simulation.generations {
        grid.step();
        history.push(grid.clone());
    }

    Ok(history)
}
