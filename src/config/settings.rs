//! Configuration settings for a Game of Life run

use crate::game_of_life::{Grid, Pattern};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub world: WorldConfig,
    pub seed: SeedConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
}

/// Initial population: an optional named pattern plus individual cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub pattern: Option<Pattern>,
    #[serde(default)]
    pub offset: (usize, usize),
    #[serde(default)]
    pub cells: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    #[serde(default)]
    pub show_every_generation: bool,
    /// Label text renderings with column and row numbers
    #[serde(default)]
    pub show_coordinates: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                width: 16,
                height: 16,
            },
            seed: SeedConfig {
                pattern: Some(Pattern::Glider),
                offset: (1, 1),
                cells: Vec::new(),
            },
            simulation: SimulationConfig { generations: 4 },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_every_generation: false,
                show_coordinates: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("loaded settings from {}", path.display());
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings by building the seeded grid they describe
    pub fn validate(&self) -> Result<()> {
        self.build_grid().map(|_| ())
    }

    /// Build the generation-zero grid
    pub fn build_grid(&self) -> Result<Grid> {
        let mut grid = Grid::new();
        grid.set_world_size(self.world.width, self.world.height)?;

        if let Some(pattern) = self.seed.pattern {
            let (x, y) = self.seed.offset;
            pattern
                .place(&mut grid, x, y)
                .with_context(|| format!("Pattern {} does not fit the world", pattern))?;
        }

        for &(x, y) in &self.seed.cells {
            grid.populate(x, y)
                .with_context(|| format!("Seed cell ({}, {}) is outside the world", x, y))?;
        }

        Ok(grid)
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.world.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.world.height = height;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(pattern) = cli_overrides.pattern {
            self.seed.pattern = Some(pattern);
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.show_every_generation {
            self.output.show_every_generation = true;
        }
        if cli_overrides.show_coordinates {
            self.output.show_coordinates = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub generations: Option<usize>,
    pub pattern: Option<Pattern>,
    pub format: Option<OutputFormat>,
    pub show_every_generation: bool,
    pub show_coordinates: bool,
}
