//! Configuration management for Game of Life runs

pub mod settings;

pub use settings::{
    CliOverrides, OutputConfig, OutputFormat, SeedConfig, Settings, SimulationConfig, WorldConfig,
};
