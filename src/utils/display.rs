//! Display and output formatting utilities

use crate::config::{OutputConfig, OutputFormat};
use crate::game_of_life::{Grid, ALIVE_GLYPH, DEAD_GLYPH};
use anyhow::{Context, Result};
use std::fmt::Write;

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Render the generations of a run the way `output` asks for.
    ///
    /// Only the last generation is included unless `show_every_generation` is set.
    pub fn format_run(history: &[Grid], output: &OutputConfig) -> Result<String> {
        let shown = if output.show_every_generation {
            history
        } else {
            &history[history.len().saturating_sub(1)..]
        };

        match output.format {
            OutputFormat::Text => {
                let mut text = String::new();
                for grid in shown {
                    let _ = writeln!(
                        text,
                        "{}\n",
                        Self::format_generation(grid, output.show_coordinates)
                    );
                }
                if let Some(last) = history.last() {
                    text.push_str(&Self::format_statistics(last));
                }
                Ok(text)
            }
            OutputFormat::Json => {
                let snapshots: Vec<_> = shown.iter().map(Grid::snapshot).collect();
                serde_json::to_string_pretty(&snapshots).context("Failed to serialize grid")
            }
        }
    }

    /// Heading plus rendering for one generation
    pub fn format_generation(grid: &Grid, with_coords: bool) -> String {
        let body = if with_coords {
            Self::format_grid_with_coords(grid)
        } else {
            grid.render()
        };
        format!(
            "Generation {} (Living: {}):\n{}",
            grid.generation(),
            grid.living_count(),
            body.trim_end_matches('\n')
        )
    }

    /// Format a grid with column and row numbers
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::from("   ");
        for x in 0..grid.width() {
            let _ = write!(output, "{}", x % 10);
        }
        output.push('\n');

        for (y, row) in grid.render().lines().enumerate() {
            let _ = writeln!(output, "{:2} {}", y, row);
        }

        output
    }

    /// One-line statistics for a grid
    pub fn format_statistics(grid: &Grid) -> String {
        let area = grid.width() * grid.height();
        let density = if area > 0 {
            grid.living_count() as f64 / area as f64 * 100.0
        } else {
            0.0
        };
        format!(
            "{}x{} grid, generation {}, {} living ({:.1}%)",
            grid.width(),
            grid.height(),
            grid.generation(),
            grid.living_count(),
            density
        )
    }

    pub fn legend() -> String {
        format!("{} alive  {} dead", ALIVE_GLYPH, DEAD_GLYPH)
    }
}

/// Kinds of status line the CLI prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn ansi_code(self) -> u8 {
        match self {
            Tone::Error => 31,
            Tone::Success => 32,
            Tone::Warning => 33,
            Tone::Info => 34,
        }
    }
}

/// ANSI colouring for status lines, disabled by `NO_COLOR` or a dumb terminal
pub struct ColorOutput;

impl ColorOutput {
    pub fn paint(text: &str, tone: Tone) -> String {
        let dumb_terminal = std::env::var("TERM").is_ok_and(|term| term == "dumb");
        if std::env::var_os("NO_COLOR").is_some() || dumb_terminal {
            return text.to_string();
        }
        format!("\x1b[{}m{}\x1b[0m", tone.ansi_code(), text)
    }

    pub fn success(text: &str) -> String {
        Self::paint(text, Tone::Success)
    }

    pub fn error(text: &str) -> String {
        Self::paint(text, Tone::Error)
    }

    pub fn warning(text: &str) -> String {
        Self::paint(text, Tone::Warning)
    }

    pub fn info(text: &str) -> String {
        Self::paint(text, Tone::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{run_simulation, Settings};
    use serde_json::Value;

    fn sample() -> Grid {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        Grid::from_cells(cells).unwrap()
    }

    #[test]
    fn test_grid_with_coords() {
        let with_coords = GridFormatter::format_grid_with_coords(&sample());
        assert_eq!(with_coords, "   012\n 0 ◼◻◼\n 1 ◻◼◻\n 2 ◼◻◼\n");
    }

    #[test]
    fn test_statistics() {
        let stats = GridFormatter::format_statistics(&sample());
        assert_eq!(stats, "3x3 grid, generation 0, 5 living (55.6%)");
        assert!(GridFormatter::format_statistics(&Grid::new()).contains("(0.0%)"));
    }

    #[test]
    fn test_format_generation() {
        let plain = GridFormatter::format_generation(&sample(), false);
        assert_eq!(plain, "Generation 0 (Living: 5):\n◼◻◼\n◻◼◻\n◼◻◼");

        let labelled = GridFormatter::format_generation(&sample(), true);
        assert_eq!(
            labelled,
            "Generation 0 (Living: 5):\n   012\n 0 ◼◻◼\n 1 ◻◼◻\n 2 ◼◻◼"
        );
    }

    #[test]
    fn test_text_run_shows_last_generation_by_default() {
        let mut settings = Settings::default();
        settings.simulation.generations = 2;
        let history = run_simulation(&settings).unwrap();

        let text = GridFormatter::format_run(&history, &settings.output).unwrap();
        assert!(!text.contains("Generation 0 "));
        assert!(text.contains("Generation 2 (Living: 5):"));
        assert!(text.ends_with("16x16 grid, generation 2, 5 living (2.0%)"));
    }

    #[test]
    fn test_text_run_with_coordinates() {
        let mut settings = Settings::default();
        settings.output.show_coordinates = true;
        let history = run_simulation(&settings).unwrap();

        let text = GridFormatter::format_run(&history, &settings.output).unwrap();
        assert!(text.contains("   0123456789012345\n 0 "));
        assert!(text.contains("\n15 "));
    }

    #[test]
    fn test_json_run_has_one_snapshot_per_generation() {
        let mut settings = Settings::default();
        settings.simulation.generations = 3;
        settings.output.format = OutputFormat::Json;
        settings.output.show_every_generation = true;
        let history = run_simulation(&settings).unwrap();

        let json = GridFormatter::format_run(&history, &settings.output).unwrap();
        let snapshots: Vec<Value> = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshots.len(), 4);
        for (generation, snapshot) in snapshots.iter().enumerate() {
            assert_eq!(snapshot["generation"], generation as u64);
            assert_eq!(snapshot["alive"].as_array().unwrap().len(), 5);
        }
    }

    #[test]
    fn test_json_run_of_dying_pair() {
        let mut grid = Grid::new();
        grid.set_world_size(2, 2).unwrap();
        grid.populate(0, 0).unwrap();
        grid.populate(1, 0).unwrap();
        grid.step();

        let output = OutputConfig {
            format: OutputFormat::Json,
            show_every_generation: false,
            show_coordinates: false,
        };
        let json = GridFormatter::format_run(&[grid], &output).unwrap();
        let snapshots: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            snapshots,
            serde_json::json!([{ "width": 2, "height": 2, "generation": 1, "alive": [] }])
        );
    }

    #[test]
    fn test_paint_keeps_text() {
        for tone in [Tone::Info, Tone::Success, Tone::Warning, Tone::Error] {
            assert!(ColorOutput::paint("status", tone).contains("status"));
        }
        assert!(ColorOutput::error("boom").contains("boom"));
    }
}
