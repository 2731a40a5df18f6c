//! Command line runner for Conway's Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::Pattern,
    run_simulation,
    utils::{ColorOutput, GridFormatter},
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life on a bounded grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a world and evolve it
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// World width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// World height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Seed pattern (overrides config)
        #[arg(short, long)]
        pattern: Option<Pattern>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Print every generation instead of only the last
        #[arg(long)]
        show_every: bool,

        /// Label text output with column and row numbers
        #[arg(long)]
        coords: bool,
    },

    /// Create a default configuration and example variants
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// List the built-in seed patterns
    Patterns,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    env_logger::Builder::from_env(env).init();

    let result = match cli.command {
        Commands::Run {
            config,
            width,
            height,
            generations,
            pattern,
            format,
            show_every,
            coords,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                generations,
                pattern,
                format,
                show_every_generation: show_every,
                show_coordinates: coords,
            };
            run_command(&config, &overrides)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Patterns => patterns_command(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", err)));
            ExitCode::FAILURE
        }
    }
}

/// Load the config file (or defaults when it is missing) and apply CLI overrides
fn resolve_settings(config_path: &PathBuf, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        log::info!("config file {} not found, using defaults", config_path.display());
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(config_path: &PathBuf, overrides: &CliOverrides) -> Result<()> {
    let settings = resolve_settings(config_path, overrides)?;

    log::debug!(
        "running {}x{} world for {} generations",
        settings.world.width,
        settings.world.height,
        settings.simulation.generations
    );

    let start_time = Instant::now();
    let history = run_simulation(&settings)?;
    log::debug!("simulation finished in {:.3}s", start_time.elapsed().as_secs_f64());

    println!("{}", GridFormatter::format_run(&history, &settings.output)?);
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        let skipped = format!("Skipped: {} (already exists)", config_path.display());
        println!("{}", ColorOutput::warning(&skipped));
    }

    let examples_dir = config_dir.join("examples");
    for pattern in Pattern::ALL {
        let (w, h) = pattern.bounding_box();
        let mut settings = Settings::default();
        settings.world.width = w + 4;
        settings.world.height = h + 4;
        settings.seed.pattern = Some(pattern);
        settings.seed.offset = (2, 2);
        settings.output.show_every_generation = true;
        settings.to_file(&examples_dir.join(format!("{}.yaml", pattern.name())))?;
    }
    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    Ok(())
}

fn patterns_command() -> Result<()> {
    println!("{}\n", GridFormatter::legend());
    for pattern in Pattern::ALL {
        let preview = pattern.preview()?;
        println!("{} ({} cells)", ColorOutput::info(pattern.name()), pattern.cells().len());
        println!("{}\n", preview);
    }
    Ok(())
}
