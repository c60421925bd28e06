//! Sweeper CLI - tick-driven cleaning simulation.
//!
//! Single binary that provides:
//! - `sweeper run` - run the simulation over a cell table
//! - `sweeper map` - print the dust map without simulating

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use sweeper_core::SweeperAgent;
use sweeper_world::{Grid, SweeperConfig};

#[derive(Parser)]
#[command(name = "sweeper")]
#[command(about = "Autonomous grid-cleaning simulation", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation
    Run {
        /// Cell table CSV
        #[arg(short, long, default_value = "area.csv")]
        area: PathBuf,

        /// Operating configuration YAML; defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured tick budget
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Print the dust map and grid stats
    Map {
        /// Cell table CSV
        #[arg(short, long, default_value = "area.csv")]
        area: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Run {
            area,
            config,
            ticks,
        } => run(&area, config.as_deref(), ticks, cli.verbose),
        Commands::Map { area } => show_map(&area),
    }
}

fn run(area: &Path, config: Option<&Path>, ticks: Option<u64>, verbose: bool) -> Result<()> {
    let config = match config {
        Some(path) => SweeperConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SweeperConfig::default(),
    };
    let mut grid = Grid::load(area)
        .with_context(|| format!("failed to load cell table {}", area.display()))?;

    let budget = ticks.unwrap_or(config.tick_budget);
    let mut agent = SweeperAgent::new(config);

    tracing::info!(
        area = %area.display(),
        cells = grid.len(),
        budget,
        "starting simulation"
    );

    for tick in 0..budget {
        agent.act(&mut grid);

        if tick % 10 == 0 {
            if verbose {
                for row in grid.dust_rows() {
                    tracing::debug!("{row}");
                }
            }
            tracing::info!(
                tick,
                cleanliness = 100.0 - grid.percent_dirty(),
                "progress"
            );
        }
    }

    println!("Simulation complete");
    println!("Final cleanliness: {:.1}%", 100.0 - grid.percent_dirty());
    println!("Cells cleaned: {}", agent.cleaned_cells().len());
    println!("Power consumed: {:.1}", agent.power_consumed());

    Ok(())
}

fn show_map(area: &Path) -> Result<()> {
    let grid = Grid::load(area)
        .with_context(|| format!("failed to load cell table {}", area.display()))?;

    let (max_x, max_y) = grid.dimensions();
    println!(
        "Grid {}x{} ({} cells), {:.1}% dirty",
        max_x + 1,
        max_y + 1,
        grid.len(),
        grid.percent_dirty()
    );
    for row in grid.dust_rows() {
        println!("{row}");
    }

    Ok(())
}
