//! Rollout CLI - Command line interface for the Rollout planner
//!
//! Computes deterministic implementation timelines from an organization
//! size and a selection of work items.

mod commands;

use clap::{Parser, Subcommand};
use rollout_core::{catalog, Config, OutputFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::PlanArgs;

/// Rollout: deterministic implementation-timeline planning
#[derive(Parser, Debug)]
#[command(name = "rollout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Employee count (overrides config and env)
    #[arg(long, global = true, env = "ROLLOUT_EMPLOYEES")]
    employees: Option<u32>,

    /// Output format: text or json (overrides config and env)
    #[arg(long, global = true, env = "ROLLOUT_FORMAT")]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Compute and print the implementation timeline
    #[command(visible_alias = "p")]
    Plan(PlanArgs),

    /// List the work-item catalog
    Catalog,

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.employees, cli.format)?;

    if cli.verbose {
        tracing::info!(
            employees = config.defaults.employees,
            format = %config.defaults.format,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("rollout {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Plan(args)) => {
            args.execute(cli.verbose, &config)?;
        }
        Some(Commands::Catalog) => {
            println!("Available work items:");
            println!();
            for item in catalog::items() {
                let marker = if item.mandatory {
                    " [always included]"
                } else {
                    ""
                };
                println!(
                    "  {:<20} {} ({} weeks base){}",
                    item.id.name(),
                    item.label,
                    item.base_weeks,
                    marker
                );
            }
        }
        Some(Commands::Config) => {
            println!("Rollout Configuration");
            println!("=====================");
            println!();
            println!("Defaults:");
            println!("  employees: {}", config.defaults.employees);
            let include: Vec<&str> = config.defaults.include.iter().map(|i| i.name()).collect();
            println!("  include: {}", include.join(", "));
            println!("  format: {}", config.defaults.format);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Rollout - deterministic implementation-timeline planning");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
