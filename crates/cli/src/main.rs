use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

/// pomdeps - Aggregate build coordinates into a dependencies POM
#[derive(Parser)]
#[command(name = "pomdeps")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Aggregate a reactor snapshot and write pom-dependencies.xml
  Generate {
    /// Path to the reactor snapshot file
    snapshot: PathBuf,

    /// Path to the configuration file (default: pomdeps.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Additional artifact coordinates, group:artifact:version[:type[:classifier]]
    #[arg(short, long = "artifact")]
    artifacts: Vec<String>,
  },

  /// Print the aggregate POM to stdout without writing anything
  Render {
    /// Path to the reactor snapshot file
    snapshot: PathBuf,

    /// Path to the configuration file (default: pomdeps.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Additional artifact coordinates, group:artifact:version[:type[:classifier]]
    #[arg(short, long = "artifact")]
    artifacts: Vec<String>,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  // Initialize logging
  let default_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .without_time()
    .init();

  match cli.command {
    Commands::Generate {
      snapshot,
      config,
      artifacts,
    } => cmd::cmd_generate(&snapshot, config.as_deref(), &artifacts),
    Commands::Render {
      snapshot,
      config,
      artifacts,
    } => cmd::cmd_render(&snapshot, config.as_deref(), &artifacts),
  }
}
