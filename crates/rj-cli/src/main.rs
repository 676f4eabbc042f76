//! Terminal front end for Recovery Journey.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rj",
    about = "Recovery Journey: a choose-your-path recovery game",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the journeys available in a content directory
    List {
        /// Content directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show the master toolkit catalog
    Tools {
        /// Content directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Validate a journey's scene graph
    Check {
        /// Journey id, e.g. journey_1
        journey: String,

        /// Content directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Scene the journey starts in
        #[arg(long)]
        entry: Option<String>,
    },

    /// Play journeys interactively
    Play {
        /// Journey to start with; without one, pick from the journey list
        journey: Option<String>,

        /// Content directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Show support resources inline instead of in a popup box
        #[arg(long)]
        inline_resources: bool,

        /// Show scene ids and the path taken
        #[arg(long)]
        dev: bool,

        /// Scene to start in
        #[arg(long)]
        entry: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let result = match cli.command {
        Commands::List { dir } => commands::list::run(&dir),
        Commands::Tools { dir } => commands::tools::run(&dir),
        Commands::Check {
            journey,
            dir,
            entry,
        } => commands::check::run(&dir, &journey, entry.as_deref()),
        Commands::Play {
            journey,
            dir,
            inline_resources,
            dev,
            entry,
        } => commands::play::run(
            &dir,
            journey.as_deref(),
            inline_resources,
            dev,
            entry.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
