//! CLI frontend for the Fablewood interactive fiction engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fw",
    about = "Fablewood, a turn-based interactive fiction engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game interactively
    Play {
        /// Path to a game definition JSON file (default: the built-in sample game)
        game: Option<PathBuf>,
    },

    /// Validate a game definition and report every problem found
    Check {
        /// Path to a game definition JSON file
        game: PathBuf,
    },

    /// Show metadata and a room overview for a game definition
    Info {
        /// Path to a game definition JSON file (default: the built-in sample game)
        game: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { game } => commands::play::run(game.as_deref()),
        Commands::Check { game } => commands::check::run(&game),
        Commands::Info { game } => commands::info::run(game.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
