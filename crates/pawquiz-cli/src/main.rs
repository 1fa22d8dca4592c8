//! pawquiz CLI — play a multiple-choice quiz in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pawquiz", version, about = "Terminal multiple-choice quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz
    Play {
        /// Path to a .toml question set (defaults to the configured quiz or the built-in sample)
        #[arg(long)]
        quiz: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Exit after the first completed quiz
        #[arg(long)]
        once: bool,

        /// Print a JSON summary per completed quiz instead of screens
        #[arg(long)]
        json: bool,

        /// Keep the mascot still
        #[arg(long)]
        reduced_motion: bool,
    },

    /// Validate question set TOML files
    Validate {
        /// Path to a question set file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Create a starter config and sample question set
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pawquiz=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            quiz,
            config,
            once,
            json,
            reduced_motion,
        } => commands::play::execute(quiz, config, once, json, reduced_motion),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
