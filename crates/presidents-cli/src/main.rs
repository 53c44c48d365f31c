//! presidents CLI — quiz, flashcards and timeline in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use presidents_core::Mode;

use crate::config::OutputFormat;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "presidents",
    version,
    about = "Study aid for the U.S. presidents: quiz, flashcards, timeline"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in names, years and parties, then check your answers
    Quiz {
        /// practice (check as often as you like) or test (one timed check)
        #[arg(long)]
        mode: Option<Mode>,

        /// Custom roster TOML file
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Step through flashcards and rate what you know
    Flashcards {
        /// Front fields, comma-separated (number,name,years,party,details,picture)
        #[arg(long)]
        front: Option<String>,

        /// Back fields, comma-separated
        #[arg(long)]
        back: Option<String>,

        /// Seed for shuffling
        #[arg(long)]
        seed: Option<u64>,

        /// Custom roster TOML file
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print every president in order
    Timeline {
        /// Custom roster TOML file
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade an answer sheet file
    Grade {
        /// Answer sheet (.toml or .json)
        #[arg(long)]
        answers: PathBuf,

        /// Custom roster TOML file
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Also save the report as JSON
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate roster TOML files
    Validate {
        /// Path to roster file or directory
        #[arg(long)]
        roster: PathBuf,
    },

    /// Create starter config and roster
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("presidents=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quiz {
            mode,
            roster,
            config,
        } => commands::quiz::execute(mode, roster, config),
        Commands::Flashcards {
            front,
            back,
            seed,
            roster,
            config,
        } => commands::flashcards::execute(front, back, seed, roster, config),
        Commands::Timeline {
            roster,
            format,
            config,
        } => commands::timeline::execute(roster, format, config),
        Commands::Grade {
            answers,
            roster,
            format,
            output,
            config,
        } => commands::grade::execute(answers, roster, format, output, config),
        Commands::Validate { roster } => commands::validate::execute(roster),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
