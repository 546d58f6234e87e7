//! Grabient CLI - Command-line interface for palette refinement
//!
//! This binary provides commands for validating, deduplicating, tagging and
//! inspecting staged cosine gradient palettes.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Use modules from the library crate
use grabient_cli::commands;
use grabient_cli::config::OptionOverrides;
use grabient_palette::DEFAULT_STEPS;

/// Grabient - Cosine Gradient Palette Tools
#[derive(Parser)]
#[command(name = "grabient")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate, deduplicate and list a page of staged palettes
    Refine {
        /// Path to the palette file (JSON or JSON Lines)
        #[arg(short, long)]
        input: String,

        /// JSON config file with refine options
        #[arg(short, long)]
        config: Option<String>,

        /// Similarity threshold (0.05 to 2.0, default 0.7)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Keep every palette; skip similarity comparison entirely
        #[arg(long)]
        no_dedup: bool,

        /// List clusters with the most duplicates first
        #[arg(long)]
        sort_by_dupes: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check every palette in a file and report corrupted ones
    Validate {
        /// Path to the palette file (JSON or JSON Lines)
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Derive tags, emoji and embedding text for a seed
    Tags {
        /// Seed string
        #[arg(short, long)]
        seed: String,

        /// Theme to include in the embedding text (repeatable)
        #[arg(long = "theme")]
        themes: Vec<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a seed to hex colors
    Render {
        /// Seed string
        #[arg(short, long)]
        seed: String,

        /// Number of colors to sample
        #[arg(long, default_value_t = DEFAULT_STEPS)]
        steps: usize,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Encode or decode seed strings
    Seed {
        #[command(subcommand)]
        command: SeedCommands,
    },
}

#[derive(Subcommand)]
enum SeedCommands {
    /// Encode coefficients into a seed
    Encode {
        /// Coefficients as a 4x4 JSON array
        #[arg(long)]
        coeffs: String,

        /// Globals as a JSON array [exposure, contrast, frequency, phase]
        #[arg(long)]
        globals: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Decode a seed into coefficients and globals
    Decode {
        /// Seed string
        #[arg(short, long)]
        seed: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grabient=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Refine {
            input,
            config,
            threshold,
            no_dedup,
            sort_by_dupes,
            json,
        } => {
            let overrides = OptionOverrides {
                threshold,
                no_dedup,
                sort_by_dupes,
            };
            commands::refine::run(&input, config.as_deref(), &overrides, json)
        }
        Commands::Validate { input, json } => commands::validate::run(&input, json),
        Commands::Tags { seed, themes, json } => commands::tags::run(&seed, &themes, json),
        Commands::Render { seed, steps, json } => commands::render::run(&seed, steps, json),
        Commands::Seed { command } => match command {
            SeedCommands::Encode {
                coeffs,
                globals,
                json,
            } => commands::seed::encode(&coeffs, globals.as_deref(), json),
            SeedCommands::Decode { seed, json } => commands::seed::decode(&seed, json),
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
