//! ONLE CLI - headless driver for the storefront.
//!
//! # Usage
//!
//! ```bash
//! # List the whole catalog as JSON product cards
//! onle catalog
//!
//! # Sizes M or XL, in black
//! onle catalog --size M --size XL --color Черный
//!
//! # Replay a recorded session (one JSON intent per line) and print the result
//! onle replay session.jsonl
//! cat session.jsonl | onle replay -
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print products passing the size/color filter
//! - `replay` - Dispatch recorded intents and print the final store view

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use onle_core::{Color, Size};
use onle_storefront::StorefrontConfig;
use onle_storefront::telemetry::init_tracing;

mod commands;

#[derive(Parser)]
#[command(name = "onle")]
#[command(author, version, about = "ONLE storefront driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the catalog, optionally filtered
    Catalog {
        /// Keep products offered in this size (repeatable)
        #[arg(short, long = "size")]
        sizes: Vec<Size>,

        /// Keep products offered in this color (repeatable)
        #[arg(short, long = "color")]
        colors: Vec<Color>,
    },
    /// Replay JSON-lines intents and print the final view
    Replay {
        /// Session file, or `-` for stdin
        path: String,
    },
}

fn main() {
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    if let Err(e) = init_tracing(&config) {
        fail(&e);
    }

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { sizes, colors } => {
            commands::catalog::list(sizes, colors)?;
        }
        Commands::Replay { path } => {
            commands::replay::run(&path, config)?;
        }
    }
    Ok(())
}

/// Report a startup error before logging is available and exit.
#[allow(clippy::print_stderr)]
fn fail(error: &dyn std::error::Error) -> ! {
    eprintln!("onle: {error}");
    std::process::exit(2);
}
