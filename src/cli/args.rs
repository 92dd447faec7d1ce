//! CLI argument definitions using clap
//!
//! Commands:
//! - nlquery query "<utterance>" [--config <path>]
//! - nlquery explain "<utterance>" [--config <path>]
//! - nlquery validate "<utterance>" [--config <path>]
//! - nlquery serve [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nlquery - natural-language query translation and execution simulation
#[derive(Parser, Debug)]
#[command(name = "nlquery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate and execute a natural-language query
    Query {
        /// The natural-language utterance
        utterance: String,
    },

    /// Show the translation pipeline for an utterance without executing
    Explain {
        /// The natural-language utterance
        utterance: String,
    },

    /// Check whether an utterance is a supported query
    Validate {
        /// The natural-language utterance
        utterance: String,
    },

    /// Serve JSON requests line-by-line over stdin/stdout
    Serve,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
