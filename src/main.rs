//! nlquery CLI entry point
//!
//! Minimal entrypoint: argument parsing and dispatch live in the cli
//! module; main only prints the terminal error and sets the exit code.

use nlquery::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
