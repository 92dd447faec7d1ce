//! CLI module
//!
//! Provides the command-line interface:
//! - query: one-shot natural-language query execution
//! - explain: one-shot translation without execution
//! - validate: one-shot validity verdict
//! - serve: JSON request loop over stdin/stdout

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, Config};
pub use errors::{CliError, CliResult};
pub use io::{read_requests, write_json};
