//! JSON I/O handling for CLI
//!
//! - Input: one JSON request per stdin line (serve mode)
//! - Output: one JSON object per stdout line
//! - UTF-8 only

use std::io::{self, BufRead, Write};

use super::errors::{CliError, CliResult};

/// Read JSON request lines from stdin. Blank lines are skipped rather than
/// treated as errors so piped input may end with a trailing newline.
pub fn read_requests() -> impl Iterator<Item = CliResult<String>> {
    let stdin = io::stdin();
    stdin
        .lock()
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(|line| line.map_err(CliError::from))
}

/// Write a JSON line to stdout
pub fn write_json(json_str: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", json_str)?;
    stdout.flush()?;

    Ok(())
}
