//! CLI command implementations
//!
//! One-shot commands print a single JSON document and exit; `serve` loops
//! over stdin lines until EOF. Exit codes: 0 on success, non-zero when a
//! one-shot query is rejected or I/O fails. `validate` always exits 0 —
//! an invalid verdict is a result, not a failure.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::ApiHandler;
use crate::observability::Logger;
use crate::service::QueryService;
use crate::store::TableStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_requests, write_json};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Artificial per-request store delay in milliseconds (default 0)
    #[serde(default)]
    pub simulated_latency_ms: u64,

    /// Log one structured event per request to stderr (default false)
    #[serde(default)]
    pub log_requests: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 0,
            log_requests: false,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        // A delay above one minute per request is a config mistake, not a
        // simulation.
        if self.simulated_latency_ms > 60_000 {
            return Err(CliError::config_error(
                "simulated_latency_ms must be <= 60000",
            ));
        }

        Ok(())
    }
}

/// Run the CLI: parse arguments, load config, dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let service = QueryService::new(TableStore::seeded())
        .with_simulated_latency(Duration::from_millis(config.simulated_latency_ms));

    match cli.command {
        Command::Query { utterance } => query(&service, &utterance),
        Command::Explain { utterance } => explain(&service, &utterance),
        Command::Validate { utterance } => validate(&service, &utterance),
        Command::Serve => serve(service, &config),
    }
}

fn query(service: &QueryService, utterance: &str) -> CliResult<()> {
    let outcome = service
        .process(utterance)
        .map_err(|e| CliError::query_rejected(e.to_string()))?;

    write_json(&serde_json::to_string_pretty(&outcome)?)
}

fn explain(service: &QueryService, utterance: &str) -> CliResult<()> {
    let explanation = service.explain(utterance);
    write_json(&serde_json::to_string_pretty(&explanation)?)
}

fn validate(service: &QueryService, utterance: &str) -> CliResult<()> {
    let verdict = service.validate(utterance);
    write_json(&serde_json::to_string_pretty(&verdict)?)
}

fn serve(service: QueryService, config: &Config) -> CliResult<()> {
    let handler = ApiHandler::new(service).with_request_logging(config.log_requests);

    Logger::info("SERVE_START", &[]);

    for line in read_requests() {
        let line = line?;
        let response = handler.handle(&line);
        write_json(&response.to_json())?;
    }

    Logger::info("SERVE_STOP", &[]);

    Ok(())
}
