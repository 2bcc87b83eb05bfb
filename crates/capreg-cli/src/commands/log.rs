//! `capreg log`: send one message to a log sink.

use serde_json::json;
use tracing::instrument;

use capreg_core::application::LogService;
use capreg_core::domain::{LogEntry, LogLevel};

use super::build_registry;
use crate::{cli::LogArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(args: LogArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let level = LogLevel::from(args.level);
    let sink = args.sink.unwrap_or_else(|| config.defaults.sink.clone());

    let service = LogService::new(build_registry(&config)?, sink);
    service.log(LogEntry::new(level, args.message))?;

    if output.is_json() {
        output.json(&json!({ "sink": service.sink(), "level": level }))?;
    } else if output.is_human() {
        output.success(&format!("Logged at {level} via {}", service.sink()))?;
    }
    Ok(())
}
