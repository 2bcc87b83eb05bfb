//! `capreg save`: hand a JSON record to a persistence provider.

use serde_json::json;
use tracing::instrument;

use capreg_core::application::RecordService;
use capreg_core::domain::Record;

use super::build_registry;
use crate::{
    cli::SaveArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(key = %args.key))]
pub fn execute(args: SaveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let payload: serde_json::Value =
        serde_json::from_str(&args.payload).with_cli_context(|| "Payload is not valid JSON")?;
    let backend = args.backend.unwrap_or_else(|| config.defaults.backend.clone());

    let service = RecordService::new(build_registry(&config)?, backend);
    service.save(Record::new(args.key.clone(), payload))?;

    if output.is_json() {
        output.json(&json!({ "key": args.key, "backend": service.backend() }))?;
    } else if output.is_human() {
        output.success(&format!("Saved '{}' via {}", args.key, service.backend()))?;
    } else {
        output.result(&args.key)?;
    }
    Ok(())
}
