//! `capreg list`: what the registry was wired with.

use tracing::instrument;

use capreg_adapters::catalog;

use super::build_registry;
use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let registry = build_registry(&config)?;
    let mut summaries = registry.describe()?;

    if let Some(name) = args.capability.as_deref() {
        let name = name.trim().to_ascii_lowercase();
        // Fails with UnknownCapability for names nobody declared.
        registry.list_by_name(&name)?;
        summaries.retain(|s| s.name == name);
    }

    match args.format {
        ListFormat::Table => {
            output.header("Capabilities:")?;
            for summary in &summaries {
                output.result(&format!("  {}", summary.name))?;
                if summary.providers.is_empty() {
                    output.result(&output.dim("    (no providers)"))?;
                }
                for provider in &summary.providers {
                    let about = catalog::lookup(&summary.name, provider)
                        .map(|def| def.summary)
                        .unwrap_or_default();
                    output.result(&format!("    {:<14} {}", provider, output.dim(about)))?;
                }
            }
        }

        ListFormat::List => {
            for summary in &summaries {
                for provider in &summary.providers {
                    output.result(&format!("{}/{}", summary.name, provider))?;
                }
            }
        }

        ListFormat::Json => output.json(&summaries)?,
    }

    Ok(())
}
