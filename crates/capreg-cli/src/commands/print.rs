//! `capreg print` and `capreg scan`.

use tracing::instrument;

use capreg_core::application::PrintService;
use capreg_core::domain::{Document, ScanRequest};

use super::build_registry;
use crate::{
    cli::{PrintArgs, ScanArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(title = %args.title))]
pub fn execute(args: PrintArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let device = args.device.unwrap_or_else(|| config.defaults.device.clone());
    let service = PrintService::new(build_registry(&config)?, device);
    let job = service.print(Document::new(args.title, args.body))?;

    if output.is_json() {
        output.json(&job)?;
    } else if output.is_human() {
        output.success(&format!(
            "Printed '{}' on {} ({} page(s))",
            job.title, job.device, job.pages
        ))?;
        output.print(&output.dim(&format!("job {}", job.id)))?;
    } else {
        output.result(&job.id.to_string())?;
    }
    Ok(())
}

#[instrument(skip_all, fields(label = %args.label, pages = args.pages))]
pub fn scan(args: ScanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let device = args.device.unwrap_or_else(|| config.defaults.device.clone());
    let service = PrintService::new(build_registry(&config)?, device);
    let document = service.scan(ScanRequest::new(args.label, args.pages))?;

    if output.is_json() {
        output.json(&document)?;
    } else {
        output.header(&document.title)?;
        output.result(&document.body)?;
    }
    Ok(())
}
