//! Command handlers.
//!
//! Every handler that touches a capability builds its registry through
//! [`build_registry`], the CLI's composition root.

pub mod area;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod log;
pub mod print;
pub mod save;

use tracing::{debug, instrument};

use capreg_adapters::wire;
use capreg_core::application::CapabilityRegistry;

use crate::{config::AppConfig, error::CliResult};

/// Build a registry in the configured mode with the configured providers.
#[instrument(skip_all, fields(mode = %config.registry.mode))]
pub fn build_registry(config: &AppConfig) -> CliResult<CapabilityRegistry> {
    let registry = CapabilityRegistry::new(config.registry.mode);
    let installed = wire(&registry, &config.wiring_plan(), &config.storage)?;
    debug!(providers = installed.len(), "Registry ready");
    Ok(registry)
}
