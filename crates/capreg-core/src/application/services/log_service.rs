//! Log Service - send log entries to the configured sink.

use crate::{
    application::CapabilityRegistry,
    domain::{LogEntry, Logging},
    error::RegistryResult,
};

/// Service for application log messages.
///
/// This is the *business* logging capability; diagnostics of capreg itself go
/// through `tracing`.
#[derive(Debug, Clone)]
pub struct LogService {
    registry: CapabilityRegistry,
    sink: String,
}

impl LogService {
    pub fn new(registry: CapabilityRegistry, sink: impl Into<String>) -> Self {
        Self {
            registry,
            sink: sink.into(),
        }
    }

    pub fn sink(&self) -> &str {
        &self.sink
    }

    pub fn log(&self, entry: LogEntry) -> RegistryResult<()> {
        self.registry.invoke::<Logging>(&self.sink, entry)
    }

    pub fn info(&self, message: impl Into<String>) -> RegistryResult<()> {
        self.log(LogEntry::info(message))
    }

    pub fn warn(&self, message: impl Into<String>) -> RegistryResult<()> {
        self.log(LogEntry::warn(message))
    }

    pub fn error(&self, message: impl Into<String>) -> RegistryResult<()> {
        self.log(LogEntry::error(message))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::provider_fn;
    use crate::domain::LogLevel;

    fn capturing() -> (CapabilityRegistry, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = lines.clone();

        let registry = CapabilityRegistry::builder()
            .provider::<Logging>(
                "capture",
                provider_fn::<Logging, _>(move |entry: LogEntry| {
                    let message = entry.require_message()?;
                    sink.lock()
                        .unwrap()
                        .push(format!("{} {}", entry.level, message));
                    Ok(())
                }),
            )
            .build()
            .unwrap();

        (registry, lines)
    }

    #[test]
    fn helpers_set_level() {
        let (registry, lines) = capturing();
        let service = LogService::new(registry, "capture");

        service.info("started").unwrap();
        service.warn("disk low").unwrap();
        service.error("crashed").unwrap();

        assert_eq!(
            *lines.lock().unwrap(),
            ["info started", "warn disk low", "error crashed"]
        );
    }

    #[test]
    fn null_message_is_provider_failure() {
        let (registry, lines) = capturing();
        let service = LogService::new(registry, "capture");

        let err = service
            .log(LogEntry::without_message(LogLevel::Info))
            .unwrap_err();

        assert!(err.is_provider_failure());
        assert!(lines.lock().unwrap().is_empty());
    }
}
