//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `CAPREG_<SECTION>__<KEY>`, e.g.
//!    `CAPREG_REGISTRY__MODE=permissive`
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`] if present)
//! 4. Built-in defaults (always present)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use capreg_adapters::{AdapterSettings, WiringPlan};
use capreg_core::domain::RegistrationMode;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CAPREG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub registry: RegistryConfig,
    /// Capability name → discriminators to install. A `[wiring]` table in
    /// the file replaces the built-in wiring as a whole.
    pub wiring: BTreeMap<String, Vec<String>>,
    /// Providers used when a command does not name one.
    pub defaults: Defaults,
    /// Where file-backed providers write.
    pub storage: AdapterSettings,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub mode: RegistrationMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub backend: String,
    pub sink: String,
    pub device: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            backend: "file".into(),
            sink: "console".into(),
            device: "basic".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut wiring: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (capability, discriminator) in WiringPlan::everything().iter() {
            wiring
                .entry(capability.to_string())
                .or_default()
                .push(discriminator.to_string());
        }

        Self {
            registry: RegistryConfig::default(),
            wiring,
            defaults: Defaults::default(),
            storage: default_storage(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(&Self::active_path(config_file), config_file.is_some())
    }

    /// Like [`Self::load`] with an explicit path; a missing optional file is
    /// treated as empty.
    pub fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        // Wiring stays out of the layered defaults so a file's lists replace
        // them instead of being merged into them index by index.
        let base = Self {
            wiring: BTreeMap::new(),
            ..Self::default()
        };
        let defaults = Config::try_from(&base).context("Failed to encode built-in defaults")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let mut config: Self = settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        if config.wiring.is_empty() {
            config.wiring = Self::default().wiring;
        }
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.capreg.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "capreg", "capreg")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".capreg.toml"))
    }

    /// The file actually consulted for this invocation.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    pub fn wiring_plan(&self) -> WiringPlan {
        WiringPlan::from(self.wiring.clone())
    }

    /// Render as TOML, the format `init` writes.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }
}

fn default_storage() -> AdapterSettings {
    match directories::ProjectDirs::from("com", "capreg", "capreg") {
        Some(dirs) => storage_under(dirs.data_dir()),
        None => AdapterSettings::default(),
    }
}

fn storage_under(dir: &Path) -> AdapterSettings {
    AdapterSettings {
        records_dir: dir.join("records"),
        log_file: dir.join("capreg.log"),
    }
}
