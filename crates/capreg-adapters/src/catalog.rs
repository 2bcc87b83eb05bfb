//! Provider catalog and wiring.
//!
//! The catalog is the single table of every built-in provider. Wiring reads a
//! plan (capability → discriminators, usually from configuration) and installs
//! the named providers into a registry by table lookup. Adding a provider is
//! one new [`ProviderDef`] entry; nothing that dispatches needs to change.

use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::Arc;

use capreg_core::{
    application::CapabilityRegistry,
    domain::{
        AreaCalculation, Capability, Logging, Persistence, Printing, RegistrationMode, Scanning,
    },
    error::{RegistryError, RegistryResult},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::{
    area::{Circle, Rectangle, Square, Triangle},
    logging::{ConsoleLogger, FileLogger, MemoryLogger},
    persistence::{FileStore, MemoryStore},
    printing::{BasicPrinter, MultifunctionDevice},
};

/// Paths the file-backed providers write to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterSettings {
    pub records_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self {
            records_dir: PathBuf::from("records"),
            log_file: PathBuf::from("capreg.log"),
        }
    }
}

/// State shared between installs of one `wire` call.
pub struct InstallContext<'a> {
    pub settings: &'a AdapterSettings,
    multifunction: OnceCell<Arc<MultifunctionDevice>>,
}

impl<'a> InstallContext<'a> {
    fn new(settings: &'a AdapterSettings) -> Self {
        Self {
            settings,
            multifunction: OnceCell::new(),
        }
    }

    /// The one multifunction device, shared by its printing and scanning bindings.
    fn multifunction(&self) -> Arc<MultifunctionDevice> {
        self.multifunction
            .get_or_init(|| Arc::new(MultifunctionDevice::default()))
            .clone()
    }
}

type Install = fn(&CapabilityRegistry, &str, &InstallContext<'_>) -> RegistryResult<()>;

/// One catalog entry.
pub struct ProviderDef {
    pub capability: &'static str,
    pub discriminator: &'static str,
    pub summary: &'static str,
    install: Install,
}

impl ProviderDef {
    /// `capability/discriminator`
    pub fn id(&self) -> String {
        format!("{}/{}", self.capability, self.discriminator)
    }
}

impl std::fmt::Debug for ProviderDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDef")
            .field("capability", &self.capability)
            .field("discriminator", &self.discriminator)
            .finish_non_exhaustive()
    }
}

/// Every built-in provider.
pub static CATALOG: &[ProviderDef] = &[
    ProviderDef {
        capability: AreaCalculation::NAME,
        discriminator: "rectangle",
        summary: "width × height",
        install: |r, d, _| r.register::<AreaCalculation>(d, Rectangle).map(drop),
    },
    ProviderDef {
        capability: AreaCalculation::NAME,
        discriminator: "circle",
        summary: "π × radius²",
        install: |r, d, _| r.register::<AreaCalculation>(d, Circle).map(drop),
    },
    ProviderDef {
        capability: AreaCalculation::NAME,
        discriminator: "triangle",
        summary: "½ × base × height",
        install: |r, d, _| r.register::<AreaCalculation>(d, Triangle).map(drop),
    },
    ProviderDef {
        capability: AreaCalculation::NAME,
        discriminator: "square",
        summary: "side²",
        install: |r, d, _| r.register::<AreaCalculation>(d, Square).map(drop),
    },
    ProviderDef {
        capability: Persistence::NAME,
        discriminator: "memory",
        summary: "In-process map, lost on exit",
        install: |r, d, _| r.register::<Persistence>(d, MemoryStore::new()).map(drop),
    },
    ProviderDef {
        capability: Persistence::NAME,
        discriminator: "file",
        summary: "One JSON file per record under storage.records_dir",
        install: |r, d, ctx| {
            r.register::<Persistence>(d, FileStore::new(&ctx.settings.records_dir))
                .map(drop)
        },
    },
    ProviderDef {
        capability: Logging::NAME,
        discriminator: "console",
        summary: "Lines on stdout, errors on stderr",
        install: |r, d, _| r.register::<Logging>(d, ConsoleLogger).map(drop),
    },
    ProviderDef {
        capability: Logging::NAME,
        discriminator: "file",
        summary: "Timestamped lines appended to storage.log_file",
        install: |r, d, ctx| {
            r.register::<Logging>(d, FileLogger::new(&ctx.settings.log_file))
                .map(drop)
        },
    },
    ProviderDef {
        capability: Logging::NAME,
        discriminator: "memory",
        summary: "Captured in process",
        install: |r, d, _| r.register::<Logging>(d, MemoryLogger::new()).map(drop),
    },
    ProviderDef {
        capability: Printing::NAME,
        discriminator: "basic",
        summary: "Print-only device",
        install: |r, d, _| r.register::<Printing>(d, BasicPrinter::new(d)).map(drop),
    },
    ProviderDef {
        capability: Printing::NAME,
        discriminator: "multifunction",
        summary: "Print + scan device",
        install: |r, d, ctx| {
            r.register_shared::<Printing>(d, ctx.multifunction())
                .map(drop)
        },
    },
    ProviderDef {
        capability: Scanning::NAME,
        discriminator: "multifunction",
        summary: "Print + scan device",
        install: |r, d, ctx| {
            r.register_shared::<Scanning>(d, ctx.multifunction())
                .map(drop)
        },
    },
];

/// Find a catalog entry. Names are matched case-insensitively.
pub fn lookup(capability: &str, discriminator: &str) -> Option<&'static ProviderDef> {
    let capability = capability.trim().to_ascii_lowercase();
    let discriminator = discriminator.trim().to_ascii_lowercase();
    CATALOG
        .iter()
        .find(|def| def.capability == capability && def.discriminator == discriminator)
}

/// Declare every built-in capability on `registry`.
pub fn declare_builtin(registry: &CapabilityRegistry) -> RegistryResult<()> {
    registry.define::<AreaCalculation>()?;
    registry.define::<Persistence>()?;
    registry.define::<Logging>()?;
    registry.define::<Printing>()?;
    registry.define::<Scanning>()?;
    Ok(())
}

/// Which providers to install, per capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WiringPlan(BTreeMap<String, Vec<String>>);

impl WiringPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan that installs the whole catalog.
    pub fn everything() -> Self {
        CATALOG.iter().fold(Self::new(), |plan, def| {
            plan.with(def.capability, [def.discriminator])
        })
    }

    /// Add discriminators under `capability`.
    pub fn with<I, S>(mut self, capability: impl Into<String>, discriminators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(capability.into())
            .or_default()
            .extend(discriminators.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .flat_map(|(cap, discs)| discs.iter().map(move |d| (cap.as_str(), d.as_str())))
    }
}

impl From<BTreeMap<String, Vec<String>>> for WiringPlan {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}

#[derive(Debug, Error, Clone)]
pub enum WiringError {
    /// The plan names something the catalog does not have.
    #[error("No built-in provider '{discriminator}' for capability '{capability}'")]
    UnknownEntry {
        capability: String,
        discriminator: String,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl WiringError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownEntry { capability, .. } => {
                let known: Vec<_> = CATALOG
                    .iter()
                    .filter(|def| def.capability == capability)
                    .map(|def| def.discriminator)
                    .collect();
                if known.is_empty() {
                    vec![
                        format!("'{}' is not a built-in capability", capability),
                        format!(
                            "Built-in capabilities: {}",
                            capreg_core::domain::BUILTIN_CAPABILITIES.join(", ")
                        ),
                    ]
                } else {
                    vec![
                        format!("Available for '{}': {}", capability, known.join(", ")),
                        "Fix the [wiring] section of your configuration".into(),
                    ]
                }
            }
            Self::Registry(e) => e.suggestions(),
        }
    }
}

/// Declare the built-in capabilities and install every provider `plan` names.
///
/// The whole plan is checked before anything is installed: an unknown entry,
/// or in strict mode a repeated or already bound entry, leaves the registry
/// with no new providers.
///
/// Returns the installed entries in plan order.
#[instrument(skip_all, fields(entries = plan.iter().count()))]
pub fn wire(
    registry: &CapabilityRegistry,
    plan: &WiringPlan,
    settings: &AdapterSettings,
) -> Result<Vec<&'static ProviderDef>, WiringError> {
    declare_builtin(registry)?;

    let defs = plan
        .iter()
        .map(|(capability, discriminator)| {
            lookup(capability, discriminator).ok_or_else(|| WiringError::UnknownEntry {
                capability: capability.to_string(),
                discriminator: discriminator.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if registry.mode() == RegistrationMode::Strict {
        reject_duplicates(registry, &defs)?;
    }

    let ctx = InstallContext::new(settings);
    for def in &defs {
        (def.install)(registry, def.discriminator, &ctx)?;
        debug!(provider = %def.id(), "Provider installed");
    }

    info!(installed = defs.len(), "Registry wired");
    Ok(defs)
}

/// Strict installs fail on the first clash; find it before installing.
fn reject_duplicates(
    registry: &CapabilityRegistry,
    defs: &[&'static ProviderDef],
) -> Result<(), WiringError> {
    let mut seen = BTreeSet::new();
    for def in defs {
        let bound = registry
            .list_by_name(def.capability)?
            .iter()
            .any(|d| d.as_str() == def.discriminator);
        if bound || !seen.insert(def.id()) {
            return Err(RegistryError::DuplicateRegistration {
                capability: def.capability.to_string(),
                discriminator: def.discriminator.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use capreg_core::domain::{Document, Dimensions, RegistrationMode, ScanRequest};

    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = CATALOG.iter().map(ProviderDef::id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn catalog_only_names_builtin_capabilities() {
        for def in CATALOG {
            assert!(
                capreg_core::domain::BUILTIN_CAPABILITIES.contains(&def.capability),
                "{}",
                def.id()
            );
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(lookup("AREA", " Circle ").is_some());
        assert!(lookup("area", "hexagon").is_none());
    }

    #[test]
    fn wire_everything_installs_catalog() {
        let registry = CapabilityRegistry::strict();
        let installed = wire(
            &registry,
            &WiringPlan::everything(),
            &AdapterSettings::default(),
        )
        .unwrap();

        assert_eq!(installed.len(), CATALOG.len());
        assert_eq!(registry.list::<AreaCalculation>().unwrap().len(), 4);
        assert!(registry.contains::<Scanning>("multifunction").unwrap());
    }

    #[test]
    fn partial_plan_declares_every_capability() {
        let registry = CapabilityRegistry::strict();
        let plan = WiringPlan::new().with("area", ["circle"]);

        wire(&registry, &plan, &AdapterSettings::default()).unwrap();

        assert_eq!(
            registry.capabilities().unwrap(),
            ["area", "logging", "persistence", "printing", "scanning"]
        );
        assert!(registry.list::<Logging>().unwrap().is_empty());
    }

    #[test]
    fn unknown_entry_installs_nothing() {
        let registry = CapabilityRegistry::strict();
        let plan = WiringPlan::new()
            .with("area", ["circle"])
            .with("printing", ["laser"]);

        let err = wire(&registry, &plan, &AdapterSettings::default()).unwrap_err();

        assert!(matches!(err, WiringError::UnknownEntry { .. }));
        assert!(err.suggestions()[0].contains("basic"));
        assert!(registry.list::<AreaCalculation>().unwrap().is_empty());
    }

    #[test]
    fn duplicate_plan_entry_follows_registry_mode() {
        let plan = WiringPlan::new().with("area", ["circle", "CIRCLE"]);

        let strict = CapabilityRegistry::strict();
        assert!(matches!(
            wire(&strict, &plan, &AdapterSettings::default()),
            Err(WiringError::Registry(
                RegistryError::DuplicateRegistration { .. }
            ))
        ));

        let permissive = CapabilityRegistry::new(RegistrationMode::Permissive);
        assert!(wire(&permissive, &plan, &AdapterSettings::default()).is_ok());
    }

    #[test]
    fn strict_duplicate_installs_nothing() {
        let registry = CapabilityRegistry::strict();
        let plan = WiringPlan::new()
            .with("area", ["rectangle"])
            .with("logging", ["console", "console"]);

        assert!(matches!(
            wire(&registry, &plan, &AdapterSettings::default()),
            Err(WiringError::Registry(
                RegistryError::DuplicateRegistration { .. }
            ))
        ));
        assert!(registry.list::<AreaCalculation>().unwrap().is_empty());
        assert!(registry.list::<Logging>().unwrap().is_empty());
    }

    #[test]
    fn strict_rewire_of_bound_entry_installs_nothing() {
        let registry = CapabilityRegistry::strict();
        let settings = AdapterSettings::default();
        wire(&registry, &WiringPlan::new().with("logging", ["console"]), &settings).unwrap();

        let again = WiringPlan::new()
            .with("area", ["square"])
            .with("logging", ["console"]);
        assert!(wire(&registry, &again, &settings).is_err());
        assert!(registry.list::<AreaCalculation>().unwrap().is_empty());
    }

    #[test]
    fn multifunction_is_one_device() {
        let registry = CapabilityRegistry::strict();
        let plan = WiringPlan::new()
            .with("printing", ["multifunction"])
            .with("scanning", ["multifunction"]);
        wire(&registry, &plan, &AdapterSettings::default()).unwrap();

        let printer = registry.resolve::<Printing>("multifunction").unwrap();
        let scanner = registry.resolve::<Scanning>("multifunction").unwrap();
        assert_eq!(
            Arc::as_ptr(&printer).cast::<()>(),
            Arc::as_ptr(&scanner).cast::<()>()
        );

        registry
            .invoke::<Printing>("multifunction", Document::new("t", "b"))
            .unwrap();
        registry
            .invoke::<Scanning>("multifunction", ScanRequest::new("s", 1))
            .unwrap();
        assert!(
            registry
                .invoke::<AreaCalculation>("multifunction", Dimensions::new())
                .is_err()
        );
    }
}
