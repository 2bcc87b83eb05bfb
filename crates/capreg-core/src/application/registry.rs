//! Capability Registry - keyed dispatch from a discriminator to a provider.
//!
//! The registry is a two-level table: capability → discriminator → provider.
//! Call sites hand it a discriminator (usually from configuration or a
//! request field) and an input; the registry performs one table lookup and one
//! [`Provider::execute`] call. It never matches on discriminator values and
//! never looks at the concrete provider type, so adding a provider never
//! touches existing call sites or providers.
//!
//! ## Locking
//!
//! One `RwLock` guards the whole table. Writers validate before mutating, so
//! a failed `register` leaves the table untouched. `invoke` clones the
//! provider handle under the read lock and releases it before executing.

use std::any::{Any, TypeId};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::{
    application::ports::{Provider, SharedProvider},
    domain::{Capability, Discriminator, RegistrationMode},
    error::{RegistryError, RegistryResult},
};

/// Type-erased `SharedProvider<C>`; the owning table is keyed by `TypeId::of::<C>()`.
type Binding = Box<dyn Any + Send + Sync>;

struct CapabilityTable {
    name: &'static str,
    bindings: HashMap<Discriminator, Binding>,
}

#[derive(Default)]
struct Tables {
    by_type: HashMap<TypeId, CapabilityTable>,
    by_name: HashMap<&'static str, TypeId>,
}

impl Tables {
    fn table<C: Capability>(&self) -> RegistryResult<&CapabilityTable> {
        self.by_type
            .get(&TypeId::of::<C>())
            .ok_or_else(|| unknown_capability(C::NAME))
    }

    fn table_mut<C: Capability>(&mut self) -> RegistryResult<&mut CapabilityTable> {
        self.by_type
            .get_mut(&TypeId::of::<C>())
            .ok_or_else(|| unknown_capability(C::NAME))
    }
}

/// Introspection view of one capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilitySummary {
    pub name: String,
    pub providers: Vec<String>,
}

/// Thread-safe capability registry.
///
/// Cloning is cheap; clones share one table.
#[derive(Clone)]
pub struct CapabilityRegistry {
    mode: RegistrationMode,
    tables: Arc<RwLock<Tables>>,
}

impl CapabilityRegistry {
    /// Create an empty registry.
    pub fn new(mode: RegistrationMode) -> Self {
        Self {
            mode,
            tables: Arc::new(RwLock::new(Tables::default())),
        }
    }

    /// Empty registry that rejects re-registration.
    pub fn strict() -> Self {
        Self::new(RegistrationMode::Strict)
    }

    /// Empty registry where re-registration replaces the binding.
    pub fn permissive() -> Self {
        Self::new(RegistrationMode::Permissive)
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn mode(&self) -> RegistrationMode {
        self.mode
    }

    // -------------------------------------------------------------------------
    // Capabilities
    // -------------------------------------------------------------------------

    /// Declare capability `C`. Idempotent; returns `true` if newly declared.
    ///
    /// # Errors
    ///
    /// `CapabilityConflict` if another type already claimed `C::NAME`.
    pub fn define<C: Capability>(&self) -> RegistryResult<bool> {
        let mut tables = self.write()?;
        let id = TypeId::of::<C>();

        if tables.by_type.contains_key(&id) {
            return Ok(false);
        }
        if tables.by_name.contains_key(C::NAME) {
            return Err(RegistryError::CapabilityConflict {
                name: C::NAME.to_string(),
            });
        }

        tables.by_name.insert(C::NAME, id);
        tables.by_type.insert(
            id,
            CapabilityTable {
                name: C::NAME,
                bindings: HashMap::new(),
            },
        );
        debug!(capability = C::NAME, "Capability declared");
        Ok(true)
    }

    pub fn is_defined<C: Capability>(&self) -> RegistryResult<bool> {
        Ok(self.read()?.by_type.contains_key(&TypeId::of::<C>()))
    }

    /// Names of all declared capabilities, sorted.
    pub fn capabilities(&self) -> RegistryResult<Vec<&'static str>> {
        let tables = self.read()?;
        let mut names: Vec<_> = tables.by_name.keys().copied().collect();
        names.sort_unstable();
        Ok(names)
    }

    // -------------------------------------------------------------------------
    // Bindings
    // -------------------------------------------------------------------------

    /// Bind `provider` to `discriminator` under `C`.
    ///
    /// Returns the provider it replaced (permissive mode only), or `None`.
    ///
    /// # Errors
    ///
    /// - `Domain` if the discriminator is malformed
    /// - `UnknownCapability` if `C` was never declared
    /// - `DuplicateRegistration` in strict mode when already bound
    pub fn register<C: Capability>(
        &self,
        discriminator: impl AsRef<str>,
        provider: impl Provider<C> + 'static,
    ) -> RegistryResult<Option<SharedProvider<C>>> {
        self.register_shared::<C>(discriminator, Arc::new(provider))
    }

    /// Like [`Self::register`], for a provider that is already shared.
    #[instrument(
        skip_all,
        fields(capability = C::NAME, discriminator = %discriminator.as_ref(), mode = %self.mode)
    )]
    pub fn register_shared<C: Capability>(
        &self,
        discriminator: impl AsRef<str>,
        provider: SharedProvider<C>,
    ) -> RegistryResult<Option<SharedProvider<C>>> {
        let discriminator = Discriminator::try_new(discriminator)?;

        let mut tables = self.write()?;
        let table = tables.table_mut::<C>()?;

        if self.mode == RegistrationMode::Strict && table.bindings.contains_key(&discriminator) {
            return Err(RegistryError::DuplicateRegistration {
                capability: C::NAME.to_string(),
                discriminator: discriminator.to_string(),
            });
        }

        let binding: Binding = Box::new(provider);
        let replaced = table.bindings.insert(discriminator, binding);
        drop(tables);

        match replaced {
            Some(previous) => {
                debug!("Provider replaced");
                unwrap_binding::<C>(previous).map(Some)
            }
            None => {
                debug!("Provider registered");
                Ok(None)
            }
        }
    }

    /// Remove a binding. Removing an absent binding is a no-op.
    ///
    /// Returns the removed provider, if there was one.
    ///
    /// # Errors
    ///
    /// `UnknownCapability` if `C` was never declared.
    #[instrument(skip_all, fields(capability = C::NAME, discriminator = %discriminator.as_ref()))]
    pub fn unregister<C: Capability>(
        &self,
        discriminator: impl AsRef<str>,
    ) -> RegistryResult<Option<SharedProvider<C>>> {
        let mut tables = self.write()?;
        let table = tables.table_mut::<C>()?;

        // A malformed key can never have been bound.
        let Ok(discriminator) = Discriminator::try_new(discriminator) else {
            return Ok(None);
        };

        let removed = table.bindings.remove(&discriminator);
        drop(tables);

        match removed {
            Some(binding) => {
                debug!("Provider unregistered");
                unwrap_binding::<C>(binding).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Look up the provider bound to `discriminator`. No side effects.
    ///
    /// # Errors
    ///
    /// - `UnknownCapability` if `C` was never declared
    /// - `UnknownProvider` if nothing is bound
    pub fn resolve<C: Capability>(
        &self,
        discriminator: impl AsRef<str>,
    ) -> RegistryResult<SharedProvider<C>> {
        let raw = discriminator.as_ref();
        let tables = self.read()?;
        let table = tables.table::<C>()?;

        let binding = Discriminator::try_new(raw)
            .ok()
            .and_then(|d| table.bindings.get(&d))
            .ok_or_else(|| RegistryError::UnknownProvider {
                capability: C::NAME.to_string(),
                discriminator: raw.to_string(),
            })?;

        binding
            .downcast_ref::<SharedProvider<C>>()
            .cloned()
            .ok_or_else(|| binding_mismatch(table.name))
    }

    /// Resolve, then execute the provider against `input`.
    ///
    /// # Errors
    ///
    /// Lookup errors as in [`Self::resolve`]; a failing provider surfaces as
    /// `ProviderFailure` wrapping its own error, unretried.
    #[instrument(skip_all, fields(capability = C::NAME, discriminator = %discriminator.as_ref()))]
    pub fn invoke<C: Capability>(
        &self,
        discriminator: impl AsRef<str>,
        input: C::Input,
    ) -> RegistryResult<C::Output> {
        let discriminator = discriminator.as_ref();
        let provider = self.resolve::<C>(discriminator)?;

        provider.execute(input).map_err(|cause| {
            warn!(error = %cause, "Provider failed");
            RegistryError::ProviderFailure {
                capability: C::NAME.to_string(),
                discriminator: discriminator.to_string(),
                cause,
            }
        })
    }

    pub fn contains<C: Capability>(&self, discriminator: impl AsRef<str>) -> RegistryResult<bool> {
        let tables = self.read()?;
        let table = tables.table::<C>()?;

        Ok(Discriminator::try_new(discriminator)
            .map(|d| table.bindings.contains_key(&d))
            .unwrap_or(false))
    }

    /// Discriminators currently bound under `C`.
    pub fn list<C: Capability>(&self) -> RegistryResult<BTreeSet<Discriminator>> {
        let tables = self.read()?;
        Ok(tables.table::<C>()?.bindings.keys().cloned().collect())
    }

    /// Discriminators bound under the capability called `name`.
    pub fn list_by_name(&self, name: &str) -> RegistryResult<BTreeSet<Discriminator>> {
        let tables = self.read()?;
        tables
            .by_name
            .get(name)
            .and_then(|id| tables.by_type.get(id))
            .map(|table| table.bindings.keys().cloned().collect())
            .ok_or_else(|| unknown_capability(name))
    }

    /// Every declared capability with its bound discriminators, sorted by name.
    pub fn describe(&self) -> RegistryResult<Vec<CapabilitySummary>> {
        let tables = self.read()?;
        let mut summaries: Vec<_> = tables
            .by_type
            .values()
            .map(|table| {
                let mut providers: Vec<_> =
                    table.bindings.keys().map(|d| d.to_string()).collect();
                providers.sort_unstable();
                CapabilitySummary {
                    name: table.name.to_string(),
                    providers,
                }
            })
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn read(&self) -> RegistryResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| RegistryError::LockPoisoned)
    }

    fn write(&self) -> RegistryResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| RegistryError::LockPoisoned)
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new(RegistrationMode::default())
    }
}

impl fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capabilities = self.capabilities().unwrap_or_default();
        f.debug_struct("CapabilityRegistry")
            .field("mode", &self.mode)
            .field("capabilities", &capabilities)
            .finish()
    }
}

fn unwrap_binding<C: Capability>(binding: Binding) -> RegistryResult<SharedProvider<C>> {
    binding
        .downcast::<SharedProvider<C>>()
        .map(|boxed| *boxed)
        .map_err(|_| binding_mismatch(C::NAME))
}

fn unknown_capability(name: &str) -> RegistryError {
    RegistryError::UnknownCapability {
        capability: name.to_string(),
    }
}

fn binding_mismatch(capability: &str) -> RegistryError {
    RegistryError::Internal {
        message: format!("binding stored under '{capability}' has the wrong provider type"),
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

type Step = Box<dyn FnOnce(&CapabilityRegistry) -> RegistryResult<()>>;

/// Assemble a registry in one expression.
///
/// `provider::<C>` declares `C` on first use. `build` applies steps in order
/// and returns the first error; no half-built registry escapes.
#[derive(Default)]
pub struct RegistryBuilder {
    mode: RegistrationMode,
    steps: Vec<Step>,
}

impl RegistryBuilder {
    pub fn mode(mut self, mode: RegistrationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Declare a capability with no providers yet.
    pub fn capability<C: Capability>(mut self) -> Self {
        self.steps
            .push(Box::new(|registry| registry.define::<C>().map(|_| ())));
        self
    }

    /// Declare `C` if needed and bind `provider` to `discriminator`.
    pub fn provider<C: Capability>(
        mut self,
        discriminator: impl Into<String>,
        provider: impl Provider<C> + 'static,
    ) -> Self {
        let discriminator = discriminator.into();
        self.steps.push(Box::new(move |registry| {
            registry.define::<C>()?;
            registry.register::<C>(discriminator, provider).map(|_| ())
        }));
        self
    }

    pub fn build(self) -> RegistryResult<CapabilityRegistry> {
        let registry = CapabilityRegistry::new(self.mode);
        for step in self.steps {
            step(&registry)?;
        }
        Ok(registry)
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("mode", &self.mode)
            .field("steps", &self.steps.len())
            .finish()
    }
}
