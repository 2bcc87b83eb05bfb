//! Driven (output) ports - implemented by infrastructure.
//!
//! The `capreg-adapters` crate provides the built-in providers.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::Capability;
use crate::error::ProviderError;

/// Port for one concrete behaviour of capability `C`.
///
/// Implemented by:
/// - `capreg_adapters::area::*` (rectangle, circle, triangle, square)
/// - `capreg_adapters::persistence::*` (memory, file)
/// - `capreg_adapters::logging::*` (console, file, memory)
/// - `capreg_adapters::printing::*` (basic, multifunction)
///
/// ## Design Notes
///
/// - Exactly one required method and no defaults: a provider either serves
///   the whole signature or it does not implement the trait
/// - Providers never see the registry or their sibling providers
/// - `Send + Sync` so one instance can serve concurrent callers; any
///   internal state is guarded by the provider itself
pub trait Provider<C: Capability>: Send + Sync {
    /// Run the behaviour against `input`.
    fn execute(&self, input: C::Input) -> Result<C::Output, ProviderError>;
}

/// How the registry holds and hands out providers.
pub type SharedProvider<C> = Arc<dyn Provider<C>>;

// Lets `RegistryResult<SharedProvider<C>>` be unwrapped and logged.
impl<C: Capability> fmt::Debug for dyn Provider<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Provider<{}>", C::NAME)
    }
}

/// Provider backed by a closure.
pub struct FnProvider<C, F> {
    f: F,
    _capability: PhantomData<fn() -> C>,
}

impl<C, F> Provider<C> for FnProvider<C, F>
where
    C: Capability,
    F: Fn(C::Input) -> Result<C::Output, ProviderError> + Send + Sync,
{
    fn execute(&self, input: C::Input) -> Result<C::Output, ProviderError> {
        (self.f)(input)
    }
}

impl<C: Capability, F> fmt::Debug for FnProvider<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProvider")
            .field("capability", &C::NAME)
            .finish_non_exhaustive()
    }
}

/// Wrap a closure as a provider for `C`.
///
/// ```rust
/// use capreg_core::{application::ports::{Provider, provider_fn}, domain::AreaCalculation};
///
/// let unit = provider_fn::<AreaCalculation, _>(|_dims| Ok(1.0));
/// assert_eq!(unit.execute(Default::default()).unwrap(), 1.0);
/// ```
pub fn provider_fn<C, F>(f: F) -> FnProvider<C, F>
where
    C: Capability,
    F: Fn(C::Input) -> Result<C::Output, ProviderError> + Send + Sync,
{
    FnProvider {
        f,
        _capability: PhantomData,
    }
}
