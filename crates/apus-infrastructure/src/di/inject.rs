//! Lazy Injection Accessors
//!
//! Declare a dependency on a capability without resolving it. Every
//! [`get`](Injected::get) resolves against the bound registry at that moment,
//! so re-registrations, `clear` and `reset` made after binding are observed
//! on the next read.
//!
//! ```rust,ignore
//! struct Shutter {
//!     haptics: Injected<dyn HapticFeedback>,
//!     errors: OptionalInjected<dyn ErrorReporter>,
//! }
//!
//! let shutter = Shutter {
//!     haptics: Injected::new(&registry),
//!     errors: OptionalInjected::new(&registry),
//! };
//! shutter.haptics.get().success();
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::identity::CapabilityId;
use super::registry::Registry;

/// Required dependency on capability `C`
///
/// Reading it panics if `C` is not registered when read.
pub struct Injected<C: ?Sized> {
    registry: Registry,
    capability: PhantomData<fn() -> Arc<C>>,
}

impl<C> Injected<C>
where
    C: ?Sized + Send + Sync + 'static,
{
    /// Bind to `registry`
    pub fn new(registry: &Registry) -> Self {
        Self {
            registry: registry.clone(),
            capability: PhantomData,
        }
    }

    /// Resolve the capability now
    ///
    /// # Panics
    ///
    /// When `C` is not registered in the bound registry.
    pub fn get(&self) -> Arc<C> {
        self.registry.resolve::<C>()
    }

    /// Identity of the capability this accessor resolves
    pub fn capability(&self) -> CapabilityId {
        CapabilityId::of::<C>()
    }

    /// The registry this accessor is bound to
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

/// Binds to the process-wide registry
impl<C> Default for Injected<C>
where
    C: ?Sized + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(Registry::shared())
    }
}

impl<C: ?Sized> Clone for Injected<C> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            capability: PhantomData,
        }
    }
}

impl<C: ?Sized + 'static> fmt::Debug for Injected<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injected")
            .field("capability", &CapabilityId::of::<C>())
            .finish_non_exhaustive()
    }
}

/// Optional dependency on capability `C`
///
/// Reading it yields `None` if `C` is not registered when read.
pub struct OptionalInjected<C: ?Sized> {
    registry: Registry,
    capability: PhantomData<fn() -> Arc<C>>,
}

impl<C> OptionalInjected<C>
where
    C: ?Sized + Send + Sync + 'static,
{
    /// Bind to `registry`
    pub fn new(registry: &Registry) -> Self {
        Self {
            registry: registry.clone(),
            capability: PhantomData,
        }
    }

    /// Resolve the capability now, `None` if it is not registered
    pub fn get(&self) -> Option<Arc<C>> {
        self.registry.resolve_optional::<C>()
    }

    /// Identity of the capability this accessor resolves
    pub fn capability(&self) -> CapabilityId {
        CapabilityId::of::<C>()
    }

    /// The registry this accessor is bound to
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

/// Binds to the process-wide registry
impl<C> Default for OptionalInjected<C>
where
    C: ?Sized + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(Registry::shared())
    }
}

impl<C: ?Sized> Clone for OptionalInjected<C> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            capability: PhantomData,
        }
    }
}

impl<C: ?Sized + 'static> fmt::Debug for OptionalInjected<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalInjected")
            .field("capability", &CapabilityId::of::<C>())
            .finish_non_exhaustive()
    }
}
