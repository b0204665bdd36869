//! Capability Registry
//!
//! Flat, process-wide map from capability identity to provider, following
//! the Service Locator pattern.
//!
//! ## Tables
//!
//! ```text
//! instances: CapabilityId → Arc<C>          (singleton lifetime)
//! factories: CapabilityId → Fn() → Arc<C>   (fresh value per resolve)
//! ```
//!
//! Resolution checks `instances` first, then `factories`. Registering into
//! one table never touches the other, so a pinned instance shadows a factory
//! for the same capability without deleting it. Factory results are not
//! cached: every resolve that falls through to the factory table runs the
//! factory again.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use tracing::{debug, error};

use super::bootstrap::{ProductionProfile, Profile};
use super::error::RegistryError;
use super::identity::CapabilityId;

/// Type-erased `Arc<C>`
type Erased = Box<dyn Any + Send + Sync>;

/// Type-erased factory producing an `Arc<C>`
type ErasedFactory = Arc<dyn Fn() -> Erased + Send + Sync>;

#[derive(Default)]
struct Tables {
    instances: HashMap<CapabilityId, Erased>,
    factories: HashMap<CapabilityId, ErasedFactory>,
}

static SHARED: LazyLock<Registry> =
    LazyLock::new(|| Registry::with_profile(Arc::new(ProductionProfile::default())));

/// Capability registry
///
/// Cloning yields another handle to the same tables.
#[derive(Clone)]
pub struct Registry {
    tables: Arc<RwLock<Tables>>,
    profile: Option<Arc<dyn Profile>>,
}

impl Registry {
    /// Create an empty registry with no bootstrap profile
    ///
    /// [`reset`](Self::reset) on such a registry leaves it empty.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            profile: None,
        }
    }

    /// Create a registry and immediately run `profile` against it
    ///
    /// The profile is kept and re-run by [`reset`](Self::reset).
    pub fn with_profile(profile: Arc<dyn Profile>) -> Self {
        let registry = Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            profile: Some(profile),
        };
        registry.reset();
        registry
    }

    /// The process-wide registry, bootstrapped with the default production
    /// profile on first access
    pub fn shared() -> &'static Registry {
        &SHARED
    }

    /// Name of the bootstrap profile, if any
    pub fn profile_name(&self) -> Option<&'static str> {
        self.profile.as_ref().map(|profile| profile.name())
    }

    /// A handle that does not keep the tables alive
    ///
    /// Factories that resolve other capabilities capture this instead of a
    /// [`Registry`], which would otherwise form a reference cycle through the
    /// factory table.
    pub fn downgrade(&self) -> WeakRegistry {
        WeakRegistry {
            tables: Arc::downgrade(&self.tables),
            profile: self.profile.as_ref().map(Arc::downgrade),
        }
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a factory for capability `C`, replacing any previous factory
    ///
    /// The instance table is left untouched.
    pub fn register_factory<C, F>(&self, factory: F)
    where
        C: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<C> + Send + Sync + 'static,
    {
        let id = CapabilityId::of::<C>();
        let erased: ErasedFactory = Arc::new(move || Box::new(factory()) as Erased);
        self.write().factories.insert(id, erased);
        debug!(capability = id.name(), "Registered factory");
    }

    /// Register a singleton instance for capability `C`, replacing any
    /// previous instance
    ///
    /// The factory table is left untouched.
    pub fn register_instance<C>(&self, instance: Arc<C>)
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let id = CapabilityId::of::<C>();
        self.write().instances.insert(id, Box::new(instance));
        debug!(capability = id.name(), "Registered instance");
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Resolve capability `C`, panicking if it is not registered
    ///
    /// A missing registration is a wiring defect, not a runtime condition.
    /// Use [`resolve_optional`](Self::resolve_optional) for capabilities that
    /// may legitimately be absent.
    ///
    /// # Panics
    ///
    /// When neither table has an entry for `C`, or the stored entry holds a
    /// value of another type.
    pub fn resolve<C>(&self) -> Arc<C>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        match self.resolve_optional::<C>() {
            Some(value) => value,
            None => fatal(&RegistryError::NotRegistered {
                capability: CapabilityId::of::<C>(),
            }),
        }
    }

    /// Resolve capability `C`, returning `None` if it is not registered
    ///
    /// # Panics
    ///
    /// When the stored entry holds a value of another type.
    pub fn resolve_optional<C>(&self) -> Option<Arc<C>>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        match self.try_resolve::<C>() {
            Ok(value) => Some(value),
            Err(RegistryError::NotRegistered { .. }) => None,
            Err(mismatch) => fatal(&mismatch),
        }
    }

    /// Resolve capability `C`, reporting every failure as an error
    pub fn try_resolve<C>(&self) -> Result<Arc<C>, RegistryError>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let capability = CapabilityId::of::<C>();

        let factory = {
            let tables = self.read();
            if let Some(entry) = tables.instances.get(&capability) {
                return (**entry)
                    .downcast_ref::<Arc<C>>()
                    .cloned()
                    .ok_or(RegistryError::TypeMismatch { capability });
            }
            match tables.factories.get(&capability) {
                Some(factory) => Arc::clone(factory),
                None => return Err(RegistryError::NotRegistered { capability }),
            }
        };

        // The lock is released so the factory may resolve its own dependencies.
        factory()
            .downcast::<Arc<C>>()
            .map(|value| *value)
            .map_err(|_| RegistryError::TypeMismatch { capability })
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Whether an instance or a factory is registered for `C`
    pub fn contains<C: ?Sized + 'static>(&self) -> bool {
        let capability = CapabilityId::of::<C>();
        let tables = self.read();
        tables.instances.contains_key(&capability) || tables.factories.contains_key(&capability)
    }

    /// Number of registered singleton instances
    pub fn instance_count(&self) -> usize {
        self.read().instances.len()
    }

    /// Number of registered factories
    pub fn factory_count(&self) -> usize {
        self.read().factories.len()
    }

    /// Every capability with at least one entry, sorted by name
    pub fn capabilities(&self) -> Vec<CapabilityId> {
        let tables = self.read();
        let mut ids: Vec<CapabilityId> = tables
            .instances
            .keys()
            .chain(tables.factories.keys().filter(|id| !tables.instances.contains_key(*id)))
            .copied()
            .collect();
        ids.sort_by_key(CapabilityId::name);
        ids
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Empty both tables
    pub fn clear(&self) {
        let mut tables = self.write();
        tables.instances.clear();
        tables.factories.clear();
        debug!("Cleared registry");
    }

    /// Clear, then re-run the bootstrap profile
    ///
    /// Expected at test-suite boundaries, not while resolutions are in flight.
    pub fn reset(&self) {
        self.clear();
        if let Some(profile) = &self.profile {
            profile.register(self);
            debug!(profile = profile.name(), "Reset registry to bootstrap profile");
        }
    }

    /// Clear, then register `profile`
    ///
    /// Profiles never merge: whatever was registered before is gone. The
    /// bootstrap profile used by [`reset`](Self::reset) is unchanged.
    pub fn apply_profile(&self, profile: &dyn Profile) {
        self.clear();
        profile.register(self);
        debug!(profile = profile.name(), "Applied registry profile");
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn insert_erased_instance(&self, capability: CapabilityId, value: Erased) {
        self.write().instances.insert(capability, value);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = self.read();
        f.debug_struct("Registry")
            .field("profile", &self.profile_name())
            .field("instances", &tables.instances.len())
            .field("factories", &tables.factories.len())
            .finish()
    }
}

/// Non-owning registry handle held by factories
#[derive(Clone)]
pub struct WeakRegistry {
    tables: Weak<RwLock<Tables>>,
    profile: Option<Weak<dyn Profile>>,
}

impl WeakRegistry {
    /// Upgrade to a full handle if the registry is still alive
    ///
    /// The upgraded handle keeps the bootstrap profile, so its
    /// [`reset`](Registry::reset) rebuilds the same tables.
    pub fn upgrade(&self) -> Option<Registry> {
        let tables = self.tables.upgrade()?;
        Some(Registry {
            tables,
            profile: self.profile.as_ref().and_then(Weak::upgrade),
        })
    }

    /// Required resolve through the weak handle
    ///
    /// # Panics
    ///
    /// When the registry is gone or `C` cannot be resolved.
    pub fn resolve<C>(&self) -> Arc<C>
    where
        C: ?Sized + Send + Sync + 'static,
    {
        match self.upgrade() {
            Some(registry) => registry.resolve::<C>(),
            None => {
                let capability = CapabilityId::of::<C>();
                error!(capability = capability.name(), "Registry dropped during resolution");
                panic!("registry dropped while resolving capability `{capability}`");
            }
        }
    }
}

impl fmt::Debug for WeakRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakRegistry")
            .field("alive", &(self.tables.strong_count() > 0))
            .finish()
    }
}

fn fatal(error: &RegistryError) -> ! {
    error!(capability = error.capability().name(), "{error}");
    panic!("{error}");
}
