//! Capability Identity
//!
//! The key a capability is registered and resolved under. Derived from the
//! capability's type, so every call site asking for `dyn CameraManager`
//! lands on the same entry.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable key for a capability type
///
/// Equality and hashing use only the [`TypeId`]; the type name is carried
/// along for diagnostics.
#[derive(Clone, Copy)]
pub struct CapabilityId {
    type_id: TypeId,
    name: &'static str,
}

impl CapabilityId {
    /// Identity of capability `C`, usually a trait object such as `dyn HapticFeedback`
    pub fn of<C: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: type_name::<C>(),
        }
    }

    /// Fully qualified type name of the capability
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Key used for equality and hashing
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

impl PartialEq for CapabilityId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for CapabilityId {}

impl Hash for CapabilityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CapabilityId").field(&self.name).finish()
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
