//! Registry resolution errors

use thiserror::Error;

use super::identity::CapabilityId;

/// Why a capability could not be resolved
///
/// Both variants are wiring defects. [`Registry::resolve`](super::Registry::resolve)
/// turns them into a panic; [`Registry::try_resolve`](super::Registry::try_resolve)
/// hands them back for callers that want to report them differently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Neither an instance nor a factory is registered
    #[error("capability `{capability}` is not registered")]
    NotRegistered {
        /// The capability that was requested
        capability: CapabilityId,
    },

    /// The stored entry does not hold a value of the requested capability type
    #[error("capability `{capability}` is registered with a value of a different type")]
    TypeMismatch {
        /// The capability that was requested
        capability: CapabilityId,
    },
}

impl RegistryError {
    /// The capability the failed request was for
    pub fn capability(&self) -> CapabilityId {
        match self {
            Self::NotRegistered { capability } | Self::TypeMismatch { capability } => *capability,
        }
    }
}
