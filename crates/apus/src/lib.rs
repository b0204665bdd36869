//! # Apus
//!
//! Camera capture and on-device vision, with every platform capability
//! resolved through a type-keyed registry.
//!
//! ## Example
//!
//! ```ignore
//! use apus::infrastructure::config::ConfigLoader;
//! use apus::infrastructure::di::init_registry;
//! use apus::CameraController;
//!
//! let (registry, device) = init_registry(ConfigLoader::new().load()?);
//! let controller = CameraController::new(&registry);
//! controller.start();
//! ```
//!
//! ## Architecture
//!
//! - `domain` - capability ports and value types
//! - `infrastructure` - registry, providers, fakes, config and logging
//! - `camera` - the camera screen's controller, a registry consumer

/// Domain layer - capability ports and value types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use apus_domain::*;
}

/// Infrastructure layer - registry, config and providers
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use apus_infrastructure::*;
}

pub mod camera;

pub use camera::CameraController;
pub use infrastructure::{Injected, OptionalInjected, Registry, ServiceLocator};
