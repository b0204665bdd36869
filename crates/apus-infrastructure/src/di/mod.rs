//! Capability Registry - Service Locator Architecture
//!
//! Decouples consumers of a capability from the implementation that
//! provides it, and lets tests swap in fakes without touching consumers.
//!
//! ## Architecture Overview
//!
//! ```text
//! Profile (production | test)
//!     │ register_factory / register_instance
//!     ▼
//! Registry ── instances ──┐
//!          └─ factories ──┴─ resolve::<dyn Capability>()
//!     ▲                                  ▲
//!     │                                  │
//! ServiceLocator (named accessors)   Injected<C> / OptionalInjected<C>
//! ```
//!
//! ## Key Principles
//!
//! - **Trait-keyed**: capabilities are resolved as `Arc<dyn Trait>` by type identity
//! - **Two lifetimes**: pinned instances shadow factories; factories run on every resolve
//! - **Fail fast**: a missing required capability is a wiring defect and panics
//! - **Profiles never merge**: switching profiles always starts from empty tables

pub mod bootstrap;
pub mod error;
pub mod identity;
pub mod inject;
pub mod locator;
pub mod registry;

pub use bootstrap::{Fakes, ProductionProfile, Profile, TestProfile, init_registry};
pub use error::RegistryError;
pub use identity::CapabilityId;
pub use inject::{Injected, OptionalInjected};
pub use locator::ServiceLocator;
pub use registry::{Registry, WeakRegistry};
