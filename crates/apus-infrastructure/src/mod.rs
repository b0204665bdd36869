//! # Infrastructure Layer
//!
//! The capability registry and everything it wires together.
//!
//! ## Module Categories
//!
//! ### Registry
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Type-keyed capability registry, injection accessors, locator, profiles |
//!
//! ### Providers
//! | Module | Description |
//! |--------|-------------|
//! | [`providers`] | Production capability implementations |
//! | [`fakes`] | Recording test doubles used by the test profile |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML + environment configuration |
//! | [`constants`] | File names, env prefixes and defaults |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod fakes;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use di::{Injected, OptionalInjected, Registry, ServiceLocator};
pub use error_ext::ErrorContext;
