//! Configuration
//!
//! Layered TOML + environment configuration loaded with Figment.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
