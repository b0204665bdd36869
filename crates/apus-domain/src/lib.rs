//! # Domain Layer
//!
//! Capability ports and the value types they exchange. Nothing in this
//! crate knows how a capability is provided or resolved.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports`] | Capability traits (camera, vision, haptics, permissions, photos, results, errors) |
//! | [`value_objects`] | Images, geometry, detections, stored results, permissions, app errors |
//! | [`error`] | Domain error type and `Result` alias |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
