//! Permission kinds and statuses

use serde::{Deserialize, Serialize};

/// A platform permission the app may ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionKind {
    Camera,
    PhotoLibrary,
    Microphone,
}

impl PermissionKind {
    pub const ALL: [PermissionKind; 3] = [Self::Camera, Self::PhotoLibrary, Self::Microphone];
}

/// Authorization state of a permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Authorized,
    Denied,
    #[default]
    NotDetermined,
    Restricted,
}

impl PermissionStatus {
    pub fn is_authorized(self) -> bool {
        self == Self::Authorized
    }
}
