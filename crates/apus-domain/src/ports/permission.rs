//! Permission Port

use crate::value_objects::{PermissionKind, PermissionStatus};

/// Access to platform permissions
pub trait PermissionService: Send + Sync {
    /// Ask for a permission and return the resulting status
    fn request_permission(&self, kind: PermissionKind) -> PermissionStatus;

    fn permission_status(&self, kind: PermissionKind) -> PermissionStatus;

    fn open_app_settings(&self);
}
