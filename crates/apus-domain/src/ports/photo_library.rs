//! Photo Library Port

use std::path::PathBuf;

use crate::value_objects::{Image, PermissionStatus, PhotoLibraryError};

/// Persistent photo storage
pub trait PhotoLibraryService: Send + Sync {
    /// Ask for add-only access; `true` when granted
    fn request_permission(&self) -> bool;

    /// Store an image, returning where it was written
    fn save_image(&self, image: &Image) -> Result<PathBuf, PhotoLibraryError>;

    fn permission_status(&self) -> PermissionStatus;
}
