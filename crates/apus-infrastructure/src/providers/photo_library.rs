//! Photo library provider backed by a directory

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use apus_domain::ports::{PermissionService, PhotoLibraryService};
use apus_domain::value_objects::{Image, PermissionKind, PermissionStatus, PhotoLibraryError};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::constants::PHOTO_FILE_EXTENSION;

/// Writes raw image bytes into a directory
///
/// Access is gated on the photo library permission held by the resolved
/// [`PermissionService`].
#[derive(Clone)]
pub struct DirectoryPhotoLibrary {
    directory: PathBuf,
    permissions: Arc<dyn PermissionService>,
}

impl DirectoryPhotoLibrary {
    pub fn new(directory: PathBuf, permissions: Arc<dyn PermissionService>) -> Self {
        Self {
            directory,
            permissions,
        }
    }

    pub fn directory(&self) -> &PathBuf {
        &self.directory
    }

    fn file_name() -> String {
        format!(
            "IMG_{}_{}.{PHOTO_FILE_EXTENSION}",
            Utc::now().format("%Y%m%d_%H%M%S"),
            Uuid::new_v4().simple()
        )
    }
}

impl std::fmt::Debug for DirectoryPhotoLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryPhotoLibrary")
            .field("directory", &self.directory)
            .finish_non_exhaustive()
    }
}

impl PhotoLibraryService for DirectoryPhotoLibrary {
    fn request_permission(&self) -> bool {
        self.permissions
            .request_permission(PermissionKind::PhotoLibrary)
            .is_authorized()
    }

    fn save_image(&self, image: &Image) -> Result<PathBuf, PhotoLibraryError> {
        if !self.permission_status().is_authorized() {
            warn!("Photo library save refused, permission not granted");
            return Err(PhotoLibraryError::PermissionDenied);
        }

        fs::create_dir_all(&self.directory)
            .map_err(|err| PhotoLibraryError::SaveFailed(err.to_string()))?;
        let path = self.directory.join(Self::file_name());
        fs::write(&path, image.data()).map_err(|err| PhotoLibraryError::SaveFailed(err.to_string()))?;

        info!(path = %path.display(), bytes = image.data().len(), "Image saved");
        Ok(path)
    }

    fn permission_status(&self) -> PermissionStatus {
        self.permissions
            .permission_status(PermissionKind::PhotoLibrary)
    }
}
