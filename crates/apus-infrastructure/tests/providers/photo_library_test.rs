//! Directory Photo Library Tests

use std::sync::Arc;

use apus_domain::ports::{PermissionService, PhotoLibraryService};
use apus_domain::value_objects::{Image, PermissionKind, PermissionStatus, PhotoLibraryError};
use apus_infrastructure::fakes::FakePermissionService;
use apus_infrastructure::providers::DirectoryPhotoLibrary;
use tempfile::TempDir;

fn library(status: PermissionStatus) -> (DirectoryPhotoLibrary, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let permissions = Arc::new(FakePermissionService::default());
    permissions.set_status(PermissionKind::PhotoLibrary, status);
    let library = DirectoryPhotoLibrary::new(temp_dir.path().join("Apus"), permissions);
    (library, temp_dir)
}

#[test]
fn test_saves_distinct_files() {
    let (library, _dir) = library(PermissionStatus::Authorized);
    let image = Image::new(1, 1, vec![9_u8]);

    let first = library.save_image(&image).unwrap();
    let second = library.save_image(&image).unwrap();

    assert_ne!(first, second);
    assert_eq!(first.extension().and_then(|e| e.to_str()), Some("raw"));
    assert!(
        first
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("IMG_"))
    );
}

#[test]
fn test_denied_permission_refuses_save() {
    let (library, _dir) = library(PermissionStatus::Denied);

    assert_eq!(
        library.save_image(&Image::blank(1, 1)),
        Err(PhotoLibraryError::PermissionDenied)
    );
    assert_eq!(library.permission_status(), PermissionStatus::Denied);
}

#[test]
fn test_unwritable_directory_reports_save_failure() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("file");
    std::fs::write(&blocker, b"x").unwrap();

    let permissions = Arc::new(FakePermissionService::default());
    permissions.request_permission(PermissionKind::PhotoLibrary);
    let library = DirectoryPhotoLibrary::new(blocker.join("nested"), permissions);

    assert!(matches!(
        library.save_image(&Image::blank(1, 1)),
        Err(PhotoLibraryError::SaveFailed(_))
    ));
}
