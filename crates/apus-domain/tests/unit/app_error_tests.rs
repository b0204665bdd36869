//! AppError presentation tests

use apus_domain::value_objects::{AppError, ErrorPresentation, PhotoLibraryError};

#[test]
fn test_permission_errors_point_to_settings() {
    for error in [
        AppError::CameraPermissionDenied,
        AppError::PhotoLibraryPermissionDenied,
    ] {
        let presentation = ErrorPresentation::from(&error);
        assert!(presentation.should_show_settings);
        assert_eq!(presentation.primary_action, "Open Settings");
        assert_eq!(presentation.secondary_action.as_deref(), Some("Cancel"));
    }
}

#[test]
fn test_other_errors_only_offer_ok() {
    let presentation = ErrorPresentation::from(&AppError::Network("offline".to_string()));

    assert_eq!(presentation.title, "Error");
    assert_eq!(presentation.message, "Network error: offline");
    assert_eq!(presentation.primary_action, "OK");
    assert!(presentation.secondary_action.is_none());
    assert_eq!(
        presentation.recovery_suggestion.as_deref(),
        Some("Check your internet connection and try again.")
    );
}

#[test]
fn test_photo_library_errors_map_to_app_errors() {
    assert_eq!(
        AppError::from(&PhotoLibraryError::PermissionDenied),
        AppError::PhotoLibraryPermissionDenied
    );
    assert_eq!(
        AppError::from(&PhotoLibraryError::SaveFailed("disk full".to_string())),
        AppError::FileSystem("disk full".to_string())
    );
    assert!(matches!(
        AppError::from(&PhotoLibraryError::Unknown),
        AppError::Unknown(_)
    ));
}
