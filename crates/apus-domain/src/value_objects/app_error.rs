//! User-facing application errors and their presentation

use thiserror::Error;

/// Errors surfaced to the user through the error reporter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(
        "Camera access is required to use this feature. Please enable camera access in Settings."
    )]
    CameraPermissionDenied,

    #[error(
        "Photo library access is required to save images. Please enable access in Settings."
    )]
    PhotoLibraryPermissionDenied,

    #[error("Failed to initialize object detection. Please restart the app.")]
    ObjectDetectionInitializationFailed,

    #[error("Failed to process the image. Please try again.")]
    ImageProcessingFailed,

    #[error("Network error: {0}")]
    Network(String),

    #[error("File system error: {0}")]
    FileSystem(String),

    #[error("An unexpected error occurred: {0}")]
    Unknown(String),
}

impl AppError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::CameraPermissionDenied | Self::PhotoLibraryPermissionDenied => {
                "Go to Settings > Privacy & Security > Camera/Photos and enable access for this app."
            }
            Self::ObjectDetectionInitializationFailed => {
                "Try restarting the app. If the problem persists, please contact support."
            }
            Self::ImageProcessingFailed => {
                "Try taking another photo or selecting a different image."
            }
            Self::Network(_) => "Check your internet connection and try again.",
            Self::FileSystem(_) => "Ensure you have enough storage space available.",
            Self::Unknown(_) => "Please try again. If the problem persists, contact support.",
        }
    }

    /// Whether the fix lives in the system settings
    pub fn should_show_settings(&self) -> bool {
        matches!(
            self,
            Self::CameraPermissionDenied | Self::PhotoLibraryPermissionDenied
        )
    }
}

/// What the UI shows for an [`AppError`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPresentation {
    pub title: String,
    pub message: String,
    pub recovery_suggestion: Option<String>,
    pub should_show_settings: bool,
    pub primary_action: String,
    pub secondary_action: Option<String>,
}

impl From<&AppError> for ErrorPresentation {
    fn from(error: &AppError) -> Self {
        let should_show_settings = error.should_show_settings();
        Self {
            title: "Error".to_string(),
            message: error.to_string(),
            recovery_suggestion: Some(error.recovery_suggestion().to_string()),
            should_show_settings,
            primary_action: if should_show_settings {
                "Open Settings"
            } else {
                "OK"
            }
            .to_string(),
            secondary_action: should_show_settings.then(|| "Cancel".to_string()),
        }
    }
}

/// Failures of the photo library capability
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhotoLibraryError {
    #[error("Photo library access denied. Please enable access in Settings.")]
    PermissionDenied,

    #[error("Failed to save photo: {0}")]
    SaveFailed(String),

    #[error("An unknown error occurred while accessing the photo library.")]
    Unknown,
}

impl From<&PhotoLibraryError> for AppError {
    fn from(error: &PhotoLibraryError) -> Self {
        match error {
            PhotoLibraryError::PermissionDenied => AppError::PhotoLibraryPermissionDenied,
            PhotoLibraryError::SaveFailed(reason) => AppError::FileSystem(reason.clone()),
            PhotoLibraryError::Unknown => {
                AppError::Unknown("Failed to access photo library".to_string())
            }
        }
    }
}
