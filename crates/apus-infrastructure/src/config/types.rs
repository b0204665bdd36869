//! Configuration types

use std::collections::HashMap;
use std::path::PathBuf;

use apus_domain::constants::{
    DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_MAX_RESULTS_PER_CATEGORY,
    DEFAULT_MAX_ZOOM_FACTOR,
};
use apus_domain::value_objects::DetectionFramework;
use apus_domain::value_objects::{PermissionKind, PermissionStatus};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, PHOTO_LIBRARY_DIR_NAME};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub camera: CameraConfig,
    pub permissions: PermissionsConfig,
    pub photo_library: PhotoLibraryConfig,
    pub detection: DetectionConfig,
    pub settings: SettingsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Capture session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Largest zoom factor the device supports
    pub max_zoom: f32,

    /// Width of delivered frames in pixels
    pub frame_width: u32,

    /// Height of delivered frames in pixels
    pub frame_height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            max_zoom: DEFAULT_MAX_ZOOM_FACTOR,
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

/// Permission policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionsConfig {
    /// Grant undetermined permissions when they are requested
    pub auto_grant: bool,

    /// Statuses known before anything is requested
    pub initial: HashMap<PermissionKind, PermissionStatus>,
}

/// Photo library storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoLibraryConfig {
    /// Directory saved photos are written to
    pub directory: PathBuf,
}

impl Default for PhotoLibraryConfig {
    fn default() -> Self {
        let base = dirs::picture_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            directory: base.join(PHOTO_LIBRARY_DIR_NAME),
        }
    }
}

/// Still-image detection and result history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Backend used by the unified object detector
    pub framework: DetectionFramework,

    /// Stored results kept per category
    pub max_results_per_category: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            framework: DetectionFramework::default(),
            max_results_per_category: DEFAULT_MAX_RESULTS_PER_CATEGORY,
        }
    }
}

/// Initial values of user settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    pub object_detection_enabled: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            object_detection_enabled: true,
        }
    }
}
