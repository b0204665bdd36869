//! User-adjustable application settings

use std::sync::atomic::{AtomicBool, Ordering};

/// Shared application settings
///
/// Registered as a singleton instance so every consumer observes the same
/// toggles.
#[derive(Debug)]
pub struct AppSettings {
    object_detection_enabled: AtomicBool,
    default_object_detection: bool,
}

impl AppSettings {
    pub fn new(object_detection_enabled: bool) -> Self {
        Self {
            object_detection_enabled: AtomicBool::new(object_detection_enabled),
            default_object_detection: object_detection_enabled,
        }
    }

    pub fn is_object_detection_enabled(&self) -> bool {
        self.object_detection_enabled.load(Ordering::Acquire)
    }

    pub fn set_object_detection_enabled(&self, enabled: bool) {
        self.object_detection_enabled
            .store(enabled, Ordering::Release);
    }

    pub fn reset_to_defaults(&self) {
        self.set_object_detection_enabled(self.default_object_detection);
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::new(true)
    }
}
