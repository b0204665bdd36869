//! Service Locator
//!
//! Named accessors for the well-known capabilities, so call sites read
//! `locator.haptics()` instead of `registry.resolve::<dyn HapticFeedback>()`.
//! The locator holds nothing but a registry handle; every accessor delegates
//! to the required resolve and inherits the registry's override semantics.

use std::sync::Arc;

use apus_domain::ports::{
    BarcodeDetector, CameraManager, ContourDetector, DetectionResultsStore, ErrorReporter,
    HapticFeedback, ImageClassifier, ObjectDetector, PermissionService, PhotoLibraryService,
    TextRecognizer, UnifiedObjectDetector,
};
use apus_domain::value_objects::AppSettings;

use super::registry::Registry;
use crate::config::AppConfig;

/// Service locator for application capabilities
#[derive(Debug, Clone)]
pub struct ServiceLocator {
    registry: Registry,
}

impl ServiceLocator {
    /// Locator over an explicit registry
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Locator over the process-wide registry
    pub fn shared() -> Self {
        Self::new(Registry::shared().clone())
    }

    /// The registry behind this locator
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // ========================================================================
    // Camera and vision
    // ========================================================================

    pub fn camera_manager(&self) -> Arc<dyn CameraManager> {
        self.registry.resolve()
    }

    pub fn object_detector(&self) -> Arc<dyn ObjectDetector> {
        self.registry.resolve()
    }

    pub fn image_classifier(&self) -> Arc<dyn ImageClassifier> {
        self.registry.resolve()
    }

    pub fn contour_detector(&self) -> Arc<dyn ContourDetector> {
        self.registry.resolve()
    }

    pub fn text_recognizer(&self) -> Arc<dyn TextRecognizer> {
        self.registry.resolve()
    }

    pub fn unified_object_detector(&self) -> Arc<dyn UnifiedObjectDetector> {
        self.registry.resolve()
    }

    pub fn barcode_detector(&self) -> Arc<dyn BarcodeDetector> {
        self.registry.resolve()
    }

    pub fn haptics(&self) -> Arc<dyn HapticFeedback> {
        self.registry.resolve()
    }

    // ========================================================================
    // Services
    // ========================================================================

    pub fn permission_service(&self) -> Arc<dyn PermissionService> {
        self.registry.resolve()
    }

    pub fn photo_library(&self) -> Arc<dyn PhotoLibraryService> {
        self.registry.resolve()
    }

    pub fn error_reporter(&self) -> Arc<dyn ErrorReporter> {
        self.registry.resolve()
    }

    /// History of saved detection results, shared by every caller
    pub fn detection_results(&self) -> Arc<dyn DetectionResultsStore> {
        self.registry.resolve()
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    pub fn settings(&self) -> Arc<AppSettings> {
        self.registry.resolve()
    }

    pub fn config(&self) -> Arc<AppConfig> {
        self.registry.resolve()
    }
}
