//! Registry Bootstrap - Production and Test Profiles
//!
//! A profile is a complete set of registrations. Exactly one is active at a
//! time: applying a profile always starts from empty tables, so production
//! bindings never leak into a test run.
//!
//! ```text
//! AppConfig → ProductionProfile ─┐
//!                                 ├─ register(&Registry) → instances + factories
//! Fakes     → TestProfile ───────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Production: built once at startup, re-run by `reset`
//! let (registry, device) = init_registry(config);
//!
//! // Tests: swap everything for recording fakes
//! let profile = TestProfile::default();
//! registry.apply_profile(&profile);
//! assert!(profile.fakes().haptics.events().is_empty());
//! ```

use std::sync::Arc;

use apus_domain::ports::{
    BarcodeDetector, CameraManager, ContourDetector, DetectionResultsStore, ErrorReporter,
    HapticFeedback, ImageClassifier, ObjectDetector, PermissionService, PhotoLibraryService,
    TextRecognizer, UnifiedObjectDetector,
};
use apus_domain::value_objects::AppSettings;
use tracing::info;

use super::registry::Registry;
use crate::config::AppConfig;
use crate::fakes::{
    FakeBarcodeDetector, FakeCameraManager, FakeContourDetector, FakeDetectionResults,
    FakeErrorReporter, FakeHaptics, FakeImageClassifier, FakeObjectDetector,
    FakePermissionService, FakePhotoLibrary, FakeTextRecognizer, FakeUnifiedObjectDetector,
};
use crate::providers::{
    CaptureDevice, CatalogImageClassifier, CatalogObjectDetector, DirectoryPhotoLibrary,
    ErrorSlot, GrantTable, InMemoryDetectionResults, NullBarcodeDetector, NullContourDetector,
    NullObjectDetector, NullTextRecognizer, PolicyPermissionService, PresentingErrorReporter,
    SessionCameraManager, TracingHaptics,
};

/// A complete set of registrations
pub trait Profile: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Register every capability of the profile into `registry`
    ///
    /// Callers clear the registry first; implementations only add.
    fn register(&self, registry: &Registry);
}

// ============================================================================
// Production Profile
// ============================================================================

/// Production capability providers, registered as factories
///
/// Configuration, settings and the detection results history are pinned as
/// instances. Providers fronting
/// process-unique platform state (the permission grants, the presented
/// error) get fresh values per resolve that share one backing store created
/// when the profile is registered.
///
/// The capture device outlives registrations: the host feeds frames into it
/// through [`capture_device`](Self::capture_device), and registering powers
/// it off instead of replacing it.
#[derive(Debug, Clone)]
pub struct ProductionProfile {
    config: Arc<AppConfig>,
    device: Arc<CaptureDevice>,
}

impl ProductionProfile {
    pub fn new(config: AppConfig) -> Self {
        let device = Arc::new(CaptureDevice::new(&config.camera));
        Self {
            config: Arc::new(config),
            device,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn capture_device(&self) -> Arc<CaptureDevice> {
        Arc::clone(&self.device)
    }
}

impl Default for ProductionProfile {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Profile for ProductionProfile {
    fn name(&self) -> &'static str {
        "production"
    }

    fn register(&self, registry: &Registry) {
        let config = Arc::clone(&self.config);

        registry.register_instance::<AppConfig>(Arc::clone(&config));
        registry.register_instance::<AppSettings>(Arc::new(AppSettings::new(
            config.settings.object_detection_enabled,
        )));
        registry.register_instance::<dyn DetectionResultsStore>(Arc::new(
            InMemoryDetectionResults::new(config.detection.max_results_per_category),
        ));

        // Camera and vision
        self.device.power_off();
        let device = Arc::clone(&self.device);
        registry.register_factory::<dyn CameraManager, _>(move || {
            Arc::new(SessionCameraManager::new(Arc::clone(&device)))
        });
        registry.register_factory::<dyn ObjectDetector, _>(|| Arc::new(NullObjectDetector));
        registry
            .register_factory::<dyn ImageClassifier, _>(|| Arc::new(CatalogImageClassifier::new()));
        registry.register_factory::<dyn ContourDetector, _>(|| Arc::new(NullContourDetector));
        registry.register_factory::<dyn TextRecognizer, _>(|| Arc::new(NullTextRecognizer));
        let framework = config.detection.framework;
        registry.register_factory::<dyn UnifiedObjectDetector, _>(move || {
            Arc::new(CatalogObjectDetector::new(framework))
        });
        registry.register_factory::<dyn BarcodeDetector, _>(|| Arc::new(NullBarcodeDetector));
        registry.register_factory::<dyn HapticFeedback, _>(|| Arc::new(TracingHaptics));

        // Services
        let grants = Arc::new(GrantTable::from_config(&config.permissions));
        registry.register_factory::<dyn PermissionService, _>(move || {
            Arc::new(PolicyPermissionService::new(Arc::clone(&grants)))
        });

        let weak = registry.downgrade();
        let directory = config.photo_library.directory.clone();
        registry.register_factory::<dyn PhotoLibraryService, _>(move || {
            let permissions = weak.resolve::<dyn PermissionService>();
            Arc::new(DirectoryPhotoLibrary::new(directory.clone(), permissions))
        });

        let weak = registry.downgrade();
        let slot = Arc::new(ErrorSlot::default());
        registry.register_factory::<dyn ErrorReporter, _>(move || {
            let permissions = weak.resolve::<dyn PermissionService>();
            Arc::new(PresentingErrorReporter::new(Arc::clone(&slot), permissions))
        });

        info!(
            instances = registry.instance_count(),
            factories = registry.factory_count(),
            "Production profile registered"
        );
    }
}

// ============================================================================
// Test Profile
// ============================================================================

/// Recording fakes for every well-known capability
///
/// The same `Arc`s are registered as instances, so tests can inspect what
/// consumers did through these handles.
#[derive(Debug, Clone, Default)]
pub struct Fakes {
    pub camera: Arc<FakeCameraManager>,
    pub object_detector: Arc<FakeObjectDetector>,
    pub image_classifier: Arc<FakeImageClassifier>,
    pub contour_detector: Arc<FakeContourDetector>,
    pub text_recognizer: Arc<FakeTextRecognizer>,
    pub unified_detector: Arc<FakeUnifiedObjectDetector>,
    pub barcode_detector: Arc<FakeBarcodeDetector>,
    pub detection_results: Arc<FakeDetectionResults>,
    pub haptics: Arc<FakeHaptics>,
    pub permissions: Arc<FakePermissionService>,
    pub photo_library: Arc<FakePhotoLibrary>,
    pub error_reporter: Arc<FakeErrorReporter>,
    pub settings: Arc<AppSettings>,
}

/// Fakes registered as singleton instances
#[derive(Debug, Clone, Default)]
pub struct TestProfile {
    fakes: Fakes,
}

impl TestProfile {
    pub fn new(fakes: Fakes) -> Self {
        Self { fakes }
    }

    pub fn fakes(&self) -> &Fakes {
        &self.fakes
    }
}

impl Profile for TestProfile {
    fn name(&self) -> &'static str {
        "test"
    }

    fn register(&self, registry: &Registry) {
        let fakes = &self.fakes;
        registry.register_instance::<AppConfig>(Arc::new(AppConfig::default()));
        registry.register_instance::<AppSettings>(Arc::clone(&fakes.settings));
        registry.register_instance::<dyn CameraManager>(fakes.camera.clone());
        registry.register_instance::<dyn ObjectDetector>(fakes.object_detector.clone());
        registry.register_instance::<dyn ImageClassifier>(fakes.image_classifier.clone());
        registry.register_instance::<dyn ContourDetector>(fakes.contour_detector.clone());
        registry.register_instance::<dyn TextRecognizer>(fakes.text_recognizer.clone());
        registry.register_instance::<dyn UnifiedObjectDetector>(fakes.unified_detector.clone());
        registry.register_instance::<dyn BarcodeDetector>(fakes.barcode_detector.clone());
        registry
            .register_instance::<dyn DetectionResultsStore>(fakes.detection_results.clone());
        registry.register_instance::<dyn HapticFeedback>(fakes.haptics.clone());
        registry.register_instance::<dyn PermissionService>(fakes.permissions.clone());
        registry.register_instance::<dyn PhotoLibraryService>(fakes.photo_library.clone());
        registry.register_instance::<dyn ErrorReporter>(fakes.error_reporter.clone());
    }
}

/// Build the application registry from configuration
///
/// The production profile runs immediately and again on every `reset`. The
/// returned device is the one every resolved `CameraManager` drives.
pub fn init_registry(config: AppConfig) -> (Registry, Arc<CaptureDevice>) {
    let profile = Arc::new(ProductionProfile::new(config));
    let device = profile.capture_device();
    let registry = Registry::with_profile(profile);
    info!(
        capabilities = registry.capabilities().len(),
        "Capability registry initialized"
    );
    (registry, device)
}
