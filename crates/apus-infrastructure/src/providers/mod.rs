//! Production Capability Providers
//!
//! In-process implementations registered by the production profile.
//!
//! ## Available Providers
//!
//! | Capability | Provider | Backing state |
//! |------------|----------|---------------|
//! | `CameraManager` | [`SessionCameraManager`] | [`CaptureDevice`] |
//! | `ObjectDetector` | [`NullObjectDetector`] | none |
//! | `ImageClassifier` | [`CatalogImageClassifier`] | per value |
//! | `ContourDetector` | [`NullContourDetector`] | none |
//! | `TextRecognizer` | [`NullTextRecognizer`] | none |
//! | `UnifiedObjectDetector` | [`CatalogObjectDetector`] | per value |
//! | `BarcodeDetector` | [`NullBarcodeDetector`] | none |
//! | `HapticFeedback` | [`TracingHaptics`] | none |
//! | `PermissionService` | [`PolicyPermissionService`] | [`GrantTable`] |
//! | `PhotoLibraryService` | [`DirectoryPhotoLibrary`] | filesystem |
//! | `ErrorReporter` | [`PresentingErrorReporter`] | [`ErrorSlot`] |
//! | `DetectionResultsStore` | [`InMemoryDetectionResults`] | singleton |
//!
//! The vision providers are null providers: the algorithms belong to the
//! platform, and a host without one still gets a working graph.

pub mod camera;
pub mod errors;
pub mod haptics;
pub mod permission;
pub mod photo_library;
pub mod results;
pub mod vision;

pub use camera::{CaptureDevice, SessionCameraManager};
pub use errors::{ErrorSlot, PresentingErrorReporter};
pub use haptics::TracingHaptics;
pub use permission::{GrantTable, PolicyPermissionService};
pub use photo_library::DirectoryPhotoLibrary;
pub use results::InMemoryDetectionResults;
pub use vision::{
    CatalogImageClassifier, CatalogObjectDetector, NullBarcodeDetector, NullContourDetector,
    NullObjectDetector, NullTextRecognizer, image_fingerprint,
};
