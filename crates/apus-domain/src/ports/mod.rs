//! Capability Ports
//!
//! Each trait is a capability the registry can resolve as `Arc<dyn Trait>`.
//! Implementations live in the infrastructure crate; consumers only see
//! these interfaces.

pub mod camera;
pub mod errors;
pub mod haptics;
pub mod permission;
pub mod photo_library;
pub mod results;
pub mod vision;

pub use camera::{CameraManager, FrameHandler};
pub use errors::ErrorReporter;
pub use haptics::HapticFeedback;
pub use permission::PermissionService;
pub use photo_library::PhotoLibraryService;
pub use results::DetectionResultsStore;
pub use vision::{
    BarcodeDetector, ContourDetector, ImageClassifier, ObjectDetector, TextRecognizer,
    UnifiedObjectDetector,
};
