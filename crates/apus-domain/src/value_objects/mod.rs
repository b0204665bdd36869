//! Value Objects
//!
//! Plain data exchanged between capability providers and their consumers.

pub mod app_error;
pub mod detection;
pub mod feedback;
pub mod geometry;
pub mod image;
pub mod permission;
pub mod results;
pub mod settings;

pub use app_error::{AppError, ErrorPresentation, PhotoLibraryError};
pub use detection::{
    Barcode, BarcodeSymbology, ClassificationResult, ContourType, DetectedContour,
    DetectedObject, DetectedText, Detection, DetectionFramework, prioritize_barcodes,
};
pub use feedback::{ImpactStyle, NotificationKind};
pub use geometry::{Point, Rect, Size};
pub use image::Image;
pub use permission::{PermissionKind, PermissionStatus};
pub use results::{
    DetectionCategory, StoredClassificationResult, StoredObjectDetectionResult, StoredOcrResult,
    StoredResult,
};
pub use settings::AppSettings;
