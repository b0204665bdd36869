//! Vision Ports
//!
//! Object detection, classification, contour and text recognition. The
//! algorithms behind them are provided by the platform.

use crate::error::Result;
use crate::value_objects::{
    Barcode, ClassificationResult, DetectedContour, DetectedObject, DetectedText, Detection,
    DetectionFramework, Image,
};

/// Live object detection fed with camera frames
pub trait ObjectDetector: Send + Sync {
    /// Detections from the most recently processed frame
    fn detections(&self) -> Vec<Detection>;

    fn process_frame(&self, frame: &Image);
}

/// Whole-image classification
pub trait ImageClassifier: Send + Sync {
    fn is_classifying(&self) -> bool;

    fn last_results(&self) -> Vec<ClassificationResult>;

    fn classify(&self, image: &Image) -> Result<Vec<ClassificationResult>>;
}

/// Contour detection on still images
pub trait ContourDetector: Send + Sync {
    fn is_detecting(&self) -> bool;

    fn last_contours(&self) -> Vec<DetectedContour>;

    fn detect_contours(&self, image: &Image) -> Result<Vec<DetectedContour>>;
}

/// Text recognition on still images
pub trait TextRecognizer: Send + Sync {
    fn detect_text(&self, image: &Image) -> Result<Vec<DetectedText>>;
}

/// Still-image object detection, independent of the backing framework
pub trait UnifiedObjectDetector: Send + Sync {
    fn framework(&self) -> DetectionFramework;

    fn is_detecting(&self) -> bool;

    /// Objects from the most recent successful detection
    fn last_detected_objects(&self) -> Vec<DetectedObject>;

    fn detect_objects(&self, image: &Image) -> Result<Vec<DetectedObject>>;

    /// Load models ahead of the first detection. Most backends need nothing.
    fn preload(&self) {}
}

/// Barcode and QR code detection on still images
///
/// Failures yield no barcodes rather than an error.
pub trait BarcodeDetector: Send + Sync {
    fn detect_barcodes(&self, image: &Image) -> Vec<Barcode>;
}
