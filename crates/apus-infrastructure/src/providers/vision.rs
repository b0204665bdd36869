//! Vision providers
//!
//! Null providers for detection and recognition, plus a classifier and a
//! still-image object detector that answer from fixed catalogs keyed by an
//! image fingerprint.

use std::sync::{Mutex, PoisonError};

use apus_domain::error::Result;
use apus_domain::ports::{
    BarcodeDetector, ContourDetector, ImageClassifier, ObjectDetector, TextRecognizer,
    UnifiedObjectDetector,
};
use apus_domain::value_objects::{
    AppError, Barcode, ClassificationResult, DetectedContour, DetectedObject, DetectedText,
    Detection, DetectionFramework, Image, Rect,
};
use tracing::debug;

/// Object detector that never detects anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObjectDetector;

impl ObjectDetector for NullObjectDetector {
    fn detections(&self) -> Vec<Detection> {
        Vec::new()
    }

    fn process_frame(&self, _frame: &Image) {}
}

/// Contour detector that finds no contours
#[derive(Debug, Clone, Copy, Default)]
pub struct NullContourDetector;

impl ContourDetector for NullContourDetector {
    fn is_detecting(&self) -> bool {
        false
    }

    fn last_contours(&self) -> Vec<DetectedContour> {
        Vec::new()
    }

    fn detect_contours(&self, _image: &Image) -> Result<Vec<DetectedContour>> {
        Ok(Vec::new())
    }
}

/// Text recognizer that recognizes no text
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTextRecognizer;

impl TextRecognizer for NullTextRecognizer {
    fn detect_text(&self, _image: &Image) -> Result<Vec<DetectedText>> {
        Ok(Vec::new())
    }
}

/// Barcode detector that finds no barcodes
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBarcodeDetector;

impl BarcodeDetector for NullBarcodeDetector {
    fn detect_barcodes(&self, _image: &Image) -> Vec<Barcode> {
        Vec::new()
    }
}

/// `(w*31 + h*17 + scale*100*7) % 1000`
///
/// Each term is reduced before combining, so huge or infinite scales still
/// yield a value below 1000. A NaN scale counts as 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn image_fingerprint(image: &Image) -> u64 {
    let width = u64::from(image.width()) % 1000;
    let height = u64::from(image.height()) % 1000;
    let scale = ((image.scale().max(0.0) * 100.0) as u64) % 1000;
    (width * 31 + height * 17 + scale * 7) % 1000
}

#[allow(clippy::cast_possible_truncation)]
fn catalog_index(image: &Image, len: usize) -> usize {
    (image_fingerprint(image) % len as u64) as usize
}

// ============================================================================
// Catalog classifier
// ============================================================================

const CATALOG: [[(&str, f32); 3]; 8] = [
    [("dog", 0.85), ("animal", 0.72), ("pet", 0.68)],
    [("cat", 0.91), ("feline", 0.78), ("domestic animal", 0.65)],
    [("car", 0.88), ("vehicle", 0.75), ("automobile", 0.62)],
    [("tree", 0.82), ("plant", 0.69), ("nature", 0.58)],
    [("building", 0.79), ("architecture", 0.66), ("structure", 0.54)],
    [("person", 0.93), ("human", 0.81), ("individual", 0.67)],
    [("food", 0.86), ("meal", 0.73), ("cuisine", 0.61)],
    [("flower", 0.89), ("bloom", 0.76), ("botanical", 0.63)],
];

#[derive(Debug, Default)]
struct ClassifierState {
    classifying: bool,
    last_results: Vec<ClassificationResult>,
}

/// Deterministic classifier for hosts without a vision model
///
/// The label set is chosen by a fingerprint of the image dimensions, so the
/// same image always yields the same labels.
#[derive(Debug, Default)]
pub struct CatalogImageClassifier {
    state: Mutex<ClassifierState>,
}

impl CatalogImageClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn label_set(image: &Image) -> Vec<ClassificationResult> {
        CATALOG[catalog_index(image, CATALOG.len())]
            .iter()
            .map(|(label, confidence)| ClassificationResult::new(*label, *confidence))
            .collect()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, ClassifierState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ImageClassifier for CatalogImageClassifier {
    fn is_classifying(&self) -> bool {
        self.state().classifying
    }

    fn last_results(&self) -> Vec<ClassificationResult> {
        self.state().last_results.clone()
    }

    fn classify(&self, image: &Image) -> Result<Vec<ClassificationResult>> {
        if image.is_empty() {
            return Err(AppError::ImageProcessingFailed.into());
        }

        self.state().classifying = true;
        let results = Self::label_set(image);
        debug!(
            fingerprint = image_fingerprint(image),
            top = results.first().map(|r| r.identifier.as_str()),
            "Image classified"
        );

        let mut state = self.state();
        state.classifying = false;
        state.last_results.clone_from(&results);
        Ok(results)
    }
}

// ============================================================================
// Catalog object detector
// ============================================================================

type Placement = (f32, f32, f32, f32, &'static str, f32);

const VISION_SETS: [&[Placement]; 6] = [
    &[(0.2, 0.1, 0.3, 0.7, "person", 0.92), (0.6, 0.2, 0.25, 0.6, "person", 0.87)],
    &[(0.15, 0.3, 0.5, 0.4, "dog", 0.89), (0.7, 0.6, 0.2, 0.25, "cat", 0.76)],
    &[(0.1, 0.4, 0.6, 0.35, "car", 0.94), (0.75, 0.2, 0.2, 0.3, "bicycle", 0.68)],
    &[(0.2, 0.2, 0.4, 0.4, "pizza", 0.85), (0.65, 0.15, 0.25, 0.3, "cup", 0.72)],
    &[(0.3, 0.1, 0.4, 0.5, "laptop", 0.91), (0.1, 0.7, 0.2, 0.15, "mouse", 0.74)],
    &[(0.1, 0.1, 0.25, 0.4, "person", 0.88), (0.4, 0.5, 0.3, 0.2, "chair", 0.73)],
];

const CORE_ML_SETS: [&[Placement]; 6] = [
    &[(0.23, 0.12, 0.32, 0.68, "person", 0.94), (0.61, 0.23, 0.24, 0.58, "person", 0.89)],
    &[(0.16, 0.32, 0.52, 0.42, "dog", 0.93), (0.73, 0.61, 0.19, 0.27, "cat", 0.81)],
    &[(0.11, 0.41, 0.62, 0.37, "car", 0.97), (0.76, 0.21, 0.21, 0.31, "bicycle", 0.72)],
    &[
        (0.21, 0.21, 0.42, 0.42, "pizza", 0.88),
        (0.66, 0.16, 0.26, 0.31, "cup", 0.76),
        (0.13, 0.68, 0.29, 0.24, "apple", 0.84),
    ],
    &[(0.31, 0.11, 0.42, 0.52, "laptop", 0.95), (0.11, 0.71, 0.19, 0.14, "mouse", 0.78)],
    &[
        (0.11, 0.11, 0.26, 0.41, "person", 0.91),
        (0.41, 0.51, 0.31, 0.19, "chair", 0.77),
        (0.74, 0.31, 0.19, 0.24, "bottle", 0.73),
    ],
];

#[derive(Debug, Default)]
struct DetectorState {
    detecting: bool,
    last_objects: Vec<DetectedObject>,
}

/// Deterministic still-image detector for hosts without a detection model
///
/// Each framework has its own catalog of placements; the image fingerprint
/// picks one.
#[derive(Debug, Default)]
pub struct CatalogObjectDetector {
    framework: DetectionFramework,
    state: Mutex<DetectorState>,
}

impl CatalogObjectDetector {
    pub fn new(framework: DetectionFramework) -> Self {
        Self {
            framework,
            state: Mutex::default(),
        }
    }

    fn placements(&self, image: &Image) -> Vec<DetectedObject> {
        let sets = match self.framework {
            DetectionFramework::Vision => &VISION_SETS,
            DetectionFramework::CoreMl => &CORE_ML_SETS,
        };
        sets[catalog_index(image, sets.len())]
            .iter()
            .map(|&(x, y, width, height, class_name, confidence)| {
                DetectedObject::new(
                    Rect::new(x, y, width, height),
                    class_name,
                    confidence,
                    self.framework,
                )
            })
            .collect()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, DetectorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UnifiedObjectDetector for CatalogObjectDetector {
    fn framework(&self) -> DetectionFramework {
        self.framework
    }

    fn is_detecting(&self) -> bool {
        self.state().detecting
    }

    fn last_detected_objects(&self) -> Vec<DetectedObject> {
        self.state().last_objects.clone()
    }

    fn detect_objects(&self, image: &Image) -> Result<Vec<DetectedObject>> {
        if image.is_empty() {
            return Err(AppError::ImageProcessingFailed.into());
        }

        self.state().detecting = true;
        let objects = self.placements(image);
        debug!(
            framework = self.framework.label(),
            objects = objects.len(),
            "Objects detected"
        );

        let mut state = self.state();
        state.detecting = false;
        state.last_objects.clone_from(&objects);
        Ok(objects)
    }
}
