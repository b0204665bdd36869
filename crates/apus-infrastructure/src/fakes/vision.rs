//! Fake vision capabilities

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use apus_domain::error::Result;
use apus_domain::ports::{
    BarcodeDetector, ContourDetector, ImageClassifier, ObjectDetector, TextRecognizer,
    UnifiedObjectDetector,
};
use apus_domain::value_objects::{
    AppError, Barcode, ClassificationResult, DetectedContour, DetectedObject, DetectedText,
    Detection, DetectionFramework, Image,
};

use super::lock;

/// Object detector returning primed detections and counting frames
#[derive(Debug, Default)]
pub struct FakeObjectDetector {
    detections: Mutex<Vec<Detection>>,
    frames: Mutex<Vec<Image>>,
}

impl FakeObjectDetector {
    pub fn set_detections(&self, detections: Vec<Detection>) {
        *lock(&self.detections) = detections;
    }

    /// Frames passed to `process_frame`, in order
    pub fn processed_frames(&self) -> Vec<Image> {
        lock(&self.frames).clone()
    }
}

impl ObjectDetector for FakeObjectDetector {
    fn detections(&self) -> Vec<Detection> {
        lock(&self.detections).clone()
    }

    fn process_frame(&self, frame: &Image) {
        lock(&self.frames).push(frame.clone());
    }
}

#[derive(Debug)]
struct Primed<T> {
    results: Vec<T>,
    failure: Option<AppError>,
    calls: usize,
}

impl<T> Default for Primed<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            failure: None,
            calls: 0,
        }
    }
}

impl<T: Clone> Primed<T> {
    fn answer(&mut self) -> Result<Vec<T>> {
        self.calls += 1;
        match &self.failure {
            Some(error) => Err(error.clone().into()),
            None => Ok(self.results.clone()),
        }
    }
}

/// Image classifier answering with primed labels
#[derive(Debug, Default)]
pub struct FakeImageClassifier {
    primed: Mutex<Primed<ClassificationResult>>,
    last: Mutex<Vec<ClassificationResult>>,
}

impl FakeImageClassifier {
    pub fn set_results(&self, results: Vec<ClassificationResult>) {
        lock(&self.primed).results = results;
    }

    /// Make every following `classify` fail with `error`
    pub fn fail_with(&self, error: Option<AppError>) {
        lock(&self.primed).failure = error;
    }

    pub fn classify_count(&self) -> usize {
        lock(&self.primed).calls
    }
}

impl ImageClassifier for FakeImageClassifier {
    fn is_classifying(&self) -> bool {
        false
    }

    fn last_results(&self) -> Vec<ClassificationResult> {
        lock(&self.last).clone()
    }

    fn classify(&self, _image: &Image) -> Result<Vec<ClassificationResult>> {
        let results = lock(&self.primed).answer()?;
        lock(&self.last).clone_from(&results);
        Ok(results)
    }
}

/// Contour detector answering with primed contours
#[derive(Debug, Default)]
pub struct FakeContourDetector {
    primed: Mutex<Primed<DetectedContour>>,
    last: Mutex<Vec<DetectedContour>>,
}

impl FakeContourDetector {
    pub fn set_contours(&self, contours: Vec<DetectedContour>) {
        lock(&self.primed).results = contours;
    }

    pub fn fail_with(&self, error: Option<AppError>) {
        lock(&self.primed).failure = error;
    }

    pub fn detect_count(&self) -> usize {
        lock(&self.primed).calls
    }
}

impl ContourDetector for FakeContourDetector {
    fn is_detecting(&self) -> bool {
        false
    }

    fn last_contours(&self) -> Vec<DetectedContour> {
        lock(&self.last).clone()
    }

    fn detect_contours(&self, _image: &Image) -> Result<Vec<DetectedContour>> {
        let contours = lock(&self.primed).answer()?;
        lock(&self.last).clone_from(&contours);
        Ok(contours)
    }
}

/// Text recognizer answering with primed text
#[derive(Debug, Default)]
pub struct FakeTextRecognizer {
    primed: Mutex<Primed<DetectedText>>,
}

impl FakeTextRecognizer {
    pub fn set_texts(&self, texts: Vec<DetectedText>) {
        lock(&self.primed).results = texts;
    }

    pub fn fail_with(&self, error: Option<AppError>) {
        lock(&self.primed).failure = error;
    }

    pub fn recognize_count(&self) -> usize {
        lock(&self.primed).calls
    }
}

impl TextRecognizer for FakeTextRecognizer {
    fn detect_text(&self, _image: &Image) -> Result<Vec<DetectedText>> {
        lock(&self.primed).answer()
    }
}

/// Unified detector answering with primed objects
#[derive(Debug, Default)]
pub struct FakeUnifiedObjectDetector {
    framework: Mutex<DetectionFramework>,
    primed: Mutex<Primed<DetectedObject>>,
    last: Mutex<Vec<DetectedObject>>,
    preloads: AtomicUsize,
}

impl FakeUnifiedObjectDetector {
    pub fn set_framework(&self, framework: DetectionFramework) {
        *lock(&self.framework) = framework;
    }

    pub fn set_objects(&self, objects: Vec<DetectedObject>) {
        lock(&self.primed).results = objects;
    }

    pub fn fail_with(&self, error: Option<AppError>) {
        lock(&self.primed).failure = error;
    }

    pub fn detect_count(&self) -> usize {
        lock(&self.primed).calls
    }

    pub fn preload_count(&self) -> usize {
        self.preloads.load(Ordering::Relaxed)
    }
}

impl UnifiedObjectDetector for FakeUnifiedObjectDetector {
    fn framework(&self) -> DetectionFramework {
        *lock(&self.framework)
    }

    fn is_detecting(&self) -> bool {
        false
    }

    fn last_detected_objects(&self) -> Vec<DetectedObject> {
        lock(&self.last).clone()
    }

    fn detect_objects(&self, _image: &Image) -> Result<Vec<DetectedObject>> {
        let objects = lock(&self.primed).answer()?;
        lock(&self.last).clone_from(&objects);
        Ok(objects)
    }

    fn preload(&self) {
        self.preloads.fetch_add(1, Ordering::Relaxed);
    }
}

/// Barcode detector answering with primed barcodes
#[derive(Debug, Default)]
pub struct FakeBarcodeDetector {
    barcodes: Mutex<Vec<Barcode>>,
    images: Mutex<Vec<Image>>,
}

impl FakeBarcodeDetector {
    pub fn set_barcodes(&self, barcodes: Vec<Barcode>) {
        *lock(&self.barcodes) = barcodes;
    }

    /// Images passed to `detect_barcodes`, in order
    pub fn scanned_images(&self) -> Vec<Image> {
        lock(&self.images).clone()
    }
}

impl BarcodeDetector for FakeBarcodeDetector {
    fn detect_barcodes(&self, image: &Image) -> Vec<Barcode> {
        lock(&self.images).push(image.clone());
        lock(&self.barcodes).clone()
    }
}
