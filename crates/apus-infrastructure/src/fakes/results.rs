//! Fake detection results store

use std::sync::Mutex;

use apus_domain::ports::DetectionResultsStore;
use apus_domain::value_objects::{
    ClassificationResult, DetectedObject, DetectedText, DetectionCategory, Image,
    StoredClassificationResult, StoredObjectDetectionResult, StoredOcrResult,
};
use uuid::Uuid;

use super::lock;
use crate::providers::InMemoryDetectionResults;

/// Results store that keeps results in memory and records every mutation
#[derive(Debug, Default)]
pub struct FakeDetectionResults {
    store: InMemoryDetectionResults,
    saved: Mutex<Vec<DetectionCategory>>,
    cleared: Mutex<Vec<DetectionCategory>>,
}

impl FakeDetectionResults {
    /// Categories saved into, in order
    pub fn saved(&self) -> Vec<DetectionCategory> {
        lock(&self.saved).clone()
    }

    /// Categories cleared, in order
    pub fn cleared(&self) -> Vec<DetectionCategory> {
        lock(&self.cleared).clone()
    }
}

impl DetectionResultsStore for FakeDetectionResults {
    fn save_ocr_result(&self, texts: Vec<DetectedText>, image: &Image) -> Uuid {
        lock(&self.saved).push(DetectionCategory::Ocr);
        self.store.save_ocr_result(texts, image)
    }

    fn save_object_detection_result(&self, objects: Vec<DetectedObject>, image: &Image) -> Uuid {
        lock(&self.saved).push(DetectionCategory::ObjectDetection);
        self.store.save_object_detection_result(objects, image)
    }

    fn save_classification_result(
        &self,
        results: Vec<ClassificationResult>,
        image: &Image,
    ) -> Uuid {
        lock(&self.saved).push(DetectionCategory::Classification);
        self.store.save_classification_result(results, image)
    }

    fn ocr_results(&self) -> Vec<StoredOcrResult> {
        self.store.ocr_results()
    }

    fn object_detection_results(&self) -> Vec<StoredObjectDetectionResult> {
        self.store.object_detection_results()
    }

    fn classification_results(&self) -> Vec<StoredClassificationResult> {
        self.store.classification_results()
    }

    fn delete_result(&self, category: DetectionCategory, id: Uuid) -> bool {
        self.store.delete_result(category, id)
    }

    fn clear(&self, category: DetectionCategory) {
        lock(&self.cleared).push(category);
        self.store.clear(category);
    }

    fn results_count(&self, category: DetectionCategory) -> usize {
        self.store.results_count(category)
    }
}
