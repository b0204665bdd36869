//! In-memory detection results
//!
//! Keeps each category newest first and drops the oldest entries once a
//! category holds more than the configured limit.

use std::sync::{Mutex, MutexGuard, PoisonError};

use apus_domain::constants::DEFAULT_MAX_RESULTS_PER_CATEGORY;
use apus_domain::ports::DetectionResultsStore;
use apus_domain::value_objects::{
    ClassificationResult, DetectedObject, DetectedText, DetectionCategory, Image,
    StoredClassificationResult, StoredObjectDetectionResult, StoredOcrResult, StoredResult,
};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Histories {
    ocr: Vec<StoredOcrResult>,
    objects: Vec<StoredObjectDetectionResult>,
    classifications: Vec<StoredClassificationResult>,
}

/// Detection results held for the lifetime of the process
#[derive(Debug)]
pub struct InMemoryDetectionResults {
    limit: usize,
    histories: Mutex<Histories>,
}

impl InMemoryDetectionResults {
    /// Store keeping at most `limit` results per category
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            histories: Mutex::default(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn histories(&self) -> MutexGuard<'_, Histories> {
        self.histories.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push<T>(&self, history: &mut Vec<StoredResult<T>>, result: StoredResult<T>) -> Uuid {
        let id = result.id;
        history.insert(0, result);
        history.truncate(self.limit);
        id
    }
}

impl Default for InMemoryDetectionResults {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS_PER_CATEGORY)
    }
}

fn remove_by_id<T>(history: &mut Vec<StoredResult<T>>, id: Uuid) -> bool {
    match history.iter().position(|result| result.id == id) {
        Some(index) => {
            history.remove(index);
            true
        }
        None => false,
    }
}

impl DetectionResultsStore for InMemoryDetectionResults {
    fn save_ocr_result(&self, texts: Vec<DetectedText>, image: &Image) -> Uuid {
        let mut histories = self.histories();
        let id = self.push(&mut histories.ocr, StoredResult::new(texts, image));
        debug!(%id, count = histories.ocr.len(), "Saved OCR result");
        id
    }

    fn save_object_detection_result(&self, objects: Vec<DetectedObject>, image: &Image) -> Uuid {
        let mut histories = self.histories();
        let id = self.push(&mut histories.objects, StoredResult::new(objects, image));
        debug!(%id, count = histories.objects.len(), "Saved object detection result");
        id
    }

    fn save_classification_result(
        &self,
        results: Vec<ClassificationResult>,
        image: &Image,
    ) -> Uuid {
        let mut histories = self.histories();
        let id = self.push(
            &mut histories.classifications,
            StoredResult::new(results, image),
        );
        debug!(%id, count = histories.classifications.len(), "Saved classification result");
        id
    }

    fn ocr_results(&self) -> Vec<StoredOcrResult> {
        self.histories().ocr.clone()
    }

    fn object_detection_results(&self) -> Vec<StoredObjectDetectionResult> {
        self.histories().objects.clone()
    }

    fn classification_results(&self) -> Vec<StoredClassificationResult> {
        self.histories().classifications.clone()
    }

    fn delete_result(&self, category: DetectionCategory, id: Uuid) -> bool {
        let mut histories = self.histories();
        match category {
            DetectionCategory::Ocr => remove_by_id(&mut histories.ocr, id),
            DetectionCategory::ObjectDetection => remove_by_id(&mut histories.objects, id),
            DetectionCategory::Classification => remove_by_id(&mut histories.classifications, id),
        }
    }

    fn clear(&self, category: DetectionCategory) {
        let mut histories = self.histories();
        match category {
            DetectionCategory::Ocr => histories.ocr.clear(),
            DetectionCategory::ObjectDetection => histories.objects.clear(),
            DetectionCategory::Classification => histories.classifications.clear(),
        }
        debug!(category = category.label(), "Cleared detection results");
    }

    fn results_count(&self, category: DetectionCategory) -> usize {
        let histories = self.histories();
        match category {
            DetectionCategory::Ocr => histories.ocr.len(),
            DetectionCategory::ObjectDetection => histories.objects.len(),
            DetectionCategory::Classification => histories.classifications.len(),
        }
    }
}
