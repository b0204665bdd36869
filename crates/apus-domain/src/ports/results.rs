//! Detection Results Port

use uuid::Uuid;

use crate::value_objects::{
    ClassificationResult, DetectedObject, DetectedText, DetectionCategory, Image,
    StoredClassificationResult, StoredObjectDetectionResult, StoredOcrResult,
};

/// History of detection results, newest first, bounded per category
///
/// Saving into a full category drops its oldest entries.
pub trait DetectionResultsStore: Send + Sync {
    /// Save recognized text and return the id of the stored result
    fn save_ocr_result(&self, texts: Vec<DetectedText>, image: &Image) -> Uuid;

    fn save_object_detection_result(&self, objects: Vec<DetectedObject>, image: &Image) -> Uuid;

    fn save_classification_result(
        &self,
        results: Vec<ClassificationResult>,
        image: &Image,
    ) -> Uuid;

    fn ocr_results(&self) -> Vec<StoredOcrResult>;

    fn object_detection_results(&self) -> Vec<StoredObjectDetectionResult>;

    fn classification_results(&self) -> Vec<StoredClassificationResult>;

    /// Remove one stored result; `false` when `id` is not in `category`
    fn delete_result(&self, category: DetectionCategory, id: Uuid) -> bool;

    fn clear(&self, category: DetectionCategory);

    fn results_count(&self, category: DetectionCategory) -> usize;

    fn clear_all(&self) {
        for category in DetectionCategory::ALL {
            self.clear(category);
        }
    }

    fn total_results_count(&self) -> usize {
        DetectionCategory::ALL
            .into_iter()
            .map(|category| self.results_count(category))
            .sum()
    }

    fn has_any_results(&self) -> bool {
        self.total_results_count() > 0
    }
}
