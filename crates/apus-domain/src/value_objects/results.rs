//! Detection results kept for later review

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::detection::{ClassificationResult, DetectedObject, DetectedText};
use super::geometry::Size;
use super::image::Image;

/// Kind of result a store keeps a separate history for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionCategory {
    Ocr,
    ObjectDetection,
    Classification,
}

impl DetectionCategory {
    pub const ALL: [DetectionCategory; 3] =
        [Self::Ocr, Self::ObjectDetection, Self::Classification];

    pub fn label(self) -> &'static str {
        match self {
            Self::Ocr => "OCR",
            Self::ObjectDetection => "Object Detection",
            Self::Classification => "Classification",
        }
    }
}

/// One saved run of a detector over an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResult<T> {
    pub id: Uuid,
    pub captured_at: DateTime<Utc>,
    /// Size of the image the items were detected in
    pub image_size: Size,
    pub items: Vec<T>,
}

impl<T> StoredResult<T> {
    pub fn new(items: Vec<T>, image: &Image) -> Self {
        Self {
            id: Uuid::new_v4(),
            captured_at: Utc::now(),
            image_size: image.size(),
            items,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

pub type StoredOcrResult = StoredResult<DetectedText>;
pub type StoredObjectDetectionResult = StoredResult<DetectedObject>;
pub type StoredClassificationResult = StoredResult<ClassificationResult>;
