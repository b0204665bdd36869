//! Results produced by the vision capabilities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geometry::{Point, Rect, Size};

/// A live object detection on a camera frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Normalized bounding box
    pub bounding_box: Rect,
    pub class_name: String,
    pub confidence: f32,
}

/// One label from an image classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub identifier: String,
    pub confidence: f32,
}

impl ClassificationResult {
    pub fn new<S: Into<String>>(identifier: S, confidence: f32) -> Self {
        Self {
            identifier: identifier.into(),
            confidence,
        }
    }
}

/// Shape category derived from a detected contour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContourType {
    Document,
    Rectangle,
    Square,
    Complex,
    Simple,
}

impl ContourType {
    pub const ALL: [ContourType; 5] = [
        Self::Document,
        Self::Rectangle,
        Self::Square,
        Self::Complex,
        Self::Simple,
    ];

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Rectangle => "Rectangle",
            Self::Square => "Square",
            Self::Complex => "Complex Shape",
            Self::Simple => "Simple Shape",
        }
    }
}

/// A contour found in a still image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedContour {
    pub id: Uuid,
    pub points: Vec<Point>,
    pub bounding_box: Rect,
    pub confidence: f32,
    pub aspect_ratio: f32,
    pub area: f32,
}

impl DetectedContour {
    /// Build a contour, deriving aspect ratio and area from the bounding box
    pub fn new(points: Vec<Point>, bounding_box: Rect, confidence: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            bounding_box,
            confidence,
            aspect_ratio: bounding_box.size.aspect_ratio(),
            area: bounding_box.area(),
        }
    }

    /// At least four points and a plausible aspect ratio
    pub fn is_rectangular(&self) -> bool {
        self.points.len() >= 4 && self.aspect_ratio > 0.3 && self.aspect_ratio < 3.0
    }

    pub fn contour_type(&self) -> ContourType {
        if self.is_rectangular() {
            if self.aspect_ratio > 1.2 && self.aspect_ratio < 1.8 {
                ContourType::Document
            } else if self.aspect_ratio > 0.6 && self.aspect_ratio < 1.4 {
                ContourType::Square
            } else {
                ContourType::Rectangle
            }
        } else if self.points.len() > 8 {
            ContourType::Complex
        } else {
            ContourType::Simple
        }
    }
}

/// Recognized text with its location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedText {
    pub id: Uuid,
    pub text: String,
    /// Normalized (0..1) with a top-left origin
    pub bounding_box: Rect,
    pub confidence: f32,
    pub character_boxes: Vec<Rect>,
}

impl DetectedText {
    pub fn new<S: Into<String>>(text: S, bounding_box: Rect, confidence: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            bounding_box,
            confidence,
            character_boxes: Vec::new(),
        }
    }

    /// Bounding box in the coordinates of a view displaying the image aspect-fit
    pub fn display_bounding_box(&self, image_size: Size, display_size: Size) -> Rect {
        self.bounding_box
            .aspect_fit_to_display(image_size, display_size)
    }
}

// Identity is the detection id, not its content.
impl PartialEq for DetectedText {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Detection backend behind a unified object detector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionFramework {
    #[default]
    Vision,
    CoreMl,
}

impl DetectionFramework {
    pub fn label(self) -> &'static str {
        match self {
            Self::Vision => "Vision",
            Self::CoreMl => "Core ML",
        }
    }
}

/// An object found in a still image by a unified detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedObject {
    pub id: Uuid,
    /// Normalized (0..1) with a top-left origin
    pub bounding_box: Rect,
    pub class_name: String,
    pub confidence: f32,
    pub framework: DetectionFramework,
}

impl DetectedObject {
    pub fn new<S: Into<String>>(
        bounding_box: Rect,
        class_name: S,
        confidence: f32,
        framework: DetectionFramework,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            bounding_box,
            class_name: class_name.into(),
            confidence,
            framework,
        }
    }

    /// Bounding box in the coordinates of a view displaying the image aspect-fit
    pub fn display_bounding_box(&self, image_size: Size, display_size: Size) -> Rect {
        self.bounding_box
            .aspect_fit_to_display(image_size, display_size)
    }
}

impl PartialEq for DetectedObject {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Barcode encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarcodeSymbology {
    Qr,
    Aztec,
    DataMatrix,
    Pdf417,
    Ean13,
    Code128,
    Other,
}

/// A barcode found in a still image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barcode {
    /// Decoded content, absent when the symbol could not be read
    pub payload: Option<String>,
    pub symbology: BarcodeSymbology,
    pub bounding_box: Rect,
    pub confidence: f32,
}

impl Barcode {
    pub fn new(
        payload: Option<String>,
        symbology: BarcodeSymbology,
        bounding_box: Rect,
        confidence: f32,
    ) -> Self {
        Self {
            payload,
            symbology,
            bounding_box,
            confidence,
        }
    }

    pub fn is_qr(&self) -> bool {
        self.symbology == BarcodeSymbology::Qr
    }
}

/// Order barcodes for presentation: QR codes first, then by confidence
pub fn prioritize_barcodes(barcodes: &mut [Barcode]) {
    barcodes.sort_by(|lhs, rhs| {
        rhs.is_qr()
            .cmp(&lhs.is_qr())
            .then_with(|| rhs.confidence.total_cmp(&lhs.confidence))
    });
}
