//! Stored result tests

use apus_domain::value_objects::{
    ClassificationResult, DetectionCategory, Image, Size, StoredClassificationResult,
};

#[test]
fn test_stored_result_records_image_size() {
    let image = Image::blank(640, 480);
    let stored = StoredClassificationResult::new(
        vec![
            ClassificationResult::new("dog", 0.9),
            ClassificationResult::new("pet", 0.6),
        ],
        &image,
    );

    assert_eq!(stored.image_size, Size::new(640.0, 480.0));
    assert_eq!(stored.item_count(), 2);
}

#[test]
fn test_stored_results_have_distinct_ids() {
    let image = Image::blank(1, 1);
    let first = StoredClassificationResult::new(Vec::new(), &image);
    let second = StoredClassificationResult::new(Vec::new(), &image);

    assert_ne!(first.id, second.id);
}

#[test]
fn test_category_labels_and_serde_names() {
    let labels: Vec<_> = DetectionCategory::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels, ["OCR", "Object Detection", "Classification"]);

    assert_eq!(
        serde_json::to_string(&DetectionCategory::ObjectDetection).unwrap(),
        "\"object_detection\""
    );
}
