//! Profile Tests

use std::sync::Arc;

use apus_domain::ports::{
    BarcodeDetector, CameraManager, DetectionResultsStore, ErrorReporter, HapticFeedback,
    PermissionService, PhotoLibraryService, UnifiedObjectDetector,
};
use apus_domain::value_objects::{
    AppError, AppSettings, ClassificationResult, DetectionCategory, DetectionFramework, Image,
    PermissionKind,
};
use apus_infrastructure::config::{AppConfig, ConfigBuilder, DetectionConfig, PermissionsConfig};
use apus_infrastructure::di::{
    ProductionProfile, Registry, ServiceLocator, TestProfile, init_registry,
};
use tempfile::TempDir;

fn production(auto_grant: bool) -> (Registry, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigBuilder::new()
        .with_photo_directory(temp_dir.path().join("photos"))
        .with_permissions(PermissionsConfig {
            auto_grant,
            ..PermissionsConfig::default()
        })
        .build();
    let (registry, _) = init_registry(config);
    (registry, temp_dir)
}

#[test]
fn test_production_profile_registers_every_capability() {
    let (registry, _dir) = production(false);
    let locator = ServiceLocator::new(registry.clone());

    let _ = locator.camera_manager();
    let _ = locator.object_detector();
    let _ = locator.image_classifier();
    let _ = locator.contour_detector();
    let _ = locator.text_recognizer();
    let _ = locator.unified_object_detector();
    let _ = locator.barcode_detector();
    let _ = locator.haptics();
    let _ = locator.permission_service();
    let _ = locator.photo_library();
    let _ = locator.error_reporter();
    let _ = locator.detection_results();
    let _ = locator.settings();
    let _ = locator.config();

    assert_eq!(registry.profile_name(), Some("production"));
    assert_eq!(registry.instance_count(), 3);
    assert_eq!(registry.factory_count(), 11);
}

#[test]
fn test_fresh_providers_share_platform_state() {
    let (registry, _dir) = production(false);

    let first = registry.resolve::<dyn CameraManager>();
    let second = registry.resolve::<dyn CameraManager>();
    assert!(!Arc::ptr_eq(&first, &second));

    first.start_session();
    first.zoom(50.0);
    assert!(second.is_session_running());
    assert_eq!(second.zoom_factor(), 5.0);

    registry
        .resolve::<dyn ErrorReporter>()
        .handle_app_error(AppError::ImageProcessingFailed);
    assert!(registry.resolve::<dyn ErrorReporter>().current_error().is_some());
}

#[test]
fn test_settings_are_a_singleton() {
    let (registry, _dir) = production(false);
    let first = registry.resolve::<AppSettings>();
    first.set_object_detection_enabled(false);

    assert!(!registry.resolve::<AppSettings>().is_object_detection_enabled());
}

#[test]
fn test_capture_device_feeds_resolved_cameras() {
    let profile = Arc::new(ProductionProfile::default());
    let device = profile.capture_device();
    let registry = Registry::with_profile(profile);

    let camera = registry.resolve::<dyn CameraManager>();
    camera.start_session();
    assert!(device.deliver_frame(Image::blank(16, 9)));

    let photo = registry.resolve::<dyn CameraManager>().capture_photo();
    assert_eq!(photo.map(|p| p.width()), Some(16));
}

#[test]
fn test_photo_library_requires_permission() {
    let (registry, dir) = production(false);
    let library = registry.resolve::<dyn PhotoLibraryService>();

    assert!(!library.request_permission());
    assert!(library.save_image(&Image::new(1, 1, vec![0_u8])).is_err());
    assert!(!dir.path().join("photos").exists());
}

#[test]
fn test_photo_library_writes_once_granted() {
    let (registry, dir) = production(true);
    let library = registry.resolve::<dyn PhotoLibraryService>();

    assert!(library.request_permission());
    let path = library
        .save_image(&Image::new(2, 1, vec![1_u8, 2]))
        .unwrap();

    assert!(path.starts_with(dir.path().join("photos")));
    assert_eq!(std::fs::read(path).unwrap(), vec![1_u8, 2]);
}

#[test]
fn test_error_reporter_uses_registered_permission_service() {
    let (registry, _dir) = production(false);

    registry
        .resolve::<dyn PermissionService>()
        .request_permission(PermissionKind::Camera);
    let reporter = registry.resolve::<dyn ErrorReporter>();
    reporter.handle_app_error(AppError::CameraPermissionDenied);
    reporter.open_settings();

    assert!(reporter.current_error().is_none());
}

#[test]
fn test_apply_profile_replaces_everything() {
    let (registry, _dir) = production(false);
    registry.register_instance::<String>(Arc::new("extra".to_string()));

    let profile = TestProfile::default();
    registry.apply_profile(&profile);

    assert!(!registry.contains::<String>());
    assert_eq!(registry.factory_count(), 0);
    registry.resolve::<dyn HapticFeedback>().success();
    assert_eq!(profile.fakes().haptics.events().len(), 1);
}

#[test]
fn test_reset_restores_bootstrap_profile() {
    let (registry, _dir) = production(false);
    let profile = TestProfile::default();
    registry.apply_profile(&profile);

    registry.reset();

    registry.resolve::<dyn CameraManager>().start_session();
    assert_eq!(profile.fakes().camera.start_count(), 0);
    assert_eq!(registry.factory_count(), 11);
}

#[test]
fn test_reset_powers_off_the_camera() {
    let (registry, _dir) = production(false);
    registry.resolve::<dyn CameraManager>().start_session();

    registry.reset();

    assert!(!registry.resolve::<dyn CameraManager>().is_session_running());
}

#[test]
fn test_test_profile_registers_defaults() {
    let registry = Registry::new();
    registry.apply_profile(&TestProfile::default());

    assert_eq!(*registry.resolve::<AppConfig>(), AppConfig::default());
    assert_eq!(registry.instance_count(), 14);
}

#[test]
fn test_detection_results_are_shared_and_bounded() {
    let config = ConfigBuilder::new()
        .with_detection(DetectionConfig {
            max_results_per_category: 2,
            ..DetectionConfig::default()
        })
        .build();
    let (registry, _) = init_registry(config);
    let image = Image::blank(10, 10);

    let store = registry.resolve::<dyn DetectionResultsStore>();
    for label in ["first", "second", "third"] {
        store.save_classification_result(vec![ClassificationResult::new(label, 0.5)], &image);
    }

    let seen = registry.resolve::<dyn DetectionResultsStore>();
    assert!(Arc::ptr_eq(&store, &seen));
    let newest: Vec<_> = seen
        .classification_results()
        .iter()
        .map(|r| r.items[0].identifier.clone())
        .collect();
    assert_eq!(newest, ["third", "second"]);
}

#[test]
fn test_reset_empties_detection_results() {
    let (registry, _dir) = production(false);
    registry
        .resolve::<dyn DetectionResultsStore>()
        .save_ocr_result(Vec::new(), &Image::blank(1, 1));

    registry.reset();

    let store = registry.resolve::<dyn DetectionResultsStore>();
    assert_eq!(store.results_count(DetectionCategory::Ocr), 0);
    assert!(!store.has_any_results());
}

#[test]
fn test_unified_detector_uses_configured_framework() {
    let config = ConfigBuilder::new()
        .with_detection(DetectionConfig {
            framework: DetectionFramework::CoreMl,
            ..DetectionConfig::default()
        })
        .build();
    let (registry, _) = init_registry(config);

    let detector = registry.resolve::<dyn UnifiedObjectDetector>();
    detector.preload();
    let objects = detector.detect_objects(&Image::blank(640, 480)).unwrap();

    assert_eq!(detector.framework(), DetectionFramework::CoreMl);
    assert!(!objects.is_empty());
    assert!(objects.iter().all(|o| o.framework == DetectionFramework::CoreMl));
}

#[test]
fn test_production_barcode_detector_finds_nothing() {
    let (registry, _dir) = production(false);
    let barcodes = registry
        .resolve::<dyn BarcodeDetector>()
        .detect_barcodes(&Image::blank(32, 32));

    assert!(barcodes.is_empty());
}

#[test]
fn test_weak_handle_reset_rebuilds_production_tables() {
    let (registry, _dir) = production(false);
    let upgraded = registry.downgrade().upgrade().unwrap();

    upgraded.reset();

    assert_eq!(upgraded.profile_name(), Some("production"));
    assert_eq!(registry.instance_count(), 3);
    assert_eq!(registry.factory_count(), 11);
}
