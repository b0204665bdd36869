//! Configuration Loader Tests

use apus_domain::value_objects::{DetectionFramework, PermissionKind, PermissionStatus};
use apus_infrastructure::config::{CameraConfig, ConfigBuilder, ConfigLoader};
use apus_infrastructure::constants::DEFAULT_LOG_LEVEL;
use figment::Jail;
use tempfile::TempDir;

#[test]
fn test_config_loader_default() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.camera, CameraConfig::default());
        assert!(config.settings.object_detection_enabled);
        Ok(())
    });
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .with_camera(CameraConfig {
            max_zoom: 10.0,
            ..CameraConfig::default()
        })
        .with_object_detection(false)
        .build();

    assert_eq!(config.camera.max_zoom, 10.0);
    assert!(!config.settings.object_detection_enabled);
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("apus.toml");

    let original = ConfigBuilder::new()
        .with_photo_directory(temp_dir.path().join("photos"))
        .with_object_detection(false)
        .build();

    // Inside a jail so environment set by other tests cannot leak in
    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new();
        loader
            .save_to_file(&original, &config_path)
            .map_err(|e| e.to_string())?;

        let loaded = ConfigLoader::new()
            .with_config_path(&config_path)
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(loaded, original);
        Ok(())
    });
}

#[test]
fn test_discovers_config_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "apus.toml",
            r#"
                [camera]
                max_zoom = 3.0

                [permissions]
                auto_grant = true

                [permissions.initial]
                camera = "authorized"
            "#,
        )?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.camera.max_zoom, 3.0);
        assert!(config.permissions.auto_grant);
        assert_eq!(
            config.permissions.initial.get(&PermissionKind::Camera),
            Some(&PermissionStatus::Authorized)
        );
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[logging]\nlevel = \"debug\"\n")?;
        jail.set_env("APUS_LOGGING__LEVEL", "warn");
        jail.set_env("APUS_SETTINGS__OBJECT_DETECTION_ENABLED", "false");

        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, "warn");
        assert!(!config.settings.object_detection_enabled);
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new().with_config_path("nowhere.toml");
        let config = loader.load().map_err(|e| e.to_string())?;

        assert_eq!(config.camera, CameraConfig::default());
        assert_eq!(
            loader.config_path().map(|p| p.to_path_buf()),
            Some("nowhere.toml".into())
        );
        Ok(())
    });
}

#[test]
fn test_detection_section_from_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "apus.toml",
            "[detection]\nframework = \"core_ml\"\nmax_results_per_category = 3\n",
        )?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.detection.framework, DetectionFramework::CoreMl);
        assert_eq!(config.detection.max_results_per_category, 3);
        Ok(())
    });
}
