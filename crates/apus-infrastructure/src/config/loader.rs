//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values using Figment.

use std::env;
use std::path::{Path, PathBuf};

use apus_domain::constants::MIN_ZOOM_FACTOR;
use apus_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::config::{
    AppConfig, CameraConfig, DetectionConfig, LoggingConfig, PermissionsConfig, PhotoLibraryConfig,
};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `APUS_CAMERA__MAX_ZOOM`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(&config.logging)?;
    validate_camera_config(&config.camera)?;
    validate_photo_library_config(&config.photo_library)?;
    validate_detection_config(&config.detection)?;
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

fn validate_camera_config(config: &CameraConfig) -> Result<()> {
    if !config.max_zoom.is_finite() || config.max_zoom < MIN_ZOOM_FACTOR {
        return Err(Error::configuration(format!(
            "Camera max_zoom must be at least {MIN_ZOOM_FACTOR}, got {}",
            config.max_zoom
        )));
    }
    if config.frame_width == 0 || config.frame_height == 0 {
        return Err(Error::configuration("Camera frame size cannot be 0"));
    }
    Ok(())
}

fn validate_photo_library_config(config: &PhotoLibraryConfig) -> Result<()> {
    if config.directory.as_os_str().is_empty() {
        return Err(Error::configuration(
            "Photo library directory cannot be empty",
        ));
    }
    Ok(())
}

fn validate_detection_config(config: &DetectionConfig) -> Result<()> {
    if config.max_results_per_category == 0 {
        return Err(Error::configuration(
            "Detection max_results_per_category cannot be 0",
        ));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logging configuration
    #[must_use]
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set camera configuration
    #[must_use]
    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.config.camera = camera;
        self
    }

    /// Set permission policy
    #[must_use]
    pub fn with_permissions(mut self, permissions: PermissionsConfig) -> Self {
        self.config.permissions = permissions;
        self
    }

    /// Set the photo library directory
    #[must_use]
    pub fn with_photo_directory<P: Into<PathBuf>>(mut self, directory: P) -> Self {
        self.config.photo_library.directory = directory.into();
        self
    }

    /// Set still-image detection options
    #[must_use]
    pub fn with_detection(mut self, detection: DetectionConfig) -> Self {
        self.config.detection = detection;
        self
    }

    /// Set the initial object detection toggle
    #[must_use]
    pub fn with_object_detection(mut self, enabled: bool) -> Self {
        self.config.settings.object_detection_enabled = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
