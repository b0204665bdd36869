//! Apus - Entry Point
//!
//! Loads configuration, builds a capability registry for the selected
//! profile and runs a short capture session against it.
//!
//! ## Profiles
//!
//! | Profile | Command | Description |
//! |---------|---------|-------------|
//! | **Production** | `apus` | In-process providers, frames from the capture device |
//! | **Test** | `apus --profile test` | Recording fakes, no frames |

use std::path::PathBuf;

use anyhow::Context;
use apus::CameraController;
use apus::domain::ports::{
    BarcodeDetector, CameraManager, DetectionResultsStore, ErrorReporter, ImageClassifier,
    UnifiedObjectDetector,
};
use apus::domain::value_objects::Image;
use apus::infrastructure::config::ConfigLoader;
use apus::infrastructure::di::{Registry, ServiceLocator, TestProfile, init_registry};
use apus::infrastructure::logging::init_logging;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

/// Which set of capability providers to register
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    Production,
    Test,
}

/// Command line interface for Apus
#[derive(Parser, Debug)]
#[command(name = "apus")]
#[command(about = "Apus - camera capture and vision core")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Capability profile to register
    #[arg(long, value_enum, default_value_t = ProfileArg::Production)]
    profile: ProfileArg,

    /// Frames to feed the capture device before capturing
    #[arg(long, default_value_t = 3)]
    frames: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("loading configuration")?;
    init_logging(&config.logging).context("initializing logging")?;

    let (registry, device) = match cli.profile {
        ProfileArg::Production => {
            let (registry, device) = init_registry(config);
            (registry, Some(device))
        }
        ProfileArg::Test => {
            let registry = Registry::new();
            registry.apply_profile(&TestProfile::default());
            (registry, None)
        }
    };

    for capability in registry.capabilities() {
        info!(%capability, "Capability available");
    }

    let controller = CameraController::new(&registry);
    controller.start();

    if let Some(device) = &device {
        let size = ServiceLocator::new(registry.clone()).camera_manager().image_size();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (width, height) = (size.width as u32, size.height as u32);
        for _ in 0..cli.frames {
            device.deliver_frame(Image::blank(width, height));
        }
    }

    match controller.capture_photo() {
        Some(photo) => {
            let locator = ServiceLocator::new(registry.clone());
            let results = locator.detection_results();

            match locator.image_classifier().classify(&photo) {
                Ok(labels) => {
                    for label in &labels {
                        info!(label = %label.identifier, confidence = label.confidence, "Classified");
                    }
                    results.save_classification_result(labels, &photo);
                }
                Err(err) => warn!(error = %err, "Classification failed"),
            }

            let detector = locator.unified_object_detector();
            detector.preload();
            match detector.detect_objects(&photo) {
                Ok(objects) => {
                    for object in &objects {
                        info!(class = %object.class_name, confidence = object.confidence, "Detected");
                    }
                    results.save_object_detection_result(objects, &photo);
                }
                Err(err) => warn!(error = %err, "Object detection failed"),
            }

            let barcodes = locator.barcode_detector().detect_barcodes(&photo);
            info!(
                barcodes = barcodes.len(),
                stored = results.total_results_count(),
                "Capture analyzed"
            );
        }
        None => {
            let locator = ServiceLocator::new(registry.clone());
            if let Some(shown) = locator.error_reporter().current_error() {
                warn!(message = %shown.message, "Capture failed");
            }
        }
    }

    controller.stop();
    Ok(())
}
