//! Camera screen controller
//!
//! Owns no capability itself. Everything it drives is declared as an
//! injected dependency and resolved from the registry when used, so a test
//! that applies the test profile sees every call land on the fakes.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use apus_domain::error::{Error, Result};
use apus_domain::ports::{
    CameraManager, ErrorReporter, HapticFeedback, ObjectDetector, PhotoLibraryService,
};
use apus_domain::value_objects::{AppError, AppSettings, Detection, Image};
use apus_infrastructure::di::{Injected, OptionalInjected, Registry};
use tracing::{debug, info, warn};

/// Drives the camera session and the photo it captured
#[derive(Debug)]
pub struct CameraController {
    registry: Registry,
    camera: Injected<dyn CameraManager>,
    detector: Injected<dyn ObjectDetector>,
    haptics: Injected<dyn HapticFeedback>,
    settings: Injected<AppSettings>,
    photo_library: OptionalInjected<dyn PhotoLibraryService>,
    errors: OptionalInjected<dyn ErrorReporter>,
    captured: Mutex<Option<Image>>,
}

impl CameraController {
    pub fn new(registry: &Registry) -> Self {
        Self {
            registry: registry.clone(),
            camera: Injected::new(registry),
            detector: Injected::new(registry),
            haptics: Injected::new(registry),
            settings: Injected::new(registry),
            photo_library: OptionalInjected::new(registry),
            errors: OptionalInjected::new(registry),
            captured: Mutex::new(None),
        }
    }

    /// Route live frames to the object detector and start the session
    ///
    /// Frames are skipped while object detection is disabled in the
    /// settings.
    pub fn start(&self) {
        let weak = self.registry.downgrade();
        self.camera.get().set_frame_handler(Arc::new(move |frame: &Image| {
            let Some(registry) = weak.upgrade() else {
                return;
            };
            if registry.resolve::<AppSettings>().is_object_detection_enabled() {
                registry.resolve::<dyn ObjectDetector>().process_frame(frame);
            }
        }));
        self.camera.get().start_session();
        info!("Camera started");
    }

    pub fn stop(&self) {
        self.camera.get().stop_session();
        info!("Camera stopped");
    }

    pub fn is_running(&self) -> bool {
        self.camera.get().is_session_running()
    }

    /// Capture a still photo
    ///
    /// A missing frame is reported as [`AppError::ImageProcessingFailed`].
    pub fn capture_photo(&self) -> Option<Image> {
        match self.camera.get().capture_photo() {
            Some(image) => {
                self.haptics.get().success();
                *self.lock_captured() = Some(image.clone());
                debug!(width = image.width(), height = image.height(), "Photo captured");
                Some(image)
            }
            None => {
                self.haptics.get().error();
                self.report(AppError::ImageProcessingFailed);
                None
            }
        }
    }

    /// The photo waiting to be previewed
    pub fn captured_image(&self) -> Option<Image> {
        self.lock_captured().clone()
    }

    /// Use an image picked from the library as the captured photo
    pub fn handle_selected_image(&self, image: Option<Image>) {
        *self.lock_captured() = image;
    }

    pub fn dismiss_preview(&self) {
        *self.lock_captured() = None;
    }

    /// Save the captured photo to the photo library
    ///
    /// Failures are also handed to the error reporter.
    pub fn save_captured(&self) -> Result<PathBuf> {
        let image = self
            .captured_image()
            .ok_or_else(|| Error::not_found("captured photo"))?;
        let library = self
            .photo_library
            .get()
            .ok_or_else(|| Error::not_found("photo library"))?;

        match library.save_image(&image) {
            Ok(path) => {
                self.haptics.get().success();
                Ok(path)
            }
            Err(err) => {
                warn!(error = %err, "Saving photo failed");
                self.report(AppError::from(&err));
                Err(err.into())
            }
        }
    }

    /// Toggle the flash, returning whether it is now on
    pub fn toggle_flash(&self) -> bool {
        let camera = self.camera.get();
        camera.toggle_flash();
        self.haptics.get().button_tap();
        camera.is_flash_on()
    }

    /// Request a zoom factor, returning the one the camera applied
    pub fn zoom(&self, factor: f32) -> f32 {
        let camera = self.camera.get();
        camera.zoom(factor);
        camera.zoom_factor()
    }

    pub fn detections(&self) -> Vec<Detection> {
        self.detector.get().detections()
    }

    pub fn object_detection_enabled(&self) -> bool {
        self.settings.get().is_object_detection_enabled()
    }

    fn report(&self, error: AppError) {
        match self.errors.get() {
            Some(reporter) => reporter.handle_app_error(error),
            None => warn!(error = %error, "No error reporter registered"),
        }
    }

    fn lock_captured(&self) -> MutexGuard<'_, Option<Image>> {
        self.captured.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
