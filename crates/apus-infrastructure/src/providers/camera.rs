//! Capture session provider
//!
//! [`CaptureDevice`] stands for the single physical camera. Every
//! [`SessionCameraManager`] handed out by the registry drives the same
//! device, so session state is consistent no matter how often the
//! capability is resolved.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use apus_domain::constants::MIN_ZOOM_FACTOR;
use apus_domain::ports::{CameraManager, FrameHandler};
use apus_domain::value_objects::{Image, Size};
use tracing::{debug, trace};

use crate::config::CameraConfig;

#[derive(Debug, Clone)]
struct SessionState {
    running: bool,
    flash_on: bool,
    zoom_factor: f32,
    last_frame: Option<Image>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            running: false,
            flash_on: false,
            zoom_factor: MIN_ZOOM_FACTOR,
            last_frame: None,
        }
    }
}

/// The camera hardware behind every session manager
pub struct CaptureDevice {
    max_zoom: f32,
    frame_size: Size,
    state: Mutex<SessionState>,
    handler: RwLock<Option<FrameHandler>>,
}

impl CaptureDevice {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            max_zoom: config.max_zoom.max(MIN_ZOOM_FACTOR),
            frame_size: Size::new(config.frame_width as f32, config.frame_height as f32),
            state: Mutex::new(SessionState::default()),
            handler: RwLock::new(None),
        }
    }

    pub fn max_zoom(&self) -> f32 {
        self.max_zoom
    }

    /// Feed a frame from the hardware
    ///
    /// Dropped unless the session is running. The frame handler runs
    /// without any device lock held.
    pub fn deliver_frame(&self, frame: Image) -> bool {
        {
            let mut state = self.lock_state();
            if !state.running {
                trace!("Dropping frame, session not running");
                return false;
            }
            state.last_frame = Some(frame.clone());
        }

        let handler = self
            .handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(handler) = handler {
            handler(&frame);
        }
        true
    }

    /// Stop the session and forget the handler and flash/zoom state
    pub fn power_off(&self) {
        *self.lock_state() = SessionState::default();
        *self.handler.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for CaptureDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_handler = self
            .handler
            .read()
            .map(|handler| handler.is_some())
            .unwrap_or(false);
        f.debug_struct("CaptureDevice")
            .field("max_zoom", &self.max_zoom)
            .field("frame_size", &self.frame_size)
            .field("state", &*self.lock_state())
            .field("has_handler", &has_handler)
            .finish()
    }
}

/// Camera manager driving a shared [`CaptureDevice`]
#[derive(Debug, Clone)]
pub struct SessionCameraManager {
    device: Arc<CaptureDevice>,
}

impl SessionCameraManager {
    pub fn new(device: Arc<CaptureDevice>) -> Self {
        Self { device }
    }
}

impl CameraManager for SessionCameraManager {
    fn is_session_running(&self) -> bool {
        self.device.lock_state().running
    }

    fn is_flash_on(&self) -> bool {
        self.device.lock_state().flash_on
    }

    fn zoom_factor(&self) -> f32 {
        self.device.lock_state().zoom_factor
    }

    fn image_size(&self) -> Size {
        self.device.frame_size
    }

    fn start_session(&self) {
        self.device.lock_state().running = true;
        debug!("Capture session started");
    }

    fn stop_session(&self) {
        let mut state = self.device.lock_state();
        state.running = false;
        state.last_frame = None;
        debug!("Capture session stopped");
    }

    fn capture_photo(&self) -> Option<Image> {
        let state = self.device.lock_state();
        if state.running {
            state.last_frame.clone()
        } else {
            None
        }
    }

    fn toggle_flash(&self) {
        let mut state = self.device.lock_state();
        state.flash_on = !state.flash_on;
        debug!(flash_on = state.flash_on, "Flash toggled");
    }

    fn zoom(&self, factor: f32) {
        if factor.is_nan() {
            return;
        }
        let clamped = factor.clamp(MIN_ZOOM_FACTOR, self.device.max_zoom);
        self.device.lock_state().zoom_factor = clamped;
        trace!(requested = factor, applied = clamped, "Zoom set");
    }

    fn set_frame_handler(&self, handler: FrameHandler) {
        *self
            .device
            .handler
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(handler);
    }
}
