//! Fake camera

use std::fmt;
use std::sync::Mutex;

use apus_domain::constants::MIN_ZOOM_FACTOR;
use apus_domain::ports::{CameraManager, FrameHandler};
use apus_domain::value_objects::{Image, Size};

use super::lock;

#[derive(Debug)]
struct CameraState {
    running: bool,
    flash_on: bool,
    zoom_factor: f32,
    image_size: Size,
    next_photo: Option<Image>,
    starts: usize,
    stops: usize,
    captures: usize,
    zoom_requests: Vec<f32>,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            running: false,
            flash_on: false,
            zoom_factor: MIN_ZOOM_FACTOR,
            image_size: Size::new(1920.0, 1080.0),
            next_photo: None,
            starts: 0,
            stops: 0,
            captures: 0,
            zoom_requests: Vec::new(),
        }
    }
}

/// Camera whose photos and frames are supplied by the test
#[derive(Default)]
pub struct FakeCameraManager {
    state: Mutex<CameraState>,
    handler: Mutex<Option<FrameHandler>>,
}

impl FakeCameraManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Photo returned by every following `capture_photo`
    pub fn set_next_photo(&self, photo: Option<Image>) {
        lock(&self.state).next_photo = photo;
    }

    /// Push a frame to the installed handler; `false` if none is installed
    pub fn emit_frame(&self, frame: &Image) -> bool {
        let handler = lock(&self.handler).clone();
        match handler {
            Some(handler) => {
                handler(frame);
                true
            }
            None => false,
        }
    }

    pub fn has_frame_handler(&self) -> bool {
        lock(&self.handler).is_some()
    }

    pub fn start_count(&self) -> usize {
        lock(&self.state).starts
    }

    pub fn stop_count(&self) -> usize {
        lock(&self.state).stops
    }

    pub fn capture_count(&self) -> usize {
        lock(&self.state).captures
    }

    /// Every factor passed to `zoom`, in order
    pub fn zoom_requests(&self) -> Vec<f32> {
        lock(&self.state).zoom_requests.clone()
    }
}

impl fmt::Debug for FakeCameraManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeCameraManager")
            .field("state", &*lock(&self.state))
            .field("has_frame_handler", &self.has_frame_handler())
            .finish()
    }
}

impl CameraManager for FakeCameraManager {
    fn is_session_running(&self) -> bool {
        lock(&self.state).running
    }

    fn is_flash_on(&self) -> bool {
        lock(&self.state).flash_on
    }

    fn zoom_factor(&self) -> f32 {
        lock(&self.state).zoom_factor
    }

    fn image_size(&self) -> Size {
        lock(&self.state).image_size
    }

    fn start_session(&self) {
        let mut state = lock(&self.state);
        state.running = true;
        state.starts += 1;
    }

    fn stop_session(&self) {
        let mut state = lock(&self.state);
        state.running = false;
        state.stops += 1;
    }

    fn capture_photo(&self) -> Option<Image> {
        let mut state = lock(&self.state);
        state.captures += 1;
        state.next_photo.clone()
    }

    fn toggle_flash(&self) {
        let mut state = lock(&self.state);
        state.flash_on = !state.flash_on;
    }

    fn zoom(&self, factor: f32) {
        let mut state = lock(&self.state);
        state.zoom_requests.push(factor);
        state.zoom_factor = factor.max(MIN_ZOOM_FACTOR);
    }

    fn set_frame_handler(&self, handler: FrameHandler) {
        *lock(&self.handler) = Some(handler);
    }
}
