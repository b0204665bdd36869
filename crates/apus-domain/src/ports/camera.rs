//! Camera Capture Port
//!
//! Defines the contract for controlling the capture session and receiving
//! frames from it.

use std::sync::Arc;

use crate::value_objects::{Image, Size};

/// Callback invoked for every frame the capture session delivers
pub type FrameHandler = Arc<dyn Fn(&Image) + Send + Sync>;

/// Camera session controller
pub trait CameraManager: Send + Sync {
    fn is_session_running(&self) -> bool;

    fn is_flash_on(&self) -> bool;

    /// Current zoom factor, 1.0 meaning no zoom
    fn zoom_factor(&self) -> f32;

    /// Size of the frames the session produces
    fn image_size(&self) -> Size;

    fn start_session(&self);

    fn stop_session(&self);

    /// Capture a still photo, `None` if nothing could be captured
    fn capture_photo(&self) -> Option<Image>;

    fn toggle_flash(&self);

    /// Request a zoom factor; implementations clamp it to what they support
    fn zoom(&self, factor: f32);

    /// Install the handler that receives live frames, replacing any previous one
    fn set_frame_handler(&self, handler: FrameHandler);
}
