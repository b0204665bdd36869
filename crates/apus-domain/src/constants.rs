//! Domain layer constants

/// Smallest zoom factor a camera accepts
pub const MIN_ZOOM_FACTOR: f32 = 1.0;

/// Default upper zoom bound when the device reports none
pub const DEFAULT_MAX_ZOOM_FACTOR: f32 = 5.0;

/// Default frame size delivered by the capture session
pub const DEFAULT_FRAME_WIDTH: u32 = 1920;

/// Default frame size delivered by the capture session
pub const DEFAULT_FRAME_HEIGHT: u32 = 1080;

/// Results kept per detection category before the oldest are dropped
pub const DEFAULT_MAX_RESULTS_PER_CATEGORY: usize = 10;
