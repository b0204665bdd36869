//! Image value passed between camera, vision and photo library capabilities

use std::sync::Arc;

use super::geometry::Size;

/// An immutable image buffer
///
/// Pixel data is shared, so cloning an `Image` is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    scale: f32,
    data: Arc<[u8]>,
}

impl Image {
    /// Create an image at scale 1.0
    pub fn new(width: u32, height: u32, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
            data: data.into(),
        }
    }

    /// Create an image with no pixel data, useful as a placeholder frame
    pub fn blank(width: u32, height: u32) -> Self {
        Self::new(width, height, Vec::new())
    }

    /// Set the display scale
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Dimensions as a floating point size
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// True when the image has no area
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
