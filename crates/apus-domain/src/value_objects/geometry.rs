//! Geometry primitives in floating point image space

use serde::{Deserialize, Serialize};

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width divided by height, zero for a degenerate size
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0.0 {
            0.0
        } else {
            self.width / self.height
        }
    }
}

/// An axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn area(&self) -> f32 {
        self.size.width * self.size.height
    }

    /// Map a rect in normalized (0..1) image coordinates onto a view that
    /// shows the image aspect-fit and centered.
    pub fn aspect_fit_to_display(&self, image_size: Size, display_size: Size) -> Rect {
        let image_aspect = image_size.aspect_ratio();
        let display_aspect = display_size.aspect_ratio();

        let (fitted, offset) = if image_aspect > display_aspect {
            let fitted = Size::new(display_size.width, display_size.width / image_aspect);
            (
                fitted,
                Point::new(0.0, (display_size.height - fitted.height) / 2.0),
            )
        } else {
            let fitted = Size::new(display_size.height * image_aspect, display_size.height);
            (
                fitted,
                Point::new((display_size.width - fitted.width) / 2.0, 0.0),
            )
        };

        Rect::new(
            self.min_x() * fitted.width + offset.x,
            self.min_y() * fitted.height + offset.y,
            self.width() * fitted.width,
            self.height() * fitted.height,
        )
    }
}
