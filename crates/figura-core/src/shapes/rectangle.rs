//! Rectangle shape.

use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A rectangle anchored at the corner the drag started from.
///
/// `width` and `height` are signed: dragging left or above the anchor leaves
/// them negative, which keeps the anchor corner fixed while the figure grows
/// in the drag direction. [`Rectangle::bounds`] normalizes for consumers that
/// need an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Anchor corner position.
    pub position: Point,
    /// Signed horizontal extent.
    pub width: f64,
    /// Signed vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// The corner diagonally opposite the anchor.
    pub fn far_corner(&self) -> Point {
        Point::new(self.position.x + self.width, self.position.y + self.height)
    }

    /// Get as a normalized kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.position, self.far_corner())
    }

    /// Get the bounding box.
    pub fn bounds(&self) -> Rect {
        self.as_rect()
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }
}
