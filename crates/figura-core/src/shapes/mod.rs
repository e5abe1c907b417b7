//! Shape definitions for the drawing surface.

mod circle;
mod rectangle;
mod star;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use star::Star;

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// The kinds of figure a user can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Star,
}

/// A placed or in-progress figure, one variant per [`ShapeKind`].
///
/// Each variant carries only the fields its kind needs, so a dimension that
/// belongs to another kind is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Star(Star),
}

impl Shape {
    /// The kind tag of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Star(_) => ShapeKind::Star,
        }
    }

    /// The anchor position the figure was drawn from.
    ///
    /// Circles and stars are anchored at their center, rectangles at the
    /// corner the drag started from.
    pub fn anchor(&self) -> Point {
        match self {
            Shape::Circle(s) => s.center,
            Shape::Rectangle(s) => s.position,
            Shape::Star(s) => s.center,
        }
    }

    /// Get the bounding box in stage coordinates.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Circle(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Star(s) => s.bounds(),
        }
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Circle(s) => s.to_path(),
            Shape::Rectangle(s) => s.to_path(),
            Shape::Star(s) => s.to_path(),
        }
    }
}
