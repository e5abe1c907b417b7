//! Dimension derivation rules for draft figures.
//!
//! Every figure starts from a small seed placed at the press point and grows
//! as the pointer moves. Both steps are total functions of the inputs, so a
//! pointer that never moves still yields the seed figure.

use kurbo::Point;

use crate::shapes::{Circle, Rectangle, Shape, ShapeKind, Star};

/// Base extent added to every derived dimension, and the seed size.
pub const DEFAULT_EXTENT: f64 = 5.0;

/// Number of outer points on a star figure.
pub const STAR_POINT_COUNT: u32 = 5;

/// Outer radius of a star as a multiple of its inner radius.
pub const STAR_OUTER_RATIO: f64 = 2.0;

/// The seed figure of `kind` placed at `anchor`.
pub fn seeded(kind: ShapeKind, anchor: Point) -> Shape {
    match kind {
        ShapeKind::Circle => Shape::Circle(Circle::new(anchor, DEFAULT_EXTENT)),
        ShapeKind::Rectangle => {
            Shape::Rectangle(Rectangle::new(anchor, DEFAULT_EXTENT, DEFAULT_EXTENT))
        }
        ShapeKind::Star => Shape::Star(Star::new(
            anchor,
            STAR_POINT_COUNT,
            DEFAULT_EXTENT,
            DEFAULT_EXTENT * STAR_OUTER_RATIO,
        )),
    }
}

/// The figure of `kind` anchored at `anchor` and stretched to `current`.
///
/// Circles and stars grow with the straight-line distance from the anchor,
/// rectangles with the signed per-axis offsets. With `current == anchor`
/// this reduces to [`seeded`].
pub fn derived(kind: ShapeKind, anchor: Point, current: Point) -> Shape {
    match kind {
        ShapeKind::Circle => {
            let radius = anchor.distance(current) + DEFAULT_EXTENT;
            Shape::Circle(Circle::new(anchor, radius))
        }
        ShapeKind::Rectangle => {
            let width = current.x - anchor.x + DEFAULT_EXTENT;
            let height = current.y - anchor.y + DEFAULT_EXTENT;
            Shape::Rectangle(Rectangle::new(anchor, width, height))
        }
        ShapeKind::Star => {
            let inner = anchor.distance(current) + DEFAULT_EXTENT;
            Shape::Star(Star::new(
                anchor,
                STAR_POINT_COUNT,
                inner,
                inner * STAR_OUTER_RATIO,
            ))
        }
    }
}
