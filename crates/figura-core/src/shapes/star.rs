//! Star shape.

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A star polygon anchored at its center.
///
/// Vertices alternate between `outer_radius` and `inner_radius`, starting
/// from the topmost outer point and proceeding clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Center point.
    pub center: Point,
    /// Number of outer points.
    pub num_points: u32,
    /// Radius of the inner vertices.
    pub inner_radius: f64,
    /// Radius of the outer vertices.
    pub outer_radius: f64,
}

impl Star {
    /// Create a new star.
    pub fn new(center: Point, num_points: u32, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            center,
            num_points,
            inner_radius,
            outer_radius,
        }
    }

    /// The polygon vertices, outer and inner alternating.
    pub fn vertices(&self) -> Vec<Point> {
        let step = PI / self.num_points as f64;
        (0..self.num_points * 2)
            .map(|i| {
                let radius = if i % 2 == 0 {
                    self.outer_radius
                } else {
                    self.inner_radius
                };
                let angle = -PI / 2.0 + step * i as f64;
                Point::new(
                    self.center.x + radius * angle.cos(),
                    self.center.y + radius * angle.sin(),
                )
            })
            .collect()
    }

    /// Get the bounding box.
    pub fn bounds(&self) -> Rect {
        self.vertices()
            .into_iter()
            .fold(Rect::from_points(self.center, self.center), |acc, v| {
                acc.union_pt(v)
            })
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let vertices = self.vertices();
        if let Some((first, rest)) = vertices.split_first() {
            path.move_to(*first);
            for v in rest {
                path.line_to(*v);
            }
            path.close_path();
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_creation() {
        let star = Star::new(Point::new(50.0, 50.0), 5, 10.0, 20.0);
        assert!((star.center.x - 50.0).abs() < f64::EPSILON);
        assert_eq!(star.num_points, 5);
        assert!((star.inner_radius - 10.0).abs() < f64::EPSILON);
        assert!((star.outer_radius - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vertex_count() {
        let star = Star::new(Point::ZERO, 5, 10.0, 20.0);
        assert_eq!(star.vertices().len(), 10);
    }

    #[test]
    fn test_first_vertex_is_top_outer() {
        let star = Star::new(Point::new(50.0, 50.0), 5, 10.0, 20.0);
        let first = star.vertices()[0];
        assert!((first.x - 50.0).abs() < 1e-9);
        assert!((first.y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_within_outer_radius() {
        let star = Star::new(Point::new(50.0, 50.0), 5, 10.0, 20.0);
        let bounds = star.bounds();
        assert!(bounds.x0 >= 30.0 - 1e-9);
        assert!(bounds.y0 >= 30.0 - 1e-9);
        assert!(bounds.x1 <= 70.0 + 1e-9);
        assert!(bounds.y1 <= 70.0 + 1e-9);
        // Top outer vertex touches the bound exactly.
        assert!((bounds.y0 - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_path_closed() {
        let star = Star::new(Point::ZERO, 5, 10.0, 20.0);
        let path = star.to_path();
        assert_eq!(path.elements().len(), 11);
    }
}
