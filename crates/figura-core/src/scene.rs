//! The scene of committed figures.

use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::shapes::Shape;

/// An append-only collection of committed figures.
///
/// Insertion order is z-order: later figures render above earlier ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a figure on top of the existing ones.
    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// The figures in z-order, bottom first.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Iterate the figures in z-order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Number of committed figures.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the scene holds no figures.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Serialize the scene to JSON.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a scene from JSON.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }
}
