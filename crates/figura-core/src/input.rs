//! Pointer input in stage coordinates.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A pointer sample paired with the stage's pan offset.
///
/// The pointer position is in screen coordinates and may be absent, as
/// backends report no position for pointers that have left the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageInput {
    /// Pointer position in screen coordinates, if known.
    pub pointer: Option<Point>,
    /// How far the stage has been panned from the origin.
    pub stage_offset: Vec2,
}

impl StageInput {
    /// Input with a known pointer position.
    pub fn new(pointer: Point, stage_offset: Vec2) -> Self {
        Self {
            pointer: Some(pointer),
            stage_offset,
        }
    }

    /// Input without a pointer position.
    pub fn without_pointer(stage_offset: Vec2) -> Self {
        Self {
            pointer: None,
            stage_offset,
        }
    }

    /// The pointer position translated into stage coordinates.
    pub fn stage_position(&self) -> Option<Point> {
        self.pointer.map(|p| p - self.stage_offset)
    }
}

/// A pointer event delivered to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StageEvent {
    /// The pointer was pressed.
    Press(StageInput),
    /// The pointer moved.
    Move(StageInput),
    /// The pointer was released.
    Release,
}
