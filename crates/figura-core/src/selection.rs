//! Tool and figure-kind selection.

use serde::{Deserialize, Serialize};

use crate::shapes::ShapeKind;

/// The tools a user can pick from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    /// Select and drag committed figures.
    Cursor,
    /// Draw new figures.
    Shapes,
}

/// The active tool and figure kind, each independently toggleable.
///
/// Picking the value already active clears it back to `None`, so every
/// toolbar button acts as an on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    tool: Option<ToolKind>,
    shape_kind: Option<ShapeKind>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active tool, if any.
    pub fn tool(&self) -> Option<ToolKind> {
        self.tool
    }

    /// The active figure kind, if any.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        self.shape_kind
    }

    /// Activate `tool`, or deactivate it if it is already active.
    pub fn toggle_tool(&mut self, tool: ToolKind) {
        self.tool = if self.tool == Some(tool) {
            None
        } else {
            Some(tool)
        };
    }

    /// Activate `kind`, or deactivate it if it is already active.
    pub fn toggle_shape_kind(&mut self, kind: ShapeKind) {
        self.shape_kind = if self.shape_kind == Some(kind) {
            None
        } else {
            Some(kind)
        };
    }
}
