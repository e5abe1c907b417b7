//! The draft-figure state machine.
//!
//! A draft is the single in-progress figure between a pointer press and its
//! release. While active it holds the press anchor and the figure derived
//! from the latest pointer position; finishing yields that figure and
//! returns the machine to idle.

use kurbo::Point;

use crate::geometry;
use crate::shapes::{Shape, ShapeKind};

/// The two phases of the drafting gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DraftState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Active {
        /// Where the press landed, in stage coordinates.
        anchor: Point,
        /// The figure derived from the most recent pointer position.
        shape: Shape,
    },
}

/// Drives a draft figure through press, move, and release.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    state: DraftState,
}

impl Draft {
    /// Create an idle draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft of `kind` anchored at `anchor`, seeded at its default
    /// size. Replaces any draft already in progress.
    pub fn begin(&mut self, kind: ShapeKind, anchor: Point) {
        log::debug!("draft begin: {kind:?} at ({}, {})", anchor.x, anchor.y);
        self.state = DraftState::Active {
            anchor,
            shape: geometry::seeded(kind, anchor),
        };
    }

    /// Re-derive the draft figure for the pointer at `current`.
    ///
    /// The anchor never moves. `kind` is taken fresh on every call, so a
    /// selection change mid-drag reshapes the draft in place. Does nothing
    /// while idle.
    pub fn update(&mut self, kind: ShapeKind, current: Point) {
        if let DraftState::Active { anchor, shape } = &mut self.state {
            *shape = geometry::derived(kind, *anchor, current);
        }
    }

    /// End the draft, returning the figure it last held.
    ///
    /// Returns `None` when no draft was in progress. The machine is idle
    /// afterwards either way.
    pub fn finish(&mut self) -> Option<Shape> {
        match std::mem::take(&mut self.state) {
            DraftState::Idle => None,
            DraftState::Active { shape, .. } => Some(shape),
        }
    }

    /// Whether a draft is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, DraftState::Active { .. })
    }

    /// The in-progress figure, for preview rendering.
    pub fn preview(&self) -> Option<&Shape> {
        match &self.state {
            DraftState::Idle => None,
            DraftState::Active { shape, .. } => Some(shape),
        }
    }

    /// The current state.
    pub fn state(&self) -> &DraftState {
        &self.state
    }
}
