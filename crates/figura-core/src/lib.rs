//! Figura Core Library
//!
//! Platform-agnostic state and geometry for the Figura drawing surface: the
//! draft-figure state machine, its dimension derivation rules, and the scene
//! of committed shapes. Rendering and raw event handling live outside this
//! crate and talk to it through [`input::StageEvent`] and the shape geometry
//! accessors.

pub mod canvas;
pub mod draft;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod selection;
pub mod shapes;

pub use canvas::Canvas;
pub use draft::{Draft, DraftState};
pub use error::SceneError;
pub use input::{StageEvent, StageInput};
pub use scene::Scene;
pub use selection::{Selection, ToolKind};
pub use shapes::{Circle, Rectangle, Shape, ShapeKind, Star};
