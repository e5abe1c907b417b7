//! Canvas session tying selection, draft, and scene together.

use crate::draft::Draft;
use crate::input::{StageEvent, StageInput};
use crate::scene::Scene;
use crate::selection::{Selection, ToolKind};
use crate::shapes::{Shape, ShapeKind};

/// A drawing session over one scene.
///
/// The canvas owns the committed scene, the in-progress draft, and the
/// toolbar selection, and turns raw [`StageEvent`]s into changes to them.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    scene: Scene,
    draft: Draft,
    selection: Selection,
}

impl Canvas {
    /// Create a canvas with an empty scene and nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas over an existing scene.
    pub fn with_scene(scene: Scene) -> Self {
        Self {
            scene,
            draft: Draft::new(),
            selection: Selection::new(),
        }
    }

    /// Feed one pointer event through the drafting gesture.
    pub fn handle_event(&mut self, event: StageEvent) {
        match event {
            StageEvent::Press(input) => self.on_press(input),
            StageEvent::Move(input) => self.on_move(input),
            StageEvent::Release => self.on_release(),
        }
    }

    /// Start a draft at the press point.
    ///
    /// Ignored unless the shapes tool is active, and when the backend has no
    /// pointer position to offer.
    pub fn on_press(&mut self, input: StageInput) {
        if self.selection.tool() != Some(ToolKind::Shapes) {
            return;
        }
        let Some(anchor) = input.stage_position() else {
            return;
        };
        self.draft.begin(self.active_kind(), anchor);
    }

    /// Stretch the draft toward the pointer.
    ///
    /// Ignored while no draft is in progress or the pointer position is
    /// unknown. The kind is re-read from the selection on every move, so a
    /// toolbar change mid-drag takes effect immediately.
    pub fn on_move(&mut self, input: StageInput) {
        if !self.draft.is_active() {
            return;
        }
        let Some(current) = input.stage_position() else {
            return;
        };
        self.draft.update(self.active_kind(), current);
    }

    /// Commit the draft to the scene, if one is in progress.
    pub fn on_release(&mut self) {
        if let Some(shape) = self.draft.finish() {
            log::debug!("committing {:?} to scene", shape.kind());
            self.scene.append(shape);
        }
    }

    /// Activate `tool`, or deactivate it if already active.
    pub fn toggle_tool(&mut self, tool: ToolKind) {
        self.selection.toggle_tool(tool);
    }

    /// Activate `kind`, or deactivate it if already active.
    pub fn toggle_shape_kind(&mut self, kind: ShapeKind) {
        self.selection.toggle_shape_kind(kind);
    }

    /// The committed figures in z-order.
    pub fn shapes(&self) -> &[Shape] {
        self.scene.shapes()
    }

    /// The in-progress figure, for preview rendering.
    pub fn draft_shape(&self) -> Option<&Shape> {
        self.draft.preview()
    }

    /// The committed scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The toolbar selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether committed figures should respond to dragging.
    pub fn shapes_draggable(&self) -> bool {
        self.selection.tool() == Some(ToolKind::Cursor)
    }

    /// Whether the stage itself should respond to panning.
    pub fn stage_pannable(&self) -> bool {
        self.selection.tool() != Some(ToolKind::Shapes)
    }

    /// The figure kind new drafts use. Falls back to circle when the
    /// toolbar has no kind selected.
    fn active_kind(&self) -> ShapeKind {
        self.selection.shape_kind().unwrap_or(ShapeKind::Circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Vec2};

    fn drawing_canvas(kind: ShapeKind) -> Canvas {
        let mut canvas = Canvas::new();
        canvas.toggle_tool(ToolKind::Shapes);
        canvas.toggle_shape_kind(kind);
        canvas
    }

    fn at(x: f64, y: f64) -> StageInput {
        StageInput::new(Point::new(x, y), Vec2::ZERO)
    }

    #[test]
    fn test_full_gesture_commits_last_derived() {
        let mut canvas = drawing_canvas(ShapeKind::Rectangle);
        canvas.handle_event(StageEvent::Press(at(100.0, 100.0)));
        canvas.handle_event(StageEvent::Move(at(110.0, 100.0)));
        canvas.handle_event(StageEvent::Move(at(110.0, 110.0)));
        canvas.handle_event(StageEvent::Release);

        assert_eq!(canvas.shapes().len(), 1);
        match canvas.shapes()[0] {
            Shape::Rectangle(r) => {
                assert!((r.width - 15.0).abs() < f64::EPSILON);
                assert!((r.height - 15.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected shape: {other:?}"),
        }
        assert!(canvas.draft_shape().is_none());
    }

    #[test]
    fn test_press_ignored_without_shapes_tool() {
        let mut canvas = Canvas::new();
        canvas.toggle_tool(ToolKind::Cursor);
        canvas.handle_event(StageEvent::Press(at(10.0, 10.0)));
        assert!(canvas.draft_shape().is_none());

        canvas.handle_event(StageEvent::Release);
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn test_press_ignored_with_no_tool() {
        let mut canvas = Canvas::new();
        canvas.handle_event(StageEvent::Press(at(10.0, 10.0)));
        assert!(canvas.draft_shape().is_none());
    }

    #[test]
    fn test_circle_fallback_when_no_kind_selected() {
        let mut canvas = Canvas::new();
        canvas.toggle_tool(ToolKind::Shapes);
        canvas.handle_event(StageEvent::Press(at(20.0, 20.0)));
        canvas.handle_event(StageEvent::Release);

        assert!(matches!(canvas.shapes()[0], Shape::Circle(_)));
    }

    #[test]
    fn test_press_without_pointer_is_noop() {
        let mut canvas = drawing_canvas(ShapeKind::Circle);
        canvas.handle_event(StageEvent::Press(StageInput::without_pointer(Vec2::ZERO)));
        assert!(canvas.draft_shape().is_none());
    }

    #[test]
    fn test_move_without_pointer_freezes_draft() {
        let mut canvas = drawing_canvas(ShapeKind::Circle);
        canvas.handle_event(StageEvent::Press(at(0.0, 0.0)));
        canvas.handle_event(StageEvent::Move(at(3.0, 4.0)));
        canvas.handle_event(StageEvent::Move(StageInput::without_pointer(Vec2::ZERO)));

        match canvas.draft_shape() {
            Some(Shape::Circle(c)) => assert!((c.radius - 10.0).abs() < f64::EPSILON),
            other => panic!("unexpected preview: {other:?}"),
        }
    }

    #[test]
    fn test_move_without_press_is_noop() {
        let mut canvas = drawing_canvas(ShapeKind::Circle);
        canvas.handle_event(StageEvent::Move(at(50.0, 50.0)));
        assert!(canvas.draft_shape().is_none());
        canvas.handle_event(StageEvent::Release);
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn test_release_without_draft_is_noop() {
        let mut canvas = drawing_canvas(ShapeKind::Star);
        canvas.handle_event(StageEvent::Release);
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn test_stage_offset_shifts_anchor() {
        let mut canvas = drawing_canvas(ShapeKind::Circle);
        let offset = Vec2::new(40.0, 25.0);
        canvas.handle_event(StageEvent::Press(StageInput::new(
            Point::new(100.0, 100.0),
            offset,
        )));
        canvas.handle_event(StageEvent::Release);

        match canvas.shapes()[0] {
            Shape::Circle(c) => {
                assert!((c.center.x - 60.0).abs() < f64::EPSILON);
                assert!((c.center.y - 75.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn test_commits_stack_in_z_order() {
        let mut canvas = drawing_canvas(ShapeKind::Circle);
        for kind in [ShapeKind::Rectangle, ShapeKind::Star] {
            canvas.handle_event(StageEvent::Press(at(0.0, 0.0)));
            canvas.handle_event(StageEvent::Release);
            let active = canvas.selection().shape_kind().unwrap();
            canvas.toggle_shape_kind(active);
            canvas.toggle_shape_kind(kind);
        }
        canvas.handle_event(StageEvent::Press(at(10.0, 10.0)));
        canvas.handle_event(StageEvent::Release);

        assert_eq!(canvas.shapes().len(), 3);
        assert!(matches!(canvas.shapes()[0], Shape::Circle(_)));
        assert!(matches!(canvas.shapes()[1], Shape::Rectangle(_)));
        assert!(matches!(canvas.shapes()[2], Shape::Star(_)));
    }

    #[test]
    fn test_kind_toggle_mid_draft_reshapes() {
        let mut canvas = drawing_canvas(ShapeKind::Circle);
        canvas.handle_event(StageEvent::Press(at(10.0, 10.0)));

        canvas.toggle_shape_kind(ShapeKind::Circle);
        canvas.toggle_shape_kind(ShapeKind::Rectangle);
        canvas.handle_event(StageEvent::Move(at(20.0, 15.0)));
        canvas.handle_event(StageEvent::Release);

        match canvas.shapes()[0] {
            Shape::Rectangle(r) => {
                assert_eq!(r.position, Point::new(10.0, 10.0));
                assert!((r.width - 15.0).abs() < f64::EPSILON);
                assert!((r.height - 10.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn test_draggable_only_with_cursor_tool() {
        let mut canvas = Canvas::new();
        assert!(!canvas.shapes_draggable());

        canvas.toggle_tool(ToolKind::Cursor);
        assert!(canvas.shapes_draggable());

        canvas.toggle_tool(ToolKind::Cursor);
        canvas.toggle_tool(ToolKind::Shapes);
        assert!(!canvas.shapes_draggable());
    }

    #[test]
    fn test_pannable_unless_shapes_tool() {
        let mut canvas = Canvas::new();
        assert!(canvas.stage_pannable());

        canvas.toggle_tool(ToolKind::Shapes);
        assert!(!canvas.stage_pannable());

        canvas.toggle_tool(ToolKind::Shapes);
        canvas.toggle_tool(ToolKind::Cursor);
        assert!(canvas.stage_pannable());
    }

    #[test]
    fn test_click_without_drag_places_seed() {
        let mut canvas = drawing_canvas(ShapeKind::Star);
        canvas.handle_event(StageEvent::Press(at(30.0, 30.0)));
        canvas.handle_event(StageEvent::Release);

        match canvas.shapes()[0] {
            Shape::Star(s) => {
                assert_eq!(s.num_points, 5);
                assert!((s.inner_radius - 5.0).abs() < f64::EPSILON);
                assert!((s.outer_radius - 10.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn test_with_scene_preserves_existing_shapes() {
        let mut scene = Scene::new();
        scene.append(crate::geometry::seeded(ShapeKind::Circle, Point::ZERO));
        let canvas = Canvas::with_scene(scene);
        assert_eq!(canvas.shapes().len(), 1);
    }
}
