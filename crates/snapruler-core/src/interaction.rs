//! Drag gestures: freehand strokes and lines drawn against a tool edge.
//!
//! A gesture runs `Idle -> start -> continue* -> end -> Idle`. Calls that
//! arrive out of order (a `continue` or `end` with nothing in progress, or a
//! gesture the selected tool cannot draw) are ignored.

use crate::canvas::Canvas;
use crate::geometry;
use crate::shapes::{Freehand, Line, Shape};
use crate::snap;
use crate::tools::{ConstraintEdge, ToolInstance, ToolKind};
use kurbo::Point;

/// Ephemeral state between a gesture's start and end.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Pen stroke being recorded.
    Stroke(Freehand),
    /// Line being drawn against an edge captured at drag start.
    Constrained { line: Line, edge: ConstraintEdge },
}

/// Live measurement readout for the current drag.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecisionHud {
    pub text: String,
}

impl PrecisionHud {
    /// Length-only readout.
    pub fn length(length: f64) -> Self {
        Self {
            text: format!("Len: {:.1} px", length),
        }
    }

    /// Length and heading readout.
    pub fn length_and_angle(length: f64, degrees: f64) -> Self {
        Self {
            text: format!("Len: {:.1} px  ∠ {:.1}°", length, degrees),
        }
    }

    fn for_line(line: &Line, edge: &ConstraintEdge) -> Self {
        let heading = if line.is_degenerate() {
            geometry::heading_degrees(edge.direction)
        } else {
            geometry::heading_degrees(line.vector())
        };
        Self::length_and_angle(line.length(), heading)
    }
}

impl Canvas {
    /// Begin a pen stroke at `point`.
    pub fn start_stroke(&mut self, point: Point) {
        if self.selected_tool != ToolKind::Pen {
            log::debug!("start_stroke ignored: {:?} selected", self.selected_tool);
            return;
        }
        self.gesture = Gesture::Stroke(Freehand::starting_at(point));
        self.hud = Some(PrecisionHud::length(0.0));
    }

    /// Extend the pen stroke and refresh the length readout.
    pub fn continue_stroke(&mut self, point: Point) {
        let Gesture::Stroke(path) = &mut self.gesture else {
            log::debug!("continue_stroke ignored: no stroke in progress");
            return;
        };
        path.add_point(point);
        self.hud = Some(PrecisionHud::length(path.reach_to(point)));
    }

    /// Commit the pen stroke.
    pub fn end_stroke(&mut self) {
        if !matches!(self.gesture, Gesture::Stroke(_)) {
            log::debug!("end_stroke ignored: no stroke in progress");
            return;
        }
        if let Gesture::Stroke(path) = std::mem::take(&mut self.gesture) {
            self.commit_shape(Shape::Freehand(path));
        }
        self.hud = None;
    }

    /// Begin a line against the active ruler or set square.
    ///
    /// The constraint is captured here and held for the whole drag; moving
    /// or rotating the tool mid-drag does not affect the line.
    pub fn start_constrained_line(&mut self, point: Point) {
        let Some(tool) = self.active_tool else {
            log::debug!("start_constrained_line ignored: no instrument selected");
            return;
        };
        let snapped = self.snap_constrained(point);

        let (start, edge) = match tool {
            ToolInstance::Ruler(ruler) => {
                let edge = ruler.edge();
                (edge.project(snapped), edge)
            }
            ToolInstance::SetSquare(_) => {
                // edge choice follows the raw touch, not the snapped point
                let Some(nearest) = tool.select_nearest_edge(point) else {
                    return;
                };
                let edge = ConstraintEdge {
                    anchor: snapped,
                    direction: nearest.direction,
                };
                (snapped, edge)
            }
            ToolInstance::Protractor(_) => {
                log::debug!("start_constrained_line ignored: protractor has no edge");
                return;
            }
        };

        let line = Line::at(start);
        self.hud = Some(PrecisionHud::for_line(&line, &edge));
        self.gesture = Gesture::Constrained { line, edge };
    }

    /// Move the end of the line to the projection of `point` on the captured edge.
    pub fn continue_constrained_line(&mut self, point: Point) {
        if !matches!(self.gesture, Gesture::Constrained { .. }) {
            log::debug!("continue_constrained_line ignored: no line in progress");
            return;
        }
        let snapped = self.snap_constrained(point);
        if let Gesture::Constrained { line, edge } = &mut self.gesture {
            *line = line.with_end(edge.project(snapped));
            self.hud = Some(PrecisionHud::for_line(line, edge));
        }
    }

    /// Commit the line unless it has no length.
    pub fn end_constrained_line(&mut self) {
        if !matches!(self.gesture, Gesture::Constrained { .. }) {
            log::debug!("end_constrained_line ignored: no line in progress");
            return;
        }
        if let Gesture::Constrained { line, .. } = std::mem::take(&mut self.gesture) {
            if line.is_degenerate() {
                log::debug!("discarded zero-length line at {:?}", line.start);
            } else {
                self.commit_shape(Shape::Line(line));
            }
        }
        self.hud = None;
    }

    /// Drop the in-progress shape without committing it.
    pub fn cancel_gesture(&mut self) {
        if self.gesture != Gesture::Idle {
            log::debug!("gesture cancelled");
        }
        self.gesture = Gesture::Idle;
        self.hud = None;
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    /// The shape being drawn, if any.
    pub fn in_progress_shape(&self) -> Option<Shape> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Stroke(path) => Some(Shape::Freehand(path.clone())),
            Gesture::Constrained { line, .. } => Some(Shape::Line(*line)),
        }
    }

    /// The constrained line being drawn, if any.
    pub fn in_progress_line(&self) -> Option<Line> {
        match &self.gesture {
            Gesture::Constrained { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The edge the current line is held to, if any.
    pub fn frozen_edge(&self) -> Option<ConstraintEdge> {
        match &self.gesture {
            Gesture::Constrained { edge, .. } => Some(*edge),
            _ => None,
        }
    }

    fn snap_constrained(&self, point: Point) -> Point {
        if !self.snap_enabled {
            return point;
        }
        let radius = self.config.snap.radius_at(self.camera.zoom);
        snap::snap_to_features(point, self.document.shapes(), radius).point
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use kurbo::Vec2;

    fn assert_near(a: Point, b: Point) {
        assert!((a - b).hypot() < 1e-6, "{a:?} != {b:?}");
    }

    fn square_canvas() -> Canvas {
        let mut config = EngineConfig::default();
        config.tools.set_square_position = Point::new(0.0, 0.0);
        config.tools.set_square_45_angle = 0.0;
        let mut canvas = Canvas::with_config(config);
        canvas.select_tool(ToolKind::SetSquare45);
        canvas
    }

    #[test]
    fn test_pen_stroke_flow() {
        let mut canvas = Canvas::new();
        canvas.start_stroke(Point::new(0.0, 0.0));
        assert_eq!(canvas.hud_text(), Some("Len: 0.0 px"));

        canvas.continue_stroke(Point::new(3.0, 0.0));
        canvas.continue_stroke(Point::new(3.0, 4.0));
        assert_eq!(canvas.hud_text(), Some("Len: 5.0 px"));
        assert!(matches!(canvas.in_progress_shape(), Some(Shape::Freehand(ref p)) if p.len() == 3));

        canvas.end_stroke();
        assert!(canvas.hud_text().is_none());
        assert!(canvas.in_progress_shape().is_none());
        assert_eq!(canvas.shapes().len(), 1);
        assert!(canvas.document.can_undo());
    }

    #[test]
    fn test_ruler_line_is_projected() {
        let mut canvas = Canvas::new();
        canvas.select_tool(ToolKind::Ruler);

        canvas.start_constrained_line(Point::new(100.0, 510.0));
        assert_eq!(canvas.in_progress_line(), Some(Line::at(Point::new(100.0, 500.0))));

        canvas.continue_constrained_line(Point::new(300.0, 520.0));
        assert_eq!(canvas.hud_text(), Some("Len: 200.0 px  ∠ 0.0°"));

        canvas.end_constrained_line();
        assert_eq!(
            canvas.shapes(),
            &[Shape::Line(Line::new(Point::new(100.0, 500.0), Point::new(300.0, 500.0)))]
        );
        assert!(canvas.hud_text().is_none());
    }

    #[test]
    fn test_ruler_points_lie_on_edge() {
        let mut canvas = Canvas::new();
        canvas.select_tool(ToolKind::Ruler);
        canvas.rotate_active_tool(37.0);
        let edge = canvas.active_tool().unwrap().edge_directions()[0];

        canvas.start_constrained_line(Point::new(10.0, 900.0));
        canvas.continue_constrained_line(Point::new(-250.0, 33.0));
        let line = canvas.in_progress_line().unwrap();
        for p in [line.start, line.end] {
            assert!((p - edge.anchor).cross(edge.direction).abs() < 1e-6);
        }
    }

    #[test]
    fn test_set_square_uses_nearest_edge() {
        let mut canvas = square_canvas();
        canvas.start_constrained_line(Point::new(2.0, 100.0));
        let edge = canvas.frozen_edge().unwrap();
        let expected = Vec2::new(-1.0, 1.0) / 2f64.sqrt();
        assert!((edge.direction - expected).hypot() < 1e-9);
        assert_eq!(edge.anchor, Point::new(2.0, 100.0));

        canvas.continue_constrained_line(Point::new(50.0, 100.0));
        let line = canvas.in_progress_line().unwrap();
        assert_near(line.end, Point::new(26.0, 76.0));
        assert_eq!(canvas.hud_text(), Some("Len: 33.9 px  ∠ 315.0°"));

        canvas.end_constrained_line();
        assert_eq!(canvas.shapes().len(), 1);
        assert!(canvas.frozen_edge().is_none());
    }

    #[test]
    fn test_edge_frozen_while_tool_rotates() {
        let mut canvas = square_canvas();
        canvas.start_constrained_line(Point::new(2.0, 100.0));
        let before = canvas.frozen_edge().unwrap();

        canvas.rotate_active_tool(30.0);
        canvas.continue_constrained_line(Point::new(50.0, 100.0));
        assert_eq!(canvas.frozen_edge(), Some(before));
        assert_near(canvas.in_progress_line().unwrap().end, Point::new(26.0, 76.0));
    }

    #[test]
    fn test_zero_length_line_discarded() {
        let mut canvas = Canvas::new();
        canvas.select_tool(ToolKind::Ruler);
        canvas.start_constrained_line(Point::new(100.0, 500.0));
        canvas.end_constrained_line();
        assert!(canvas.shapes().is_empty());
        assert!(!canvas.document.can_undo());
        assert!(!canvas.is_dragging());
    }

    #[test]
    fn test_constrained_points_snap_to_features() {
        let mut canvas = Canvas::new();
        let reference = Line::new(Point::new(200.0, 400.0), Point::new(200.0, 500.0));
        canvas.commit_shape(Shape::Line(reference));
        canvas.select_tool(ToolKind::Ruler);

        // lands on the endpoint (200, 500), which is already on the ruler edge
        canvas.start_constrained_line(Point::new(205.0, 495.0));
        assert_eq!(canvas.in_progress_line().unwrap().start, Point::new(200.0, 500.0));

        canvas.toggle_snap();
        canvas.continue_constrained_line(Point::new(205.0, 495.0));
        assert_eq!(canvas.in_progress_line().unwrap().end, Point::new(205.0, 500.0));
    }

    #[test]
    fn test_out_of_order_calls_are_noops() {
        let mut canvas = Canvas::new();
        canvas.continue_stroke(Point::new(1.0, 1.0));
        canvas.end_stroke();
        canvas.continue_constrained_line(Point::new(1.0, 1.0));
        canvas.end_constrained_line();
        assert!(canvas.shapes().is_empty());
        assert!(canvas.hud_text().is_none());

        // pen cannot draw constrained lines and instruments cannot draw strokes
        canvas.start_constrained_line(Point::new(1.0, 1.0));
        assert!(!canvas.is_dragging());
        canvas.select_tool(ToolKind::Ruler);
        canvas.start_stroke(Point::new(1.0, 1.0));
        assert!(!canvas.is_dragging());

        canvas.select_tool(ToolKind::Protractor);
        canvas.start_constrained_line(Point::new(1.0, 1.0));
        assert!(!canvas.is_dragging());
    }

    #[test]
    fn test_mismatched_end_keeps_gesture() {
        let mut canvas = Canvas::new();
        canvas.start_stroke(Point::new(0.0, 0.0));
        canvas.end_constrained_line();
        assert!(canvas.is_dragging());
        canvas.end_stroke();
        assert_eq!(canvas.shapes().len(), 1);
    }

    #[test]
    fn test_select_tool_discards_gesture() {
        let mut canvas = Canvas::new();
        canvas.select_tool(ToolKind::Ruler);
        canvas.start_constrained_line(Point::new(0.0, 500.0));
        canvas.continue_constrained_line(Point::new(50.0, 500.0));
        canvas.select_tool(ToolKind::SetSquare3060);
        assert!(canvas.in_progress_line().is_none());
        assert!(canvas.hud_text().is_none());
        canvas.end_constrained_line();
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn test_cancel_gesture() {
        let mut canvas = Canvas::new();
        canvas.start_stroke(Point::new(0.0, 0.0));
        canvas.continue_stroke(Point::new(5.0, 0.0));
        canvas.cancel_gesture();
        assert!(canvas.in_progress_shape().is_none());
        canvas.end_stroke();
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn test_hud_formats() {
        assert_eq!(PrecisionHud::length(12.345).text, "Len: 12.3 px");
        assert_eq!(PrecisionHud::length_and_angle(10.0, 90.0).text, "Len: 10.0 px  ∠ 90.0°");
    }
}
