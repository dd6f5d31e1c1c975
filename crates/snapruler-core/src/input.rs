//! Host input events and their routing onto the canvas.
//!
//! Positions are world coordinates; the host applies its own view
//! transform before emitting events.

use crate::canvas::Canvas;
use crate::tools::ToolKind;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

fn unit_zoom() -> f64 {
    1.0
}

fn single_pointer() -> u32 {
    1
}

/// A decoded gesture or command from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    DragStart {
        position: Point,
    },
    DragMove {
        position: Point,
    },
    DragEnd,
    Tap {
        position: Point,
    },
    /// Toggles snapping.
    LongPress {
        position: Point,
    },
    /// Pan/pinch/rotate update.
    Transform {
        #[serde(default)]
        pan: Vec2,
        /// Multiplicative zoom change.
        #[serde(default = "unit_zoom")]
        zoom: f64,
        #[serde(default)]
        rotation_degrees: f64,
        #[serde(default = "single_pointer")]
        pointer_count: u32,
    },
    SelectTool(ToolKind),
    MoveTool {
        delta: Vec2,
    },
    RotateTool {
        degrees: f64,
    },
    Undo,
    Redo,
    Clear,
}

impl Canvas {
    /// Route one input event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        log::trace!("event {:?}", event);
        match *event {
            InputEvent::DragStart { position } => match self.selected_tool {
                ToolKind::Pen => self.start_stroke(position),
                kind if kind.draws_constrained() => self.start_constrained_line(position),
                _ => {}
            },
            InputEvent::DragMove { position } => match self.selected_tool {
                ToolKind::Pen => self.continue_stroke(position),
                kind if kind.draws_constrained() => self.continue_constrained_line(position),
                _ => {}
            },
            InputEvent::DragEnd => match self.selected_tool {
                ToolKind::Pen => self.end_stroke(),
                kind if kind.draws_constrained() => self.end_constrained_line(),
                _ => {}
            },
            InputEvent::Tap { position } => {
                let (offset, zoom) = (self.camera.offset, self.camera.zoom);
                self.on_tap(position, offset, zoom);
            }
            InputEvent::LongPress { .. } => self.toggle_snap(),
            InputEvent::Transform {
                pan,
                zoom,
                rotation_degrees,
                pointer_count,
            } => self.apply_transform(pan, zoom, rotation_degrees, pointer_count),
            InputEvent::SelectTool(kind) => self.select_tool(kind),
            InputEvent::MoveTool { delta } => self.move_active_tool(delta),
            InputEvent::RotateTool { degrees } => self.rotate_active_tool(degrees),
            InputEvent::Undo => self.undo(),
            InputEvent::Redo => self.redo(),
            InputEvent::Clear => self.clear(),
        }
    }

    /// Apply a pan/pinch/rotate update.
    ///
    /// The view always pans and zooms. Only multi-pointer gestures rotate
    /// the active tool.
    pub fn apply_transform(
        &mut self,
        pan: Vec2,
        zoom: f64,
        rotation_degrees: f64,
        pointer_count: u32,
    ) {
        self.camera.pan(pan);
        self.camera.zoom_by(zoom);
        if pointer_count >= 2 && rotation_degrees != 0.0 {
            self.rotate_active_tool(rotation_degrees);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Line, Shape};

    fn drag(canvas: &mut Canvas, points: &[Point]) {
        let (first, rest) = points.split_first().unwrap();
        canvas.handle_event(&InputEvent::DragStart { position: *first });
        for &p in rest {
            canvas.handle_event(&InputEvent::DragMove { position: p });
        }
        canvas.handle_event(&InputEvent::DragEnd);
    }

    #[test]
    fn test_drag_routes_by_tool() {
        let mut canvas = Canvas::new();
        drag(&mut canvas, &[Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        assert!(matches!(canvas.shapes()[0], Shape::Freehand(_)));

        canvas.handle_event(&InputEvent::SelectTool(ToolKind::Ruler));
        drag(&mut canvas, &[Point::new(0.0, 450.0), Point::new(80.0, 460.0)]);
        assert_eq!(
            canvas.shapes()[1],
            Shape::Line(Line::new(Point::new(0.0, 500.0), Point::new(80.0, 500.0)))
        );

        canvas.handle_event(&InputEvent::SelectTool(ToolKind::Protractor));
        drag(&mut canvas, &[Point::new(0.0, 0.0), Point::new(50.0, 0.0)]);
        assert_eq!(canvas.shapes().len(), 2);
    }

    #[test]
    fn test_long_press_toggles_snap() {
        let mut canvas = Canvas::new();
        canvas.handle_event(&InputEvent::LongPress { position: Point::ZERO });
        assert!(!canvas.snap_enabled());
        canvas.handle_event(&InputEvent::LongPress { position: Point::ZERO });
        assert!(canvas.snap_enabled());
    }

    #[test]
    fn test_tap_keeps_camera_view() {
        let mut canvas = Canvas::new();
        canvas.handle_event(&InputEvent::Transform {
            pan: Vec2::new(10.0, 0.0),
            zoom: 2.0,
            rotation_degrees: 0.0,
            pointer_count: 2,
        });
        canvas.handle_event(&InputEvent::SelectTool(ToolKind::Ruler));
        canvas.handle_event(&InputEvent::Tap {
            position: Point::new(40.0, 10.0),
        });
        assert_eq!(canvas.camera.offset, Vec2::new(10.0, 0.0));
        assert_eq!(canvas.camera.zoom, 2.0);
        assert_eq!(canvas.active_tool().unwrap().position(), Point::new(40.0, 10.0));
    }

    #[test]
    fn test_rotation_needs_two_pointers() {
        let mut canvas = Canvas::new();
        canvas.select_tool(ToolKind::Ruler);
        canvas.apply_transform(Vec2::ZERO, 1.0, 15.0, 1);
        assert_eq!(canvas.active_tool().unwrap().rotation_degrees(), 0.0);
        canvas.apply_transform(Vec2::ZERO, 1.0, 15.0, 2);
        assert_eq!(canvas.active_tool().unwrap().rotation_degrees(), 15.0);
    }

    #[test]
    fn test_transform_defaults_from_json() {
        let json = r#"{ "Transform": { "rotation_degrees": 5.0 } }"#;
        let event: InputEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            InputEvent::Transform {
                pan: Vec2::ZERO,
                zoom: 1.0,
                rotation_degrees: 5.0,
                pointer_count: 1,
            }
        );
    }

    #[test]
    fn test_event_json_forms() {
        let events: Vec<InputEvent> = serde_json::from_str(
            r#"[
                { "SelectTool": "SetSquare3060" },
                { "DragStart": { "position": { "x": 1.0, "y": 2.0 } } },
                "DragEnd",
                { "MoveTool": { "delta": { "x": 3.0, "y": 0.0 } } },
                "Undo"
            ]"#,
        )
        .unwrap();
        assert_eq!(events[0], InputEvent::SelectTool(ToolKind::SetSquare3060));
        assert_eq!(events[2], InputEvent::DragEnd);
        assert_eq!(events[4], InputEvent::Undo);
    }

    #[test]
    fn test_undo_redo_clear_events() {
        let mut canvas = Canvas::new();
        drag(&mut canvas, &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        canvas.handle_event(&InputEvent::Clear);
        assert!(canvas.shapes().is_empty());
        canvas.handle_event(&InputEvent::Undo);
        assert_eq!(canvas.shapes().len(), 1);
        canvas.handle_event(&InputEvent::Redo);
        assert!(canvas.shapes().is_empty());
    }
}
