//! Canvas document and state management.

use crate::camera::Camera;
use crate::config::EngineConfig;
use crate::history::{EditAction, History};
use crate::interaction::{Gesture, PrecisionHud};
use crate::shapes::{self, Shape};
use crate::snap;
use crate::tools::{ToolInstance, ToolKind};
use kurbo::{Affine, Point, Rect, Vec2};
use serde::Serialize;
use uuid::Uuid;

/// The committed shapes of a drawing and their edit history.
///
/// Shapes are kept in insertion order, which is also the redraw order.
/// Edits only ever happen at the tail.
#[derive(Debug, Clone)]
pub struct CanvasDocument {
    /// Unique document identifier.
    pub id: String,
    shapes: Vec<Shape>,
    history: History,
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::with_history_limit(crate::history::DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new empty document keeping at most `limit` undo steps.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            shapes: Vec::new(),
            history: History::new(limit),
        }
    }

    /// Append a shape and record it for undo.
    pub fn commit_shape(&mut self, shape: Shape) {
        log::debug!("commit {} (#{})", shape.kind_name(), self.shapes.len());
        self.shapes.push(shape.clone());
        self.history.record(EditAction::AppendShape(shape));
    }

    /// Remove every shape as one undoable step. No-op when already empty.
    pub fn clear(&mut self) {
        if self.shapes.is_empty() {
            return;
        }
        let removed = std::mem::take(&mut self.shapes);
        log::debug!("cleared {} shapes", removed.len());
        self.history.record(EditAction::Clear(removed));
    }

    /// Undo the last change.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.shapes)
    }

    /// Redo the last undone change.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.shapes)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Committed shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get the bounding box of all shapes.
    pub fn bounds(&self) -> Option<Rect> {
        shapes::combined_bounds(&self.shapes)
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

/// Read-only snapshot of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderableState {
    pub shapes: Vec<Shape>,
    pub in_progress: Option<Shape>,
    pub selected_tool: ToolKind,
    pub tool: Option<ToolInstance>,
    pub tool_outline: Vec<Point>,
    pub snap_enabled: bool,
    pub hud: Option<String>,
    pub camera_offset: Vec2,
    pub zoom: f64,
    /// World-to-screen transform of the current view.
    pub view_transform: Affine,
    pub grid_spacing: f64,
    pub content_bounds: Option<Rect>,
}

/// The drafting session: document, selected instrument, view and gesture state.
///
/// This is the single mutable root; the selected tool kind and the active
/// instance are only ever replaced together.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// The committed drawing.
    pub document: CanvasDocument,
    /// View transform.
    pub camera: Camera,
    pub(crate) config: EngineConfig,
    pub(crate) selected_tool: ToolKind,
    pub(crate) active_tool: Option<ToolInstance>,
    pub(crate) snap_enabled: bool,
    pub(crate) gesture: Gesture,
    pub(crate) hud: Option<PrecisionHud>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a canvas with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a canvas from a configuration. The pen starts selected.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            document: CanvasDocument::with_history_limit(config.history.limit),
            camera: Camera::from_settings(&config.view),
            selected_tool: ToolKind::Pen,
            active_tool: None,
            snap_enabled: config.snap.enabled,
            gesture: Gesture::Idle,
            hud: None,
            config,
        }
    }

    /// The configuration this canvas was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Select a tool, replacing the active instance with the tool's default pose.
    ///
    /// Any gesture in progress is discarded.
    pub fn select_tool(&mut self, kind: ToolKind) {
        self.cancel_gesture();
        self.selected_tool = kind;
        self.active_tool = ToolInstance::default_for(kind, &self.config.tools);
        log::debug!("selected tool {:?}", kind);
    }

    /// Currently selected tool.
    pub fn selected_tool(&self) -> ToolKind {
        self.selected_tool
    }

    /// Pose of the selected instrument (none for the pen).
    pub fn active_tool(&self) -> Option<&ToolInstance> {
        self.active_tool.as_ref()
    }

    /// Shift the active instrument. No-op for the pen.
    pub fn move_active_tool(&mut self, delta: Vec2) {
        if let Some(tool) = self.active_tool {
            self.active_tool = Some(tool.translated(delta));
        }
    }

    /// Rotate the active instrument. No-op for the pen.
    pub fn rotate_active_tool(&mut self, delta_degrees: f64) {
        if let Some(tool) = self.active_tool {
            self.active_tool = Some(tool.rotated(delta_degrees));
        }
    }

    /// Handle a tap at `point` under the given view transform.
    ///
    /// The view is adopted by the camera; with the ruler selected the ruler
    /// is moved to the (snapped, when enabled) tap location.
    pub fn on_tap(&mut self, point: Point, view_offset: Vec2, view_scale: f64) {
        self.camera.set_view(view_offset, view_scale);

        let Some(ToolInstance::Ruler(_)) = self.active_tool else {
            return;
        };
        let target = if self.snap_enabled {
            let shapes = self.document.shapes();
            snap::snap_point(point, shapes, self.camera.zoom, &self.config.snap).point
        } else {
            point
        };
        self.active_tool = self.active_tool.map(|tool| tool.with_position(target));
        log::debug!("ruler moved to {:?}", target);
    }

    /// Flip the snap toggle.
    pub fn toggle_snap(&mut self) {
        self.snap_enabled = !self.snap_enabled;
        log::debug!("snap {}", if self.snap_enabled { "enabled" } else { "disabled" });
    }

    /// Whether snapping is on.
    pub fn snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    /// Commit a finished shape to the document.
    pub fn commit_shape(&mut self, shape: Shape) {
        self.document.commit_shape(shape);
    }

    /// Undo the last edit. No-op when there is nothing to undo.
    pub fn undo(&mut self) {
        if self.document.undo() {
            log::debug!("undo ({} shapes)", self.document.len());
        }
    }

    /// Redo the last undone edit. No-op when there is nothing to redo.
    pub fn redo(&mut self) {
        if self.document.redo() {
            log::debug!("redo ({} shapes)", self.document.len());
        }
    }

    /// Remove every committed shape as one undoable step.
    pub fn clear(&mut self) {
        self.document.clear();
    }

    /// Committed shapes in z-order.
    pub fn shapes(&self) -> &[Shape] {
        self.document.shapes()
    }

    /// Current precision readout, if a gesture is producing one.
    pub fn hud_text(&self) -> Option<&str> {
        self.hud.as_ref().map(|hud| hud.text.as_str())
    }

    /// Owned snapshot for renderers and exporters.
    pub fn renderable_state(&self) -> RenderableState {
        RenderableState {
            shapes: self.document.shapes().to_vec(),
            in_progress: self.in_progress_shape(),
            selected_tool: self.selected_tool,
            tool: self.active_tool,
            tool_outline: self.active_tool.map(|t| t.outline()).unwrap_or_default(),
            snap_enabled: self.snap_enabled,
            hud: self.hud_text().map(str::to_owned),
            camera_offset: self.camera.offset,
            zoom: self.camera.zoom,
            view_transform: self.camera.transform(),
            grid_spacing: self.config.view.grid_spacing,
            content_bounds: self.document.bounds(),
        }
    }
}
