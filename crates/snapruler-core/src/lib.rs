//! SnapRuler Core Library
//!
//! Geometry and snapping engine for a precision drawing canvas with virtual
//! drafting instruments (ruler, set squares, protractor).

pub mod camera;
pub mod canvas;
pub mod config;
pub mod geometry;
pub mod history;
pub mod input;
pub mod interaction;
pub mod shapes;
pub mod snap;
pub mod tools;

pub use camera::{Camera, ViewSettings};
pub use canvas::{Canvas, CanvasDocument, RenderableState};
pub use config::{ConfigError, ConfigResult, EngineConfig};
pub use history::{EditAction, History, HistorySettings};
pub use input::InputEvent;
pub use interaction::{Gesture, PrecisionHud};
pub use shapes::{Circle, Freehand, Line, Shape, ShapeTrait};
pub use snap::{
    SnapKind, SnapResult, SnapSettings, SnapTarget, SnapTargetKind, find_best_snap, snap_point,
};
pub use tools::{ConstraintEdge, ToolDefaults, ToolInstance, ToolKind};
