//! Shape definitions for the drafting canvas.

mod circle;
mod freehand;
mod line;

pub use circle::Circle;
pub use freehand::Freehand;
pub use line::Line;

use crate::snap::SnapTarget;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Common behaviour for all shape variants.
pub trait ShapeTrait {
    /// Get the bounding box in world coordinates.
    fn bounds(&self) -> Rect;

    /// Salient points other strokes can snap to, in enumeration order.
    fn snap_targets(&self) -> Vec<SnapTarget>;
}

/// A committed or in-progress drawing primitive.
///
/// Values are never edited once they are part of a document; a changed
/// shape is a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Circle(Circle),
    Freehand(Freehand),
}

impl Shape {
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Line(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Freehand(s) => s.bounds(),
        }
    }

    pub fn snap_targets(&self) -> Vec<SnapTarget> {
        match self {
            Shape::Line(s) => s.snap_targets(),
            Shape::Circle(s) => s.snap_targets(),
            Shape::Freehand(s) => s.snap_targets(),
        }
    }

    /// Short lowercase name of the variant, for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Circle(_) => "circle",
            Shape::Freehand(_) => "freehand",
        }
    }
}

/// Union of the bounds of every shape, or `None` for an empty slice.
pub fn combined_bounds(shapes: &[Shape]) -> Option<Rect> {
    shapes
        .iter()
        .map(Shape::bounds)
        .reduce(|acc, bounds| acc.union(bounds))
}
