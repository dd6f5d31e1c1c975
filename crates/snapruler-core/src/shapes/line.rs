//! Line shape.

use super::ShapeTrait;
use crate::geometry;
use crate::snap::{SnapTarget, SnapTargetKind};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Zero-length line anchored at `point`.
    pub fn at(point: Point) -> Self {
        Self::new(point, point)
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        geometry::distance(self.start, self.end)
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Vector from start to end.
    pub fn vector(&self) -> Vec2 {
        self.end - self.start
    }

    /// Whether the line is too short to be worth keeping.
    pub fn is_degenerate(&self) -> bool {
        self.length() < geometry::EPSILON
    }

    /// Copy of this line with a different end point.
    pub fn with_end(self, end: Point) -> Self {
        Self { end, ..self }
    }
}

impl ShapeTrait for Line {
    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn snap_targets(&self) -> Vec<SnapTarget> {
        vec![
            SnapTarget { point: self.start, kind: SnapTargetKind::Endpoint },
            SnapTarget { point: self.end, kind: SnapTargetKind::Endpoint },
            SnapTarget { point: self.midpoint(), kind: SnapTargetKind::Midpoint },
        ]
    }
}
