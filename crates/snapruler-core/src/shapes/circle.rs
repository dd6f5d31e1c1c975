//! Circle shape.

use super::ShapeTrait;
use crate::geometry;
use crate::snap::{SnapTarget, SnapTargetKind};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A circle given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius, never negative.
    #[serde(deserialize_with = "geometry::deserialize_non_negative")]
    radius: f64,
}

impl Circle {
    /// Create a new circle. Negative radii are clamped to zero.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl ShapeTrait for Circle {
    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn snap_targets(&self) -> Vec<SnapTarget> {
        vec![SnapTarget { point: self.center, kind: SnapTargetKind::Center }]
    }
}
