//! Freehand drawing shape.

use super::ShapeTrait;
use crate::geometry;
use crate::snap::SnapTarget;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand path (series of points in drawing order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    /// Points in the freehand path.
    pub points: Vec<Point>,
}

impl Freehand {
    /// Create a new empty freehand shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a path at a single point.
    pub fn starting_at(point: Point) -> Self {
        Self { points: vec![point] }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Add a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Straight-line distance from the first point to `point`.
    pub fn reach_to(&self, point: Point) -> f64 {
        self.points
            .first()
            .map_or(0.0, |&first| geometry::distance(first, point))
    }

    /// Total length along the path.
    pub fn path_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| geometry::distance(w[0], w[1]))
            .sum()
    }
}

impl ShapeTrait for Freehand {
    fn bounds(&self) -> Rect {
        let Some(&first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .fold(Rect::from_points(first, first), |acc, &p| acc.union_pt(p))
    }

    // Freehand strokes are not precision references.
    fn snap_targets(&self) -> Vec<SnapTarget> {
        Vec::new()
    }
}
