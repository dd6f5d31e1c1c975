//! Straight ruler instrument.

use super::ConstraintEdge;
use crate::geometry;
use kurbo::{Line as KurboLine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pose of a ruler: a straight edge centered on `position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ruler {
    /// Center of the drawing edge.
    pub position: Point,
    /// Rotation of the edge from horizontal, in degrees.
    pub rotation_degrees: f64,
    /// Length of the drawing edge.
    #[serde(deserialize_with = "geometry::deserialize_non_negative")]
    length: f64,
    /// Width of the ruler body.
    #[serde(deserialize_with = "geometry::deserialize_non_negative")]
    thickness: f64,
}

impl Ruler {
    /// Create a ruler; negative length or thickness is clamped to zero.
    pub fn new(position: Point, rotation_degrees: f64, length: f64, thickness: f64) -> Self {
        Self {
            position,
            rotation_degrees,
            length: length.max(0.0),
            thickness: thickness.max(0.0),
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Copy of this ruler centered on `position`.
    pub fn with_position(self, position: Point) -> Self {
        Self { position, ..self }
    }

    /// Copy of this ruler turned by `delta_degrees`.
    pub fn rotated(self, delta_degrees: f64) -> Self {
        Self {
            rotation_degrees: self.rotation_degrees + delta_degrees,
            ..self
        }
    }

    /// Unit vector along the edge.
    pub fn direction(&self) -> Vec2 {
        geometry::direction_from_degrees(self.rotation_degrees)
    }

    /// The constraint line the ruler imposes.
    pub fn edge(&self) -> ConstraintEdge {
        ConstraintEdge {
            anchor: self.position,
            direction: self.direction(),
        }
    }

    /// Finite drawn extent of the edge.
    pub fn segment(&self) -> KurboLine {
        let half = self.direction() * (self.length / 2.0);
        KurboLine::new(self.position - half, self.position + half)
    }

    /// Corners of the ruler body, starting at the left end of the top side.
    pub fn outline(&self) -> Vec<Point> {
        let (hl, ht) = (self.length / 2.0, self.thickness / 2.0);
        [(-hl, -ht), (hl, -ht), (hl, ht), (-hl, ht)]
            .into_iter()
            .map(|(x, y)| geometry::place(self.position, Vec2::new(x, y), self.rotation_degrees))
            .collect()
    }
}
