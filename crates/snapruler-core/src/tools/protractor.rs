//! Protractor instrument.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pose of a protractor. It has no drawing edge; it can only be moved and rotated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Protractor {
    /// Center of the baseline.
    pub position: Point,
    /// Rotation of the baseline, in degrees.
    pub rotation_degrees: f64,
}

impl Protractor {
    pub fn new(position: Point, rotation_degrees: f64) -> Self {
        Self {
            position,
            rotation_degrees,
        }
    }

    /// Copy of this protractor centered on `position`.
    pub fn with_position(self, position: Point) -> Self {
        Self { position, ..self }
    }

    /// Copy of this protractor turned by `delta_degrees`.
    pub fn rotated(self, delta_degrees: f64) -> Self {
        Self {
            rotation_degrees: self.rotation_degrees + delta_degrees,
            ..self
        }
    }
}
