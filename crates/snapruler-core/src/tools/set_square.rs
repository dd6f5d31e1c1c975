//! Set-square instruments (45-45-90 and 30-60-90 triangles).

use super::ConstraintEdge;
use crate::geometry;
use kurbo::{Line as KurboLine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Default leg reference size.
pub const DEFAULT_SET_SQUARE_SIZE: f64 = 200.0;

/// Which triangle the set square is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetSquareKind {
    /// Equal legs, acute angles of 45°.
    Isosceles45,
    /// Legs in ratio √3 : 1, acute angles of 30° and 60°.
    ThirtySixty,
}

impl SetSquareKind {
    /// Length of the local-y leg relative to the local-x leg.
    pub fn leg_ratio(self) -> f64 {
        match self {
            SetSquareKind::Isosceles45 => 1.0,
            SetSquareKind::ThirtySixty => 1.0 / 3.0_f64.sqrt(),
        }
    }
}

/// Pose of a set square. The right angle sits at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetSquare {
    pub kind: SetSquareKind,
    /// Right-angle vertex.
    pub position: Point,
    /// Rotation of the triangle, in degrees.
    pub angle_degrees: f64,
    /// Length of the local-x leg.
    #[serde(deserialize_with = "geometry::deserialize_non_negative")]
    size: f64,
}

impl SetSquare {
    pub fn new(kind: SetSquareKind, position: Point, angle_degrees: f64, size: f64) -> Self {
        Self {
            kind,
            position,
            angle_degrees,
            size: size.max(0.0),
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Copy of this set square with its right angle at `position`.
    pub fn with_position(self, position: Point) -> Self {
        Self { position, ..self }
    }

    /// Copy of this set square turned by `delta_degrees`.
    pub fn rotated(self, delta_degrees: f64) -> Self {
        Self {
            angle_degrees: self.angle_degrees + delta_degrees,
            ..self
        }
    }

    /// World-space vertices `[A, B, C]`: right angle, end of x leg, end of y leg.
    pub fn vertices(&self) -> [Point; 3] {
        let locals = [
            Vec2::ZERO,
            Vec2::new(self.size, 0.0),
            Vec2::new(0.0, self.size * self.kind.leg_ratio()),
        ];
        locals.map(|local| geometry::place(self.position, local, self.angle_degrees))
    }

    /// Sides in enumeration order A→B, B→C, C→A.
    pub fn sides(&self) -> [KurboLine; 3] {
        let [a, b, c] = self.vertices();
        [KurboLine::new(a, b), KurboLine::new(b, c), KurboLine::new(c, a)]
    }

    /// One constraint per side, anchored at the side's start vertex.
    pub fn edges(&self) -> [ConstraintEdge; 3] {
        self.sides().map(|side| ConstraintEdge {
            anchor: side.p0,
            direction: geometry::normalize(side.p1 - side.p0),
        })
    }
}
