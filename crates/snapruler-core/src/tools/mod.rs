//! Drafting instruments: tool kinds, instance poses and their constraint edges.

mod protractor;
mod ruler;
mod set_square;

pub use protractor::Protractor;
pub use ruler::Ruler;
pub use set_square::{DEFAULT_SET_SQUARE_SIZE, SetSquare, SetSquareKind};

use crate::geometry;
use kurbo::{Line as KurboLine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Pen,
    Ruler,
    Protractor,
    SetSquare45,
    SetSquare3060,
}

impl ToolKind {
    /// Whether drags with this tool produce constrained lines.
    pub fn draws_constrained(self) -> bool {
        matches!(self, ToolKind::Ruler | ToolKind::SetSquare45 | ToolKind::SetSquare3060)
    }
}

/// A line a tool forces strokes onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstraintEdge {
    /// A point on the line.
    pub anchor: Point,
    /// Unit direction of the line.
    pub direction: Vec2,
}

impl ConstraintEdge {
    /// Orthogonal projection of `point` onto this (infinite) line.
    pub fn project(&self, point: Point) -> Point {
        geometry::project_point_onto_direction(point, self.anchor, self.direction)
    }
}

/// Starting poses for freshly selected tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolDefaults {
    pub ruler_position: Point,
    pub ruler_rotation_degrees: f64,
    pub ruler_length: f64,
    pub ruler_thickness: f64,
    pub protractor_position: Point,
    pub set_square_position: Point,
    pub set_square_size: f64,
    pub set_square_45_angle: f64,
    pub set_square_30_60_angle: f64,
}

impl Default for ToolDefaults {
    fn default() -> Self {
        Self {
            ruler_position: Point::new(500.0, 500.0),
            ruler_rotation_degrees: 0.0,
            ruler_length: 400.0,
            ruler_thickness: 20.0,
            protractor_position: Point::new(500.0, 500.0),
            set_square_position: Point::new(350.0, 200.0),
            set_square_size: DEFAULT_SET_SQUARE_SIZE,
            set_square_45_angle: 45.0,
            set_square_30_60_angle: 30.0,
        }
    }
}

/// The live pose of the selected instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ToolInstance {
    Ruler(Ruler),
    Protractor(Protractor),
    SetSquare(SetSquare),
}

impl ToolInstance {
    /// Fresh instance for a tool kind, or `None` for the pen.
    pub fn default_for(kind: ToolKind, defaults: &ToolDefaults) -> Option<Self> {
        match kind {
            ToolKind::Pen => None,
            ToolKind::Ruler => Some(ToolInstance::Ruler(Ruler::new(
                defaults.ruler_position,
                defaults.ruler_rotation_degrees,
                defaults.ruler_length,
                defaults.ruler_thickness,
            ))),
            ToolKind::Protractor => Some(ToolInstance::Protractor(Protractor::new(
                defaults.protractor_position,
                0.0,
            ))),
            ToolKind::SetSquare45 => Some(ToolInstance::SetSquare(SetSquare::new(
                SetSquareKind::Isosceles45,
                defaults.set_square_position,
                defaults.set_square_45_angle,
                defaults.set_square_size,
            ))),
            ToolKind::SetSquare3060 => Some(ToolInstance::SetSquare(SetSquare::new(
                SetSquareKind::ThirtySixty,
                defaults.set_square_position,
                defaults.set_square_30_60_angle,
                defaults.set_square_size,
            ))),
        }
    }

    /// The tool kind this instance belongs to.
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolInstance::Ruler(_) => ToolKind::Ruler,
            ToolInstance::Protractor(_) => ToolKind::Protractor,
            ToolInstance::SetSquare(s) => match s.kind {
                SetSquareKind::Isosceles45 => ToolKind::SetSquare45,
                SetSquareKind::ThirtySixty => ToolKind::SetSquare3060,
            },
        }
    }

    /// Reference point of the instrument.
    pub fn position(&self) -> Point {
        match self {
            ToolInstance::Ruler(r) => r.position,
            ToolInstance::Protractor(p) => p.position,
            ToolInstance::SetSquare(s) => s.position,
        }
    }

    /// Current rotation in degrees.
    pub fn rotation_degrees(&self) -> f64 {
        match self {
            ToolInstance::Ruler(r) => r.rotation_degrees,
            ToolInstance::Protractor(p) => p.rotation_degrees,
            ToolInstance::SetSquare(s) => s.angle_degrees,
        }
    }

    /// Copy of this instance moved to `position`.
    pub fn with_position(self, position: Point) -> Self {
        match self {
            ToolInstance::Ruler(r) => ToolInstance::Ruler(r.with_position(position)),
            ToolInstance::Protractor(p) => ToolInstance::Protractor(p.with_position(position)),
            ToolInstance::SetSquare(s) => ToolInstance::SetSquare(s.with_position(position)),
        }
    }

    /// Copy of this instance shifted by `delta`.
    pub fn translated(self, delta: Vec2) -> Self {
        let position = self.position() + delta;
        self.with_position(position)
    }

    /// Copy of this instance rotated by `delta_degrees`.
    pub fn rotated(self, delta_degrees: f64) -> Self {
        match self {
            ToolInstance::Ruler(r) => ToolInstance::Ruler(r.rotated(delta_degrees)),
            ToolInstance::Protractor(p) => ToolInstance::Protractor(p.rotated(delta_degrees)),
            ToolInstance::SetSquare(s) => ToolInstance::SetSquare(s.rotated(delta_degrees)),
        }
    }

    /// One entry per constrainable edge: 1 for a ruler, 3 for a set square, none for a protractor.
    pub fn edge_directions(&self) -> Vec<ConstraintEdge> {
        match self {
            ToolInstance::Ruler(r) => vec![r.edge()],
            ToolInstance::Protractor(_) => Vec::new(),
            ToolInstance::SetSquare(s) => s.edges().to_vec(),
        }
    }

    /// The edge whose direction best matches the vector from the tool's
    /// reference point to `touch`. Ties go to the earliest edge.
    pub fn select_nearest_edge(&self, touch: Point) -> Option<ConstraintEdge> {
        let approach = touch - self.position();
        let mut best: Option<(ConstraintEdge, f64)> = None;
        for edge in self.edge_directions() {
            let diff = geometry::angle_difference(edge.direction, approach);
            if best.is_none_or(|(_, best_diff)| diff < best_diff) {
                best = Some((edge, diff));
            }
        }
        let (edge, diff) = best?;
        log::trace!("selected edge {:?} ({:.1}° from approach)", edge, diff);
        Some(edge)
    }

    /// Finite drawn extent of each constraint edge.
    pub fn edge_segments(&self) -> Vec<KurboLine> {
        match self {
            ToolInstance::Ruler(r) => vec![r.segment()],
            ToolInstance::Protractor(_) => Vec::new(),
            ToolInstance::SetSquare(s) => s.sides().to_vec(),
        }
    }

    /// World-space outline polygon of the instrument body.
    pub fn outline(&self) -> Vec<Point> {
        match self {
            ToolInstance::Ruler(r) => r.outline(),
            ToolInstance::Protractor(_) => Vec::new(),
            ToolInstance::SetSquare(s) => s.vertices().to_vec(),
        }
    }
}
