//! Snap functionality for pulling pointer input onto shape features and nice angles.

use crate::geometry;
use crate::shapes::Shape;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Snap radius at zoom 1.0, in world units.
pub const DEFAULT_BASE_RADIUS: f64 = 20.0;

/// Smallest snap radius regardless of zoom.
pub const MIN_SNAP_RADIUS: f64 = 8.0;

/// Maximum distance in degrees from a reference angle for angle snapping.
pub const ANGLE_SNAP_THRESHOLD: f64 = 6.0;

/// Minimum reach of an angle-snapped point from the pointer.
pub const MIN_ANGLE_REACH: f64 = 30.0;

/// Reference headings for angle snapping, in degrees from horizontal.
pub const ANGLE_SNAP_INCREMENTS: [f64; 9] =
    [0.0, 30.0, 45.0, 60.0, 90.0, 120.0, 135.0, 150.0, 180.0];

/// Tunables for the snap engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Initial state of the canvas snap toggle.
    pub enabled: bool,
    /// Snap radius at zoom 1.0.
    pub base_radius: f64,
    /// Floor for the zoom-adjusted radius.
    pub min_radius: f64,
    /// Angle snapping tolerance in degrees.
    pub angle_threshold_degrees: f64,
    /// Minimum reach of an angle-snapped point.
    pub min_angle_reach: f64,
    /// Reference headings in degrees.
    pub angle_increments: Vec<f64>,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            base_radius: DEFAULT_BASE_RADIUS,
            min_radius: MIN_SNAP_RADIUS,
            angle_threshold_degrees: ANGLE_SNAP_THRESHOLD,
            min_angle_reach: MIN_ANGLE_REACH,
            angle_increments: ANGLE_SNAP_INCREMENTS.to_vec(),
        }
    }
}

impl SnapSettings {
    /// Snap radius in world units for the given zoom factor.
    pub fn radius_at(&self, zoom: f64) -> f64 {
        effective_radius(self.base_radius, zoom, self.min_radius)
    }
}

/// A point that can be snapped to on a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    /// The snap point location.
    pub point: Point,
    /// Type of snap target for visual feedback.
    pub kind: SnapTargetKind,
}

/// Type of snap target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapTargetKind {
    /// End of a line.
    Endpoint,
    /// Midpoint of a line.
    Midpoint,
    /// Center of a circle.
    Center,
}

/// How a snapped point was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SnapKind {
    /// Nothing in range; the raw point was kept.
    None,
    Endpoint,
    Midpoint,
    Center,
    /// Heading corrected onto a reference angle.
    Angle { degrees: f64 },
}

impl From<SnapTargetKind> for SnapKind {
    fn from(kind: SnapTargetKind) -> Self {
        match kind {
            SnapTargetKind::Endpoint => SnapKind::Endpoint,
            SnapTargetKind::Midpoint => SnapKind::Midpoint,
            SnapTargetKind::Center => SnapKind::Center,
        }
    }
}

/// Result of a snap operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// What the point was snapped to.
    pub kind: SnapKind,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            kind: SnapKind::None,
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.kind != SnapKind::None
    }
}

/// Snap tolerance for a zoom level: shrinks as the view zooms in, never below `floor`.
///
/// A zoom that is not a positive finite number, or one so small the radius
/// overflows, counts as 1.0.
pub fn effective_radius(base_radius: f64, zoom: f64, floor: f64) -> f64 {
    let scaled = base_radius / zoom;
    let radius = if zoom.is_finite() && zoom > 0.0 && scaled.is_finite() {
        scaled
    } else {
        base_radius
    };
    radius.max(floor)
}

/// Snap to the closest shape feature within `radius`.
///
/// Ties keep the earliest candidate in shape order, then in per-shape
/// target order.
pub fn snap_to_features(point: Point, shapes: &[Shape], radius: f64) -> SnapResult {
    let mut best: Option<SnapTarget> = None;
    let mut best_dist = f64::INFINITY;

    for target in shapes.iter().flat_map(Shape::snap_targets) {
        let dist = geometry::distance(point, target.point);
        if dist <= radius && dist < best_dist {
            best_dist = dist;
            best = Some(target);
        }
    }

    match best {
        Some(target) => SnapResult {
            point: target.point,
            kind: target.kind.into(),
        },
        None => SnapResult::none(point),
    }
}

/// Nudge the heading of `point` (taken from the origin) onto the nearest reference angle.
///
/// On a hit the result sits `max(radius, min_angle_reach)` away from the
/// pointer along the reference heading.
pub fn snap_to_angle(point: Point, radius: f64, settings: &SnapSettings) -> SnapResult {
    let heading = geometry::heading_degrees(point.to_vec2());

    let mut nearest: Option<(f64, f64)> = None;
    for &increment in &settings.angle_increments {
        let raw_diff = (geometry::normalize_degrees(increment) - heading).abs();
        let diff = raw_diff.min(360.0 - raw_diff);
        if nearest.is_none_or(|(_, best)| diff < best) {
            nearest = Some((increment, diff));
        }
    }

    match nearest {
        Some((degrees, diff)) if diff <= settings.angle_threshold_degrees => {
            let reach = radius.max(settings.min_angle_reach);
            SnapResult {
                point: point + geometry::direction_from_degrees(degrees) * reach,
                kind: SnapKind::Angle { degrees },
            }
        }
        _ => SnapResult::none(point),
    }
}

/// Full snap pipeline: feature snap first, then angle snap, else the raw point.
pub fn snap_point(
    point: Point,
    shapes: &[Shape],
    zoom: f64,
    settings: &SnapSettings,
) -> SnapResult {
    let radius = settings.radius_at(zoom);

    let feature = snap_to_features(point, shapes, radius);
    if feature.is_snapped() {
        log::trace!("feature snap {:?} -> {:?}", point, feature);
        return feature;
    }

    let angle = snap_to_angle(point, radius, settings);
    if angle.is_snapped() {
        log::trace!("angle snap {:?} -> {:?}", point, angle);
    }
    angle
}

/// Snapped position for a raw pointer location using the default tunables
/// and the given base radius.
pub fn find_best_snap(point: Point, shapes: &[Shape], zoom: f64, base_radius: f64) -> Point {
    let settings = SnapSettings {
        base_radius,
        ..SnapSettings::default()
    };
    snap_point(point, shapes, zoom, &settings).point
}
