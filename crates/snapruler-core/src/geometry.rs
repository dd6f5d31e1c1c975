//! Geometry kernel: distances, projections, angles and directions.
//!
//! Angles follow a single convention everywhere in the crate: degrees,
//! increasing from the +x axis towards the +y axis. On a y-down canvas that
//! reads as clockwise on screen.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Deserializer};

/// Threshold below which lengths and squared lengths count as zero.
pub const EPSILON: f64 = 1e-9;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Orthogonal projection of `p` onto the infinite line through `a` and `b`.
///
/// The result is not clamped to the segment. When `a` and `b` coincide the
/// line is undefined and `a` is returned.
pub fn project_point_onto_segment_line(p: Point, a: Point, b: Point) -> Point {
    let ab = b - a;
    let len_sq = ab.hypot2();
    if len_sq < EPSILON {
        return a;
    }
    let t = (p - a).dot(ab) / len_sq;
    a + ab * t
}

/// Orthogonal projection of `p` onto the line through `anchor` along `direction`.
pub fn project_point_onto_direction(p: Point, anchor: Point, direction: Vec2) -> Point {
    project_point_onto_segment_line(p, anchor, anchor + direction)
}

/// Sweep from ray `b→a` to ray `b→c`, in degrees within `[0, 360)`.
pub fn angle_between(a: Point, b: Point, c: Point) -> f64 {
    let from = (a - b).atan2();
    let to = (c - b).atan2();
    normalize_degrees((to - from).to_degrees())
}

/// Unit vector along `v`, or the zero vector when `v` is too short to have a direction.
pub fn normalize(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len < EPSILON { Vec2::ZERO } else { v / len }
}

/// Smallest unsigned angle between two directions, in degrees within `[0, 180]`.
///
/// A zero-length input has no direction and reports the maximum of 180.
pub fn angle_difference(u: Vec2, v: Vec2) -> f64 {
    let mag = u.hypot() * v.hypot();
    if mag < EPSILON {
        return 180.0;
    }
    let cos = (u.dot(v) / mag).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit direction at `degrees` from horizontal.
pub fn direction_from_degrees(degrees: f64) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}

/// Heading of a vector from horizontal, in degrees within `[0, 360)`.
pub fn heading_degrees(v: Vec2) -> f64 {
    normalize_degrees(v.atan2().to_degrees())
}

/// Deserialize a length, clamping negative or NaN values to zero.
pub(crate) fn deserialize_non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(f64::deserialize(deserializer)?.max(0.0))
}

/// Rotate a local-space offset by `degrees` and translate it to `origin`.
pub fn place(origin: Point, local: Vec2, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    origin + Vec2::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_distance() {
        assert!((distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)) - 5.0).abs() < TOL);
    }

    #[test]
    fn test_projection_unclamped() {
        let p = project_point_onto_segment_line(
            Point::new(250.0, 40.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        assert!((p.x - 250.0).abs() < TOL);
        assert!(p.y.abs() < TOL);
    }

    #[test]
    fn test_projection_idempotent() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(70.0, -35.0);
        let once = project_point_onto_segment_line(Point::new(-12.0, 99.0), a, b);
        let twice = project_point_onto_segment_line(once, a, b);
        assert!((once.x - twice.x).abs() < 1e-6);
        assert!((once.y - twice.y).abs() < 1e-6);
    }

    #[test]
    fn test_projection_degenerate_returns_anchor() {
        let a = Point::new(5.0, 5.0);
        let p = project_point_onto_segment_line(Point::new(40.0, -3.0), a, a);
        assert_eq!(p, a);
    }

    #[test]
    fn test_projection_onto_direction_lies_on_line() {
        let anchor = Point::new(100.0, 50.0);
        let dir = direction_from_degrees(33.0);
        let projected = project_point_onto_direction(Point::new(-20.0, 310.0), anchor, dir);
        assert!((projected - anchor).cross(dir).abs() < 1e-6);
    }

    #[test]
    fn test_angle_between_convention() {
        let b = Point::ZERO;
        assert!((angle_between(Point::new(1.0, 0.0), b, Point::new(0.0, 1.0)) - 90.0).abs() < TOL);
        assert!((angle_between(Point::new(0.0, 1.0), b, Point::new(1.0, 0.0)) - 270.0).abs() < TOL);
        assert!(angle_between(Point::new(1.0, 0.0), b, Point::new(2.0, 0.0)).abs() < TOL);
    }

    #[test]
    fn test_angle_between_range() {
        let b = Point::new(3.0, 3.0);
        for (a, c) in [
            (Point::new(4.0, 3.0), Point::new(2.0, 2.0)),
            (Point::new(3.0, 10.0), Point::new(3.0, -10.0)),
            (Point::new(-1.0, 3.0), Point::new(-1.0, 3.0001)),
        ] {
            let angle = angle_between(a, b, c);
            assert!((0.0..360.0).contains(&angle));
        }
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(normalize(Vec2::new(1e-12, 0.0)), Vec2::ZERO);
        let n = normalize(Vec2::new(3.0, 4.0));
        assert!((n.hypot() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_angle_difference_symmetric() {
        let u = Vec2::new(1.0, 2.0);
        let v = Vec2::new(-3.0, 0.5);
        assert_eq!(angle_difference(u, v), angle_difference(v, u));
    }

    #[test]
    fn test_angle_difference_parallel_and_opposite() {
        let u = Vec2::new(0.3, 0.7);
        assert!(angle_difference(u, u * 5.0).abs() < 1e-6);
        assert!((angle_difference(u, -u) - 180.0).abs() < 1e-6);
        assert!((angle_difference(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)) - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_difference_zero_length() {
        assert_eq!(angle_difference(Vec2::ZERO, Vec2::new(1.0, 0.0)), 180.0);
    }

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(-90.0) - 270.0).abs() < TOL);
        assert!((normalize_degrees(720.0 + 45.0) - 45.0).abs() < TOL);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
    }

    #[test]
    fn test_place_rotates_then_translates() {
        let p = place(Point::new(10.0, 10.0), Vec2::new(100.0, 0.0), 90.0);
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 110.0).abs() < 1e-9);
    }
}
