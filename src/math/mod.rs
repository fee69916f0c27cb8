/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Slack used when deciding segment membership during arclength sampling,
/// so a target distance landing exactly on a segment boundary is not missed.
pub const SAMPLE_EPS: f64 = 1e-4;

/// Linear interpolation from `a` toward `b` at factor `t`.
#[must_use]
pub fn lerp(a: &Point3, b: &Point3, t: f64) -> Point3 {
    a + (b - a) * t
}

/// Midpoint of two points.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    lerp(a, b, 0.5)
}

/// Unweighted average of three points.
#[must_use]
pub fn centroid(a: &Point3, b: &Point3, c: &Point3) -> Point3 {
    Point3::from((a.coords + b.coords + c.coords) / 3.0)
}
