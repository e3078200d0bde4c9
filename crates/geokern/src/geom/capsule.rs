use nalgebra::{Unit, Vector3};

/// Upright capsule: a cylinder of `height` (end caps included) with hemispherical caps.
///
/// The core segment runs along `up` through `center`; its half-length is
/// `height / 2 - radius`, floored at 0, so a capsule with `height <= 2 * radius`
/// is a sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capsule {
    pub center: Vector3<f64>,
    pub radius: f64,
    pub height: f64,
    up: Unit<Vector3<f64>>,
}

impl Capsule {
    /// Capsule with the implicit local up axis `+Y`.
    pub fn new(center: Vector3<f64>, radius: f64, height: f64) -> Self {
        Self {
            center,
            radius,
            height,
            up: Vector3::y_axis(),
        }
    }

    /// Same capsule oriented along `axis`; a (near) zero axis keeps `+Y`.
    pub fn with_up(mut self, axis: Vector3<f64>) -> Self {
        self.up = Unit::try_new(axis, f64::EPSILON).unwrap_or_else(Vector3::y_axis);
        self
    }

    #[inline]
    pub fn up(&self) -> Vector3<f64> {
        self.up.into_inner()
    }

    #[inline]
    pub fn half_body_height(&self) -> f64 {
        (self.height * 0.5 - self.radius).max(0.0)
    }

    #[inline]
    pub fn top_sphere_center(&self) -> Vector3<f64> {
        self.center + self.up.into_inner() * self.half_body_height()
    }

    #[inline]
    pub fn bottom_sphere_center(&self) -> Vector3<f64> {
        self.center - self.up.into_inner() * self.half_body_height()
    }

    /// Core segment endpoints `(bottom, top)`.
    #[inline]
    pub fn core_segment(&self) -> (Vector3<f64>, Vector3<f64>) {
        (self.bottom_sphere_center(), self.top_sphere_center())
    }

    /// Distance from `p` to the capsule surface; 0 inside.
    pub fn distance_to_point(&self, p: Vector3<f64>) -> f64 {
        let (a, b) = self.core_segment();
        (sq_distance_point_segment3(p, a, b).sqrt() - self.radius).max(0.0)
    }

    #[inline]
    pub fn contains(&self, p: Vector3<f64>) -> bool {
        let (a, b) = self.core_segment();
        sq_distance_point_segment3(p, a, b) <= self.radius * self.radius
    }
}

/// Squared distance from `p` to segment `a–b` in R³ (projection clamped to [0,1]).
pub fn sq_distance_point_segment3(p: Vector3<f64>, a: Vector3<f64>, b: Vector3<f64>) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm_squared();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm_squared()
}
