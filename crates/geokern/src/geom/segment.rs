use nalgebra::Vector2;

use crate::cross2;
use crate::GeomCfg;

/// Closed segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        (self.b - self.a).norm_squared()
    }

    /// Unnormalized direction `b - a`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.b - self.a
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        (self.a + self.b) * 0.5
    }

    /// Point at parameter `t` on the supporting line (`t` in [0,1] stays on the segment).
    #[inline]
    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        self.a + (self.b - self.a) * t
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Closest point on the segment to `p` (projection clamped to [0,1]).
    pub fn closest_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        let ab = self.b - self.a;
        let len2 = ab.norm_squared();
        if len2 == 0.0 {
            return self.a;
        }
        let t = ((p - self.a).dot(&ab) / len2).clamp(0.0, 1.0);
        self.a + ab * t
    }

    #[inline]
    pub fn sq_distance_to_point(&self, p: Vector2<f64>) -> f64 {
        sq_distance_point_segment(p, self.a, self.b)
    }

    #[inline]
    pub fn distance_to_point(&self, p: Vector2<f64>) -> f64 {
        self.sq_distance_to_point(p).sqrt()
    }

    /// `p` lies on the segment within distance `eps`.
    #[inline]
    pub fn contains_point_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.sq_distance_to_point(p) <= eps * eps
    }

    /// `contains_point_eps` with `cfg.eps_dist`.
    #[inline]
    pub fn contains_point_cfg(&self, p: Vector2<f64>, cfg: &GeomCfg) -> bool {
        self.contains_point_eps(p, cfg.eps_dist)
    }

    /// Single crossing point, if any. Parallel and collinear pairs return `None`,
    /// including collinear segments that overlap.
    #[inline]
    pub fn intersection(&self, other: &Segment) -> Option<Vector2<f64>> {
        segment_intersection(self.a, self.b, other.a, other.b)
    }

    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        self.intersection(other).is_some()
    }

    /// Euclidean distance between the two segments (0 when they cross).
    pub fn distance_to_segment(&self, other: &Segment) -> f64 {
        if self.intersects(other) {
            return 0.0;
        }
        let d2 = self
            .sq_distance_to_point(other.a)
            .min(self.sq_distance_to_point(other.b))
            .min(other.sq_distance_to_point(self.a))
            .min(other.sq_distance_to_point(self.b));
        d2.sqrt()
    }
}

/// Intersection of segments `a1–b1` and `a2–b2` via the 2×2 determinant.
///
/// `det == 0` (parallel or collinear) reports no intersection. Otherwise the
/// point is returned only when both line parameters lie in [0,1].
pub fn segment_intersection(
    a1: Vector2<f64>,
    b1: Vector2<f64>,
    a2: Vector2<f64>,
    b2: Vector2<f64>,
) -> Option<Vector2<f64>> {
    let d1 = b1 - a1;
    let d2 = b2 - a2;
    let det = cross2(d1, d2);
    if det == 0.0 {
        return None;
    }
    let w = a2 - a1;
    let t = cross2(w, d2) / det;
    let u = cross2(w, d1) / det;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a1 + d1 * t)
    } else {
        None
    }
}

/// Squared distance from `p` to the closest point of segment `a–b`.
pub fn sq_distance_point_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm_squared();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm_squared()
}
