use nalgebra::Vector2;

use super::segment::segment_intersection;
use crate::cross2;
use crate::GeomCfg;

/// Triangle with vertices `a`, `b`, `c` (any orientation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub c: Vector2<f64>,
}

/// Outcome of the median-intersection centroid construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Centroid {
    /// Medians intersected at this point.
    Computed(Vector2<f64>),
    /// Medians did not intersect (near-collinear vertices); `fallback` is the zero vector.
    Degenerate { fallback: Vector2<f64> },
}

impl Centroid {
    /// The carried point, fallback included.
    #[inline]
    pub fn point(&self) -> Vector2<f64> {
        match *self {
            Centroid::Computed(p) => p,
            Centroid::Degenerate { fallback } => fallback,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Centroid::Degenerate { .. })
    }

    /// `Some(point)` only when the construction succeeded.
    #[inline]
    pub fn computed(&self) -> Option<Vector2<f64>> {
        match *self {
            Centroid::Computed(p) => Some(p),
            Centroid::Degenerate { .. } => None,
        }
    }
}

impl Triangle {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Self {
        Self { a, b, c }
    }

    /// Positive for counterclockwise `a → b → c`.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        0.5 * cross2(self.b - self.a, self.c - self.a)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    #[inline]
    pub fn is_degenerate(&self, eps_area: f64) -> bool {
        self.area() <= eps_area
    }

    #[inline]
    pub fn is_degenerate_cfg(&self, cfg: &GeomCfg) -> bool {
        self.is_degenerate(cfg.eps_area)
    }

    /// Closed containment (edges count as inside), orientation independent.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let d1 = cross2(self.b - self.a, p - self.a);
        let d2 = cross2(self.c - self.b, p - self.b);
        let d3 = cross2(self.a - self.c, p - self.c);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    #[inline]
    pub fn vertex_average(&self) -> Vector2<f64> {
        (self.a + self.b + self.c) / 3.0
    }

    /// Centroid as the intersection of the medians from `a` and `b`.
    ///
    /// Collinear vertices make the medians parallel; the result is then
    /// `Centroid::Degenerate` with a zero fallback and a warning is logged.
    pub fn centroid(&self) -> Centroid {
        let mid_bc = (self.b + self.c) * 0.5;
        let mid_ac = (self.a + self.c) * 0.5;
        match segment_intersection(mid_bc, self.a, mid_ac, self.b) {
            Some(p) => Centroid::Computed(p),
            None => {
                tracing::warn!(
                    a = ?self.a,
                    b = ?self.b,
                    c = ?self.c,
                    "triangle medians do not intersect; centroid falls back to zero"
                );
                Centroid::Degenerate {
                    fallback: Vector2::zeros(),
                }
            }
        }
    }
}
