use nalgebra::Vector2;

use super::segment::Segment;

/// Closed disk given by center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    #[inline]
    pub fn circumference(&self) -> f64 {
        std::f64::consts::TAU * self.radius
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        (p - self.center).norm_squared() <= self.radius * self.radius
    }

    /// Distance from `p` to the disk; 0 inside.
    #[inline]
    pub fn distance_to_point(&self, p: Vector2<f64>) -> f64 {
        ((p - self.center).norm() - self.radius).max(0.0)
    }

    /// Disks overlap or touch.
    #[inline]
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let r = self.radius + other.radius;
        (other.center - self.center).norm_squared() <= r * r
    }

    /// Segment has at least one point inside the disk.
    #[inline]
    pub fn intersects_segment(&self, seg: &Segment) -> bool {
        seg.sq_distance_to_point(self.center) <= self.radius * self.radius
    }
}
