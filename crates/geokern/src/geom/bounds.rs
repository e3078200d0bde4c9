use nalgebra::Vector2;

/// Axis-aligned bounding box in 2D (closed: boundary points are inside).
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y` (constructors enforce it).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Aabb2 {
    /// Zero-size box at `p`.
    #[inline]
    pub fn from_point(p: Vector2<f64>) -> Self {
        Self { min: p, max: p }
    }

    /// Box spanned by two arbitrary corners.
    #[inline]
    pub fn from_corners(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Smallest box enclosing all points; `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut it = points.into_iter();
        let mut b = Self::from_point(it.next()?);
        for p in it {
            b.expand_to_include(p);
        }
        Some(b)
    }

    #[inline]
    pub fn expand_to_include(&mut self, p: Vector2<f64>) {
        self.min = self.min.inf(&p);
        self.max = self.max.sup(&p);
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn size(&self) -> Vector2<f64> {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }
}
