//! Incremental polyline with cached length and bounds.
//!
//! Invariants (hold whenever a `&mut self` method returns)
//! - `length` equals the sum of distances between consecutive points.
//! - `bounds` is the smallest axis-aligned box enclosing all points, `None`
//!   iff the path is empty.
//!
//! `add` updates both caches in O(1); every other mutation recomputes them in
//! O(N). Each mutation then notifies subscribers exactly once.

mod observers;

use std::fmt;
use std::ops::Index;

use nalgebra::Vector2;

use crate::cross2;
use crate::error::{GeomError, GeomResult};
use crate::geom::{Aabb2, Segment};

pub use observers::{Listen, PathChange, SubscriptionId};
use observers::Observers;

/// Ordered, mutable point sequence (open polyline).
#[derive(Default)]
pub struct Path {
    points: Vec<Vector2<f64>>,
    length: f64,
    bounds: Option<Aabb2>,
    observers: Observers,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Path over a copy of `points`.
    pub fn from_points(points: &[Vector2<f64>]) -> Self {
        let mut path = Self {
            points: points.to_vec(),
            ..Self::default()
        };
        path.recompute();
        path
    }

    /// Path from parallel coordinate arrays.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> GeomResult<Self> {
        if xs.len() != ys.len() {
            return Err(GeomError::LengthMismatch {
                left: xs.len(),
                right: ys.len(),
            });
        }
        Ok(xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Vector2::new(x, y))
            .collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Alias of `len`.
    #[inline]
    pub fn count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    pub fn point(&self, index: usize) -> GeomResult<Vector2<f64>> {
        self.points
            .get(index)
            .copied()
            .ok_or(GeomError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    #[inline]
    pub fn first(&self) -> Option<Vector2<f64>> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Vector2<f64>> {
        self.points.last().copied()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn bounds(&self) -> Option<Aabb2> {
        self.bounds
    }

    /// Consecutive point pairs as segments (`len() - 1` of them).
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    // --- mutation -----------------------------------------------------------

    /// Append `p`, extending length and bounds in O(1).
    pub fn add(&mut self, p: Vector2<f64>) {
        if let Some(&prev) = self.points.last() {
            self.length += (p - prev).norm();
        }
        match self.bounds.as_mut() {
            Some(b) => b.expand_to_include(p),
            None => self.bounds = Some(Aabb2::from_point(p)),
        }
        self.points.push(p);
        self.notify(PathChange::Added);
    }

    /// Remove and return the point at `index`.
    pub fn remove_at(&mut self, index: usize) -> GeomResult<Vector2<f64>> {
        if index >= self.points.len() {
            return Err(GeomError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        let p = self.points.remove(index);
        self.recompute();
        self.notify(PathChange::Removed { index });
        Ok(p)
    }

    /// Replace all points with a copy of `points`.
    pub fn set_vertices<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        self.points.clear();
        self.points.extend(points);
        self.recompute();
        self.notify(PathChange::Replaced);
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
        self.recompute();
        self.notify(PathChange::Reversed);
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.recompute();
        self.notify(PathChange::Cleared);
    }

    fn recompute(&mut self) {
        self.length = self
            .points
            .windows(2)
            .fold(0.0, |acc, w| acc + (w[1] - w[0]).norm());
        self.bounds = Aabb2::from_points(self.points.iter().copied());
    }

    // --- observers ----------------------------------------------------------

    /// Register `handler`; it runs after every later mutation until it returns
    /// `Listen::Unsubscribe` or is removed with `unsubscribe`.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&Path, PathChange) -> Listen + Send + 'static,
    {
        self.observers.add(Box::new(handler))
    }

    /// False if `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self, change: PathChange) {
        if self.observers.len() == 0 {
            return;
        }
        let mut handlers = self.observers.take();
        let this = &*self;
        handlers.retain_mut(|(_, h)| h(this, change) == Listen::Keep);
        self.observers.restore(handlers);
    }

    // --- queries ------------------------------------------------------------

    /// Clockwise test treating the points as a closed ring.
    ///
    /// Sums the signed turning angle at every vertex (indices wrap modulo N);
    /// true when the total is negative. Paths with fewer than 3 points are not
    /// rings and report false.
    ///
    /// A full reversal (`next - cur` opposite to `cur - prev`) has a `+0.0`
    /// cross product and counts as `+π`, whichever way the ring winds. Each
    /// back-and-forth spike therefore adds `+2π`, which can flip a clockwise ring.
    pub fn is_cw(&self) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut total = 0.0;
        for i in 0..n {
            let prev = self.points[(i + n - 1) % n];
            let cur = self.points[i];
            let next = self.points[(i + 1) % n];
            let e1 = cur - prev;
            let e2 = next - cur;
            total += cross2(e1, e2).atan2(e1.dot(&e2));
        }
        total < 0.0
    }

    /// First crossing of `seg` with the path, in point order.
    ///
    /// Early-out: the segment is rejected when neither endpoint lies inside
    /// `bounds`. A segment passing through the box with both endpoints outside
    /// is therefore never tested against the path.
    pub fn intersection(&self, seg: &Segment) -> Option<Vector2<f64>> {
        let bounds = self.bounds?;
        if !bounds.contains(seg.a) && !bounds.contains(seg.b) {
            return None;
        }
        self.segments().find_map(|s| s.intersection(seg))
    }

    #[inline]
    pub fn intersects(&self, seg: &Segment) -> bool {
        self.intersection(seg).is_some()
    }

    /// Minimum distance from `p` to the path, skipping the last `ignored_tail` segments.
    ///
    /// Panics if the path has fewer than 2 points. Returns `f64::INFINITY` when
    /// every segment is skipped.
    pub fn distance_to_point(&self, p: Vector2<f64>, ignored_tail: usize) -> f64 {
        assert!(
            self.points.len() >= 2,
            "distance_to_point needs at least 2 points, got {}",
            self.points.len()
        );
        let considered = (self.points.len() - 1).saturating_sub(ignored_tail);
        self.segments()
            .take(considered)
            .map(|s| s.sq_distance_to_point(p))
            .fold(f64::INFINITY, f64::min)
            .sqrt()
    }

    /// Non-panicking `distance_to_point`.
    pub fn try_distance_to_point(&self, p: Vector2<f64>, ignored_tail: usize) -> GeomResult<f64> {
        if self.points.len() < 2 {
            return Err(GeomError::TooFewPoints {
                expected: 2,
                actual: self.points.len(),
            });
        }
        Ok(self.distance_to_point(p, ignored_tail))
    }
}

/// Copies points and caches; subscribers are not copied.
impl Clone for Path {
    fn clone(&self) -> Self {
        Self {
            points: self.points.clone(),
            length: self.length,
            bounds: self.bounds,
            observers: Observers::default(),
        }
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("points", &self.points)
            .field("length", &self.length)
            .field("bounds", &self.bounds)
            .field("subscribers", &self.observers.len())
            .finish()
    }
}

impl Index<usize> for Path {
    type Output = Vector2<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl FromIterator<Vector2<f64>> for Path {
    fn from_iter<I: IntoIterator<Item = Vector2<f64>>>(iter: I) -> Self {
        let mut path = Self {
            points: iter.into_iter().collect(),
            ..Self::default()
        };
        path.recompute();
        path
    }
}

impl From<Vec<Vector2<f64>>> for Path {
    fn from(points: Vec<Vector2<f64>>) -> Self {
        let mut path = Self {
            points,
            ..Self::default()
        };
        path.recompute();
        path
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Vector2<f64>;
    type IntoIter = std::slice::Iter<'a, Vector2<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
