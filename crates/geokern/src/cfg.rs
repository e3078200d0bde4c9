//! Tolerance defaults for geometric predicates.
//!
//! Policy
//! - The exact tests (segment intersection determinant, bounds containment) use
//!   no tolerance at all. Tolerances only apply to "lies on" style helpers.
//! - Defaults are fixed constants. Callers that need different slack pass a
//!   bare tolerance to the `_eps` helpers or a `GeomCfg` to the `_cfg` ones
//!   (`Segment::contains_point_cfg`, `Triangle::is_degenerate_cfg`).

/// Default slack for "point lies on segment" and similar checks.
pub const EPS: f64 = 1e-9;
/// Below this absolute area a triangle is reported as degenerate by `Triangle::is_degenerate`.
pub const AREA_EPS: f64 = 1e-12;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Distance slack used by on-segment checks.
    pub eps_dist: f64,
    /// Absolute area below which a triangle is treated as collinear.
    pub eps_area: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_dist: EPS,
            eps_area: AREA_EPS,
        }
    }
}
