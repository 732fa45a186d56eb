//! Hull engine: QuickHull over an owned point cloud.
//!
//! Purpose
//! - `PointSet` owns the input points (read-only after construction) and the
//!   hull produced by the last compute call. Every compute entry point clears
//!   and rebuilds the hull.
//! - Two recursion variants share one traversal: `Baseline` collects line
//!   endpoints at the leaves, `Upgrade` seeds the two anchors and collects
//!   each farthest point as it is found.
//! - `compute_best_hull` retries the upgrade variant from every point as the
//!   left anchor and keeps the largest candidate that encloses every input.
//!
//! Ordering
//! - The traversal emits vertices counter-clockwise starting at the left
//!   anchor; only adjacent repeats (and a repeat across the wrap-around) are
//!   dropped. `hull_contains` and the Graphviz writer rely on this order.
//!
//! Layout: `quickhull.rs` (traversal), `search.rs` (best-hull retries),
//! `query.rs` (containment).

mod query;
mod quickhull;
mod search;

pub use query::hull_contains;

use crate::error::HullError;
use crate::geom::{x_bounds, y_bounds, Line, Point, Side};

/// Which bookkeeping the QuickHull traversal uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HullVariant {
    /// Push both endpoints of every leaf line; reconcile with dedup.
    #[default]
    Baseline,
    /// Seed the anchors, push each farthest point once.
    Upgrade,
}

/// Input cloud plus the most recently computed hull.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: Vec<Point>,
    hull: Vec<Point>,
}

impl PointSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            hull: Vec::new(),
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Hull vertices from the last compute call (empty before the first one).
    #[inline]
    pub fn hull(&self) -> &[Point] {
        &self.hull
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn x_bounds(&self) -> Result<(Point, Point), HullError> {
        x_bounds(&self.points)
    }

    /// Farthest point strictly on `side` of `line`; `Ok(None)` when no point qualifies.
    pub fn farthest_point(&self, line: &Line, side: Side) -> Result<Option<Point>, HullError> {
        quickhull::farthest_point(&self.points, line, side)
    }

    /// Dispatch to the baseline or upgrade traversal.
    pub fn compute(&mut self, variant: HullVariant) -> Result<&[Point], HullError> {
        self.hull.clear();
        let (lo, hi) = self.anchors()?;
        self.hull = quickhull::hull_from(&self.points, lo, hi, variant)?;
        Ok(self.hull.as_slice())
    }

    /// Baseline QuickHull from the x-extremes.
    #[inline]
    pub fn compute_hull(&mut self) -> Result<&[Point], HullError> {
        self.compute(HullVariant::Baseline)
    }

    /// Upgrade QuickHull from the x-extremes.
    #[inline]
    pub fn compute_hull_upgrade(&mut self) -> Result<&[Point], HullError> {
        self.compute(HullVariant::Upgrade)
    }

    /// Largest enclosing hull over every choice of left anchor.
    pub fn compute_best_hull(&mut self) -> Result<&[Point], HullError> {
        self.hull.clear();
        let (_, hi) = self.anchors()?;
        self.hull = search::best_hull(&self.points, hi)?;
        Ok(self.hull.as_slice())
    }

    /// Point-in-hull query against the current hull.
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        hull_contains(&self.hull, point)
    }

    /// True if every input point passes `hull_contains` against `hull`.
    pub fn encloses_all(&self, hull: &[Point]) -> bool {
        search::encloses_all(&self.points, hull)
    }

    /// Left/right anchors: the x-extremes, or the y-extremes when every
    /// point shares one x coordinate.
    fn anchors(&self) -> Result<(Point, Point), HullError> {
        let (lo, hi) = x_bounds(&self.points)?;
        if lo != hi {
            return Ok((lo, hi));
        }
        y_bounds(&self.points)
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests;
