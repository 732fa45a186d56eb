//! Best-hull search: one upgrade traversal per candidate left anchor.
//!
//! A trial whose anchor is not on the hull either cycles until the split
//! limit or yields a polygon that leaves some input point outside one of its
//! edges. Both kinds are rejected before the size comparison; among the rest
//! the candidate with strictly more vertices wins, ties keep the earlier
//! anchor. If no trial survives, the last trial error is returned.
//!
//! With exact arithmetic (e.g. small integer coordinates) the winner has the
//! same vertex set as the x-extreme hull. On near-collinear float clouds the
//! side tests round differently per anchor and the two can differ by a
//! vertex.

use crate::error::HullError;
use crate::geom::Point;

use super::query::hull_contains;
use super::quickhull::hull_from;
use super::HullVariant;

pub(super) fn best_hull(points: &[Point], hi: Point) -> Result<Vec<Point>, HullError> {
    if points.is_empty() {
        return Err(HullError::EmptyPointSet);
    }
    let mut best: Vec<Point> = Vec::new();
    let mut last_err = HullError::SplitLimit {
        limit: points.len(),
    };
    for &anchor in points {
        // Fresh buffer per trial.
        let candidate = match hull_from(points, anchor, hi, HullVariant::Upgrade) {
            Ok(c) => c,
            Err(e @ HullError::SplitLimit { .. }) => {
                last_err = e;
                continue;
            }
            Err(e) => return Err(e),
        };
        if candidate.len() > best.len()
            && !has_repeats(&candidate)
            && encloses_all(points, &candidate)
        {
            best = candidate;
        }
    }
    if best.is_empty() {
        return Err(last_err);
    }
    Ok(best)
}

pub(super) fn encloses_all(points: &[Point], hull: &[Point]) -> bool {
    points.iter().all(|p| hull_contains(hull, p))
}

fn has_repeats(hull: &[Point]) -> bool {
    hull.iter()
        .enumerate()
        .any(|(i, p)| hull[i + 1..].contains(p))
}
