//! Errors surfaced by the hull engine.
//!
//! Only precondition violations live here. A farthest-point scan that finds
//! nothing is the recursion's base case and is reported as `Ok(None)`.

use std::fmt;

use crate::geom::Point;

/// Errors surfaced by hull construction and the geometric primitives.
#[derive(Clone, Debug, PartialEq)]
pub enum HullError {
    /// Bounds or hull requested on a point set with no points.
    EmptyPointSet,
    /// Distance requested against a zero-length line.
    DegenerateLine { p1: Point, p2: Point },
    /// Traversal found more farthest points than the set holds; the anchors
    /// were not both on the hull.
    SplitLimit { limit: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptyPointSet => write!(f, "point set is empty (need at least one point)"),
            HullError::DegenerateLine { p1, p2 } => write!(
                f,
                "line ({}, {}) -> ({}, {}) has zero length",
                p1.x, p1.y, p2.x, p2.y
            ),
            HullError::SplitLimit { limit } => write!(
                f,
                "traversal exceeded {} farthest-point splits (anchors not on the hull)",
                limit
            ),
        }
    }
}

impl std::error::Error for HullError {}
