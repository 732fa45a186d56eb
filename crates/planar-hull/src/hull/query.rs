//! Point-in-hull queries against a stored vertex sequence.

use crate::geom::{find_side, Line, Point, Side};

/// Treat `hull` as a closed polygon in storage order (counter-clockwise) and
/// test `point` against every edge, including the wrap-around edge.
///
/// Points on an edge count as inside. An empty hull contains nothing, a
/// single-vertex hull only that vertex, a two-vertex hull its closed segment.
pub fn hull_contains(hull: &[Point], point: &Point) -> bool {
    match hull {
        [] => false,
        [only] => only == point,
        [a, b] => {
            if find_side(&Line::new(*a, *b), point) != Side::Center {
                return false;
            }
            let d = b - a;
            let t = (point - a).dot(&d);
            (0.0..=d.norm_squared()).contains(&t)
        }
        _ => {
            let n = hull.len();
            (0..n).all(|k| {
                let edge = Line::new(hull[k], hull[(k + 1) % n]);
                find_side(&edge, point) != Side::Right
            })
        }
    }
}
