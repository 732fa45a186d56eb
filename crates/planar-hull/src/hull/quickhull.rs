//! QuickHull traversal on an explicit work stack.
//!
//! A split of line (a, b) on `side` finds the farthest point p on that side
//! and replaces itself with the splits (a, p) and (p, b), each taking the side
//! away from the opposite original endpoint. Tasks are pushed so that pops
//! visit the boundary counter-clockwise: the right-hand chain of the anchor
//! line runs a -> b, the left-hand chain runs b -> a.
//!
//! Every farthest point found from two hull anchors is a new hull vertex, so
//! one traversal finds at most `points.len()` of them. Anchors that are not
//! both on the hull can make the splits cycle; exceeding that count aborts
//! with `SplitLimit`.

use crate::error::HullError;
use crate::geom::{distance_from_area, find_side, signed_area, Line, Point, Side};

use super::HullVariant;

enum Task {
    Split { line: Line, side: Side },
    Emit(Point),
}

/// Farthest point strictly on `side` of `line`. A later point at the same
/// distance does not replace an earlier one.
pub(super) fn farthest_point(
    points: &[Point],
    line: &Line,
    side: Side,
) -> Result<Option<Point>, HullError> {
    let mut best: Option<Point> = None;
    let mut best_dist = 0.0;
    for p in points {
        let area = signed_area(line, p);
        if Side::from_area(area) != side {
            continue;
        }
        let dist = distance_from_area(line, area)?;
        if dist > best_dist {
            best = Some(*p);
            best_dist = dist;
        }
    }
    Ok(best)
}

/// Hull from anchors `lo` and `hi`: right chain, then left chain, then tidy.
pub(super) fn hull_from(
    points: &[Point],
    lo: Point,
    hi: Point,
    variant: HullVariant,
) -> Result<Vec<Point>, HullError> {
    let line = Line::new(lo, hi);
    let mut walker = Walker {
        points,
        variant,
        budget: points.len(),
        out: Vec::new(),
    };
    if variant == HullVariant::Upgrade {
        walker.out.push(lo);
    }
    walker.walk(line, Side::Right)?;
    if variant == HullVariant::Upgrade {
        walker.out.push(hi);
    }
    walker.walk(line, Side::Left)?;
    let mut hull = walker.out;
    tidy(&mut hull);
    Ok(hull)
}

/// Traversal context shared by both chains of one hull.
struct Walker<'a> {
    points: &'a [Point],
    variant: HullVariant,
    budget: usize,
    out: Vec<Point>,
}

impl Walker<'_> {
    fn walk(&mut self, line: Line, side: Side) -> Result<(), HullError> {
        let mut stack = vec![Task::Split { line, side }];
        while let Some(task) = stack.pop() {
            let (line, side) = match task {
                Task::Emit(p) => {
                    self.out.push(p);
                    continue;
                }
                Task::Split { line, side } => (line, side),
            };
            let Some(p) = farthest_point(self.points, &line, side)? else {
                if self.variant == HullVariant::Baseline {
                    let (first, second) = chain_order(side, line.p1, line.p2);
                    self.out.push(first);
                    self.out.push(second);
                }
                continue;
            };
            if self.budget == 0 {
                return Err(HullError::SplitLimit {
                    limit: self.points.len(),
                });
            }
            self.budget -= 1;
            let near = Line::new(line.p1, p);
            let far = Line::new(p, line.p2);
            let near = Task::Split {
                line: near,
                side: -find_side(&near, &line.p2),
            };
            let far = Task::Split {
                line: far,
                side: -find_side(&far, &line.p1),
            };
            let (first, second) = chain_order(side, near, far);
            // LIFO: push in reverse visit order.
            stack.push(second);
            if self.variant == HullVariant::Upgrade {
                stack.push(Task::Emit(p));
            }
            stack.push(first);
        }
        Ok(())
    }
}

/// Counter-clockwise visit order for the two halves of a split on `side`.
#[inline]
fn chain_order<T>(side: Side, toward_p1: T, toward_p2: T) -> (T, T) {
    match side {
        Side::Left => (toward_p2, toward_p1),
        Side::Center | Side::Right => (toward_p1, toward_p2),
    }
}

/// Drop adjacent repeats (including across the wrap-around), then vertices
/// collinear with their neighbours. Farthest-point ties along an edge
/// parallel to the splitting line can leave such a vertex behind.
pub(super) fn tidy(hull: &mut Vec<Point>) {
    hull.dedup();
    while hull.len() > 1 && hull.first() == hull.last() {
        hull.pop();
    }
    let mut k = 0;
    while hull.len() > 2 && k < hull.len() {
        let n = hull.len();
        let around = Line::new(hull[(k + n - 1) % n], hull[(k + 1) % n]);
        if find_side(&around, &hull[k]) == Side::Center {
            hull.remove(k);
            k = 0;
        } else {
            k += 1;
        }
    }
}
