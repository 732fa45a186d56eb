//! Geometric primitives: directed lines, side classification, distances, extremes.
//!
//! Conventions
//! - `signed_area(line, p)` is `cross(p2 - p1, p - p1)`, i.e. twice the signed
//!   area of the triangle (p1, p2, p). Positive means `p` lies to the left of
//!   the directed line p1 -> p2 (counter-clockwise turn).
//! - Comparisons are exact sign tests; there is no epsilon.
//! - `find_side` and `distance` both derive from `signed_area`, so a point is
//!   never classified off-line while sitting at zero distance.

use std::ops::Neg;

use nalgebra::Vector2;

use crate::error::HullError;

/// A point in the plane. Equality is exact coordinate equality.
pub type Point = Vector2<f64>;

/// Directed segment p1 -> p2 used as a splitting line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
    /// Same segment, opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }
}

/// Position of a point relative to a directed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left = 1,
    Center = 0,
    Right = -1,
}

impl Neg for Side {
    type Output = Side;
    #[inline]
    fn neg(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Center => Side::Center,
            Side::Right => Side::Left,
        }
    }
}

impl Side {
    /// Map the sign of a signed area onto a side.
    #[inline]
    pub fn from_area(area: f64) -> Side {
        if area > 0.0 {
            Side::Left
        } else if area < 0.0 {
            Side::Right
        } else {
            Side::Center
        }
    }
}

/// Twice the signed area of the triangle (line.p1, line.p2, point).
#[inline]
pub fn signed_area(line: &Line, point: &Point) -> f64 {
    (line.p2 - line.p1).perp(&(point - line.p1))
}

#[inline]
pub fn find_side(line: &Line, point: &Point) -> Side {
    Side::from_area(signed_area(line, point))
}

/// Perpendicular distance from `point` to the infinite line through `line`.
///
/// Errors with `DegenerateLine` when `line.p1 == line.p2`.
pub fn distance(line: &Line, point: &Point) -> Result<f64, HullError> {
    distance_from_area(line, signed_area(line, point))
}

/// Distance for an already computed signed area (shared with side tests).
#[inline]
pub(crate) fn distance_from_area(line: &Line, area: f64) -> Result<f64, HullError> {
    let len = line.length();
    if line.is_degenerate() || len <= 0.0 {
        return Err(HullError::DegenerateLine {
            p1: line.p1,
            p2: line.p2,
        });
    }
    Ok(area.abs() / len)
}

/// Points with minimum and maximum x. Ties keep the first occurrence.
pub fn x_bounds(points: &[Point]) -> Result<(Point, Point), HullError> {
    bounds_by(points, |p| p.x)
}

/// Points with minimum and maximum y. Ties keep the first occurrence.
pub fn y_bounds(points: &[Point]) -> Result<(Point, Point), HullError> {
    bounds_by(points, |p| p.y)
}

fn bounds_by(points: &[Point], key: impl Fn(&Point) -> f64) -> Result<(Point, Point), HullError> {
    let (first, rest) = points.split_first().ok_or(HullError::EmptyPointSet)?;
    let mut min = *first;
    let mut max = *first;
    for p in rest {
        if key(p) < key(&min) {
            min = *p;
        }
        if key(p) > key(&max) {
            max = *p;
        }
    }
    Ok((min, max))
}
