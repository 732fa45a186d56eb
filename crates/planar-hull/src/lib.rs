//! Planar convex hulls via QuickHull.
//!
//! The crate is organised around a single engine, [`PointSet`], which owns an
//! immutable input cloud and the most recently computed hull.
//!
//! - `geom`: points, directed lines, side test, distance-to-line, extremes.
//! - `hull`: the two QuickHull variants (baseline and upgrade), the best-hull
//!   search and point-in-hull queries.
//! - `format`: plain and Graphviz writers for computed hulls.
//! - `rand`: seeded point clouds for tests and benches.
//!
//! Hull vertices are stored counter-clockwise, starting at the min-x anchor.

pub mod error;
pub mod format;
pub mod geom;
pub mod hull;
pub mod rand;

pub use error::HullError;
pub use geom::{Line, Point, Side};
pub use hull::{hull_contains, HullVariant, PointSet};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::HullError;
    pub use crate::geom::{distance, find_side, signed_area, x_bounds, y_bounds, Line, Point, Side};
    pub use crate::hull::{hull_contains, HullVariant, PointSet};
    pub use nalgebra::Vector2 as Vec2;
}
