//! Text writers for point clouds and hulls.
//!
//! - `write_points` / `write_plain`: one `x y` pair per line.
//! - `write_dot`: Graphviz undirected graph, one pinned node per vertex and one
//!   edge per consecutive pair in storage order (closing edge included for
//!   three or more vertices). Render with `neato -n` or `fdp` to honour `pos`.

use std::io::{self, Write};

use crate::geom::Point;

/// Write every point as `x y`, one per line.
pub fn write_points<W: Write>(mut w: W, points: &[Point]) -> io::Result<()> {
    for p in points {
        writeln!(w, "{} {}", p.x, p.y)?;
    }
    Ok(())
}

/// Write hull vertices in storage order as `x y`, one per line.
#[inline]
pub fn write_plain<W: Write>(w: W, hull: &[Point]) -> io::Result<()> {
    write_points(w, hull)
}

/// Write hull vertices as a Graphviz graph.
pub fn write_dot<W: Write>(mut w: W, hull: &[Point]) -> io::Result<()> {
    writeln!(w, "graph hull {{")?;
    writeln!(w, "  node [shape=point];")?;
    for (k, p) in hull.iter().enumerate() {
        writeln!(w, "  p{k} [pos=\"{},{}!\", label=\"({}, {})\"];", p.x, p.y, p.x, p.y)?;
    }
    let n = hull.len();
    let edges = match n {
        0 | 1 => 0,
        2 => 1,
        _ => n,
    };
    for k in 0..edges {
        writeln!(w, "  p{} -- p{};", k, (k + 1) % n)?;
    }
    writeln!(w, "}}")?;
    Ok(())
}
