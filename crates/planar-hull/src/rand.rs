//! Seeded point clouds for tests and benches.
//!
//! Every sampler takes an explicit seed and draws from a single `StdRng`, so a
//! `(n, seed)` pair always reproduces the same cloud.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// `n` points uniformly distributed in the square `[-half_extent, half_extent]²`.
pub fn uniform_in_box(n: usize, half_extent: f64, seed: u64) -> Vec<Point> {
    let h = half_extent.abs().max(1e-9);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-h..h), rng.gen_range(-h..h)))
        .collect()
}

/// `n` points at random angles on a circle of `radius` around the origin.
///
/// Every point is a hull vertex (convex position), in random storage order.
pub fn on_circle(n: usize, radius: f64, seed: u64) -> Vec<Point> {
    let r = radius.abs().max(1e-9);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out: Vec<Point> = Vec::with_capacity(n);
    while out.len() < n {
        let th = rng.gen::<f64>() * std::f64::consts::TAU;
        let p = Point::new(th.cos() * r, th.sin() * r);
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

/// Regular `n`-gon with its first vertex at angle `phase`.
pub fn regular_polygon(n: usize, radius: f64, phase: f64) -> Vec<Point> {
    let delta = std::f64::consts::TAU / (n.max(1) as f64);
    (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta;
            Point::new(th.cos() * radius, th.sin() * radius)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samplers_are_reproducible() {
        assert_eq!(uniform_in_box(50, 3.0, 7), uniform_in_box(50, 3.0, 7));
        assert_ne!(uniform_in_box(50, 3.0, 7), uniform_in_box(50, 3.0, 8));
        assert_eq!(on_circle(20, 1.0, 1), on_circle(20, 1.0, 1));
    }

    #[test]
    fn samplers_respect_bounds() {
        for p in uniform_in_box(200, 2.5, 11) {
            assert!(p.x.abs() <= 2.5 && p.y.abs() <= 2.5);
        }
        for p in on_circle(64, 3.0, 5) {
            assert!((p.norm() - 3.0).abs() < 1e-9);
        }
        assert_eq!(regular_polygon(6, 1.0, 0.0).len(), 6);
    }
}
