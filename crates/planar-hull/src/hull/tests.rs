use super::*;
use crate::rand::{regular_polygon, uniform_in_box};
use nalgebra::vector;
use proptest::prelude::*;

fn square_with_center() -> PointSet {
    PointSet::new(vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
        vector![2.0, 2.0],
    ])
}

fn corners() -> Vec<Point> {
    vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ]
}

#[test]
fn square_excludes_center_for_every_entry_point() {
    let mut ps = square_with_center();
    assert_eq!(ps.compute_hull().unwrap(), corners().as_slice());
    assert_eq!(ps.compute_hull_upgrade().unwrap(), corners().as_slice());
    assert_eq!(ps.compute_best_hull().unwrap(), corners().as_slice());
    assert!(ps.contains(&vector![2.0, 2.0]));
    assert!(ps.contains(&vector![4.0, 2.0]));
    assert!(!ps.contains(&vector![4.5, 2.0]));
}

#[test]
fn triangle_with_interior_point() {
    let mut ps = PointSet::new(vec![
        vector![0.0, 0.0],
        vector![6.0, 0.0],
        vector![3.0, 6.0],
        vector![3.0, 2.0],
    ]);
    let hull = ps.compute_hull().unwrap().to_vec();
    assert_eq!(
        hull,
        vec![vector![0.0, 0.0], vector![6.0, 0.0], vector![3.0, 6.0]]
    );
    assert!(!hull.contains(&vector![3.0, 2.0]));
}

#[test]
fn collinear_points_keep_only_the_ends() {
    let mut ps = PointSet::new(vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]]);
    let line = Line::new(vector![0.0, 0.0], vector![2.0, 0.0]);
    assert_eq!(ps.farthest_point(&line, Side::Left).unwrap(), None);
    assert_eq!(ps.farthest_point(&line, Side::Right).unwrap(), None);
    let ends = vec![vector![0.0, 0.0], vector![2.0, 0.0]];
    assert_eq!(ps.compute_hull().unwrap(), ends.as_slice());
    assert_eq!(ps.compute_hull_upgrade().unwrap(), ends.as_slice());
    assert_eq!(ps.compute_best_hull().unwrap(), ends.as_slice());
    assert!(ps.contains(&vector![1.0, 0.0]));
    assert!(!ps.contains(&vector![3.0, 0.0]));
}

#[test]
fn vertical_points_fall_back_to_y_extremes() {
    let mut ps = PointSet::new(vec![vector![0.0, 1.0], vector![0.0, 0.0], vector![0.0, 2.0]]);
    let ends = vec![vector![0.0, 0.0], vector![0.0, 2.0]];
    assert_eq!(ps.compute_hull().unwrap(), ends.as_slice());
    assert_eq!(ps.compute_best_hull().unwrap(), ends.as_slice());
}

#[test]
fn single_and_repeated_points() {
    let p = vector![1.5, -2.0];
    let mut ps = PointSet::new(vec![p, p, p]);
    assert_eq!(ps.compute_hull().unwrap(), &[p]);
    assert_eq!(ps.compute_hull_upgrade().unwrap(), &[p]);
    assert_eq!(ps.compute_best_hull().unwrap(), &[p]);
    assert!(ps.contains(&p));
}

#[test]
fn empty_set_is_rejected() {
    let mut ps = PointSet::default();
    assert_eq!(ps.compute_hull(), Err(HullError::EmptyPointSet));
    assert_eq!(ps.compute_hull_upgrade(), Err(HullError::EmptyPointSet));
    assert_eq!(ps.compute_best_hull(), Err(HullError::EmptyPointSet));
    assert_eq!(ps.x_bounds(), Err(HullError::EmptyPointSet));
    assert!(ps.hull().is_empty());
    assert!(!ps.contains(&vector![0.0, 0.0]));
}

#[test]
fn best_hull_skips_interior_anchors() {
    // Interior points come first, so the first trials start off the hull.
    let pts = vec![
        vector![2.0, 5.0],
        vector![0.5, 3.0],
        vector![0.5, 7.0],
        vector![0.0, 10.0],
        vector![0.0, 0.0],
        vector![10.0, 5.0],
    ];
    let mut ps = PointSet::new(pts.clone());
    let hi = vector![10.0, 5.0];
    for anchor in &pts[..3] {
        let trial = quickhull::hull_from(&pts, *anchor, hi, HullVariant::Upgrade);
        assert!(matches!(trial, Err(HullError::SplitLimit { .. })));
    }
    let expected = vec![vector![0.0, 10.0], vector![0.0, 0.0], vector![10.0, 5.0]];
    assert_eq!(ps.compute_best_hull().unwrap(), expected.as_slice());
    assert_eq!(ps.compute_hull().unwrap(), expected.as_slice());
}

#[test]
fn recompute_replaces_previous_hull() {
    let mut ps = square_with_center();
    let first = ps.compute_best_hull().unwrap().to_vec();
    let again = ps.compute_hull().unwrap().to_vec();
    assert_eq!(first, again);
    assert_eq!(ps.compute_hull().unwrap(), again.as_slice());
}

#[test]
fn hull_is_counter_clockwise() {
    let mut ps = PointSet::new(uniform_in_box(300, 10.0, 42));
    let hull = ps.compute_hull().unwrap().to_vec();
    assert!(hull.len() >= 3);
    let n = hull.len();
    for k in 0..n {
        let edge = Line::new(hull[k], hull[(k + 1) % n]);
        assert_eq!(crate::geom::find_side(&edge, &hull[(k + 2) % n]), Side::Left);
    }
    assert!(ps.encloses_all(&hull));
}

#[test]
fn tie_on_parallel_edge_does_not_keep_midpoint() {
    // (2, 4) ties with the top corners for distance to the bottom edge.
    let mut ps = PointSet::new(vec![
        vector![0.0, 0.0],
        vector![2.0, 4.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ]);
    assert_eq!(ps.compute_hull().unwrap(), corners().as_slice());
    assert_eq!(ps.compute_hull_upgrade().unwrap(), corners().as_slice());
}

#[test]
fn best_hull_fails_when_every_trial_cycles() {
    // Nearly collinear cloud: rounding in the side tests makes every anchor
    // cycle until the split limit.
    let pts: Vec<Point> = uniform_in_box(200, 1.0, 490)
        .into_iter()
        .map(|p| vector![p.x, 0.3 * p.x + 1e-13 * p.y])
        .collect();
    let mut ps = PointSet::from(pts);
    assert!(!ps.is_empty());
    assert_eq!(
        ps.compute_hull(),
        Err(HullError::SplitLimit { limit: 200 })
    );
    assert!(matches!(
        ps.compute_best_hull(),
        Err(HullError::SplitLimit { .. })
    ));
    assert!(ps.hull().is_empty());
}

fn grid_point() -> impl Strategy<Value = Point> {
    (0i32..8, 0i32..8).prop_map(|(x, y)| vector![x as f64, y as f64])
}

fn grid_cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(grid_point(), 1..24)
}

fn same_set(a: &[Point], b: &[Point]) -> bool {
    a.len() == b.len() && a.iter().all(|p| b.contains(p))
}

proptest! {
    #[test]
    fn hull_is_a_duplicate_free_subset(pts in grid_cloud()) {
        let mut ps = PointSet::new(pts);
        for variant in [HullVariant::Baseline, HullVariant::Upgrade] {
            let hull = ps.compute(variant).unwrap().to_vec();
            prop_assert!(!hull.is_empty());
            prop_assert!(hull.iter().all(|p| ps.points().contains(p)));
            for (i, p) in hull.iter().enumerate() {
                prop_assert!(!hull[i + 1..].contains(p));
            }
            prop_assert!(ps.encloses_all(&hull));
        }
    }

    #[test]
    fn variants_agree_and_recompute_is_stable(pts in grid_cloud()) {
        let mut ps = PointSet::new(pts);
        let base = ps.compute_hull().unwrap().to_vec();
        let up = ps.compute_hull_upgrade().unwrap().to_vec();
        prop_assert_eq!(&base, &up);
        let again = ps.compute_hull().unwrap().to_vec();
        prop_assert_eq!(&base, &again);
    }

    #[test]
    fn best_hull_matches_the_x_extreme_hull(pts in grid_cloud()) {
        let mut ps = PointSet::new(pts);
        let base = ps.compute_hull().unwrap().to_vec();
        let best = ps.compute_best_hull().unwrap().to_vec();
        prop_assert!(same_set(&base, &best));
    }

    #[test]
    fn convex_position_keeps_every_point(
        pts in (3usize..24, 0usize..3).prop_flat_map(|(n, k)| {
            let phase = [0.0, 0.3, 1.1][k];
            Just(regular_polygon(n, 5.0, phase)).prop_shuffle()
        })
    ) {
        let mut ps = PointSet::new(pts.clone());
        let base = ps.compute_hull().unwrap().to_vec();
        prop_assert!(same_set(&base, &pts));
        let up = ps.compute_hull_upgrade().unwrap().to_vec();
        prop_assert!(same_set(&up, &pts));
    }

    #[test]
    fn interior_point_of_triangle_is_dropped(
        u in 1u32..99, v in 1u32..99
    ) {
        prop_assume!(u + v < 100);
        let a = vector![0.0, 0.0];
        let b = vector![100.0, 0.0];
        let c = vector![0.0, 100.0];
        let inner = vector![u as f64, v as f64];
        let mut ps = PointSet::new(vec![inner, a, b, c]);
        let hull = ps.compute_hull().unwrap().to_vec();
        prop_assert!(same_set(&hull, &[a, b, c]));
        prop_assert!(ps.contains(&inner));
    }
}
