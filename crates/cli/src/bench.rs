//! Benchmark mode: time both QuickHull variants over repeated runs.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use planar_hull::{HullVariant, PointSet};
use serde::Serialize;

/// Which variant had the lower mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Faster {
    Baseline,
    Upgrade,
    Tie,
}

/// Mean timings of both variants over `runs` repetitions.
#[derive(Clone, Debug, Serialize)]
pub struct BenchReport {
    pub runs: usize,
    pub points: usize,
    pub hull_vertices: usize,
    pub baseline_mean_us: f64,
    pub upgrade_mean_us: f64,
    pub faster: Faster,
}

impl BenchReport {
    fn new(runs: usize, points: usize, hull_vertices: usize, baseline: f64, upgrade: f64) -> Self {
        let faster = if upgrade < baseline {
            Faster::Upgrade
        } else if baseline < upgrade {
            Faster::Baseline
        } else {
            Faster::Tie
        };
        Self {
            runs,
            points,
            hull_vertices,
            baseline_mean_us: baseline,
            upgrade_mean_us: upgrade,
            faster,
        }
    }

    /// Human-readable summary, one fact per line.
    pub fn summary(&self) -> String {
        let (b, u) = (self.baseline_mean_us, self.upgrade_mean_us);
        let verdict = match self.faster {
            Faster::Upgrade => format!(
                "Upgrade variant is faster by {:.1} us ({:.1}%).",
                b - u,
                percent(b - u, b)
            ),
            Faster::Baseline => format!(
                "Baseline variant is faster by {:.1} us ({:.1}%).",
                u - b,
                percent(u - b, b)
            ),
            Faster::Tie => "Both variants have identical performance.".to_string(),
        };
        format!(
            "Benchmark results (averaged over {} runs, {} points, {} hull vertices):\n\
             Baseline QuickHull: {:.1} us\n\
             Upgrade QuickHull: {:.1} us\n\
             {}",
            self.runs, self.points, self.hull_vertices, b, u, verdict
        )
    }
}

fn percent(delta: f64, base: f64) -> f64 {
    if base > 0.0 {
        delta / base * 100.0
    } else {
        0.0
    }
}

/// Alternate baseline and upgrade `runs` times each on the same set.
pub fn run(set: &mut PointSet, runs: usize) -> Result<BenchReport> {
    if runs == 0 {
        bail!("benchmark needs at least one run");
    }
    let mut total_baseline = 0.0;
    let mut total_upgrade = 0.0;
    for i in 0..runs {
        let t0 = Instant::now();
        set.compute(HullVariant::Baseline)?;
        let baseline = t0.elapsed().as_secs_f64() * 1e6;

        let t1 = Instant::now();
        set.compute(HullVariant::Upgrade)?;
        let upgrade = t1.elapsed().as_secs_f64() * 1e6;

        tracing::debug!(run = i, baseline_us = baseline, upgrade_us = upgrade, "bench_run");
        total_baseline += baseline;
        total_upgrade += upgrade;
    }
    let n = runs as f64;
    Ok(BenchReport::new(
        runs,
        set.len(),
        set.hull().len(),
        total_baseline / n,
        total_upgrade / n,
    ))
}

/// Write the report as pretty JSON.
pub fn write_report(path: &Path, report: &BenchReport) -> Result<()> {
    fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("unable to open output file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_hull::rand::uniform_in_box;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn report_covers_both_variants() {
        let mut set = PointSet::new(uniform_in_box(200, 1.0, 3));
        let report = run(&mut set, 3).unwrap();
        assert_eq!(report.runs, 3);
        assert_eq!(report.points, 200);
        assert!(report.hull_vertices >= 3);
        assert!(report.baseline_mean_us >= 0.0 && report.upgrade_mean_us >= 0.0);
        assert!(report.summary().contains("Baseline QuickHull"));
    }

    #[test]
    fn zero_runs_and_empty_sets_fail() {
        let mut set = PointSet::new(uniform_in_box(10, 1.0, 3));
        assert!(run(&mut set, 0).is_err());
        let mut empty = PointSet::default();
        assert!(run(&mut empty, 1).is_err());
    }

    #[test]
    fn verdict_follows_means() {
        assert_eq!(BenchReport::new(1, 1, 1, 10.0, 5.0).faster, Faster::Upgrade);
        assert_eq!(BenchReport::new(1, 1, 1, 5.0, 10.0).faster, Faster::Baseline);
        assert_eq!(BenchReport::new(1, 1, 1, 5.0, 5.0).faster, Faster::Tie);
    }

    #[test]
    fn report_is_written_as_json() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("bench.json");
        let report = BenchReport::new(2, 4, 4, 3.0, 2.0);
        write_report(&out, &report).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["runs"], 2);
        assert_eq!(parsed["faster"], "upgrade");
    }
}
