use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use planar_hull::format::{write_dot, write_plain};
use planar_hull::{Point, PointSet};
use tracing_subscriber::fmt::SubscriberBuilder;

mod bench;
mod input;

#[derive(Parser, Debug)]
#[command(name = "hull")]
#[command(about = "Planar convex hull via QuickHull", version = planar_hull::VERSION)]
struct Cmd {
    /// Point list: text (counted or bare pairs), .csv or .parquet with x/y columns
    input: PathBuf,

    /// Destination for the hull, or the JSON report in benchmark mode
    output: PathBuf,

    /// Write the hull as a Graphviz graph instead of plain pairs
    #[arg(short, long)]
    dot: bool,

    /// Time both QuickHull variants instead of writing a hull
    #[arg(short, long)]
    benchmark: bool,

    /// Use the upgrade variant instead of the best-hull search
    #[arg(short, long)]
    upgrade: bool,

    /// Report whether (X, Y) lies in the hull instead of writing it
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    point: Option<Vec<f64>>,

    /// Benchmark repetitions
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    Benchmark,
    Query(Point),
    Write,
}

impl Cmd {
    fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() || self.output.as_os_str().is_empty() {
            bail!("input and output file names must not be empty");
        }
        // Compare resolved paths when both exist so `./a` and `a` match.
        let same = match (fs::canonicalize(&self.input), fs::canonicalize(&self.output)) {
            (Ok(a), Ok(b)) => a == b,
            _ => self.input == self.output,
        };
        if same {
            bail!("input and output files must be different");
        }
        Ok(())
    }

    fn mode(&self) -> Mode {
        if self.benchmark {
            return Mode::Benchmark;
        }
        match self.point.as_deref() {
            Some([x, y]) => Mode::Query(Point::new(*x, *y)),
            _ => Mode::Write,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    run(&cmd)
}

fn run(cmd: &Cmd) -> Result<()> {
    cmd.validate()?;
    let points = input::read_points(&cmd.input)?;
    tracing::info!(input = %cmd.input.display(), points = points.len(), "loaded");
    let mut set = PointSet::from(points);
    if set.is_empty() {
        bail!("input file {} holds no points", cmd.input.display());
    }

    match cmd.mode() {
        Mode::Benchmark => {
            let report = bench::run(&mut set, cmd.runs as usize)?;
            println!("{}", report.summary());
            bench::write_report(&cmd.output, &report)?;
            tracing::info!(output = %cmd.output.display(), "bench_report");
        }
        Mode::Query(p) => {
            compute(&mut set, cmd.upgrade)?;
            println!("{}", query_message(&p, set.contains(&p)));
        }
        Mode::Write => {
            compute(&mut set, cmd.upgrade)?;
            let file = File::create(&cmd.output).with_context(|| {
                format!("unable to open output file {}", cmd.output.display())
            })?;
            let mut w = BufWriter::new(file);
            if cmd.dot {
                write_dot(&mut w, set.hull())?;
            } else {
                write_plain(&mut w, set.hull())?;
            }
            w.flush()?;
            tracing::info!(
                output = %cmd.output.display(),
                vertices = set.hull().len(),
                dot = cmd.dot,
                "hull_written"
            );
        }
    }
    Ok(())
}

fn compute(set: &mut PointSet, upgrade: bool) -> Result<()> {
    let vertices = if upgrade {
        set.compute_hull_upgrade()?.len()
    } else {
        set.compute_best_hull()?.len()
    };
    tracing::info!(upgrade, vertices, "hull");
    Ok(())
}

fn query_message(p: &Point, inside: bool) -> String {
    let verdict = if inside { "is" } else { "is not" };
    format!("The point ({}, {}) {} in the hull.", p.x, p.y, verdict)
}
