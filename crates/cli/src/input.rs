//! Point-list readers.
//!
//! Text files hold whitespace-separated coordinates, either `n` followed by
//! `n` pairs (odd token count) or bare pairs (even token count). `.csv` and
//! `.parquet` files are read through polars from columns `x` and `y`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use planar_hull::Point;
use polars::prelude::*;

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            read_table(lf).with_context(|| format!("reading {}", path.display()))
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            read_table(lf).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("unable to open input file {}", path.display()))?;
            parse_points(&text).with_context(|| format!("parsing {}", path.display()))
        }
    }
}

/// Parse a counted or bare whitespace-separated coordinate list.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let coords = match tokens.split_first() {
        Some((count, rest)) if tokens.len() % 2 == 1 => {
            let n: usize = count
                .parse()
                .with_context(|| format!("point count {count:?} is not a non-negative integer"))?;
            if rest.len() != 2 * n {
                bail!(
                    "header announces {n} points but {} coordinates follow",
                    rest.len()
                );
            }
            rest
        }
        _ => &tokens[..],
    };
    coords
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| -> Result<Point> {
            Ok(Point::new(coord(pair[0], i)?, coord(pair[1], i)?))
        })
        .collect()
}

fn coord(token: &str, index: usize) -> Result<f64> {
    let v: f64 = token
        .parse()
        .with_context(|| format!("point {index}: {token:?} is not a number"))?;
    if !v.is_finite() {
        bail!("point {index}: coordinate {token:?} is not finite");
    }
    Ok(v)
}

fn read_table(lf: LazyFrame) -> Result<Vec<Point>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(i, row)| -> Result<Point> {
            match row {
                (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok(Point::new(x, y)),
                _ => bail!("row {i}: missing or non-finite coordinate"),
            }
        })
        .collect()
}
