//! Point files: CSV or Parquet with numeric `x` and `y` columns.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use safezone::Vec2;
use std::path::Path;

/// Read all rows of `path` as points. Integer columns are widened to `f64`.
///
/// Rows with a null or non-finite coordinate are an error (with the row index).
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Vec2<f64>>> {
    let path = path.as_ref();
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("opening {}", path.display()))?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("opening {}", path.display()))?,
        _ => bail!(
            "unsupported point file {} (expected .csv or .parquet)",
            path.display()
        ),
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let points = xs
        .into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok(Vec2::new(x, y)),
            (x, y) => Err(anyhow!(
                "{} row {row}: invalid point ({x:?}, {y:?})",
                path.display()
            )),
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(path = %path.display(), rows = points.len(), "read_points");
    Ok(points)
}
