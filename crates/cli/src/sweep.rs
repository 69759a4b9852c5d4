//! Thread-count sweeps: run every operation over one document and tabulate timings.

use anyhow::{bail, Result};
use polars::prelude::*;
use shapebench::api;
use shapebench::{EngineError, Encoding, ExecCfg, ShapeKind};
use std::fs::File;
use std::path::Path;

/// One timed invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepRow {
    pub op: &'static str,
    pub threads: usize,
    pub repeat: usize,
    pub shapes: usize,
    pub elapsed_ms: f64,
    /// Filter/mutation: output length. Occupation: envelope area.
    pub metric: f64,
}

/// Run filter (by `kind`), mutation and occupation for each thread count, `repeat` times.
pub fn sweep<E: Encoding>(
    shapes: &[E],
    threads: &[usize],
    repeat: usize,
    kind: ShapeKind,
) -> Result<Vec<SweepRow>, EngineError> {
    let mut rows = Vec::with_capacity(threads.len() * repeat * 3);
    for &t in threads {
        let cfg = ExecCfg::parallel(t);
        for rep in 0..repeat {
            let row = |op: &'static str, elapsed_ms: f64, metric: f64| SweepRow {
                op,
                threads: t,
                repeat: rep,
                shapes: shapes.len(),
                elapsed_ms,
                metric,
            };
            let f = api::filter(shapes, kind, cfg)?;
            rows.push(row("filter", f.elapsed_ms, f.filtered.len() as f64));
            let m = api::mutation(shapes, cfg)?;
            rows.push(row("mutate", m.elapsed_ms, m.values.len() as f64));
            let o = api::occupation(shapes, cfg)?;
            rows.push(row("occupation", o.elapsed_ms, o.occupation));
            tracing::debug!(threads = t, repeat = rep, "sweep step");
        }
    }
    Ok(rows)
}

pub fn to_frame(mode: &str, rows: &[SweepRow]) -> PolarsResult<DataFrame> {
    df!(
        "op" => rows.iter().map(|r| r.op).collect::<Vec<_>>(),
        "mode" => vec![mode; rows.len()],
        "threads" => rows.iter().map(|r| r.threads as u64).collect::<Vec<_>>(),
        "repeat" => rows.iter().map(|r| r.repeat as u64).collect::<Vec<_>>(),
        "shapes" => rows.iter().map(|r| r.shapes as u64).collect::<Vec<_>>(),
        "elapsed_ms" => rows.iter().map(|r| r.elapsed_ms).collect::<Vec<_>>(),
        "metric" => rows.iter().map(|r| r.metric).collect::<Vec<_>>()
    )
}

/// Mean/min elapsed per (op, threads), in first-seen order.
pub fn summarize(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .group_by_stable([col("op"), col("threads")])
        .agg([
            col("elapsed_ms").mean().alias("mean_ms"),
            col("elapsed_ms").min().alias("min_ms"),
            col("metric").first().alias("metric"),
        ])
        .collect()
}

/// Write as CSV or Parquet depending on the extension.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            let mut file = File::create(path)?;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        Some("parquet") => {
            let file = File::create(path)?;
            ParquetWriter::new(file).finish(df)?;
        }
        _ => bail!(
            "unsupported table extension for {} (use .csv or .parquet)",
            path.display()
        ),
    }
    Ok(())
}
