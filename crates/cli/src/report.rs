//! Tabular output for census runs: text report, per-table CSV, JSON summary.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;
use tangles::{Census, Kind, TangleTable};

/// Counts of one table as a frame: a `size` column, then one column per class.
pub fn counts_frame(table: &TangleTable) -> PolarsResult<DataFrame> {
    let counts = table.counts();
    let sizes: Vec<u32> = (0..=table.max_size() as u32).collect();
    let mut columns = vec![Series::new("size".into(), sizes)];
    for class in 1..=table.max_class() {
        let col: Vec<u64> = counts.iter().map(|row| row[class - 1] as u64).collect();
        columns.push(Series::new(class.to_string().as_str().into(), col));
    }
    DataFrame::new(columns)
}

/// Plain-text report: header, timing line, then one table per symmetry level.
pub fn render_text(census: &Census, elapsed_secs: f64) -> Result<String> {
    let title = format!("Enumeration of Tangles of size <= {}", census.max_size());
    let mut out = format!("{title}\n{}\n", "=".repeat(title.len()));
    out.push_str(&format!("computation took {elapsed_secs} seconds\n\n"));
    for kind in Kind::ALL {
        let df = counts_frame(census.table(kind))
            .with_context(|| format!("building {kind} table"))?;
        out.push_str(&format!("{kind}:\n{df}\n\n"));
    }
    Ok(out)
}

pub fn write_text<P: AsRef<Path>>(path: P, census: &Census, elapsed_secs: f64) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    fs::write(path, render_text(census, elapsed_secs)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// One `<kind>.csv` per table under `dir`.
pub fn write_csv_tables<P: AsRef<Path>>(dir: P, census: &Census) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut written = Vec::new();
    for kind in Kind::ALL {
        let path = dir.join(format!("{}.csv", kind.name()));
        let mut df = counts_frame(census.table(kind))?;
        let mut file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        CsvWriter::new(&mut file)
            .finish(&mut df)
            .with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

/// Machine-readable counts, `tables[kind][size][class - 1]`.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub max_size: usize,
    pub admit_trees: bool,
    pub elapsed_secs: f64,
    pub tables: BTreeMap<String, Vec<Vec<usize>>>,
    pub totals: BTreeMap<String, usize>,
}

impl Summary {
    pub fn new(census: &Census, elapsed_secs: f64) -> Self {
        let mut tables = BTreeMap::new();
        let mut totals = BTreeMap::new();
        for kind in Kind::ALL {
            tables.insert(kind.name().to_string(), census.counts(kind));
            totals.insert(kind.name().to_string(), census.table(kind).total());
        }
        Self {
            max_size: census.max_size(),
            admit_trees: census.cfg().classify.admit_trees,
            elapsed_secs,
            tables,
            totals,
        }
    }
}

pub fn write_json<P: AsRef<Path>>(path: P, summary: &Summary) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(summary)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
