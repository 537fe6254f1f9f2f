// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::config::options::ExportOptions;
use crate::error::{HarvestError, Result};
use crate::harvest::Harvest;
use crate::tally::rank;

/// Write the three run artifacts into `export.out_dir`:
/// person records (JSON lines), the surname table and the ranked list
/// (pretty JSON). Returns the paths in that order.
pub fn write_artifacts(export: &ExportOptions, run: &Harvest) -> Result<Vec<PathBuf>> {
    ensure_directory(&export.out_dir)?;

    let people = export.people_path();
    write_json_lines(&people, &run.people)?;

    let table = export.table_path();
    write_json(&table, &run.table)?;

    let ranked = export.ranked_path();
    write_json(&ranked, &rank(&run.table))?;

    Ok(vec![people, table, ranked])
}

/// One compact JSON document per line; truncates an existing file.
pub fn write_json_lines<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let mut out = create(path)?;
    for item in items {
        serde_json::to_writer(&mut out, item)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Pretty-printed JSON with a trailing newline.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut out = create(path)?;
    serde_json::to_writer_pretty(&mut out, value)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(HarvestError::Config(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
