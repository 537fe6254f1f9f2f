// src/runner.rs
use std::path::PathBuf;

use crate::{
    api::{Directory, VkDirectory},
    config::options::HarvestOptions,
    error::Result,
    file::write_artifacts,
    harvest::harvest,
    progress::Progress,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub people: usize,
    pub distinct_surnames: usize,
}

/// Top-level runner against the live VK directory.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    options: &HarvestOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let directory = VkDirectory::new(&options.api)?;
    run_with(&directory, options, progress)
}

/// Same as [`run`] with any directory implementation.
pub fn run_with(
    directory: &dyn Directory,
    options: &HarvestOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let outcome = harvest(directory, &options.range, progress)?;
    let files_written = write_artifacts(&options.export, &outcome).inspect_err(|e| {
        loge!("Export: {} failed: {}", options.export.out_dir.display(), e);
    })?;

    for path in &files_written {
        logf!("Export: wrote {}", path.display());
    }

    Ok(RunSummary {
        files_written,
        people: outcome.people.len(),
        distinct_surnames: outcome.table.len(),
    })
}
