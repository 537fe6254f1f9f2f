// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::error::HarvestError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarvestOptions {
    pub range: IdRange,
    pub api: ApiOptions,
    pub export: ExportOptions,
    /// Emit a timing line every this many ids.
    pub report_every: u64,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            range: IdRange::default(),
            api: ApiOptions::default(),
            export: ExportOptions::default(),
            report_every: REPORT_EVERY_IDS,
        }
    }
}

/// Half-open account id range `[start, end)` walked in batches of `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdRange {
    pub start: u64,
    pub end: u64,
    pub step: u64,
}

impl Default for IdRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_ID,
            end: DEFAULT_END_ID,
            step: BATCH_SIZE,
        }
    }
}

impl IdRange {
    pub fn new(start: u64, end: u64, step: u64) -> Result<Self, HarvestError> {
        let range = Self { start, end, step };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), HarvestError> {
        if self.start >= self.end {
            return Err(HarvestError::Config(format!(
                "empty id range: start {} must be below end {}",
                self.start, self.end
            )));
        }
        if self.step == 0 || self.step > MAX_BATCH_SIZE {
            return Err(HarvestError::Config(format!(
                "batch step must be within 1..={MAX_BATCH_SIZE}, got {}",
                self.step
            )));
        }
        Ok(())
    }

    /// Contiguous, non-overlapping id batches; the last one is clipped to `end`.
    pub fn batches(&self) -> impl Iterator<Item = std::ops::Range<u64>> + '_ {
        (self.start..self.end)
            .step_by(self.step.max(1) as usize)
            .map(move |first| first..first.saturating_add(self.step).min(self.end))
    }

    pub fn batch_count(&self) -> usize {
        if self.step == 0 || self.start >= self.end {
            return 0;
        }
        (self.end - self.start).div_ceil(self.step) as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    pub base_url: String,
    pub version: String,
    pub lang: String,
    pub access_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: s!(API_BASE),
            version: s!(API_VERSION),
            lang: s!(API_LANG),
            access_token: None,
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn people_path(&self) -> PathBuf {
        self.out_dir.join(PEOPLE_FILE)
    }

    pub fn table_path(&self) -> PathBuf {
        self.out_dir.join(TABLE_FILE)
    }

    pub fn ranked_path(&self) -> PathBuf {
        self.out_dir.join(RANKED_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batches_are_contiguous_and_clipped() {
        let range = IdRange::new(1, 1_201, 500).unwrap();
        let got: Vec<_> = range.batches().collect();
        assert_eq!(got, vec![1..501, 501..1_001, 1_001..1_201]);
        assert_eq!(range.batch_count(), 3);
    }

    #[test]
    fn rejects_empty_range_and_oversized_step() {
        assert!(IdRange::new(10, 10, 5).is_err());
        assert!(IdRange::new(1, 10, 0).is_err());
        assert!(IdRange::new(1, 10, MAX_BATCH_SIZE + 1).is_err());
    }
}
