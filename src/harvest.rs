// src/harvest.rs
use crate::{
    api::Directory,
    config::options::IdRange,
    error::Result,
    profile::{screen, PersonRecord, RawProfile},
    progress::Progress,
    tally::SurnameTable,
};

/// Accumulators for one run. Owned by the caller; nothing is global.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Harvest {
    pub people: Vec<PersonRecord>,
    pub table: SurnameTable,
}

impl Harvest {
    pub fn new() -> Self { Self::default() }

    /// Filter, extract and count one batch. Returns how many profiles were kept.
    pub fn absorb(&mut self, profiles: &[RawProfile]) -> Result<usize> {
        let mut kept = 0;
        for profile in profiles {
            let Some(eligible) = screen(profile) else { continue };
            let person = eligible.extract()?;
            self.table.enrich(&person);
            self.people.push(person);
            kept += 1;
        }
        Ok(kept)
    }
}

/// Walk `range` one batch at a time: fetch, then fold the batch in before
/// asking for the next. Any fetch or extraction error aborts the run.
pub fn harvest(
    directory: &dyn Directory,
    range: &IdRange,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Harvest> {
    range.validate()?;
    logf!(
        "Harvest: Begin ids={}..{} step={} batches={}",
        range.start, range.end, range.step, range.batch_count()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.begin(range.batch_count());
        p.log(&format!("Scanning ids {}..{} in steps of {}", range.start, range.end, range.step));
    }

    let mut run = Harvest::new();

    for ids in range.batches() {
        let profiles = directory.users(ids.clone()).inspect_err(|e| {
            loge!("Harvest: fetch {}..{} failed: {}", ids.start, ids.end, e);
        })?;
        let kept = run.absorb(&profiles).inspect_err(|e| {
            loge!("Harvest: batch {}..{} rejected: {}", ids.start, ids.end, e);
        })?;
        logd!("Harvest: batch {}..{} returned={} kept={}", ids.start, ids.end, profiles.len(), kept);

        if let Some(p) = progress.as_deref_mut() {
            p.batch_done(&ids, kept);
        }
    }

    logf!("Harvest: Done people={} surnames={}", run.people.len(), run.table.len());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(run)
}
