// src/profile/eligibility.rs
use super::RawProfile;
use crate::config::consts::DELETED_STATUS;
use crate::core::script::starts_cyrillic;

/// A profile that passed the filter, with the fields the filter checked
/// already unwrapped.
#[derive(Clone, Copy, Debug)]
pub struct Eligible<'a> {
    pub(crate) profile: &'a RawProfile,
    pub(crate) last_name: &'a str,
    pub(crate) country: &'a str,
}

impl<'a> Eligible<'a> {
    pub fn profile(&self) -> &'a RawProfile { self.profile }
    pub fn last_name(&self) -> &'a str { self.last_name }
    pub fn country(&self) -> &'a str { self.country }
}

/// Keep a profile only if it is not deleted, its surname starts with a
/// Cyrillic letter, and it names a country.
pub fn screen(profile: &RawProfile) -> Option<Eligible<'_>> {
    if profile.deactivated.as_deref() == Some(DELETED_STATUS) {
        return None;
    }

    // Classified on the raw first character; " Иванова" is rejected.
    let raw = profile.last_name.as_deref()?;
    if !starts_cyrillic(raw) {
        return None;
    }
    let last_name = raw.trim_end();

    let country = profile.country.as_ref()?.title.trim();
    if country.is_empty() {
        return None;
    }

    Some(Eligible { profile, last_name, country })
}

pub fn is_eligible(profile: &RawProfile) -> bool {
    screen(profile).is_some()
}
