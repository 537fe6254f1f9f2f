// src/profile/extract.rs
use super::{masculinize, Eligible, PersonRecord, RawProfile};
use crate::error::{HarvestError, Result};

impl Eligible<'_> {
    pub fn extract(&self) -> Result<PersonRecord> {
        build(self.profile, self.last_name, self.country)
    }
}

/// Extract from an unchecked profile. Fields the filter guarantees are
/// re-checked here and reported as `Malformed` instead of defaulted.
pub fn extract(profile: &RawProfile) -> Result<PersonRecord> {
    let last_name = profile
        .last_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(HarvestError::Malformed { id: profile.id, field: "last_name" })?;
    let country = profile
        .country
        .as_ref()
        .map(|c| c.title.trim())
        .filter(|s| !s.is_empty())
        .ok_or(HarvestError::Malformed { id: profile.id, field: "country" })?;

    build(profile, last_name, country)
}

fn build(profile: &RawProfile, last_name: &str, country: &str) -> Result<PersonRecord> {
    Ok(PersonRecord {
        vk_id: profile.id,
        last_name: masculinize(last_name)?,
        first_name: profile.first_name.as_deref().map(str::trim).unwrap_or_default().to_string(),
        country: country.to_string(),
        city: city_title(profile),
    })
}

/// `home_town` wins over `city.title`; empty when neither is set.
pub fn city_title(profile: &RawProfile) -> String {
    let home_town = profile.home_town.as_deref().map(str::trim).unwrap_or_default();
    if !home_town.is_empty() {
        return home_town.to_string();
    }
    profile
        .city
        .as_ref()
        .map(|c| c.title.trim().to_string())
        .unwrap_or_default()
}
