// src/tally/mod.rs
//! Surname popularity table: surname → { total, per-city, per-country }.
//!
//! Cities and countries are counted in separate maps so a place whose name
//! is both (e.g. "Сингапур") or a city literally called "total" cannot
//! collide with another counter.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::profile::PersonRecord;

mod rank;
pub use rank::rank;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurnameCounts {
    pub total: u64,
    pub cities: BTreeMap<String, u64>,
    pub countries: BTreeMap<String, u64>,
}

impl SurnameCounts {
    pub fn city(&self, city: &str) -> u64 {
        self.cities.get(city).copied().unwrap_or(0)
    }

    pub fn country(&self, country: &str) -> u64 {
        self.countries.get(country).copied().unwrap_or(0)
    }

    /// Count for a place name, looked up as a city first, then as a country.
    pub fn place(&self, place: &str) -> u64 {
        self.cities
            .get(place)
            .or_else(|| self.countries.get(place))
            .copied()
            .unwrap_or(0)
    }
}

/// Grows monotonically during a run; never updated or pruned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurnameTable {
    entries: BTreeMap<String, SurnameCounts>,
}

impl SurnameTable {
    pub fn new() -> Self { Self::default() }

    /// Count one observed person. Not idempotent: call exactly once per record.
    /// The city is counted even when empty, under the `""` key.
    pub fn enrich(&mut self, person: &PersonRecord) {
        let counts = self.entries.entry(person.last_name.clone()).or_default();
        *counts.cities.entry(person.city.clone()).or_insert(0) += 1;
        *counts.countries.entry(person.country.clone()).or_insert(0) += 1;
        counts.total += 1;
    }

    pub fn get(&self, last_name: &str) -> Option<&SurnameCounts> {
        self.entries.get(last_name)
    }

    /// Number of distinct surnames.
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SurnameCounts)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Panics on an unknown surname, like `BTreeMap` indexing.
impl<'a> std::ops::Index<&'a str> for SurnameTable {
    type Output = SurnameCounts;

    fn index(&self, last_name: &'a str) -> &SurnameCounts {
        &self.entries[last_name]
    }
}

/// Free-function form of [`SurnameTable::enrich`].
pub fn enrich(table: &mut SurnameTable, person: &PersonRecord) {
    table.enrich(person);
}
