// src/profile/mod.rs
//! Profile records as the directory returns them, and the person records
//! derived from them.
//!
//! Flow per profile:
//! ```text
//! RawProfile → eligibility::screen → Eligible → extract → PersonRecord
//!                                                 ↘ surname::masculinize
//! ```
//! `RawProfile` mirrors the wire shape: every field the API may omit is an
//! `Option`. `Eligible` is the only way to get a profile with a guaranteed
//! Cyrillic surname and a non-empty country title.
use serde::{Deserialize, Serialize};

pub mod eligibility;
pub mod extract;
pub mod surname;

pub use eligibility::{is_eligible, screen, Eligible};
pub use extract::{city_title, extract};
pub use surname::masculinize;

/// `{ "id": 1, "title": "Россия" }` objects used for `country` and `city`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Titled {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: String,
}

impl Titled {
    pub fn new(title: impl Into<String>) -> Self {
        Self { id: None, title: title.into() }
    }
}

/// One entry of a `users.get` response. Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProfile {
    pub id: u64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub deactivated: Option<String>,
    #[serde(default)]
    pub country: Option<Titled>,
    #[serde(default)]
    pub city: Option<Titled>,
    #[serde(default)]
    pub home_town: Option<String>,
}

/// Canonical record kept for every eligible profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub vk_id: u64,
    /// Masculinized, never empty.
    pub last_name: String,
    pub first_name: String,
    /// Never empty.
    pub country: String,
    pub city: String,
}
