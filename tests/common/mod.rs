// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ops::Range;

use vk_surnames::api::Directory;
use vk_surnames::profile::{RawProfile, Titled};
use vk_surnames::{HarvestError, Result};

pub fn profile(id: u64, last_name: &str) -> RawProfile {
    RawProfile {
        id,
        first_name: Some("Анна".into()),
        last_name: Some(last_name.into()),
        country: Some(Titled::new("Россия")),
        ..RawProfile::default()
    }
}

pub fn in_city(mut p: RawProfile, city: &str) -> RawProfile {
    p.city = Some(Titled::new(city));
    p
}

pub fn deleted(id: u64) -> RawProfile {
    RawProfile {
        id,
        first_name: Some("DELETED".into()),
        last_name: Some("".into()),
        deactivated: Some("deleted".into()),
        ..RawProfile::default()
    }
}

/// In-memory directory keyed by account id. Records every requested range.
#[derive(Default)]
pub struct FakeDirectory {
    pub profiles: BTreeMap<u64, RawProfile>,
    pub calls: RefCell<Vec<Range<u64>>>,
    pub fail_at: Option<u64>,
}

impl FakeDirectory {
    pub fn with(profiles: impl IntoIterator<Item = RawProfile>) -> Self {
        Self {
            profiles: profiles.into_iter().map(|p| (p.id, p)).collect(),
            ..Self::default()
        }
    }
}

impl Directory for FakeDirectory {
    fn users(&self, ids: Range<u64>) -> Result<Vec<RawProfile>> {
        self.calls.borrow_mut().push(ids.clone());
        if let Some(bad) = self.fail_at {
            if ids.contains(&bad) {
                return Err(HarvestError::Api { code: 6, message: "Too many requests per second".into() });
            }
        }
        Ok(self.profiles.range(ids).map(|(_, p)| p.clone()).collect())
    }
}
