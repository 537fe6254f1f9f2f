// src/api/mod.rs
//! Directory API seam. The harvest driver only needs "profiles for these
//! ids"; transport, auth and envelope unwrapping live behind the trait.
use std::ops::Range;

use crate::error::Result;
use crate::profile::RawProfile;

mod vk;
pub use vk::VkDirectory;

pub trait Directory {
    /// Profiles for the ids in `ids`. Ids without an account are simply
    /// missing from the result.
    fn users(&self, ids: Range<u64>) -> Result<Vec<RawProfile>>;
}
