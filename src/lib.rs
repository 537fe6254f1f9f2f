// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod api;
pub mod file;
pub mod harvest;
pub mod profile;
pub mod progress;
pub mod runner;
pub mod tally;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{HarvestError, Result, SurnameError};
