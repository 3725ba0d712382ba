//! junit-csv library
//!
//! This module exports the discovery, export and orchestration pieces of
//! junit-csv for use in integration tests and as a library.

pub mod config;
pub mod discover;
pub mod export;
pub mod run;
