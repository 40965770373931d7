// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! backdate library
//!
//! This module exports the schedule generator and run orchestration used by
//! the `backdate` binary, for use in integration tests and as a library.

pub mod config;
pub mod error;
pub mod ledger;
pub mod messages;
pub mod random;
pub mod run;
pub mod schedule;
pub mod summary;

pub use config::{Config, ConfigError};
pub use error::RunError;
pub use random::{RandomSource, RngSource, ScriptedRandom};
pub use run::run;
pub use schedule::{CommitEvent, Schedule};
pub use summary::RunSummary;
