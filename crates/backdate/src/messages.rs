// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit message catalog

use chrono::NaiveDateTime;

use crate::random::RandomSource;

/// Message prefixes, each suffixed with the commit's minute-precision time
pub const CATALOG: [&str; 8] = [
    "Update documentation",
    "Improve code quality",
    "Refactor components",
    "Add improvements",
    "Update styles",
    "Enhance features",
    "Fix bugs",
    "Optimize performance",
];

/// Timestamp format interpolated into messages
pub const MESSAGE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render catalog entry `index` for `timestamp`
///
/// # Panics
///
/// Panics if `index` is not below `CATALOG.len()`.
#[must_use]
pub fn render(index: usize, timestamp: NaiveDateTime) -> String {
    format!(
        "{} - {}",
        CATALOG[index],
        timestamp.format(MESSAGE_TIME_FORMAT)
    )
}

/// Pick a catalog entry uniformly at random and render it
pub fn pick<R: RandomSource + ?Sized>(rng: &mut R, timestamp: NaiveDateTime) -> String {
    let last = (CATALOG.len() - 1) as u32;
    render(rng.uniform(0, last) as usize, timestamp)
}
