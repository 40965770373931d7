// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! A single backdate run, from validation to summary

use std::io::Write;

use backdate_git::{Executor, ensure_repo_root};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::RunError;
use crate::ledger::{GitSink, JsonLinesSink};
use crate::random::RandomSource;
use crate::summary::RunSummary;

/// Execute a run anchored on `today`
///
/// Every precondition is checked before the repository is touched. Dry runs
/// write planned events to `out` as JSON lines and skip the repository
/// check, the identity override and all git invocations.
///
/// # Errors
///
/// Returns `RunError::Config` for invalid options, `RunError::Git` if the
/// workspace is not a repository root, and `RunError::Io` if the
/// contribution log cannot be written. Failed git invocations are not
/// errors.
pub fn run<R, E, W>(
    config: &Config,
    today: NaiveDate,
    rng: R,
    executor: &E,
    out: W,
) -> Result<RunSummary, RunError>
where
    R: RandomSource,
    E: Executor + ?Sized,
    W: Write,
{
    config.validate()?;
    let schedule = config.schedule(today)?;
    let workspace = config.workspace_path()?;

    debug!(
        workspace = %workspace.display(),
        start = %schedule.window.start(),
        days = schedule.window.len(),
        frequency = schedule.participation.frequency(),
        max_commits = schedule.volume.max(),
        "schedule ready"
    );

    if config.dry_run {
        let mut sink = JsonLinesSink::new(out);
        let total_commits = schedule.generate(rng, &mut sink)?;
        return Ok(RunSummary {
            total_commits,
            dry_run: true,
        });
    }

    ensure_repo_root(&workspace)?;

    let identity = config.identity();
    if !identity.is_empty() {
        identity.apply(executor);
    }

    let mut sink = GitSink::new(&workspace, executor);
    let total_commits = schedule.generate(rng, &mut sink)?;
    info!(total_commits, "history generated");

    Ok(RunSummary {
        total_commits,
        dry_run: false,
    })
}
