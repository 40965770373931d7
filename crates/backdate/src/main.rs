// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! backdate: fill a repository's contribution graph with dated commits
//!
//! Run from the root of a git repository. Commits are created one at a time
//! with `git commit --date`, each appending a line to `CONTRIBUTIONS.md`.

use backdate::random::RngSource;
use backdate::{Config, run};
use backdate_git::SystemGit;
use chrono::Local;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so dry-run output on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    let workspace = config.workspace_path()?;
    let git = SystemGit::new(&workspace);
    let today = Local::now().date_naive();

    let summary = run(
        &config,
        today,
        RngSource::thread(),
        &git,
        std::io::stdout().lock(),
    )?;

    // Dry-run stdout carries only the JSON event lines
    if summary.dry_run {
        eprint!("{summary}");
    } else {
        print!("{summary}");
    }
    Ok(())
}
