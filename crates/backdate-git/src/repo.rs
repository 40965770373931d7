// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository-level git operations
//!
//! These are thin compositions of [`Executor::run`] calls. None of them
//! inspect the outcome of the underlying git process.

use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::error::GitError;
use crate::executor::Executor;

/// Format passed to `git commit --date`
pub const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Check that `path` is the root of a git working tree
///
/// Only the presence of a `.git` entry is checked; a gitfile (as used by
/// worktrees and submodules) counts.
///
/// # Errors
///
/// Returns `GitError::RepositoryNotFound` if `path/.git` does not exist.
pub fn ensure_repo_root(path: impl AsRef<Path>) -> Result<(), GitError> {
    let path = path.as_ref();
    if path.join(".git").exists() {
        Ok(())
    } else {
        Err(GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })
    }
}

/// Optional override of the committer identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    /// Value for `user.name`
    pub name: Option<String>,
    /// Value for `user.email`
    pub email: Option<String>,
}

impl Identity {
    /// True if neither field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Write the set fields into the repository's local git config
    ///
    /// The change persists after the run.
    pub fn apply<E: Executor + ?Sized>(&self, executor: &E) {
        if let Some(ref name) = self.name {
            info!(%name, "setting git user.name");
            executor.run(&["config", "user.name", name]);
        }
        if let Some(ref email) = self.email {
            info!(%email, "setting git user.email");
            executor.run(&["config", "user.email", email]);
        }
    }
}

/// Stage `file` and commit it with `message`, dated `date`
pub fn commit_file<E: Executor + ?Sized>(
    executor: &E,
    file: &str,
    message: &str,
    date: NaiveDateTime,
) {
    let date = date.format(GIT_DATE_FORMAT).to_string();
    debug!(%file, %message, %date, "committing");
    executor.run(&["add", file]);
    executor.run(&["commit", "-m", message, "--date", &date]);
}
