// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! backdate-git: Git command execution for backdate
//!
//! This library crate wraps invocation of the system `git` binary for the
//! backdate generator: staging and committing with an overridden date,
//! setting the local identity, and checking that a directory is a
//! repository root.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use backdate_git::{Executor, SystemGit, commit_file, ensure_repo_root};
//! use chrono::NaiveDate;
//!
//! ensure_repo_root(".").expect("repository root");
//! let git = SystemGit::new(".");
//! let date = NaiveDate::from_ymd_opt(2026, 1, 5)
//!     .and_then(|d| d.and_hms_opt(20, 0, 0))
//!     .expect("valid date");
//! commit_file(&git, "CONTRIBUTIONS.md", "Fix bugs - 2026-01-05 20:00", date);
//! ```

pub mod error;
pub mod executor;
pub mod repo;

pub use error::GitError;
pub use executor::{Executor, RecordingExecutor, SystemGit, shell_command_line};
pub use repo::{GIT_DATE_FORMAT, Identity, commit_file, ensure_repo_root};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::GitError;
    pub use crate::executor::{Executor, RecordingExecutor, SystemGit};
    pub use crate::repo::{Identity, commit_file, ensure_repo_root};
}
