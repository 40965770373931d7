// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for backdate-git

use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    /// The directory is not a repository root (no `.git` entry)
    #[error(
        "Not a git repository: {path}. Please run this command from your project root."
    )]
    RepositoryNotFound {
        /// The path that was checked for a `.git` entry
        path: String,
    },

    /// The git binary could not be started
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        /// The program that was invoked
        program: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
