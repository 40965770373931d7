// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for a backdate run

use std::path::PathBuf;

use backdate_git::GitError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop a run
#[derive(Debug, Error)]
pub enum RunError {
    /// Invalid command-line configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Repository precondition or git spawn failure
    #[error(transparent)]
    Git(#[from] GitError),

    /// The contribution log could not be written
    #[error("Failed to write {path}: {source}")]
    Io {
        /// File being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Planned events could not be written to the output stream
    #[error("Failed to write planned events: {0}")]
    Output(#[source] std::io::Error),

    /// A planned event could not be serialized
    #[error("Failed to serialize commit event: {0}")]
    Json(#[from] serde_json::Error),
}
