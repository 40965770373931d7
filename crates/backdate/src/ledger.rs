// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Consumers of generated commit events
//!
//! [`GitSink`] is the real one: it appends the event's message to
//! `CONTRIBUTIONS.md`, stages that file and commits it with the event's
//! timestamp. [`JsonLinesSink`] and [`PlanSink`] have no repository side
//! effects.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use backdate_git::{Executor, commit_file};
use tracing::debug;

use crate::error::RunError;
use crate::schedule::CommitEvent;

/// Name of the log file every commit touches
pub const CONTRIBUTIONS_FILE: &str = "CONTRIBUTIONS.md";

/// Something that consumes events one at a time, in order
pub trait EventSink {
    /// Handle one event before the next is generated
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be recorded; generation stops.
    fn accept(&mut self, event: &CommitEvent) -> Result<(), RunError>;
}

/// Append-only text log in the working tree
#[derive(Debug, Clone)]
pub struct ContributionLog {
    path: PathBuf,
}

impl ContributionLog {
    /// Log at `workdir/CONTRIBUTIONS.md`
    #[must_use]
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Self {
            path: workdir.as_ref().join(CONTRIBUTIONS_FILE),
        }
    }

    /// Path of the log file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `line` and a newline, creating the file if needed
    ///
    /// # Errors
    ///
    /// Returns `RunError::Io` if the file cannot be opened or written.
    pub fn append(&self, line: &str) -> Result<(), RunError> {
        let io_err = |source| RunError::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        writeln!(file, "{line}").map_err(io_err)
    }
}

/// Writes each event to the log and commits it
pub struct GitSink<'a, E: Executor + ?Sized> {
    log: ContributionLog,
    executor: &'a E,
}

impl<'a, E: Executor + ?Sized> GitSink<'a, E> {
    /// Sink committing in `workdir` through `executor`
    #[must_use]
    pub fn new(workdir: impl AsRef<Path>, executor: &'a E) -> Self {
        Self {
            log: ContributionLog::new(workdir),
            executor,
        }
    }
}

impl<E: Executor + ?Sized> EventSink for GitSink<'_, E> {
    fn accept(&mut self, event: &CommitEvent) -> Result<(), RunError> {
        self.log.append(&event.message)?;
        commit_file(
            self.executor,
            CONTRIBUTIONS_FILE,
            &event.message,
            event.timestamp,
        );
        Ok(())
    }
}

/// Prints each event as one JSON object per line
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Sink writing to `out`
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn accept(&mut self, event: &CommitEvent) -> Result<(), RunError> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out).map_err(RunError::Output)?;
        debug!(timestamp = %event.timestamp, "planned");
        Ok(())
    }
}

/// Collects events in memory
#[derive(Debug, Default)]
pub struct PlanSink {
    events: Vec<CommitEvent>,
}

impl PlanSink {
    /// Everything accepted so far
    #[must_use]
    pub fn events(&self) -> &[CommitEvent] {
        &self.events
    }

    /// Take ownership of the collected events
    #[must_use]
    pub fn into_events(self) -> Vec<CommitEvent> {
        self.events
    }
}

impl EventSink for PlanSink {
    fn accept(&mut self, event: &CommitEvent) -> Result<(), RunError> {
        self.events.push(event.clone());
        Ok(())
    }
}
