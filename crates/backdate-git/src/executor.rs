// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Invocation of the external git binary
//!
//! Call sites use [`Executor::run`], which waits for the process and never
//! reports its outcome back. [`Executor::status`] is the checked variant for
//! callers that do care.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use crate::error::GitError;

/// Something that can run git with an argument vector
pub trait Executor {
    /// Run git with `args`, wait for it to finish and return its exit status
    ///
    /// # Errors
    ///
    /// Returns `GitError::Spawn` if the process could not be started.
    fn status(&self, args: &[&str]) -> Result<ExitStatus, GitError>;

    /// Run git with `args` and wait for it to finish, ignoring the outcome
    ///
    /// Failures are logged at warn level and otherwise dropped.
    fn run(&self, args: &[&str]) {
        match self.status(args) {
            Ok(status) if status.success() => {}
            Ok(status) => warn!(?args, %status, "git exited unsuccessfully"),
            Err(e) => warn!(?args, error = %e, "git could not be run"),
        }
    }
}

/// Runs the system `git` binary inside a working directory
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
    workdir: PathBuf,
}

impl SystemGit {
    /// Create an executor for `git` rooted at `workdir`
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self::with_program("git", workdir)
    }

    /// Create an executor for an arbitrary git-compatible program
    #[must_use]
    pub fn with_program(program: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            workdir: workdir.into(),
        }
    }

    /// The directory git is run in
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    #[cfg(windows)]
    fn command(&self, args: &[&str]) -> Command {
        use std::os::windows::process::CommandExt;

        let mut cmd = Command::new("cmd");
        cmd.arg("/C")
            .raw_arg(shell_command_line(&self.program, args));
        cmd
    }

    #[cfg(not(windows))]
    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd
    }
}

impl Executor for SystemGit {
    fn status(&self, args: &[&str]) -> Result<ExitStatus, GitError> {
        let mut cmd = self.command(args);
        cmd.current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(program = %self.program, ?args, "spawning git");

        let output = cmd.output().map_err(|source| GitError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(stderr = %stderr.trim(), "git stderr");
        }

        Ok(output.status)
    }
}

/// Join a program and its arguments into one shell command line
///
/// Quoting follows the MSVC runtime rules, so an argument containing spaces
/// (a commit message, a date) survives `cmd /C` as a single argument.
#[must_use]
pub fn shell_command_line(program: &str, args: &[&str]) -> String {
    let mut line = String::new();
    for (i, arg) in std::iter::once(&program).chain(args.iter()).enumerate() {
        if i > 0 {
            line.push(' ');
        }
        push_quoted(&mut line, arg);
    }
    line
}

fn push_quoted(line: &mut String, arg: &str) {
    let needs_quotes = arg.is_empty() || arg.contains([' ', '\t']);
    if needs_quotes {
        line.push('"');
    }

    let mut backslashes = 0usize;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                line.extend(std::iter::repeat_n('\\', backslashes * 2 + 1));
                line.push('"');
                backslashes = 0;
            }
            _ => {
                line.extend(std::iter::repeat_n('\\', backslashes));
                line.push(c);
                backslashes = 0;
            }
        }
    }

    line.extend(std::iter::repeat_n('\\', backslashes));
    if needs_quotes {
        // Trailing backslashes must not escape the closing quote
        line.extend(std::iter::repeat_n('\\', backslashes));
        line.push('"');
    }
}

/// An executor that records argument vectors instead of running anything
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: RefCell<Vec<Vec<String>>>,
}

impl RecordingExecutor {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded invocations, in order
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Number of recorded invocations
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    /// True if nothing has been invoked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

impl Executor for RecordingExecutor {
    fn status(&self, args: &[&str]) -> Result<ExitStatus, GitError> {
        self.calls
            .borrow_mut()
            .push(args.iter().map(|a| (*a).to_string()).collect());
        Ok(ExitStatus::default())
    }
}
