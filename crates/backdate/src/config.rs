// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Command-line configuration for backdate
//!
//! This module provides the clap front end: schedule parameters, identity
//! override, workspace selection and logging options, plus the validation
//! that must pass before anything in the repository is touched.

use std::path::PathBuf;

use backdate_git::Identity;
use chrono::NaiveDate;
use clap::Parser;

use crate::schedule::{ParticipationPolicy, Schedule, ScheduleWindow, VolumePolicy};

/// Generate commits in a git repository to fill in its contribution graph
#[derive(Parser, Debug, Clone)]
#[command(name = "backdate")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Config {
    /// Do not commit on weekends
    #[arg(long = "no_weekends", visible_alias = "no-weekends")]
    pub no_weekends: bool,

    /// Maximum commits per day (clamped to 1-20)
    #[arg(long = "max_commits", visible_alias = "max-commits", default_value_t = 7)]
    pub max_commits: i64,

    /// Percentage of days to commit on (0-100)
    #[arg(long, default_value_t = 70)]
    pub frequency: i64,

    /// Override git user.name for these commits
    ///
    /// Written to the repository's local config and left there.
    #[arg(long = "user_name", visible_alias = "user-name")]
    pub user_name: Option<String>,

    /// Override git user.email for these commits
    ///
    /// Written to the repository's local config and left there.
    #[arg(long = "user_email", visible_alias = "user-email")]
    pub user_email: Option<String>,

    /// Number of days in the past to start commits
    #[arg(long = "days_before", visible_alias = "days-before", default_value_t = 60)]
    pub days_before: i64,

    /// Number of days in the future to add commits
    #[arg(long = "days_after", visible_alias = "days-after", default_value_t = 0)]
    pub days_after: i64,

    /// Repository root to operate on
    ///
    /// Defaults to the current working directory.
    #[arg(short, long, env = "BACKDATE_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Print the planned commits as JSON lines without touching the repository
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs each planned day and every git invocation to stderr.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - only errors are logged
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_weekends: false,
            max_commits: 7,
            frequency: 70,
            user_name: None,
            user_email: None,
            days_before: 60,
            days_after: 0,
            workspace: None,
            dry_run: false,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Get the workspace path, using the current directory as default
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoWorkingDirectory` if no workspace is given and
    /// the current directory cannot be determined.
    pub fn workspace_path(&self) -> Result<PathBuf, ConfigError> {
        match self.workspace {
            Some(ref workspace) => Ok(workspace.clone()),
            None => std::env::current_dir().map_err(ConfigError::NoWorkingDirectory),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `days_before` or `days_after` is negative (`days_before` is checked first)
    /// - The workspace path is specified but doesn't exist or isn't a directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (flag, value) in [
            ("days_before", self.days_before),
            ("days_after", self.days_after),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeDays { flag, value });
            }
        }

        if let Some(ref workspace) = self.workspace {
            if !workspace.exists() {
                return Err(ConfigError::WorkspaceNotFound(workspace.clone()));
            }
            if !workspace.is_dir() {
                return Err(ConfigError::WorkspaceNotDirectory(workspace.clone()));
            }
        }

        Ok(())
    }

    /// The identity override requested on the command line
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            name: self.user_name.clone(),
            email: self.user_email.clone(),
        }
    }

    /// Build the schedule anchored on `today`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NegativeDays` for negative counts and
    /// `ConfigError::DaysOutOfRange` if the window leaves the calendar.
    pub fn schedule(&self, today: NaiveDate) -> Result<Schedule, ConfigError> {
        let days_before = day_count("days_before", self.days_before)?;
        let days_after = day_count("days_after", self.days_after)?;
        let window = ScheduleWindow::new(today, days_before, days_after).ok_or(
            ConfigError::DaysOutOfRange {
                days_before: self.days_before,
                days_after: self.days_after,
            },
        )?;

        Ok(Schedule::new(
            window,
            ParticipationPolicy::new(self.no_weekends, self.frequency),
            VolumePolicy::new(self.max_commits),
        ))
    }

    /// Get the log level based on verbose/quiet flags
    ///
    /// The default is WARN so a successful run prints only its summary.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}

fn day_count(flag: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeDays { flag, value });
    }
    u32::try_from(value).map_err(|_| ConfigError::DaysOutOfRange {
        days_before: if flag == "days_before" { value } else { 0 },
        days_after: if flag == "days_after" { value } else { 0 },
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A day count was negative
    #[error("{flag} must not be negative (got {value})")]
    NegativeDays {
        /// The offending flag name
        flag: &'static str,
        /// The value given
        value: i64,
    },

    /// The window reaches past the supported calendar
    #[error("Date window out of range: days_before={days_before}, days_after={days_after}")]
    DaysOutOfRange {
        /// Requested days before today
        days_before: i64,
        /// Requested days after today
        days_after: i64,
    },

    /// Workspace path not found
    #[error("Workspace path not found: {0}")]
    WorkspaceNotFound(PathBuf),

    /// Workspace path is not a directory
    #[error("Workspace path is not a directory: {0}")]
    WorkspaceNotDirectory(PathBuf),

    /// The current directory could not be determined
    #[error("Cannot determine current directory: {0}")]
    NoWorkingDirectory(std::io::Error),
}
