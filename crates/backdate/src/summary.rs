// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-of-run report

use std::fmt;

/// What a run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of commit events generated
    pub total_commits: usize,
    /// True if nothing was written to the repository
    pub dry_run: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            return writeln!(
                f,
                "Planned {} commits (dry run, repository untouched).",
                self.total_commits
            );
        }

        writeln!(f)?;
        writeln!(f, "Successfully generated {} commits!", self.total_commits)?;
        writeln!(f)?;
        writeln!(f, "To push these commits to GitHub, run:")?;
        writeln!(f, "  git push origin main --force")?;
        writeln!(f)?;
        writeln!(f, "Warning: This will rewrite history. Use with caution!")
    }
}
