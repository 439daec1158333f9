use std::path::PathBuf;

use crate::core::TokenCounts;
use crate::issues::{Diagnostic, Severity};

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

/// What `generate` did with the emitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The output file was created or replaced.
    Written,
    /// The output file already had identical content.
    Unchanged,
    /// The text was requested on stdout; no file was touched.
    Stdout(String),
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub outcome: WriteOutcome,
    pub stats: CompileStats,
}

/// State of the output file compared to freshly emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    UpToDate,
    Stale,
    Missing,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub output: PathBuf,
    pub status: OutputStatus,
    pub stats: CompileStats,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileStats {
    pub counts: TokenCounts,
    pub locale_count: usize,
    /// (token, locale) pairs that used the source locale's value.
    pub fallback_count: usize,
}

/// Result of running dictgen commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Loader and compiler diagnostics, sorted for display.
    pub diagnostics: Vec<Diagnostic>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, mut diagnostics: Vec<Diagnostic>) -> Self {
        diagnostics.sort();
        Self {
            summary,
            diagnostics,
        }
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
            .count()
    }
}
