//! Report formatting and printing utilities.
//!
//! Diagnostics are printed cargo-style to stderr so that `generate --stdout`
//! leaves stdout holding only the generated module.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, CompileStats, GenerateSummary, InitSummary,
    OutputStatus, WriteOutcome,
};
use crate::core::CompileError;
use crate::issues::{Diagnostic, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Print diagnostics. Notes are listed only in verbose mode.
pub fn report_to<W: Write>(diagnostics: &[Diagnostic], verbose: bool, writer: &mut W) {
    for diagnostic in diagnostics
        .iter()
        .filter(|d| verbose || d.severity() == Severity::Warning)
    {
        print_diagnostic(diagnostic, writer);
    }

    let warnings = diagnostics
        .iter()
        .filter(|d| d.severity() == Severity::Warning)
        .count();
    if warnings > 0 {
        let _ = writeln!(
            writer,
            "{} generated {} {}",
            "warning:".bold().yellow(),
            warnings,
            plural(warnings, "warning", "warnings")
        );
    }
}

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W) {
    let severity = match diagnostic.severity() {
        Severity::Warning => "warning".bold().yellow(),
        Severity::Note => "note".bold().cyan(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        diagnostic.message(),
        diagnostic.rule().to_string().dimmed().cyan()
    );

    match diagnostic.location() {
        ReportLocation::Message(loc) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                loc.file_path,
                loc.line,
                loc.col
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
        ReportLocation::None => {}
    }

    if let Some(details) = diagnostic.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer);
}

/// Hint shown instead of per-token fallback notes when not verbose.
pub fn print_fallback_summary_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} {} fell back to the source locale (use {} for details)",
            "note:".bold().cyan(),
            count,
            plural(count, "translation", "translations"),
            "-v".cyan()
        );
    }
}

/// Print a fatal compile error to stderr.
pub fn print_compile_error(error: &CompileError) {
    print_compile_error_to(error, &mut io::stderr().lock());
}

pub fn print_compile_error_to<W: Write>(error: &CompileError, writer: &mut W) {
    let _ = writeln!(writer, "{}: {}", "error".bold().red(), error);
    if let Some(loc) = error.location() {
        let _ = writeln!(
            writer,
            "  {} {}:{}:{}",
            "-->".blue(),
            loc.file_path,
            loc.line,
            loc.col
        );
    }
    let _ = writeln!(
        writer,
        "  {} {} no output was written",
        "=".blue(),
        "note:".bold()
    );
}

fn describe(stats: &CompileStats) -> String {
    let tokens = stats.counts.total();
    format!(
        "{} {}, {} {}",
        tokens,
        plural(tokens, "token", "tokens"),
        stats.locale_count,
        plural(stats.locale_count, "locale", "locales")
    )
}

pub fn print_generate_to<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    let output = summary.output.display();
    let msg = match summary.outcome {
        WriteOutcome::Written => format!("Generated {} ({})", output, describe(&summary.stats)),
        WriteOutcome::Unchanged => {
            format!("{} is up to date ({})", output, describe(&summary.stats))
        }
        WriteOutcome::Stdout(_) => format!("Compiled {}", describe(&summary.stats)),
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

pub fn print_check_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let output = summary.output.display();
    match summary.status {
        OutputStatus::UpToDate => {
            let msg = format!("{} is up to date ({})", output, describe(&summary.stats));
            let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
        }
        OutputStatus::Stale | OutputStatus::Missing => {
            let problem = if summary.status == OutputStatus::Stale {
                "is out of date"
            } else {
                "does not exist"
            };
            let _ = writeln!(
                writer,
                "{} {} (run {})",
                FAILURE_MARK.red(),
                format!("{} {}", output, problem).red(),
                "dictgen generate".cyan()
            );
        }
    }
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

/// Print a command's full report: diagnostics and summary to stderr, the
/// generated module to stdout when it was requested there.
pub fn print(result: &CommandResult, verbose: bool) {
    let stderr = &mut io::stderr().lock();
    report_to(&result.diagnostics, verbose, stderr);

    match &result.summary {
        CommandSummary::Generate(summary) => {
            if let WriteOutcome::Stdout(text) = &summary.outcome {
                let _ = io::stdout().lock().write_all(text.as_bytes());
            }
            print_fallback_summary_to(summary.stats.fallback_count, verbose, stderr);
            print_generate_to(summary, stderr);
        }
        CommandSummary::Check(summary) => {
            print_fallback_summary_to(summary.stats.fallback_count, verbose, stderr);
            print_check_to(summary, stderr);
        }
        CommandSummary::Init(summary) => print_init_to(summary, stderr),
    }
}
