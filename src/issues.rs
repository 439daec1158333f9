//! Diagnostic types for non-fatal findings.
//!
//! A diagnostic never stops generation: the pipeline has a documented answer
//! for every condition listed here (fallback to the source locale, skipping a
//! value, ignoring an unknown token). Each diagnostic is self-contained so the
//! reporter can print it without looking anything up.

use enum_dispatch::enum_dispatch;

use crate::core::MessageLocation;
use crate::core::parsers::plural::PluralSyntaxError;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    /// Expected behaviour worth knowing about; only listed in verbose mode.
    Note,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// Rule identifier for each diagnostic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Fallback,
    MalformedPlural,
    UnknownToken,
    NonStringValue,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Fallback => write!(f, "fallback"),
            Rule::MalformedPlural => write!(f, "malformed-plural"),
            Rule::UnknownToken => write!(f, "unknown-token"),
            Rule::NonStringValue => write!(f, "non-string-value"),
        }
    }
}

// ============================================================
// Diagnostic Types
// ============================================================

/// Why a locale resolved to the source locale's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The locale has no entry for the token.
    Missing,
    /// The locale's entry is an empty string.
    Empty,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::Missing => write!(f, "missing"),
            FallbackReason::Empty => write!(f, "empty"),
        }
    }
}

/// A locale used the source locale's value for a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackIssue {
    pub token: String,
    pub locale: String,
    pub source_locale: String,
    pub reason: FallbackReason,
    /// The locale's file, when it was loaded from disk.
    pub file_path: Option<String>,
}

impl FallbackIssue {
    pub fn severity() -> Severity {
        Severity::Note
    }

    pub fn rule() -> Rule {
        Rule::Fallback
    }
}

/// A translated plural string could not be parsed; the whole source branch
/// set is used for that locale instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedPluralIssue {
    pub token: String,
    pub locale: String,
    pub source_locale: String,
    pub error: PluralSyntaxError,
    pub location: Option<MessageLocation>,
}

impl MalformedPluralIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MalformedPlural
    }
}

/// A translated locale declares a token the source locale does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTokenIssue {
    pub token: String,
    pub locale: String,
    pub source_locale: String,
    pub location: Option<MessageLocation>,
}

impl UnknownTokenIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnknownToken
    }
}

/// A locale file holds a value that is not a string or an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonStringValueIssue {
    pub key: String,
    pub locale: String,
    /// JSON kind of the skipped value ("number", "array", ...).
    pub value_kind: &'static str,
    pub location: MessageLocation,
}

impl NonStringValueIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::NonStringValue
    }
}

// ============================================================
// Diagnostic Enum
// ============================================================

/// A non-fatal finding produced while loading or compiling locales.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Fallback(FallbackIssue),
    MalformedPlural(MalformedPluralIssue),
    UnknownToken(UnknownTokenIssue),
    NonStringValue(NonStringValueIssue),
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::Fallback(_) => FallbackIssue::severity(),
            Diagnostic::MalformedPlural(_) => MalformedPluralIssue::severity(),
            Diagnostic::UnknownToken(_) => UnknownTokenIssue::severity(),
            Diagnostic::NonStringValue(_) => NonStringValueIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Diagnostic::Fallback(_) => FallbackIssue::rule(),
            Diagnostic::MalformedPlural(_) => MalformedPluralIssue::rule(),
            Diagnostic::UnknownToken(_) => UnknownTokenIssue::rule(),
            Diagnostic::NonStringValue(_) => NonStringValueIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A line inside a locale file.
    Message(&'a MessageLocation),
    /// File-level only (no line information).
    File { path: &'a str },
    /// The locale was not loaded from a file.
    None,
}

/// Trait for types that can be reported to the CLI.
///
/// Implemented by all diagnostic types; dispatched on [`Diagnostic`] through
/// `enum_dispatch`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this diagnostic.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for FallbackIssue {
    fn location(&self) -> ReportLocation<'_> {
        match &self.file_path {
            Some(path) => ReportLocation::File { path },
            None => ReportLocation::None,
        }
    }

    fn message(&self) -> String {
        format!(
            "'{}' is {} in '{}', using '{}'",
            self.token, self.reason, self.locale, self.source_locale
        )
    }
}

impl Report for MalformedPluralIssue {
    fn location(&self) -> ReportLocation<'_> {
        self.location
            .as_ref()
            .map_or(ReportLocation::None, ReportLocation::Message)
    }

    fn message(&self) -> String {
        format!(
            "invalid plural string for '{}' in '{}': {}",
            self.token, self.locale, self.error
        )
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "all plural forms of '{}' are used for '{}'",
            self.source_locale, self.locale
        ))
    }
}

impl Report for UnknownTokenIssue {
    fn location(&self) -> ReportLocation<'_> {
        self.location
            .as_ref()
            .map_or(ReportLocation::None, ReportLocation::Message)
    }

    fn message(&self) -> String {
        format!(
            "'{}' in '{}' does not exist in '{}'",
            self.token, self.locale, self.source_locale
        )
    }

    fn details(&self) -> Option<String> {
        Some("the token is ignored".to_string())
    }
}

impl Report for NonStringValueIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.location)
    }

    fn message(&self) -> String {
        format!(
            "'{}' in '{}' is a {}, expected a string",
            self.key, self.locale, self.value_kind
        )
    }

    fn details(&self) -> Option<String> {
        Some("the value is skipped".to_string())
    }
}

// ============================================================
// Ordering for Diagnostic (for sorting in reports)
// ============================================================

impl Diagnostic {
    /// Get file path for sorting.
    fn sort_file_path(&self) -> Option<&str> {
        match self.location() {
            ReportLocation::Message(loc) => Some(&loc.file_path),
            ReportLocation::File { path } => Some(path),
            ReportLocation::None => None,
        }
    }

    /// Get line number for sorting.
    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(loc) => loc.line,
            ReportLocation::File { .. } | ReportLocation::None => 0,
        }
    }
}

impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        // Sort by: file_path (None last), line, rule, message
        let by_rule = |a: &Self, b: &Self| {
            a.rule()
                .cmp(&b.rule())
                .then_with(|| a.message().cmp(&b.message()))
        };
        match (self.sort_file_path(), other.sort_file_path()) {
            (Some(a), Some(b)) => a
                .cmp(b)
                .then_with(|| self.sort_line().cmp(&other.sort_line()))
                .then_with(|| by_rule(self, other)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => by_rule(self, other),
        }
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
