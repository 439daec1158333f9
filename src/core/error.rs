//! Fatal compile errors.
//!
//! Any of these aborts the run before output is produced. Recoverable
//! conditions are reported as [`crate::issues::Diagnostic`] instead.

use thiserror::Error;

use super::data::MessageLocation;
use super::parsers::plural::PluralSyntaxError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// No locale was provided at all.
    #[error("no locales to compile")]
    EmptyLocaleSet,

    /// The designated source locale is not part of the locale set.
    #[error("source locale '{locale}' not found (available: {})", .available.join(", "))]
    MissingSourceLocale {
        locale: String,
        available: Vec<String>,
    },

    /// The source string carries the plural marker but cannot be decomposed.
    #[error("invalid plural string for token '{token}': {reason}")]
    MalformedPluralSource {
        token: String,
        reason: PluralSyntaxError,
        location: Option<MessageLocation>,
    },
}

impl CompileError {
    /// Where the offending token was declared, when known.
    pub fn location(&self) -> Option<&MessageLocation> {
        match self {
            CompileError::MalformedPluralSource { location, .. } => location.as_ref(),
            CompileError::EmptyLocaleSet | CompileError::MissingSourceLocale { .. } => None,
        }
    }
}
