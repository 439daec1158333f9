//! Locale merging with fallback to the source locale.
//!
//! Every locale in the set resolves to a value for every token:
//!
//! - simple tokens use the locale's own string unless it is absent or empty,
//!   in which case the source string is used;
//! - plural tokens use the locale's parsed branches unless none can be parsed,
//!   in which case the source locale's full branch set is used. A locale that
//!   defines only some categories keeps exactly those (no per-category fill-in).
//!
//! Output follows the locale set's insertion order.

use indexmap::IndexMap;

use super::classify::{ClassifiedToken, SourceForm};
use super::data::LocaleSet;
use super::parsers::plural::{PluralBranch, parse_plural};
use crate::issues::{Diagnostic, FallbackIssue, FallbackReason, MalformedPluralIssue};

/// Locale → resolved text.
pub type ResolvedSimpleText = IndexMap<String, String>;

/// Locale → resolved plural branches.
pub type ResolvedPluralBranches = IndexMap<String, Vec<PluralBranch>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Simple(ResolvedSimpleText),
    Plural(ResolvedPluralBranches),
}

/// Per-token merge result together with the fallbacks it took.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub resolved: Resolved,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve a classified token in every locale.
pub fn merge_token(
    token: &ClassifiedToken,
    locales: &LocaleSet,
    source_locale: &str,
) -> MergeOutcome {
    match &token.source {
        SourceForm::Simple(text) => {
            let (resolved, diagnostics) = merge_simple(&token.name, text, locales, source_locale);
            MergeOutcome {
                resolved: Resolved::Simple(resolved),
                diagnostics,
            }
        }
        SourceForm::Plural(branches) => {
            let (resolved, diagnostics) =
                merge_plural(&token.name, branches, locales, source_locale);
            MergeOutcome {
                resolved: Resolved::Plural(resolved),
                diagnostics,
            }
        }
    }
}

pub fn merge_simple(
    token: &str,
    source_text: &str,
    locales: &LocaleSet,
    source_locale: &str,
) -> (ResolvedSimpleText, Vec<Diagnostic>) {
    let mut resolved = ResolvedSimpleText::new();
    let mut diagnostics = Vec::new();

    for dictionary in locales.iter() {
        let locale = &dictionary.locale;
        if locale == source_locale {
            resolved.insert(locale.clone(), source_text.to_string());
            continue;
        }

        let text = match dictionary.get(token) {
            Some(text) if !text.is_empty() => text.to_string(),
            found => {
                let reason = if found.is_some() {
                    FallbackReason::Empty
                } else {
                    FallbackReason::Missing
                };
                diagnostics.push(Diagnostic::Fallback(FallbackIssue {
                    token: token.to_string(),
                    locale: locale.clone(),
                    source_locale: source_locale.to_string(),
                    reason,
                    file_path: dictionary.file_path.clone(),
                }));
                source_text.to_string()
            }
        };
        resolved.insert(locale.clone(), text);
    }

    (resolved, diagnostics)
}

pub fn merge_plural(
    token: &str,
    source_branches: &[PluralBranch],
    locales: &LocaleSet,
    source_locale: &str,
) -> (ResolvedPluralBranches, Vec<Diagnostic>) {
    let mut resolved = ResolvedPluralBranches::new();
    let mut diagnostics = Vec::new();

    for dictionary in locales.iter() {
        let locale = &dictionary.locale;
        if locale == source_locale {
            resolved.insert(locale.clone(), source_branches.to_vec());
            continue;
        }

        let branches = match dictionary.entry(token) {
            Some(entry) if !entry.value.is_empty() => match parse_plural(&entry.value) {
                Ok(branches) => branches,
                Err(error) => {
                    diagnostics.push(Diagnostic::MalformedPlural(MalformedPluralIssue {
                        token: token.to_string(),
                        locale: locale.clone(),
                        source_locale: source_locale.to_string(),
                        error,
                        location: entry.location.clone(),
                    }));
                    source_branches.to_vec()
                }
            },
            found => {
                let reason = if found.is_some() {
                    FallbackReason::Empty
                } else {
                    FallbackReason::Missing
                };
                diagnostics.push(Diagnostic::Fallback(FallbackIssue {
                    token: token.to_string(),
                    locale: locale.clone(),
                    source_locale: source_locale.to_string(),
                    reason,
                    file_path: dictionary.file_path.clone(),
                }));
                source_branches.to_vec()
            }
        };
        resolved.insert(locale.clone(), branches);
    }

    (resolved, diagnostics)
}
