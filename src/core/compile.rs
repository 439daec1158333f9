//! Compilation pipeline.
//!
//! Validates the locale set, then classifies and merges every source token.
//! Per-token work runs in parallel; results are collected back in source
//! order so the output never depends on scheduling. When several source
//! tokens are malformed, the first one in source order is reported.

use rayon::prelude::*;

use super::classify::{Bucket, TokenKind, classify};
use super::data::{LocaleDictionary, LocaleSet, MessageEntry};
use super::error::CompileError;
use super::merge::{Resolved, merge_token};
use crate::issues::{Diagnostic, Rule, UnknownTokenIssue};

/// A token with its final kind and the value resolved for every locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledToken {
    pub name: String,
    pub kind: TokenKind,
    pub resolved: Resolved,
    /// Raw source locale string, as written.
    pub source_raw: String,
}

/// Number of tokens in each bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenCounts {
    pub simple_no_args: usize,
    pub simple_with_args: usize,
    pub plural_with_args: usize,
}

impl TokenCounts {
    pub fn total(&self) -> usize {
        self.simple_no_args + self.simple_with_args + self.plural_with_args
    }
}

#[derive(Debug, Clone)]
pub struct CompiledDictionary {
    pub source_locale: String,
    /// Locale identifiers in output order.
    pub locales: Vec<String>,
    /// Tokens in source locale declaration order.
    pub tokens: Vec<CompiledToken>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompiledDictionary {
    /// Tokens of one bucket, in source order.
    pub fn bucket(&self, bucket: Bucket) -> impl Iterator<Item = &CompiledToken> {
        self.tokens
            .iter()
            .filter(move |token| token.kind.bucket() == bucket)
    }

    pub fn counts(&self) -> TokenCounts {
        let mut counts = TokenCounts::default();
        for token in &self.tokens {
            match token.kind.bucket() {
                Bucket::SimpleNoArgs => counts.simple_no_args += 1,
                Bucket::SimpleWithArgs => counts.simple_with_args += 1,
                Bucket::PluralWithArgs => counts.plural_with_args += 1,
            }
        }
        counts
    }

    /// How many (token, locale) pairs used the source locale's value.
    pub fn fallback_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.rule() == Rule::Fallback)
            .count()
    }
}

/// Compile a locale set against its source locale.
pub fn compile(
    locales: &LocaleSet,
    source_locale: &str,
) -> Result<CompiledDictionary, CompileError> {
    if locales.is_empty() {
        return Err(CompileError::EmptyLocaleSet);
    }
    let source = locales
        .get(source_locale)
        .ok_or_else(|| CompileError::MissingSourceLocale {
            locale: source_locale.to_string(),
            available: locales.locales().cloned().collect(),
        })?;

    let entries: Vec<(&String, &MessageEntry)> = source.iter().collect();
    let results: Vec<Result<(CompiledToken, Vec<Diagnostic>), CompileError>> = entries
        .par_iter()
        .map(|&(name, entry)| -> Result<_, CompileError> {
            let classified = classify(name, entry)?;
            let outcome = merge_token(&classified, locales, source_locale);
            let token = CompiledToken {
                name: classified.name,
                kind: classified.kind,
                resolved: outcome.resolved,
                source_raw: entry.value.clone(),
            };
            Ok((token, outcome.diagnostics))
        })
        .collect();

    let mut tokens = Vec::with_capacity(results.len());
    let mut diagnostics = Vec::new();
    for result in results {
        let (token, token_diagnostics) = result?;
        tokens.push(token);
        diagnostics.extend(token_diagnostics);
    }
    diagnostics.extend(unknown_tokens(locales, source));

    Ok(CompiledDictionary {
        source_locale: source_locale.to_string(),
        locales: locales.locales().cloned().collect(),
        tokens,
        diagnostics,
    })
}

/// Tokens that translated locales declare but the source locale does not.
fn unknown_tokens(locales: &LocaleSet, source: &LocaleDictionary) -> Vec<Diagnostic> {
    locales
        .iter()
        .filter(|dictionary| dictionary.locale != source.locale)
        .flat_map(|dictionary| {
            dictionary
                .iter()
                .filter(|(token, _)| !source.contains_key(token))
                .map(move |(token, entry)| {
                    Diagnostic::UnknownToken(UnknownTokenIssue {
                        token: token.clone(),
                        locale: dictionary.locale.clone(),
                        source_locale: source.locale.clone(),
                        location: entry.location.clone(),
                    })
                })
        })
        .collect()
}
