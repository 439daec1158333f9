//! Token classification.
//!
//! A token's kind is decided once, from the source locale's raw string, and
//! reused for merging and emission. Translations never change a token's
//! argument contract.

use super::error::CompileError;
use super::parsers::placeholder::extract_placeholders;
use super::parsers::plural::{PluralBranch, is_plural, parse_plural};
use super::types::{Variable, infer_variables};
use crate::core::MessageEntry;

/// Name of the variable that drives plural category selection.
pub const PLURAL_COUNT_VAR: &str = "count";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    SimpleNoArgs,
    SimpleWithArgs(Vec<Variable>),
    PluralWithArgs(Vec<Variable>),
}

impl TokenKind {
    /// Arguments the token requires; empty for `SimpleNoArgs`.
    pub fn args(&self) -> &[Variable] {
        match self {
            TokenKind::SimpleNoArgs => &[],
            TokenKind::SimpleWithArgs(args) | TokenKind::PluralWithArgs(args) => args,
        }
    }

    pub fn bucket(&self) -> Bucket {
        match self {
            TokenKind::SimpleNoArgs => Bucket::SimpleNoArgs,
            TokenKind::SimpleWithArgs(_) => Bucket::SimpleWithArgs,
            TokenKind::PluralWithArgs(_) => Bucket::PluralWithArgs,
        }
    }
}

/// The three disjoint groups tokens are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    SimpleNoArgs,
    SimpleWithArgs,
    PluralWithArgs,
}

/// The source locale's parsed form of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceForm {
    Simple(String),
    Plural(Vec<PluralBranch>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub name: String,
    pub kind: TokenKind,
    pub source: SourceForm,
}

/// Classify a token from its source locale entry.
///
/// Plural tokens take their variables from the first branch's text, with
/// `count` appended when the branch does not mention it.
pub fn classify(name: &str, entry: &MessageEntry) -> Result<ClassifiedToken, CompileError> {
    let raw = entry.value.as_str();

    if is_plural(raw) {
        let branches = parse_plural(raw).map_err(|reason| CompileError::MalformedPluralSource {
            token: name.to_string(),
            reason,
            location: entry.location.clone(),
        })?;

        let mut names = extract_placeholders(&branches[0].text);
        if !names.contains(&PLURAL_COUNT_VAR) {
            names.push(PLURAL_COUNT_VAR);
        }

        return Ok(ClassifiedToken {
            name: name.to_string(),
            kind: TokenKind::PluralWithArgs(infer_variables(names)),
            source: SourceForm::Plural(branches),
        });
    }

    let variables = infer_variables(extract_placeholders(raw));
    let kind = if variables.is_empty() {
        TokenKind::SimpleNoArgs
    } else {
        TokenKind::SimpleWithArgs(variables)
    };

    Ok(ClassifiedToken {
        name: name.to_string(),
        kind,
        source: SourceForm::Simple(raw.to_string()),
    })
}
