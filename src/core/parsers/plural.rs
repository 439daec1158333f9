//! Scanner for the plural mini-language embedded in translation strings.
//!
//! A plural string starts with the literal marker `{count, plural, ` followed
//! by `category [text]` branches and a closing `}`:
//!
//! ```text
//! {count, plural, one [1 item] other [{count} items]}
//! ```
//!
//! Branch text may contain `{placeholders}` but not `[` or `]`. Only the six
//! CLDR categories are recognized; the scanner records the branches the author
//! wrote and never selects one.

use std::fmt;

use thiserror::Error;

/// Every plural string starts with this exact prefix.
pub const PLURAL_MARKER: &str = "{count, plural, ";

/// CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == keyword)
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `category [text]` pair, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralBranch {
    pub category: PluralCategory,
    pub text: String,
}

impl PluralBranch {
    pub fn new(category: PluralCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

/// Why a plural string could not be decomposed into branches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluralSyntaxError {
    #[error("missing the '{{count, plural, ' prefix")]
    NotPlural,
    #[error("no plural categories found")]
    NoBranches,
    #[error("unknown plural category '{0}'")]
    UnknownCategory(String),
    #[error("unexpected character '{0}' where a plural category was expected")]
    UnexpectedChar(char),
    #[error("expected '[' after plural category '{0}'")]
    MissingOpenBracket(PluralCategory),
    #[error("nested '[' inside the '{0}' branch")]
    NestedBracket(PluralCategory),
    #[error("unterminated '{0}' branch, missing ']'")]
    UnterminatedBranch(PluralCategory),
    #[error("unterminated plural block, missing '}}'")]
    UnterminatedBlock,
}

pub fn is_plural(text: &str) -> bool {
    text.starts_with(PLURAL_MARKER)
}

/// Decompose a plural string into its ordered branches.
///
/// Branches with empty text are dropped. Anything after the closing `}` of the
/// block is ignored. At least one branch must remain.
pub fn parse_plural(text: &str) -> Result<Vec<PluralBranch>, PluralSyntaxError> {
    let body = text
        .strip_prefix(PLURAL_MARKER)
        .ok_or(PluralSyntaxError::NotPlural)?;

    let mut scanner = Scanner { rest: body };
    let mut branches = Vec::new();

    loop {
        scanner.skip_whitespace();
        match scanner.peek() {
            None => return Err(PluralSyntaxError::UnterminatedBlock),
            Some('}') => break,
            Some(_) => {}
        }

        let keyword = scanner.take_while(|c| c.is_ascii_alphabetic());
        if keyword.is_empty() {
            let c = scanner.peek().unwrap_or('}');
            return Err(PluralSyntaxError::UnexpectedChar(c));
        }
        let category = PluralCategory::from_keyword(keyword)
            .ok_or_else(|| PluralSyntaxError::UnknownCategory(keyword.to_string()))?;

        scanner.skip_whitespace();
        if !scanner.eat('[') {
            return Err(PluralSyntaxError::MissingOpenBracket(category));
        }

        let text = scanner.branch_text(category)?;
        if !text.is_empty() {
            branches.push(PluralBranch::new(category, text));
        }
    }

    if branches.is_empty() {
        return Err(PluralSyntaxError::NoBranches);
    }
    Ok(branches)
}

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn eat(&mut self, expected: char) -> bool {
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let end = self.rest.find(|c| !pred(c)).unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        head
    }

    /// Read up to the `]` closing the current branch. The opening `[` has
    /// already been consumed.
    fn branch_text(&mut self, category: PluralCategory) -> Result<&'a str, PluralSyntaxError> {
        match self.rest.find(['[', ']']) {
            Some(end) if self.rest[end..].starts_with(']') => {
                let text = &self.rest[..end];
                self.rest = &self.rest[end + 1..];
                Ok(text)
            }
            Some(_) => Err(PluralSyntaxError::NestedBracket(category)),
            None => Err(PluralSyntaxError::UnterminatedBranch(category)),
        }
    }
}
