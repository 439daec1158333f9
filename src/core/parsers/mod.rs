//! Parsers for locale files and the strings inside them.
//!
//! - `json`: locale directory loader (`<locale>.json` → flat dictionary)
//! - `placeholder`: `{name}` placeholder extraction
//! - `plural`: `{count, plural, one [..] other [..]}` block scanner

pub mod json;
pub mod placeholder;
pub mod plural;
