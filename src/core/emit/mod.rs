//! Artifact emission.
//!
//! Turns a [`CompiledDictionary`] into the text of the generated module. Two
//! modes exist:
//!
//! - `merged`: every locale, split into three typed tables plus the token
//!   name unions and per-token argument types;
//! - `single`: the source locale alone as one `as const` object.
//!
//! Merged output has two schemas. `flat` tables map locale → text, `nested`
//! tables additionally carry an `args` record of runtime type tags on every
//! argument-bearing token.
//!
//! Emission is pure: the same dictionary and options always produce the same
//! bytes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::compile::CompiledDictionary;

pub mod escape;
mod merged;
mod single;

/// Header written at the top of every generated file.
pub const DISCLAIMER: &str = "\
// This file was generated by dictgen. Do not modify this file manually.
// To make changes, modify the corresponding JSON file and re-run dictgen.
";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Only the source locale, as a plain constant object
    Single,
    /// All locales, with typed tables and argument types
    #[default]
    Merged,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputSchema {
    /// Locale → text tables
    #[default]
    Flat,
    /// Locale → text tables with an `args` record on argument-bearing tokens
    Nested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub mode: Mode,
    pub schema: OutputSchema,
    /// Name of the locale union type imported by merged output.
    pub locale_type: String,
    /// Module the locale union type is imported from.
    pub locale_type_module: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            schema: OutputSchema::default(),
            locale_type: "CrowdinLocale".to_string(),
            locale_type_module: "./constants".to_string(),
        }
    }
}

/// Render the generated module.
pub fn emit(dictionary: &CompiledDictionary, options: &EmitOptions) -> String {
    match options.mode {
        Mode::Single => single::emit_single(dictionary),
        Mode::Merged => merged::emit_merged(dictionary, options),
    }
}
