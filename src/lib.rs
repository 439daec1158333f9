//! dictgen - typed locale dictionary compiler
//!
//! dictgen reads per-locale JSON translation files and generates a single
//! TypeScript module: token name unions, argument types for every token, and
//! constant lookup tables holding every locale's text. Locales that lack a
//! translation fall back to the source locale, so the generated tables are
//! complete by construction.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Compiler pipeline (load, classify, merge, emit)
//! - `issues`: Diagnostic type definitions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
