//! Dictionary compiler core.
//!
//! A run flows through four stages:
//!
//! 1. **Load** (`parsers::json`): locale files become a [`LocaleSet`].
//! 2. **Classify** (`classify`): each source token is typed from the source
//!    locale's raw string alone.
//! 3. **Merge** (`merge`): every locale resolves a value for every token,
//!    falling back to the source locale.
//! 4. **Emit** (`emit`): the compiled dictionary is rendered to text.
//!
//! `compile` drives stages 2 and 3. Everything here is pure apart from the
//! loader; writing output is left to the CLI.
//!
//! ## Module Structure
//!
//! - `data`: locale dictionaries and their entries
//! - `parsers`: locale file loader, placeholder and plural string parsers
//! - `types`: argument type inference and the named-argument registry
//! - `classify`, `merge`, `compile`: the pipeline
//! - `emit`: generated module rendering
//! - `error`: fatal compile errors

pub mod classify;
pub mod compile;
pub mod data;
pub mod emit;
pub mod error;
pub mod merge;
pub mod parsers;
pub mod types;

pub use classify::{Bucket, ClassifiedToken, TokenKind, classify};
pub use compile::{CompiledDictionary, CompiledToken, TokenCounts, compile};
pub use data::{LocaleDictionary, LocaleSet, MessageEntry, MessageLocation};
pub use emit::{EmitOptions, Mode, OutputSchema, emit};
pub use error::CompileError;
pub use merge::Resolved;
