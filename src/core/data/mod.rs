//! Core data types shared by every pipeline stage.
//!
//! ## Module Structure
//!
//! - `message`: Locale dictionaries and their entries (LocaleSet, LocaleDictionary, MessageEntry)

pub mod message;

pub use message::{LocaleDictionary, LocaleSet, MessageEntry, MessageLocation};
