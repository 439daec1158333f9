//! Argument typing: inference from variable names and named fragments.
//!
//! ## Module Structure
//!
//! - `args`: ArgType / Variable and order-preserving deduplication
//! - `registry`: The closed table of well-known argument fragments

pub mod args;
pub mod registry;

pub use args::{ArgType, NUMBER_ARG_NAMES, Variable, infer_variables};
pub use registry::{ArgShape, BUILTIN_FRAGMENTS, Fragment, NamedArgRegistry};
