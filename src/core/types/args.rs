use std::fmt;

use indexmap::IndexSet;

use crate::core::emit::escape::quote_key;

/// Variable names whose runtime value is numeric. Every other name is a string.
pub const NUMBER_ARG_NAMES: &[&str] = &["count", "found_count"];

/// Semantic type of an interpolation argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArgType {
    String,
    Number,
}

impl ArgType {
    /// Infer the type from the variable name alone.
    pub fn infer(name: &str) -> Self {
        if NUMBER_ARG_NAMES.contains(&name) {
            ArgType::Number
        } else {
            ArgType::String
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Number => "number",
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An interpolation argument a token requires.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: String,
    pub ty: ArgType,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let ty = ArgType::infer(&name);
        Self { name, ty }
    }
}

impl fmt::Display for Variable {
    /// Renders a record field: `name: string`, `'user-name': string`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", quote_key(&self.name), self.ty)
    }
}

/// Turn placeholder names into a unique variable list, keeping first-seen order.
pub fn infer_variables<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Variable> {
    names
        .into_iter()
        .map(Variable::new)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
