//! Named argument type fragments.
//!
//! Recurring argument shapes are declared once as `type WithName = {name: string};`
//! and tokens reference them by intersection (`WithName & WithCount`). The table
//! is closed: a new well-known argument is added by editing [`BUILTIN_FRAGMENTS`].
//! Arguments missing from the table are still typed, as an inline record.

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;

use super::args::{ArgType, Variable};

/// `(variable name, type, fragment name)` for every well-known argument.
pub const BUILTIN_FRAGMENTS: &[(&str, ArgType, &str)] = &[
    ("name", ArgType::String, "WithName"),
    ("group_name", ArgType::String, "WithGroupName"),
    ("community_name", ArgType::String, "WithCommunityName"),
    ("other_name", ArgType::String, "WithOtherName"),
    ("author", ArgType::String, "WithAuthor"),
    ("emoji", ArgType::String, "WithEmoji"),
    ("emoji_name", ArgType::String, "WithEmojiName"),
    ("admin_name", ArgType::String, "WithAdminName"),
    ("time", ArgType::String, "WithTime"),
    ("time_large", ArgType::String, "WithTimeLarge"),
    ("time_small", ArgType::String, "WithTimeSmall"),
    (
        "disappearing_messages_type",
        ArgType::String,
        "WithDisappearingMessagesType",
    ),
    ("conversation_name", ArgType::String, "WithConversationName"),
    ("file_type", ArgType::String, "WithFileType"),
    ("date", ArgType::String, "WithDate"),
    ("date_time", ArgType::String, "WithDateTime"),
    ("message_snippet", ArgType::String, "WithMessageSnippet"),
    ("query", ArgType::String, "WithQuery"),
    ("version", ArgType::String, "WithVersion"),
    ("information", ArgType::String, "WithInformation"),
    ("device", ArgType::String, "WithDevice"),
    ("percent_loader", ArgType::String, "WithPercentLoader"),
    ("message_count", ArgType::String, "WithMessageCount"),
    ("conversation_count", ArgType::String, "WithConversationCount"),
    ("found_count", ArgType::Number, "WithFoundCount"),
    ("hash", ArgType::String, "WithHash"),
    ("url", ArgType::String, "WithUrl"),
    ("account_id", ArgType::String, "WithAccountId"),
    ("count", ArgType::Number, "WithCount"),
    ("service_node_id", ArgType::String, "WithServiceNodeId"),
    ("limit", ArgType::String, "WithLimit"),
    ("relative_time", ArgType::String, "WithRelativeTime"),
    ("icon", ArgType::String, "WithIcon"),
    ("storevariant", ArgType::String, "WithStoreVariant"),
    ("min", ArgType::String, "WithMin"),
    ("max", ArgType::String, "WithMax"),
];

static BUILTIN_REGISTRY: LazyLock<NamedArgRegistry> =
    LazyLock::new(|| NamedArgRegistry::from_table(BUILTIN_FRAGMENTS));

/// A reusable type alias bound to one `(name, type)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub name: &'static str,
    pub arg_name: &'static str,
    pub arg_type: ArgType,
}

impl fmt::Display for Fragment {
    /// Renders the alias declaration: `type WithName = {name: string};`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type {} = {{{}: {}}};",
            self.name, self.arg_name, self.arg_type
        )
    }
}

/// Immutable lookup from argument name to its fragment.
#[derive(Debug)]
pub struct NamedArgRegistry {
    fragments: IndexMap<&'static str, Fragment>,
}

impl NamedArgRegistry {
    /// The registry built from [`BUILTIN_FRAGMENTS`].
    pub fn builtin() -> &'static NamedArgRegistry {
        &BUILTIN_REGISTRY
    }

    pub fn from_table(table: &'static [(&'static str, ArgType, &'static str)]) -> Self {
        let fragments = table
            .iter()
            .map(|&(arg_name, arg_type, name)| {
                (
                    arg_name,
                    Fragment {
                        name,
                        arg_name,
                        arg_type,
                    },
                )
            })
            .collect();
        Self { fragments }
    }

    /// The fragment for a variable, if both its name and type are registered.
    pub fn fragment_for(&self, variable: &Variable) -> Option<&Fragment> {
        self.fragments
            .get(variable.name.as_str())
            .filter(|fragment| fragment.arg_type == variable.ty)
    }

    /// All fragments, in table order.
    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.values()
    }

    /// Compress a token's variables into fragments plus an inline remainder.
    pub fn shape_of(&self, variables: &[Variable]) -> ArgShape {
        let mut shape = ArgShape::default();
        for variable in variables {
            match self.fragment_for(variable) {
                Some(fragment) => shape.fragments.push(fragment.name),
                None => shape.inline.push(variable.clone()),
            }
        }
        shape
    }
}

/// The argument type of one token: `WithName & WithCount & { extra: string }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgShape {
    pub fragments: Vec<&'static str>,
    pub inline: Vec<Variable>,
}

impl ArgShape {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && self.inline.is_empty()
    }
}

impl fmt::Display for ArgShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("undefined");
        }

        let mut parts: Vec<String> = self.fragments.iter().map(|s| s.to_string()).collect();
        if !self.inline.is_empty() {
            let fields: Vec<String> = self.inline.iter().map(Variable::to_string).collect();
            parts.push(format!("{{ {} }}", fields.join(", ")));
        }
        f.write_str(&parts.join(" & "))
    }
}
