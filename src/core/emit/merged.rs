use std::fmt::Write;

use super::escape::{escape_double, locale_key, quote_key, single_quoted};
use super::{DISCLAIMER, EmitOptions, OutputSchema};
use crate::core::classify::Bucket;
use crate::core::compile::{CompiledDictionary, CompiledToken};
use crate::core::merge::Resolved;
use crate::core::types::{NamedArgRegistry, Variable};

pub(super) fn emit_merged(dictionary: &CompiledDictionary, options: &EmitOptions) -> String {
    let registry = NamedArgRegistry::builtin();
    let nested = options.schema == OutputSchema::Nested;
    let locale_record = format!("Record<{}, string>", options.locale_type);

    let sections = [
        DISCLAIMER.to_string(),
        format!(
            "import type {{ {} }} from '{}';\n",
            options.locale_type, options.locale_type_module
        ),
        fragment_declarations(registry),
        token_union("TokenSimpleNoArgs", dictionary.bucket(Bucket::SimpleNoArgs)),
        args_type_map(
            "TokensSimpleAndArgs",
            dictionary.bucket(Bucket::SimpleWithArgs),
            registry,
        ),
        args_type_map(
            "TokensPluralAndArgs",
            dictionary.bucket(Bucket::PluralWithArgs),
            registry,
        ),
        token_union(
            "TokenSimpleWithArgs",
            dictionary.bucket(Bucket::SimpleWithArgs),
        ),
        token_union(
            "TokenPluralWithArgs",
            dictionary.bucket(Bucket::PluralWithArgs),
        ),
        table(
            &format!(
                "export const simpleDictionaryNoArgs: Record<\n  TokenSimpleNoArgs,\n  {}\n> =",
                locale_record
            ),
            dictionary.bucket(Bucket::SimpleNoArgs),
            false,
        ),
        if nested {
            table(
                "export const simpleDictionaryWithArgs =",
                dictionary.bucket(Bucket::SimpleWithArgs),
                true,
            )
        } else {
            table(
                &format!(
                    "export const simpleDictionaryWithArgs: Record<\n  TokenSimpleWithArgs,\n  {}\n> =",
                    locale_record
                ),
                dictionary.bucket(Bucket::SimpleWithArgs),
                false,
            )
        },
        table(
            "export const pluralsDictionaryWithArgs =",
            dictionary.bucket(Bucket::PluralWithArgs),
            nested,
        ),
    ];

    sections.join("\n")
}

/// `type WithName = {name: string};` for every registry entry.
fn fragment_declarations(registry: &NamedArgRegistry) -> String {
    let mut out = String::new();
    for fragment in registry.fragments() {
        let _ = writeln!(out, "{}", fragment);
    }
    out
}

/// `export type Name = 'a' | 'b';`, or `never` for an empty bucket.
fn token_union<'a>(type_name: &str, tokens: impl Iterator<Item = &'a CompiledToken>) -> String {
    let mut out = format!("export type {} =", type_name);
    let mut empty = true;
    for token in tokens {
        let _ = write!(out, "\n  | {}", single_quoted(&token.name));
        empty = false;
    }
    if empty {
        out.push_str(" never");
    }
    out.push_str(";\n");
    out
}

/// `export type Name = { token: WithName & { extra: string }; };`
fn args_type_map<'a>(
    type_name: &str,
    tokens: impl Iterator<Item = &'a CompiledToken>,
    registry: &NamedArgRegistry,
) -> String {
    let mut body = String::new();
    for token in tokens {
        let shape = registry.shape_of(token.kind.args());
        let _ = writeln!(body, "  {}: {};", quote_key(&token.name), shape);
    }

    if body.is_empty() {
        format!("export type {} = {{}};\n", type_name)
    } else {
        format!("export type {} = {{\n{}}};\n", type_name, body)
    }
}

/// `{name: "string", count: "number"}`: runtime type tags for the nested schema.
fn args_record(variables: &[Variable]) -> String {
    let fields: Vec<String> = variables
        .iter()
        .map(|v| format!("{}: \"{}\"", quote_key(&v.name), v.ty))
        .collect();
    format!("{{{}}}", fields.join(", "))
}

/// One constant table: token → locale → text (or branch map).
fn table<'a>(
    header: &str,
    tokens: impl Iterator<Item = &'a CompiledToken>,
    with_args: bool,
) -> String {
    let mut body = String::new();
    for token in tokens {
        let _ = writeln!(body, "  {}: {{", quote_key(&token.name));
        match &token.resolved {
            Resolved::Simple(texts) => {
                for (locale, text) in texts {
                    let _ = writeln!(body, "    {}: \"{}\",", locale_key(locale), escape_double(text));
                }
            }
            Resolved::Plural(locales) => {
                for (locale, branches) in locales {
                    let _ = writeln!(body, "    {}: {{", locale_key(locale));
                    for branch in branches {
                        let _ = writeln!(
                            body,
                            "      {}: \"{}\",",
                            branch.category,
                            escape_double(&branch.text)
                        );
                    }
                    let _ = writeln!(body, "    }},");
                }
            }
        }
        if with_args {
            let _ = writeln!(body, "    args: {},", args_record(token.kind.args()));
        }
        let _ = writeln!(body, "  }},");
    }

    if body.is_empty() {
        format!("{} {{}} as const;\n", header)
    } else {
        format!("{} {{\n{}}} as const;\n", header, body)
    }
}
