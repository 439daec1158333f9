use std::fmt::Write;

use super::DISCLAIMER;
use super::escape::{const_identifier, escape_single, quote_key};
use crate::core::compile::CompiledDictionary;

/// The source locale as one `as const` object, plus a `Dictionary` type alias.
///
/// Values are written exactly as they appear in the source file, plural
/// markers included.
pub(super) fn emit_single(dictionary: &CompiledDictionary) -> String {
    let name = const_identifier(&dictionary.source_locale);

    let mut out = String::from(DISCLAIMER);
    out.push('\n');
    let _ = writeln!(out, "export const {} = {{", name);
    for token in &dictionary.tokens {
        let _ = writeln!(
            out,
            "  {}: '{}',",
            quote_key(&token.name),
            escape_single(&token.source_raw)
        );
    }
    let _ = writeln!(out, "}} as const;");
    out.push('\n');
    let _ = writeln!(out, "export type Dictionary = typeof {};", name);
    out
}
