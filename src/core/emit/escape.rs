//! Quoting and escaping rules for generated literals.

use std::borrow::Cow;

/// True when `key` can be written as a bare object key (`[A-Za-z0-9_]+`).
pub fn is_bare_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Write an object key bare when possible, single-quoted otherwise.
pub fn quote_key(key: &str) -> Cow<'_, str> {
    if is_bare_key(key) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(single_quoted(key))
    }
}

/// Line terminators that may not appear raw inside a string literal.
fn escape_line_breaks(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Content of a double-quoted string literal.
pub fn escape_double(value: &str) -> String {
    escape_line_breaks(value).replace('"', "\\\"")
}

/// Content of a single-quoted string literal.
pub fn escape_single(value: &str) -> String {
    escape_line_breaks(value).replace('\'', "\\'")
}

pub fn single_quoted(value: &str) -> String {
    format!("'{}'", escape_single(value))
}

/// Locale identifiers are emitted with `-` separators: `zh_CN` → `zh-CN`.
pub fn output_locale(locale: &str) -> String {
    locale.replace('_', "-")
}

/// The object key for a locale: `en`, `'zh-CN'`.
pub fn locale_key(locale: &str) -> String {
    quote_key(&output_locale(locale)).into_owned()
}

/// A valid identifier derived from a locale, for `export const <name>`.
pub fn const_identifier(locale: &str) -> String {
    let mut ident: String = locale
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
