use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde_json::Value;

use crate::core::{LocaleDictionary, LocaleSet, MessageEntry, MessageLocation};
use crate::issues::{Diagnostic, NonStringValueIssue};

#[derive(Debug, Default)]
pub struct ScanLocalesResult {
    /// Source locale first, then the remaining locales sorted by identifier.
    pub locales: LocaleSet,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse one `<locale>.json` file into a flat dictionary.
///
/// Nested objects are flattened with `.` separators. Values that are neither
/// strings nor objects are skipped and reported.
pub fn parse_locale_file(
    path: &Path,
    locale: &str,
) -> Result<(LocaleDictionary, Vec<Diagnostic>)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse locale file: {:?}", path))?;

    if !json.is_object() {
        bail!(
            "Locale file {:?} must contain a JSON object, found {}",
            path,
            value_kind(&json)
        );
    }

    let file_path = path.to_string_lossy().to_string();
    let source = JsonSource {
        locale,
        file_path: &file_path,
        content: &content,
        line_index: build_line_index(&content),
    };
    let mut dictionary = LocaleDictionary::with_file(locale, file_path.as_str());
    let mut diagnostics = Vec::new();
    flatten_json(
        &json,
        String::new(),
        &source,
        &mut dictionary,
        &mut diagnostics,
    );
    Ok((dictionary, diagnostics))
}

/// The raw file a dictionary is flattened from, for line lookups.
struct JsonSource<'a> {
    locale: &'a str,
    file_path: &'a str,
    content: &'a str,
    line_index: Vec<usize>,
}

impl JsonSource<'_> {
    fn location(&self, key_path: &str) -> MessageLocation {
        let line = find_key_line(self.content, key_path, &self.line_index);
        MessageLocation::with_line(self.file_path, line)
    }
}

/// Byte offsets at which each line starts. Line 1 starts at offset 0.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number containing `offset`.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Line on which a dotted key is declared.
///
/// Each path segment is searched after the previous one, and only matches
/// followed by `:` count, so `Auth.title` never lands on a value that happens
/// to contain `"title"`.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let after_pattern = pos + rel_pos + pattern.len();
            if remaining[after_pattern..].trim_start().starts_with(':') {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos += rel_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn flatten_json(
    value: &Value,
    prefix: String,
    source: &JsonSource<'_>,
    result: &mut LocaleDictionary,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, source, result, diagnostics);
            }
        }
        Value::String(s) => {
            let location = source.location(&prefix);
            result.insert_entry(prefix, MessageEntry::with_location(s.as_str(), location));
        }
        other => {
            diagnostics.push(Diagnostic::NonStringValue(NonStringValueIssue {
                location: source.location(&prefix),
                key: prefix,
                locale: source.locale.to_string(),
                value_kind: value_kind(other),
            }));
        }
    }
}

/// Locale identifier from a file name: `zh_CN.json` → `zh_CN`.
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `<locale>.json` in `message_dir`.
///
/// Files are parsed in parallel. Any unreadable or malformed file aborts the
/// scan, since silently dropping a locale would change the generated output.
pub fn scan_locale_files(
    message_dir: impl AsRef<Path>,
    source_locale: &str,
) -> Result<ScanLocalesResult> {
    let message_dir = message_dir.as_ref();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .dictgenrc.json 'messagesRoot' setting.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(message_dir)
        .with_context(|| format!("Failed to read directory '{}'", message_dir.display()))?
    {
        let path = entry?.path();
        if path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
        {
            files.push((locale, path));
        }
    }

    files.sort_by(|(a, _), (b, _)| {
        (a.as_str() != source_locale)
            .cmp(&(b.as_str() != source_locale))
            .then_with(|| a.cmp(b))
    });

    let parsed: Vec<(LocaleDictionary, Vec<Diagnostic>)> = files
        .par_iter()
        .map(|(locale, path)| parse_locale_file(path, locale))
        .collect::<Result<_>>()?;

    let mut result = ScanLocalesResult::default();
    for (dictionary, diagnostics) in parsed {
        result.locales.insert(dictionary);
        result.diagnostics.extend(diagnostics);
    }

    Ok(result)
}
