use indexmap::IndexMap;

/// Position information in locale files (JSON).
///
/// Only used for diagnostics: the pipeline itself never depends on where a
/// token was declared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the locale file (e.g., "./messages/en.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }
}

/// A single raw translation string from a locale dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    /// The raw translation, possibly containing placeholders or a plural block.
    pub value: String,
    /// Where the token was declared, when loaded from a file.
    pub location: Option<MessageLocation>,
}

impl MessageEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            location: None,
        }
    }

    pub fn with_location(value: impl Into<String>, location: MessageLocation) -> Self {
        Self {
            value: value.into(),
            location: Some(location),
        }
    }
}

/// All tokens of one locale, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDictionary {
    /// Locale identifier (e.g., "en", "zh_CN").
    pub locale: String,
    /// File the dictionary was loaded from, if any.
    pub file_path: Option<String>,
    entries: IndexMap<String, MessageEntry>,
}

impl LocaleDictionary {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            file_path: None,
            entries: IndexMap::new(),
        }
    }

    pub fn with_file(locale: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            file_path: Some(file_path.into()),
            entries: IndexMap::new(),
        }
    }

    /// Build a dictionary from `(token, raw string)` pairs.
    pub fn from_pairs<K, V>(
        locale: impl Into<String>,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut dictionary = Self::new(locale);
        for (token, value) in pairs {
            dictionary.insert(token, value);
        }
        dictionary
    }

    /// Insert a raw string. A repeated token keeps its first position.
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(token.into(), MessageEntry::new(value));
    }

    pub fn insert_entry(&mut self, token: impl Into<String>, entry: MessageEntry) {
        self.entries.insert(token.into(), entry);
    }

    /// Get the raw string for a token.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(|e| e.value.as_str())
    }

    /// Get the full entry (value and location) for a token.
    pub fn entry(&self, token: &str) -> Option<&MessageEntry> {
        self.entries.get(token)
    }

    pub fn contains_key(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MessageEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every locale of a run, keyed by locale identifier, in insertion order.
///
/// The insertion order is the order locales appear in generated output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSet {
    locales: IndexMap<String, LocaleDictionary>,
}

impl LocaleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dictionary, replacing any previous one for the same locale.
    pub fn insert(&mut self, dictionary: LocaleDictionary) {
        self.locales.insert(dictionary.locale.clone(), dictionary);
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleDictionary> {
        self.locales.get(locale)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Locale identifiers in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = &String> {
        self.locales.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleDictionary> {
        self.locales.values()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl FromIterator<LocaleDictionary> for LocaleSet {
    fn from_iter<I: IntoIterator<Item = LocaleDictionary>>(iter: I) -> Self {
        let mut set = Self::new();
        for dictionary in iter {
            set.insert(dictionary);
        }
        set
    }
}
