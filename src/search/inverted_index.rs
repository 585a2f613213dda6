//! Inverted word index over contact names and email addresses.
//!
//! Each normalized word maps to the set of contacts whose name or email
//! tokenizes to include it. The index is owned by the store; callers only ever
//! receive copies of a bucket.

use crate::domain::ContactId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Runs of whitespace, commas, `@` and `.` separate words.
static WORD_DELIMITERS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,@.]+").unwrap());

/// Split text into the set of lowercase words used as index keys.
///
/// Empty fragments produced by leading or trailing delimiters are discarded.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    WORD_DELIMITERS_RE
        .split(&lowered)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize several fields into one set of words.
pub fn tokenize_all<'a>(fields: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    fields.into_iter().flat_map(tokenize).collect()
}

/// Normalize a search query for lookup.
///
/// Only case is folded. The query is not tokenized, so a query that still
/// contains delimiter characters cannot equal any stored word.
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// Word → contact-id index with eager removal of empty buckets.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    buckets: HashMap<String, HashSet<ContactId>>,
}

impl InvertedIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` to the bucket of every word in `words`.
    pub fn insert<'a>(&mut self, id: ContactId, words: impl IntoIterator<Item = &'a String>) {
        for word in words {
            if word.is_empty() {
                continue;
            }
            self.buckets.entry(word.clone()).or_default().insert(id);
        }
    }

    /// Remove `id` from the bucket of every word in `words`.
    ///
    /// A bucket left empty is dropped immediately. Words without a bucket are
    /// ignored.
    pub fn remove<'a>(&mut self, id: &ContactId, words: impl IntoIterator<Item = &'a String>) {
        for word in words {
            if let Some(ids) = self.buckets.get_mut(word) {
                ids.remove(id);
                if ids.is_empty() {
                    self.buckets.remove(word);
                }
            }
        }
    }

    /// Ids stored under exactly `word`, as an owned copy.
    pub fn lookup(&self, word: &str) -> HashSet<ContactId> {
        self.buckets.get(word).cloned().unwrap_or_default()
    }

    /// Whether `word` currently has a bucket.
    pub fn contains_word(&self, word: &str) -> bool {
        self.buckets.contains_key(word)
    }

    /// Number of live buckets.
    pub fn word_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate over `(word, ids)` pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<ContactId>)> {
        self.buckets.iter().map(|(word, ids)| (word.as_str(), ids))
    }
}
