//! Fuzzy name catalog.
//!
//! Every display name of an entry is stored in a prefix trie under three
//! spellings: verbatim, lowercase, and spelling-relaxed. A query is tried
//! against the trie the same three ways, stopping at the first spelling
//! that reaches a node:
//!
//! ```text
//! "Swordsmen" ─▶ trie("Swordsmen")  ── unique? ─▶ Found
//!      │                 └─ ambiguous: collect suggestions, go on
//!      ├──────▶ trie("swordsmen")   ── unique? ─▶ Found, else fail
//!      └──────▶ trie("swordsman")   ── unique? ─▶ Found, else fail
//! ```
//!
//! A name that is a prefix of several entries never resolves to one of them
//! by accident; the caller gets the ambiguity and a few suggestions.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use warband_foundation::{MessageLog, PrefixTrie, TrieNode, relax_case, relax_spelling};

use crate::entry::CatalogEntry;

/// Upper bound on suggestions attached to a failed lookup.
pub const MAX_SUGGESTIONS: usize = 5;

/// Outcome of [`NameCatalog::find`].
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup<'a, T> {
    /// The query named exactly one entry.
    Found(&'a T),
    /// The query reached a trie node shared by several entries.
    Ambiguous {
        /// The relaxed spelling that was ambiguous.
        query: String,
        /// First names of some candidates.
        suggestions: Vec<String>,
    },
    /// No spelling of the query matched an allowed entry.
    NotFound {
        /// First names of candidates seen along the way, if any.
        suggestions: Vec<String>,
    },
}

impl<'a, T> Lookup<'a, T> {
    /// The resolved entry, if any.
    #[must_use]
    pub fn entry(&self) -> Option<&'a T> {
        match self {
            Self::Found(entry) => Some(entry),
            _ => None,
        }
    }

    /// Whether the lookup resolved.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Whether the lookup failed on an ambiguous name.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }

    /// Suggestions attached to a failed lookup.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::Found(_) => &[],
            Self::Ambiguous { suggestions, .. } | Self::NotFound { suggestions } => suggestions,
        }
    }
}

/// Entries keyed by primary key and searchable by relaxed name.
#[derive(Clone, Debug)]
pub struct NameCatalog<T: CatalogEntry> {
    /// Entries by primary key.
    pub(crate) entries: BTreeMap<T::Key, T>,
    /// Relaxed names of every entry.
    names: PrefixTrie<char, T::Key>,
    /// Secondary identifiers claimed so far.
    secondary: HashSet<String>,
}

impl<T: CatalogEntry> Default for NameCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the verbatim, lowercase, and spelling-relaxed forms of `names`.
fn relax_all<'n>(names: impl IntoIterator<Item = &'n String>) -> BTreeSet<String> {
    let mut relaxed = BTreeSet::new();
    for name in names {
        let lowercase = relax_case(name);
        let misspelled = relax_spelling(&lowercase);
        relaxed.insert(name.clone());
        relaxed.insert(lowercase);
        relaxed.insert(misspelled);
    }
    relaxed
}

impl<T: CatalogEntry> NameCatalog<T> {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            names: PrefixTrie::new(),
            secondary: HashSet::new(),
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.names.clear();
        self.secondary.clear();
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog holds no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by primary key.
    #[must_use]
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.entries.get(key)
    }

    /// Checks whether a primary key is taken.
    #[must_use]
    pub fn contains_key(&self, key: &T::Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Adds an entry.
    ///
    /// The entry is prepared, then rejected (with a message in `log`) if it
    /// has no usable name, if one of its secondary keys or its primary key
    /// is taken, or if any relaxed form of its names already ends a word in
    /// the trie. A rejected entry leaves the catalog unchanged.
    pub fn add(&mut self, mut entry: T, log: &mut dyn MessageLog) -> bool {
        entry.prepare();
        let key = entry.key();

        if entry.names().iter().all(String::is_empty) {
            log.push(format!("Entry ({key}) has no names."));
            return false;
        }

        let secondary = entry.secondary_keys();
        if let Some(taken) = secondary.iter().find(|k| self.secondary.contains(*k)) {
            tracing::debug!(%key, %taken, "secondary key collision");
            log.push(format!("Entry with the same key ({taken}) already loaded."));
            return false;
        }

        if self.entries.contains_key(&key) {
            tracing::debug!(%key, "primary key collision");
            log.push(format!("Entry with id ({key}) already exists."));
            return false;
        }

        let mut words = relax_all(entry.names().iter().filter(|n| !n.is_empty()));
        words.extend(entry.strict_names().iter().cloned());
        words.retain(|w| !w.is_empty());
        if self.names.contains_any(words.iter().map(|w| w.chars())) {
            tracing::debug!(%key, "name collision");
            log.push(format!(
                "Entry with a similar name ({}) already exists.",
                entry.names().join(", ")
            ));
            return false;
        }

        let added = self.names.try_add_many(&key, words.iter().map(|w| w.chars()));
        debug_assert!(added, "words of entry ({key}) were checked free");
        for synonym in &relax_all(entry.strict_names()) {
            self.names.add_synonym(key.clone(), synonym.chars());
        }
        self.secondary.extend(secondary);

        tracing::debug!(%key, name = entry.first_name(), "entry added");
        self.entries.insert(key, entry);
        true
    }

    /// Adds every entry, returning how many were accepted.
    pub fn extend<I>(&mut self, entries: I, log: &mut dyn MessageLog) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        entries
            .into_iter()
            .map(|entry| usize::from(self.add(entry, log)))
            .sum()
    }

    /// Finds the single entry named by `query` among those passing `filter`.
    ///
    /// Tries the query verbatim, then lowercase, then spelling-relaxed. The
    /// verbatim stage may only succeed; on ambiguity it gathers suggestions
    /// and moves on. The first relaxed spelling that reaches a trie node
    /// decides the outcome: unique resolution or failure, never a guess.
    pub fn find<F>(&self, query: &str, filter: F, log: &mut dyn MessageLog) -> Lookup<'_, T>
    where
        F: Fn(&T) -> bool,
    {
        let accept = |key: &T::Key| self.entries.get(key).is_some_and(&filter);
        let mut suggestions = Vec::new();

        if let Some(node) = self.names.search(query.chars()) {
            if let Some(entry) = node.as_single(accept).and_then(|key| self.entries.get(key)) {
                tracing::debug!(query, key = %entry.key(), "resolved verbatim");
                return Lookup::Found(entry);
            }
            suggestions = self.suggest(node, &filter);
        }

        let lowercase = relax_case(query);
        if let Some(node) = self.names.search(lowercase.chars()) {
            return self.settle(node, lowercase, &filter, suggestions, log);
        }

        let misspelled = relax_spelling(&lowercase);
        if let Some(node) = self.names.search(misspelled.chars()) {
            return self.settle(node, misspelled, &filter, suggestions, log);
        }

        tracing::debug!(query, "no match");
        Lookup::NotFound { suggestions }
    }

    /// Decides a relaxed-stage lookup that reached `node`.
    fn settle<F>(
        &self,
        node: &TrieNode<char, T::Key>,
        query: String,
        filter: &F,
        suggestions: Vec<String>,
        log: &mut dyn MessageLog,
    ) -> Lookup<'_, T>
    where
        F: Fn(&T) -> bool,
    {
        let accept = |key: &T::Key| self.entries.get(key).is_some_and(filter);
        if let Some(entry) = node.as_single(accept).and_then(|key| self.entries.get(key)) {
            tracing::debug!(%query, key = %entry.key(), "resolved relaxed");
            return Lookup::Found(entry);
        }

        let suggestions = if suggestions.is_empty() {
            self.suggest(node, filter)
        } else {
            suggestions
        };

        let allowed = node
            .key()
            .into_iter()
            .chain(node.synonym_keys())
            .any(accept);
        if allowed {
            log.push(format!("Multiple entries match the specified query: {query}."));
            Lookup::Ambiguous { query, suggestions }
        } else {
            log.push(format!("No allowed entry matches the specified query: {query}."));
            Lookup::NotFound { suggestions }
        }
    }

    /// First names of entries under `node` that pass `filter`.
    fn suggest<F>(&self, node: &TrieNode<char, T::Key>, filter: &F) -> Vec<String>
    where
        F: Fn(&T) -> bool,
    {
        node.synonym_keys()
            .iter()
            .filter_map(|key| self.entries.get(key))
            .filter(|entry| filter(entry))
            .take(MAX_SUGGESTIONS)
            .map(|entry| entry.first_name().to_string())
            .collect()
    }
}
