//! Prefix trie with synonym propagation.
//!
//! Nodes live in a flat arena and refer to each other by index. Each node
//! keeps the set of keys stored anywhere in its strict subtree, so the
//! question "how many distinct entries start with this prefix?" is answered
//! at the node itself without walking down.
//!
//! ```text
//!            (root)
//!              │ s
//!            [s] {1, 2}
//!              │ w
//!            [w] {1, 2}
//!              │ o ...
//!        [sword]=1 {2}
//!              │ s ...
//!      [swordsman]=2 {}
//! ```

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

const ROOT: usize = 0;

/// A single node of a [`PrefixTrie`].
#[derive(Clone, Debug)]
pub struct TrieNode<S, K> {
    /// Symbol on the edge leading into this node; `None` for the root.
    symbol: Option<S>,
    /// Key of the word ending exactly here, if any.
    key: Option<K>,
    /// Child node indices by symbol.
    children: HashMap<S, usize>,
    /// Index of the parent node; `None` for the root.
    parent: Option<usize>,
    /// Keys reachable below this node, plus explicit synonyms attached here.
    synonym_keys: BTreeSet<K>,
}

impl<S, K> TrieNode<S, K> {
    fn new(symbol: Option<S>, parent: Option<usize>) -> Self {
        Self {
            symbol,
            key: None,
            children: HashMap::new(),
            parent,
            synonym_keys: BTreeSet::new(),
        }
    }

    /// Symbol associated with the node.
    #[must_use]
    pub fn symbol(&self) -> Option<&S> {
        self.symbol.as_ref()
    }

    /// Key of the word ending at this node.
    #[must_use]
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Whether a word ends exactly at this node.
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.key.is_some()
    }

    /// Keys stored below this node (self excluded) and explicit synonyms.
    #[must_use]
    pub fn synonym_keys(&self) -> &BTreeSet<K> {
        &self.synonym_keys
    }

    /// Number of child nodes.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl<S, K: Ord> TrieNode<S, K> {
    /// Number of distinct keys reachable from this node, itself included.
    #[must_use]
    pub fn distinct_keys(&self) -> usize {
        let own = self
            .key
            .as_ref()
            .is_some_and(|key| !self.synonym_keys.contains(key));
        self.synonym_keys.len() + usize::from(own)
    }

    /// Resolves this node to a single key under `filter`.
    ///
    /// An exact word that passes the filter wins outright. Otherwise the
    /// node resolves only if exactly one of its synonym keys passes; with
    /// zero or several survivors there is no answer.
    pub fn as_single<F>(&self, filter: F) -> Option<&K>
    where
        F: Fn(&K) -> bool,
    {
        if let Some(key) = &self.key {
            if filter(key) {
                return Some(key);
            }
        }

        let mut passing = self.synonym_keys.iter().filter(|key| filter(key));
        match (passing.next(), passing.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }
}

/// A prefix tree over symbol sequences with at most one key per path.
#[derive(Clone, Debug)]
pub struct PrefixTrie<S, K> {
    /// Node arena; index 0 is the root.
    nodes: Vec<TrieNode<S, K>>,
    /// Number of paths marked as words.
    word_count: usize,
}

impl<S, K> Default for PrefixTrie<S, K>
where
    S: Copy + Eq + Hash,
    K: Clone + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, K> PrefixTrie<S, K>
where
    S: Copy + Eq + Hash,
    K: Clone + Ord,
{
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(None, None)],
            word_count: 0,
        }
    }

    /// Removes every word and synonym.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::new(None, None));
        self.word_count = 0;
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of paths marked as words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns true if no word has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Walks `word` from the root without creating anything.
    ///
    /// Returns `None` when the path leaves the trie or the word is empty.
    fn develop<W>(&self, word: W) -> Option<usize>
    where
        W: IntoIterator<Item = S>,
    {
        let mut current = ROOT;
        for symbol in word {
            current = *self.nodes[current].children.get(&symbol)?;
        }
        (current != ROOT).then_some(current)
    }

    /// Walks `word` from the root, creating missing nodes.
    ///
    /// Returns the root index for an empty word.
    fn develop_mut<W>(&mut self, word: W) -> usize
    where
        W: IntoIterator<Item = S>,
    {
        let mut current = ROOT;
        for symbol in word {
            current = match self.nodes[current].children.get(&symbol) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::new(Some(symbol), Some(current)));
                    self.nodes[current].children.insert(symbol, next);
                    next
                }
            };
        }
        current
    }

    /// Records `key` in every strict ancestor of `index`, root excluded.
    fn propagate(&mut self, index: usize, key: &K) {
        let mut ancestor = self.nodes[index].parent;
        while let Some(at) = ancestor {
            if at == ROOT {
                break;
            }
            let node = &mut self.nodes[at];
            node.synonym_keys.insert(key.clone());
            ancestor = node.parent;
        }
    }

    /// Adds `word` keyed by `key`.
    ///
    /// Fails, leaving the trie untouched, if the word is empty or if its
    /// path already ends in a word (whatever that word's key).
    pub fn try_add_word<W>(&mut self, key: K, word: W) -> bool
    where
        W: IntoIterator<Item = S>,
    {
        // A path that already ends in a word exists in full, so developing
        // it creates no nodes before the check below rejects it.
        let index = self.develop_mut(word);
        if index == ROOT || self.nodes[index].is_word() {
            return false;
        }

        self.propagate(index, &key);
        self.nodes[index].key = Some(key);
        self.word_count += 1;
        true
    }

    /// Adds every word in `words` under the same key.
    ///
    /// Returns true only if every word was added.
    pub fn try_add_many<I, W>(&mut self, key: &K, words: I) -> bool
    where
        I: IntoIterator<Item = W>,
        W: IntoIterator<Item = S>,
    {
        let mut all = true;
        for word in words {
            all &= self.try_add_word(key.clone(), word);
        }
        all
    }

    /// Marks the end of `word` as reachable under `key` without making it
    /// that path's word.
    ///
    /// The key is recorded at the node itself and at all its ancestors.
    /// A node never lists its own word's key as a synonym; empty words are
    /// ignored.
    pub fn add_synonym<W>(&mut self, key: K, word: W)
    where
        W: IntoIterator<Item = S>,
    {
        let index = self.develop_mut(word);
        if index == ROOT {
            return;
        }
        if self.nodes[index].key.as_ref() == Some(&key) {
            return;
        }

        self.propagate(index, &key);
        self.nodes[index].synonym_keys.insert(key);
    }

    /// Finds the node at the end of `word`.
    pub fn search<W>(&self, word: W) -> Option<&TrieNode<S, K>>
    where
        W: IntoIterator<Item = S>,
    {
        self.develop(word).map(|index| &self.nodes[index])
    }

    /// Checks whether `word` is stored exactly.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: IntoIterator<Item = S>,
    {
        self.search(word).is_some_and(TrieNode::is_word)
    }

    /// Checks whether any of `words` is stored exactly.
    pub fn contains_any<I, W>(&self, words: I) -> bool
    where
        I: IntoIterator<Item = W>,
        W: IntoIterator<Item = S>,
    {
        words.into_iter().any(|word| self.contains(word))
    }

    /// Checks whether all of `words` are stored exactly.
    pub fn contains_all<I, W>(&self, words: I) -> bool
    where
        I: IntoIterator<Item = W>,
        W: IntoIterator<Item = S>,
    {
        words.into_iter().all(|word| self.contains(word))
    }

    /// Checks whether `word` is a path in the trie, word or not.
    pub fn matches<W>(&self, word: W) -> bool
    where
        W: IntoIterator<Item = S>,
    {
        self.develop(word).is_some()
    }

    /// Checks whether any of `words` is a path in the trie.
    pub fn matches_any<I, W>(&self, words: I) -> bool
    where
        I: IntoIterator<Item = W>,
        W: IntoIterator<Item = S>,
    {
        words.into_iter().any(|word| self.matches(word))
    }

    /// Checks whether all of `words` are paths in the trie.
    pub fn matches_all<I, W>(&self, words: I) -> bool
    where
        I: IntoIterator<Item = W>,
        W: IntoIterator<Item = S>,
    {
        words.into_iter().all(|word| self.matches(word))
    }
}
