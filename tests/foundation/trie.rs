//! Integration tests for the prefix trie

use std::collections::BTreeMap;

use proptest::prelude::*;
use warband_foundation::PrefixTrie;

type Trie = PrefixTrie<char, u32>;

fn trie(words: &[(u32, &str)]) -> Trie {
    let mut trie = Trie::new();
    for (key, word) in words {
        assert!(trie.try_add_word(*key, word.chars()));
    }
    trie
}

fn single(trie: &Trie, prefix: &str) -> Option<u32> {
    trie.search(prefix.chars())?.as_single(|_| true).copied()
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn unique_prefix_resolves() {
    let trie = trie(&[(1, "swordsman"), (2, "recruit")]);
    assert_eq!(single(&trie, "sw"), Some(1));
    assert_eq!(single(&trie, "r"), Some(2));
    assert_eq!(single(&trie, "x"), None);
}

#[test]
fn shared_prefix_is_ambiguous() {
    let trie = trie(&[(1, "archer"), (2, "archery master")]);
    assert_eq!(single(&trie, "arch"), None);
    assert_eq!(single(&trie, "archer"), Some(1));
    assert_eq!(single(&trie, "archery"), Some(2));
}

#[test]
fn filter_narrows_candidates() {
    let trie = trie(&[(1, "cavalry"), (2, "cavalry soldier")]);
    let node = trie.search("cav".chars()).unwrap();
    assert_eq!(node.as_single(|k| *k == 2), Some(&2));
    assert_eq!(node.as_single(|k| *k == 3), None);

    let exact = trie.search("cavalry".chars()).unwrap();
    assert_eq!(exact.as_single(|_| true), Some(&1));
    assert_eq!(exact.as_single(|k| *k != 1), Some(&2));
}

#[test]
fn synonyms_reach_the_node_and_its_ancestors() {
    let mut trie = trie(&[(1, "swordsman")]);
    trie.add_synonym(7, "blade".chars());

    assert_eq!(single(&trie, "blade"), Some(7));
    assert!(trie.search("bl".chars()).unwrap().synonym_keys().contains(&7));
    assert!(!trie.contains("blade".chars()));
    assert!(trie.matches("blade".chars()));

    trie.add_synonym(7, "sword".chars());
    assert_eq!(single(&trie, "sword"), None);
    assert_eq!(trie.search("sword".chars()).unwrap().distinct_keys(), 2);
}

#[test]
fn duplicate_words_are_rejected() {
    let mut trie = trie(&[(1, "recruit")]);
    let nodes = trie.node_count();
    assert!(!trie.try_add_word(2, "recruit".chars()));
    assert!(!trie.try_add_word(2, "".chars()));
    assert_eq!(trie.node_count(), nodes);
    assert_eq!(trie.word_count(), 1);
}

#[test]
fn bulk_queries() {
    let trie = trie(&[(1, "recruit"), (2, "militia")]);
    assert!(trie.contains_all(["recruit".chars(), "militia".chars()]));
    assert!(trie.contains_any(["bowman".chars(), "militia".chars()]));
    assert!(trie.matches_all(["rec".chars(), "mil".chars()]));
    assert!(!trie.matches_any(["bow".chars()]));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn every_prefix_knows_its_words(words in prop::collection::btree_set("[a-c]{1,6}", 1..12)) {
        let mut trie = Trie::new();
        let mut keys = BTreeMap::new();
        for (key, word) in (0u32..).zip(&words) {
            prop_assert!(trie.try_add_word(key, word.chars()));
            keys.insert(word.clone(), key);
        }
        prop_assert_eq!(trie.word_count(), words.len());

        for (word, key) in &keys {
            prop_assert!(trie.contains(word.chars()));
            let node = trie.search(word.chars()).unwrap();
            prop_assert_eq!(node.key(), Some(key));
            prop_assert_eq!(node.as_single(|_| true), Some(key));

            for end in 1..word.len() {
                let prefix = trie.search(word[..end].chars()).unwrap();
                prop_assert!(prefix.synonym_keys().contains(key));
            }
        }
    }

    #[test]
    fn single_answer_is_a_word_below(words in prop::collection::btree_set("[a-c]{1,5}", 1..10), probe in "[a-c]{1,3}") {
        let mut trie = Trie::new();
        let listed: Vec<&String> = words.iter().collect();
        for (key, word) in (0u32..).zip(&listed) {
            trie.try_add_word(key, word.chars());
        }
        if let Some(key) = trie.search(probe.chars()).and_then(|n| n.as_single(|_| true)) {
            let word = listed[*key as usize];
            prop_assert!(word.starts_with(&probe));
        }
    }
}
