// Copyright (c) 2025 Bintrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word-level scenarios exercising the node lifecycle through BinTrie.

use crate::data_structures::bintrie::{
    BaseNode, BinTrie, Node, RootLayout, Status, TrieConfig, TrieError,
};

fn hits<V: Copy>(trie: &BinTrie<V>, text: &str, longest: bool) -> Vec<(usize, usize, V)> {
    let found = if longest {
        trie.parse_longest(text)
    } else {
        trie.parse(text)
    };
    found
        .into_iter()
        .map(|hit| (hit.begin, hit.end, *hit.value))
        .collect()
}

#[test]
fn test_word_that_is_prefix_of_another() {
    let mut trie = BinTrie::new();
    assert!(trie.put("a", 1).unwrap());
    assert!(trie.put("ab", 2).unwrap());

    let a = trie.root().get_child('a').unwrap();
    assert_eq!(a.value(), Some(&1));
    assert_eq!(a.status(), Status::WordMiddle);

    let b = a.get_child('b').unwrap();
    assert_eq!(b.value(), Some(&2));
    assert_eq!(b.status(), Status::WordEnd);
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_delete_then_reinsert_leaf() {
    let mut trie = BinTrie::new();
    trie.put("cat", 10).unwrap();
    assert!(trie.remove("cat"));

    let t = trie.transit("cat").unwrap();
    assert_eq!(t.status(), Status::NotWord);
    assert_eq!(t.value(), None);
    assert_eq!(trie.get("cat"), None);
    assert_eq!(trie.len(), 0);

    assert!(trie.put("cat", 20).unwrap());
    let t = trie.transit("cat").unwrap();
    assert_eq!(t.status(), Status::WordEnd);
    assert_eq!(t.value(), Some(&20));
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_delete_then_reinsert_with_children() {
    let mut trie = BinTrie::new();
    trie.put("cat", 10).unwrap();
    assert!(trie.remove("cat"));
    trie.put("cats", 11).unwrap();

    assert!(trie.put("cat", 20).unwrap());
    let t = trie.transit("cat").unwrap();
    assert_eq!(t.status(), Status::WordMiddle);
    assert_eq!(t.value(), Some(&20));
    assert_eq!(trie.get("cats"), Some(&11));
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_delete_prefix_word_keeps_descendants() {
    let mut trie = BinTrie::new();
    trie.put("ab", 1).unwrap();
    trie.put("abc", 2).unwrap();
    trie.put("abd", 3).unwrap();

    assert!(trie.remove("ab"));
    assert!(!trie.remove("ab"));

    assert_eq!(trie.get("ab"), None);
    assert_eq!(trie.get("abc"), Some(&2));
    assert_eq!(trie.get("abd"), Some(&3));
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_remove_missing_key_creates_nothing() {
    let mut trie = BinTrie::new();
    trie.put("abc", 1).unwrap();

    assert!(!trie.remove("abx"));
    assert!(!trie.remove("xyz"));
    assert!(!trie.remove("x"));
    assert!(!trie.remove(""));
    assert!(!trie.remove("ab"));

    assert!(trie.transit("abx").is_none());
    assert!(trie.transit("x").is_none());
    assert_eq!(trie.root().child_count(), 1);
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_overwrite_does_not_grow() {
    let mut trie = BinTrie::new();
    assert!(trie.put("word", 1).unwrap());
    assert!(!trie.put("word", 2).unwrap());

    assert_eq!(trie.get("word"), Some(&2));
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_pass_through_positions_are_not_words() {
    let mut trie = BinTrie::new();
    trie.put("hello", 1).unwrap();

    for prefix in ["h", "he", "hel", "hell"] {
        assert_eq!(trie.get(prefix), None, "{prefix} is not a word");
        assert_eq!(
            trie.transit(prefix).map(Node::status),
            Some(Status::NotWord)
        );
    }
    assert!(trie.contains_key("hello"));
    assert!(!trie.contains_key("hello!"));
}

#[test]
fn test_invalid_keys() {
    let mut trie = BinTrie::with_config(TrieConfig::new().with_max_key_chars(3));

    assert_eq!(trie.put("", 1), Err(TrieError::EmptyKey));
    assert_eq!(
        trie.put("four", 1),
        Err(TrieError::KeyTooLong {
            key: "four".to_string(),
            max_chars: 3,
        })
    );
    // Length is counted in characters, not bytes.
    assert_eq!(trie.put("中文字", 1), Ok(true));
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_get_mut() {
    let mut trie = BinTrie::new();
    trie.put("count", 1).unwrap();

    if let Some(value) = trie.get_mut("count") {
        *value += 41;
    }
    assert_eq!(trie.get("count"), Some(&42));
    assert!(trie.get_mut("coun").is_none());
}

#[test]
fn test_iter_in_key_order() {
    let words = ["b", "abc", "a", "ab", "中国", "中", "abd", "😀"];
    let trie: BinTrie<usize> = words.iter().enumerate().map(|(i, w)| (*w, i)).collect();

    let keys: Vec<String> = trie.iter().map(|(key, _)| key).collect();
    let mut expected: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    expected.sort();
    assert_eq!(keys, expected);

    let mut via_ref = 0;
    for (key, value) in &trie {
        assert_eq!(trie.get(&key), Some(value));
        via_ref += 1;
    }
    assert_eq!(via_ref, words.len());
}

#[test]
fn test_iter_skips_deleted_words() {
    let mut trie = BinTrie::new();
    trie.put("a", 1).unwrap();
    trie.put("ab", 2).unwrap();
    trie.put("abc", 3).unwrap();
    trie.remove("ab");

    let entries: Vec<(String, i32)> = trie.iter().map(|(k, v)| (k, *v)).collect();
    assert_eq!(entries, vec![("a".to_string(), 1), ("abc".to_string(), 3)]);
}

#[test]
fn test_prefix_search() {
    let trie: BinTrie<i32> = [("apple", 1), ("application", 2), ("apply", 3), ("banana", 4)]
        .into_iter()
        .collect();

    let keys: Vec<String> = trie.prefix_search("app").map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["apple", "application", "apply"]);

    assert_eq!(trie.prefix_search("apple").count(), 1);
    assert_eq!(trie.prefix_search("orange").count(), 0);
    assert_eq!(trie.prefix_search("").count(), 4);
}

#[test]
fn test_common_prefix_search() {
    let trie: BinTrie<i32> = [("中", 1), ("中国", 2), ("中国人", 3), ("国人", 4)]
        .into_iter()
        .collect();

    let found: Vec<(String, i32)> = trie
        .common_prefix_search("我是中国人民", 2)
        .into_iter()
        .map(|(k, v)| (k, *v))
        .collect();
    assert_eq!(
        found,
        vec![
            ("中".to_string(), 1),
            ("中国".to_string(), 2),
            ("中国人".to_string(), 3),
        ]
    );
    assert!(trie.common_prefix_search("我是", 0).is_empty());
    assert!(trie.common_prefix_search("中国", 10).is_empty());
}

#[test]
fn test_parse_finds_overlapping_hits() {
    let trie: BinTrie<i32> = [("he", 1), ("she", 2), ("his", 3), ("hers", 4)]
        .into_iter()
        .collect();

    assert_eq!(
        hits(&trie, "ushers", false),
        vec![(1, 4, 2), (2, 4, 1), (2, 6, 4)]
    );
    assert!(hits(&trie, "xyz", false).is_empty());
    assert!(hits(&trie, "", false).is_empty());
}

#[test]
fn test_parse_longest_segments_greedily() {
    let trie: BinTrie<i32> = [("商品", 1), ("和服", 2), ("服务", 3), ("和", 4), ("商品和服务", 5)]
        .into_iter()
        .collect();

    assert_eq!(hits(&trie, "商品和服务", true), vec![(0, 5, 5)]);

    let mut trie = trie;
    trie.remove("商品和服务");
    assert_eq!(hits(&trie, "商品和服务", true), vec![(0, 2, 1), (2, 4, 2)]);
    assert_eq!(hits(&trie, "买商品", true), vec![(1, 3, 1)]);
}

#[test]
fn test_extend_skips_invalid_keys() {
    let mut trie = BinTrie::new();
    trie.extend([("ok", 1), ("", 2), ("fine", 3)]);

    assert_eq!(trie.len(), 2);
    assert_eq!(trie.get("ok"), Some(&1));
    assert_eq!(trie.get("fine"), Some(&3));
}

#[test]
fn test_layouts_agree() {
    let words = ["zebra", "apple", "中文", "🦀rust", "app", "a"];
    let mut direct = BinTrie::with_config(TrieConfig::new().with_root_layout(RootLayout::Direct));
    let mut sorted = BinTrie::with_config(TrieConfig::new().with_root_layout(RootLayout::Sorted));
    for (i, word) in words.iter().enumerate() {
        direct.put(word, i).unwrap();
        sorted.put(word, i).unwrap();
    }
    direct.remove("app");
    sorted.remove("app");

    let direct_entries: Vec<_> = direct.iter().collect();
    let sorted_entries: Vec<_> = sorted.iter().collect();
    assert_eq!(direct_entries, sorted_entries);
    assert_eq!(direct.len(), sorted.len());
}

#[test]
fn test_shrink_and_clear() {
    let mut trie = BinTrie::new();
    for word in ["alpha", "beta", "gamma"] {
        trie.put(word, word.len()).unwrap();
    }
    trie.shrink_to_fit();
    assert_eq!(trie.get("beta"), Some(&4));

    trie.clear();
    assert!(trie.is_empty());
    assert!(trie.get("beta").is_none());
    assert_eq!(trie.root().child_count(), 0);
    assert_eq!(trie.config().root_layout, RootLayout::Direct);
}
