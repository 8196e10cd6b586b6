//! Testing utilities for ctxsum workspace
//!
//! Shared proptest strategies and fixtures.

#![allow(missing_docs)]

use ctxsum_core::{Fragment, FRAGMENT_MAX_CHARS};
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use serde_json::Value;

/// Upper bound on fragments per generated sequence
pub const MAX_FRAGMENTS: usize = 50;

/// Arbitrary text of up to `max_chars` Unicode scalar values
pub fn text_strategy(max_chars: usize) -> impl Strategy<Value = String> {
    vec(any::<char>(), 0..=max_chars).prop_map(String::from_iter)
}

/// Lists of up to 50 strings, each up to 5,000 characters
pub fn text_list_strategy() -> impl Strategy<Value = Vec<String>> {
    vec(text_strategy(FRAGMENT_MAX_CHARS), 0..=MAX_FRAGMENTS)
}

fn json_leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        text_strategy(32).prop_map(Value::from),
    ]
}

/// JSON values up to two levels deep
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    json_leaf_strategy().prop_recursive(2, 32, 8, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..8).prop_map(Value::Array),
            btree_map(text_strategy(8), inner, 0..8)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

/// Any fragment shape: absent, text (possibly oversized), or a JSON value
pub fn fragment_strategy() -> impl Strategy<Value = Fragment> {
    prop_oneof![
        1 => Just(Fragment::Absent),
        3 => text_strategy(FRAGMENT_MAX_CHARS * 2).prop_map(Fragment::Text),
        1 => json_value_strategy().prop_map(Fragment::from),
    ]
}

/// Sequences of mixed fragments
pub fn fragment_list_strategy() -> impl Strategy<Value = Vec<Fragment>> {
    vec(fragment_strategy(), 0..=MAX_FRAGMENTS)
}

/// Expected join of already-truncated texts, ignoring the summary cap
pub fn naive_join(texts: &[&str]) -> String {
    texts.join("\n")
}

/// Character count, the unit every ctxsum limit is expressed in
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
