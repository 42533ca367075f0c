//! Object key ordering.
//!
//! Canonical key order is byte-wise (ordinal) comparison of the UTF-8
//! encoding: no locale, no case folding, no UTF-16 code unit order.
//! `"B"` sorts before `"a"`, `"a"` before `"aa"`.
//!
//! For valid UTF-8, byte order and code point order agree, so this is also
//! code point order.

use std::cmp::Ordering;

use itertools::Itertools;
use serde_json::{Map, Value};

use crate::errors::{CanonError, CanonResult};

/// Compare two keys by the bytes of their UTF-8 encoding.
pub fn compare_keys_bytewise(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

/// Entries of an object in canonical key order.
///
/// The map's own iteration order is ignored.
pub fn sorted_entries(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    map.iter()
        .sorted_by(|(a, _), (b, _)| compare_keys_bytewise(a, b))
        .collect()
}

/// Ensure keys are strictly increasing in canonical order.
///
/// Fails on out-of-order or repeated keys.
pub fn ensure_sorted_unique<S: AsRef<str>>(keys: &[S]) -> CanonResult<()> {
    for w in keys.windows(2) {
        if compare_keys_bytewise(w[0].as_ref(), w[1].as_ref()) != Ordering::Less {
            return Err(CanonError::invalid_argument(format!(
                "keys are not in canonical order: {:?} then {:?}",
                w[0].as_ref(),
                w[1].as_ref()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_before_lowercase() {
        assert_eq!(compare_keys_bytewise("B", "a"), Ordering::Less);
        assert_eq!(compare_keys_bytewise("a", "B"), Ordering::Greater);
        assert_eq!(compare_keys_bytewise("a", "aa"), Ordering::Less);
        assert_eq!(compare_keys_bytewise("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn non_ascii_sorts_after_ascii() {
        // U+00E9 is 0xC3 0xA9; U+1F600 is 0xF0 ...
        let v = serde_json::json!({"\u{1F600}": 1, "é": 2, "z": 3});
        let keys: Vec<&str> = sorted_entries(v.as_object().unwrap())
            .into_iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["z", "é", "\u{1F600}"]);
    }

    #[test]
    fn bytewise_differs_from_utf16_order() {
        // U+FF61 is a single UTF-16 unit above the surrogate range;
        // U+10000 encodes as surrogates 0xD800 0xDC00. UTF-16 order puts
        // U+10000 first, byte order puts U+FF61 first.
        assert_eq!(compare_keys_bytewise("\u{FF61}", "\u{10000}"), Ordering::Less);
    }

    #[test]
    fn sorted_entries_ignores_map_order() {
        let v = serde_json::json!({"b": 1, "B": 2, "a": 3});
        let map = v.as_object().unwrap();
        let keys: Vec<&str> = sorted_entries(map).into_iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["B", "a", "b"]);
    }

    #[test]
    fn ensure_sorted_detects_unsorted() {
        ensure_sorted_unique(&["B", "a", "b"]).unwrap();
        let err = ensure_sorted_unique(&["a", "B"]).unwrap_err();
        assert!(err.to_string().contains("canonical order"));
        assert!(ensure_sorted_unique(&["a", "a"]).is_err());
    }
}
