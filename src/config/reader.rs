//! Tolerant accessors over an untyped JSON rule document.
//!
//! A rule document is never rejected as a whole: a key that is missing or
//! holds the wrong JSON type reads as absent, and the caller substitutes the
//! built-in value for that key alone.

use serde_json::Value;
use std::collections::HashMap;

/// String value under `key`, if present and a string.
pub fn index_str<'a>(document: &'a Value, key: &str) -> Option<&'a str> {
    document.get(key).and_then(Value::as_str)
}

/// Array under `key` with one entry per element; non-string elements
/// (including `null`) read as `None`.
pub fn index_str_array(document: &Value, key: &str) -> Option<Vec<Option<String>>> {
    document.get(key).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect()
    })
}

/// Object under `key` with its string-valued members; members with other
/// value types are skipped.
pub fn index_str_map(document: &Value, key: &str) -> Option<HashMap<String, String>> {
    document.get(key).and_then(Value::as_object).map(|members| {
        members
            .iter()
            .filter_map(|(name, value)| value.as_str().map(|text| (name.clone(), text.to_string())))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrong_types_read_as_absent() {
        let document = json!({ "title": 5, "map": "nope", "list": {} });
        assert_eq!(index_str(&document, "title"), None);
        assert_eq!(index_str_map(&document, "map"), None);
        assert_eq!(index_str_array(&document, "list"), None);
        assert_eq!(index_str(&document, "missing"), None);
    }

    #[test]
    fn test_array_keeps_positions() {
        let document = json!({ "ref_patterns": [null, "out", 3] });
        assert_eq!(
            index_str_array(&document, "ref_patterns"),
            Some(vec![None, Some("out".to_string()), None])
        );
    }

    #[test]
    fn test_map_skips_non_strings() {
        let document = json!({ "map": { "a": "x", "b": 1, "c": null } });
        let map = index_str_map(&document, "map").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], "x");
    }
}
