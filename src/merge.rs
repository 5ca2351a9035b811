//! Pure recursive defaults merge over JSON values.
//!
//! Authored configuration carries opaque option bags (minifier options,
//! builder settings) whose keys the crate does not interpret. Defaulting those
//! bags is done here with value semantics: inputs are never mutated and a new
//! structure is returned on every call.

use serde_json::map::Entry;
use serde_json::{Map, Value};

/// Merge `defaults` underneath `value`, returning a new value.
///
/// Objects are merged key by key, recursing into nested objects. An authored
/// value that is not an object wins wholesale; arrays are treated as scalars
/// and never merged element-wise. Keys present only in `defaults` are copied
/// into the result. An authored `null` counts as authored.
pub fn merge_defaults(value: Value, defaults: &Value) -> Value {
    match (value, defaults) {
        (Value::Object(user), Value::Object(defaults)) => {
            Value::Object(merge_map_defaults(user, defaults))
        }
        (value, _) => value,
    }
}

/// Object-level variant of [`merge_defaults`].
pub fn merge_map_defaults(
    mut user: Map<String, Value>,
    defaults: &Map<String, Value>,
) -> Map<String, Value> {
    for (key, default) in defaults {
        match user.entry(key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(default.clone());
            }
            Entry::Occupied(mut slot) => {
                if slot.get().is_object() && default.is_object() {
                    let nested = slot.insert(Value::Null);
                    slot.insert(merge_defaults(nested, default));
                }
            }
        }
    }
    user
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn fills_missing_keys_from_defaults() {
        let merged = merge_defaults(json!({"a": 1}), &json!({"a": 0, "b": 2}));
        assert_eq!(merged, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn recurses_into_nested_objects() {
        let merged = merge_defaults(
            json!({"options": {"minify": true}}),
            &json!({"options": {"minify": false, "rev": false}, "force": false}),
        );
        assert_eq!(
            merged,
            json!({"options": {"minify": true, "rev": false}, "force": false})
        );
    }

    #[test]
    fn authored_scalars_and_arrays_win_wholesale() {
        let merged = merge_defaults(
            json!({"includes": ["a.js"], "depth": 3}),
            &json!({"includes": ["x.js", "y.js"], "depth": {"max": 5}}),
        );
        assert_eq!(merged, json!({"includes": ["a.js"], "depth": 3}));
    }

    #[test]
    fn authored_null_counts_as_authored() {
        let merged = merge_defaults(json!({"a": null}), &json!({"a": 1}));
        assert_eq!(merged, json!({"a": null}));
    }

    #[test]
    fn defaults_are_never_mutated() {
        let defaults = json!({"outer": {"inner": 1}});
        let snapshot = defaults.clone();
        let _ = merge_defaults(json!({"outer": {"other": 2}}), &defaults);
        assert_eq!(defaults, snapshot);
    }

    #[test]
    fn map_variant_matches_value_variant() {
        let user = as_map(json!({"a": {"x": 1}}));
        let defaults = as_map(json!({"a": {"x": 0, "y": 2}, "b": 3}));
        let merged = merge_map_defaults(user, &defaults);
        assert_eq!(Value::Object(merged), json!({"a": {"x": 1, "y": 2}, "b": 3}));
    }
}
