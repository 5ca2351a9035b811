//! Baseline option policies for the downstream HTML and CSS minifiers.
//!
//! Option keys follow the minifiers' own naming, since the resolved bags are
//! handed through verbatim. The baselines are fixed; authored values win at
//! every nesting level.

use serde_json::{Map, Value, json};

use crate::merge::merge_map_defaults;

/// Baseline policy handed to the HTML minifier.
pub fn html_min_defaults() -> Map<String, Value> {
    object_literal(json!({
        "caseSensitive": true,
        "collapseBooleanAttributes": true,
        "collapseWhitespace": true,
        "conservativeCollapse": true,
        "removeCDATASectionsFromCDATA": true,
        "removeComments": true,
        "removeCommentsFromCDATA": true,
        "removeEmptyAttributes": true,
        "removeRedundantAttributes": false,
        "removeScriptTypeAttributes": true,
        "removeStyleLinkTypeAttributes": true,
        "useShortDoctype": true,
        "minifyCSS": true,
        "minifyJS": true,
    }))
}

/// Baseline policy handed to the CSS minifier.
pub fn css_min_defaults() -> Map<String, Value> {
    object_literal(json!({
        "advanced": true,
        "aggressiveMerging": true,
        "mediaMerging": true,
        "restructuring": true,
        "shorthandCompacting": true,
    }))
}

/// Merge authored HTML minifier options over the baseline policy.
///
/// Pure: neither input is mutated, and the result carries every baseline key
/// even when `opts` is empty.
pub fn html_min_opts(opts: &Map<String, Value>) -> Map<String, Value> {
    merge_map_defaults(opts.clone(), &html_min_defaults())
}

/// Merge authored CSS minifier options over the baseline policy.
pub fn css_min_opts(opts: &Map<String, Value>) -> Map<String, Value> {
    merge_map_defaults(opts.clone(), &css_min_defaults())
}

fn object_literal(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("baseline literals are objects"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_yields_full_html_baseline() {
        let opts = html_min_opts(&Map::new());
        assert_eq!(opts.len(), html_min_defaults().len());
        assert_eq!(opts["caseSensitive"], Value::Bool(true));
        assert_eq!(opts["removeRedundantAttributes"], Value::Bool(false));
        assert_eq!(opts["minifyJS"], Value::Bool(true));
    }

    #[test]
    fn authored_html_override_survives_with_defaults_intact() {
        let mut authored = Map::new();
        authored.insert("removeComments".to_string(), Value::Bool(false));
        let opts = html_min_opts(&authored);
        assert_eq!(opts["removeComments"], Value::Bool(false));
        assert_eq!(opts["collapseWhitespace"], Value::Bool(true));
        assert_eq!(opts.len(), html_min_defaults().len());
    }

    #[test]
    fn unknown_authored_keys_pass_through() {
        let mut authored = Map::new();
        authored.insert("maxLineLength".to_string(), json!(120));
        let opts = html_min_opts(&authored);
        assert_eq!(opts["maxLineLength"], json!(120));
        assert_eq!(opts.len(), html_min_defaults().len() + 1);
    }

    #[test]
    fn empty_input_yields_full_css_baseline() {
        let opts = css_min_opts(&Map::new());
        for key in [
            "advanced",
            "aggressiveMerging",
            "mediaMerging",
            "restructuring",
            "shorthandCompacting",
        ] {
            assert_eq!(opts[key], Value::Bool(true), "baseline key {key}");
        }
    }

    #[test]
    fn authored_css_override_survives() {
        let mut authored = Map::new();
        authored.insert("restructuring".to_string(), Value::Bool(false));
        let opts = css_min_opts(&authored);
        assert_eq!(opts["restructuring"], Value::Bool(false));
        assert_eq!(opts["advanced"], Value::Bool(true));
    }
}
