//! WASM bindings for the matcher.

use crate::{Budget, MatcherConfig, MatchingMethod, TokenSet};
use wasm_bindgen::prelude::*;

/// Fuzzy score of `candidate` for `pattern`.
///
/// # Returns
/// Lower is better; candidates over 256 characters get the worst score.
#[wasm_bindgen]
pub fn fuzzy_score(pattern: &str, candidate: &str, case_sensitive: bool) -> i32 {
    crate::fuzzy_score(pattern, candidate, case_sensitive)
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str, case_sensitive: bool) -> u32 {
    crate::edit_distance(a, b, case_sensitive)
}

/// Filter and rank items, returning results as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of strings
/// * `method` - `normal`, `glob`, `regex` or `fuzzy` (unknown names fall back to `normal`)
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of results with `index`, `item` and `score` fields, best first
#[wasm_bindgen]
pub fn filter_items(query: &str, items_json: &str, method: &str, max_results: usize) -> String {
    let items: Vec<String> = match serde_json::from_str(items_json) {
        Ok(items) => items,
        Err(_) => return "[]".to_string(),
    };

    let config = MatcherConfig {
        sort: true,
        ..MatcherConfig::with_method(method.parse().unwrap_or(MatchingMethod::Literal))
    };
    let tokens = TokenSet::compile(query, &config);
    let mut results = crate::rank(&tokens, query, &items, &Budget::unlimited()).results;

    if max_results > 0 {
        results.truncate(max_results);
    }

    serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
}
