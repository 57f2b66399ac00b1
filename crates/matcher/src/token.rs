//! Query tokenizing and AND-matching.

use crate::config::MatcherConfig;
use crate::pattern::{compile, Token};
use std::sync::Arc;

/// The compiled form of one query: every token must match.
///
/// Immutable once built and cheap to clone, so one set can be shared across
/// threads evaluating different candidates.
#[derive(Debug, Clone)]
pub struct TokenSet {
    tokens: Arc<[Token]>,
    config: MatcherConfig,
}

impl TokenSet {
    /// Compiles `query` under `config`.
    ///
    /// With tokenizing enabled the query is split on ASCII spaces and each
    /// non-empty piece becomes a token; otherwise the whole query is one
    /// token. An empty query yields an empty set, which matches everything.
    ///
    /// # Example
    /// ```
    /// use sift_match::{MatcherConfig, TokenSet};
    ///
    /// let tokens = TokenSet::compile("fire fox", &MatcherConfig::default());
    /// assert_eq!(tokens.len(), 2);
    /// assert!(tokens.matches("Firefox Web Browser"));
    /// assert!(!tokens.matches("Chromium"));
    /// ```
    pub fn compile(query: &str, config: &MatcherConfig) -> Self {
        let tokens: Vec<Token> = if query.is_empty() {
            Vec::new()
        } else if config.tokenize {
            query
                .split(' ')
                .filter(|piece| !piece.is_empty())
                .map(|piece| compile(piece, config.method, config.case_sensitive))
                .collect()
        } else {
            vec![compile(query, config.method, config.case_sensitive)]
        };

        Self {
            tokens: tokens.into(),
            config: *config,
        }
    }

    /// Returns true if `candidate` contains a match for every token.
    ///
    /// Stops at the first token that does not match.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        self.tokens.iter().all(|token| token.is_match(candidate))
    }

    /// The compiled tokens in query order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true for an empty query.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Settings this set was compiled under.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Returns false if `config` would compile the same query differently.
    pub fn is_compiled_for(&self, config: &MatcherConfig) -> bool {
        self.config.compiles_like(config)
    }
}

/// Compiles `query`; shorthand for [`TokenSet::compile`].
pub fn tokenize(query: &str, config: &MatcherConfig) -> TokenSet {
    TokenSet::compile(query, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchingMethod;

    fn config(method: MatchingMethod, tokenize: bool) -> MatcherConfig {
        MatcherConfig {
            method,
            tokenize,
            ..MatcherConfig::default()
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let tokens = tokenize("", &MatcherConfig::default());
        assert!(tokens.is_empty());
        assert!(tokens.matches("anything"));
        assert!(tokens.matches(""));
    }

    #[test]
    fn test_only_spaces_is_empty() {
        let tokens = tokenize("   ", &MatcherConfig::default());
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_split_on_spaces_only() {
        let tokens = tokenize("a  b\tc", &MatcherConfig::default());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.tokens()[1].as_str(), "b\tc");
    }

    #[test]
    fn test_tokens_are_and_combined_in_any_order() {
        let tokens = tokenize("fox fire", &MatcherConfig::default());
        assert!(tokens.matches("firefox"));
        assert!(!tokens.matches("fire"));
    }

    #[test]
    fn test_tokenize_disabled_keeps_whole_query() {
        let tokens = tokenize("fire fox", &config(MatchingMethod::Literal, false));
        assert_eq!(tokens.len(), 1);
        assert!(!tokens.matches("firefox"));
        assert!(tokens.matches("a fire fox"));
    }

    #[test]
    fn test_token_order_is_stable() {
        let tokens = tokenize("c b a", &MatcherConfig::default());
        let sources: Vec<&str> = tokens.tokens().iter().map(|t| t.as_str()).collect();
        assert_eq!(sources, ["c", "b", "a"]);
    }

    #[test]
    fn test_fuzzy_tokens() {
        let tokens = tokenize("fb qx", &config(MatchingMethod::Fuzzy, true));
        assert!(tokens.matches("foo bar quux"));
        assert!(!tokens.matches("foo bar"));
    }

    #[test]
    fn test_compiled_for() {
        let cfg = MatcherConfig::default();
        let tokens = tokenize("abc", &cfg);
        assert!(tokens.is_compiled_for(&cfg));
        let sensitive = MatcherConfig {
            case_sensitive: true,
            ..cfg
        };
        assert!(!tokens.is_compiled_for(&sensitive));
    }

    #[test]
    fn test_token_set_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokenSet>();
    }
}
