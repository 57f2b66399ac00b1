//! Matcher settings.
//!
//! A [`MatcherConfig`] is read once per query and baked into the compiled
//! [`TokenSet`](crate::TokenSet). Changing any field means recompiling.

use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a query token is turned into a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchingMethod {
    /// Case-(in)sensitive substring match
    #[default]
    #[serde(alias = "normal")]
    Literal,
    /// `*` and `?` wildcards
    Glob,
    /// User supplied regular expression
    Regex,
    /// Characters in order, anything in between
    Fuzzy,
}

impl MatchingMethod {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchingMethod::Literal => "normal",
            MatchingMethod::Glob => "glob",
            MatchingMethod::Regex => "regex",
            MatchingMethod::Fuzzy => "fuzzy",
        }
    }
}

impl FromStr for MatchingMethod {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "normal" | "literal" => Ok(MatchingMethod::Literal),
            "glob" => Ok(MatchingMethod::Glob),
            "regex" => Ok(MatchingMethod::Regex),
            "fuzzy" => Ok(MatchingMethod::Fuzzy),
            _ => Err(MatchError::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for MatchingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort key used when ranking is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortingMethod {
    /// Edit distance between query and candidate
    #[default]
    Levenshtein,
    /// Sequence alignment score
    Fzf,
}

impl FromStr for SortingMethod {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "levenshtein" | "normal" => Ok(SortingMethod::Levenshtein),
            "fzf" => Ok(SortingMethod::Fzf),
            _ => Err(MatchError::InvalidSortingMethod(s.to_string())),
        }
    }
}

impl fmt::Display for SortingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortingMethod::Levenshtein => f.write_str("levenshtein"),
            SortingMethod::Fzf => f.write_str("fzf"),
        }
    }
}

/// Matching and ranking settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Pattern construction strategy
    #[serde(default)]
    pub method: MatchingMethod,

    /// Match case exactly
    #[serde(default)]
    pub case_sensitive: bool,

    /// Split the query on spaces into independently matched tokens
    #[serde(default = "default_true")]
    pub tokenize: bool,

    /// Order results by relevance instead of input order
    #[serde(default)]
    pub sort: bool,

    /// Sort key when `sort` is enabled
    #[serde(default)]
    pub sorting_method: SortingMethod,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            method: MatchingMethod::default(),
            case_sensitive: false,
            tokenize: true,
            sort: false,
            sorting_method: SortingMethod::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl MatcherConfig {
    /// Creates a config for `method` with every other field at its default.
    pub fn with_method(method: MatchingMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Returns true if two configs produce identical compiled patterns.
    ///
    /// Sorting fields are ignored since they never reach the patterns.
    pub fn compiles_like(&self, other: &MatcherConfig) -> bool {
        self.method == other.method
            && self.case_sensitive == other.case_sensitive
            && self.tokenize == other.tokenize
    }

    /// Returns true if ranking should use the fuzzy scorer.
    pub fn uses_fuzzy_scorer(&self) -> bool {
        self.method == MatchingMethod::Fuzzy || self.sorting_method == SortingMethod::Fzf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_str() {
        assert_eq!("normal".parse::<MatchingMethod>(), Ok(MatchingMethod::Literal));
        assert_eq!("Glob".parse::<MatchingMethod>(), Ok(MatchingMethod::Glob));
        assert_eq!("REGEX".parse::<MatchingMethod>(), Ok(MatchingMethod::Regex));
        assert_eq!("fuzzy".parse::<MatchingMethod>(), Ok(MatchingMethod::Fuzzy));
        assert!(matches!(
            "prefix".parse::<MatchingMethod>(),
            Err(MatchError::InvalidMethod(_))
        ));
    }

    #[test]
    fn test_method_display_round_trips() {
        for method in [
            MatchingMethod::Literal,
            MatchingMethod::Glob,
            MatchingMethod::Regex,
            MatchingMethod::Fuzzy,
        ] {
            assert_eq!(method.to_string().parse::<MatchingMethod>(), Ok(method));
        }
    }

    #[test]
    fn test_sorting_method_from_str() {
        assert_eq!("fzf".parse::<SortingMethod>(), Ok(SortingMethod::Fzf));
        assert_eq!("Levenshtein".parse::<SortingMethod>(), Ok(SortingMethod::Levenshtein));
        assert!("alpha".parse::<SortingMethod>().is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = MatcherConfig::default();
        assert_eq!(config.method, MatchingMethod::Literal);
        assert!(!config.case_sensitive);
        assert!(config.tokenize);
        assert!(!config.sort);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: MatcherConfig = toml::from_str("method = \"normal\"\nsort = true").unwrap();
        assert_eq!(config.method, MatchingMethod::Literal);
        assert!(config.sort);
        assert!(config.tokenize);

        let config: MatcherConfig = toml::from_str("method = \"fuzzy\"").unwrap();
        assert!(config.uses_fuzzy_scorer());
    }

    #[test]
    fn test_compiles_like_ignores_sorting() {
        let a = MatcherConfig::default();
        let b = MatcherConfig {
            sort: true,
            sorting_method: SortingMethod::Fzf,
            ..a
        };
        assert!(a.compiles_like(&b));

        let c = MatcherConfig {
            case_sensitive: true,
            ..a
        };
        assert!(!a.compiles_like(&c));
    }
}
