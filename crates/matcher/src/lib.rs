//! Query matching and ranking for filter-as-you-type tools.
//!
//! This crate provides:
//! - Query tokenizing and pattern compilation (literal, glob, regex, fuzzy)
//! - AND-matching of candidates and highlight span extraction
//! - An fzf-style fuzzy scorer
//! - Levenshtein edit distance and Unicode collation
//! - Batch ranking with optional parallelism
//!
//! Compile once per query, evaluate many times:
//!
//! ```
//! use sift_match::{fuzzy_score, MatcherConfig, MatchingMethod, TokenSet};
//!
//! let config = MatcherConfig::with_method(MatchingMethod::Fuzzy);
//! let tokens = TokenSet::compile("ffx", &config);
//!
//! let mut hits: Vec<&str> = ["firefox", "vim", "fluxbox"]
//!     .into_iter()
//!     .filter(|c| tokens.matches(c))
//!     .collect();
//! hits.sort_by_key(|c| fuzzy_score("ffx", c, config.case_sensitive));
//! assert_eq!(hits, ["firefox"]);
//! ```

mod charclass;
mod collate;
mod config;
mod distance;
mod error;
mod highlight;
mod pattern;
pub mod rank;
mod scorer;
mod template;
mod text;
mod token;

#[cfg(feature = "wasm")]
mod wasm;

pub use charclass::CharClass;
pub use collate::locale_compare;
pub use config::{MatcherConfig, MatchingMethod, SortingMethod};
pub use distance::{edit_distance, EDIT_DISTANCE_OVERFLOW};
pub use error::{MatchError, MatchErrorCode, Result};
pub use highlight::{highlight, HighlightStyle, MatchSpan, Rgb, ThemeHighlight};
pub use pattern::{compile, Token};
pub use rank::{rank, Budget, RankOutcome, SearchResult};
pub use scorer::{fuzzy_score, FUZZY_SCORER_MAX_LENGTH, WORST_SCORE};
pub use template::expand_template;
pub use text::{force_utf8, latin1_to_utf8, parse_char};
pub use token::{tokenize, TokenSet};
