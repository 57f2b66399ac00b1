//! Filtering and ranking of candidate lists.
//!
//! Every candidate runs through the cheap accept-filter first; only accepted
//! candidates are scored. Evaluation of independent candidates fans out
//! across threads when the `parallel` feature is on.

use crate::collate::locale_compare;
use crate::distance::edit_distance;
use crate::scorer::fuzzy_score;
use crate::token::TokenSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::{Duration, Instant};

/// Search result with sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    /// Position of the item in the input
    pub index: usize,
    /// The matched item
    pub item: T,
    /// Sort key (lower is better); 0 when sorting is disabled
    pub score: i64,
}

/// Limits on how much work one ranking pass may do.
///
/// Checked between candidates, never inside one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Budget {
    max_candidates: Option<usize>,
    deadline: Option<Instant>,
}

impl Budget {
    /// No limits.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Evaluate at most the first `n` candidates.
    pub fn with_max_candidates(mut self, n: usize) -> Self {
        self.max_candidates = Some(n);
        self
    }

    /// Stop evaluating once `deadline` has passed.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Stop evaluating `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    #[inline]
    fn expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Output of [`rank`].
#[derive(Debug, Clone)]
pub struct RankOutcome<'a> {
    /// Accepted candidates, sorted when the config asks for it
    pub results: Vec<SearchResult<&'a str>>,
    /// Number of candidates that were evaluated
    pub evaluated: usize,
    /// False if the budget stopped evaluation early
    pub complete: bool,
}

enum Evaluation<'a> {
    Skipped,
    Rejected,
    Accepted(SearchResult<&'a str>),
}

/// Filters `candidates` with `tokens` and orders the survivors.
///
/// With sorting enabled in the token set's config, each accepted candidate
/// gets a sort key: the fuzzy score when the method is fuzzy or the sorting
/// method is `fzf`, the edit distance to `query` otherwise. Results are
/// ordered by ascending key, ties broken by [`locale_compare`] and then input
/// order. Without sorting, input order is kept.
///
/// # Example
/// ```
/// use sift_match::{rank, Budget, MatcherConfig, MatchingMethod, TokenSet};
///
/// let config = MatcherConfig { sort: true, ..MatcherConfig::with_method(MatchingMethod::Fuzzy) };
/// let tokens = TokenSet::compile("ff", &config);
/// let candidates = ["diff-files", "firefox", "vim"];
/// let outcome = rank(&tokens, "ff", &candidates, &Budget::unlimited());
/// let items: Vec<_> = outcome.results.iter().map(|r| r.item).collect();
/// assert_eq!(items, ["firefox", "diff-files"]);
/// ```
pub fn rank<'a, S>(
    tokens: &TokenSet,
    query: &str,
    candidates: &'a [S],
    budget: &Budget,
) -> RankOutcome<'a>
where
    S: AsRef<str> + Sync,
{
    let config = tokens.config();
    let sort = config.sort && !query.is_empty();
    let limit = budget
        .max_candidates
        .map_or(candidates.len(), |n| n.min(candidates.len()));

    let evaluate = |index: usize, candidate: &'a S| -> Evaluation<'a> {
        if budget.expired() {
            return Evaluation::Skipped;
        }
        let item = candidate.as_ref();
        if !tokens.matches(item) {
            return Evaluation::Rejected;
        }
        let score = if !sort {
            0
        } else if config.uses_fuzzy_scorer() {
            i64::from(fuzzy_score(query, item, config.case_sensitive))
        } else {
            i64::from(edit_distance(query, item, config.case_sensitive))
        };
        Evaluation::Accepted(SearchResult { index, item, score })
    };

    #[cfg(feature = "parallel")]
    let evaluations: Vec<Evaluation<'a>> = {
        use rayon::prelude::*;
        candidates[..limit]
            .par_iter()
            .enumerate()
            .map(|(index, candidate)| evaluate(index, candidate))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let evaluations: Vec<Evaluation<'a>> = {
        let mut evaluations = Vec::with_capacity(limit);
        for (index, candidate) in candidates[..limit].iter().enumerate() {
            let evaluation = evaluate(index, candidate);
            let stop = matches!(evaluation, Evaluation::Skipped);
            evaluations.push(evaluation);
            if stop {
                break;
            }
        }
        evaluations
    };

    let mut evaluated = 0;
    let mut results = Vec::new();
    for evaluation in evaluations {
        match evaluation {
            Evaluation::Skipped => {}
            Evaluation::Rejected => evaluated += 1,
            Evaluation::Accepted(result) => {
                evaluated += 1;
                results.push(result);
            }
        }
    }

    if sort {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            results.par_sort_by(by_score);
        }

        #[cfg(not(feature = "parallel"))]
        results.sort_by(by_score);
    }

    let complete = evaluated == candidates.len();
    if !complete {
        tracing::warn!(
            evaluated,
            total = candidates.len(),
            "Ranking budget exhausted"
        );
    }
    tracing::debug!(
        evaluated,
        matched = results.len(),
        complete,
        sorted = sort,
        "Ranking finished"
    );

    RankOutcome {
        results,
        evaluated,
        complete,
    }
}

/// Stable sort order: ascending key, then collation.
fn by_score(a: &SearchResult<&str>, b: &SearchResult<&str>) -> Ordering {
    a.score
        .cmp(&b.score)
        .then_with(|| locale_compare(a.item, b.item, usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MatcherConfig, MatchingMethod, SortingMethod};

    fn items<'a>(outcome: &RankOutcome<'a>) -> Vec<&'a str> {
        outcome.results.iter().map(|r| r.item).collect()
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let tokens = TokenSet::compile("o", &MatcherConfig::default());
        let candidates = ["foo", "bar", "boo", "baz"];
        let outcome = rank(&tokens, "o", &candidates, &Budget::unlimited());
        assert_eq!(items(&outcome), ["foo", "boo"]);
        assert_eq!(outcome.results[1].index, 2);
        assert!(outcome.results.iter().all(|r| r.score == 0));
        assert_eq!(outcome.evaluated, 4);
        assert!(outcome.complete);
    }

    #[test]
    fn test_empty_query_accepts_all_unsorted() {
        let config = MatcherConfig {
            sort: true,
            ..MatcherConfig::default()
        };
        let tokens = TokenSet::compile("", &config);
        let candidates = vec!["b".to_string(), "a".to_string()];
        let outcome = rank(&tokens, "", &candidates, &Budget::unlimited());
        assert_eq!(items(&outcome), ["b", "a"]);
    }

    #[test]
    fn test_levenshtein_sort() {
        let config = MatcherConfig {
            sort: true,
            ..MatcherConfig::default()
        };
        let tokens = TokenSet::compile("term", &config);
        let candidates = ["xterminal", "term", "terms"];
        let outcome = rank(&tokens, "term", &candidates, &Budget::unlimited());
        assert_eq!(items(&outcome), ["term", "terms", "xterminal"]);
        assert_eq!(outcome.results[0].score, 0);
        assert_eq!(outcome.results[2].score, 5);
    }

    #[test]
    fn test_fzf_sort_with_literal_method() {
        let config = MatcherConfig {
            sort: true,
            sorting_method: SortingMethod::Fzf,
            ..MatcherConfig::default()
        };
        let tokens = TokenSet::compile("fox", &config);
        let candidates = ["a firefox", "fox"];
        let outcome = rank(&tokens, "fox", &candidates, &Budget::unlimited());
        assert_eq!(items(&outcome), ["fox", "a firefox"]);
    }

    #[test]
    fn test_ties_use_collation() {
        let config = MatcherConfig {
            sort: true,
            ..MatcherConfig::default()
        };
        let tokens = TokenSet::compile("x", &config);
        let candidates = ["Bx", "ax", "cx"];
        let outcome = rank(&tokens, "x", &candidates, &Budget::unlimited());
        assert_eq!(items(&outcome), ["ax", "Bx", "cx"]);
    }

    #[test]
    fn test_fuzzy_rank() {
        let config = MatcherConfig {
            sort: true,
            ..MatcherConfig::with_method(MatchingMethod::Fuzzy)
        };
        let tokens = TokenSet::compile("abc", &config);
        let candidates = ["axbxcxyz", "xabcxyz", "abcxyz", "cba"];
        let outcome = rank(&tokens, "abc", &candidates, &Budget::unlimited());
        assert_eq!(items(&outcome), ["abcxyz", "axbxcxyz", "xabcxyz"]);
    }

    #[test]
    fn test_candidate_budget() {
        let tokens = TokenSet::compile("", &MatcherConfig::default());
        let candidates = ["a", "b", "c", "d"];
        let budget = Budget::unlimited().with_max_candidates(2);
        let outcome = rank(&tokens, "", &candidates, &budget);
        assert_eq!(items(&outcome), ["a", "b"]);
        assert_eq!(outcome.evaluated, 2);
        assert!(!outcome.complete);
    }

    #[test]
    fn test_expired_deadline_evaluates_nothing() {
        let tokens = TokenSet::compile("a", &MatcherConfig::default());
        let candidates = ["a", "ab"];
        let budget = Budget::unlimited().with_deadline(Instant::now());
        let outcome = rank(&tokens, "a", &candidates, &budget);
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.evaluated, 0);
        assert!(!outcome.complete);
    }

    #[test]
    fn test_results_serialize() {
        let result = SearchResult {
            index: 1,
            item: "vim",
            score: -90,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"index":1,"item":"vim","score":-90}"#);
    }
}
