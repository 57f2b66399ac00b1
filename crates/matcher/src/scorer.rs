//! fzf-style fuzzy scorer.
//!
//! Global sequence alignment of the pattern against the candidate. Scores
//! follow the "lower is better" convention: the returned value is the
//! negated best alignment.
//!
//! Scoring criteria:
//! - Matches at word starts and camelCase / digit transitions earn a bonus.
//! - Runs of adjacent matched characters earn [`CONSECUTIVE_SCORE`].
//! - Skipped candidate characters cost [`GAP_SCORE`] each, and characters
//!   before the first match cost [`LEADING_GAP_SCORE`] each.
//! - The first character of each pattern word counts double.
//!
//! Recurrence, with `score[j]` the transition bonus at candidate position `j`:
//!
//! ```text
//! dp[0][j] = LEADING_GAP_SCORE * j + score[j] * m
//! dp[i][j] = max(dp[i-1][j-1] + CONSECUTIVE_SCORE,
//!                max(dp[i-1][k] + GAP_SCORE * (j-1-k) : k < j) + score[j] * m)
//! ```
//!
//! Only one row is kept, so memory is O(candidate length).

use crate::charclass::CharClass;

/// Candidates longer than this (in code points) are not scored.
pub const FUZZY_SCORER_MAX_LENGTH: usize = 256;

/// Unreachable cell value.
const MIN_SCORE: i32 = i32::MIN / 2;

/// Returned for oversized candidates and patterns that cannot be aligned.
pub const WORST_SCORE: i32 = -MIN_SCORE;

pub const LEADING_GAP_SCORE: i32 = -4;
pub const GAP_SCORE: i32 = -5;
pub const WORD_START_SCORE: i32 = 50;
pub const NON_WORD_SCORE: i32 = 40;
pub const CAMEL_SCORE: i32 = WORD_START_SCORE + GAP_SCORE - 1;
pub const CONSECUTIVE_SCORE: i32 = WORD_START_SCORE + GAP_SCORE;

const PATTERN_NON_START_MULTIPLIER: i32 = 1;
const PATTERN_START_MULTIPLIER: i32 = 2;

/// Bonus for a character of class `curr` following one of class `prev`.
fn transition_score(prev: CharClass, curr: CharClass) -> i32 {
    use CharClass::*;

    if prev == NonWord && curr != NonWord {
        return WORD_START_SCORE;
    }
    if (prev == Lower && curr == Upper) || (prev != Digit && curr == Digit) {
        return CAMEL_SCORE;
    }
    if curr == NonWord {
        return NON_WORD_SCORE;
    }
    0
}

#[inline]
fn fold(c: char, case_sensitive: bool) -> char {
    if case_sensitive {
        c
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// Scores how well `pattern` aligns with `candidate`; lower is better.
///
/// `pattern` is expected to be a subsequence of `candidate` (the fuzzy
/// accept-filter guarantees this). Spaces in the pattern separate words and
/// are not aligned. Pairs that cannot be aligned, empty inputs, and
/// candidates over [`FUZZY_SCORER_MAX_LENGTH`] code points all return
/// [`WORST_SCORE`].
///
/// # Example
/// ```
/// use sift_match::fuzzy_score;
///
/// assert!(fuzzy_score("abc", "abcxyz", false) < fuzzy_score("abc", "xabcxyz", false));
/// ```
pub fn fuzzy_score(pattern: &str, candidate: &str, case_sensitive: bool) -> i32 {
    let chars: Vec<char> = candidate.chars().collect();
    if chars.len() > FUZZY_SCORER_MAX_LENGTH {
        return WORST_SCORE;
    }

    let mut prev = CharClass::NonWord;
    let score: Vec<i32> = chars
        .iter()
        .map(|&c| {
            let curr = CharClass::of(c);
            let bonus = transition_score(prev, curr);
            prev = curr;
            bonus
        })
        .collect();
    let folded: Vec<char> = chars.iter().map(|&c| fold(c, case_sensitive)).collect();

    // dp[j]: best value aligning the pattern so far with its last char at j
    let mut dp = vec![MIN_SCORE; chars.len()];
    let mut first = true;
    let mut word_start = true;

    for pc in pattern.chars() {
        if pc.is_whitespace() {
            word_start = true;
            continue;
        }
        let pc = fold(pc, case_sensitive);
        let multiplier = if word_start {
            PATTERN_START_MULTIPLIER
        } else {
            PATTERN_NON_START_MULTIPLIER
        };

        // upper-left cell, and the best of it and every cell left of it
        let mut uleft = MIN_SCORE;
        let mut ulefts = MIN_SCORE;
        let mut lefts = MIN_SCORE;

        for (j, &sc) in folded.iter().enumerate() {
            let left = dp[j];
            lefts = lefts.saturating_add(GAP_SCORE).max(left);

            dp[j] = if pc == sc {
                let bonus = score[j] * multiplier;
                if first {
                    LEADING_GAP_SCORE * j as i32 + bonus
                } else {
                    uleft
                        .saturating_add(CONSECUTIVE_SCORE)
                        .max(ulefts.saturating_add(bonus))
                }
            } else {
                MIN_SCORE
            };

            uleft = left;
            ulefts = lefts;
        }

        first = false;
        word_start = false;
    }

    let best = dp
        .iter()
        .fold(MIN_SCORE, |lefts, &cell| lefts.saturating_add(GAP_SCORE).max(cell));

    if best <= MIN_SCORE / 2 {
        WORST_SCORE
    } else {
        -best
    }
}
