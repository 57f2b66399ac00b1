//! Pattern compilation.
//!
//! Every matching method compiles down to a [`Regex`]. Compilation never
//! fails outward: a malformed user regex falls back to a literal match of
//! the same text.

use crate::config::MatchingMethod;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Used only when even the escaped literal exceeds the regex size limit.
static NEVER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\s\S]").expect("valid regex"));

/// One compiled query token.
///
/// Cloning is cheap; the compiled program is shared.
#[derive(Debug, Clone)]
pub struct Token {
    regex: Regex,
    method: MatchingMethod,
}

impl Token {
    /// The method this token was compiled with.
    pub fn method(&self) -> MatchingMethod {
        self.method
    }

    /// The compiled pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The executable pattern.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Returns true if the pattern occurs anywhere in `candidate`.
    #[inline]
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// Compiles `text` into a token using `method`.
///
/// # Arguments
/// * `text` - Raw token text as typed by the user
/// * `method` - Matching strategy
/// * `case_sensitive` - Whether letters must match case exactly
///
/// # Example
/// ```
/// use sift_match::{compile, MatchingMethod};
///
/// let token = compile("f*o", MatchingMethod::Glob, false);
/// assert!(token.is_match("FOO"));
/// assert!(token.is_match("fo"));
/// assert!(!token.is_match("of"));
/// ```
pub fn compile(text: &str, method: MatchingMethod, case_sensitive: bool) -> Token {
    let regex = match method {
        MatchingMethod::Literal => literal(text, case_sensitive),
        MatchingMethod::Glob => build(&glob_to_regex(text), case_sensitive, true)
            .unwrap_or_else(|_| literal(text, case_sensitive)),
        MatchingMethod::Regex => match build(text, case_sensitive, false) {
            Ok(regex) => regex,
            Err(err) => {
                tracing::debug!(token = text, error = %err, "Invalid regex, matching literally");
                literal(text, case_sensitive)
            }
        },
        MatchingMethod::Fuzzy => build(&fuzzy_to_regex(text), case_sensitive, true)
            .unwrap_or_else(|_| literal(text, case_sensitive)),
    };

    Token { regex, method }
}

/// `wildcards_span_lines` lets the `.` emitted for glob and fuzzy wildcards
/// match `\n`; user regexes keep the default.
fn build(
    pattern: &str,
    case_sensitive: bool,
    wildcards_span_lines: bool,
) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .dot_matches_new_line(wildcards_span_lines)
        .build()
}

fn literal(text: &str, case_sensitive: bool) -> Regex {
    match build(&regex::escape(text), case_sensitive, false) {
        Ok(regex) => regex,
        Err(err) => {
            tracing::warn!(len = text.len(), error = %err, "Token too large to compile");
            NEVER.clone()
        }
    }
}

/// Translates a glob into a regex: `*` matches any run, `?` any one character.
///
/// Works on the escaped text so every other character stays literal. The
/// character after a backslash is consumed together with it, which keeps an
/// escaped backslash from pairing with a following wildcard.
fn glob_to_regex(input: &str) -> String {
    let escaped = regex::escape(input);
    let mut out = String::with_capacity(escaped.len() + 2);
    let mut chars = escaped.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('*') => out.push_str(".*"),
            Some('?') => out.push('.'),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push_str(r"\\"),
        }
    }

    out
}

/// Builds the fuzzy accept-filter: one capture group per code point, joined
/// by `.*`.
///
/// The groups let the highlighter mark each matched character on its own.
fn fuzzy_to_regex(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 6);
    let mut buf = [0u8; 4];

    for (i, c) in input.chars().enumerate() {
        if i > 0 {
            out.push_str(".*");
        }
        out.push('(');
        out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        out.push(')');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_literal_escapes_metacharacters() {
        let token = compile("a.b", MatchingMethod::Literal, false);
        assert!(token.is_match("xa.by"));
        assert!(!token.is_match("axb"));
    }

    #[test]
    fn test_literal_case_sensitivity() {
        assert!(compile("Foo", MatchingMethod::Literal, false).is_match("some foo"));
        assert!(!compile("Foo", MatchingMethod::Literal, true).is_match("some foo"));
        assert!(compile("Foo", MatchingMethod::Literal, true).is_match("some Foo"));
    }

    #[test]
    fn test_glob_star() {
        let token = compile("f*o", MatchingMethod::Glob, false);
        assert!(token.is_match("foo"));
        // `*` may match nothing
        assert!(token.is_match("fo"));
        assert!(!token.is_match("of"));
        assert!(!token.is_match("bar"));
    }

    #[test]
    fn test_glob_wildcards_span_newlines() {
        assert!(compile("a*b", MatchingMethod::Glob, false).is_match("a\nb"));
        assert!(compile("a?b", MatchingMethod::Glob, false).is_match("a\nb"));
    }

    #[test]
    fn test_glob_question_mark() {
        let token = compile("f?o", MatchingMethod::Glob, false);
        assert!(token.is_match("foo"));
        assert!(token.is_match("fzo"));
        assert!(!token.is_match("fo"));
    }

    #[test]
    fn test_glob_keeps_other_metacharacters_literal() {
        let token = compile("a.c*", MatchingMethod::Glob, false);
        assert!(token.is_match("a.cdef"));
        assert!(!token.is_match("abc"));
    }

    #[test]
    fn test_glob_escaped_backslash_before_wildcard() {
        assert_eq!(glob_to_regex(r"\*"), r"\\.*");
        let token = compile(r"a\*", MatchingMethod::Glob, true);
        assert!(token.is_match(r"a\anything"));
        assert!(!token.is_match("a*"));
    }

    #[test]
    fn test_regex_method() {
        let token = compile("^ab+c$", MatchingMethod::Regex, false);
        assert!(token.is_match("ABBBC"));
        assert!(!token.is_match("xabc"));
    }

    #[test]
    fn test_malformed_regex_falls_back_to_literal() {
        let token = compile("(", MatchingMethod::Regex, false);
        assert!(token.is_match("call("));
        assert!(!token.is_match("call"));
        assert_eq!(token.method(), MatchingMethod::Regex);
    }

    #[test]
    fn test_fuzzy_subsequence() {
        let token = compile("abc", MatchingMethod::Fuzzy, false);
        assert!(token.is_match("xaxbxc"));
        assert!(!token.is_match("acb"));
    }

    #[test]
    fn test_fuzzy_spans_newlines() {
        let token = compile("ab", MatchingMethod::Fuzzy, false);
        assert!(token.is_match("a\nb"));
        assert!(token.is_match("x\na\n\nyb"));
    }

    #[test]
    fn test_user_regex_dot_stops_at_newline() {
        assert!(!compile("a.b", MatchingMethod::Regex, false).is_match("a\nb"));
    }

    #[test]
    fn test_fuzzy_pattern_shape() {
        assert_eq!(fuzzy_to_regex("a.b"), r"(a).*(\.).*(b)");
        assert_eq!(compile("ab", MatchingMethod::Fuzzy, false).regex().captures_len(), 3);
    }

    #[test]
    fn test_fuzzy_multibyte() {
        let token = compile("üß", MatchingMethod::Fuzzy, true);
        assert!(token.is_match("grüße aus"));
        assert!(!token.is_match("ßü"));
    }

    proptest! {
        #[test]
        fn prop_literal_finds_embedded_text(
            prefix in ".{0,8}",
            needle in ".{1,8}",
            suffix in ".{0,8}",
            case_sensitive in any::<bool>(),
        ) {
            let candidate = format!("{prefix}{needle}{suffix}");
            let token = compile(&needle, MatchingMethod::Literal, case_sensitive);
            prop_assert!(token.is_match(&candidate));
        }

        #[test]
        fn prop_regex_never_panics(text in "\\PC{0,12}") {
            let token = compile(&text, MatchingMethod::Regex, false);
            let _ = token.is_match(&text);
        }
    }
}
