//! Unicode-aware string collation.
//!
//! A root-locale approximation: the active locale is not consulted.
//! Strings are NFKC-normalized, truncated, then ordered in three levels the
//! way the root collation orders Latin text: base letters first, then
//! accents, then case. Punctuation and spaces carry primary weight rather
//! than being ignorable. Code point order breaks the remaining ties, so only
//! identical normalized prefixes compare equal.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares the first `n` code points of `a` and `b` under a fixed
/// root-locale approximation.
///
/// Both strings are normalized (compatibility decomposition followed by
/// canonical composition) before truncation.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
/// use sift_match::locale_compare;
///
/// assert_eq!(locale_compare("a", "b", 1), Ordering::Less);
/// assert_eq!(locale_compare("apple", "Banana", usize::MAX), Ordering::Less);
/// assert_eq!(locale_compare("abc", "abd", 2), Ordering::Equal);
/// ```
pub fn locale_compare(a: &str, b: &str, n: usize) -> Ordering {
    let a: String = a.nfkc().take(n).collect();
    let b: String = b.nfkc().take(n).collect();

    let ka = CollationKey::new(&a);
    let kb = CollationKey::new(&b);

    ka.primary
        .cmp(&kb.primary)
        .then_with(|| ka.secondary.cmp(&kb.secondary))
        .then_with(|| ka.tertiary.cmp(&kb.tertiary))
        .then_with(|| a.cmp(&b))
}

/// Primary weight groups, in sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Space,
    Punctuation,
    Digit,
    Letter,
}

#[derive(Debug, Default)]
struct CollationKey {
    primary: Vec<(Group, char)>,
    /// Combining marks of each base character, each run closed by `'\0'`
    secondary: Vec<char>,
    /// 0 for lowercase or caseless, 1 for uppercase
    tertiary: Vec<u8>,
}

impl CollationKey {
    fn new(s: &str) -> Self {
        let mut key = CollationKey::default();

        for c in s.nfd() {
            if is_combining_mark(c) && !key.primary.is_empty() {
                // reopen the run of the current base character
                key.secondary.pop();
                key.secondary.push(c);
                key.secondary.push('\0');
                continue;
            }

            let group = if c.is_whitespace() {
                Group::Space
            } else if c.is_numeric() {
                Group::Digit
            } else if c.is_alphabetic() {
                Group::Letter
            } else {
                Group::Punctuation
            };

            key.primary.push((group, c.to_lowercase().next().unwrap_or(c)));
            key.secondary.push('\0');
            key.tertiary.push(u8::from(c.is_uppercase()));
        }

        key
    }
}
