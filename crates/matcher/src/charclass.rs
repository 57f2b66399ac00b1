//! Character classes for word-boundary detection in the fuzzy scorer.

/// Coarse classification of a code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Lowercase letter
    Lower,
    /// Uppercase letter
    Upper,
    /// Numeric character
    Digit,
    /// Anything else: punctuation, whitespace, symbols, caseless scripts
    NonWord,
}

impl CharClass {
    /// Classifies a single code point.
    #[inline]
    pub fn of(c: char) -> Self {
        if c.is_lowercase() {
            CharClass::Lower
        } else if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::NonWord
        }
    }
}
