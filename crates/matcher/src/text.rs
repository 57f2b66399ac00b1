//! Input text preparation.
//!
//! Candidates and queries must be valid UTF-8 before they reach the
//! matcher; these helpers repair or decode raw input.

use crate::error::{MatchError, Result};
use std::borrow::Cow;

/// Decodes `bytes` as UTF-8, replacing each invalid sequence with U+FFFD.
///
/// Borrows when the input is already valid.
pub fn force_utf8(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Decodes ISO-8859-1 bytes.
///
/// Every byte maps to the code point of the same value, so this never fails.
pub fn latin1_to_utf8(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parses a character given on the command line or in a config file.
///
/// Accepts a single character, one of the escapes `\n \a \b \t \v \f \r \\ \0`,
/// or `\x` followed by a hexadecimal code point.
///
/// # Example
/// ```
/// use sift_match::parse_char;
///
/// assert_eq!(parse_char("|"), Ok('|'));
/// assert_eq!(parse_char("\\t"), Ok('\t'));
/// assert_eq!(parse_char("\\x41"), Ok('A'));
/// ```
pub fn parse_char(arg: &str) -> Result<char> {
    let mut chars = arg.chars();
    let invalid = || MatchError::InvalidCharSpec(arg.to_string());

    match (chars.next(), chars.next(), chars.as_str()) {
        (Some(c), None, _) => Ok(c),
        (Some('\\'), Some(escape), "") => match escape {
            'n' => Ok('\n'),
            'a' => Ok('\x07'),
            'b' => Ok('\x08'),
            't' => Ok('\t'),
            'v' => Ok('\x0B'),
            'f' => Ok('\x0C'),
            'r' => Ok('\r'),
            '\\' => Ok('\\'),
            '0' => Ok('\0'),
            _ => Err(invalid()),
        },
        (Some('\\'), Some('x'), hex) => u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}
