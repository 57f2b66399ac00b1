//! Edit distance.

/// Returned when the shorter input is too long for a `u32` DP row.
pub const EDIT_DISTANCE_OVERFLOW: u32 = u32::MAX;

#[inline]
fn fold(c: char, case_sensitive: bool) -> char {
    if case_sensitive {
        c
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// Calculate Levenshtein edit distance between two strings.
///
/// Operates on code points, keeping a single DP row sized by the shorter
/// input.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
/// * `case_sensitive` - When false both inputs are lowercased first
///
/// # Returns
/// Number of single-character edits needed to transform a into b, or
/// [`EDIT_DISTANCE_OVERFLOW`] if the shorter input cannot be counted.
pub fn edit_distance(a: &str, b: &str, case_sensitive: bool) -> u32 {
    let a_chars: Vec<char> = a.chars().map(|c| fold(c, case_sensitive)).collect();
    let b_chars: Vec<char> = b.chars().map(|c| fold(c, case_sensitive)).collect();

    let (needle, haystack) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    let Ok(needle_len) = u32::try_from(needle.len()) else {
        return EDIT_DISTANCE_OVERFLOW;
    };
    if needle_len == u32::MAX {
        return EDIT_DISTANCE_OVERFLOW;
    }
    if needle.is_empty() {
        return u32::try_from(haystack.len()).unwrap_or(EDIT_DISTANCE_OVERFLOW);
    }

    let mut column: Vec<u32> = (0..=needle_len).collect();

    for (x, &hc) in haystack.iter().enumerate() {
        let x = u32::try_from(x + 1).unwrap_or(EDIT_DISTANCE_OVERFLOW);
        let mut last_diag = column[0];
        column[0] = x;

        for (y, &nc) in needle.iter().enumerate() {
            let old_diag = column[y + 1];
            let cost = u32::from(nc != hc);
            column[y + 1] = (column[y + 1].saturating_add(1))
                .min(column[y].saturating_add(1))
                .min(last_diag.saturating_add(cost));
            last_diag = old_diag;
        }
    }

    column[needle.len()]
}
