//! Match span extraction for highlighting.

use crate::token::TokenSet;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Text attributes applied to matched regions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HighlightStyle: u8 {
        /// Bold weight
        const BOLD = 1 << 0;
        /// Single underline
        const UNDERLINE = 1 << 1;
        /// Italic
        const ITALIC = 1 << 2;
        /// Foreground color from [`ThemeHighlight::color`]
        const COLOR = 1 << 3;
    }
}

/// RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Scales each channel to 16 bits.
    pub fn to_u16(self) -> [u16; 3] {
        [scale(self.red), scale(self.green), scale(self.blue)]
    }
}

#[inline]
fn scale(channel: f64) -> u16 {
    (channel.clamp(0.0, 1.0) * 65535.0) as u16
}

/// Highlight settings supplied by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThemeHighlight {
    pub style: HighlightStyle,
    pub color: Rgb,
}

impl ThemeHighlight {
    /// A style without color.
    pub fn new(style: HighlightStyle) -> Self {
        Self {
            style,
            color: Rgb::default(),
        }
    }

    /// A style including [`HighlightStyle::COLOR`] with `color`.
    pub fn colored(style: HighlightStyle, color: Rgb) -> Self {
        Self {
            style: style | HighlightStyle::COLOR,
            color,
        }
    }
}

/// A highlighted region of one candidate, in byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub style: HighlightStyle,
    /// 16-bit RGB, present when `style` contains `COLOR`
    pub color: Option<[u16; 3]>,
}

impl MatchSpan {
    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds every region of `candidate` matched by `tokens`.
///
/// Each token is run over the whole candidate, collecting every
/// non-overlapping occurrence. Patterns with capture groups (the fuzzy
/// accept-filter has one per pattern character) report each group instead
/// of the whole match, so only the matched characters are marked and not
/// the filler between them. Spans from different tokens may overlap.
///
/// # Example
/// ```
/// use sift_match::{highlight, HighlightStyle, MatcherConfig, MatchingMethod, ThemeHighlight, TokenSet};
///
/// let tokens = TokenSet::compile("ab", &MatcherConfig::with_method(MatchingMethod::Fuzzy));
/// let spans = highlight(&tokens, "xaybz", &ThemeHighlight::new(HighlightStyle::BOLD));
/// let ranges: Vec<_> = spans.iter().map(|s| (s.start, s.end)).collect();
/// assert_eq!(ranges, [(1, 2), (3, 4)]);
/// ```
pub fn highlight(tokens: &TokenSet, candidate: &str, theme: &ThemeHighlight) -> Vec<MatchSpan> {
    let color = theme
        .style
        .contains(HighlightStyle::COLOR)
        .then(|| theme.color.to_u16());
    let mut spans = Vec::new();

    for token in tokens.tokens() {
        let regex = token.regex();
        let groups = regex.captures_len();
        let first = if groups > 1 { 1 } else { 0 };

        for captures in regex.captures_iter(candidate) {
            for index in first..groups {
                let Some(m) = captures.get(index) else {
                    continue;
                };
                if m.start() == m.end() {
                    continue;
                }
                spans.push(MatchSpan {
                    start: m.start(),
                    end: m.end(),
                    style: theme.style,
                    color,
                });
            }
        }
    }

    spans
}
