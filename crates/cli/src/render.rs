//! ANSI rendering of highlight spans.

use owo_colors::{OwoColorize, Style};
use sift_match::{HighlightStyle, MatchSpan};
use std::fmt::Write;

/// Renders `text` with every span applied.
///
/// Overlapping spans are merged: a region covered by several spans gets the
/// union of their attributes, and the last colored span wins the color.
/// Spans that do not fall on character boundaries are ignored.
pub fn render_highlighted(text: &str, spans: &[MatchSpan]) -> String {
    let spans: Vec<&MatchSpan> = spans
        .iter()
        .filter(|s| s.start < s.end && s.end <= text.len())
        .filter(|s| text.is_char_boundary(s.start) && text.is_char_boundary(s.end))
        .collect();
    if spans.is_empty() {
        return text.to_string();
    }

    let mut bounds: Vec<usize> = spans
        .iter()
        .flat_map(|s| [s.start, s.end])
        .chain([0, text.len()])
        .collect();
    bounds.sort_unstable();
    bounds.dedup();

    let mut out = String::with_capacity(text.len() * 2);
    for window in bounds.windows(2) {
        let (start, end) = (window[0], window[1]);
        let segment = &text[start..end];

        let mut flags = HighlightStyle::empty();
        let mut color = None;
        for span in spans.iter().filter(|s| s.start <= start && end <= s.end) {
            flags |= span.style;
            if span.color.is_some() {
                color = span.color;
            }
        }

        if flags.is_empty() {
            out.push_str(segment);
        } else {
            let _ = write!(out, "{}", segment.style(style_for(flags, color)));
        }
    }

    out
}

fn style_for(flags: HighlightStyle, color: Option<[u16; 3]>) -> Style {
    let mut style = Style::new();
    if flags.contains(HighlightStyle::BOLD) {
        style = style.bold();
    }
    if flags.contains(HighlightStyle::UNDERLINE) {
        style = style.underline();
    }
    if flags.contains(HighlightStyle::ITALIC) {
        style = style.italic();
    }
    if let (true, Some([r, g, b])) = (flags.contains(HighlightStyle::COLOR), color) {
        style = style.truecolor((r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8);
    }
    style
}
