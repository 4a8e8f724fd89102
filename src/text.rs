//! Text classification helpers for rendering: direction detection and link
//! extraction. Pure functions over `&str`; no state, no markup. The
//! presentation layer decides what to do with the results (e.g. right-align
//! RTL text, wrap link spans in clickable widgets).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));

/// Dominant rendering direction of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

/// Classifies text as RTL if it contains any Arabic-script code point
/// (U+0600..=U+06FF), LTR otherwise. Mixed content favors RTL.
pub fn detect_direction(text: &str) -> Direction {
    if text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c)) {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}

/// A URL occurrence within a larger text.
///
/// `start` and `end` are byte offsets into the original string, with
/// `text == &original[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Finds every `http://` / `https://` URL in `text`, in order of
/// appearance. A URL runs to the next whitespace character.
pub fn extract_links(text: &str) -> Vec<LinkSpan> {
    URL_RE
        .find_iter(text)
        .map(|m| LinkSpan {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}
