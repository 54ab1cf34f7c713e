// src/callsign/scanner.rs  —  Locate call-sign-shaped tokens in free text
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Same shape as the parser pattern, but the token must be followed by
/// whitespace. The whitespace is consumed by the match so the next search
/// starts after it, but it is not part of the token span.
static SEARCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z0-9]{1,3}[0-9][A-Z]{1,3}(?:/[0-9])?)\s")
        .expect("search pattern is valid")
});

/// A candidate call sign and its byte span in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallsignToken<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

/// All candidate tokens in `text`, left to right, non-overlapping.
///
/// Spans refer to `text` as given; nothing is rewritten while scanning.
/// A token at the very end of `text` without trailing whitespace is not a
/// candidate.
pub fn scan(text: &str) -> Vec<CallsignToken<'_>> {
    SEARCH
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| CallsignToken { text: m.as_str(), span: m.range() })
        .collect()
}
