// ABOUTME: Pre-parse fix-up for JSON-style unicode escapes embedded in passage HTML.
// ABOUTME: Turns `\u2013` into the character it names before the fragment is parsed.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static UNICODE_ESCAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\u([0-9a-fA-F]{4})").expect("valid unicode escape regex"));

/// Replace every `\uXXXX` sequence with its character.
///
/// Surrogate halves cannot stand alone in a Rust string and become U+FFFD.
pub fn unescape_unicode(s: &str) -> Cow<'_, str> {
    UNICODE_ESCAPE_RE.replace_all(s, |caps: &Captures| {
        u32::from_str_radix(&caps[1], 16)
            .ok()
            .map(|code| char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    })
}
