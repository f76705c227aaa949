//! Comment stripping
//!
//! A single combined regex removes `//` and `#` line comments and `/* */`
//! block comments regardless of the host language. It does not understand
//! quoting, so a `#` inside a string or the `//` in a URL also starts a
//! "comment". Whatever follows is dropped and can no longer match.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Line comments stop before the newline; block comments may span lines.
static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)//.*?$|/\*.*?\*/|#.*?$").unwrap());

/// Remove comments from `text`.
///
/// Newlines are never removed. A multi-line block comment is replaced by the
/// newlines it spanned, so line numbers in the result match the input.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    COMMENT_RE.replace_all(text, |caps: &Captures| {
        caps[0].chars().filter(|&c| c == '\n').collect::<String>()
    })
}
