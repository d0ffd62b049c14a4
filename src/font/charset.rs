//! Character-set selection.
//!
//! The glyph pipeline processes characters in a caller-chosen order with
//! duplicates removed (the first occurrence wins, so the header's width
//! and address tables line up with processing order).

use std::path::Path;

use crate::error::BitsmithError;

/// Default charset when nothing is specified: digits and a colon, enough
/// for clock displays.
pub const DEFAULT_CHARSET: &str = "0123456789:";

/// All printable ASCII, space through tilde.
pub fn ascii_charset() -> Vec<char> {
    (' '..='~').collect()
}

/// Deduplicate a character line, preserving first-occurrence order.
pub fn dedup_chars(line: &str) -> Vec<char> {
    let mut chars = Vec::new();
    for ch in line.chars() {
        if !chars.contains(&ch) {
            chars.push(ch);
        }
    }
    chars
}

/// Read a charset from a file, ignoring line breaks.
pub fn from_file(path: &Path) -> Result<Vec<char>, BitsmithError> {
    let content = std::fs::read_to_string(path)?;
    Ok(dedup_chars(&content.replace('\n', "").replace('\r', "")))
}
