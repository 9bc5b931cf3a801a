//! String casing, trimming and substring counting.

pub const EMPTY: &str = "";
pub const SPACE: &str = " ";
pub const NEWLINE: &str = "\n";
pub const TAB: &str = "\t";

/// Convert a string to uppercase.
pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Convert a string to lowercase.
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Remove leading and trailing whitespace.
pub fn strip_whitespace(s: &str) -> &str {
    s.trim()
}

/// Count non-overlapping occurrences of `pat` in `s`.
///
/// An empty pattern matches at every character boundary, so the count is
/// one more than the number of characters.
pub fn count_chars(s: &str, pat: &str) -> usize {
    s.matches(pat).count()
}
