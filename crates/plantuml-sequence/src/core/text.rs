//! Shared text utilities for markup emission
//!
//! Quoting, newline escaping and color directives are applied identically by
//! every builder operation, so they live here rather than in the builder.

/// Escape newline characters as the two-character sequence `\n`
///
/// # Example
/// ```
/// use plantuml_sequence::core::escape_newlines;
///
/// assert_eq!(escape_newlines("two\nlines"), "two\\nlines");
/// ```
pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// Returns true if `text` is non-empty and purely alphanumeric
pub fn is_alphanumeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphanumeric)
}

/// Quote a string unless it is a plain alphanumeric identifier
///
/// Newlines are escaped before the check, so multi-line names always end up
/// quoted.
///
/// # Example
/// ```
/// use plantuml_sequence::core::maybe_quote;
///
/// assert_eq!(maybe_quote("Alice"), "Alice");
/// assert_eq!(maybe_quote("Alice Cooper"), "\"Alice Cooper\"");
/// assert_eq!(maybe_quote(""), "\"\"");
/// ```
pub fn maybe_quote(text: &str) -> String {
    let escaped = escape_newlines(text);
    if is_alphanumeric(&escaped) {
        escaped
    } else {
        format!("\"{}\"", escaped)
    }
}

/// Format an optional color as a trailing ` #color` directive
///
/// Absent or empty colors produce an empty string. A leading `#` supplied by
/// the caller is not doubled.
///
/// # Example
/// ```
/// use plantuml_sequence::core::format_color;
///
/// assert_eq!(format_color(Some("red")), " #red");
/// assert_eq!(format_color(Some("#99FF99")), " #99FF99");
/// assert_eq!(format_color(None), "");
/// ```
pub fn format_color(color: Option<&str>) -> String {
    match color.map(|c| c.strip_prefix('#').unwrap_or(c)) {
        Some(c) if !c.is_empty() => format!(" #{}", c),
        _ => String::new(),
    }
}

/// Derive a default alias by keeping only alphanumeric characters
pub fn alias_from_title(title: &str) -> String {
    title.chars().filter(|c| c.is_alphanumeric()).collect()
}
