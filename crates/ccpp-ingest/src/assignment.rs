//! `key = value # comment` splitting.

/// Returns the text to the right of the first `=`, cut at the first `#`.
///
/// The value is not trimmed. A line without `=` yields an empty string.
///
/// ```
/// use ccpp_ingest::assignment_value;
///
/// assert_eq!(assignment_value("  units = K  # kelvin").trim(), "K");
/// assert_eq!(assignment_value("[ccpp-arg-table]"), "");
/// ```
pub fn assignment_value(line: &str) -> &str {
    let Some((_, value)) = line.split_once('=') else {
        return "";
    };
    match value.find('#') {
        Some(index) => &value[..index],
        None => value,
    }
}
