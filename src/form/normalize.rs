/// Path fragment that marks a URL as already pointing at a robots file
pub const ROBOTS_MARKER: &str = "/robots.txt";

/// Completes a bare site URL so it points at its robots.txt
///
/// The input is trimmed. A non-empty value that does not already contain
/// `/robots.txt` gets it appended, reusing a trailing `/` if there is one.
/// Everything else is returned trimmed and otherwise untouched.
///
/// # Examples
///
/// ```
/// use robots_checker::normalize_robots_url;
///
/// assert_eq!(normalize_robots_url("https://example.com"), "https://example.com/robots.txt");
/// assert_eq!(normalize_robots_url("https://example.com/"), "https://example.com/robots.txt");
/// assert_eq!(normalize_robots_url("  "), "");
/// ```
pub fn normalize_robots_url(input: &str) -> String {
    let url = input.trim();

    if url.is_empty() || url.contains(ROBOTS_MARKER) {
        return url.to_string();
    }

    if url.ends_with('/') {
        format!("{}robots.txt", url)
    } else {
        format!("{}{}", url, ROBOTS_MARKER)
    }
}
