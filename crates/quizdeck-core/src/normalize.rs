//! Free-text answer normalization.

/// Apostrophe-family characters dropped outright (not replaced with a space).
const APOSTROPHES: [char; 4] = ['\'', '\u{2019}', '\u{2018}', '`'];

/// Canonicalize a possibly-absent answer for comparison.
///
/// Steps, in order:
/// - trim surrounding whitespace and lowercase
/// - drop apostrophes (`'`, `’`, `‘`, `` ` ``)
/// - drop everything that is not `a-z`, `0-9`, whitespace, `.` or `-`
/// - collapse whitespace runs into a single space, dropping any left at the edges
///
/// Total and idempotent.
pub fn normalize(raw: Option<&str>) -> String {
    let lowered = raw.unwrap_or_default().trim().to_lowercase();

    let kept: String = lowered
        .chars()
        .filter(|c| !APOSTROPHES.contains(c))
        .filter(|c| {
            c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c.is_whitespace()
                || matches!(*c, '.' | '-')
        })
        .collect();

    // Stripping can expose whitespace at the edges ("# ionic"), so start as if
    // a space was just written and drop a trailing one at the end.
    let mut out = String::with_capacity(kept.len());
    let mut in_space = true;
    for c in kept.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Shorthand for [`normalize`] on a present string.
pub fn normalize_str(raw: &str) -> String {
    normalize(Some(raw))
}

/// Whether two free-text answers agree after normalization.
pub fn answers_match(given: &str, expected: &str) -> bool {
    normalize_str(given) == normalize_str(expected)
}
