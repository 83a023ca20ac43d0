//! Text normalization applied before any analysis.

/// Punctuation that survives normalization.
pub const ALLOWED_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '-', '(', ')'];

fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(&c)
}

/// Replace disallowed characters with spaces, collapse whitespace runs to a
/// single space and trim.
///
/// Replacement happens before collapsing, so `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() || !is_allowed(c) {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }
    out
}
