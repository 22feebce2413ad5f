//! Text cleanup helpers: HTML stripping, normalization, fallback selection.

use unicode_normalization::UnicodeNormalization;

/// NFC-normalize, drop U+FFFD replacement characters, and trim.
///
/// Upstream content occasionally carries replacement characters from lossy
/// imports; they are removed rather than displayed.
pub fn normalize_text(value: &str) -> String {
    let normalized: String = value.nfc().filter(|c| *c != '\u{FFFD}').collect();
    normalized.trim().to_string()
}

/// Strip HTML tags with a one-pass character scanner.
///
/// `<` enters tag state and is dropped, `>` leaves it and is dropped, and
/// everything outside a tag is kept. Deliberately not a real HTML parser:
/// an unterminated `<` drops the rest of the string. The result is trimmed
/// and normalized.
pub fn strip_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_tag = false;
    for ch in value.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_text(&out)
}

/// First value with non-whitespace content, trimmed. Argument order is the
/// priority order.
pub fn first_non_empty<'a, I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}
