// crates/adpost-core/src/helpers/text.rs
//
// Length limits for the free-text fields. Limits are in characters, not
// bytes, so a title full of Devanagari gets the same 70 slots as ASCII.

pub const TITLE_MAX:       usize = 70;
pub const DESCRIPTION_MAX: usize = 4096;
pub const NAME_MAX:        usize = 30;

/// Truncate `text` to at most `max` characters. Never splits a codepoint.
///
/// ```
/// use adpost_core::helpers::text::clamp_chars;
/// assert_eq!(clamp_chars("hello", 3),  "hel");
/// assert_eq!(clamp_chars("héllo", 2),  "hé");
/// assert_eq!(clamp_chars("hi", 10),    "hi");
/// ```
pub fn clamp_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].to_string(),
        None           => text.to_string(),
    }
}

/// `"<used> / <max>"` counter shown under a text field.
pub fn counter(text: &str, max: usize) -> String {
    format!("{} / {max}", text.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_exact_length_is_identity() {
        let s = "x".repeat(TITLE_MAX);
        assert_eq!(clamp_chars(&s, TITLE_MAX), s);
    }

    #[test]
    fn clamp_zero_is_empty() {
        assert_eq!(clamp_chars("abc", 0), "");
    }

    #[test]
    fn counter_counts_chars() {
        assert_eq!(counter("", NAME_MAX), "0 / 30");
        assert_eq!(counter("ñandú", 70), "5 / 70");
    }
}
