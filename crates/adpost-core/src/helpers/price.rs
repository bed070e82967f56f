// crates/adpost-core/src/helpers/price.rs
//
// Price field normalisation. The input box keeps a display string with
// thousands separators; the payload carries the bare integer.

/// Strip every non-digit and regroup the digits in threes with commas.
///
/// Leading zeros are kept — the field echoes what was typed, it does not
/// canonicalise.
///
/// ```
/// use adpost_core::helpers::price::format_price;
/// assert_eq!(format_price("145446"),     "145,446");
/// assert_eq!(format_price("₹ 1,45,446"), "145,446");
/// assert_eq!(format_price("12ab3"),      "123");
/// assert_eq!(format_price(""),           "");
/// ```
pub fn format_price(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*d);
    }
    out
}

/// Numeric value of a formatted price. Empty input is zero; a value too large
/// for `u64` saturates rather than failing the whole submission.
///
/// ```
/// use adpost_core::helpers::price::parse_price;
/// assert_eq!(parse_price("145,446"), 145_446);
/// assert_eq!(parse_price(""),        0);
/// ```
pub fn parse_price(formatted: &str) -> u64 {
    formatted
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_from_the_right() {
        assert_eq!(format_price("1"),       "1");
        assert_eq!(format_price("1234"),    "1,234");
        assert_eq!(format_price("1234567"), "1,234,567");
    }

    #[test]
    fn reformatting_is_stable() {
        let once = format_price("9876543");
        assert_eq!(format_price(&once), once);
    }

    #[test]
    fn leading_zeros_survive_formatting() {
        assert_eq!(format_price("0071"), "0,071");
        assert_eq!(parse_price("0,071"), 71);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(parse_price("99999999999999999999999"), u64::MAX);
    }
}
