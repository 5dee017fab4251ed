//! Number formatting for amounts typed and shown with thousands separators

/// Insert `,` every three digits of an unsigned digit string
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole yen with separators, e.g. `-1,234,567`
pub fn format_yen(amount: i64) -> String {
    let grouped = group_thousands(&amount.unsigned_abs().to_string());
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Separators on the integer part, at most two decimals kept (truncated)
///
/// Non-finite values format as an empty string.
pub fn format_with_commas(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let text = value.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac[..frac.len().min(2)]);
    }
    out
}

/// Parse an amount that may contain separators, rounded to two decimals
///
/// Returns `None` for empty or unparseable input.
pub fn parse_formatted_number(value: &str) -> Option<f64> {
    let cleaned: String = value.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    let num: f64 = cleaned.parse().ok()?;
    if !num.is_finite() {
        return None;
    }
    Some((num * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(0), "0");
        assert_eq!(format_yen(999), "999");
        assert_eq!(format_yen(1_000), "1,000");
        assert_eq!(format_yen(51_163_200), "51,163,200");
        assert_eq!(format_yen(-1_234_567), "-1,234,567");
    }

    #[test]
    fn test_format_with_commas() {
        assert_eq!(format_with_commas(30_000_000.0), "30,000,000");
        assert_eq!(format_with_commas(1234.5), "1,234.5");
        assert_eq!(format_with_commas(1234.5678), "1,234.56");
        assert_eq!(format_with_commas(-98765.4), "-98,765.4");
        assert_eq!(format_with_commas(f64::NAN), "");
    }

    #[test]
    fn test_parse_formatted_number() {
        assert_eq!(parse_formatted_number("30,000,000"), Some(30_000_000.0));
        assert_eq!(parse_formatted_number(" 95.5 "), Some(95.5));
        assert_eq!(parse_formatted_number("165.256"), Some(165.26));
        assert_eq!(parse_formatted_number(""), None);
        assert_eq!(parse_formatted_number("abc"), None);
    }
}
