//! Masked decimal entry
//!
//! Field text is typed in Turkish notation: digits with a comma as the
//! decimal separator. Anything else is refused while typing.

use thiserror::Error;

/// Error type for masked entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberParseError {
    #[error("Invalid character '{0}': only digits and ',' are allowed")]
    InvalidCharacter(char),

    #[error("Malformed number: {0}")]
    Malformed(String),
}

/// Parse masked field text.
///
/// Returns `Ok(None)` when the text clears the field (empty or a lone
/// separator). The first comma becomes the decimal point and the longest
/// numeric prefix is taken; text without a numeric prefix yields `0`.
pub fn parse_decimal(raw: &str) -> Result<Option<f64>, NumberParseError> {
    if let Some(bad) = raw.chars().find(|c| !c.is_ascii_digit() && *c != ',') {
        return Err(NumberParseError::InvalidCharacter(bad));
    }

    let standard = raw.replacen(',', ".", 1);
    if standard.is_empty() || standard == "." {
        return Ok(None);
    }

    let prefix = numeric_prefix(&standard);
    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return Ok(Some(0.0));
    }

    let mut literal = String::with_capacity(prefix.len() + 2);
    if prefix.starts_with('.') {
        literal.push('0');
    }
    literal.push_str(prefix.trim_end_matches('.'));

    literal
        .parse::<f64>()
        .map(Some)
        .map_err(|_| NumberParseError::Malformed(raw.to_string()))
}

/// Longest `digits [. digits]` prefix
fn numeric_prefix(s: &str) -> &str {
    let mut seen_dot = false;
    let end = s
        .char_indices()
        .find(|&(_, c)| match c {
            '0'..='9' => false,
            '.' if !seen_dot => {
                seen_dot = true;
                false
            }
            _ => true,
        })
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_decimal("100000"), Ok(Some(100000.0)));
    }

    #[test]
    fn test_comma_is_decimal_point() {
        assert_eq!(parse_decimal("4,5"), Ok(Some(4.5)));
        assert_eq!(parse_decimal("17,5"), Ok(Some(17.5)));
    }

    #[test]
    fn test_empty_and_lone_separator_clear() {
        assert_eq!(parse_decimal(""), Ok(None));
        assert_eq!(parse_decimal(","), Ok(None));
    }

    #[test]
    fn test_trailing_and_leading_separator() {
        assert_eq!(parse_decimal("12,"), Ok(Some(12.0)));
        assert_eq!(parse_decimal(",5"), Ok(Some(0.5)));
    }

    #[test]
    fn test_second_comma_ends_number() {
        assert_eq!(parse_decimal("1,2,3"), Ok(Some(1.2)));
    }

    #[test]
    fn test_no_numeric_prefix_is_zero() {
        assert_eq!(parse_decimal(",,"), Ok(Some(0.0)));
    }

    #[test]
    fn test_rejects_other_characters() {
        assert_eq!(parse_decimal("1.000"), Err(NumberParseError::InvalidCharacter('.')));
        assert_eq!(parse_decimal("-5"), Err(NumberParseError::InvalidCharacter('-')));
        assert_eq!(parse_decimal("12a"), Err(NumberParseError::InvalidCharacter('a')));
    }
}
