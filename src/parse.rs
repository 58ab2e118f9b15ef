//! Numeric input parsing.
//!
//! This is the sole validation gate between free-form user text and the
//! trace generators: tokens are split on any run of characters that cannot
//! appear in a number, and the whole input is rejected (empty result) if a
//! single token fails to parse to a finite value.

/// Parse free-form text into a list of finite numbers.
///
/// Splits on any run of characters outside `[-0-9.]`, so `"8, 3; 1 6|4"`
/// and `"8 3 1 6 4"` parse identically. All-or-nothing: if any token fails
/// to parse, or parses to a non-finite value, the result is empty —
/// callers treat an empty list as "invalid input".
#[must_use]
pub fn parse_numbers(text: &str) -> Vec<f64> {
    let mut nums = Vec::new();
    let tokens = text
        .split(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .filter(|t| !t.is_empty());

    for token in tokens {
        match token.parse::<f64>() {
            Ok(n) if n.is_finite() => nums.push(n),
            _ => return Vec::new(),
        }
    }
    nums
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        assert_eq!(parse_numbers("8, 3, 1, 6, 4"), vec![8.0, 3.0, 1.0, 6.0, 4.0]);
    }

    #[test]
    fn test_arbitrary_separators() {
        assert_eq!(parse_numbers("8; 3|1\t6   4"), vec![8.0, 3.0, 1.0, 6.0, 4.0]);
    }

    #[test]
    fn test_negative_and_decimal() {
        assert_eq!(parse_numbers("-2.5, 0, 3.25"), vec![-2.5, 0.0, 3.25]);
    }

    #[test]
    fn test_invalid_token_rejects_whole_input() {
        // "1.2.3" is a single token that does not parse.
        assert!(parse_numbers("1, 1.2.3, 4").is_empty());
        assert!(parse_numbers("5, --2").is_empty());
    }

    #[test]
    fn test_empty_and_separator_only() {
        assert!(parse_numbers("").is_empty());
        assert!(parse_numbers(", ; |").is_empty());
    }

    #[test]
    fn test_single_number() {
        assert_eq!(parse_numbers("42"), vec![42.0]);
    }
}
