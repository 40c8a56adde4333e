//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

/// Validate a frame limit: a positive integer.
pub fn validate_limit(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let limit: usize = s
        .parse()
        .map_err(|_| format!("Invalid limit '{s}'. Expected a positive integer"))?;

    if limit == 0 {
        return Err("Limit must be at least 1".to_string());
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("25", 25)]
    #[case(" 7 ", 7)]
    fn accepts_positive_integers(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(validate_limit(input), Ok(expected));
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("ten")]
    #[case("")]
    fn rejects_everything_else(#[case] input: &str) {
        assert!(validate_limit(input).is_err());
    }
}
