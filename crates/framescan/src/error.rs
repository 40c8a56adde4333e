//! Error types for framescan operations.
//!
//! Parsing itself never fails: unrecognized lines are skipped. These errors
//! only come from helpers that interpret the extracted text further.

use std::num::ParseIntError;
use thiserror::Error;

/// The error type for framescan operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The line text of a frame could not be converted to a number.
    #[error("Invalid line number '{value}': {source}")]
    InvalidLineNumber {
        /// The decimal text as it appeared in the trace.
        value: String,
        /// The underlying integer parsing error.
        #[source]
        source: ParseIntError,
    },
}

/// A specialized Result type for framescan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses the decimal line text of a frame.
pub(crate) fn parse_line_number(line: Option<&str>) -> Result<Option<u32>> {
    line.map(|value| {
        value
            .parse::<u32>()
            .map_err(|source| Error::InvalidLineNumber {
                value: value.to_string(),
                source,
            })
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_line_is_none() {
        assert_eq!(parse_line_number(None).unwrap(), None);
    }

    #[test]
    fn decimal_line_parses() {
        assert_eq!(parse_line_number(Some("126")).unwrap(), Some(126));
        assert_eq!(parse_line_number(Some("0")).unwrap(), Some(0));
    }

    #[test]
    fn overflowing_line_is_an_error() {
        let err = parse_line_number(Some("99999999999")).unwrap_err();
        assert!(matches!(err, Error::InvalidLineNumber { ref value, .. } if value == "99999999999"));
        assert!(err.to_string().contains("99999999999"));
    }
}
