//! Faiz Core - Fundamental types
//!
//! This crate provides the core types used throughout Faiz:
//! - `CalculationKind`: the closed set of supported formulas
//! - `InputRecord`: user-supplied numeric values keyed by field
//! - `FaizError`: structured errors for the calculation boundary

mod error;
mod kind;
mod number;
mod record;

pub use error::{codes, FaizError, Severity};
pub use kind::CalculationKind;
pub use number::{parse_decimal, NumberParseError};
pub use record::InputRecord;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{CalculationKind, FaizError, InputRecord, Severity};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_input_lists_fields() {
        let err = FaizError::incomplete_input(&["time"]);
        assert!(err.is(codes::INCOMPLETE_INPUT));
        assert_eq!(err.fields, vec!["time".to_string()]);
        assert_eq!(err.severity, Severity::Notice);
        assert!(err.to_string().starts_with("[INCOMPLETE_INPUT]"));
    }

    #[test]
    fn test_parse_error_converts() {
        let err: FaizError = NumberParseError::InvalidCharacter('x').into();
        assert!(err.is(codes::INVALID_INPUT));
        assert!(err.message.contains('x'));
    }

    #[test]
    fn test_error_serializes_without_empty_parts() {
        let err = FaizError::unknown_formula("foo");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "UNKNOWN_FORMULA");
        assert!(json.get("fields").is_none());
        assert_eq!(json["severity"], "error");
    }
}
