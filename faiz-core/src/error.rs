//! Structured errors
//!
//! Errors are plain values carrying a machine-readable code, a message and
//! the offending field keys, so any front-end can surface them as a notice.

use crate::NumberParseError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    /// Required fields missing or not finite at dispatch time
    pub const INCOMPLETE_INPUT: &str = "INCOMPLETE_INPUT";
    /// Masked text entry rejected
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    /// Field key not part of the selected formula
    pub const UNKNOWN_FIELD: &str = "UNKNOWN_FIELD";
    /// Unrecognised calculation identifier
    pub const UNKNOWN_FORMULA: &str = "UNKNOWN_FORMULA";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The interaction can continue once the user fixes the input
    Notice,
    /// The request could not be understood at all
    Error,
}

/// Structured error returned at the calculation boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaizError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Field keys the error refers to
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fields: Vec<String>,

    pub severity: Severity,
}

impl FaizError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            fields: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: attach a field key
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }

    // ========== Common Error Constructors ==========

    /// One or more required fields are absent or not a finite number.
    pub fn incomplete_input<S: AsRef<str>>(missing: &[S]) -> Self {
        let names: Vec<String> = missing.iter().map(|s| s.as_ref().to_string()).collect();
        let mut err = Self::new(
            codes::INCOMPLETE_INPUT,
            format!("Missing or non-numeric fields: {}", names.join(", ")),
        )
        .with_suggestion("Lütfen tüm alanları geçerli sayılarla doldurunuz.")
        .with_severity(Severity::Notice);
        err.fields = names;
        err
    }

    pub fn invalid_input(field: &str, details: impl Into<String>) -> Self {
        Self::new(
            codes::INVALID_INPUT,
            format!("Invalid value for '{}': {}", field, details.into()),
        )
        .with_suggestion("Use digits and a comma as decimal separator")
        .with_field(field)
        .with_severity(Severity::Notice)
    }

    pub fn unknown_field(field: &str, formula: &str) -> Self {
        Self::new(
            codes::UNKNOWN_FIELD,
            format!("'{}' is not an input of {}", field, formula),
        )
        .with_field(field)
    }

    pub fn unknown_formula(name: &str) -> Self {
        Self::new(codes::UNKNOWN_FORMULA, format!("Unknown formula: {}", name))
            .with_suggestion("Use list_formulas to see available formulas")
    }
}

impl std::fmt::Display for FaizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for FaizError {}

impl From<NumberParseError> for FaizError {
    fn from(err: NumberParseError) -> Self {
        Self::new(codes::INVALID_INPUT, err.to_string())
            .with_suggestion("Use digits and a comma as decimal separator")
            .with_severity(Severity::Notice)
    }
}
