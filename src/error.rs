//! Error types for rule parsing
//!
//! Provides unified error handling using thiserror.
//!
//! The cache deliberately has no error type: a miss (absent or expired key)
//! is an ordinary outcome the caller recovers from by recomputing.

use thiserror::Error;

// == Rule Error Enum ==
/// Unified error type for the rule-set parsers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Both rule-text fields were empty or whitespace-only
    #[error("Rule is empty: at least one of birth/survival must be provided")]
    EmptyInput,

    /// A rule-text field contained a character outside digits/commas/whitespace
    #[error("Invalid character '{found}' in {field} rule: only digits, commas and spaces are allowed")]
    InvalidCharacter {
        /// Which field failed validation ("birth" or "survival")
        field: &'static str,
        /// The offending character
        found: char,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the rule parsers.
pub type Result<T> = std::result::Result<T, RuleError>;
