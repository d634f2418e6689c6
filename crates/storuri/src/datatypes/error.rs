//! # Storuri Type Coercion Errors
//!
//! Defines error types specific to the type coercion layer: failed value
//! conversions and inconsistently configured suffix tables.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatatypeError {
    /// A parameter value could not be converted to its declared type.
    #[error("Cannot convert value '{value}' to {expected}")]
    ValueConversion {
        value: String,
        expected: &'static str,
    },

    /// A suffix table was constructed with keys of differing lengths.
    /// This is a configuration error at manifest-definition time, not a
    /// runtime input error.
    #[error("All suffix keys must have the same length: {suffixes:?}")]
    SuffixLengthMismatch { suffixes: Vec<String> },
}

impl DatatypeError {
    pub(crate) fn conversion(value: impl Into<String>, expected: &'static str) -> Self {
        DatatypeError::ValueConversion {
            value: value.into(),
            expected,
        }
    }
}
