//! Configuration validation errors.

use thiserror::Error;

/// Result alias for validation passes.
pub type ValidationResult = Result<(), ValidationError>;

/// Errors raised while loading or validating a priors file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("invalid distribution: {0}")]
    Distribution(String),

    #[error("value out of range: {0}")]
    Range(String),
}

impl From<ValidationError> for hd_common::Error {
    fn from(err: ValidationError) -> Self {
        hd_common::Error::InvalidPriors(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_common_error() {
        let err: hd_common::Error =
            ValidationError::Distribution("gene prior sums to 0.9".to_string()).into();
        assert_eq!(err.code(), 10);
        assert!(err.to_string().contains("gene prior"));
    }
}
