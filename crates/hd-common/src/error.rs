//! Error types for heredity.

use thiserror::Error;

/// Result type alias for heredity operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for heredity.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("invalid priors file: {0}")]
    InvalidPriors(String),

    // Pedigree errors (20-29)
    #[error("duplicate person {name:?}")]
    DuplicatePerson { name: String },

    #[error("unknown parent {parent:?} recorded for {child:?}")]
    UnknownParent { child: String, parent: String },

    #[error("person {name:?} has only one recorded parent; parents must both be present or both be absent")]
    SingleParent { name: String },

    #[error("unrecognized trait value {value:?} for {name:?}; expected 1, 0, or blank")]
    InvalidTrait { name: String, value: String },

    #[error("parentage cycle involving {name:?}")]
    ParentageCycle { name: String },

    // Inference errors (30-39)
    #[error("population of {count} people exceeds the enumeration limit of {limit}")]
    PopulationTooLarge { count: usize, limit: usize },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used as the process exit code and in machine-readable output.
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidPriors(_) => 10,
            Error::DuplicatePerson { .. } => 20,
            Error::UnknownParent { .. } => 21,
            Error::SingleParent { .. } => 22,
            Error::InvalidTrait { .. } => 23,
            Error::ParentageCycle { .. } => 24,
            Error::PopulationTooLarge { .. } => 30,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
            Error::Csv(_) => 62,
        }
    }
}
