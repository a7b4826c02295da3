//! Heredity common types and errors.
//!
//! This crate provides foundational types shared across hd-core modules:
//! - Gene-count domain type with safety guarantees
//! - Common error types
//! - Output format specifications

pub mod error;
pub mod gene;
pub mod output;

pub use error::{Error, Result};
pub use gene::GeneCount;
pub use output::OutputFormat;
