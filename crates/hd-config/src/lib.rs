//! Heredity configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for the priors JSON file
//! - An embedded default model (CLI `--priors` overrides it)
//! - Semantic validation (distributions sum to 1, rates in range)

pub mod priors;
pub mod validate;

pub use priors::{GenePrior, Priors, TraitClass, TraitTable};
pub use validate::{ValidationError, ValidationResult};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
