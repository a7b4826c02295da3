//! Heredity core inference engine.
//!
//! Given a family pedigree and a fixed inheritance model (gene-count prior,
//! trait-expression table, mutation rate), computes each person's posterior
//! distribution over gene count and trait presence by exact enumeration of
//! the joint hypothesis space.

pub mod cli;
pub mod inference;
pub mod pedigree;
pub mod report;
