//! Bayesian prior configuration types.
//!
//! The inheritance model is three fixed tables: an unconditional gene-count
//! prior used for founders, a trait-expression table keyed by gene count,
//! and a transmission mutation rate. Loaded once, immutable thereafter, and
//! passed by reference into the evaluator.

use hd_common::GeneCount;
use serde::{Deserialize, Serialize};

use crate::validate::{ValidationError, ValidationResult};

/// Tolerance for "sums to 1" checks on configured distributions.
const DISTRIBUTION_TOLERANCE: f64 = 1e-9;

/// Complete priors configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Priors {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Unconditional gene-count distribution for people with no recorded
    /// parents.
    pub gene: GenePrior,

    /// Trait-expression probabilities keyed by gene count.
    pub trait_given_gene: TraitTable,

    /// Probability a transmitted copy flips state during inheritance.
    pub mutation: f64,
}

/// Unconditional gene-count distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenePrior {
    pub zero: f64,
    pub one: f64,
    pub two: f64,

    #[serde(rename = "_comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl GenePrior {
    pub fn new(zero: f64, one: f64, two: f64) -> Self {
        Self {
            zero,
            one,
            two,
            comment: None,
        }
    }

    /// A prior that puts all mass on a single count. Intended for test
    /// harnesses that need founders pinned to a known gene count.
    pub fn certain(count: GeneCount) -> Self {
        match count {
            GeneCount::Zero => Self::new(1.0, 0.0, 0.0),
            GeneCount::One => Self::new(0.0, 1.0, 0.0),
            GeneCount::Two => Self::new(0.0, 0.0, 1.0),
        }
    }

    /// Prior probability of carrying `count` copies.
    pub fn probability(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }

    fn validate(&self, name: &str) -> ValidationResult {
        validate_distribution(name, &[self.zero, self.one, self.two])
    }
}

/// Trait-expression probabilities for one gene count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitClass {
    pub present: f64,
    pub absent: f64,

    #[serde(rename = "_comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TraitClass {
    pub fn new(present: f64, absent: f64) -> Self {
        Self {
            present,
            absent,
            comment: None,
        }
    }

    /// Probability of the observed trait state.
    pub fn probability(&self, has_trait: bool) -> f64 {
        if has_trait {
            self.present
        } else {
            self.absent
        }
    }
}

/// Trait-expression table keyed by gene count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitTable {
    pub zero: TraitClass,
    pub one: TraitClass,
    pub two: TraitClass,
}

impl TraitTable {
    /// P(trait state | gene count).
    pub fn probability(&self, count: GeneCount, has_trait: bool) -> f64 {
        self.class(count).probability(has_trait)
    }

    fn class(&self, count: GeneCount) -> &TraitClass {
        match count {
            GeneCount::Zero => &self.zero,
            GeneCount::One => &self.one,
            GeneCount::Two => &self.two,
        }
    }

    fn validate(&self) -> ValidationResult {
        for count in GeneCount::ALL {
            let class = self.class(count);
            validate_distribution(
                &format!("trait distribution for {count} gene copies"),
                &[class.present, class.absent],
            )?;
        }
        Ok(())
    }
}

fn validate_distribution(name: &str, values: &[f64]) -> ValidationResult {
    for v in values {
        if !v.is_finite() || *v < 0.0 {
            return Err(ValidationError::Distribution(format!(
                "{name} contains a negative or non-finite entry ({v})"
            )));
        }
    }
    let total: f64 = values.iter().sum();
    if (total - 1.0).abs() > DISTRIBUTION_TOLERANCE {
        return Err(ValidationError::Distribution(format!(
            "{name} sums to {total}, expected 1"
        )));
    }
    Ok(())
}

/// Embedded default priors JSON for fallback.
const DEFAULT_PRIORS_JSON: &str = include_str!("schemas/priors.default.json");

impl Priors {
    /// Load priors from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse_json(&content)
    }

    /// Parse and validate priors from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, ValidationError> {
        let priors: Priors = serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))?;
        priors.validate()?;
        Ok(priors)
    }

    /// Semantic validation: distributions sum to 1, mutation rate in [0, 1).
    pub fn validate(&self) -> ValidationResult {
        self.gene.validate("gene prior")?;
        self.trait_given_gene.validate()?;
        if !self.mutation.is_finite() || !(0.0..1.0).contains(&self.mutation) {
            return Err(ValidationError::Range(format!(
                "mutation rate {} outside [0, 1)",
                self.mutation
            )));
        }
        Ok(())
    }
}

impl Default for Priors {
    fn default() -> Self {
        // The embedded JSON is validated by the parser at first use; a
        // failure here is a build defect, not a runtime condition.
        Self::parse_json(DEFAULT_PRIORS_JSON).expect("embedded default priors JSON is invalid")
    }
}
