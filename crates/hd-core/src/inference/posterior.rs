//! Posterior accumulation and normalization.
//!
//! Two-phase reduction: an additive accumulator takes one joint probability
//! per hypothesis, then a single normalization pass turns the accumulated
//! mass into per-person distributions. The accumulator is the only mutable
//! state in the computation and is consumed by `finish`.

use hd_common::{GeneCount, Result};
use hd_config::Priors;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::enumerate::{admissible_hypotheses, Hypothesis};
use super::joint::joint_probability;
use crate::pedigree::Pedigree;

/// Posterior distribution over gene count for one person.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneDistribution {
    pub zero: f64,
    pub one: f64,
    pub two: f64,
}

impl GeneDistribution {
    pub fn probability(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }
}

/// Posterior distribution over trait presence for one person.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitDistribution {
    pub present: f64,
    pub absent: f64,
}

/// One person's posterior distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonPosterior {
    pub name: String,
    pub gene: GeneDistribution,
    #[serde(rename = "trait")]
    pub trait_: TraitDistribution,
}

/// Per-person posteriors in pedigree (file) order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosteriorTable {
    entries: Vec<PersonPosterior>,
}

impl PosteriorTable {
    pub fn get(&self, name: &str) -> Option<&PersonPosterior> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersonPosterior> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Additive accumulator for per-person gene and trait mass.
///
/// Starts at zero; `record` only adds. Normalized exactly once by `finish`.
#[derive(Debug, Clone)]
pub struct PosteriorAccumulator {
    gene_mass: Vec<[f64; 3]>,
    trait_mass: Vec<[f64; 2]>,
}

impl PosteriorAccumulator {
    pub fn new(people: usize) -> Self {
        Self {
            gene_mass: vec![[0.0; 3]; people],
            trait_mass: vec![[0.0; 2]; people],
        }
    }

    /// Add one hypothesis's joint probability into the gene bucket and trait
    /// bucket it assigns to each person.
    pub fn record(&mut self, hypothesis: &Hypothesis, p: f64) {
        debug_assert!(p >= 0.0, "joint probability must be non-negative");
        for index in 0..self.gene_mass.len() {
            self.gene_mass[index][hypothesis.gene_count(index).index()] += p;
            let bucket = if hypothesis.has_trait(index) { 0 } else { 1 };
            self.trait_mass[index][bucket] += p;
        }
    }

    /// Accumulated gene-count mass for one person, before normalization.
    pub fn gene_mass(&self, index: usize) -> [f64; 3] {
        self.gene_mass[index]
    }

    /// Accumulated [present, absent] trait mass for one person, before
    /// normalization.
    pub fn trait_mass(&self, index: usize) -> [f64; 2] {
        self.trait_mass[index]
    }

    /// Normalize every accumulated distribution into the final table.
    ///
    /// Panics on zero total mass: every hypothesis contributes to exactly
    /// one gene bucket and one trait bucket per person, so a zero total
    /// means the enumerator or evaluator is broken, not the input.
    pub fn finish(self, pedigree: &Pedigree) -> PosteriorTable {
        let entries = pedigree
            .people()
            .iter()
            .enumerate()
            .map(|(index, person)| {
                let gene = hd_math::normalize(&self.gene_mass[index]).unwrap_or_else(|| {
                    panic!("zero gene mass accumulated for {}", person.name())
                });
                let trait_dist = hd_math::normalize(&self.trait_mass[index]).unwrap_or_else(|| {
                    panic!("zero trait mass accumulated for {}", person.name())
                });
                debug_assert!(hd_math::is_distribution(&gene, 1e-9));
                debug_assert!(hd_math::is_distribution(&trait_dist, 1e-9));
                PersonPosterior {
                    name: person.name().to_string(),
                    gene: GeneDistribution {
                        zero: gene[0],
                        one: gene[1],
                        two: gene[2],
                    },
                    trait_: TraitDistribution {
                        present: trait_dist[0],
                        absent: trait_dist[1],
                    },
                }
            })
            .collect();
        PosteriorTable { entries }
    }
}

/// Exact posterior for every person in the pedigree.
///
/// Enumerates every hypothesis consistent with observed trait evidence,
/// scores each with the joint evaluator, accumulates, and normalizes once.
pub fn compute_posterior(pedigree: &Pedigree, priors: &Priors) -> Result<PosteriorTable> {
    let mut accumulator = PosteriorAccumulator::new(pedigree.len());
    let mut examined: u64 = 0;
    for hypothesis in admissible_hypotheses(pedigree)? {
        let p = joint_probability(pedigree, priors, &hypothesis);
        accumulator.record(&hypothesis, p);
        examined += 1;
    }
    debug!(
        people = pedigree.len(),
        hypotheses = examined,
        "posterior accumulated"
    );
    Ok(accumulator.finish(pedigree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::enumerate::PersonSet;
    use crate::pedigree::PersonRecord;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn accumulator_starts_at_zero_and_only_grows() {
        let mut acc = PosteriorAccumulator::new(2);
        assert_eq!(acc.gene_mass(0), [0.0; 3]);
        assert_eq!(acc.trait_mass(1), [0.0; 2]);

        let hypothesis = Hypothesis {
            one_gene: PersonSet::EMPTY.with(0),
            two_gene: PersonSet::EMPTY.with(1),
            have_trait: PersonSet::EMPTY.with(0),
        };
        acc.record(&hypothesis, 0.25);
        acc.record(&hypothesis, 0.25);

        assert_eq!(acc.gene_mass(0), [0.0, 0.5, 0.0]);
        assert_eq!(acc.gene_mass(1), [0.0, 0.0, 0.5]);
        assert_eq!(acc.trait_mass(0), [0.5, 0.0]);
        assert_eq!(acc.trait_mass(1), [0.0, 0.5]);
    }

    #[test]
    fn single_founder_gene_posterior_equals_the_prior() {
        let pedigree =
            Pedigree::from_records(vec![PersonRecord::founder("Solo", None)]).unwrap();
        let table = compute_posterior(&pedigree, &Priors::default()).unwrap();
        let solo = table.get("Solo").unwrap();
        assert!(approx_eq(solo.gene.zero, 0.96, 1e-12));
        assert!(approx_eq(solo.gene.one, 0.03, 1e-12));
        assert!(approx_eq(solo.gene.two, 0.01, 1e-12));
    }

    #[test]
    fn single_founder_trait_posterior_is_the_prior_weighted_marginal() {
        let pedigree =
            Pedigree::from_records(vec![PersonRecord::founder("Solo", None)]).unwrap();
        let table = compute_posterior(&pedigree, &Priors::default()).unwrap();
        let solo = table.get("Solo").unwrap();
        let expected = 0.96 * 0.01 + 0.03 * 0.56 + 0.01 * 0.65;
        assert!(approx_eq(solo.trait_.present, expected, 1e-12));
        assert!(approx_eq(solo.trait_.absent, 1.0 - expected, 1e-12));
    }

    #[test]
    fn every_normalized_distribution_sums_to_one() {
        let pedigree = Pedigree::from_records(vec![
            PersonRecord::founder("Lily", None),
            PersonRecord::founder("James", Some(true)),
            PersonRecord::child("Harry", "Lily", "James", None),
        ])
        .unwrap();
        let table = compute_posterior(&pedigree, &Priors::default()).unwrap();
        for entry in table.iter() {
            let gene_total = entry.gene.zero + entry.gene.one + entry.gene.two;
            let trait_total = entry.trait_.present + entry.trait_.absent;
            assert!(approx_eq(gene_total, 1.0, 1e-9), "{}", entry.name);
            assert!(approx_eq(trait_total, 1.0, 1e-9), "{}", entry.name);
        }
    }

    #[test]
    fn observed_trait_empties_the_opposite_bucket() {
        let pedigree = Pedigree::from_records(vec![
            PersonRecord::founder("Lily", Some(true)),
            PersonRecord::founder("James", None),
        ])
        .unwrap();
        let priors = Priors::default();
        let lily = pedigree.index_of("Lily").unwrap();

        let mut acc = PosteriorAccumulator::new(pedigree.len());
        for hypothesis in admissible_hypotheses(&pedigree).unwrap() {
            acc.record(&hypothesis, joint_probability(&pedigree, &priors, &hypothesis));
        }
        // Pre-normalization mass in the absent bucket must be exactly zero.
        assert_eq!(acc.trait_mass(lily)[1], 0.0);

        let table = acc.finish(&pedigree);
        assert_eq!(table.get("Lily").unwrap().trait_.absent, 0.0);
    }

    #[test]
    fn empty_pedigree_gives_an_empty_table() {
        let pedigree = Pedigree::from_records(Vec::new()).unwrap();
        let table = compute_posterior(&pedigree, &Priors::default()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn table_serializes_as_an_array() {
        let pedigree =
            Pedigree::from_records(vec![PersonRecord::founder("Solo", Some(true))]).unwrap();
        let table = compute_posterior(&pedigree, &Priors::default()).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["name"], "Solo");
        assert!(json[0]["trait"]["present"].is_number());
    }
}
