//! Property-based tests for inference invariants.

use hd_common::GeneCount;
use hd_config::Priors;
use hd_core::inference::{
    admissible_hypotheses, child_gene_distribution, compute_posterior, joint_probability,
};
use hd_core::pedigree::{Pedigree, PersonRecord};
use proptest::prelude::*;

fn gene_count() -> impl Strategy<Value = GeneCount> {
    prop_oneof![
        Just(GeneCount::Zero),
        Just(GeneCount::One),
        Just(GeneCount::Two),
    ]
}

fn observation() -> impl Strategy<Value = Option<bool>> {
    prop_oneof![Just(None), Just(Some(true)), Just(Some(false))]
}

fn nuclear_family(
    lily: Option<bool>,
    james: Option<bool>,
    harry: Option<bool>,
) -> Pedigree {
    Pedigree::from_records(vec![
        PersonRecord::founder("Lily", lily),
        PersonRecord::founder("James", james),
        PersonRecord::child("Harry", "Lily", "James", harry),
    ])
    .expect("valid family")
}

proptest! {
    /// The three child gene-count outcomes partition the event space for
    /// every parent pair and every mutation rate.
    #[test]
    fn child_distribution_sums_to_one(
        mother in gene_count(),
        father in gene_count(),
        mutation in 0.0f64..=1.0,
    ) {
        let dist = child_gene_distribution(mother, father, mutation);
        for p in dist {
            prop_assert!(p >= 0.0);
        }
        let total: f64 = dist.iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "total {total}");
    }

    /// With strictly positive model tables, every enumerated hypothesis has
    /// strictly positive joint probability.
    #[test]
    fn joint_probability_is_positive(mutation in 0.001f64..0.5) {
        let mut priors = Priors::default();
        priors.mutation = mutation;
        let pedigree = nuclear_family(None, None, None);
        for hypothesis in admissible_hypotheses(&pedigree).unwrap() {
            prop_assert!(joint_probability(&pedigree, &priors, &hypothesis) > 0.0);
        }
    }

    /// Normalization holds for every combination of trait observations.
    #[test]
    fn posteriors_normalize_for_any_observations(
        lily in observation(),
        james in observation(),
        harry in observation(),
    ) {
        let pedigree = nuclear_family(lily, james, harry);
        let table = compute_posterior(&pedigree, &Priors::default()).unwrap();
        for entry in table.iter() {
            let gene_total = entry.gene.zero + entry.gene.one + entry.gene.two;
            let trait_total = entry.trait_.present + entry.trait_.absent;
            prop_assert!((gene_total - 1.0).abs() < 1e-9, "{} gene {gene_total}", entry.name);
            prop_assert!((trait_total - 1.0).abs() < 1e-9, "{} trait {trait_total}", entry.name);
            prop_assert!(entry.gene.zero >= 0.0 && entry.gene.one >= 0.0 && entry.gene.two >= 0.0);
            prop_assert!(entry.trait_.present >= 0.0 && entry.trait_.absent >= 0.0);
        }
    }
}

/// Summing the joint probability over the entire hypothesis space of an
/// evidence-free population yields 1: the model is a proper distribution.
#[test]
fn total_hypothesis_mass_is_one_without_evidence() {
    let solo = Pedigree::from_records(vec![PersonRecord::founder("Solo", None)]).unwrap();
    let couple = Pedigree::from_records(vec![
        PersonRecord::founder("A", None),
        PersonRecord::founder("B", None),
    ])
    .unwrap();
    let family = nuclear_family(None, None, None);

    let priors = Priors::default();
    for pedigree in [&solo, &couple, &family] {
        let total: f64 = admissible_hypotheses(pedigree)
            .unwrap()
            .map(|h| joint_probability(pedigree, &priors, &h))
            .sum();
        assert!(
            (total - 1.0).abs() < 1e-9,
            "total mass {total} for {} people",
            pedigree.len()
        );
    }
}

/// Trait evidence removes mass: the admissible total is strictly below 1
/// and equals the marginal probability of the observed evidence.
#[test]
fn evidence_reduces_total_mass() {
    let priors = Priors::default();
    let unobserved = nuclear_family(None, None, None);
    let observed = nuclear_family(None, None, Some(true));

    let mass = |pedigree: &Pedigree| -> f64 {
        admissible_hypotheses(pedigree)
            .unwrap()
            .map(|h| joint_probability(pedigree, &priors, &h))
            .sum()
    };

    let full = mass(&unobserved);
    let conditioned = mass(&observed);
    assert!(conditioned > 0.0);
    assert!(conditioned < full);
}
