//! Joint probability of one fully-specified hypothesis.
//!
//! Each person contributes two factors: the probability of their assigned
//! gene count (the unconditional prior for founders, or the transmission
//! model given both parents' assigned counts), and the probability of their
//! trait state given that count. The joint probability is the product of
//! every factor over the whole population.

use hd_common::GeneCount;
use hd_config::Priors;

use super::enumerate::Hypothesis;
use crate::pedigree::Pedigree;

/// Probability that a parent carrying `count` copies transmits the allele,
/// mutation included.
pub fn transmission_probability(count: GeneCount, mutation: f64) -> f64 {
    match count {
        GeneCount::Zero => mutation,
        GeneCount::One => 0.5,
        GeneCount::Two => 1.0 - mutation,
    }
}

/// Distribution over a child's gene count given both parents' counts.
///
/// Indexed by copy number. Sums to 1 for every parent pair and any mutation
/// rate in [0, 1].
pub fn child_gene_distribution(mother: GeneCount, father: GeneCount, mutation: f64) -> [f64; 3] {
    let m = transmission_probability(mother, mutation);
    let f = transmission_probability(father, mutation);
    [
        (1.0 - m) * (1.0 - f),
        m * (1.0 - f) + f * (1.0 - m),
        m * f,
    ]
}

/// P(all gene assignments, all trait assignments) under one hypothesis.
///
/// Parent gene counts are read from the same hypothesis; parents are
/// population members and carry assigned counts in every hypothesis.
pub fn joint_probability(pedigree: &Pedigree, priors: &Priors, hypothesis: &Hypothesis) -> f64 {
    let mut joint = 1.0;
    for (index, person) in pedigree.people().iter().enumerate() {
        let count = hypothesis.gene_count(index);

        let gene_probability = match person.parents() {
            None => priors.gene.probability(count),
            Some(parents) => {
                let mother = hypothesis.gene_count(parents.mother);
                let father = hypothesis.gene_count(parents.father);
                child_gene_distribution(mother, father, priors.mutation)[count.index()]
            }
        };

        let trait_probability = priors
            .trait_given_gene
            .probability(count, hypothesis.has_trait(index));

        joint *= gene_probability * trait_probability;
    }
    joint
}
