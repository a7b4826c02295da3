//! Inference engine modules.

pub mod enumerate;
pub mod joint;
pub mod posterior;

pub use enumerate::{
    admissible_hypotheses, subsets, Hypothesis, PersonSet, TraitEvidence, MAX_PEOPLE,
};
pub use joint::{child_gene_distribution, joint_probability, transmission_probability};
pub use posterior::{
    compute_posterior, GeneDistribution, PersonPosterior, PosteriorAccumulator, PosteriorTable,
    TraitDistribution,
};
