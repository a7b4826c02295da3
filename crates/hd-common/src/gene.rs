//! Gene-count domain type.
//!
//! A person carries 0, 1, or 2 copies of the tracked allele. Representing
//! the count as an enum keeps out-of-range counts unrepresentable anywhere
//! downstream of construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of copies of the tracked allele a person carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    /// All counts, in ascending order. Useful for iterating distributions.
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    /// Bucket index into a `[f64; 3]` distribution.
    pub fn index(self) -> usize {
        match self {
            GeneCount::Zero => 0,
            GeneCount::One => 1,
            GeneCount::Two => 2,
        }
    }

    /// Number of copies as an integer.
    pub fn copies(self) -> u8 {
        self.index() as u8
    }

    /// Inverse of [`GeneCount::index`]. Returns `None` outside 0..3.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(GeneCount::Zero),
            1 => Some(GeneCount::One),
            2 => Some(GeneCount::Two),
            _ => None,
        }
    }
}

impl fmt::Display for GeneCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.copies())
    }
}
