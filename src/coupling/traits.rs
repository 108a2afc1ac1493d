//! Coupling trait and pair type

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::epsilon::adaptation::EpsilonAdaptation;
use crate::error::EvoResult;
use crate::fitness::traits::Evaluated;

/// Two parents chosen for crossover, as population indices
///
/// Both indices are equal for a hermit pair (no crossover partner).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// First parent
    pub first: usize,
    /// Second parent
    pub second: usize,
}

impl Pair {
    /// Create a new pair
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Pair an individual with itself
    pub fn hermit(individual: usize) -> Self {
        Self::new(individual, individual)
    }

    /// Returns true if both parents are the same individual
    pub fn is_hermit(&self) -> bool {
        self.first == self.second
    }
}

/// Parent coupling strategy
pub trait Coupling {
    /// Produce exactly `size` pairs drawn from `parents`
    ///
    /// `parents` are indices into `population`. The result may contain the
    /// same pair more than once. Couplers that keep epsilon state adapt it
    /// on every call, including `size == 0`.
    fn couples<T: Evaluated, R: Rng>(
        &self,
        size: usize,
        population: &[T],
        parents: &[usize],
        adaptation: &mut EpsilonAdaptation,
        rng: &mut R,
    ) -> EvoResult<Vec<Pair>>;
}
