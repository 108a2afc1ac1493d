//! Uniform random coupling

use rand::seq::SliceRandom;
use rand::Rng;

use crate::coupling::traits::{Coupling, Pair};
use crate::epsilon::adaptation::EpsilonAdaptation;
use crate::error::{AesehError, EvoResult};
use crate::fitness::traits::Evaluated;

/// Coupler pairing two distinct parents chosen uniformly at random
///
/// Ignores objective values and the epsilon controller.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomCoupler;

impl RandomCoupler {
    /// Create a new random coupler
    pub fn new() -> Self {
        Self
    }
}

impl Coupling for RandomCoupler {
    fn couples<T: Evaluated, R: Rng>(
        &self,
        size: usize,
        _population: &[T],
        parents: &[usize],
        _adaptation: &mut EpsilonAdaptation,
        rng: &mut R,
    ) -> EvoResult<Vec<Pair>> {
        if size == 0 {
            return Ok(vec![]);
        }
        match parents {
            [] => Err(AesehError::EmptyInput(
                "cannot couple an empty parent pool".to_string(),
            )),
            [only] => Ok(vec![Pair::hermit(*only); size]),
            _ => Ok((0..size)
                .map(|_| {
                    let chosen: Vec<usize> = parents.choose_multiple(rng, 2).copied().collect();
                    Pair::new(chosen[0], chosen[1])
                })
                .collect()),
        }
    }
}
