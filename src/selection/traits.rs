//! Survivor selection trait

use crate::epsilon::adaptation::EpsilonAdaptation;
use crate::error::EvoResult;
use crate::fitness::traits::Evaluated;

/// Survivor selection strategy
///
/// Chooses which individuals of a population make it into the next parent
/// pool.
pub trait SurvivorSelection {
    /// Select exactly `target` distinct individuals
    ///
    /// Returns indices into `population`. Fails with
    /// [`AesehError::InvalidTargetSize`](crate::error::AesehError::InvalidTargetSize)
    /// if `target > population.len()`.
    fn survivors<T: Evaluated>(
        &self,
        population: &[T],
        target: usize,
        adaptation: &mut EpsilonAdaptation,
    ) -> EvoResult<Vec<usize>>;
}
