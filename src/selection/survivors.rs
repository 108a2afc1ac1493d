//! Epsilon-sampling survivor selection
//!
//! Fronts are taken whole while they fit. The first front that does not fit
//! is reduced by epsilon sampling: its extremes always survive, the rest is
//! split into epsilon-dominant representatives and the individuals they
//! cover, and the sampling epsilon is adapted depending on whether the
//! representatives overflowed the remaining slots.
//!
//! Reference: Aguirre, H., Oyama, A., & Tanaka, K. (2013). Adaptive
//! ε-sampling and ε-hood for evolutionary many-objective optimization.
//! EMO 2013.

use crate::epsilon::adaptation::EpsilonAdaptation;
use crate::epsilon::mapping::{AdditiveEpsilonMapping, EpsilonMapping};
use crate::error::{AesehError, EvoResult};
use crate::fitness::objectives::Objectives;
use crate::fitness::traits::Evaluated;
use crate::pareto::{by_crowding_distance, extremes, non_dominated_fronts};
use crate::selection::traits::SurvivorSelection;

/// Result of epsilon sampling a front
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sampling {
    /// Representatives, in the order they were chosen
    pub dominant: Vec<usize>,
    /// Members epsilon-dominated by some representative
    pub dominated: Vec<usize>,
}

/// Survivor selection by non-dominated sorting and adaptive epsilon sampling
#[derive(Clone, Debug, Default)]
pub struct EpsilonSamplingSelection<M = AdditiveEpsilonMapping> {
    mapping: M,
}

impl EpsilonSamplingSelection<AdditiveEpsilonMapping> {
    /// Create a selection using the additive epsilon mapping
    pub fn new() -> Self {
        Self::with_mapping(AdditiveEpsilonMapping)
    }
}

impl<M: EpsilonMapping> EpsilonSamplingSelection<M> {
    /// Create a selection using a custom epsilon mapping
    pub fn with_mapping(mapping: M) -> Self {
        Self { mapping }
    }

    /// Split `front` into epsilon-dominant representatives and the rest
    ///
    /// Candidates are visited in `front` order. A candidate becomes a new
    /// representative unless the enhanced objectives of an existing
    /// representative dominate it. Amplitudes are computed over `front`.
    pub fn apply_epsilon_sampling<T: Evaluated>(
        &self,
        population: &[T],
        front: &[usize],
        epsilon: f64,
    ) -> EvoResult<Sampling> {
        if front.is_empty() {
            return Ok(Sampling::default());
        }

        let amplitudes = self.mapping.amplitudes(population, front)?;
        let mut sampling = Sampling::default();
        let mut enhanced: Vec<Objectives> = Vec::new();

        for &candidate in front {
            let objectives = population[candidate].objectives();
            if enhanced.iter().any(|e| e.dominates(objectives)) {
                sampling.dominated.push(candidate);
            } else {
                enhanced.push(self.mapping.enhance(objectives, epsilon, &amplitudes));
                sampling.dominant.push(candidate);
            }
        }

        Ok(sampling)
    }

    /// Reduce `front` to exactly `target` survivors
    ///
    /// `extremes` (a subset of `front`) are kept first. If extremes plus
    /// representatives exceed `target` the sampling epsilon grows and the
    /// representatives are truncated by descending crowding distance;
    /// otherwise it shrinks and the gap is filled from the covered members,
    /// again by descending crowding distance.
    pub fn add_non_dominated_survivors<T: Evaluated>(
        &self,
        population: &[T],
        extremes: &[usize],
        front: &[usize],
        target: usize,
        adaptation: &mut EpsilonAdaptation,
    ) -> EvoResult<Vec<usize>> {
        if target > front.len() {
            return Err(AesehError::InvalidTargetSize {
                requested: target,
                available: front.len(),
            });
        }

        let rest: Vec<usize> = front
            .iter()
            .copied()
            .filter(|i| !extremes.contains(i))
            .collect();
        let sampling =
            self.apply_epsilon_sampling(population, &rest, adaptation.sampling_epsilon())?;

        let too_many = extremes.len() + sampling.dominant.len() > target;
        adaptation.adapt_sampling_epsilon(too_many);

        let mut survivors: Vec<usize> = extremes.iter().copied().take(target).collect();
        if too_many {
            let open = target - survivors.len();
            survivors.extend(
                by_crowding_distance(population, front, &sampling.dominant)
                    .into_iter()
                    .take(open),
            );
        } else {
            survivors.extend(sampling.dominant.iter().copied());
            let open = target - survivors.len();
            survivors.extend(
                by_crowding_distance(population, front, &sampling.dominated)
                    .into_iter()
                    .take(open),
            );
        }

        log::trace!(
            "sampled front of {}: {} extremes, {} representatives, {} covered -> {} survivors",
            front.len(),
            extremes.len(),
            sampling.dominant.len(),
            sampling.dominated.len(),
            survivors.len()
        );

        if survivors.len() != target {
            return Err(AesehError::InvariantViolation(format!(
                "front sampling produced {} survivors instead of {}",
                survivors.len(),
                target
            )));
        }
        Ok(survivors)
    }
}

impl<M: EpsilonMapping> SurvivorSelection for EpsilonSamplingSelection<M> {
    fn survivors<T: Evaluated>(
        &self,
        population: &[T],
        target: usize,
        adaptation: &mut EpsilonAdaptation,
    ) -> EvoResult<Vec<usize>> {
        if target > population.len() {
            return Err(AesehError::InvalidTargetSize {
                requested: target,
                available: population.len(),
            });
        }
        if target == 0 {
            return Ok(vec![]);
        }

        let mut survivors = Vec::with_capacity(target);
        for front in non_dominated_fronts(population) {
            let open = target - survivors.len();
            if open == 0 {
                break;
            }
            if front.len() <= open {
                survivors.extend(front);
            } else {
                let front_extremes = extremes(population, &front);
                survivors.extend(self.add_non_dominated_survivors(
                    population,
                    &front_extremes,
                    &front,
                    open,
                    adaptation,
                )?);
                break;
            }
        }

        if survivors.len() != target {
            return Err(AesehError::InvariantViolation(format!(
                "selected {} survivors instead of {}",
                survivors.len(),
                target
            )));
        }
        Ok(survivors)
    }
}
