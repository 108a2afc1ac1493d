//! Epsilon-neighborhood coupling
//!
//! Parents are partitioned into epsilon-neighborhoods: a random reference
//! claims every remaining parent its enhanced objectives dominate. Mating
//! pairs are then drawn inside neighborhoods, visiting the neighborhoods
//! round-robin so small regions of the front get as many offspring as
//! crowded ones.
//!
//! Reference: Aguirre, H., Oyama, A., & Tanaka, K. (2013). Adaptive
//! ε-sampling and ε-hood for evolutionary many-objective optimization.
//! EMO 2013.

use rand::Rng;

use crate::coupling::scheduler::RoundRobin;
use crate::coupling::traits::{Coupling, Pair};
use crate::epsilon::adaptation::EpsilonAdaptation;
use crate::epsilon::mapping::{AdditiveEpsilonMapping, EpsilonMapping};
use crate::error::{AesehError, EvoResult};
use crate::fitness::traits::Evaluated;

/// Default target number of neighborhoods
pub const DEFAULT_PLANNED_NEIGHBORHOODS: usize = 5;

/// Coupler drawing mating pairs from epsilon-neighborhoods
#[derive(Clone, Debug)]
pub struct NeighborhoodCoupler<M = AdditiveEpsilonMapping> {
    mapping: M,
    /// Neighborhood count the neighborhood epsilon is steered towards
    pub planned_neighborhood_number: usize,
}

impl NeighborhoodCoupler<AdditiveEpsilonMapping> {
    /// Create a coupler using the additive epsilon mapping
    pub fn new(planned_neighborhood_number: usize) -> Self {
        Self::with_mapping(AdditiveEpsilonMapping, planned_neighborhood_number)
    }
}

impl Default for NeighborhoodCoupler<AdditiveEpsilonMapping> {
    fn default() -> Self {
        Self::new(DEFAULT_PLANNED_NEIGHBORHOODS)
    }
}

impl<M: EpsilonMapping> NeighborhoodCoupler<M> {
    /// Create a coupler using a custom epsilon mapping
    pub fn with_mapping(mapping: M, planned_neighborhood_number: usize) -> Self {
        Self {
            mapping,
            planned_neighborhood_number,
        }
    }

    /// Partition `parents` into epsilon-neighborhoods
    ///
    /// Every parent ends up in exactly one neighborhood; each neighborhood
    /// starts with its reference. Afterwards the neighborhood epsilon is
    /// adapted towards the planned neighborhood count.
    pub fn create_neighborhoods<T: Evaluated, R: Rng>(
        &self,
        population: &[T],
        parents: &[usize],
        adaptation: &mut EpsilonAdaptation,
        rng: &mut R,
    ) -> EvoResult<Vec<Vec<usize>>> {
        let amplitudes = self.mapping.amplitudes(population, parents)?;
        let epsilon = adaptation.neighborhood_epsilon();

        let mut remaining = parents.to_vec();
        let mut neighborhoods = Vec::new();
        while !remaining.is_empty() {
            let reference = remaining.remove(rng.gen_range(0..remaining.len()));
            let enhanced = self.mapping.enhance(
                population[reference].objectives(),
                epsilon,
                &amplitudes,
            );

            let mut neighborhood = vec![reference];
            remaining.retain(|&candidate| {
                if enhanced.dominates(population[candidate].objectives()) {
                    neighborhood.push(candidate);
                    false
                } else {
                    true
                }
            });
            neighborhoods.push(neighborhood);
        }

        let assigned: usize = neighborhoods.iter().map(Vec::len).sum();
        if assigned != parents.len() {
            return Err(AesehError::InvariantViolation(format!(
                "neighborhoods hold {} of {} parents",
                assigned,
                parents.len()
            )));
        }

        log::trace!(
            "{} parents -> {} neighborhoods (planned {})",
            parents.len(),
            neighborhoods.len(),
            self.planned_neighborhood_number
        );
        adaptation
            .adapt_neighborhood_epsilon(neighborhoods.len() > self.planned_neighborhood_number);
        Ok(neighborhoods)
    }

    /// Pick two distinct random members, or a hermit pair for a singleton
    fn pick_couple<R: Rng>(neighborhood: &[usize], rng: &mut R) -> Pair {
        if neighborhood.len() == 1 {
            return Pair::hermit(neighborhood[0]);
        }
        let mut members = neighborhood.to_vec();
        let first = members.remove(rng.gen_range(0..members.len()));
        let second = members.remove(rng.gen_range(0..members.len()));
        Pair::new(first, second)
    }
}

impl<M: EpsilonMapping> Coupling for NeighborhoodCoupler<M> {
    fn couples<T: Evaluated, R: Rng>(
        &self,
        size: usize,
        population: &[T],
        parents: &[usize],
        adaptation: &mut EpsilonAdaptation,
        rng: &mut R,
    ) -> EvoResult<Vec<Pair>> {
        let neighborhoods = self.create_neighborhoods(population, parents, adaptation, rng)?;
        let pairs = RoundRobin::new(&neighborhoods)?
            .take(size)
            .map(|neighborhood| Self::pick_couple(neighborhood, rng))
            .collect();
        Ok(pairs)
    }
}
