//! AeSeH facade
//!
//! Owns the epsilon controller of one optimization run together with the
//! configured selection and coupling strategies. The surrounding
//! generational loop calls [`Aeseh::lames`] (or [`Aeseh::survivors`]) to
//! shrink the population and [`Aeseh::couples`] to obtain mating pairs.

use rand::Rng;

use crate::config::{AesehConfig, CouplerStrategy, SelectionStrategy};
use crate::coupling::neighborhood::NeighborhoodCoupler;
use crate::coupling::random::RandomCoupler;
use crate::coupling::traits::{Coupling, Pair};
use crate::epsilon::adaptation::EpsilonAdaptation;
use crate::error::{AesehError, EvoResult};
use crate::fitness::traits::Evaluated;
use crate::selection::crowding::CrowdingSelection;
use crate::selection::survivors::EpsilonSamplingSelection;
use crate::selection::traits::SurvivorSelection;

/// Survivor selection chosen at construction time
#[derive(Clone, Debug)]
pub enum Selection {
    /// Adaptive epsilon sampling
    EpsilonSampling(EpsilonSamplingSelection),
    /// Crowding-distance truncation
    Crowding(CrowdingSelection),
}

impl SurvivorSelection for Selection {
    fn survivors<T: Evaluated>(
        &self,
        population: &[T],
        target: usize,
        adaptation: &mut EpsilonAdaptation,
    ) -> EvoResult<Vec<usize>> {
        match self {
            Self::EpsilonSampling(s) => s.survivors(population, target, adaptation),
            Self::Crowding(s) => s.survivors(population, target, adaptation),
        }
    }
}

/// Coupler chosen at construction time
#[derive(Clone, Debug)]
pub enum Coupler {
    /// Round-robin over epsilon-neighborhoods
    Neighborhood(NeighborhoodCoupler),
    /// Uniform random pairs
    Random(RandomCoupler),
}

impl Coupling for Coupler {
    fn couples<T: Evaluated, R: Rng>(
        &self,
        size: usize,
        population: &[T],
        parents: &[usize],
        adaptation: &mut EpsilonAdaptation,
        rng: &mut R,
    ) -> EvoResult<Vec<Pair>> {
        match self {
            Self::Neighborhood(c) => c.couples(size, population, parents, adaptation, rng),
            Self::Random(c) => c.couples(size, population, parents, adaptation, rng),
        }
    }
}

/// Adaptive epsilon-sampling epsilon-hood selection for one run
#[derive(Clone, Debug)]
pub struct Aeseh {
    adaptation: EpsilonAdaptation,
    selection: Selection,
    coupler: Coupler,
}

impl Aeseh {
    /// Create from a configuration
    pub fn new(config: &AesehConfig) -> EvoResult<Self> {
        let adaptation = config.epsilon_adaptation()?;

        let selection = match config.selection {
            SelectionStrategy::EpsilonSampling => {
                Selection::EpsilonSampling(EpsilonSamplingSelection::new())
            }
            SelectionStrategy::Crowding => Selection::Crowding(CrowdingSelection::new()),
        };
        let coupler = match config.coupler {
            CouplerStrategy::Neighborhood => Coupler::Neighborhood(NeighborhoodCoupler::new(
                config.planned_neighborhood_number,
            )),
            CouplerStrategy::Random => Coupler::Random(RandomCoupler::new()),
        };

        log::debug!(
            "AeSeH with {:?} selection, {:?} coupling, epsilons {}/{}",
            config.selection,
            config.coupler,
            config.neighborhood_epsilon,
            config.sampling_epsilon
        );

        Ok(Self {
            adaptation,
            selection,
            coupler,
        })
    }

    /// Current state of the epsilon controller
    pub fn adaptation(&self) -> &EpsilonAdaptation {
        &self.adaptation
    }

    /// Parent pool for coupling: every survivor may become a parent
    pub fn parents<T>(&self, population: &[T]) -> Vec<usize> {
        (0..population.len()).collect()
    }

    /// Select exactly `target` survivors
    pub fn survivors<T: Evaluated>(
        &mut self,
        population: &[T],
        target: usize,
    ) -> EvoResult<Vec<usize>> {
        self.selection
            .survivors(population, target, &mut self.adaptation)
    }

    /// Select the `lambda` individuals to discard
    ///
    /// The complement of `survivors(population, population.len() - lambda)`,
    /// in ascending index order.
    pub fn lames<T: Evaluated>(&mut self, population: &[T], lambda: usize) -> EvoResult<Vec<usize>> {
        let keep = population
            .len()
            .checked_sub(lambda)
            .ok_or(AesehError::InvalidTargetSize {
                requested: lambda,
                available: population.len(),
            })?;

        let mut surviving = vec![false; population.len()];
        for i in self.survivors(population, keep)? {
            surviving[i] = true;
        }
        Ok((0..population.len()).filter(|&i| !surviving[i]).collect())
    }

    /// Produce `size` mating pairs from `parents`
    pub fn couples<T: Evaluated, R: Rng>(
        &mut self,
        size: usize,
        population: &[T],
        parents: &[usize],
        rng: &mut R,
    ) -> EvoResult<Vec<Pair>> {
        self.coupler
            .couples(size, population, parents, &mut self.adaptation, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::objectives::{Objective, Objectives};

    fn point(first: f64, second: f64) -> Objectives {
        Objectives::new()
            .with(Objective::maximize("first"), first)
            .with(Objective::maximize("second"), second)
    }

    fn population() -> Vec<Objectives> {
        vec![
            point(1.0, 5.0),
            point(5.0, 1.0),
            point(1.1, 3.0),
            point(3.0, 1.1),
            point(0.0, 6.0),
            point(6.0, 0.0),
            point(1.0, 1.0),
        ]
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AesehConfig::new().with_planned_neighborhoods(0);
        assert!(matches!(
            Aeseh::new(&config),
            Err(AesehError::Configuration(_))
        ));
    }

    #[test]
    fn test_lames_complement_survivors() {
        let population = population();
        let mut aeseh = Aeseh::new(&AesehConfig::new().with_epsilons(0.1, 0.2)).unwrap();

        let lames = aeseh.lames(&population, 4).unwrap();

        assert_eq!(lames.len(), 4);
        assert!(lames.contains(&6));
        assert!(!lames.contains(&4));
        assert!(!lames.contains(&5));
    }

    #[test]
    fn test_lames_too_many() {
        let population = population();
        let mut aeseh = Aeseh::new(&AesehConfig::default()).unwrap();
        assert!(matches!(
            aeseh.lames(&population, 8),
            Err(AesehError::InvalidTargetSize { .. })
        ));
    }

    #[test]
    fn test_parents_are_all_survivors() {
        let population = population();
        let aeseh = Aeseh::new(&AesehConfig::default()).unwrap();
        assert_eq!(aeseh.parents(&population), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_generation_cycle() {
        let population = population();
        let config = AesehConfig::new().with_seed(5).with_planned_neighborhoods(2);
        let mut rng = config.rng();
        let mut aeseh = Aeseh::new(&config).unwrap();

        let survivors = aeseh.survivors(&population, 5).unwrap();
        let pairs = aeseh.couples(6, &population, &survivors, &mut rng).unwrap();

        assert_eq!(pairs.len(), 6);
        for pair in pairs {
            assert!(survivors.contains(&pair.first));
            assert!(survivors.contains(&pair.second));
        }
        assert_ne!(aeseh.adaptation().neighborhood_epsilon(), config.neighborhood_epsilon);
    }

    #[test]
    fn test_crowding_and_random_strategies() {
        let population = population();
        let config = AesehConfig::new()
            .with_seed(1)
            .with_selection(SelectionStrategy::Crowding)
            .with_coupler(CouplerStrategy::Random);
        let mut rng = config.rng();
        let mut aeseh = Aeseh::new(&config).unwrap();

        let survivors = aeseh.survivors(&population, 3).unwrap();
        assert_eq!(survivors.len(), 3);
        let pairs = aeseh.couples(4, &population, &survivors, &mut rng).unwrap();
        assert_eq!(pairs.len(), 4);
        assert_eq!(aeseh.adaptation(), &config.epsilon_adaptation().unwrap());
    }
}
