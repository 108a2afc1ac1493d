//! Crowding-distance survivor selection
//!
//! The NSGA-II environmental selection: whole fronts while they fit, then the
//! least crowded members of the overflowing front. It never touches the
//! epsilon controller and serves as a baseline for epsilon sampling.

use crate::epsilon::adaptation::EpsilonAdaptation;
use crate::error::{AesehError, EvoResult};
use crate::fitness::traits::Evaluated;
use crate::pareto::{by_crowding_distance, non_dominated_fronts};
use crate::selection::traits::SurvivorSelection;

/// Survivor selection by rank and crowding distance
#[derive(Clone, Copy, Debug, Default)]
pub struct CrowdingSelection;

impl CrowdingSelection {
    /// Create a new crowding selection
    pub fn new() -> Self {
        Self
    }
}

impl SurvivorSelection for CrowdingSelection {
    fn survivors<T: Evaluated>(
        &self,
        population: &[T],
        target: usize,
        _adaptation: &mut EpsilonAdaptation,
    ) -> EvoResult<Vec<usize>> {
        if target > population.len() {
            return Err(AesehError::InvalidTargetSize {
                requested: target,
                available: population.len(),
            });
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
                survivors.extend(
                    by_crowding_distance(population, &front, &front)
                        .into_iter()
                        .take(open),
                );
                break;
            }
        }
        Ok(survivors)
    }
}
