//! Epsilon-dominance mapping
//!
//! Epsilon dominance compares a candidate against an "enhanced" copy of a
//! reference: every objective of the reference is moved in its improving
//! direction by `epsilon * amplitude`, where the amplitude is the spread of
//! that objective over the solutions currently considered.

use crate::error::{AesehError, EvoResult};
use crate::fitness::objectives::{Objective, Objectives};
use crate::fitness::traits::Evaluated;

/// Per-objective value spread (`max - min`) over a set of solutions
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Amplitudes {
    entries: Vec<(Objective, f64)>,
}

impl Amplitudes {
    /// Amplitude of an objective, 0 if it was never observed
    pub fn get(&self, objective: &Objective) -> f64 {
        self.entries
            .iter()
            .find(|(o, _)| o == objective)
            .map(|(_, a)| *a)
            .unwrap_or(0.0)
    }

    /// Number of objectives with a known amplitude
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no amplitude is known
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(objective, amplitude)` entries
    pub fn iter(&self) -> impl Iterator<Item = (&Objective, f64)> {
        self.entries.iter().map(|(o, a)| (o, *a))
    }
}

/// Strategy for building epsilon-enhanced comparison points
pub trait EpsilonMapping {
    /// Compute the amplitude of every objective declared by any member
    ///
    /// Fails with [`AesehError::EmptyInput`] if `members` is empty.
    fn amplitudes<T: Evaluated>(&self, population: &[T], members: &[usize]) -> EvoResult<Amplitudes> {
        if members.is_empty() {
            return Err(AesehError::EmptyInput(
                "cannot compute objective amplitudes of an empty set".to_string(),
            ));
        }

        // (objective, min, max) in order of first appearance
        let mut ranges: Vec<(Objective, f64, f64)> = Vec::new();
        for &i in members {
            for (objective, value) in population[i].objectives().iter() {
                match ranges.iter_mut().find(|(o, _, _)| o == objective) {
                    Some((_, min, max)) => {
                        *min = min.min(value);
                        *max = max.max(value);
                    }
                    None => ranges.push((objective.clone(), value, value)),
                }
            }
        }

        Ok(Amplitudes {
            entries: ranges
                .into_iter()
                .map(|(objective, min, max)| (objective, max - min))
                .collect(),
        })
    }

    /// Build the epsilon-enhanced version of `objectives`
    ///
    /// The result is only a synthetic comparison point.
    fn enhance(&self, objectives: &Objectives, epsilon: f64, amplitudes: &Amplitudes) -> Objectives;

    /// Returns true if `reference`, once enhanced, dominates `candidate`
    fn epsilon_dominates(
        &self,
        reference: &Objectives,
        candidate: &Objectives,
        epsilon: f64,
        amplitudes: &Amplitudes,
    ) -> bool {
        self.enhance(reference, epsilon, amplitudes)
            .dominates(candidate)
    }
}

/// Additive epsilon mapping: `v ± epsilon * amplitude`
#[derive(Clone, Copy, Debug, Default)]
pub struct AdditiveEpsilonMapping;

impl AdditiveEpsilonMapping {
    /// Create a new additive mapping
    pub fn new() -> Self {
        Self
    }
}

impl EpsilonMapping for AdditiveEpsilonMapping {
    fn enhance(&self, objectives: &Objectives, epsilon: f64, amplitudes: &Amplitudes) -> Objectives {
        objectives
            .iter()
            .map(|(objective, value)| {
                let shift = epsilon * amplitudes.get(objective);
                (objective.clone(), objective.improve(value, shift))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(first: f64, second: f64) -> Objectives {
        Objectives::new()
            .with(Objective::maximize("first"), first)
            .with(Objective::maximize("second"), second)
    }

    #[test]
    fn test_amplitudes() {
        let population = vec![point(1.0, 5.0), point(1.1, 3.0), point(3.0, 1.1), point(5.0, 1.0)];
        let amplitudes = AdditiveEpsilonMapping
            .amplitudes(&population, &[0, 1, 2, 3])
            .unwrap();

        assert_eq!(amplitudes.len(), 2);
        assert!((amplitudes.get(&Objective::maximize("first")) - 4.0).abs() < 1e-12);
        assert!((amplitudes.get(&Objective::maximize("second")) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_amplitudes_of_subset() {
        let population = vec![point(0.0, 0.0), point(2.0, 1.0), point(10.0, 10.0)];
        let amplitudes = AdditiveEpsilonMapping
            .amplitudes(&population, &[0, 1])
            .unwrap();

        assert_eq!(amplitudes.get(&Objective::maximize("first")), 2.0);
        assert_eq!(amplitudes.get(&Objective::maximize("second")), 1.0);
    }

    #[test]
    fn test_amplitudes_empty_input() {
        let population = vec![point(0.0, 0.0)];
        let result = AdditiveEpsilonMapping.amplitudes(&population, &[]);
        assert!(matches!(result, Err(AesehError::EmptyInput(_))));
    }

    #[test]
    fn test_single_member_has_zero_amplitude() {
        let population = vec![point(3.0, 4.0)];
        let amplitudes = AdditiveEpsilonMapping.amplitudes(&population, &[0]).unwrap();
        assert_eq!(amplitudes.get(&Objective::maximize("first")), 0.0);
    }

    #[test]
    fn test_enhance_respects_direction() {
        let cost = Objective::minimize("cost");
        let gain = Objective::maximize("gain");
        let population = vec![
            Objectives::new().with(cost.clone(), 0.0).with(gain.clone(), 0.0),
            Objectives::new().with(cost.clone(), 10.0).with(gain.clone(), 2.0),
        ];
        let amplitudes = AdditiveEpsilonMapping.amplitudes(&population, &[0, 1]).unwrap();

        let enhanced = AdditiveEpsilonMapping.enhance(&population[1], 0.1, &amplitudes);

        assert!((enhanced.get(&cost).unwrap() - 9.0).abs() < 1e-12);
        assert!((enhanced.get(&gain).unwrap() - 2.2).abs() < 1e-12);
    }

    #[test]
    fn test_enhance_missing_amplitude_is_zero() {
        let objectives = point(1.0, 2.0);
        let enhanced = AdditiveEpsilonMapping.enhance(&objectives, 0.5, &Amplitudes::default());
        assert_eq!(enhanced, objectives);
    }

    #[test]
    fn test_epsilon_dominates_near_points() {
        let population = vec![point(1.0, 5.0), point(1.1, 3.0), point(5.0, 1.0)];
        let amplitudes = AdditiveEpsilonMapping
            .amplitudes(&population, &[0, 1, 2])
            .unwrap();

        // (1.0, 5.0) shifted by 0.2 covers (1.1, 3.0) but not (5.0, 1.0)
        assert!(AdditiveEpsilonMapping.epsilon_dominates(
            &population[0],
            &population[1],
            0.05,
            &amplitudes
        ));
        assert!(!AdditiveEpsilonMapping.epsilon_dominates(
            &population[0],
            &population[2],
            0.05,
            &amplitudes
        ));
        assert!(!population[0].dominates(&population[1]));
    }
}
