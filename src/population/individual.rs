//! Individual wrapper type
//!
//! This module provides the Individual type that wraps a genome with its
//! evaluated objective values.

use serde::{Deserialize, Serialize};

use crate::fitness::objectives::Objectives;
use crate::fitness::traits::{Evaluated, MultiObjectiveFitness};

/// An evaluated individual
///
/// The objective values are fixed once the individual is built; offspring
/// are new individuals.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Individual<G> {
    /// The genome of this individual
    pub genome: G,
    /// Generation when this individual was created
    pub birth_generation: usize,
    objectives: Objectives,
}

impl<G> Individual<G> {
    /// Create a new individual from a genome and its objective values
    pub fn new(genome: G, objectives: Objectives) -> Self {
        Self {
            genome,
            birth_generation: 0,
            objectives,
        }
    }

    /// Evaluate a genome and wrap it
    pub fn evaluate<F: MultiObjectiveFitness<G>>(genome: G, fitness: &F) -> Self {
        let objectives = fitness.evaluate(&genome);
        Self::new(genome, objectives)
    }

    /// Set the birth generation
    pub fn with_generation(mut self, generation: usize) -> Self {
        self.birth_generation = generation;
        self
    }

    /// Take the genome out of this individual
    pub fn into_genome(self) -> G {
        self.genome
    }

    /// Get a reference to the genome
    pub fn genome(&self) -> &G {
        &self.genome
    }
}

#[cfg(feature = "parallel")]
impl<G: Send + Sync> Evaluated for Individual<G> {
    fn objectives(&self) -> &Objectives {
        &self.objectives
    }
}

#[cfg(not(feature = "parallel"))]
impl<G> Evaluated for Individual<G> {
    fn objectives(&self) -> &Objectives {
        &self.objectives
    }
}
