//! Fitness traits
//!
//! This module defines how the selection core reads objective values and how
//! multi-objective problems are evaluated.

use crate::fitness::objectives::Objectives;

/// Anything carrying evaluated objective values
///
/// The selection and coupling operators only ever read individuals through
/// this trait. Identity is the position in the slice handed to them.
#[cfg(feature = "parallel")]
pub trait Evaluated: Send + Sync {
    /// The objective values of this individual
    fn objectives(&self) -> &Objectives;
}

/// Anything carrying evaluated objective values
///
/// The selection and coupling operators only ever read individuals through
/// this trait. Identity is the position in the slice handed to them.
#[cfg(not(feature = "parallel"))]
pub trait Evaluated {
    /// The objective values of this individual
    fn objectives(&self) -> &Objectives;
}

impl Evaluated for Objectives {
    fn objectives(&self) -> &Objectives {
        self
    }
}

/// Multi-objective fitness function trait
pub trait MultiObjectiveFitness<G> {
    /// Evaluate all objectives of a genome
    fn evaluate(&self, genome: &G) -> Objectives;
}

/// Implement MultiObjectiveFitness for closures
impl<G, F> MultiObjectiveFitness<G> for F
where
    F: Fn(&G) -> Objectives,
{
    fn evaluate(&self, genome: &G) -> Objectives {
        self(genome)
    }
}
