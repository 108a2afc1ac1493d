//! # aeseh-evo
//!
//! Adaptive epsilon-Sampling epsilon-Hood (AeSeH) selection for
//! many-objective evolutionary optimization.
//!
//! With more than a handful of objectives almost every individual is
//! non-dominated, so plain Pareto ranking stops producing selection pressure.
//! AeSeH restores it in two places:
//!
//! - **Survivor selection**: an overflowing non-dominated front is thinned by
//!   epsilon sampling, always keeping the extremes of every objective
//! - **Parent coupling**: parents are grouped into epsilon-neighborhoods and
//!   mating pairs are drawn inside neighborhoods, round-robin
//!
//! Both epsilons adapt every generation towards their targets.
//!
//! Reference: Aguirre, H., Oyama, A., & Tanaka, K. (2013). Adaptive
//! ε-sampling and ε-hood for evolutionary many-objective optimization.
//! EMO 2013.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use aeseh_evo::prelude::*;
//!
//! let config = AesehConfig::new().with_seed(42).with_planned_neighborhoods(8);
//! let mut rng = config.rng();
//! let mut aeseh = Aeseh::new(&config)?;
//!
//! // population: Vec<Individual<Vec<f64>>> evaluated elsewhere
//! let survivors = aeseh.survivors(&population, 100)?;
//! let pairs = aeseh.couples(50, &population, &survivors, &mut rng)?;
//! ```

pub mod aeseh;
pub mod config;
pub mod coupling;
pub mod epsilon;
pub mod error;
pub mod fitness;
pub mod pareto;
pub mod population;
pub mod selection;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aeseh::*;
    pub use crate::config::*;
    pub use crate::coupling::prelude::*;
    pub use crate::epsilon::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::pareto::*;
    pub use crate::population::prelude::*;
    pub use crate::selection::prelude::*;
}
