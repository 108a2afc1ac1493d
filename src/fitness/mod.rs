//! Objectives, fitness evaluation and benchmarks
//!
//! This module provides the objective model, the dominance relation and
//! multi-objective benchmark problems.

pub mod benchmarks;
pub mod objectives;
pub mod traits;

pub mod prelude {
    pub use super::benchmarks::*;
    pub use super::objectives::*;
    pub use super::traits::*;
}
