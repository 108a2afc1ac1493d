//! Parent coupling
//!
//! This module turns a parent pool into mating pairs: the epsilon-neighborhood
//! coupler with its round-robin scheduler, and a uniform random baseline.

pub mod neighborhood;
pub mod random;
pub mod scheduler;
pub mod traits;

pub mod prelude {
    pub use super::neighborhood::*;
    pub use super::random::*;
    pub use super::scheduler::*;
    pub use super::traits::*;
}
