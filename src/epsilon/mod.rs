//! Epsilon dominance and its adaptive control
//!
//! - **Mapping**: builds epsilon-enhanced comparison points scaled by
//!   per-objective amplitudes
//! - **Adaptation**: the feedback controller for the sampling and
//!   neighborhood epsilons

pub mod adaptation;
pub mod mapping;

pub mod prelude {
    pub use super::adaptation::*;
    pub use super::mapping::*;
}
