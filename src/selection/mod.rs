//! Survivor selection
//!
//! This module provides the epsilon-sampling survivor selection and a
//! crowding-distance baseline behind a common trait.

pub mod crowding;
pub mod survivors;
pub mod traits;

pub mod prelude {
    pub use super::crowding::*;
    pub use super::survivors::*;
    pub use super::traits::*;
}
