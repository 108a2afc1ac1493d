//! Population members
//!
//! This module provides the Individual type.

pub mod individual;

pub mod prelude {
    pub use super::individual::*;
}
