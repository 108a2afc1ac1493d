//! Objectives and objective values
//!
//! An [`Objective`] names one optimization criterion together with its
//! direction. [`Objectives`] maps each declared objective to the value an
//! individual achieved and provides the Pareto dominance comparison.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Optimization direction of an objective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// Larger values are better
    Max,
    /// Smaller values are better
    Min,
}

/// A named optimization criterion
///
/// Created once when the problem is defined and cloned cheaply into every
/// evaluated individual. Equality is by name and sign.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Objective {
    name: Arc<str>,
    sign: Sign,
}

impl Objective {
    /// Create a new objective
    pub fn new(name: impl Into<Arc<str>>, sign: Sign) -> Self {
        Self {
            name: name.into(),
            sign,
        }
    }

    /// Create an objective to be maximized
    pub fn maximize(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, Sign::Max)
    }

    /// Create an objective to be minimized
    pub fn minimize(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, Sign::Min)
    }

    /// Name of the objective
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optimization direction
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns true if `a` is strictly better than `b` for this objective
    pub fn is_better(&self, a: f64, b: f64) -> bool {
        match self.sign {
            Sign::Max => a > b,
            Sign::Min => a < b,
        }
    }

    /// Returns true if `a` is at least as good as `b` for this objective
    pub fn is_at_least_as_good(&self, a: f64, b: f64) -> bool {
        match self.sign {
            Sign::Max => a >= b,
            Sign::Min => a <= b,
        }
    }

    /// Move `value` by `amount` in the improving direction
    pub fn improve(&self, value: f64, amount: f64) -> f64 {
        match self.sign {
            Sign::Max => value + amount,
            Sign::Min => value - amount,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.sign {
            Sign::Max => "max",
            Sign::Min => "min",
        };
        write!(f, "{}({})", self.name, sign)
    }
}

/// Objective values of one evaluated individual
///
/// Entries keep their insertion order, which is also the order used when
/// iterating objectives (e.g. for extreme detection).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Objectives {
    entries: Vec<(Objective, f64)>,
}

impl Objectives {
    /// Create an empty set of objective values
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set the value of an objective, replacing any previous value
    pub fn add(&mut self, objective: Objective, value: f64) {
        match self.entries.iter_mut().find(|(o, _)| *o == objective) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((objective, value)),
        }
    }

    /// Builder-style variant of [`Objectives::add`]
    pub fn with(mut self, objective: Objective, value: f64) -> Self {
        self.add(objective, value);
        self
    }

    /// Get the value of an objective
    pub fn get(&self, objective: &Objective) -> Option<f64> {
        self.entries
            .iter()
            .find(|(o, _)| o == objective)
            .map(|(_, v)| *v)
    }

    /// Number of objectives
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no objective has been set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(objective, value)` entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Objective, f64)> {
        self.entries.iter().map(|(o, v)| (o, *v))
    }

    /// Iterate over the declared objectives in insertion order
    pub fn objectives(&self) -> impl Iterator<Item = &Objective> {
        self.entries.iter().map(|(o, _)| o)
    }

    /// Check if this set dominates another
    ///
    /// True iff every objective is at least as good (direction-aware) and at
    /// least one is strictly better. An objective missing from `other`
    /// makes the sets incomparable.
    pub fn dominates(&self, other: &Self) -> bool {
        let mut strictly_better = false;
        for (objective, a) in self.iter() {
            let Some(b) = other.get(objective) else {
                return false;
            };
            if !objective.is_at_least_as_good(a, b) {
                return false;
            }
            if objective.is_better(a, b) {
                strictly_better = true;
            }
        }
        strictly_better
    }
}

impl FromIterator<(Objective, f64)> for Objectives {
    fn from_iter<I: IntoIterator<Item = (Objective, f64)>>(iter: I) -> Self {
        let mut objectives = Objectives::new();
        for (objective, value) in iter {
            objectives.add(objective, value);
        }
        objectives
    }
}
