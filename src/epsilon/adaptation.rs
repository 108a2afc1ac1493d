//! Adaptive epsilon control
//!
//! Both AeSeH epsilons follow the same feedback rule: when the previous round
//! produced too many elements the epsilon was too small and grows, otherwise
//! it shrinks. The step size itself doubles while the feedback keeps pointing
//! the same way and halves when it flips, so the controller first moves
//! quickly and then settles around the target.

use serde::{Deserialize, Serialize};

use crate::error::AesehError;

/// Default initial epsilon
pub const DEFAULT_EPSILON: f64 = 0.01;
/// Default initial step
pub const DEFAULT_DELTA: f64 = 0.005;
/// Default smallest step
pub const DEFAULT_DELTA_MIN: f64 = 0.0001;
/// Default largest step
pub const DEFAULT_DELTA_MAX: f64 = 0.05;
/// Default lower bound for the epsilon itself
pub const DEFAULT_EPSILON_MIN: f64 = 1e-6;

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

/// One self-adjusting epsilon parameter
///
/// The epsilon never drops below `epsilon_min`, which is always strictly
/// positive. Deserialized state is checked for the same bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AdaptiveEpsilonState")]
pub struct AdaptiveEpsilon {
    epsilon: f64,
    delta: f64,
    delta_min: f64,
    delta_max: f64,
    epsilon_min: f64,
    last_too_many: Option<bool>,
}

impl AdaptiveEpsilon {
    /// Create a new adaptive epsilon with default step parameters
    pub fn new(initial: f64) -> Self {
        Self {
            epsilon: positive_or(initial, DEFAULT_EPSILON_MIN).max(DEFAULT_EPSILON_MIN),
            delta: DEFAULT_DELTA,
            delta_min: DEFAULT_DELTA_MIN,
            delta_max: DEFAULT_DELTA_MAX,
            epsilon_min: DEFAULT_EPSILON_MIN,
            last_too_many: None,
        }
    }

    /// Set the initial step and its bounds
    ///
    /// Non-positive or non-finite bounds fall back to the defaults, swapped
    /// bounds are reordered and the step is kept inside them.
    pub fn with_delta(mut self, delta: f64, delta_min: f64, delta_max: f64) -> Self {
        let low = positive_or(delta_min, DEFAULT_DELTA_MIN);
        let high = positive_or(delta_max, DEFAULT_DELTA_MAX);
        let (low, high) = if low <= high { (low, high) } else { (high, low) };

        self.delta_min = low;
        self.delta_max = high;
        self.delta = positive_or(delta, low).max(low).min(high);
        self
    }

    /// Set the lower bound of the epsilon
    ///
    /// A non-positive or non-finite bound falls back to
    /// [`DEFAULT_EPSILON_MIN`].
    pub fn with_epsilon_min(mut self, epsilon_min: f64) -> Self {
        self.epsilon_min = positive_or(epsilon_min, DEFAULT_EPSILON_MIN);
        self.epsilon = self.epsilon.max(self.epsilon_min);
        self
    }

    /// Current epsilon
    pub fn value(&self) -> f64 {
        self.epsilon
    }

    /// Current step size
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Step size bounds (min, max)
    pub fn delta_bounds(&self) -> (f64, f64) {
        (self.delta_min, self.delta_max)
    }

    /// Lower bound of the epsilon
    pub fn epsilon_min(&self) -> f64 {
        self.epsilon_min
    }

    /// Returns true if the epsilon sits at its lower bound
    pub fn at_floor(&self) -> bool {
        self.epsilon <= self.epsilon_min
    }

    /// Move the epsilon one step
    ///
    /// `too_many` increases the epsilon, otherwise it decreases down to
    /// `epsilon_min`.
    pub fn adapt(&mut self, too_many: bool) {
        if too_many {
            self.epsilon += self.delta;
        } else {
            self.epsilon = (self.epsilon - self.delta).max(self.epsilon_min);
        }

        self.delta = match self.last_too_many {
            Some(previous) if previous == too_many => (self.delta * 2.0).min(self.delta_max),
            Some(_) => (self.delta / 2.0).max(self.delta_min),
            None => self.delta,
        };
        self.last_too_many = Some(too_many);
    }
}

/// Serialized form of [`AdaptiveEpsilon`], checked on the way in
#[derive(Deserialize)]
struct AdaptiveEpsilonState {
    epsilon: f64,
    delta: f64,
    delta_min: f64,
    delta_max: f64,
    epsilon_min: f64,
    #[serde(default)]
    last_too_many: Option<bool>,
}

impl TryFrom<AdaptiveEpsilonState> for AdaptiveEpsilon {
    type Error = AesehError;

    fn try_from(state: AdaptiveEpsilonState) -> Result<Self, Self::Error> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(AesehError::Configuration(format!(
                    "{name} must be positive and finite, got {value}"
                )))
            }
        };
        positive("epsilon", state.epsilon)?;
        positive("delta", state.delta)?;
        positive("delta_min", state.delta_min)?;
        positive("delta_max", state.delta_max)?;
        positive("epsilon_min", state.epsilon_min)?;

        if !(state.delta_min <= state.delta && state.delta <= state.delta_max) {
            return Err(AesehError::Configuration(format!(
                "delta {} must lie in [{}, {}]",
                state.delta, state.delta_min, state.delta_max
            )));
        }
        if state.epsilon < state.epsilon_min {
            return Err(AesehError::Configuration(format!(
                "epsilon {} is below its lower bound {}",
                state.epsilon, state.epsilon_min
            )));
        }

        Ok(Self {
            epsilon: state.epsilon,
            delta: state.delta,
            delta_min: state.delta_min,
            delta_max: state.delta_max,
            epsilon_min: state.epsilon_min,
            last_too_many: state.last_too_many,
        })
    }
}

impl Default for AdaptiveEpsilon {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

/// The two epsilons of one AeSeH run
///
/// One instance lives for the whole optimization run and is handed by
/// `&mut` to the survivor selection and the coupler every generation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EpsilonAdaptation {
    neighborhood: AdaptiveEpsilon,
    sampling: AdaptiveEpsilon,
}

impl EpsilonAdaptation {
    /// Create from the two adaptive parameters
    pub fn new(neighborhood: AdaptiveEpsilon, sampling: AdaptiveEpsilon) -> Self {
        Self {
            neighborhood,
            sampling,
        }
    }

    /// Epsilon used to build neighborhoods
    pub fn neighborhood_epsilon(&self) -> f64 {
        self.neighborhood.value()
    }

    /// Epsilon used for front sampling
    pub fn sampling_epsilon(&self) -> f64 {
        self.sampling.value()
    }

    /// The neighborhood parameter
    pub fn neighborhood(&self) -> &AdaptiveEpsilon {
        &self.neighborhood
    }

    /// The sampling parameter
    pub fn sampling(&self) -> &AdaptiveEpsilon {
        &self.sampling
    }

    /// Feedback from neighborhood creation
    ///
    /// `too_many` means more neighborhoods than planned were created.
    pub fn adapt_neighborhood_epsilon(&mut self, too_many: bool) {
        adapt_logged(&mut self.neighborhood, too_many, "neighborhood");
    }

    /// Feedback from epsilon sampling
    ///
    /// `too_many` means more epsilon-dominant representatives than survivor
    /// slots were found.
    pub fn adapt_sampling_epsilon(&mut self, too_many: bool) {
        adapt_logged(&mut self.sampling, too_many, "sampling");
    }
}

fn adapt_logged(parameter: &mut AdaptiveEpsilon, too_many: bool, label: &str) {
    let before = parameter.value();
    let was_at_floor = parameter.at_floor();
    parameter.adapt(too_many);
    log::debug!(
        "{} epsilon {:.6} -> {:.6} (too many: {}, next step {:.6})",
        label,
        before,
        parameter.value(),
        too_many,
        parameter.delta()
    );
    if parameter.at_floor() && !was_at_floor {
        log::warn!(
            "{} epsilon reached its lower bound {:e}",
            label,
            parameter.epsilon_min
        );
    }
}
