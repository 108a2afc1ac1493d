//! Configuration for an AeSeH run

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::coupling::neighborhood::DEFAULT_PLANNED_NEIGHBORHOODS;
use crate::epsilon::adaptation::{
    AdaptiveEpsilon, EpsilonAdaptation, DEFAULT_DELTA, DEFAULT_DELTA_MAX, DEFAULT_DELTA_MIN,
    DEFAULT_EPSILON, DEFAULT_EPSILON_MIN,
};
use crate::error::{AesehError, EvoResult};

/// Survivor selection strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Non-dominated sorting with adaptive epsilon sampling
    #[default]
    EpsilonSampling,
    /// Non-dominated sorting with crowding-distance truncation
    Crowding,
}

/// Parent coupling strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouplerStrategy {
    /// Round-robin over epsilon-neighborhoods
    #[default]
    Neighborhood,
    /// Uniform random pairs
    Random,
}

/// Configuration for an AeSeH run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AesehConfig {
    /// Initial neighborhood epsilon
    pub neighborhood_epsilon: f64,
    /// Initial sampling epsilon
    pub sampling_epsilon: f64,
    /// Initial adaptation step
    pub delta: f64,
    /// Smallest adaptation step
    pub delta_min: f64,
    /// Largest adaptation step
    pub delta_max: f64,
    /// Lower bound for both epsilons
    pub epsilon_min: f64,
    /// Neighborhood count the neighborhood epsilon is steered towards
    pub planned_neighborhood_number: usize,
    /// Random seed (None for entropy)
    pub seed: Option<u64>,
    /// Survivor selection strategy
    pub selection: SelectionStrategy,
    /// Parent coupling strategy
    pub coupler: CouplerStrategy,
}

impl Default for AesehConfig {
    fn default() -> Self {
        Self {
            neighborhood_epsilon: DEFAULT_EPSILON,
            sampling_epsilon: DEFAULT_EPSILON,
            delta: DEFAULT_DELTA,
            delta_min: DEFAULT_DELTA_MIN,
            delta_max: DEFAULT_DELTA_MAX,
            epsilon_min: DEFAULT_EPSILON_MIN,
            planned_neighborhood_number: DEFAULT_PLANNED_NEIGHBORHOODS,
            seed: None,
            selection: SelectionStrategy::default(),
            coupler: CouplerStrategy::default(),
        }
    }
}

impl AesehConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both initial epsilons
    pub fn with_epsilons(mut self, neighborhood: f64, sampling: f64) -> Self {
        self.neighborhood_epsilon = neighborhood;
        self.sampling_epsilon = sampling;
        self
    }

    /// Set the adaptation step and its bounds
    pub fn with_delta(mut self, delta: f64, delta_min: f64, delta_max: f64) -> Self {
        self.delta = delta;
        self.delta_min = delta_min;
        self.delta_max = delta_max;
        self
    }

    /// Set the lower bound for both epsilons
    pub fn with_epsilon_min(mut self, epsilon_min: f64) -> Self {
        self.epsilon_min = epsilon_min;
        self
    }

    /// Set the planned number of neighborhoods
    pub fn with_planned_neighborhoods(mut self, count: usize) -> Self {
        self.planned_neighborhood_number = count;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the survivor selection strategy
    pub fn with_selection(mut self, selection: SelectionStrategy) -> Self {
        self.selection = selection;
        self
    }

    /// Set the coupling strategy
    pub fn with_coupler(mut self, coupler: CouplerStrategy) -> Self {
        self.coupler = coupler;
        self
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> EvoResult<()> {
        fn positive(name: &str, value: f64) -> EvoResult<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(AesehError::Configuration(format!(
                    "{name} must be positive and finite, got {value}"
                )))
            }
        }

        positive("neighborhood_epsilon", self.neighborhood_epsilon)?;
        positive("sampling_epsilon", self.sampling_epsilon)?;
        positive("delta_min", self.delta_min)?;
        positive("delta_max", self.delta_max)?;
        positive("epsilon_min", self.epsilon_min)?;

        if !(self.delta_min <= self.delta && self.delta <= self.delta_max) {
            return Err(AesehError::Configuration(format!(
                "delta {} must lie in [{}, {}]",
                self.delta, self.delta_min, self.delta_max
            )));
        }
        if self.planned_neighborhood_number == 0 {
            return Err(AesehError::Configuration(
                "planned_neighborhood_number must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the epsilon controller described by this configuration
    ///
    /// Fails with [`AesehError::Configuration`] if the configuration does
    /// not validate.
    pub fn epsilon_adaptation(&self) -> EvoResult<EpsilonAdaptation> {
        self.validate()?;
        let parameter = |initial: f64| {
            AdaptiveEpsilon::new(initial)
                .with_delta(self.delta, self.delta_min, self.delta_max)
                .with_epsilon_min(self.epsilon_min)
        };
        Ok(EpsilonAdaptation::new(
            parameter(self.neighborhood_epsilon),
            parameter(self.sampling_epsilon),
        ))
    }

    /// Create the random source for the run
    ///
    /// Call once per run; re-seeding mid-run breaks reproducibility.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_is_valid() {
        assert!(AesehConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AesehConfig::new()
            .with_epsilons(0.2, 0.3)
            .with_delta(0.01, 0.001, 0.1)
            .with_planned_neighborhoods(8)
            .with_seed(42)
            .with_coupler(CouplerStrategy::Random);

        assert!(config.validate().is_ok());
        let adaptation = config.epsilon_adaptation().unwrap();
        assert_eq!(adaptation.neighborhood_epsilon(), 0.2);
        assert_eq!(adaptation.sampling_epsilon(), 0.3);
        assert_eq!(adaptation.sampling().delta(), 0.01);
        assert_eq!(config.planned_neighborhood_number, 8);
    }

    #[test]
    fn test_invalid_epsilon() {
        let config = AesehConfig::new().with_epsilons(0.0, 0.1);
        assert!(matches!(config.validate(), Err(AesehError::Configuration(_))));

        let config = AesehConfig::new().with_epsilons(0.1, f64::NAN);
        assert!(matches!(config.validate(), Err(AesehError::Configuration(_))));
    }

    #[test]
    fn test_invalid_delta() {
        let config = AesehConfig::new().with_delta(0.5, 0.001, 0.1);
        assert!(matches!(config.validate(), Err(AesehError::Configuration(_))));

        let config = AesehConfig::new().with_delta(0.01, 0.0, 0.1);
        assert!(matches!(config.validate(), Err(AesehError::Configuration(_))));
    }

    #[test]
    fn test_swapped_delta_bounds_rejected() {
        let config = AesehConfig::new().with_delta(0.01, 0.1, 0.001);
        assert!(matches!(
            config.epsilon_adaptation(),
            Err(AesehError::Configuration(_))
        ));

        let config = AesehConfig::new().with_delta(0.01, f64::NAN, 0.1);
        assert!(matches!(
            config.epsilon_adaptation(),
            Err(AesehError::Configuration(_))
        ));
    }

    #[test]
    fn test_zero_epsilon_min_rejected() {
        let config = AesehConfig::new().with_epsilon_min(0.0);
        assert!(matches!(
            config.epsilon_adaptation(),
            Err(AesehError::Configuration(_))
        ));
    }

    #[test]
    fn test_invalid_planned_neighborhoods() {
        let config = AesehConfig::new().with_planned_neighborhoods(0);
        assert!(matches!(config.validate(), Err(AesehError::Configuration(_))));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = AesehConfig::new().with_seed(7);
        let a: Vec<u32> = (0..5).map(|_| config.rng().gen()).collect();
        let mut first = config.rng();
        let mut second = config.rng();
        assert_eq!(first.gen::<u64>(), second.gen::<u64>());
        assert!(a.iter().all(|&v| v == a[0]));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = AesehConfig::new()
            .with_seed(11)
            .with_selection(SelectionStrategy::Crowding);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"crowding\""));

        let parsed: AesehConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let parsed: AesehConfig =
            serde_json::from_str(r#"{"planned_neighborhood_number": 3}"#).unwrap();
        assert_eq!(parsed.planned_neighborhood_number, 3);
        assert_eq!(parsed.sampling_epsilon, DEFAULT_EPSILON);
        assert_eq!(parsed.coupler, CouplerStrategy::Neighborhood);
    }
}
