//! Benchmark fitness functions
//!
//! Standard multi-objective test problems. All objectives are minimized and
//! all decision variables live in `[0, 1]`.

use std::f64::consts::FRAC_PI_2;

use crate::fitness::objectives::{Objective, Objectives};
use crate::fitness::traits::MultiObjectiveFitness;

/// Trait for multi-objective benchmark functions
pub trait MultiObjectiveBenchmark {
    /// Name of the benchmark function
    fn name(&self) -> &'static str;

    /// Number of decision variables
    fn dimension(&self) -> usize;

    /// Declared objectives, in evaluation order
    fn objectives(&self) -> &[Objective];

    /// Search space bounds (min, max)
    fn bounds(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    /// Evaluate the raw objective vector
    fn evaluate_raw(&self, x: &[f64]) -> Vec<f64>;

    /// Evaluate into named objective values
    fn evaluate_objectives(&self, x: &[f64]) -> Objectives {
        self.objectives()
            .iter()
            .cloned()
            .zip(self.evaluate_raw(x))
            .collect()
    }
}

fn minimized_objectives(count: usize) -> Vec<Objective> {
    (0..count)
        .map(|i| Objective::minimize(format!("f{}", i + 1)))
        .collect()
}

/// ZDT1: two objectives with a convex Pareto front `f2 = 1 - sqrt(f1)`
#[derive(Clone, Debug)]
pub struct Zdt1 {
    dimension: usize,
    objectives: Vec<Objective>,
}

impl Zdt1 {
    /// Create a new ZDT1 problem with `dimension` variables (at least 2)
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(2),
            objectives: minimized_objectives(2),
        }
    }
}

impl MultiObjectiveBenchmark for Zdt1 {
    fn name(&self) -> &'static str {
        "ZDT1"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    fn evaluate_raw(&self, x: &[f64]) -> Vec<f64> {
        let f1 = x.first().copied().unwrap_or(0.0);
        let tail = x.get(1..).unwrap_or(&[]);
        let g = if tail.is_empty() {
            1.0
        } else {
            1.0 + 9.0 * tail.iter().sum::<f64>() / tail.len() as f64
        };
        let f2 = g * (1.0 - (f1 / g).sqrt());
        vec![f1, f2]
    }
}

impl MultiObjectiveFitness<Vec<f64>> for Zdt1 {
    fn evaluate(&self, genome: &Vec<f64>) -> Objectives {
        self.evaluate_objectives(genome)
    }
}

/// DTLZ2: scalable number of objectives, spherical Pareto front
///
/// Pareto-optimal solutions satisfy `Σ fᵢ² = 1`.
#[derive(Clone, Debug)]
pub struct Dtlz2 {
    dimension: usize,
    objectives: Vec<Objective>,
}

impl Dtlz2 {
    /// Create a DTLZ2 problem with `num_objectives` objectives and the
    /// recommended `k = 10` distance variables
    pub fn new(num_objectives: usize) -> Self {
        Self::with_distance_variables(num_objectives, 10)
    }

    /// Create a DTLZ2 problem with an explicit number of distance variables
    pub fn with_distance_variables(num_objectives: usize, k: usize) -> Self {
        let m = num_objectives.max(2);
        Self {
            dimension: m - 1 + k.max(1),
            objectives: minimized_objectives(m),
        }
    }
}

impl MultiObjectiveBenchmark for Dtlz2 {
    fn name(&self) -> &'static str {
        "DTLZ2"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    fn evaluate_raw(&self, x: &[f64]) -> Vec<f64> {
        let m = self.objectives.len();
        // missing position variables count as 0
        let position = |i: usize| x.get(i).copied().unwrap_or(0.0);
        let g: f64 = x
            .get(m - 1..)
            .unwrap_or(&[])
            .iter()
            .map(|xi| (xi - 0.5).powi(2))
            .sum();

        (0..m)
            .map(|j| {
                let mut f = 1.0 + g;
                for i in 0..m - 1 - j {
                    f *= (position(i) * FRAC_PI_2).cos();
                }
                if j > 0 {
                    f *= (position(m - 1 - j) * FRAC_PI_2).sin();
                }
                f
            })
            .collect()
    }
}

impl MultiObjectiveFitness<Vec<f64>> for Dtlz2 {
    fn evaluate(&self, genome: &Vec<f64>) -> Objectives {
        self.evaluate_objectives(genome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zdt1_pareto_optimal_point() {
        let zdt1 = Zdt1::new(5);
        let f = zdt1.evaluate_raw(&[0.25, 0.0, 0.0, 0.0, 0.0]);
        assert!((f[0] - 0.25).abs() < 1e-12);
        assert!((f[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zdt1_short_inputs() {
        let zdt1 = Zdt1::new(2);

        let f = zdt1.evaluate_raw(&[0.25]);
        assert!((f[0] - 0.25).abs() < 1e-12);
        assert!((f[1] - 0.5).abs() < 1e-12);

        let f = zdt1.evaluate_raw(&[]);
        assert_eq!(f, vec![0.0, 1.0]);
    }

    #[test]
    fn test_dtlz2_short_inputs() {
        let dtlz2 = Dtlz2::new(4);

        let f = dtlz2.evaluate_raw(&[0.5]);
        assert_eq!(f.len(), 4);
        assert!(f.iter().all(|v| v.is_finite()));

        let f = dtlz2.evaluate_raw(&[]);
        assert_eq!(f.len(), 4);
        assert!((f[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_dtlz2_on_unit_sphere() {
        let dtlz2 = Dtlz2::new(4);
        let mut x = vec![0.5; dtlz2.dimension()];
        x[0] = 0.3;
        x[1] = 0.8;
        x[2] = 0.1;

        let f = dtlz2.evaluate_raw(&x);
        assert_eq!(f.len(), 4);
        let norm: f64 = f.iter().map(|v| v * v).sum();
        assert!((norm - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_named_objectives() {
        let dtlz2 = Dtlz2::new(3);
        let x = vec![0.5; dtlz2.dimension()];
        let objectives = dtlz2.evaluate(&x);

        assert_eq!(objectives.len(), 3);
        assert!(objectives.get(&Objective::minimize("f3")).is_some());
        assert_eq!(dtlz2.name(), "DTLZ2");
        assert_eq!(dtlz2.bounds(), (0.0, 1.0));
    }
}
