//! End-to-end generational runs on DTLZ2 and ZDT1
//!
//! Drives the AeSeH facade the way an optimizer would: couple parents,
//! vary them, merge parents and offspring, then shrink back to size.

use aeseh_evo::prelude::*;
use rand::Rng;

const POPULATION_SIZE: usize = 24;
const GENERATIONS: usize = 15;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn offspring<P: MultiObjectiveFitness<Vec<f64>>, R: Rng>(
    problem: &P,
    population: &[Individual<Vec<f64>>],
    pair: Pair,
    generation: usize,
    rng: &mut R,
) -> Individual<Vec<f64>> {
    let first = population[pair.first].genome();
    let second = population[pair.second].genome();
    let genome: Vec<f64> = first
        .iter()
        .zip(second)
        .map(|(a, b)| {
            let t: f64 = rng.gen();
            let child = a + t * (b - a) + rng.gen_range(-0.05..0.05);
            child.clamp(0.0, 1.0)
        })
        .collect();
    Individual::evaluate(genome, problem).with_generation(generation)
}

fn run<P>(config: &AesehConfig, problem: &P) -> Vec<Individual<Vec<f64>>>
where
    P: MultiObjectiveBenchmark + MultiObjectiveFitness<Vec<f64>>,
{
    let mut rng = config.rng();
    let mut aeseh = Aeseh::new(config).unwrap();

    let mut population: Vec<Individual<Vec<f64>>> = (0..POPULATION_SIZE)
        .map(|_| {
            let genome: Vec<f64> = (0..problem.dimension()).map(|_| rng.gen()).collect();
            Individual::evaluate(genome, problem)
        })
        .collect();

    for generation in 1..=GENERATIONS {
        let parents = aeseh.parents(&population);
        let pairs = aeseh
            .couples(POPULATION_SIZE, &population, &parents, &mut rng)
            .unwrap();
        assert_eq!(pairs.len(), POPULATION_SIZE);

        let children: Vec<_> = pairs
            .into_iter()
            .map(|pair| offspring(problem, &population, pair, generation, &mut rng))
            .collect();
        population.extend(children);
        assert_eq!(population.len(), 2 * POPULATION_SIZE);

        let lames = aeseh.lames(&population, POPULATION_SIZE).unwrap();
        assert_eq!(lames.len(), POPULATION_SIZE);
        for &i in lames.iter().rev() {
            population.swap_remove(i);
        }
        assert_eq!(population.len(), POPULATION_SIZE);

        assert!(aeseh.adaptation().neighborhood_epsilon() > 0.0);
        assert!(aeseh.adaptation().sampling_epsilon() > 0.0);
    }

    population
}

#[test]
fn test_dtlz2_run_keeps_population_size() {
    init_logging();
    let problem = Dtlz2::new(5);
    let config = AesehConfig::new().with_seed(42).with_planned_neighborhoods(4);

    let population = run(&config, &problem);

    assert_eq!(population.len(), POPULATION_SIZE);
    for individual in &population {
        assert_eq!(individual.objectives().len(), 5);
        assert!(individual.genome().iter().all(|x| (0.0..=1.0).contains(x)));
    }
    assert!(population.iter().any(|i| i.birth_generation > 0));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    init_logging();
    let problem = Dtlz2::with_distance_variables(4, 5);
    let config = AesehConfig::new().with_seed(7);

    let first: Vec<Vec<f64>> = run(&config, &problem)
        .into_iter()
        .map(Individual::into_genome)
        .collect();
    let second: Vec<Vec<f64>> = run(&config, &problem)
        .into_iter()
        .map(Individual::into_genome)
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_baseline_strategies_run() {
    init_logging();
    let problem = Dtlz2::new(3);
    let config = AesehConfig::new()
        .with_seed(3)
        .with_selection(SelectionStrategy::Crowding)
        .with_coupler(CouplerStrategy::Random);

    let population = run(&config, &problem);

    assert_eq!(population.len(), POPULATION_SIZE);
}

#[test]
fn test_zdt1_run_keeps_population_size() {
    init_logging();
    let problem = Zdt1::new(6);
    let config = AesehConfig::new().with_seed(11).with_planned_neighborhoods(3);

    let population = run(&config, &problem);

    assert_eq!(population.len(), POPULATION_SIZE);
    for individual in &population {
        assert_eq!(individual.objectives().len(), 2);
        assert!(individual.objectives().iter().all(|(_, v)| v.is_finite()));
    }
}
