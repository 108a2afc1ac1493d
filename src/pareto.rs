//! Pareto ranking utilities
//!
//! Non-dominated sorting, crowding distance and extreme detection over any
//! slice of [`Evaluated`] individuals. Individuals are addressed by their
//! index in that slice.
//!
//! Reference: Deb, K., Pratap, A., Agarwal, S., & Meyarivan, T. (2002).
//! A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II.
//! IEEE Transactions on Evolutionary Computation, 6(2).

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fitness::traits::Evaluated;

/// For each member, the members it dominates (indices into `members`)
#[cfg(feature = "parallel")]
fn dominated_sets<T: Evaluated>(population: &[T], members: &[usize]) -> Vec<Vec<usize>> {
    members
        .par_iter()
        .map(|&i| {
            let first = population[i].objectives();
            (0..members.len())
                .filter(|&b| first.dominates(population[members[b]].objectives()))
                .collect()
        })
        .collect()
}

/// For each member, the members it dominates (indices into `members`)
#[cfg(not(feature = "parallel"))]
fn dominated_sets<T: Evaluated>(population: &[T], members: &[usize]) -> Vec<Vec<usize>> {
    let n = members.len();
    let mut dominated_set: Vec<Vec<usize>> = vec![vec![]; n];

    for a in 0..n {
        for b in (a + 1)..n {
            let first = population[members[a]].objectives();
            let second = population[members[b]].objectives();
            if first.dominates(second) {
                dominated_set[a].push(b);
            } else if second.dominates(first) {
                dominated_set[b].push(a);
            }
        }
    }

    dominated_set
}

/// Fast non-dominated sort of a subset of the population
///
/// Returns fronts where `front[0]` is the non-dominated set of `members`.
/// Every front lists population indices in the order they appear in
/// `members`.
pub fn non_dominated_fronts_of<T: Evaluated>(
    population: &[T],
    members: &[usize],
) -> Vec<Vec<usize>> {
    let n = members.len();
    if n == 0 {
        return vec![];
    }

    let dominated_set = dominated_sets(population, members);

    // domination_count[i] = number of members that dominate i
    let mut domination_count = vec![0usize; n];
    for dominated in &dominated_set {
        for &j in dominated {
            domination_count[j] += 1;
        }
    }

    let mut fronts: Vec<Vec<usize>> = vec![];
    let mut current_front: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    while !current_front.is_empty() {
        let mut next_front = vec![];
        for &i in &current_front {
            for &j in &dominated_set[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next_front.push(j);
                }
            }
        }
        next_front.sort_unstable();

        fronts.push(current_front.iter().map(|&i| members[i]).collect());
        current_front = next_front;
    }

    log::trace!("ranked {} individuals into {} fronts", n, fronts.len());
    fronts
}

/// Fast non-dominated sort of the whole population
pub fn non_dominated_fronts<T: Evaluated>(population: &[T]) -> Vec<Vec<usize>> {
    let members: Vec<usize> = (0..population.len()).collect();
    non_dominated_fronts_of(population, &members)
}

/// Individuals achieving the best value of each objective within `front`
///
/// Objectives are visited in the declaration order of the first member.
/// Ties go to the member appearing first in `front`; an individual that is
/// best for several objectives is listed once.
pub fn extremes<T: Evaluated>(population: &[T], front: &[usize]) -> Vec<usize> {
    let Some(&first) = front.first() else {
        return vec![];
    };

    let mut result: Vec<usize> = Vec::new();
    for objective in population[first].objectives().objectives() {
        let mut best: Option<(usize, f64)> = None;
        for &i in front {
            let Some(value) = population[i].objectives().get(objective) else {
                continue;
            };
            match best {
                Some((_, best_value)) if !objective.is_better(value, best_value) => {}
                _ => best = Some((i, value)),
            }
        }
        if let Some((i, _)) = best {
            if !result.contains(&i) {
                result.push(i);
            }
        }
    }
    result
}

/// Crowding distance of each member of `front`
///
/// Returned values are aligned with `front`. Boundary members get infinite
/// distance; fronts of size two or less are all boundary.
pub fn crowding_distances<T: Evaluated>(population: &[T], front: &[usize]) -> Vec<f64> {
    let n = front.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let mut distances = vec![0.0; n];
    for objective in population[front[0]].objectives().objectives() {
        let value = |k: usize| {
            population[front[k]]
                .objectives()
                .get(objective)
                .unwrap_or(0.0)
        };

        let mut sorted: Vec<usize> = (0..n).collect();
        sorted.sort_by(|&a, &b| {
            value(a)
                .partial_cmp(&value(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        distances[sorted[0]] = f64::INFINITY;
        distances[sorted[n - 1]] = f64::INFINITY;

        let range = value(sorted[n - 1]) - value(sorted[0]);
        if range > 0.0 {
            for k in 1..(n - 1) {
                distances[sorted[k]] += (value(sorted[k + 1]) - value(sorted[k - 1])) / range;
            }
        }
    }
    distances
}

/// Members of `subset` ordered by descending crowding distance
///
/// Distances are computed over `front` (which must contain `subset`). The
/// sort is stable, so ties keep their order in `subset`.
pub fn by_crowding_distance<T: Evaluated>(
    population: &[T],
    front: &[usize],
    subset: &[usize],
) -> Vec<usize> {
    let distances = crowding_distances(population, front);
    let distance_of = |i: usize| {
        front
            .iter()
            .position(|&f| f == i)
            .map(|k| distances[k])
            .unwrap_or(0.0)
    };

    let mut ordered: Vec<(usize, f64)> = subset.iter().map(|&i| (i, distance_of(i))).collect();
    ordered.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ordered.into_iter().map(|(i, _)| i).collect()
}
