//! ILS execution loop.
//!
//! # Algorithm
//!
//! 1. Shuffle `0..n` into an initial sequence, descend to a local
//!    optimum; this seeds the incumbent.
//! 2. While `stagnation < max_stagnation`:
//!    a. **Perturb**: apply `stagnation + 1` independent random swaps
//!       of two distinct positions to the incumbent.
//!    b. **Re-optimize**: descend the perturbed sequence to a new
//!       local optimum.
//!    c. **Accept**: on strictly lower cost, replace the incumbent and
//!       reset `stagnation`; otherwise increment it and discard.
//! 3. Return the incumbent.
//!
//! The RNG is the single source of randomness, consumed in a fixed
//! order (initial shuffle, then each perturbation), so a fixed seed
//! reproduces the whole trajectory.

use super::config::IlsConfig;
use crate::model::Instance;
use crate::vns::VnsRunner;
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};

/// Result of an ILS run.
#[derive(Debug, Clone)]
pub struct IlsResult {
    /// Best sequence found.
    pub best: Vec<usize>,
    /// Its makespan, `f64::INFINITY` when no feasible schedule was
    /// found anywhere in the search.
    pub best_cost: f64,
    /// Outer iterations executed (perturb + descend + accept cycles).
    pub iterations: usize,
    /// Incumbent cost after the seeding descent and after each outer
    /// iteration; non-increasing by construction.
    pub cost_history: Vec<f64>,
}

/// Iterated Local Search runner.
pub struct IlsRunner;

impl IlsRunner {
    /// Runs ILS on the given instance.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation.
    pub fn run(instance: &Instance, config: &IlsConfig) -> IlsResult {
        config.validate().expect("invalid IlsConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut initial: Vec<usize> = (0..instance.len()).collect();
        initial.shuffle(&mut rng);

        let seeded = VnsRunner::run(instance, &initial);
        let mut best = seeded.best;
        let mut best_cost = seeded.best_cost;

        let mut cost_history = vec![best_cost];
        let mut stagnation = 0;
        let mut iterations = 0;

        while stagnation < config.max_stagnation {
            let perturbed = perturb(&best, stagnation + 1, &mut rng);
            let candidate = VnsRunner::run(instance, &perturbed);

            if candidate.best_cost < best_cost {
                best = candidate.best;
                best_cost = candidate.best_cost;
                stagnation = 0;
            } else {
                stagnation += 1;
            }

            iterations += 1;
            cost_history.push(best_cost);
        }

        IlsResult {
            best,
            best_cost,
            iterations,
            cost_history,
        }
    }
}

/// Applies `strength` independent random pairwise swaps to a copy of
/// `seq`, each over two distinct positions drawn uniformly.
///
/// Sequences shorter than two elements have no distinct position pair;
/// they are returned unchanged.
pub fn perturb<R: Rng>(seq: &[usize], strength: usize, rng: &mut R) -> Vec<usize> {
    let mut new_seq = seq.to_vec();
    if new_seq.len() < 2 {
        return new_seq;
    }
    for _ in 0..strength {
        let picked = index::sample(rng, new_seq.len(), 2);
        new_seq.swap(picked.index(0), picked.index(1));
    }
    new_seq
}
