//! Descent execution engine.
//!
//! # Algorithm
//!
//! 1. Evaluate the starting sequence; it becomes the incumbent.
//! 2. **Swap pass**: for every pair i < j, build the swap candidate
//!    from the *current* incumbent and evaluate it; adopt on strictly
//!    lower cost.
//! 3. **Insert pass**: for every ordered pair i ≠ j, same policy.
//! 4. If either pass adopted anything, go to 2; otherwise stop.
//!
//! Adoption happens mid-pass: later candidates in the same pass are
//! built from the already-improved incumbent. This first-improvement
//! policy and the ascending (i, j) enumeration order are part of the
//! contract — a best-improvement variant converges differently and
//! must not be substituted.

use crate::eval::evaluate;
use crate::model::Instance;
use crate::neighborhood::{insert, swap};

/// Result of one descent run.
#[derive(Debug, Clone)]
pub struct VnsResult {
    /// Locally optimal sequence.
    pub best: Vec<usize>,
    /// Its makespan, `f64::INFINITY` when every examined sequence
    /// (including the start) violates a deadline.
    pub best_cost: f64,
    /// Full rounds over both neighborhoods, including the final
    /// non-improving one.
    pub rounds: usize,
    /// Improving candidates adopted across all rounds.
    pub adoptions: usize,
}

/// First-improvement descent runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Descends from `start` to a local optimum of both neighborhoods.
    ///
    /// `start` must be a permutation of all job ids of `instance`.
    /// Terminates for every input: cost strictly decreases on each
    /// adoption and the permutation space is finite.
    pub fn run(instance: &Instance, start: &[usize]) -> VnsResult {
        let n = start.len();
        let mut best = start.to_vec();
        let mut best_cost = evaluate(instance, &best).makespan;
        let mut rounds = 0;
        let mut adoptions = 0;

        let mut improved = true;
        while improved {
            improved = false;
            rounds += 1;

            // Swap neighborhood
            for i in 0..n {
                for j in (i + 1)..n {
                    let candidate = swap(&best, i, j);
                    let cost = evaluate(instance, &candidate).makespan;
                    if cost < best_cost {
                        best = candidate;
                        best_cost = cost;
                        improved = true;
                        adoptions += 1;
                    }
                }
            }

            // Insert neighborhood
            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let candidate = insert(&best, i, j);
                    let cost = evaluate(instance, &candidate).makespan;
                    if cost < best_cost {
                        best = candidate;
                        best_cost = cost;
                        improved = true;
                        adoptions += 1;
                    }
                }
            }
        }

        VnsResult {
            best,
            best_cost,
            rounds,
            adoptions,
        }
    }
}
