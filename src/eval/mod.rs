//! Exact schedule simulation.
//!
//! Turns a candidate permutation into a concrete timed schedule in one
//! O(n) pass, or rejects it on the first deadline violation. This is
//! the only place cost is defined: the search layers above compare the
//! `makespan` values produced here and nothing else.

mod evaluator;

pub use evaluator::{evaluate, Evaluation};
