//! Problem data for single-machine sequencing.
//!
//! An [`Instance`] is a fixed set of [`Job`]s plus an asymmetric
//! sequence-dependent setup matrix, loaded once and read-only for the
//! whole run. Candidate solutions are plain `Vec<usize>` permutations
//! of the job ids; the evaluator turns a permutation into a timed
//! [`Schedule`].
//!
//! # Time representation
//!
//! All times are non-negative `f64` values relative to an epoch (t=0).
//! The consumer defines what t=0 means (e.g., shift start).

mod instance;
mod schedule;

pub use instance::{reference_instance, Instance, Job};
pub use schedule::{Schedule, ScheduledJob};
