//! Single-machine job-sequencing optimizer.
//!
//! Minimizes the completion time of the last job (makespan, `Cmax`) over
//! permutations of a fixed job set with release dates, hard deadlines,
//! and sequence-dependent setup times. A deadline violation makes a
//! sequence infeasible outright rather than merely expensive.
//!
//! - **`model`**: Problem data — `Job`, `Instance` (jobs + setup matrix),
//!   and the timed `Schedule` produced by evaluation.
//! - **`eval`**: Exact schedule simulation: one O(n) pass turning a
//!   permutation into start/finish times, with early rejection on the
//!   first deadline violation.
//! - **`neighborhood`**: Pure swap and insert operators over sequences.
//! - **`vns`**: First-improvement descent over both neighborhoods until
//!   no single move improves the incumbent.
//! - **`ils`**: Iterated Local Search — escalating random perturbation,
//!   re-descent, strict-improvement acceptance, stagnation-based stop.
//! - **`report`**: Feasibility-aware hand-off of the final schedule to
//!   an external renderer or printer.
//!
//! # Architecture
//!
//! ILS drives the descent engine, which scores candidates through the
//! evaluator; the neighborhood operators generate those candidates.
//! Everything is single-threaded and synchronous. Randomness enters the
//! search only through the seedable RNG owned by the ILS runner, so a
//! fixed seed reproduces the full trajectory.
//!
//! # References
//!
//! - Lourenço, H., Martin, O. & Stützle, T. (2003). "Iterated Local
//!   Search", *Handbook of Metaheuristics*, 320-353.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod eval;
pub mod ils;
pub mod model;
pub mod neighborhood;
pub mod report;
pub mod vns;
