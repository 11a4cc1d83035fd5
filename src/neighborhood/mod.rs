//! Neighborhood operators over job sequences.
//!
//! Pure transformations: each takes a sequence by reference and returns
//! a fresh one, so the descent engine can hold and compare several
//! candidates without aliasing. Both operators preserve the job
//! multiset, which is the precondition the evaluator relies on.

mod ops;

pub use ops::{insert, swap};
