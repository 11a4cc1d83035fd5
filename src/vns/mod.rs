//! First-improvement descent over the swap and insert neighborhoods
//! (variable neighborhood descent).
//!
//! Repeats a full pass over both neighborhoods, adopting any strictly
//! improving candidate the moment it is found, until a whole round
//! yields no adoption. The returned sequence is then a local optimum
//! with respect to both move types: no single swap or relocation
//! improves it.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod runner;

pub use runner::{VnsResult, VnsRunner};
