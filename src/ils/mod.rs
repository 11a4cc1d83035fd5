//! Iterated Local Search (ILS).
//!
//! Alternates random perturbation of the incumbent with a full descent
//! back to a local optimum, keeping a candidate only on strict
//! improvement. The perturbation strength escalates with consecutive
//! non-improving iterations — more disruption when the search is stuck
//! — and the run stops once a configured stagnation count is reached.
//!
//! # References
//!
//! - Lourenço, H., Martin, O. & Stützle, T. (2003). "Iterated Local
//!   Search", *Handbook of Metaheuristics*, 320-353.

mod config;
mod runner;

pub use config::IlsConfig;
pub use runner::{perturb, IlsResult, IlsRunner};
