pub mod constants;
mod core;
mod errors;
pub mod evaluator;

pub use core::{SearchSummary, Solutions, Solver, SolverConfig};
pub use errors::SolverError;
pub use evaluator::{BestTracker, ProximityFilter, Score};
