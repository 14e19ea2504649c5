//! Countdown - A solver for the Countdown numbers game
//!
//! Given a target and a handful of numbers, this library searches every way of
//! combining the numbers with `+`, `-`, `*` and `/` for the expression closest
//! to the target, preferring expressions that use fewer numbers and fewer
//! parentheses.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod utils;

use std::sync::Arc;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, Precedence};
pub use solver::{SearchSummary, Solutions, Solver, SolverConfig, SolverError};
pub use utils::{UtilsError, validate_numbers, validate_target};

/// Find the best expression for a round of the numbers game
///
/// This is a convenience function that checks the input against the rules of
/// the game, then runs a default solver to completion.
///
/// # Arguments
///
/// * `target` - The number to reach, from 100 to 999
/// * `numbers` - The six numbers that may be used
///
/// # Returns
///
/// * `Ok(Some(expr))` - The best expression within 10 of the target
/// * `Ok(None)` - If nothing comes within 10 of the target
/// * `Err(SolverError)` - If the input breaks the rules of the game
///
/// # Errors
///
/// This function will return an error if:
/// * The target is outside `100..=999`
/// * There are not exactly six numbers
/// * A number is not one of 1 to 10, 25, 50, 75 or 100, or appears too often
///
/// # Examples
///
/// ```
/// use countdown::find_solution;
///
/// match find_solution(834, &[10, 9, 8, 7, 6, 5]) {
///     Ok(Some(expr)) => println!("Found: {}", expr.summary()),
///     Ok(None) => println!("No result found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_solution(target: i64, numbers: &[i64]) -> Result<Option<Arc<Expression>>, SolverError> {
    validate_target(target)?;
    validate_numbers(numbers)?;

    let solver = Solver::default();
    Ok(solver.best(target, numbers))
}
