//! Monodigit - A library for writing integers using a single repeated digit
//!
//! Given a target integer, a digit and a budget of digit occurrences, the
//! solvers search for the expression that reaches the target with the fewest
//! copies of the digit, built from literals (`2`, `22`, `222`), the binary
//! operators `+ - * / ^` and factorial.

pub mod expression;
pub mod generator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{BinaryOp, Expression, ExpressionError};
pub use generator::Candidate;
pub use solver::{
    ExpressionSolver, SearchParams, SearchStats, SolveResult, SolverConfig, SolverError, Strategy,
};
pub use utils::UtilsError;

/// Find the fewest-digit expression of `digit` that evaluates to `target`
///
/// This is a convenience function that validates the inputs and runs a
/// solver with the default configuration.
///
/// # Arguments
///
/// * `target` - The integer to reach
/// * `digit` - The only digit allowed in the expression, `0..=9`
/// * `digit_budget` - Maximum number of digit occurrences, at least 1
/// * `strategy` - Which search to run
///
/// # Errors
///
/// This function will return an error if:
/// * `digit` is greater than 9
/// * `digit_budget` is below 1
/// * a concurrent search is requested with zero workers
///
/// # Examples
///
/// ```
/// use monodigit::{solve, Strategy};
///
/// match solve(6, 2, 3, Strategy::BestFirst) {
///     Ok(result) => match result.best_exact {
///         Some(best) => println!("Found: {}", best.expression),
///         None => println!("Closest: {}", result.approximation.expression),
///     },
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(
    target: i64,
    digit: u8,
    digit_budget: i64,
    strategy: Strategy,
) -> Result<SolveResult, SolverError> {
    let params = SearchParams::new(target, digit, digit_budget)?;

    let solver = ExpressionSolver::default();
    solver.solve(&params, strategy)
}
