use log::info;

use crate::solver::concurrent::concurrent;
use crate::solver::config::{SearchParams, SolverConfig, Strategy};
use crate::solver::divide::divide_and_conquer;
use crate::solver::errors::SolverError;
use crate::solver::records::SolveResult;
use crate::solver::sequential::{best_first, exhaustive};

/// Main solver for finding single-digit expressions that match a target value
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    /// Create a new expression solver
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search for the fewest-digit expression of `params.digit()` equal to
    /// `params.target()`, using at most `params.budget()` digits.
    ///
    /// Running out of candidates without an exact match is not an error: the
    /// result then holds no exact match and the closest value seen.
    ///
    /// # Errors
    ///
    /// Returns an error if a concurrent search is requested with zero
    /// workers or its thread pool cannot be built.
    pub fn solve(
        &self,
        params: &SearchParams,
        strategy: Strategy,
    ) -> Result<SolveResult, SolverError> {
        info!(
            "Searching for {} using digit {} with at most {} digits ({:?})",
            params.target(),
            params.digit(),
            params.budget(),
            strategy
        );

        let result = match strategy {
            Strategy::BestFirst => best_first(params, &self.config),
            Strategy::Exhaustive => exhaustive(params, &self.config),
            Strategy::DivideAndConquer => divide_and_conquer(params, &self.config),
            Strategy::Concurrent { workers } => concurrent(params, &self.config, workers)?,
        };

        match &result.best_exact {
            Some(best) => info!(
                "Found exact match: {} with {} digits",
                best.expression, best.digits
            ),
            None => info!(
                "No exact match found, closest is {} = {}",
                result.approximation.expression, result.approximation.value
            ),
        }
        Ok(result)
    }
}
