mod concurrent;
mod config;
pub mod constants;
mod divide;
mod engine;
mod errors;
mod frontier;
mod records;
mod sequential;

pub use config::{SearchParams, SolverConfig, Strategy};
pub use engine::ExpressionSolver;
pub use errors::SolverError;
pub use records::{SearchStats, SolveResult};

#[cfg(test)]
mod tests;
