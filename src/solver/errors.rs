use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid search parameters: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Concurrent search needs at least one worker")]
    NoWorkers,
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
