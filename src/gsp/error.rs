/// Errors surfaced by a mining run.
///
/// Every variant aborts the run; there is no partial result mode.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("minimum support must lie in (0, 1], got {0}")]
    InvalidMinSupport(f64),

    #[error("cannot mine an empty transaction collection")]
    EmptyInput,

    #[error("support counting failed for candidate {candidate} at level {level}: {message}")]
    WorkerFailure {
        level: usize,
        candidate: String,
        message: String,
    },

    #[error("level {level} needs {requested} candidates, budget is {limit}")]
    CandidateBudgetExceeded {
        level: usize,
        requested: usize,
        limit: usize,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("search cancelled at level {level}")]
    Cancelled { level: usize },
}
