pub mod gsp;

#[cfg(feature = "python")]
mod python;

pub use gsp::{
    contains_run, mine, support_of, CancelToken, CandidateStrategy, Dataset, FrequencyTable, Gsp,
    LastLevelPolicy, LevelObserver, MinerConfig, MiningError, MiningResult, Termination,
};
