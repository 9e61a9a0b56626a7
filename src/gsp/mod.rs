pub mod candidates;
pub mod config;
pub mod dataset;
pub mod error;
pub mod events;
pub mod mining;
pub mod result;
pub mod storage;
pub mod support;

pub use candidates::{generate_candidates, item_product, prefix_join, surviving_items};
pub use config::{CancelToken, CandidateStrategy, LastLevelPolicy, MinerConfig};
pub use dataset::{Dataset, ItemId};
pub use error::MiningError;
pub use events::{
    LevelCompleteEvent, LevelObserver, LevelStartedEvent, NoopObserver, SearchCompleteEvent,
    TracingObserver,
};
pub use mining::{mine, Gsp};
pub use result::{FrequencyTable, MiningResult, Termination};
pub use storage::{FrequentLevel, SequenceStorage};
pub use support::{contains_run, support_of, SupportCounter};
