use super::candidates::generate_candidates;
use super::config::{LastLevelPolicy, MinerConfig};
use super::dataset::Dataset;
use super::error::MiningError;
use super::events::{
    LevelCompleteEvent, LevelObserver, LevelStartedEvent, SearchCompleteEvent, TracingObserver,
};
use super::result::{MiningResult, Termination};
use super::storage::FrequentLevel;
use super::support::SupportCounter;
use std::hash::Hash;
use std::time::Instant;

/// Level-wise miner of frequent contiguous sequences.
#[derive(Debug, Clone)]
pub struct Gsp<T> {
    dataset: Dataset<T>,
}

/// Validates `config`, preprocesses `raw_transactions` and runs one search.
pub fn mine<T, I, S>(raw_transactions: I, config: &MinerConfig) -> Result<MiningResult<T>, MiningError>
where
    T: Eq + Hash + Clone + Send + Sync,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    config.validate()?;
    Gsp::new(raw_transactions)?.search_with(config, &TracingObserver)
}

impl<T> Gsp<T>
where
    T: Eq + Hash + Clone + Send + Sync,
{
    pub fn new<I, S>(raw_transactions: I) -> Result<Self, MiningError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
    {
        Ok(Self { dataset: Dataset::new(raw_transactions)? })
    }

    pub fn dataset(&self) -> &Dataset<T> {
        &self.dataset
    }

    /// Runs with default settings, reporting progress through `tracing`.
    pub fn search(&self, min_support: f64) -> Result<MiningResult<T>, MiningError> {
        self.search_with(&MinerConfig::new(min_support), &TracingObserver)
    }

    pub fn search_with(
        &self,
        config: &MinerConfig,
        observer: &dyn LevelObserver,
    ) -> Result<MiningResult<T>, MiningError> {
        config.validate()?;

        let started = Instant::now();
        let min_count = config.min_count(self.dataset.len());
        let span = tracing::info_span!(
            "gsp_search",
            min_support = config.min_support,
            min_count,
            transactions = self.dataset.len(),
            max_size = self.dataset.max_size()
        );
        let _guard = span.enter();

        let pool = config.build_pool()?;
        let counter = SupportCounter::new(self.dataset.transactions(), &pool)
            .with_cancel_token(config.cancel.as_ref());

        let mut levels: Vec<FrequentLevel> = Vec::new();
        let mut k = 1;
        let mut candidates = self.dataset.unique_candidates();

        let termination = loop {
            if config.is_cancelled() {
                return Err(MiningError::Cancelled { level: k });
            }

            let level_started = Instant::now();
            observer.on_level_started(&LevelStartedEvent { level: k, candidates: candidates.len() });

            let level = counter.count_level(&candidates, min_count)?;

            observer.on_level_complete(&LevelCompleteEvent {
                level: k,
                candidates: candidates.len(),
                retained: level.len(),
                elapsed: level_started.elapsed(),
            });

            let converged = level.is_empty();
            levels.push(level);

            if converged {
                break Termination::Converged { level: k };
            }
            if k + 1 > self.dataset.max_size() {
                break Termination::Exhausted { level: k };
            }

            k += 1;
            if let Some(previous) = levels.last() {
                candidates = generate_candidates(config.strategy, previous, config.candidate_limit)?;
            }
        };

        match config.last_level {
            LastLevelPolicy::DropLast => {
                levels.pop();
            }
            LastLevelPolicy::KeepNonEmpty => {
                if levels.last().is_some_and(FrequentLevel::is_empty) {
                    levels.pop();
                }
            }
        }

        let result = MiningResult {
            levels: levels.iter().map(|level| self.dataset.decode_level(level)).collect(),
            termination,
            min_count,
            num_transactions: self.dataset.len(),
        };

        observer.on_search_complete(&SearchCompleteEvent {
            termination,
            levels_reported: result.len(),
            total_patterns: result.total_patterns(),
            elapsed: started.elapsed(),
        });

        Ok(result)
    }
}
