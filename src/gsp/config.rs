use super::error::MiningError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How level-k candidates are derived from the level k-1 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateStrategy {
    /// Every ordered k-tuple, with repetition, over the distinct items that
    /// appear in the previous level's frequent sequences.
    #[default]
    ItemProduct,
    /// Join frequent (k-1)-sequences whose overlapping k-2 items agree, so a
    /// candidate is only generated when both its prefix and suffix survived.
    PrefixJoin,
}

/// What to do with the table of the level that ended the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastLevelPolicy {
    /// Always drop the last evaluated table, even a non-empty one produced
    /// when the longest transaction length was reached.
    #[default]
    DropLast,
    /// Drop the last table only when it is empty.
    KeepNonEmpty,
}

/// Cooperative cancellation flag shared between a caller and a running search.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct MinerConfig {
    pub min_support: f64,
    /// Worker threads for support counting, 0 lets rayon pick.
    pub num_threads: usize,
    pub strategy: CandidateStrategy,
    pub last_level: LastLevelPolicy,
    /// Upper bound on the number of candidates evaluated at any one level.
    pub candidate_limit: Option<usize>,
    pub cancel: Option<CancelToken>,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: 0.5,
            num_threads: 0,
            strategy: CandidateStrategy::default(),
            last_level: LastLevelPolicy::default(),
            candidate_limit: None,
            cancel: None,
        }
    }
}

impl MinerConfig {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    pub fn with_strategy(mut self, strategy: CandidateStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_last_level(mut self, policy: LastLevelPolicy) -> Self {
        self.last_level = policy;
        self
    }

    pub fn with_candidate_limit(mut self, limit: usize) -> Self {
        self.candidate_limit = Some(limit);
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Rejects a minimum support outside (0, 1]. NaN is rejected as well.
    pub fn validate(&self) -> Result<(), MiningError> {
        if self.min_support > 0.0 && self.min_support <= 1.0 {
            Ok(())
        } else {
            Err(MiningError::InvalidMinSupport(self.min_support))
        }
    }

    /// Absolute support threshold. Deliberately left unrounded: a sequence is
    /// frequent when `count as f64 >= min_count`.
    pub fn min_count(&self, num_transactions: usize) -> f64 {
        self.min_support * num_transactions as f64
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    pub(crate) fn build_pool(&self) -> Result<rayon::ThreadPool, MiningError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .thread_name(|idx| format!("gsp-worker-{}", idx))
            .build()?;
        Ok(pool)
    }
}
