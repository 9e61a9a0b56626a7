use super::config::CancelToken;
use super::dataset::ItemId;
use super::error::MiningError;
use super::storage::{FrequentLevel, SequenceStorage};
use rayon::prelude::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// True when `candidate` occurs in `transaction` as a contiguous run.
pub fn contains_run<T: PartialEq>(transaction: &[T], candidate: &[T]) -> bool {
    if candidate.is_empty() {
        return false;
    }
    transaction.windows(candidate.len()).any(|window| window == candidate)
}

/// Number of transactions containing `candidate` as a contiguous run.
pub fn support_of<T, S>(transactions: &[S], candidate: &[T]) -> usize
where
    T: PartialEq,
    S: AsRef<[T]>,
{
    transactions
        .iter()
        .filter(|transaction| contains_run(transaction.as_ref(), candidate))
        .count()
}

/// Counts candidate support on a worker pool, one task per candidate.
pub struct SupportCounter<'a> {
    transactions: &'a [Box<[ItemId]>],
    pool: &'a rayon::ThreadPool,
    cancel: Option<&'a CancelToken>,
}

impl<'a> SupportCounter<'a> {
    pub fn new(transactions: &'a [Box<[ItemId]>], pool: &'a rayon::ThreadPool) -> Self {
        Self { transactions, pool, cancel: None }
    }

    pub fn with_cancel_token(mut self, token: Option<&'a CancelToken>) -> Self {
        self.cancel = token;
        self
    }

    /// Keeps the candidates whose support is at least `min_count`.
    ///
    /// Returns only once every candidate task has finished. Any failed task
    /// fails the whole level.
    pub fn count_level(
        &self,
        candidates: &SequenceStorage,
        min_count: f64,
    ) -> Result<FrequentLevel, MiningError> {
        self.count_level_with(candidates, min_count, |candidate| {
            support_of(self.transactions, candidate)
        })
    }

    pub(crate) fn count_level_with<F>(
        &self,
        candidates: &SequenceStorage,
        min_count: f64,
        count: F,
    ) -> Result<FrequentLevel, MiningError>
    where
        F: Fn(&[ItemId]) -> usize + Sync,
    {
        let level = candidates.width;

        let frequent: Vec<Option<(usize, usize)>> = self.pool.install(|| {
            (0..candidates.len())
                .into_par_iter()
                .map(|idx| {
                    if self.cancel.is_some_and(CancelToken::is_cancelled) {
                        return Err(MiningError::Cancelled { level });
                    }

                    let candidate = candidates.get(idx);
                    let support = panic::catch_unwind(AssertUnwindSafe(|| count(candidate)))
                        .map_err(|payload| MiningError::WorkerFailure {
                            level,
                            candidate: format!("{:?}", candidate),
                            message: panic_message(payload.as_ref()),
                        })?;

                    Ok((support as f64 >= min_count).then_some((idx, support)))
                })
                .collect::<Result<Vec<_>, MiningError>>()
        })?;

        // Assembled in candidate order so the table does not depend on scheduling
        let mut result = FrequentLevel::new(level);
        for (idx, support) in frequent.into_iter().flatten() {
            result.add_sequence(candidates.get(idx), support);
        }

        tracing::debug!(
            level,
            candidates = candidates.len(),
            retained = result.len(),
            "support counting finished"
        );

        Ok(result)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
