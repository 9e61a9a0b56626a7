use super::config::CandidateStrategy;
use super::dataset::ItemId;
use super::error::MiningError;
use super::storage::{FrequentLevel, SequenceStorage};
use std::collections::HashMap;

/// Builds the candidates one level above `previous`.
///
/// `limit` caps the number of candidates; the cap is checked before any
/// candidate is materialized.
pub fn generate_candidates(
    strategy: CandidateStrategy,
    previous: &FrequentLevel,
    limit: Option<usize>,
) -> Result<SequenceStorage, MiningError> {
    let k = previous.sequence_len() + 1;

    match strategy {
        CandidateStrategy::ItemProduct => {
            let items = surviving_items(previous);
            let requested = items.len().checked_pow(k as u32).unwrap_or(usize::MAX);
            check_budget(k, requested, limit)?;
            Ok(item_product(&items, k))
        }
        CandidateStrategy::PrefixJoin => {
            let candidates = prefix_join(previous);
            check_budget(k, candidates.len(), limit)?;
            Ok(candidates)
        }
    }
}

fn check_budget(level: usize, requested: usize, limit: Option<usize>) -> Result<(), MiningError> {
    match limit {
        Some(limit) if requested > limit => Err(MiningError::CandidateBudgetExceeded {
            level,
            requested,
            limit,
        }),
        _ => Ok(()),
    }
}

/// Distinct items appearing anywhere in the level's sequences, ascending by id.
pub fn surviving_items(level: &FrequentLevel) -> Vec<ItemId> {
    let mut items = level.storage.items.clone();
    items.sort_unstable();
    items.dedup();
    items
}

/// All ordered `k`-tuples over `items`, repeats allowed, in odometer order.
pub fn item_product(items: &[ItemId], k: usize) -> SequenceStorage {
    let capacity = items.len().checked_pow(k as u32).unwrap_or(0);
    let mut result = SequenceStorage::with_capacity(k, capacity);
    if k == 0 || items.is_empty() {
        return result;
    }

    let mut callback = |sequence: &[ItemId]| result.push(sequence);
    generate_product_recursive(items, k, &mut Vec::with_capacity(k), &mut callback);
    result
}

pub fn generate_product_recursive<F>(
    items: &[ItemId],
    k: usize,
    current: &mut Vec<ItemId>,
    callback: &mut F,
) where
    F: FnMut(&[ItemId]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for &item in items {
        current.push(item);
        generate_product_recursive(items, k, current, callback);
        current.pop();
    }
}

/// Extends each frequent sequence `a` by the last item of every frequent `b`
/// whose first k-2 items equal the last k-2 items of `a`.
pub fn prefix_join(previous: &FrequentLevel) -> SequenceStorage {
    let width = previous.sequence_len();
    let mut result = SequenceStorage::new(width + 1);
    if width == 0 {
        return result;
    }

    let mut by_prefix: HashMap<&[ItemId], Vec<ItemId>> = HashMap::new();
    for sequence in previous.storage.iter() {
        by_prefix.entry(&sequence[..width - 1]).or_default().push(sequence[width - 1]);
    }

    let mut candidate = Vec::with_capacity(width + 1);
    for sequence in previous.storage.iter() {
        let Some(extensions) = by_prefix.get(&sequence[1..]) else {
            continue;
        };
        for &last in extensions {
            candidate.clear();
            candidate.extend_from_slice(sequence);
            candidate.push(last);
            result.push(&candidate);
        }
    }
    result
}
