use super::error::MiningError;
use super::result::FrequencyTable;
use super::storage::{FrequentLevel, SequenceStorage};
use std::collections::HashMap;
use std::hash::Hash;

/// Dense id of an interned item, assigned in first-seen order.
pub type ItemId = usize;

/// Transactions converted once into interned form, plus the global statistics
/// the mining loop needs.
#[derive(Debug, Clone)]
pub struct Dataset<T> {
    /// Item for each id
    vocabulary: Vec<T>,
    index: HashMap<T, ItemId>,
    transactions: Vec<Box<[ItemId]>>,
    /// Total occurrences of each item across all transactions
    item_counts: Vec<usize>,
    max_size: usize,
}

impl<T> Dataset<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new<I, S>(raw_transactions: I) -> Result<Self, MiningError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
    {
        let mut dataset = Self {
            vocabulary: Vec::new(),
            index: HashMap::new(),
            transactions: Vec::new(),
            item_counts: Vec::new(),
            max_size: 0,
        };

        for raw in raw_transactions {
            let transaction: Box<[ItemId]> = raw.into_iter().map(|item| dataset.intern(item)).collect();
            dataset.max_size = dataset.max_size.max(transaction.len());
            dataset.transactions.push(transaction);
        }

        if dataset.transactions.is_empty() {
            return Err(MiningError::EmptyInput);
        }

        Ok(dataset)
    }

    fn intern(&mut self, item: T) -> ItemId {
        let id = match self.index.get(&item) {
            Some(&id) => id,
            None => {
                let id = self.vocabulary.len();
                self.vocabulary.push(item.clone());
                self.index.insert(item, id);
                self.item_counts.push(0);
                id
            }
        };
        self.item_counts[id] += 1;
        id
    }

    /// Length of the longest transaction.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Box<[ItemId]>] {
        &self.transactions
    }

    pub fn num_items(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn item(&self, id: ItemId) -> &T {
        &self.vocabulary[id]
    }

    pub fn id_of(&self, item: &T) -> Option<ItemId> {
        self.index.get(item).copied()
    }

    /// Number of times `item` occurs over all transactions, repeats included.
    pub fn item_count(&self, item: &T) -> usize {
        self.id_of(item).map_or(0, |id| self.item_counts[id])
    }

    /// Every distinct item as a length-1 candidate, in first-seen order.
    pub fn unique_candidates(&self) -> SequenceStorage {
        SequenceStorage { items: (0..self.vocabulary.len()).collect(), width: 1 }
    }

    pub fn decode_sequence(&self, sequence: &[ItemId]) -> Vec<T> {
        sequence.iter().map(|&id| self.vocabulary[id].clone()).collect()
    }

    pub(crate) fn decode_level(&self, level: &FrequentLevel) -> FrequencyTable<T> {
        let counts = level
            .iter()
            .map(|(sequence, support)| (self.decode_sequence(sequence), support))
            .collect();
        FrequencyTable::from_counts(level.sequence_len(), counts)
    }
}
