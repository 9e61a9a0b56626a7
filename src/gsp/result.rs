use std::collections::HashMap;
use std::hash::Hash;

/// Why the level loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// `level` produced no frequent sequence.
    Converged { level: usize },
    /// `level` reached the longest transaction length.
    Exhausted { level: usize },
}

impl Termination {
    /// The last level that was evaluated.
    pub fn level(&self) -> usize {
        match *self {
            Termination::Converged { level } | Termination::Exhausted { level } => level,
        }
    }
}

/// Frequent sequences of one length mapped to their support counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<T: Eq + Hash> {
    level: usize,
    counts: HashMap<Vec<T>, usize>,
}

impl<T: Eq + Hash> FrequencyTable<T> {
    pub(crate) fn from_counts(level: usize, counts: HashMap<Vec<T>, usize>) -> Self {
        Self { level, counts }
    }

    /// Length of every sequence in the table.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, sequence: &[T]) -> Option<usize> {
        self.counts.get(sequence).copied()
    }

    pub fn contains(&self, sequence: &[T]) -> bool {
        self.counts.contains_key(sequence)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[T], usize)> {
        self.counts.iter().map(|(sequence, &count)| (sequence.as_slice(), count))
    }

    pub fn into_inner(self) -> HashMap<Vec<T>, usize> {
        self.counts
    }
}

impl<T: Eq + Hash + Ord> FrequencyTable<T> {
    /// Entries in lexicographic sequence order, for reproducible output.
    pub fn sorted(&self) -> Vec<(&[T], usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Ordered frequency tables, index 0 holding the length-1 sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct MiningResult<T: Eq + Hash> {
    pub(crate) levels: Vec<FrequencyTable<T>>,
    pub(crate) termination: Termination,
    pub(crate) min_count: f64,
    pub(crate) num_transactions: usize,
}

impl<T: Eq + Hash> MiningResult<T> {
    pub fn levels(&self) -> &[FrequencyTable<T>] {
        &self.levels
    }

    /// Table of length-`k` sequences, counting from 1.
    pub fn level(&self, k: usize) -> Option<&FrequencyTable<T>> {
        k.checked_sub(1).and_then(|idx| self.levels.get(idx))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Absolute support threshold the run compared counts against.
    pub fn min_count(&self) -> f64 {
        self.min_count
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn total_patterns(&self) -> usize {
        self.levels.iter().map(FrequencyTable::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyTable<T>> {
        self.levels.iter()
    }

    pub fn into_levels(self) -> Vec<FrequencyTable<T>> {
        self.levels
    }
}

impl<T: Eq + Hash> IntoIterator for MiningResult<T> {
    type Item = FrequencyTable<T>;
    type IntoIter = std::vec::IntoIter<FrequencyTable<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a MiningResult<T> {
    type Item = &'a FrequencyTable<T>;
    type IntoIter = std::slice::Iter<'a, FrequencyTable<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}
