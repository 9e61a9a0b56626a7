use super::dataset::ItemId;

/// Flat storage for sequences of one fixed length.
///
/// Sequence `idx` occupies `items[idx * width..(idx + 1) * width]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStorage {
    pub items: Vec<ItemId>,
    pub width: usize,
}

/// The sequences of one level that met the support threshold, with their counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentLevel {
    pub storage: SequenceStorage,
    pub supports: Vec<usize>,
}

impl SequenceStorage {
    pub fn new(width: usize) -> Self {
        Self { items: Vec::new(), width }
    }

    pub fn with_capacity(width: usize, sequences: usize) -> Self {
        Self { items: Vec::with_capacity(width * sequences), width }
    }

    pub fn push(&mut self, sequence: &[ItemId]) {
        debug_assert_eq!(sequence.len(), self.width);
        self.items.extend_from_slice(sequence);
    }

    pub fn get(&self, idx: usize) -> &[ItemId] {
        let start = idx * self.width;
        &self.items[start..start + self.width]
    }

    pub fn len(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.items.len() / self.width
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &[ItemId]> {
        (0..self.len()).map(move |idx| self.get(idx))
    }
}

impl FrequentLevel {
    pub fn new(sequence_len: usize) -> Self {
        Self { storage: SequenceStorage::new(sequence_len), supports: Vec::new() }
    }

    pub fn add_sequence(&mut self, sequence: &[ItemId], support: usize) -> usize {
        self.storage.push(sequence);
        self.supports.push(support);
        self.supports.len() - 1
    }

    pub fn sequence_len(&self) -> usize {
        self.storage.width
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[ItemId], usize)> {
        self.storage.iter().zip(self.supports.iter().copied())
    }
}
