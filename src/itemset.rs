//! Bit-vector item sets
//!
//! Transactions and itemsets share one representation: a fixed-width bit
//! vector over the vocabulary, bit `i` set iff vocabulary item `i` is present.
//! All sets built within one mining run have the same width, so equality and
//! hashing only depend on membership.

use std::cmp::Ordering;

const WORD_BITS: usize = 64;

/// Set of vocabulary indices stored as a word-packed bit vector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemSet {
    words: Box<[u64]>,
}

impl ItemSet {
    /// Empty set able to hold indices `0..width`
    pub fn empty(width: usize) -> Self {
        Self {
            words: vec![0u64; width.div_ceil(WORD_BITS)].into_boxed_slice(),
        }
    }

    /// Build a set from vocabulary indices (duplicates collapse)
    pub fn from_indices<I>(width: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::empty(width);
        for idx in indices {
            set.insert(idx);
        }
        set
    }

    /// Add an index; panics if `idx` is outside the width the set was built with
    pub fn insert(&mut self, idx: usize) {
        self.words[idx / WORD_BITS] |= 1u64 << (idx % WORD_BITS);
    }

    /// Same-width set holding the given members of `self`; others are ignored
    pub fn pick(&self, members: &[usize]) -> ItemSet {
        let mut set = ItemSet {
            words: vec![0u64; self.words.len()].into_boxed_slice(),
        };
        for &idx in members {
            if self.contains(idx) {
                set.insert(idx);
            }
        }
        set
    }

    /// Copy of the set with `idx` cleared
    pub fn without(&self, idx: usize) -> ItemSet {
        let mut set = self.clone();
        if let Some(word) = set.words.get_mut(idx / WORD_BITS) {
            *word &= !(1u64 << (idx % WORD_BITS));
        }
        set
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.words
            .get(idx / WORD_BITS)
            .is_some_and(|w| w & (1u64 << (idx % WORD_BITS)) != 0)
    }

    /// Number of items (popcount)
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// `self ⊆ other`, i.e. `self & other == self` word by word
    pub fn is_subset_of(&self, other: &ItemSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| a & b == *a)
    }

    pub fn is_disjoint(&self, other: &ItemSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| a & b == 0)
    }

    pub fn union(&self, other: &ItemSet) -> ItemSet {
        self.zip_with(other, |a, b| a | b)
    }

    /// Items of `self` not in `other`
    pub fn difference(&self, other: &ItemSet) -> ItemSet {
        self.zip_with(other, |a, b| a & !b)
    }

    fn zip_with(&self, other: &ItemSet, op: impl Fn(u64, u64) -> u64) -> ItemSet {
        ItemSet {
            words: self
                .words
                .iter()
                .zip(other.words.iter())
                .map(|(&a, &b)| op(a, b))
                .collect(),
        }
    }

    /// Member indices in ascending (canonical) order
    pub fn indices(&self) -> Indices<'_> {
        Indices {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Member indices collected into a vector
    pub fn to_indices(&self) -> Vec<usize> {
        self.indices().collect()
    }
}

/// Canonical order: smaller sets first, then lexicographic on member indices
impl Ord for ItemSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.indices().cmp(other.indices()))
    }
}

impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Iterator over set bits, lowest first
pub struct Indices<'a> {
    words: &'a [u64],
    word_idx: usize,
    current: u64,
}

impl Iterator for Indices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_idx * WORD_BITS + bit);
            }
            self.word_idx += 1;
            self.current = *self.words.get(self.word_idx)?;
        }
    }
}

/// Lexicographic k-combinations of a slice
///
/// Used for antecedent enumeration. No upper bound on `items.len()`.
pub struct Combinations<'a, T> {
    items: &'a [T],
    positions: Vec<usize>,
    done: bool,
}

impl<'a, T: Copy> Combinations<'a, T> {
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            positions: (0..k).collect(),
            done: k == 0 || k > items.len(),
        }
    }
}

impl<T: Copy> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let out = self.positions.iter().map(|&p| self.items[p]).collect();

        let k = self.positions.len();
        let n = self.items.len();
        // Advance the rightmost position that still has room.
        match (0..k).rev().find(|&i| self.positions[i] < n - k + i) {
            Some(i) => {
                self.positions[i] += 1;
                for j in i + 1..k {
                    self.positions[j] = self.positions[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(out)
    }
}
