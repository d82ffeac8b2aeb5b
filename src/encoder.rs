//! Transaction encoding
//!
//! Turns raw transactions (lists of item labels, blanks and repeats allowed)
//! into a fixed vocabulary plus one bit-vector row per transaction.
//!
//! # Example
//! ```
//! use basket::encoder::encode;
//!
//! let encoded = encode(vec![vec!["milk", " bread "], vec!["milk", "", "milk"]]).unwrap();
//!
//! assert_eq!(encoded.len(), 2);
//! assert_eq!(encoded.vocabulary().labels(), &["bread".to_string(), "milk".to_string()]);
//! assert_eq!(encoded.rows()[1].len(), 1); // repeated "milk" counts once
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{MiningError, Result};
use crate::itemset::ItemSet;

/// Ordered item vocabulary, fixed once encoding finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    fn from_sorted(labels: Vec<String>) -> Self {
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();
        Self { labels, index }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in index order (lexicographic)
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, idx: usize) -> Option<&str> {
        self.labels.get(idx).map(String::as_str)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Build an itemset from labels; `None` if any label is unknown
    pub fn itemset<S: AsRef<str>>(&self, labels: &[S]) -> Option<ItemSet> {
        let indices = labels
            .iter()
            .map(|l| self.index_of(l.as_ref()))
            .collect::<Option<Vec<_>>>()?;
        Some(ItemSet::from_indices(self.len(), indices))
    }

    /// Labels of an itemset in canonical order
    pub fn labels_of(&self, set: &ItemSet) -> Vec<String> {
        set.indices()
            .filter_map(|i| self.labels.get(i).cloned())
            .collect()
    }
}

/// Raw occurrence count of a single item across all transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFrequency {
    pub item: String,
    pub count: u64,
}

/// Vocabulary plus bit-vector rows; read-only after [`encode`]
#[derive(Debug, Clone)]
pub struct EncodedTransactions {
    vocabulary: Vocabulary,
    rows: Vec<ItemSet>,
    /// Occurrences per vocabulary index, counted before in-transaction dedup
    occurrences: Vec<u64>,
}

impl EncodedTransactions {
    /// Number of transactions (N), including rows left empty by cleaning
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn rows(&self) -> &[ItemSet] {
        &self.rows
    }

    /// Item → raw occurrence count, descending by count, ties by label
    pub fn item_frequencies(&self) -> Vec<ItemFrequency> {
        let mut table: Vec<ItemFrequency> = self
            .vocabulary
            .labels
            .iter()
            .zip(self.occurrences.iter())
            .map(|(item, &count)| ItemFrequency {
                item: item.clone(),
                count,
            })
            .collect();

        // Labels are already ascending, so a stable sort keeps the tie order.
        table.sort_by(|a, b| b.count.cmp(&a.count));
        table
    }
}

/// Encode raw transactions
///
/// Items are trimmed, blank tokens dropped and repeats within a transaction
/// collapsed. Fails with [`MiningError::EmptyInput`] when there are no
/// transactions or no item survives cleaning.
pub fn encode<T, I, S>(raw: T) -> Result<EncodedTransactions>
where
    T: IntoIterator<Item = I>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut occurrences: BTreeMap<String, u64> = BTreeMap::new();
    let mut cleaned: Vec<Vec<String>> = Vec::new();

    for transaction in raw {
        let mut items: Vec<String> = Vec::new();
        for token in transaction {
            let item = token.as_ref().trim();
            if item.is_empty() {
                continue;
            }
            *occurrences.entry(item.to_string()).or_insert(0) += 1;
            if !items.iter().any(|existing| existing == item) {
                items.push(item.to_string());
            }
        }
        cleaned.push(items);
    }

    if cleaned.is_empty() {
        return Err(MiningError::EmptyInput("no transactions"));
    }
    if occurrences.is_empty() {
        return Err(MiningError::EmptyInput("no items left after cleaning"));
    }

    let (labels, counts): (Vec<String>, Vec<u64>) = occurrences.into_iter().unzip();
    let vocabulary = Vocabulary::from_sorted(labels);
    let width = vocabulary.len();

    let rows = cleaned
        .iter()
        .map(|items| {
            ItemSet::from_indices(
                width,
                items.iter().filter_map(|item| vocabulary.index_of(item)),
            )
        })
        .collect();

    tracing::debug!(
        transactions = cleaned.len(),
        vocabulary = width,
        "encoded transactions"
    );

    Ok(EncodedTransactions {
        vocabulary,
        rows,
        occurrences: counts,
    })
}
