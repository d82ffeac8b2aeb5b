use std::collections::HashSet;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::apriori::candidates::generate_candidates;
use crate::encoder::EncodedTransactions;
use crate::error::{check_min_support, MiningError, Result};
use crate::itemset::ItemSet;
use crate::support::SupportCounter;

/// An itemset whose support reached the mining threshold
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemset {
    /// Members as a bit vector over the vocabulary
    pub items: ItemSet,

    /// Transactions containing every member
    pub count: u64,

    /// `count / N`, always in (0, 1]
    pub support: f64,
}

impl FrequentItemset {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Execution knobs that do not change the mined result
#[derive(Debug, Clone, Default)]
pub struct MineOptions {
    /// Count the candidates of a level on the rayon pool
    pub parallel: bool,

    /// Abort between levels once this much wall-clock time has passed
    pub time_budget: Option<Duration>,
}

/// Mine all frequent itemsets with default options
///
/// # Example
/// ```
/// use basket::{apriori::mine, encoder::encode};
///
/// let encoded = encode(vec![vec!["a", "b"], vec!["a", "b"], vec!["a"]]).unwrap();
/// let frequent = mine(&encoded, 0.5).unwrap();
///
/// // {a}, {b} and {a, b}
/// assert_eq!(frequent.len(), 3);
/// assert_eq!(frequent[2].count, 2);
/// ```
pub fn mine(encoded: &EncodedTransactions, min_support: f64) -> Result<Vec<FrequentItemset>> {
    mine_with_options(encoded, min_support, &MineOptions::default())
}

/// Mine all frequent itemsets
///
/// Levels are returned in order (all singletons, then all pairs, ...), each
/// level in lexicographic vocabulary-index order. An empty result is valid.
pub fn mine_with_options(
    encoded: &EncodedTransactions,
    min_support: f64,
    options: &MineOptions,
) -> Result<Vec<FrequentItemset>> {
    check_min_support(min_support)?;

    let started = Instant::now();
    let counter = SupportCounter::new(encoded);
    let n = counter.transactions();
    let width = encoded.vocabulary().len();
    let is_frequent = |count: u64| n > 0 && count as f64 / n as f64 >= min_support;

    let mut result: Vec<FrequentItemset> = Vec::new();

    // Level 1 straight from the posting lists.
    let mut level: Vec<Vec<usize>> = Vec::new();
    for idx in 0..width {
        let count = counter.item_count(idx);
        if is_frequent(count) {
            level.push(vec![idx]);
            result.push(frequent_itemset(width, &[idx], count, n));
        }
    }
    tracing::debug!(k = 1, candidates = width, frequent = level.len(), "apriori level");

    let mut k = 1;
    while !level.is_empty() {
        if let Some(budget) = options.time_budget {
            if started.elapsed() >= budget {
                tracing::warn!(completed_levels = k, ?budget, "mining budget exceeded");
                return Err(MiningError::BudgetExceeded {
                    completed_levels: k,
                    budget,
                });
            }
        }
        k += 1;

        let joined = generate_candidates(&level, width);
        let counts = count_candidates(&counter, &joined.candidates, width, options.parallel);

        let mut next = Vec::new();
        for (candidate, count) in joined.candidates.into_iter().zip(counts) {
            if is_frequent(count) {
                result.push(frequent_itemset(width, &candidate, count, n));
                next.push(candidate);
            }
        }

        tracing::debug!(
            k,
            joined = joined.joined,
            pruned = joined.pruned,
            frequent = next.len(),
            "apriori level"
        );
        level = next;
    }

    debug_assert!(is_downward_closed(&result));
    tracing::info!(
        transactions = n,
        vocabulary = width,
        frequent = result.len(),
        min_support,
        "mined frequent itemsets"
    );
    Ok(result)
}

/// Support counts for one level; the level is complete when this returns
fn count_candidates(
    counter: &SupportCounter<'_>,
    candidates: &[Vec<usize>],
    width: usize,
    parallel: bool,
) -> Vec<u64> {
    let count = |items: &Vec<usize>| {
        counter.count(&ItemSet::from_indices(width, items.iter().copied()))
    };

    if parallel {
        candidates.par_iter().map(count).collect()
    } else {
        candidates.iter().map(count).collect()
    }
}

fn frequent_itemset(width: usize, items: &[usize], count: u64, n: u64) -> FrequentItemset {
    FrequentItemset {
        items: ItemSet::from_indices(width, items.iter().copied()),
        count,
        support: count as f64 / n as f64,
    }
}

/// Every (k-1)-subset of every frequent k-itemset is itself in the result
pub(crate) fn is_downward_closed(frequent: &[FrequentItemset]) -> bool {
    let present: HashSet<&ItemSet> = frequent.iter().map(|f| &f.items).collect();
    frequent
        .iter()
        .filter(|f| f.len() >= 2)
        .all(|f| f.items.indices().all(|idx| present.contains(&f.items.without(idx))))
}
