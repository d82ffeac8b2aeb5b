//! Support counting over encoded transactions
//!
//! Each vocabulary item gets a posting list of the transaction IDs that
//! contain it. The support count of a candidate is the cardinality of the
//! intersection of its members' posting lists, so a candidate never triggers
//! a rescan of every row. Counts are exact.

use roaring::RoaringBitmap;

use crate::encoder::EncodedTransactions;
use crate::itemset::ItemSet;

/// Posting-list support counter, shared read-only across workers
#[derive(Debug, Clone)]
pub struct SupportCounter<'a> {
    encoded: &'a EncodedTransactions,
    tid_lists: Vec<RoaringBitmap>,
}

impl<'a> SupportCounter<'a> {
    /// Build one posting list per vocabulary item (transaction IDs are `u32`)
    pub fn new(encoded: &'a EncodedTransactions) -> Self {
        let mut tid_lists = vec![RoaringBitmap::new(); encoded.vocabulary().len()];
        for (tid, row) in (0u32..).zip(encoded.rows()) {
            for idx in row.indices() {
                tid_lists[idx].insert(tid);
            }
        }
        Self { encoded, tid_lists }
    }

    pub fn encoded(&self) -> &'a EncodedTransactions {
        self.encoded
    }

    /// Number of transactions (N)
    pub fn transactions(&self) -> u64 {
        self.encoded.len() as u64
    }

    /// Transactions containing a single vocabulary item
    pub fn item_count(&self, idx: usize) -> u64 {
        self.tid_lists.get(idx).map_or(0, RoaringBitmap::len)
    }

    /// Transactions whose row is a superset of `candidate`
    pub fn count(&self, candidate: &ItemSet) -> u64 {
        let Some(mut lists) = candidate
            .indices()
            .map(|idx| self.tid_lists.get(idx))
            .collect::<Option<Vec<&RoaringBitmap>>>()
        else {
            return 0;
        };

        match lists.len() {
            0 => self.transactions(),
            1 => lists[0].len(),
            2 => lists[0].intersection_len(lists[1]),
            _ => {
                // Smallest list first keeps the running intersection small.
                lists.sort_by_key(|l| l.len());
                let mut acc = lists[0].clone();
                for list in &lists[1..] {
                    acc &= *list;
                    if acc.is_empty() {
                        return 0;
                    }
                }
                acc.len()
            }
        }
    }

    /// Fraction of transactions containing `candidate`
    pub fn support(&self, candidate: &ItemSet) -> f64 {
        let n = self.transactions();
        if n == 0 {
            return 0.0;
        }
        self.count(candidate) as f64 / n as f64
    }

    /// Reference count by full scan: rows where `row & candidate == candidate`
    pub fn count_by_scan(&self, candidate: &ItemSet) -> u64 {
        self.encoded
            .rows()
            .iter()
            .filter(|row| candidate.is_subset_of(row))
            .count() as u64
    }
}
