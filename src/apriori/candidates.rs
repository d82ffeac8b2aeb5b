use std::collections::HashSet;

use crate::itemset::ItemSet;

/// Outcome of one join + prune step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateLevel {
    /// Surviving size-k candidates as ascending vocabulary indices, in
    /// lexicographic order
    pub candidates: Vec<Vec<usize>>,

    /// Candidates produced by the join
    pub joined: usize,

    /// Candidates discarded because some (k-1)-subset was not frequent
    pub pruned: usize,
}

/// Build size-k candidates from the frequent itemsets of size k-1
///
/// `previous` must hold distinct itemsets of equal size in lexicographic
/// order. Two itemsets are joined when they agree on their first k-2 items;
/// the candidate is the shared prefix followed by both last items. Because the
/// input is sorted and distinct, every candidate is produced exactly once and
/// the output is again lexicographic.
///
/// A candidate survives only if each of its (k-1)-subsets is in `previous`.
/// The two subsets that drop one of the last two items are the join parents
/// and are skipped.
///
/// # Example
/// ```
/// use basket::apriori::generate_candidates;
///
/// // {0,1}, {0,2}, {1,2} are frequent; {0,3} is frequent but {1,3} is not.
/// let previous = vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2]];
/// let level = generate_candidates(&previous, 4);
///
/// assert_eq!(level.candidates, vec![vec![0, 1, 2]]);
/// assert_eq!(level.joined, 3);
/// assert_eq!(level.pruned, 2);
/// ```
pub fn generate_candidates(previous: &[Vec<usize>], width: usize) -> CandidateLevel {
    let mut level = CandidateLevel::default();
    let Some(k_minus_1) = previous.first().map(Vec::len) else {
        return level;
    };
    let prefix_len = k_minus_1.saturating_sub(1);

    let frequent: HashSet<ItemSet> = previous
        .iter()
        .map(|items| ItemSet::from_indices(width, items.iter().copied()))
        .collect();

    for (i, left) in previous.iter().enumerate() {
        let prefix = &left[..prefix_len];

        for right in previous[i + 1..]
            .iter()
            .take_while(|right| &right[..prefix_len] == prefix)
        {
            let mut candidate = left.clone();
            candidate.push(right[k_minus_1 - 1]);
            level.joined += 1;

            if has_infrequent_subset(&candidate, &frequent, width) {
                level.pruned += 1;
            } else {
                level.candidates.push(candidate);
            }
        }
    }

    level
}

/// True when some (k-1)-subset of `candidate` is missing from `frequent`
fn has_infrequent_subset(candidate: &[usize], frequent: &HashSet<ItemSet>, width: usize) -> bool {
    let k = candidate.len();
    if k <= 2 {
        return false;
    }

    (0..k - 2).any(|skip| {
        let subset = ItemSet::from_indices(
            width,
            candidate
                .iter()
                .enumerate()
                .filter(|&(pos, _)| pos != skip)
                .map(|(_, &idx)| idx),
        );
        !frequent.contains(&subset)
    })
}
