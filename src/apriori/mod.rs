// Level-wise Apriori search for frequent itemsets
//
// This module implements the exact Apriori formulation: frequent singletons
// seed level 1, each further level is built by joining the previous level
// on a shared prefix, pruning candidates with an infrequent subset, and
// counting the survivors.
//
// Scientific Foundation:
// [1] Agrawal, R., & Srikant, R. (1994). Fast algorithms for mining association
//     rules. Proceedings of the 20th VLDB Conference.
//
// Key Insight: support is anti-monotone. Every subset of a frequent itemset is
// frequent, so a candidate with one infrequent subset can be discarded without
// ever touching the transactions.

mod candidates;
mod miner;

pub use candidates::{generate_candidates, CandidateLevel};
pub use miner::{mine, mine_with_options, FrequentItemset, MineOptions};
