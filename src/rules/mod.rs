// Association rule generation and ranking
//
// Every frequent itemset of size two or more is split into all antecedent /
// consequent pairs. Each split is scored from supports that the miner already
// computed, so this stage never touches the transactions.
//
// Scientific Foundation:
// [1] Agrawal, R., & Srikant, R. (1994). Fast algorithms for mining association
//     rules. Proceedings of the 20th VLDB Conference.
// [2] Brin, S., Motwani, R., Ullman, J. D., & Tsur, S. (1997). Dynamic itemset
//     counting and implication rules for market basket data. SIGMOD. (lift)

mod generate;
mod rank;

pub use generate::{generate, generate_with_options, Rule};
pub use rank::rank;

#[cfg(test)]
mod tests;
