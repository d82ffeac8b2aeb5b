use std::collections::HashMap;

use rayon::prelude::*;

use crate::apriori::FrequentItemset;
use crate::error::{check_min_confidence, MiningError, Result};
use crate::itemset::{Combinations, ItemSet};

/// Association rule `antecedent → consequent`
///
/// The two sides partition a frequent itemset: disjoint, both non-empty, and
/// their union is the parent itemset.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: ItemSet,
    pub consequent: ItemSet,

    /// Support of `antecedent ∪ consequent`
    pub support: f64,

    /// `support / Support(antecedent)`, in (0, 1]
    pub confidence: f64,

    /// `confidence / Support(consequent)`; above 1 means positive association
    pub lift: f64,
}

impl Rule {
    /// The frequent itemset this rule was split from
    pub fn itemset(&self) -> ItemSet {
        self.antecedent.union(&self.consequent)
    }
}

/// Generate rules sequentially
///
/// # Example
/// ```
/// use basket::{apriori::mine, encoder::encode, rules::generate};
///
/// let encoded = encode(vec![vec!["a", "b"], vec!["a", "b"], vec!["a"]]).unwrap();
/// let frequent = mine(&encoded, 0.5).unwrap();
/// let rules = generate(&frequent, 0.9).unwrap();
///
/// // b → a always holds; a → b only in 2 of 3 baskets
/// assert_eq!(rules.len(), 1);
/// assert_eq!(rules[0].confidence, 1.0);
/// ```
pub fn generate(frequent: &[FrequentItemset], min_confidence: f64) -> Result<Vec<Rule>> {
    generate_with_options(frequent, min_confidence, false)
}

/// Generate every rule with confidence ≥ `min_confidence`
///
/// Rules come out grouped by parent itemset (input order), then by
/// antecedent size, then lexicographically by antecedent. The parallel path
/// splits itemsets across the rayon pool and concatenates per-itemset results
/// in input order, so both paths return the same list.
pub fn generate_with_options(
    frequent: &[FrequentItemset],
    min_confidence: f64,
    parallel: bool,
) -> Result<Vec<Rule>> {
    check_min_confidence(min_confidence)?;

    let lookup: HashMap<&ItemSet, &FrequentItemset> =
        frequent.iter().map(|f| (&f.items, f)).collect();
    let split = |parent: &FrequentItemset| split_itemset(parent, &lookup, min_confidence);

    let per_itemset: Vec<Vec<Rule>> = if parallel {
        frequent
            .par_iter()
            .filter(|f| f.len() >= 2)
            .map(split)
            .collect::<Result<_>>()?
    } else {
        frequent
            .iter()
            .filter(|f| f.len() >= 2)
            .map(split)
            .collect::<Result<_>>()?
    };

    let rules: Vec<Rule> = per_itemset.into_iter().flatten().collect();
    tracing::debug!(
        itemsets = frequent.len(),
        rules = rules.len(),
        min_confidence,
        "generated association rules"
    );
    Ok(rules)
}

/// All qualifying rules from one parent itemset
fn split_itemset(
    parent: &FrequentItemset,
    lookup: &HashMap<&ItemSet, &FrequentItemset>,
    min_confidence: f64,
) -> Result<Vec<Rule>> {
    let members = parent.items.to_indices();
    let mut rules = Vec::new();

    for size in 1..members.len() {
        for chosen in Combinations::new(&members, size) {
            let antecedent = parent.items.pick(&chosen);
            let consequent = parent.items.difference(&antecedent);

            let antecedent_support = support_of(&antecedent, lookup)?;
            let consequent_support = support_of(&consequent, lookup)?;

            let confidence = parent.count as f64 / antecedent_support.count as f64;
            if confidence >= min_confidence {
                rules.push(Rule {
                    antecedent,
                    consequent,
                    support: parent.support,
                    confidence,
                    lift: confidence / consequent_support.support,
                });
            }
        }
    }

    Ok(rules)
}

/// Frequent entry for a subset; missing or zero means closure was broken upstream
fn support_of<'a>(
    set: &ItemSet,
    lookup: &HashMap<&ItemSet, &'a FrequentItemset>,
) -> Result<&'a FrequentItemset> {
    match lookup.get(set) {
        Some(entry) if entry.count > 0 && entry.support > 0.0 => Ok(*entry),
        _ => {
            tracing::error!(itemset = ?set.to_indices(), "subset missing from frequent itemsets");
            Err(MiningError::DivisionDegenerate {
                itemset: set.to_indices(),
            })
        }
    }
}
