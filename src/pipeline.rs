//! End-to-end mining run
//!
//! raw transactions → encoded transactions → frequent itemsets → rules →
//! ranked rules. Each run starts from fresh inputs and keeps no state between
//! runs, so identical inputs and thresholds give identical reports.

use serde::{Deserialize, Serialize};

use crate::apriori::{mine_with_options, FrequentItemset};
use crate::config::MiningConfig;
use crate::encoder::{encode, ItemFrequency, Vocabulary};
use crate::error::Result;
use crate::rules::{generate_with_options, rank, Rule};

/// Labelled row of the frequent itemset table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsetRow {
    pub items: Vec<String>,
    pub support: f64,
}

/// Labelled row of the ranked rule table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRow {
    pub antecedents: Vec<String>,
    pub consequents: Vec<String>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

/// Everything a run produces
#[derive(Debug, Clone)]
pub struct MiningReport {
    pub vocabulary: Vocabulary,
    pub transactions: usize,
    /// Full table, descending by count
    pub item_frequencies: Vec<ItemFrequency>,
    pub frequent_itemsets: Vec<FrequentItemset>,
    /// Already ranked
    pub rules: Vec<Rule>,
}

impl MiningReport {
    pub fn itemset_rows(&self) -> Vec<ItemsetRow> {
        self.frequent_itemsets
            .iter()
            .map(|f| ItemsetRow {
                items: self.vocabulary.labels_of(&f.items),
                support: f.support,
            })
            .collect()
    }

    pub fn rule_rows(&self) -> Vec<RuleRow> {
        self.rules
            .iter()
            .map(|r| RuleRow {
                antecedents: self.vocabulary.labels_of(&r.antecedent),
                consequents: self.vocabulary.labels_of(&r.consequent),
                support: r.support,
                confidence: r.confidence,
                lift: r.lift,
            })
            .collect()
    }

    /// Longest frequent itemset (0 when nothing is frequent)
    pub fn max_itemset_len(&self) -> usize {
        self.frequent_itemsets
            .iter()
            .map(FrequentItemset::len)
            .max()
            .unwrap_or(0)
    }
}

/// Run the whole pipeline
///
/// Thresholds are validated before any work starts; any error aborts the run
/// without a partial report.
///
/// # Example
/// ```
/// use basket::{config::MiningConfig, pipeline::run};
///
/// let config = MiningConfig {
///     min_support: 0.5,
///     min_confidence: 0.6,
///     ..MiningConfig::default()
/// };
/// let report = run(
///     vec![
///         vec!["milk", "bread"],
///         vec!["milk", "bread", "butter"],
///         vec!["bread", "butter"],
///         vec!["milk"],
///     ],
///     &config,
/// )
/// .unwrap();
///
/// assert_eq!(report.frequent_itemsets.len(), 5);
/// assert_eq!(report.rule_rows()[0].antecedents, vec!["butter"]);
/// ```
pub fn run<T, I, S>(raw: T, config: &MiningConfig) -> Result<MiningReport>
where
    T: IntoIterator<Item = I>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    config.validate()?;

    let encoded = encode(raw)?;
    let frequent = mine_with_options(&encoded, config.min_support, &config.mine_options())?;
    let rules = generate_with_options(&frequent, config.min_confidence, config.parallel)?;
    let rules = rank(rules);

    tracing::info!(
        transactions = encoded.len(),
        itemsets = frequent.len(),
        rules = rules.len(),
        "mining run complete"
    );

    Ok(MiningReport {
        vocabulary: encoded.vocabulary().clone(),
        transactions: encoded.len(),
        item_frequencies: encoded.item_frequencies(),
        frequent_itemsets: frequent,
        rules,
    })
}
