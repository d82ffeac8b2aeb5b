//! JSON output format for mining reports
//!
//! `--format json` emits a single `basket-json-v1` document.

use serde::{Deserialize, Serialize};

use crate::config::MiningConfig;
use crate::encoder::ItemFrequency;
use crate::pipeline::{ItemsetRow, MiningReport, RuleRow};

/// Thresholds the report was mined with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonParameters {
    pub min_support: f64,
    pub min_confidence: f64,
}

/// Summary counts for the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Number of transactions (N)
    pub transactions: usize,
    /// Distinct items after cleaning
    pub vocabulary: usize,
    pub frequent_itemsets: usize,
    /// Size of the longest frequent itemset
    pub max_itemset_len: usize,
    pub rules: usize,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    pub parameters: JsonParameters,
    /// Item frequency table, truncated to `top_items`
    pub item_frequencies: Vec<ItemFrequency>,
    pub frequent_itemsets: Vec<ItemsetRow>,
    /// Rules in ranked order
    pub rules: Vec<RuleRow>,
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Build the document for a finished run
    pub fn from_report(report: &MiningReport, config: &MiningConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "basket-json-v1".to_string(),
            parameters: JsonParameters {
                min_support: config.min_support,
                min_confidence: config.min_confidence,
            },
            item_frequencies: report
                .item_frequencies
                .iter()
                .take(config.top_items)
                .cloned()
                .collect(),
            frequent_itemsets: report.itemset_rows(),
            rules: report.rule_rows(),
            summary: JsonSummary {
                transactions: report.transactions,
                vocabulary: report.vocabulary.len(),
                frequent_itemsets: report.frequent_itemsets.len(),
                max_itemset_len: report.max_itemset_len(),
                rules: report.rules.len(),
            },
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
