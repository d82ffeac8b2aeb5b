//! CLI argument parsing for basket

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::MiningConfig;

/// Output format for mining reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "basket")]
#[command(version)]
#[command(about = "Apriori frequent-itemset mining and association rules", long_about = None)]
pub struct Cli {
    /// Transactions CSV: one transaction per line, one item per cell
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Minimum itemset support, in (0, 1) [default: 0.04]
    #[arg(short = 's', long = "min-support", value_name = "FRACTION")]
    pub min_support: Option<f64>,

    /// Minimum rule confidence, in (0, 1] [default: 0.3]
    #[arg(short = 'c', long = "min-confidence", value_name = "FRACTION")]
    pub min_confidence: Option<f64>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Rows in the item frequency table [default: 20]
    #[arg(long = "top-items", value_name = "N")]
    pub top_items: Option<usize>,

    /// Count supports and split itemsets on all cores
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Abort between levels once this many milliseconds have passed
    #[arg(long = "time-budget-ms", value_name = "MS")]
    pub time_budget_ms: Option<u64>,

    /// TOML file with mining parameters; flags override it
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// First line of the input is a header
    #[arg(long = "header")]
    pub header: bool,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Overlay command-line flags on a base configuration
    pub fn apply_to(&self, mut config: MiningConfig) -> MiningConfig {
        if let Some(min_support) = self.min_support {
            config.min_support = min_support;
        }
        if let Some(min_confidence) = self.min_confidence {
            config.min_confidence = min_confidence;
        }
        if let Some(top_items) = self.top_items {
            config.top_items = top_items;
        }
        if self.parallel {
            config.parallel = true;
        }
        if self.time_budget_ms.is_some() {
            config.time_budget_ms = self.time_budget_ms;
        }
        config
    }
}
