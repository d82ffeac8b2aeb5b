//! Error types for the mining pipeline
//!
//! Every failure is fail-fast: a bad threshold or empty input aborts the whole
//! run. Empty itemset or rule results are not errors.

use std::time::Duration;
use thiserror::Error;

/// Errors raised by encoding, mining and rule generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiningError {
    /// No transactions, or nothing left of the vocabulary after cleaning
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A threshold outside its valid interval (NaN included)
    #[error("invalid {name}: {value} (must be in {range})")]
    InvalidThreshold {
        name: &'static str,
        value: f64,
        range: &'static str,
    },

    /// Antecedent or consequent support missing or zero during rule scoring.
    /// Unreachable while downward closure holds.
    #[error("degenerate support for itemset with vocabulary indices {itemset:?}")]
    DivisionDegenerate { itemset: Vec<usize> },

    /// Wall-clock budget ran out at a level boundary
    #[error("time budget of {budget:?} exceeded after {completed_levels} level(s)")]
    BudgetExceeded {
        completed_levels: usize,
        budget: Duration,
    },
}

/// Result type for mining operations
pub type Result<T> = std::result::Result<T, MiningError>;

/// Reject `value` unless it lies in the open interval (0, 1)
pub(crate) fn check_min_support(value: f64) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(MiningError::InvalidThreshold {
            name: "min_support",
            value,
            range: "(0, 1)",
        })
    }
}

/// Reject `value` unless it lies in the half-open interval (0, 1]
pub(crate) fn check_min_confidence(value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(MiningError::InvalidThreshold {
            name: "min_confidence",
            value,
            range: "(0, 1]",
        })
    }
}
