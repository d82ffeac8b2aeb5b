//! Basket - exact Apriori market-basket analysis
//!
//! This library mines frequent itemsets from transactions with the level-wise
//! Apriori search and derives association rules scored by support,
//! confidence and lift.
//!
//! ```
//! use basket::{apriori, encoder, rules};
//!
//! let encoded = encoder::encode(vec![
//!     vec!["milk", "bread"],
//!     vec!["milk", "bread", "butter"],
//!     vec!["bread", "butter"],
//!     vec!["milk"],
//! ])
//! .unwrap();
//!
//! let frequent = apriori::mine(&encoded, 0.5).unwrap();
//! let ranked = rules::rank(rules::generate(&frequent, 0.6).unwrap());
//!
//! assert_eq!(frequent.len(), 5);
//! assert_eq!(ranked.len(), 4);
//! ```

pub mod apriori;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod encoder;
pub mod error;
pub mod itemset;
pub mod json_output;
pub mod loader;
pub mod pipeline;
pub mod rules;
pub mod support;
pub mod text_output;

pub use error::{MiningError, Result};
