//! Property-based tests for the mining pipeline
//!
//! Random baskets over a small vocabulary so that deep itemsets actually occur.
//!
//! Properties tested:
//! 1. Downward closure of the frequent itemsets
//! 2. Monotonicity in both thresholds
//! 3. Support bounds and anti-monotone support
//! 4. Rule partition law and metric formulas
//! 5. Idempotence and parallel/sequential equivalence

use std::collections::HashMap;

use basket::apriori::{mine, mine_with_options, FrequentItemset, MineOptions};
use basket::encoder::encode;
use basket::itemset::ItemSet;
use basket::rules::{generate, generate_with_options, rank};
use basket::support::SupportCounter;
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

fn baskets() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e", "f", " "]), 0..6)
            .prop_map(|items| items.into_iter().map(String::from).collect::<Vec<String>>()),
        1..40,
    )
    .prop_filter("needs at least one item", |rows: &Vec<Vec<String>>| {
        rows.iter().flatten().any(|item| !item.trim().is_empty())
    })
}

fn by_itemset(frequent: &[FrequentItemset]) -> HashMap<&ItemSet, &FrequentItemset> {
    frequent.iter().map(|f| (&f.items, f)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_downward_closure(raw in baskets(), min_support in 0.05f64..0.9) {
        let encoded = encode(&raw).unwrap();
        let frequent = mine(&encoded, min_support).unwrap();
        let index = by_itemset(&frequent);

        for f in frequent.iter().filter(|f| f.len() >= 2) {
            for idx in f.items.indices() {
                let subset = f.items.without(idx);
                prop_assert!(index.contains_key(&subset), "missing subset of {:?}", f.items);
            }
        }
    }

    #[test]
    fn prop_support_bounds(raw in baskets(), min_support in 0.05f64..0.9) {
        let encoded = encode(&raw).unwrap();
        let counter = SupportCounter::new(&encoded);
        let frequent = mine(&encoded, min_support).unwrap();
        let index = by_itemset(&frequent);

        for f in &frequent {
            prop_assert!(f.support > 0.0 && f.support <= 1.0);
            prop_assert!(f.support >= min_support);
            prop_assert_eq!(f.count, counter.count_by_scan(&f.items));

            for idx in f.items.indices().filter(|_| f.len() >= 2) {
                let parent = index[&f.items.without(idx)];
                prop_assert!(f.support <= parent.support);
            }
        }
    }

    #[test]
    fn prop_support_monotone(raw in baskets(), low in 0.05f64..0.5, delta in 0.0f64..0.45) {
        let encoded = encode(&raw).unwrap();
        let loose = mine(&encoded, low).unwrap();
        let tight = mine(&encoded, low + delta).unwrap();

        prop_assert!(tight.len() <= loose.len());
        let loose_sets: Vec<_> = loose.iter().map(|f| &f.items).collect();
        for f in &tight {
            prop_assert!(loose_sets.contains(&&f.items));
        }
    }

    #[test]
    fn prop_confidence_monotone(raw in baskets(), low in 0.05f64..0.5, delta in 0.0f64..0.5) {
        let encoded = encode(&raw).unwrap();
        let frequent = mine(&encoded, 0.1).unwrap();

        let loose = generate(&frequent, low).unwrap();
        let tight = generate(&frequent, low + delta).unwrap();
        prop_assert!(tight.len() <= loose.len());
    }

    #[test]
    fn prop_rule_laws(raw in baskets(), min_support in 0.05f64..0.6, min_confidence in 0.05f64..1.0) {
        let encoded = encode(&raw).unwrap();
        let frequent = mine(&encoded, min_support).unwrap();
        let index = by_itemset(&frequent);
        let rules = generate(&frequent, min_confidence).unwrap();

        for rule in &rules {
            prop_assert!(!rule.antecedent.is_empty() && !rule.consequent.is_empty());
            prop_assert!(rule.antecedent.is_disjoint(&rule.consequent));

            let parent = index[&rule.itemset()];
            prop_assert_eq!(rule.support, parent.support);

            let antecedent = index[&rule.antecedent];
            let consequent = index[&rule.consequent];
            prop_assert!((rule.confidence - rule.support / antecedent.support).abs() < TOLERANCE);
            prop_assert!((rule.lift - rule.confidence / consequent.support).abs() < TOLERANCE);
            prop_assert!(rule.confidence >= min_confidence);
            prop_assert!(rule.confidence <= 1.0 + TOLERANCE);
            prop_assert!(rule.lift > 0.0);
        }
    }

    #[test]
    fn prop_ranked_order(raw in baskets(), min_confidence in 0.05f64..1.0) {
        let encoded = encode(&raw).unwrap();
        let frequent = mine(&encoded, 0.1).unwrap();
        let generated = generate(&frequent, min_confidence).unwrap();
        let ranked = rank(generated.clone());

        prop_assert_eq!(ranked.len(), generated.len());
        for pair in ranked.windows(2) {
            let key = |r: &basket::rules::Rule| (r.confidence, r.support, r.lift);
            prop_assert!(key(&pair[0]) >= key(&pair[1]));
        }
    }

    #[test]
    fn prop_idempotent_and_parallel_equivalent(raw in baskets(), min_support in 0.05f64..0.6) {
        let encoded = encode(&raw).unwrap();

        let first = mine(&encoded, min_support).unwrap();
        let second = mine(&encoded, min_support).unwrap();
        let parallel = mine_with_options(
            &encoded,
            min_support,
            &MineOptions { parallel: true, time_budget: None },
        )
        .unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &parallel);

        let rules = rank(generate(&first, 0.2).unwrap());
        let parallel_rules = rank(generate_with_options(&parallel, 0.2, true).unwrap());
        prop_assert_eq!(rules, parallel_rules);
    }
}
