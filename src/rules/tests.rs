// Rule generation tests
//
// Hand-checked grocery rules plus the partition law, the confidence and lift
// formulas, and the degenerate-support guard.

use super::*;
use crate::apriori::{mine, FrequentItemset};
use crate::encoder::{encode, EncodedTransactions};
use crate::error::MiningError;
use crate::itemset::ItemSet;

const TOLERANCE: f64 = 1e-9;

fn groceries() -> EncodedTransactions {
    encode(vec![
        vec!["milk", "bread"],
        vec!["milk", "bread", "butter"],
        vec!["bread", "butter"],
        vec!["milk"],
    ])
    .unwrap()
}

fn find<'a>(
    encoded: &EncodedTransactions,
    rules: &'a [Rule],
    antecedent: &[&str],
    consequent: &[&str],
) -> Option<&'a Rule> {
    let vocab = encoded.vocabulary();
    let a = vocab.itemset(antecedent)?;
    let c = vocab.itemset(consequent)?;
    rules
        .iter()
        .find(|r| r.antecedent == a && r.consequent == c)
}

/// milk → bread and bread → milk at 0.5 / 0.75
#[test]
fn test_grocery_rules() {
    let encoded = groceries();
    let frequent = mine(&encoded, 0.5).unwrap();
    let rules = generate(&frequent, 0.6).unwrap();

    let milk_bread = find(&encoded, &rules, &["milk"], &["bread"]).unwrap();
    assert!((milk_bread.confidence - 0.5 / 0.75).abs() < TOLERANCE);
    assert_eq!(milk_bread.support, 0.5);
    assert!((milk_bread.lift - (0.5 / 0.75) / 0.75).abs() < TOLERANCE);

    let bread_milk = find(&encoded, &rules, &["bread"], &["milk"]).unwrap();
    assert!((bread_milk.confidence - milk_bread.confidence).abs() < TOLERANCE);

    // butter → bread holds every time; bread → butter only 2 of 3
    let butter_bread = find(&encoded, &rules, &["butter"], &["bread"]).unwrap();
    assert_eq!(butter_bread.confidence, 1.0);
    assert!(find(&encoded, &rules, &["bread"], &["butter"]).is_some());

    assert_eq!(rules.len(), 4);
}

#[test]
fn test_high_confidence_filters() {
    let encoded = groceries();
    let frequent = mine(&encoded, 0.5).unwrap();
    let rules = generate(&frequent, 1.0).unwrap();

    assert_eq!(rules.len(), 1);
    assert!(find(&encoded, &rules, &["butter"], &["bread"]).is_some());
}

/// Singletons only: an empty rule list, not an error
#[test]
fn test_no_rules_from_singletons() {
    let encoded = encode(vec![vec!["tea"], vec!["tea"], vec!["tea", " "]]).unwrap();
    let frequent = mine(&encoded, 0.5).unwrap();
    assert_eq!(frequent.len(), 1);

    let rules = generate(&frequent, 0.1).unwrap();
    assert!(rules.is_empty());
}

#[test]
fn test_invalid_min_confidence() {
    let encoded = groceries();
    let frequent = mine(&encoded, 0.5).unwrap();

    for bad in [0.0, -0.1, 1.5, f64::NAN] {
        assert!(matches!(
            generate(&frequent, bad),
            Err(MiningError::InvalidThreshold { name: "min_confidence", .. })
        ));
    }
}

/// Antecedent and consequent partition the parent itemset
#[test]
fn test_partition_law() {
    let row = ["a", "b", "c", "d"];
    let mut raw = vec![row.to_vec(); 4];
    raw.push(vec!["a", "b"]);
    raw.push(vec!["c"]);
    let encoded = encode(raw).unwrap();
    let frequent = mine(&encoded, 0.3).unwrap();
    let rules = generate(&frequent, 0.1).unwrap();

    // 4-itemset alone contributes 2^4 - 2 splits
    assert!(rules.len() >= 14);
    for rule in &rules {
        assert!(!rule.antecedent.is_empty());
        assert!(!rule.consequent.is_empty());
        assert!(rule.antecedent.is_disjoint(&rule.consequent));
        assert!(frequent.iter().any(|f| f.items == rule.itemset()));
    }
}

/// confidence = support / Support(antecedent), lift = confidence / Support(consequent)
#[test]
fn test_metric_formulas() {
    let encoded = encode(vec![
        vec!["a", "b", "c"],
        vec!["a", "b"],
        vec!["a", "c"],
        vec!["b", "c"],
        vec!["a", "b", "c"],
        vec!["a"],
    ])
    .unwrap();
    let frequent = mine(&encoded, 0.2).unwrap();
    let rules = generate(&frequent, 0.01).unwrap();
    let support = |set: &ItemSet| {
        frequent
            .iter()
            .find(|f| &f.items == set)
            .map(|f| f.support)
            .unwrap()
    };

    assert!(!rules.is_empty());
    for rule in &rules {
        let expected_conf = rule.support / support(&rule.antecedent);
        assert!((rule.confidence - expected_conf).abs() < TOLERANCE);
        assert!(rule.confidence > 0.0 && rule.confidence <= 1.0);

        let expected_lift = rule.confidence / support(&rule.consequent);
        assert!((rule.lift - expected_lift).abs() < TOLERANCE);
        assert!(rule.lift > 0.0);
    }
}

#[test]
fn test_no_duplicate_rules() {
    let row = ["a", "b", "c"];
    let encoded = encode(vec![row.to_vec(); 3]).unwrap();
    let frequent = mine(&encoded, 0.5).unwrap();
    let rules = generate(&frequent, 0.5).unwrap();

    // 3 pairs x 2 splits + 1 triple x 6 splits
    assert_eq!(rules.len(), 12);
    for (i, a) in rules.iter().enumerate() {
        for b in &rules[i + 1..] {
            assert!(a.antecedent != b.antecedent || a.consequent != b.consequent);
        }
    }
}

#[test]
fn test_generation_order() {
    let row = ["a", "b", "c"];
    let encoded = encode(vec![row.to_vec(); 2]).unwrap();
    let frequent = mine(&encoded, 0.5).unwrap();
    let rules = generate(&frequent, 0.5).unwrap();

    let triple: Vec<Vec<usize>> = rules
        .iter()
        .filter(|r| r.itemset().len() == 3)
        .map(|r| r.antecedent.to_indices())
        .collect();
    assert_eq!(
        triple,
        vec![vec![0], vec![1], vec![2], vec![0, 1], vec![0, 2], vec![1, 2]]
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let raw: Vec<Vec<String>> = (0..120)
        .map(|i| {
            (0..8)
                .filter(|j| (i + j) % 3 != 0 || j % 2 == 0)
                .map(|j| format!("sku-{j}"))
                .collect()
        })
        .collect();
    let encoded = encode(raw).unwrap();
    let frequent = mine(&encoded, 0.25).unwrap();

    assert_eq!(
        generate_with_options(&frequent, 0.4, false).unwrap(),
        generate_with_options(&frequent, 0.4, true).unwrap()
    );
}

/// A hand-built input that breaks closure surfaces DivisionDegenerate
#[test]
fn test_missing_subset_is_degenerate() {
    let frequent = vec![
        FrequentItemset {
            items: ItemSet::from_indices(2, [0]),
            count: 2,
            support: 0.5,
        },
        FrequentItemset {
            items: ItemSet::from_indices(2, [0, 1]),
            count: 2,
            support: 0.5,
        },
    ];

    assert_eq!(
        generate(&frequent, 0.5),
        Err(MiningError::DivisionDegenerate { itemset: vec![1] })
    );
}

#[test]
fn test_ranked_grocery_rules() {
    let encoded = groceries();
    let frequent = mine(&encoded, 0.5).unwrap();
    let ranked = rank(generate(&frequent, 0.6).unwrap());

    assert_eq!(ranked[0].confidence, 1.0);
    for pair in ranked.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
}
