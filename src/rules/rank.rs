use std::cmp::Ordering;

use crate::rules::Rule;

/// Order rules by confidence, then support, then lift, all descending
///
/// The sort is stable: rules tied on all three keys keep their generation
/// order. Rules are moved, never modified.
pub fn rank(mut rules: Vec<Rule>) -> Vec<Rule> {
    rules.sort_by(|a, b| {
        descending(a.confidence, b.confidence)
            .then_with(|| descending(a.support, b.support))
            .then_with(|| descending(a.lift, b.lift))
    });
    rules
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
