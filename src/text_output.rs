//! Human-readable report (default `--format text`)

use std::fmt::Write;

use crate::pipeline::{MiningReport, RuleRow};

fn braces(items: &[String]) -> String {
    format!("{{{}}}", items.join(", "))
}

fn rule_line(rule: &RuleRow) -> String {
    format!(
        "{} -> {}  support={:.4} confidence={:.4} lift={:.4}",
        braces(&rule.antecedents),
        braces(&rule.consequents),
        rule.support,
        rule.confidence,
        rule.lift
    )
}

/// Render frequent items, frequent itemsets and ranked rules
pub fn render(report: &MiningReport, top_items: usize) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "=== Frequent Items (top {top_items}) ===");
    let width = report
        .item_frequencies
        .iter()
        .take(top_items)
        .map(|f| f.item.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    for freq in report.item_frequencies.iter().take(top_items) {
        let _ = writeln!(out, "{:<width$}  {}", freq.item, freq.count);
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "=== Frequent Itemsets ({}) ===",
        report.frequent_itemsets.len()
    );
    let itemsets = report.itemset_rows();
    if itemsets.is_empty() {
        out.push_str("no frequent itemsets\n");
    }
    for row in &itemsets {
        let _ = writeln!(out, "{}  support={:.4}", braces(&row.items), row.support);
    }
    out.push('\n');

    let _ = writeln!(out, "=== Association Rules ({}) ===", report.rules.len());
    let rules = report.rule_rows();
    if rules.is_empty() {
        out.push_str("no rules found\n");
    }
    for rule in &rules {
        out.push_str(&rule_line(rule));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MiningConfig;
    use crate::pipeline::run;

    fn groceries(min_support: f64, min_confidence: f64) -> MiningReport {
        let config = MiningConfig {
            min_support,
            min_confidence,
            ..MiningConfig::default()
        };
        run(
            vec![
                vec!["milk", "bread"],
                vec!["milk", "bread", "butter"],
                vec!["bread", "butter"],
                vec!["milk"],
            ],
            &config,
        )
        .unwrap()
    }

    #[test]
    fn test_render_sections() {
        let text = render(&groceries(0.5, 0.6), 20);

        assert!(text.contains("=== Frequent Items (top 20) ==="));
        assert!(text.contains("{bread, milk}  support=0.5000"));
        assert!(text.contains("=== Association Rules (4) ==="));
        assert!(text.contains(
            "{butter} -> {bread}  support=0.5000 confidence=1.0000 lift=1.3333"
        ));
    }

    #[test]
    fn test_render_top_items_limit() {
        let text = render(&groceries(0.5, 0.6), 1);
        let items_section = text.split("\n\n").next().unwrap();
        assert_eq!(items_section.lines().count(), 2);
    }

    #[test]
    fn test_render_empty_results() {
        let text = render(&groceries(0.9, 0.5), 5);
        assert!(text.contains("no frequent itemsets"));
        assert!(text.contains("no rules found"));
    }
}
