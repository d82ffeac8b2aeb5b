//! CSV output format for mining reports
//!
//! Three tables separated by a blank line: item frequencies, frequent
//! itemsets, ranked rules. Itemsets are written as `;`-joined labels.

use crate::encoder::ItemFrequency;
use crate::pipeline::{ItemsetRow, RuleRow};

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    items: Vec<ItemFrequency>,
    itemsets: Vec<ItemsetRow>,
    rules: Vec<RuleRow>,
}

impl CsvOutput {
    pub fn new(items: Vec<ItemFrequency>, itemsets: Vec<ItemsetRow>, rules: Vec<RuleRow>) -> Self {
        Self {
            items,
            itemsets,
            rules,
        }
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_itemset(items: &[String]) -> String {
        Self::escape_field(&items.join(";"))
    }

    /// `item,count` table
    pub fn items_csv(&self) -> String {
        let mut output = String::from("item,count\n");
        for item in &self.items {
            output.push_str(&format!("{},{}\n", Self::escape_field(&item.item), item.count));
        }
        output
    }

    /// `itemset,support` table
    pub fn itemsets_csv(&self) -> String {
        let mut output = String::from("itemset,support\n");
        for row in &self.itemsets {
            output.push_str(&format!(
                "{},{}\n",
                Self::format_itemset(&row.items),
                row.support
            ));
        }
        output
    }

    /// `antecedents,consequents,support,confidence,lift` table
    pub fn rules_csv(&self) -> String {
        let mut output = String::from("antecedents,consequents,support,confidence,lift\n");
        for rule in &self.rules {
            output.push_str(&format!(
                "{},{},{},{},{}\n",
                Self::format_itemset(&rule.antecedents),
                Self::format_itemset(&rule.consequents),
                rule.support,
                rule.confidence,
                rule.lift
            ));
        }
        output
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        [self.items_csv(), self.itemsets_csv(), self.rules_csv()].join("\n")
    }
}
