//! CSV transaction loading
//!
//! One transaction per line, one item per comma-separated cell. Short
//! transactions in fixed-width exports are padded with empty cells; those are
//! kept here and dropped later by the encoder. Fields may be double-quoted,
//! with `""` standing for a literal quote.

use std::path::Path;

use thiserror::Error;

/// Errors reading transaction files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read transactions: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },
}

/// Load transactions from a CSV file
pub fn load_csv(path: &Path, has_header: bool) -> Result<Vec<Vec<String>>, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let transactions = parse_csv(&text, has_header)?;
    tracing::debug!(
        path = %path.display(),
        transactions = transactions.len(),
        "loaded transactions"
    );
    Ok(transactions)
}

/// Parse CSV text into raw transactions
///
/// Completely empty lines are skipped. Cells are returned untrimmed.
///
/// # Example
/// ```
/// use basket::loader::parse_csv;
///
/// let rows = parse_csv("milk,bread,,\n\"jam, apricot\",milk\n", false).unwrap();
/// assert_eq!(rows[0], vec!["milk", "bread", "", ""]);
/// assert_eq!(rows[1], vec!["jam, apricot", "milk"]);
/// ```
pub fn parse_csv(text: &str, has_header: bool) -> Result<Vec<Vec<String>>, LoadError> {
    let mut transactions = Vec::new();

    for (line_no, line) in text.lines().enumerate().skip(usize::from(has_header)) {
        if line.trim().is_empty() {
            continue;
        }
        transactions.push(split_line(line, line_no + 1)?);
    }

    Ok(transactions)
}

fn split_line(line: &str, line_no: usize) -> Result<Vec<String>, LoadError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(LoadError::UnterminatedQuote { line: line_no });
    }
    fields.push(field);
    Ok(fields)
}
