//! Canonical query strings
//!
//! One canonical text per {operation, table} pair. The select-list mapping
//! is the single source of truth for both directions: [`render`] produces
//! the string and [`decode`] recovers the pair, so the renderer and the
//! round-trip tests cannot drift apart through duplicated literals.
//!
//! Grammar (keywords case-insensitive):
//! `SELECT (COUNT(*) as count | AVG(amount) as avg | SUM(amount) as sum | *)
//!  FROM (sales|customers|products)`

use crate::classifier::{Intent, Operation};
use crate::store::TableName;

/// Canonical select list for an operation.
fn select_list(operation: Operation) -> &'static str {
    match operation {
        Operation::Count => "COUNT(*) as count",
        Operation::Avg => "AVG(amount) as avg",
        Operation::Sum => "SUM(amount) as sum",
        Operation::Select => "*",
    }
}

/// Effective target table for an operation.
///
/// AVG and SUM always run against `sales.amount`, whatever table the
/// classifier picked. This is a known quirk of the original rule set,
/// preserved deliberately rather than fixed.
pub fn effective_table(operation: Operation, table: TableName) -> TableName {
    match operation {
        Operation::Avg | Operation::Sum => TableName::Sales,
        Operation::Count | Operation::Select => table,
    }
}

/// Canonical query string for an {operation, table} pair.
pub fn canonical_query(operation: Operation, table: TableName) -> String {
    format!(
        "SELECT {} FROM {}",
        select_list(operation),
        effective_table(operation, table)
    )
}

/// Renders an intent to its canonical query string. Pure and total;
/// validity is not consulted here.
pub fn render(intent: &Intent) -> String {
    canonical_query(intent.operation, intent.table)
}

/// Reference decoder: recovers the {operation, table} pair from a canonical
/// query string, or `None` for text outside the grammar.
///
/// The interpreter does not use this; it exists so tests can prove the
/// rendered string still means what the intent meant.
pub fn decode(query: &str) -> Option<(Operation, TableName)> {
    let lowered = query.to_lowercase();
    let rest = lowered.strip_prefix("select ")?;
    let (head, tail) = rest.split_once(" from ")?;

    let operation = Operation::ALL
        .into_iter()
        .find(|op| select_list(*op).to_lowercase() == head.trim())?;
    let table = TableName::ALL
        .into_iter()
        .find(|table| table.as_str() == tail.trim())?;

    Some((operation, table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_renders_classified_table() {
        assert_eq!(
            canonical_query(Operation::Count, TableName::Customers),
            "SELECT COUNT(*) as count FROM customers"
        );
    }

    #[test]
    fn test_aggregates_pin_sales() {
        assert_eq!(
            canonical_query(Operation::Avg, TableName::Customers),
            "SELECT AVG(amount) as avg FROM sales"
        );
        assert_eq!(
            canonical_query(Operation::Sum, TableName::Products),
            "SELECT SUM(amount) as sum FROM sales"
        );
    }

    #[test]
    fn test_decode_rejects_non_canonical_text() {
        assert_eq!(decode("DROP TABLE sales"), None);
        assert_eq!(decode("SELECT MAX(amount) as max FROM sales"), None);
        assert_eq!(decode("SELECT * FROM orders"), None);
    }

    #[test]
    fn test_decode_is_case_insensitive_on_keywords() {
        assert_eq!(
            decode("select count(*) as count from sales"),
            Some((Operation::Count, TableName::Sales))
        );
    }
}
