//! Table store and table naming

use std::fmt;

use serde_json::Value;

use super::seed;

/// Names of the tables the engine recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableName {
    Sales,
    Customers,
    Products,
}

impl TableName {
    /// All recognized table names, in declaration order.
    pub const ALL: [TableName; 3] = [TableName::Sales, TableName::Customers, TableName::Products];

    /// Returns the lowercase table name as it appears in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Sales => "sales",
            TableName::Customers => "customers",
            TableName::Products => "products",
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only, in-memory collection of named row sets.
///
/// Row order is insertion order and is stable across requests.
#[derive(Debug, Clone)]
pub struct TableStore {
    sales: Vec<Value>,
    customers: Vec<Value>,
}

impl TableStore {
    /// Store seeded with the fixed demo data set.
    pub fn seeded() -> Self {
        Self {
            sales: seed::sales_rows(),
            customers: seed::customer_rows(),
        }
    }

    /// All rows of a table, in insertion order.
    ///
    /// `products` has no backing rows; selections against it are empty.
    pub fn rows(&self, table: TableName) -> &[Value] {
        match table {
            TableName::Sales => &self.sales,
            TableName::Customers => &self.customers,
            TableName::Products => &[],
        }
    }

    /// Row count of a table.
    pub fn count(&self, table: TableName) -> usize {
        self.rows(table).len()
    }

    /// Sum of `sales.amount` over all rows.
    pub fn sales_amount_sum(&self) -> i64 {
        self.sales
            .iter()
            .filter_map(|row| row["amount"].as_i64())
            .sum()
    }

    /// Mean of `sales.amount` over all rows, or 0 for an empty table.
    pub fn sales_amount_avg(&self) -> f64 {
        if self.sales.is_empty() {
            return 0.0;
        }
        self.sales_amount_sum() as f64 / self.sales.len() as f64
    }
}
