//! Query string evaluation

use std::thread;
use std::time::Duration;

use serde_json::{json, Value};

use crate::store::{TableName, TableStore};

use super::errors::ExecuteResult;

/// Interprets canonical query strings against a table store.
///
/// Borrows the store read-only; execution has no side effects and the same
/// query yields the same result set every time.
pub struct Interpreter<'a> {
    store: &'a TableStore,
    simulated_latency: Duration,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter over the given store.
    pub fn new(store: &'a TableStore) -> Self {
        Self {
            store,
            simulated_latency: Duration::ZERO,
        }
    }

    /// Adds an artificial per-request delay, simulating store I/O.
    /// Off by default.
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    /// Evaluates a query string and returns the result set.
    ///
    /// Substring tests run in fixed priority order: `count(*)`, then
    /// `avg(amount)`, then `sum(amount)`, then plain selection by table.
    /// Only sales and customers are recognized as targets; anything else,
    /// including a canonical `products` query, yields an empty result set.
    pub fn execute(&self, query: &str) -> ExecuteResult<Vec<Value>> {
        if !self.simulated_latency.is_zero() {
            thread::sleep(self.simulated_latency);
        }

        let query = query.to_lowercase();

        if query.contains("count(*)") {
            if query.contains("from sales") {
                return Ok(vec![json!({ "count": self.store.count(TableName::Sales) })]);
            }
            if query.contains("from customers") {
                return Ok(vec![
                    json!({ "count": self.store.count(TableName::Customers) }),
                ]);
            }
            // A count over any other table falls through to the rules below.
        }

        if query.contains("avg(amount)") {
            return Ok(vec![json!({ "average": self.store.sales_amount_avg() })]);
        }

        if query.contains("sum(amount)") {
            return Ok(vec![json!({ "total": self.store.sales_amount_sum() })]);
        }

        if query.contains("from sales") {
            return Ok(self.store.rows(TableName::Sales).to_vec());
        }

        if query.contains("from customers") {
            return Ok(self.store.rows(TableName::Customers).to_vec());
        }

        Ok(Vec::new())
    }
}
