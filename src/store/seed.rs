//! Fixed seed data for the table store
//!
//! Three sales rows (amounts 100, 200, 150) and three customer rows,
//! in insertion order. Tests depend on these exact values.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct SaleRecord {
    id: u32,
    product: &'static str,
    amount: i64,
    date: NaiveDate,
}

#[derive(Debug, Serialize)]
struct CustomerRecord {
    id: u32,
    name: &'static str,
    email: &'static str,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date is valid")
}

fn to_rows<T: Serialize>(records: Vec<T>) -> Vec<Value> {
    records
        .into_iter()
        .map(|r| serde_json::to_value(r).expect("seed row serialization cannot fail"))
        .collect()
}

pub(super) fn sales_rows() -> Vec<Value> {
    to_rows(vec![
        SaleRecord {
            id: 1,
            product: "Widget",
            amount: 100,
            date: date(2024, 1, 1),
        },
        SaleRecord {
            id: 2,
            product: "Gadget",
            amount: 200,
            date: date(2024, 1, 2),
        },
        SaleRecord {
            id: 3,
            product: "Device",
            amount: 150,
            date: date(2024, 1, 3),
        },
    ])
}

pub(super) fn customer_rows() -> Vec<Value> {
    to_rows(vec![
        CustomerRecord {
            id: 1,
            name: "John Doe",
            email: "john@example.com",
        },
        CustomerRecord {
            id: 2,
            name: "Jane Smith",
            email: "jane@example.com",
        },
        CustomerRecord {
            id: 3,
            name: "Bob Wilson",
            email: "bob@example.com",
        },
    ])
}
