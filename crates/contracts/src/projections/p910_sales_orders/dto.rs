use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// File name of the order table inside the data directory
pub const SALES_FILE_NAME: &str = "sales_data.csv";

/// One sold line item.
///
/// Field order is the column order of `sales_data.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// `P{yy}{mm}-{seq:05}`
    pub order_id: String,
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub state: String,
    pub region: String,
    pub city: String,
    pub channel: String,
    pub category: String,
    pub brand: String,
    pub product: String,
    pub unit_price: f64,
    pub quantity: u32,
    /// Fraction in `[0, 0.3]`
    pub discount: f64,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    pub margin_pct: f64,
    /// `YYYY-MM`
    pub year_month: String,
    /// `YYYYQn`
    pub quarter: String,
}
