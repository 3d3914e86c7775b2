use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECORDS: usize = 8000;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Запрос на генерацию синтетических продаж и месячных планов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Number of order lines to generate
    pub records: usize,

    /// First day of the period (inclusive)
    pub start: NaiveDate,

    /// Last day of the period (inclusive)
    pub end: NaiveDate,

    /// Directory receiving `sales_data.csv` and `monthly_targets.csv`
    pub output_dir: String,

    /// Base seed. Target noise uses `seed + 7`.
    pub seed: u64,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            records: DEFAULT_RECORDS,
            start: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid default start"),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid default end"),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            seed: DEFAULT_SEED,
        }
    }
}
