use serde::{Deserialize, Serialize};

/// File name of the target table inside the data directory
pub const TARGETS_FILE_NAME: &str = "monthly_targets.csv";

/// План по выручке и количеству заказов на (месяц, штат, канал)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    /// `YYYY-MM`
    pub year_month: String,
    pub state: String,
    pub channel: String,
    pub target_revenue: f64,
    pub target_order_count: u32,
}
