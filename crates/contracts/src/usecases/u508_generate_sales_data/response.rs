use serde::{Deserialize, Serialize};

/// Итог генерации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub orders_written: usize,
    pub targets_written: usize,
    pub sales_path: String,
    pub targets_path: String,
}
