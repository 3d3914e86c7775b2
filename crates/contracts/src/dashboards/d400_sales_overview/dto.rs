use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of rows kept in the top products table
pub const TOP_PRODUCTS_LIMIT: usize = 12;

/// Upper bound for the target progress bar fill, in percent
pub const PROGRESS_BAR_CAP_PCT: f64 = 180.0;

/// Filter selection sent by the client.
///
/// Empty lists and missing dates mean "everything".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesFilterRequest {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub states: Vec<String>,
    pub channels: Vec<String>,
    pub categories: Vec<String>,
}

/// Full selectable domain of the loaded dataset; also the reset state of the filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDomain {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub states: Vec<String>,
    pub channels: Vec<String>,
    pub categories: Vec<String>,
}

/// Resolved filter: every field is explicit, no "empty means all" left
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesFilter {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub states: Vec<String>,
    pub channels: Vec<String>,
    pub categories: Vec<String>,
}

impl From<&FilterDomain> for SalesFilter {
    fn from(domain: &FilterDomain) -> Self {
        Self {
            date_from: domain.min_date,
            date_to: domain.max_date,
            states: domain.states.clone(),
            channels: domain.channels.clone(),
            categories: domain.categories.clone(),
        }
    }
}

/// Label/value pair summarizing one applied filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterChip {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesKpis {
    pub total_revenue: f64,
    /// Distinct order ids
    pub order_count: usize,
    pub avg_order_value: f64,
    pub margin_pct: f64,
    pub target_revenue: f64,
    pub target_order_count: u64,
    pub progress_pct: f64,
    /// `progress_pct` capped at [`PROGRESS_BAR_CAP_PCT`]
    pub progress_bar_pct: f64,
    /// Revenue minus target, negative when behind
    pub gap: f64,
}

/// One month of the target vs. actual comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTargetPoint {
    /// `YYYY-MM`
    pub year_month: String,
    pub month_start: NaiveDate,
    pub target: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelBreakdown {
    pub channel: String,
    pub revenue: f64,
    pub order_count: usize,
    pub profit: f64,
    pub margin_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandNode {
    pub brand: String,
    pub revenue: f64,
}

/// Category level of the category/brand mix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub category: String,
    pub revenue: f64,
    pub brands: Vec<BrandNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateBreakdown {
    pub state: String,
    pub revenue: f64,
    pub profit: f64,
    pub margin_pct: f64,
}

/// Row of the top products table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTargetRow {
    pub product: String,
    pub brand: String,
    pub category: String,
    /// Target allocated from (state, channel) buckets by revenue share
    pub target: f64,
    pub revenue: f64,
    /// `None` when nothing was allocated to the product
    pub attainment_pct: Option<f64>,
    pub order_count: usize,
    /// Mean revenue per order line
    pub avg_ticket: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOverview {
    pub filter: SalesFilter,
    pub chips: Vec<FilterChip>,
    pub kpis: SalesKpis,
    pub monthly: Vec<MonthlyTargetPoint>,
    pub channels: Vec<ChannelBreakdown>,
    pub categories: Vec<CategoryNode>,
    pub states: Vec<StateBreakdown>,
    pub top_products: Vec<ProductTargetRow>,
}

/// Response of the sales overview dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SalesOverviewResponse {
    /// Nothing matched the filter; charts and KPIs are skipped
    Empty { filter: SalesFilter, notice: String },
    Ready(Box<SalesOverview>),
}
