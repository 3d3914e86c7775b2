use chrono::{Datelike, NaiveDate};
use contracts::projections::p910_sales_orders::OrderRecord;
use contracts::projections::p911_monthly_targets::TargetRecord;

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, month, day).unwrap()
}

/// Order line with 40% margin; product defaults to "Helix Flex" by "Helix"
pub fn order(
    id: &str,
    date: NaiveDate,
    state: &str,
    channel: &str,
    category: &str,
    revenue: f64,
) -> OrderRecord {
    OrderRecord {
        order_id: id.to_string(),
        date,
        year: date.year(),
        month: date.month(),
        state: state.to_string(),
        region: "Southeast".to_string(),
        city: "Campinas".to_string(),
        channel: channel.to_string(),
        category: category.to_string(),
        brand: "Helix".to_string(),
        product: "Helix Flex".to_string(),
        unit_price: revenue,
        quantity: 1,
        discount: 0.0,
        revenue,
        cost: revenue * 0.6,
        profit: revenue * 0.4,
        margin_pct: 40.0,
        year_month: format!("{:04}-{:02}", date.year(), date.month()),
        quarter: format!("{}Q{}", date.year(), (date.month() - 1) / 3 + 1),
    }
}

pub fn with_product(mut order: OrderRecord, brand: &str, product: &str) -> OrderRecord {
    order.brand = brand.to_string();
    order.product = product.to_string();
    order
}

pub fn target(year_month: &str, state: &str, channel: &str, revenue: f64, orders: u32) -> TargetRecord {
    TargetRecord {
        year_month: year_month.to_string(),
        state: state.to_string(),
        channel: channel.to_string(),
        target_revenue: revenue,
        target_order_count: orders,
    }
}
