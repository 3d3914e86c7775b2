//! Per-product targets.
//!
//! Targets only exist per (month, state, channel). A product gets the share of
//! each (state, channel) target equal to its share of that bucket's revenue.

use contracts::dashboards::d400_sales_overview::{ProductTargetRow, TOP_PRODUCTS_LIMIT};
use contracts::projections::p910_sales_orders::OrderRecord;
use contracts::projections::p911_monthly_targets::TargetRecord;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::shared::format::round_dp;

/// (product, brand, category)
type ProductKey<'a> = (&'a str, &'a str, &'a str);
/// (state, channel)
type BucketKey<'a> = (&'a str, &'a str);

/// Target allocated to one product inside one (state, channel) bucket
#[derive(Debug, Clone, PartialEq)]
pub struct BucketAllocation<'a> {
    pub product: ProductKey<'a>,
    pub bucket: BucketKey<'a>,
    pub revenue: f64,
    pub target: f64,
}

/// Splits each bucket target across the products sold in it, proportionally to revenue.
///
/// Buckets without revenue allocate nothing.
pub fn allocate<'a>(
    orders: &[&'a OrderRecord],
    targets: &[&TargetRecord],
) -> Vec<BucketAllocation<'a>> {
    let mut bucket_targets: HashMap<(&str, &str), f64> = HashMap::new();
    for t in targets {
        *bucket_targets
            .entry((t.state.as_str(), t.channel.as_str()))
            .or_default() += t.target_revenue;
    }

    let mut combo_revenue: BTreeMap<(ProductKey<'a>, BucketKey<'a>), f64> = BTreeMap::new();
    let mut bucket_revenue: HashMap<BucketKey<'a>, f64> = HashMap::new();
    for &o in orders {
        let product = (o.product.as_str(), o.brand.as_str(), o.category.as_str());
        let bucket = (o.state.as_str(), o.channel.as_str());
        *combo_revenue.entry((product, bucket)).or_default() += o.revenue;
        *bucket_revenue.entry(bucket).or_default() += o.revenue;
    }

    combo_revenue
        .into_iter()
        .map(|((product, bucket), revenue)| {
            let bucket_total = bucket_revenue.get(&bucket).copied().unwrap_or(0.0);
            let bucket_target = bucket_targets.get(&bucket).copied().unwrap_or(0.0);
            let target = if bucket_total > 0.0 {
                bucket_target * (revenue / bucket_total)
            } else {
                0.0
            };
            BucketAllocation {
                product,
                bucket,
                revenue,
                target,
            }
        })
        .collect()
}

#[derive(Default)]
struct ProductTotals<'a> {
    revenue: f64,
    lines: usize,
    order_ids: HashSet<&'a str>,
    target: f64,
}

/// Top products by revenue with allocated target and attainment
pub fn top_products(orders: &[&OrderRecord], targets: &[&TargetRecord]) -> Vec<ProductTargetRow> {
    let mut totals: BTreeMap<ProductKey, ProductTotals> = BTreeMap::new();
    for &o in orders {
        let entry = totals
            .entry((o.product.as_str(), o.brand.as_str(), o.category.as_str()))
            .or_default();
        entry.revenue += o.revenue;
        entry.lines += 1;
        entry.order_ids.insert(o.order_id.as_str());
    }
    for allocation in allocate(orders, targets) {
        if let Some(entry) = totals.get_mut(&allocation.product) {
            entry.target += allocation.target;
        }
    }

    let mut rows: Vec<ProductTargetRow> = totals
        .into_iter()
        .map(|((product, brand, category), t)| {
            let attainment_pct = if t.target > 0.0 {
                Some(round_dp(t.revenue / t.target * 100.0, 1))
            } else {
                None
            };
            ProductTargetRow {
                product: product.to_string(),
                brand: brand.to_string(),
                category: category.to_string(),
                target: round_dp(t.target, 2),
                revenue: round_dp(t.revenue, 2),
                attainment_pct,
                order_count: t.order_ids.len(),
                avg_ticket: round_dp(t.revenue / t.lines as f64, 2),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows.truncate(TOP_PRODUCTS_LIMIT);
    rows
}
