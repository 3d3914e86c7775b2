use chrono::NaiveDate;
use contracts::dashboards::d400_sales_overview::{
    BrandNode, CategoryNode, ChannelBreakdown, FilterChip, MonthlyTargetPoint, SalesFilter,
    SalesKpis, SalesOverview, SalesOverviewResponse, StateBreakdown, PROGRESS_BAR_CAP_PCT,
};
use contracts::projections::p910_sales_orders::OrderRecord;
use contracts::projections::p911_monthly_targets::TargetRecord;
use std::collections::{BTreeMap, HashSet};

use super::allocation::top_products;
use super::filter::{filter_orders, matching_targets};
use crate::shared::data::dataset::Dataset;
use crate::shared::format::round_dp;

pub const EMPTY_NOTICE: &str = "No data for the selected filters.";

/// Builds the whole dashboard for one filter. Pure: same input, same output.
pub fn render(dataset: &Dataset, filter: &SalesFilter) -> SalesOverviewResponse {
    let orders = filter_orders(&dataset.orders, filter);
    if orders.is_empty() {
        tracing::info!("D400 Dashboard: no orders match the filter");
        return SalesOverviewResponse::Empty {
            filter: filter.clone(),
            notice: EMPTY_NOTICE.to_string(),
        };
    }
    let targets = matching_targets(&dataset.targets, filter, &orders);

    let overview = SalesOverview {
        filter: filter.clone(),
        chips: filter_chips(filter),
        kpis: compute_kpis(&orders, &targets),
        monthly: monthly_target_vs_actual(&orders, &targets),
        channels: channel_breakdown(&orders),
        categories: category_brand_mix(&orders),
        states: state_breakdown(&orders),
        top_products: top_products(&orders, &targets),
    };
    tracing::info!(
        "D400 Dashboard: {} orders, {} targets, {} months",
        orders.len(),
        targets.len(),
        overview.monthly.len()
    );

    SalesOverviewResponse::Ready(Box::new(overview))
}

fn ratio_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

fn distinct_orders(orders: &[&OrderRecord]) -> usize {
    orders
        .iter()
        .map(|o| o.order_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

pub fn compute_kpis(orders: &[&OrderRecord], targets: &[&TargetRecord]) -> SalesKpis {
    let total_revenue: f64 = orders.iter().map(|o| o.revenue).sum();
    let total_profit: f64 = orders.iter().map(|o| o.profit).sum();
    let order_count = distinct_orders(orders);
    let target_revenue: f64 = targets.iter().map(|t| t.target_revenue).sum();
    let target_order_count: u64 = targets.iter().map(|t| t.target_order_count as u64).sum();

    let avg_order_value = if order_count > 0 {
        total_revenue / order_count as f64
    } else {
        0.0
    };
    let progress_pct = ratio_pct(total_revenue, target_revenue);

    SalesKpis {
        total_revenue: round_dp(total_revenue, 2),
        order_count,
        avg_order_value: round_dp(avg_order_value, 2),
        margin_pct: round_dp(ratio_pct(total_profit, total_revenue), 2),
        target_revenue: round_dp(target_revenue, 2),
        target_order_count,
        progress_pct: round_dp(progress_pct, 2),
        progress_bar_pct: round_dp(progress_pct.min(PROGRESS_BAR_CAP_PCT), 2),
        gap: round_dp(total_revenue - target_revenue, 2),
    }
}

fn month_start(year_month: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", year_month), "%Y-%m-%d").ok()
}

/// Outer join of actual and target revenue per month, zero for the missing side
pub fn monthly_target_vs_actual(
    orders: &[&OrderRecord],
    targets: &[&TargetRecord],
) -> Vec<MonthlyTargetPoint> {
    // (target, actual)
    let mut months: BTreeMap<NaiveDate, (String, f64, f64)> = BTreeMap::new();

    let mut add = |year_month: &str, target: f64, actual: f64| match month_start(year_month) {
        Some(start) => {
            let entry = months
                .entry(start)
                .or_insert_with(|| (year_month.to_string(), 0.0, 0.0));
            entry.1 += target;
            entry.2 += actual;
        }
        None => tracing::warn!("D400 Dashboard: skipping malformed month key '{}'", year_month),
    };

    for t in targets {
        add(&t.year_month, t.target_revenue, 0.0);
    }
    for o in orders {
        add(&o.year_month, 0.0, o.revenue);
    }

    months
        .into_iter()
        .map(|(month_start, (year_month, target, actual))| MonthlyTargetPoint {
            year_month,
            month_start,
            target: round_dp(target, 2),
            actual: round_dp(actual, 2),
        })
        .collect()
}

#[derive(Default)]
struct GroupTotals<'a> {
    revenue: f64,
    profit: f64,
    order_ids: HashSet<&'a str>,
}

fn group_by<'a>(
    orders: &[&'a OrderRecord],
    key: impl Fn(&'a OrderRecord) -> &'a str,
) -> BTreeMap<&'a str, GroupTotals<'a>> {
    let mut groups: BTreeMap<&str, GroupTotals> = BTreeMap::new();
    for &o in orders {
        let group = groups.entry(key(o)).or_default();
        group.revenue += o.revenue;
        group.profit += o.profit;
        group.order_ids.insert(o.order_id.as_str());
    }
    groups
}

/// Revenue, orders, profit and margin per channel, highest revenue first
pub fn channel_breakdown(orders: &[&OrderRecord]) -> Vec<ChannelBreakdown> {
    let mut rows: Vec<ChannelBreakdown> = group_by(orders, |o| o.channel.as_str())
        .into_iter()
        .map(|(channel, g)| ChannelBreakdown {
            channel: channel.to_string(),
            revenue: round_dp(g.revenue, 2),
            order_count: g.order_ids.len(),
            profit: round_dp(g.profit, 2),
            margin_pct: round_dp(ratio_pct(g.profit, g.revenue), 1),
        })
        .collect();
    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows
}

/// Revenue and margin per state, highest revenue first
pub fn state_breakdown(orders: &[&OrderRecord]) -> Vec<StateBreakdown> {
    let mut rows: Vec<StateBreakdown> = group_by(orders, |o| o.state.as_str())
        .into_iter()
        .map(|(state, g)| StateBreakdown {
            state: state.to_string(),
            revenue: round_dp(g.revenue, 2),
            profit: round_dp(g.profit, 2),
            margin_pct: round_dp(ratio_pct(g.profit, g.revenue), 1),
        })
        .collect();
    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows
}

/// Category → brand revenue tree for the nested mix chart
pub fn category_brand_mix(orders: &[&OrderRecord]) -> Vec<CategoryNode> {
    let mut tree: BTreeMap<&str, BTreeMap<&str, f64>> = BTreeMap::new();
    for o in orders {
        *tree
            .entry(o.category.as_str())
            .or_default()
            .entry(o.brand.as_str())
            .or_default() += o.revenue;
    }

    let mut nodes: Vec<CategoryNode> = tree
        .into_iter()
        .map(|(category, brands)| {
            let revenue: f64 = brands.values().sum();
            let mut brands: Vec<BrandNode> = brands
                .into_iter()
                .map(|(brand, revenue)| BrandNode {
                    brand: brand.to_string(),
                    revenue: round_dp(revenue, 2),
                })
                .collect();
            brands.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
            CategoryNode {
                category: category.to_string(),
                revenue: round_dp(revenue, 2),
                brands,
            }
        })
        .collect();
    nodes.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    nodes
}

/// Summary of the applied filter, one chip per control
pub fn filter_chips(filter: &SalesFilter) -> Vec<FilterChip> {
    let chip = |label: &str, value: String| FilterChip {
        label: label.to_string(),
        value,
    };
    vec![
        chip(
            "Period",
            format!(
                "{} - {}",
                filter.date_from.format("%d/%m/%Y"),
                filter.date_to.format("%d/%m/%Y")
            ),
        ),
        chip("States", filter.states.join(", ")),
        chip("Channels", filter.channels.join(", ")),
        chip("Categories", filter.categories.join(", ")),
    ]
}
