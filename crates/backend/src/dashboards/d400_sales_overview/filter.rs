use chrono::NaiveDate;
use contracts::dashboards::d400_sales_overview::SalesFilter;
use contracts::projections::p910_sales_orders::OrderRecord;
use contracts::projections::p911_monthly_targets::TargetRecord;
use std::collections::HashSet;

/// Set-backed predicate built once per filter
pub struct OrderPredicate<'f> {
    date_from: NaiveDate,
    date_to: NaiveDate,
    states: HashSet<&'f str>,
    channels: HashSet<&'f str>,
    categories: HashSet<&'f str>,
}

impl<'f> OrderPredicate<'f> {
    pub fn new(filter: &'f SalesFilter) -> Self {
        Self {
            date_from: filter.date_from,
            date_to: filter.date_to,
            states: filter.states.iter().map(String::as_str).collect(),
            channels: filter.channels.iter().map(String::as_str).collect(),
            categories: filter.categories.iter().map(String::as_str).collect(),
        }
    }

    pub fn matches(&self, order: &OrderRecord) -> bool {
        order.date >= self.date_from
            && order.date <= self.date_to
            && self.states.contains(order.state.as_str())
            && self.channels.contains(order.channel.as_str())
            && self.categories.contains(order.category.as_str())
    }
}

/// Orders matching every part of the filter
pub fn filter_orders<'o>(orders: &'o [OrderRecord], filter: &SalesFilter) -> Vec<&'o OrderRecord> {
    let predicate = OrderPredicate::new(filter);
    orders.iter().filter(|o| predicate.matches(o)).collect()
}

/// Targets of the selected states and channels, limited to months present in `orders`.
///
/// Targets have no category, so the category selection only acts through the months.
pub fn matching_targets<'t>(
    targets: &'t [TargetRecord],
    filter: &SalesFilter,
    orders: &[&OrderRecord],
) -> Vec<&'t TargetRecord> {
    let states: HashSet<&str> = filter.states.iter().map(String::as_str).collect();
    let channels: HashSet<&str> = filter.channels.iter().map(String::as_str).collect();
    let months: HashSet<&str> = orders.iter().map(|o| o.year_month.as_str()).collect();

    targets
        .iter()
        .filter(|t| {
            states.contains(t.state.as_str())
                && channels.contains(t.channel.as_str())
                && months.contains(t.year_month.as_str())
        })
        .collect()
}
