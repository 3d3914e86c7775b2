use contracts::projections::p910_sales_orders::OrderRecord;
use contracts::projections::p911_monthly_targets::TargetRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::collections::{BTreeMap, BTreeSet};

use super::error::GenerateError;
use crate::shared::format::round_dp;

/// Target noise runs on its own stream so record sampling cannot shift it
pub const TARGET_SEED_OFFSET: u64 = 7;

const REVENUE_FACTOR_MEAN: f64 = 1.05;
const REVENUE_FACTOR_STD: f64 = 0.07;
const ORDER_FACTOR_MEAN: f64 = 1.03;
const ORDER_FACTOR_STD: f64 = 0.05;

/// Actual figures of one (year_month, state, channel) bucket
#[derive(Debug, Default)]
struct BucketActuals<'a> {
    revenue: f64,
    order_ids: BTreeSet<&'a str>,
}

/// Derives monthly targets from generated orders.
///
/// Buckets are visited in sorted key order; all revenue factors are drawn
/// first, then all order-count factors.
pub fn build_targets(orders: &[OrderRecord], seed: u64) -> Result<Vec<TargetRecord>, GenerateError> {
    let mut buckets: BTreeMap<(&str, &str, &str), BucketActuals> = BTreeMap::new();
    for order in orders {
        let bucket = buckets
            .entry((
                order.year_month.as_str(),
                order.state.as_str(),
                order.channel.as_str(),
            ))
            .or_default();
        bucket.revenue += order.revenue;
        bucket.order_ids.insert(order.order_id.as_str());
    }

    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(TARGET_SEED_OFFSET));
    let revenue_noise = Normal::new(REVENUE_FACTOR_MEAN, REVENUE_FACTOR_STD)
        .map_err(|e| GenerateError::Distribution(e.to_string()))?;
    let order_noise = Normal::new(ORDER_FACTOR_MEAN, ORDER_FACTOR_STD)
        .map_err(|e| GenerateError::Distribution(e.to_string()))?;

    let revenue_factors: Vec<f64> = (0..buckets.len()).map(|_| revenue_noise.sample(&mut rng)).collect();
    let order_factors: Vec<f64> = (0..buckets.len()).map(|_| order_noise.sample(&mut rng)).collect();

    let targets = buckets
        .into_iter()
        .zip(revenue_factors.into_iter().zip(order_factors))
        .map(|(((year_month, state, channel), actuals), (revenue_factor, order_factor))| {
            let actual_orders = actuals.order_ids.len() as u32;
            let scaled_orders = (actual_orders as f64 * order_factor).round().max(0.0) as u32;
            TargetRecord {
                year_month: year_month.to_string(),
                state: state.to_string(),
                channel: channel.to_string(),
                target_revenue: round_dp(actuals.revenue * revenue_factor, 2),
                target_order_count: scaled_orders.max(actual_orders),
            }
        })
        .collect();

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(id: &str, ym: &str, state: &str, channel: &str, revenue: f64) -> OrderRecord {
        OrderRecord {
            order_id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
            year: 2023,
            month: 1,
            state: state.to_string(),
            region: "Southeast".to_string(),
            city: "Santos".to_string(),
            channel: channel.to_string(),
            category: "Notebooks".to_string(),
            brand: "Helix".to_string(),
            product: "Helix Flex".to_string(),
            unit_price: revenue,
            quantity: 1,
            discount: 0.0,
            revenue,
            cost: revenue * 0.5,
            profit: revenue * 0.5,
            margin_pct: 50.0,
            year_month: ym.to_string(),
            quarter: "2023Q1".to_string(),
        }
    }

    fn sample_orders() -> Vec<OrderRecord> {
        vec![
            order("P2301-00001", "2023-01", "SP", "E-commerce", 100.0),
            order("P2301-00002", "2023-01", "SP", "E-commerce", 50.0),
            order("P2301-00003", "2023-01", "RJ", "Marketplace", 80.0),
            order("P2302-00004", "2023-02", "SP", "E-commerce", 20.0),
        ]
    }

    #[test]
    fn test_one_target_per_bucket_in_key_order() {
        let targets = build_targets(&sample_orders(), 42).unwrap();
        let keys: Vec<(&str, &str, &str)> = targets
            .iter()
            .map(|t| (t.year_month.as_str(), t.state.as_str(), t.channel.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2023-01", "RJ", "Marketplace"),
                ("2023-01", "SP", "E-commerce"),
                ("2023-02", "SP", "E-commerce"),
            ]
        );
    }

    #[test]
    fn test_target_order_count_never_below_actual() {
        let orders = sample_orders();
        for seed in 0..200 {
            let targets = build_targets(&orders, seed).unwrap();
            assert!(targets[0].target_order_count >= 1);
            assert!(targets[1].target_order_count >= 2);
            assert!(targets[2].target_order_count >= 1);
        }
    }

    #[test]
    fn test_target_revenue_tracks_actuals() {
        let targets = build_targets(&sample_orders(), 42).unwrap();
        let sp = &targets[1];
        // 150 * N(1.05, 0.07): far outside [0.6, 1.5] would be a >6 sigma event
        assert!(sp.target_revenue > 150.0 * 0.6 && sp.target_revenue < 150.0 * 1.5);
        assert_eq!(sp.target_revenue, round_dp(sp.target_revenue, 2));
    }

    #[test]
    fn test_same_seed_same_targets() {
        let a = build_targets(&sample_orders(), 11).unwrap();
        let b = build_targets(&sample_orders(), 11).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_order_ids_count_once() {
        let mut orders = sample_orders();
        orders.push(order("P2301-00001", "2023-01", "SP", "E-commerce", 10.0));
        let targets = build_targets(&orders, 42).unwrap();
        assert!(targets[1].target_order_count >= 2);
        assert!(targets[1].target_order_count <= 3);
    }
}
