use chrono::{Datelike, NaiveDate};
use contracts::projections::p910_sales_orders::OrderRecord;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_distr::Normal;

use super::catalog::{self, CATEGORIES, CHANNELS, QUANTITY_OUTCOMES, QUANTITY_WEIGHTS, STATES};
use super::error::GenerateError;
use crate::shared::format::round_dp;

const PRICE_STD_RATIO: f64 = 0.12;
const PRICE_FLOOR_RATIO: f64 = 0.55;
const DISCOUNT_STD: f64 = 0.03;
const MAX_DISCOUNT: f64 = 0.30;
const COST_RATIO_STD: f64 = 0.05;
const MIN_COST_RATIO: f64 = 0.38;
const MAX_COST_RATIO: f64 = 0.80;

fn distribution_error(e: impl std::fmt::Display) -> GenerateError {
    GenerateError::Distribution(e.to_string())
}

fn draw_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> Result<f64, GenerateError> {
    let normal = Normal::new(mean, std_dev).map_err(distribution_error)?;
    Ok(normal.sample(rng))
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Every day from `start` to `end`, both inclusive
pub fn day_sequence(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Draws `count` days with replacement, weighted by month seasonality
pub fn sample_dates<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<NaiveDate>, GenerateError> {
    let days = day_sequence(start, end);
    let weights: Vec<f64> = days.iter().map(|d| catalog::seasonality(d.month())).collect();
    let index = WeightedIndex::new(&weights).map_err(distribution_error)?;

    Ok((0..count).map(|_| days[index.sample(rng)]).collect())
}

/// Per-record sampler; weighted indexes are built once and reused for every row
pub struct RecordSampler {
    states: WeightedIndex<f64>,
    channels: WeightedIndex<f64>,
    quantities: WeightedIndex<f64>,
}

impl RecordSampler {
    pub fn new() -> Result<Self, GenerateError> {
        Ok(Self {
            states: WeightedIndex::new(STATES.iter().map(|s| s.weight))
                .map_err(distribution_error)?,
            channels: WeightedIndex::new(CHANNELS.iter().map(|c| c.weight))
                .map_err(distribution_error)?,
            quantities: WeightedIndex::new(QUANTITY_WEIGHTS).map_err(distribution_error)?,
        })
    }

    /// Synthesizes one order line for `date`. `sequence` is 1-based.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sequence: usize,
        date: NaiveDate,
    ) -> Result<OrderRecord, GenerateError> {
        let state = &STATES[self.states.sample(rng)];
        let city = *pick(rng, state.cities);
        let channel = &CHANNELS[self.channels.sample(rng)];
        let category = pick(rng, CATEGORIES);
        let brand = pick(rng, category.brands);
        let product = *pick(rng, brand.products);

        let base_price = brand.base_price;
        let price = draw_normal(rng, base_price, base_price * PRICE_STD_RATIO)?
            .max(base_price * PRICE_FLOOR_RATIO);
        let unit_price = round_dp(price, 2);

        let quantity = QUANTITY_OUTCOMES[self.quantities.sample(rng)];

        let discount = draw_normal(rng, channel.base_discount, DISCOUNT_STD)?.clamp(0.0, MAX_DISCOUNT);
        let discount = round_dp(discount, 3);

        let cost_ratio = draw_normal(rng, category.base_cost_ratio(), COST_RATIO_STD)?
            .clamp(MIN_COST_RATIO, MAX_COST_RATIO);

        // Derived from the rounded price and discount so the written row stays consistent
        let revenue = round_dp(unit_price * quantity as f64 * (1.0 - discount), 2);
        let cost = round_dp(revenue * cost_ratio, 2);
        let profit = round_dp(revenue - cost, 2);
        let margin_pct = if revenue != 0.0 {
            round_dp(profit / revenue * 100.0, 2)
        } else {
            0.0
        };

        Ok(OrderRecord {
            order_id: order_id(date, sequence),
            date,
            year: date.year(),
            month: date.month(),
            state: state.code.to_string(),
            region: state.region.to_string(),
            city: city.to_string(),
            channel: channel.name.to_string(),
            category: category.name.to_string(),
            brand: brand.name.to_string(),
            product: product.to_string(),
            unit_price,
            quantity,
            discount,
            revenue,
            cost,
            profit,
            margin_pct,
            year_month: year_month_key(date),
            quarter: quarter_key(date),
        })
    }
}

/// `P2311-00042` for the 42nd generated line dated November 2023
pub fn order_id(date: NaiveDate, sequence: usize) -> String {
    format!("P{}-{:05}", date.format("%y%m"), sequence)
}

pub fn year_month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

pub fn quarter_key(date: NaiveDate) -> String {
    format!("{}Q{}", date.year(), (date.month() - 1) / 3 + 1)
}
