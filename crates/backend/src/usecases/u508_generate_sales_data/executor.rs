use anyhow::Result;
use contracts::projections::p910_sales_orders::{dto::SALES_FILE_NAME, OrderRecord};
use contracts::projections::p911_monthly_targets::{dto::TARGETS_FILE_NAME, TargetRecord};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_generate_sales_data::{GenerateRequest, GenerateResponse};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use super::error::GenerateError;
use super::sampling::{sample_dates, RecordSampler};
use super::targets::build_targets;
use super::writer::write_csv;
use crate::shared::format::format_number;

pub struct GenerateSalesData;

impl UseCaseMetadata for GenerateSalesData {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "generate_sales_data"
    }

    fn display_name() -> &'static str {
        "Generate synthetic sales data"
    }

    fn description() -> &'static str {
        "Synthetic order lines and monthly targets for the sales overview dashboard"
    }
}

/// Rejects bad parameters before any sampling starts
pub fn validate(request: &GenerateRequest) -> Result<(), GenerateError> {
    if request.end < request.start {
        return Err(GenerateError::InvalidDateRange {
            start: request.start,
            end: request.end,
        });
    }
    if request.records == 0 {
        return Err(GenerateError::InvalidRecordCount(request.records));
    }
    Ok(())
}

/// Generates both tables in memory. Same request, same output.
pub fn generate(request: &GenerateRequest) -> Result<(Vec<OrderRecord>, Vec<TargetRecord>), GenerateError> {
    validate(request)?;

    let mut rng = StdRng::seed_from_u64(request.seed);
    let dates = sample_dates(&mut rng, request.records, request.start, request.end)?;

    let sampler = RecordSampler::new()?;
    let orders = dates
        .into_iter()
        .enumerate()
        .map(|(idx, date)| sampler.sample(&mut rng, idx + 1, date))
        .collect::<Result<Vec<_>, _>>()?;

    let targets = build_targets(&orders, request.seed)?;
    Ok((orders, targets))
}

/// Generates the tables and writes `sales_data.csv` and `monthly_targets.csv`
pub fn execute(request: &GenerateRequest) -> Result<GenerateResponse> {
    tracing::info!(
        "{}: {} records from {} to {}, seed {}",
        GenerateSalesData::full_name(),
        request.records,
        request.start,
        request.end,
        request.seed
    );

    let (orders, targets) = generate(request)?;

    let output_dir = Path::new(&request.output_dir);
    std::fs::create_dir_all(output_dir).map_err(GenerateError::from)?;

    let sales_path = output_dir.join(SALES_FILE_NAME);
    let targets_path = output_dir.join(TARGETS_FILE_NAME);
    write_csv(&sales_path, &orders)?;
    write_csv(&targets_path, &targets)?;

    tracing::info!(
        "{}: wrote {} orders and {} targets",
        GenerateSalesData::full_name(),
        format_number(orders.len()),
        format_number(targets.len())
    );

    Ok(GenerateResponse {
        orders_written: orders.len(),
        targets_written: targets.len(),
        sales_path: sales_path.display().to_string(),
        targets_path: targets_path.display().to_string(),
    })
}
