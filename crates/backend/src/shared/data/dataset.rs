use contracts::projections::p910_sales_orders::{dto::SALES_FILE_NAME, OrderRecord};
use contracts::projections::p911_monthly_targets::{dto::TARGETS_FILE_NAME, TargetRecord};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

static DATASET: OnceCell<Dataset> = OnceCell::new();

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("data file not found: {0}. Run `backend generate` first to create the CSV files")]
    MissingFile(PathBuf),

    #[error("failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset already initialized")]
    AlreadyInitialized,

    #[error("dataset not initialized")]
    NotInitialized,
}

/// Both generated tables, read-only once loaded
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub orders: Vec<OrderRecord>,
    pub targets: Vec<TargetRecord>,
}

impl Dataset {
    /// Loads `sales_data.csv` and `monthly_targets.csv` from `dir`.
    ///
    /// Both files are checked before either is parsed; a bad row fails the whole load.
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        let sales_path = dir.join(SALES_FILE_NAME);
        let targets_path = dir.join(TARGETS_FILE_NAME);
        for path in [&sales_path, &targets_path] {
            if !path.exists() {
                return Err(DatasetError::MissingFile(path.clone()));
            }
        }

        let orders = read_csv(&sales_path)?;
        let targets = read_csv(&targets_path)?;
        tracing::info!(
            "Dataset loaded from {}: {} orders, {} targets",
            dir.display(),
            orders.len(),
            targets.len()
        );

        Ok(Self { orders, targets })
    }
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let to_error = |source| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(to_error)?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(to_error)
}

/// Loads the dataset into the process-wide slot used by the HTTP handlers
pub fn initialize_dataset(dir: &Path) -> Result<(), DatasetError> {
    let dataset = Dataset::load(dir)?;
    DATASET
        .set(dataset)
        .map_err(|_| DatasetError::AlreadyInitialized)
}

pub fn get_dataset() -> Result<&'static Dataset, DatasetError> {
    DATASET.get().ok_or(DatasetError::NotInitialized)
}
