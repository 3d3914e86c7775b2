use serde::Serialize;
use std::path::Path;

use super::error::GenerateError;

/// Writes `rows` as a headed CSV file, replacing any previous content
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), GenerateError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
