//! CSV dataset reader.

use super::{Dataset, ViewershipRecord};
use crate::error::{PodiumError, Result};
use std::fs::File;
use std::path::Path;

/// Header names the dataset must carry.
const REQUIRED_COLUMNS: [&str; 5] = ["Countries", "Sports", "Gender", "Viewership", "Visits"];

/// Viewership CSV reader.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a viewership CSV file into an immutable [`Dataset`].
    ///
    /// Performed once at startup; the returned table is read-only for the
    /// process lifetime.
    pub fn read_file(path: &Path) -> Result<Dataset> {
        let file =
            File::open(path).map_err(|e| PodiumError::file_open(path.to_path_buf(), e))?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(PodiumError::missing_column(column));
            }
        }

        let mut records = Vec::new();
        for result in reader.deserialize::<ViewershipRecord>() {
            let record = result.map_err(|e| match e.position() {
                Some(pos) => PodiumError::bad_record(pos.line(), e.to_string()),
                None => PodiumError::Csv(e),
            })?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(PodiumError::EmptyDataset {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(
            rows = records.len(),
            path = %path.display(),
            "Dataset loaded"
        );

        Ok(Dataset::new(path.to_path_buf(), records))
    }
}
