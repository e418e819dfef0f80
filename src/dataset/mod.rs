mod fetch;

pub use fetch::{download_archive, extract_member};

use std::fs;
use std::path::Path;

use reqwest::Client;

use crate::cleaning::{clean_records, CleaningConfig};
use crate::config::Config;
use crate::error::Result;
use crate::models::{CleanedRecord, RawSurveyRecord};

/// Immutable handle over the cleaned survey table. Built once at startup and
/// passed to whatever consumes it; never mutated afterwards.
pub struct SurveyDataset {
    records: Vec<CleanedRecord>,
}

impl SurveyDataset {
    /// Downloads, extracts, parses and cleans the survey. The archive and
    /// the extracted CSV are reused when already present on disk, so only
    /// the first run of a fresh checkout pays for the download.
    pub async fn ensure(config: &Config, cleaning: &CleaningConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let archive_path = config.archive_path();
        if archive_path.exists() {
            tracing::debug!("Reusing survey archive at {}", archive_path.display());
        } else {
            let client = Client::new();
            download_archive(&client, &config.survey_url, &archive_path).await?;
        }

        let csv_path = config.csv_path();
        if !csv_path.exists() {
            extract_member(&archive_path, config.csv_member(), &csv_path)?;
        }

        let raw = read_raw_records(&csv_path)?;
        tracing::info!("Parsed {} raw survey rows", raw.len());
        let records = clean_records(&raw, cleaning)?;

        Ok(Self { records })
    }

    pub fn records(&self) -> &[CleanedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Deserializes the survey CSV into raw records. Columns beyond the five the
/// pipeline uses are ignored by serde.
pub fn read_raw_records(path: &Path) -> Result<Vec<RawSurveyRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}
