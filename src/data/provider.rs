//! Dataset Provider Module
//! Remote providers that fetch well-known datasets as Polars DataFrames.

use polars::prelude::*;
use std::io::Cursor;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to download dataset: {0}")]
    Download(#[from] reqwest::Error),
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] PolarsError),
}

/// A source of a labeled dataset: feature columns plus a numeric target.
///
/// Loaders rely only on this narrow surface, so an alternative source (or an
/// in-memory stub in tests) can be substituted freely.
pub trait DatasetProvider {
    /// Human-readable dataset name, used in log messages.
    fn name(&self) -> &str;

    /// Name of the target column in the fetched frame.
    fn target_column(&self) -> &str;

    /// Fetch the dataset as a single DataFrame, features plus target.
    fn fetch(&self) -> Result<DataFrame, ProviderError>;
}

/// Download URL for the raw California housing census table (StatLib data,
/// as mirrored by the hands-on ML datasets repository).
const CALIFORNIA_HOUSING_URL: &str =
    "https://raw.githubusercontent.com/ageron/handson-ml2/master/datasets/housing/housing.csv";

/// Target column name as published by scikit-learn's frame of this dataset.
pub const CALIFORNIA_TARGET: &str = "MedHouseVal";

/// Fetches the California housing dataset over HTTPS and derives the
/// per-household feature columns from the raw census counts.
pub struct CaliforniaHousing {
    url: String,
}

impl Default for CaliforniaHousing {
    fn default() -> Self {
        Self::new()
    }
}

impl CaliforniaHousing {
    pub fn new() -> Self {
        Self {
            url: CALIFORNIA_HOUSING_URL.to_string(),
        }
    }

    /// Derive the per-household features and the scaled target from the raw
    /// per-block-group census columns.
    fn derive_features(raw: DataFrame) -> Result<DataFrame, ProviderError> {
        let df = raw
            .lazy()
            .select([
                col("median_income").alias("MedInc"),
                col("housing_median_age").alias("HouseAge"),
                (col("total_rooms") / col("households")).alias("AveRooms"),
                (col("total_bedrooms") / col("households")).alias("AveBedrms"),
                col("population").alias("Population"),
                (col("population") / col("households")).alias("AveOccup"),
                col("latitude").alias("Latitude"),
                col("longitude").alias("Longitude"),
                // Target is reported in units of $100,000.
                (col("median_house_value") / lit(100_000.0)).alias(CALIFORNIA_TARGET),
            ])
            .collect()?;
        Ok(df)
    }
}

impl DatasetProvider for CaliforniaHousing {
    fn name(&self) -> &str {
        "California housing"
    }

    fn target_column(&self) -> &str {
        CALIFORNIA_TARGET
    }

    fn fetch(&self) -> Result<DataFrame, ProviderError> {
        info!("downloading {}", self.url);

        let body = reqwest::blocking::get(&self.url)?
            .error_for_status()?
            .bytes()?;

        let raw = CsvReadOptions::default()
            .with_infer_schema_length(Some(10000))
            .into_reader_with_file_handle(Cursor::new(body))
            .finish()?;

        Self::derive_features(raw)
    }
}
