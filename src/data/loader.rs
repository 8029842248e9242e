//! Dataset Loader Module
//! Loads housing-price datasets into DataFrames with a standardized
//! "price" target column.

use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};

use super::columns::{normalize_column_name, TARGET_COLUMN};
use super::provider::{CaliforniaHousing, DatasetProvider, ProviderError};

/// Default location of the Ames housing CSV, relative to the project root.
const AMES_CSV_PATH: &str = "data/raw/AmesHousing.csv";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Dataset provider failed: {0}")]
    Provider(#[from] ProviderError),
}

/// Loads the California housing dataset with its target column renamed
/// to "price".
pub struct CaliforniaHousingLoader<P = CaliforniaHousing> {
    provider: P,
}

impl Default for CaliforniaHousingLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CaliforniaHousingLoader {
    pub fn new() -> Self {
        Self {
            provider: CaliforniaHousing::new(),
        }
    }
}

impl<P: DatasetProvider> CaliforniaHousingLoader<P> {
    /// Create a loader backed by an alternative dataset provider.
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Load the dataset, renaming the provider's target column to "price".
    ///
    /// Provider failures are returned unchanged; there is no retry.
    pub fn load(&self) -> Result<DataFrame, LoaderError> {
        info!("loading {} data", self.provider.name());

        let mut df = self.provider.fetch()?;

        let target = self.provider.target_column();
        if df.get_column_names().iter().any(|c| c.as_str() == target) {
            df.rename(target, TARGET_COLUMN.into())?;
        }

        info!(
            "loaded {} rows with columns: {:?}",
            df.height(),
            column_names(&df)
        );
        Ok(df)
    }
}

/// Loads the Ames housing CSV with normalized column names and the sale
/// price column renamed to "price".
pub struct AmesHousingLoader {
    path: PathBuf,
}

impl Default for AmesHousingLoader {
    fn default() -> Self {
        Self::new(AMES_CSV_PATH)
    }
}

impl AmesHousingLoader {
    /// Create a loader reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the CSV, normalize every column name and rename "saleprice"
    /// to "price".
    ///
    /// Fails with [`LoaderError::FileNotFound`] when the CSV does not exist
    /// at the configured path; no fallback path is searched.
    pub fn load(&self) -> Result<DataFrame, LoaderError> {
        info!("loading Ames housing data from {}", self.path.display());

        if !self.path.is_file() {
            error!("CSV file not found: {}", self.path.display());
            return Err(LoaderError::FileNotFound(self.path.clone()));
        }

        let mut df = LazyCsvReader::new(&self.path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let cleaned: Vec<PlSmallStr> = df
            .get_column_names()
            .iter()
            .map(|name| normalize_column_name(name.as_str()).into())
            .collect();
        df.set_column_names(cleaned)?;

        if df
            .get_column_names()
            .iter()
            .any(|c| c.as_str() == "saleprice")
        {
            df.rename("saleprice", TARGET_COLUMN.into())?;
        }

        info!(
            "loaded {} rows with columns: {:?}",
            df.height(),
            column_names(&df)
        );
        Ok(df)
    }
}

/// Column names of a DataFrame as owned strings.
fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use polars::df;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tracing_subscriber::{fmt, EnvFilter};

    fn init_test_logging() {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn write_csv(content: &str) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        Ok(file)
    }

    struct StubProvider {
        frame: DataFrame,
    }

    impl DatasetProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn target_column(&self) -> &str {
            "MedHouseVal"
        }

        fn fetch(&self) -> Result<DataFrame, ProviderError> {
            Ok(self.frame.clone())
        }
    }

    #[test]
    fn california_renames_target_to_price() -> Result<()> {
        init_test_logging();
        let frame = df![
            "MedInc" => [8.3252, 8.3014],
            "HouseAge" => [41.0, 21.0],
            "MedHouseVal" => [4.526, 3.585],
        ]?;

        let loader = CaliforniaHousingLoader::with_provider(StubProvider { frame });
        let df = loader.load()?;

        assert!(df.height() > 0);
        let names = column_names(&df);
        assert!(names.iter().any(|n| n == "price"));
        assert!(!names.iter().any(|n| n == "MedHouseVal"));
        Ok(())
    }

    #[test]
    fn california_without_target_is_left_unchanged() -> Result<()> {
        init_test_logging();
        let frame = df![
            "MedInc" => [8.3252, 8.3014],
            "HouseAge" => [41.0, 21.0],
        ]?;

        let loader = CaliforniaHousingLoader::with_provider(StubProvider { frame });
        let df = loader.load()?;

        assert_eq!(column_names(&df), ["MedInc", "HouseAge"]);
        Ok(())
    }

    #[test]
    fn ames_normalizes_headers_and_renames_sale_price() -> Result<()> {
        init_test_logging();
        let file = write_csv("Id,SalePrice\n1,200000\n")?;

        let df = AmesHousingLoader::new(file.path()).load()?;

        assert_eq!(column_names(&df), ["id", "price"]);
        assert_eq!(df.height(), 1);
        assert_eq!(df.column("price")?.i64()?.get(0), Some(200000));
        Ok(())
    }

    #[test]
    fn ames_without_sale_price_only_normalizes() -> Result<()> {
        init_test_logging();
        let file = write_csv("Foo Bar,Baz-Qux\n1,2\n")?;

        let df = AmesHousingLoader::new(file.path()).load()?;

        assert_eq!(column_names(&df), ["foo_bar", "baz_qux"]);
        Ok(())
    }

    #[test]
    fn ames_missing_file_is_an_error() {
        init_test_logging();
        let loader = AmesHousingLoader::new("definitely/not/here/AmesHousing.csv");

        match loader.load() {
            Err(LoaderError::FileNotFound(path)) => {
                assert!(path.ends_with("AmesHousing.csv"));
            }
            Err(other) => panic!("expected FileNotFound, got {other}"),
            Ok(df) => panic!("expected an error, got {} rows", df.height()),
        }
    }

    #[test]
    fn repeated_loads_agree_on_shape() -> Result<()> {
        init_test_logging();
        let file = write_csv("Id,Lot Area,SalePrice\n1,8450,200000\n2,9600,181500\n")?;
        let loader = AmesHousingLoader::new(file.path());

        let first = loader.load()?;
        let second = loader.load()?;

        assert_eq!(column_names(&first), column_names(&second));
        assert_eq!(first.height(), second.height());
        Ok(())
    }
}
