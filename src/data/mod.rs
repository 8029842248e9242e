//! Data module - dataset loading and column standardization

mod columns;
mod loader;
mod provider;

pub use columns::{normalize_column_name, TARGET_COLUMN};
pub use loader::{AmesHousingLoader, CaliforniaHousingLoader, LoaderError};
pub use provider::{CaliforniaHousing, DatasetProvider, ProviderError};
