//! Column Name Utilities Module
//! Handles the column-naming convention shared by all dataset loaders.

/// Name of the target column produced by every loader.
pub const TARGET_COLUMN: &str = "price";

/// Normalize a column name: lowercase, with spaces, forward slashes and
/// hyphens replaced by underscores.
///
/// Idempotent: normalizing an already-normalized name is a no-op.
pub fn normalize_column_name(name: &str) -> String {
    name.to_lowercase().replace([' ', '/', '-'], "_")
}
