//! Housing Data - Housing Price Dataset Loaders
//!
//! A Rust library for loading housing-price datasets into Polars DataFrames
//! with cleaned column names and a standardized "price" target column.

pub mod data;
