//! `linfa-rules-datasets` provides categorical datasets ready to be used in tests and benchmarks
//! of `linfa-rules`.
//!
//! ## Current State
//!
//! Currently the following datasets are provided:
//!
//! * `["weather"]` : the classic "play tennis" weather dataset
//! * `["generate"]` : randomly generated categorical datasets
//!
//! Loaded datasets are returned as a [`linfa::Dataset`] with named features and
//! string-valued records.
//!
//! ## Using a dataset
//!
//! Enable the corresponding feature in your Cargo.toml:
//! ```ignore
//! linfa-rules-datasets = { version = "0.7.1", features = ["weather"] }
//! ```
//! and then use it in your tests as
//! ```ignore
//! let dataset = linfa_rules_datasets::weather();
//! ```

#[cfg(feature = "weather")]
mod dataset;

#[cfg(feature = "generate")]
pub mod generate;

#[cfg(feature = "weather")]
pub use dataset::{array_from_csv, weather};
