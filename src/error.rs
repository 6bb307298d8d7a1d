//! Error types for taskforge operations.
//!
//! Defines error types for the two places generation can fail:
//! - Loading and parsing the reference dataset
//! - Serializing generated task records

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the reference dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during task generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
