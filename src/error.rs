use std::io;
use thiserror::Error;

/// Error type for sampling and inference operations.
#[derive(Error, Debug)]
pub enum TasterError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unrecoverable CSV reading error.
    #[error("CSV reading error: {0}")]
    Csv(#[from] csv::Error),

    /// No eligible records were found, so there is no sample to infer from.
    #[error("Empty file or no data rows to sample")]
    EmptyInput,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for tasting operations.
pub type Result<T> = std::result::Result<T, TasterError>;
