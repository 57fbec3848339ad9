use std::path::PathBuf;

use thiserror::Error;

/// Error type for the conversion pipelines.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input path does not exist.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input yielded zero usable records.
    #[error("No sequences found in {0}")]
    EmptyInput(String),

    /// FASTA records do not share one sequence length. Holds the sorted distinct lengths.
    #[error("Sequences not equal length: {0:?}")]
    UnequalLength(Vec<usize>),

    #[error("Missing character must be exactly one character, got {0:?}")]
    InvalidMissingChar(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for phyconv operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
