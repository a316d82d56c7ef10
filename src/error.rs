// src/error.rs

use thiserror::Error;

/// Failures while retrieving or shaping a dataset.
#[derive(Error, Debug)]
pub enum DataError {
  /// The resource could not be read (missing file, permissions, bad path)
  #[error("Data unavailable: {resource} ({reason})")]
  DataUnavailable { resource: String, reason: String },

  /// A chain filter or a spectrum produced nothing to plot
  #[error("No data found for {what}")]
  EmptyResult { what: String },

  /// A typed control value that is not a positive integer
  #[error("Please enter a valid number (got {input:?})")]
  InvalidInput { input: String },

  /// A single input line could not be turned into a record
  #[error("Malformed row at line {line}: {reason}")]
  MalformedRow { line: usize, reason: String },
}

impl DataError {
  pub fn unavailable(resource: impl Into<String>, reason: impl ToString) -> Self {
    DataError::DataUnavailable {
      resource: resource.into(),
      reason: reason.to_string(),
    }
  }

  pub fn empty(what: impl Into<String>) -> Self {
    DataError::EmptyResult { what: what.into() }
  }
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;
