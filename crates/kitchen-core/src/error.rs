//! Error types for `kitchen-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// A required recipe field is missing or blank.
  #[error("validation failed: {0}")]
  Validation(String),

  #[error("unknown category: {0:?}")]
  UnknownCategory(String),

  #[error("step {index} does not exist (recipe has {steps} steps)")]
  InvalidStepIndex { index: u32, steps: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
