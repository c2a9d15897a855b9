//! Error type for `kitchen-store-csv`.

use std::path::PathBuf;

use kitchen_core::recipe::RecipeId;
use thiserror::Error;

use crate::schema::TableKind;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] kitchen_core::Error),

  #[error("recipe not found: {0}")]
  RecipeNotFound(RecipeId),

  /// Built-in recipes can be neither deleted nor modified.
  #[error("recipe {0} is a default recipe and cannot be changed")]
  ProtectedRecipe(RecipeId),

  #[error("i/o error on {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  /// A table file lacks one of its declared columns.
  #[error("{table}: missing required column {column:?}")]
  Schema {
    table:  TableKind,
    column: &'static str,
  },

  #[error("{table}, line {line}: {reason}")]
  MalformedRow {
    table:  TableKind,
    line:   u64,
    reason: String,
  },
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io { path: path.into(), source }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
