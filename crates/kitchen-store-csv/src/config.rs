//! Location of the tables and the media directory.

use std::path::PathBuf;

use serde::Deserialize;

use crate::schema::TableKind;

/// Where a [`crate::CsvStore`] keeps its files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
  /// Directory holding the three CSV tables.
  #[serde(default = "default_data_dir")]
  pub data_dir:  PathBuf,
  /// Directory for copied media; defaults to `<data_dir>/media`.
  #[serde(default)]
  pub media_dir: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf { PathBuf::from(".") }

impl Default for StoreConfig {
  fn default() -> Self { Self::new(default_data_dir()) }
}

impl StoreConfig {
  pub fn new(data_dir: impl Into<PathBuf>) -> Self {
    Self { data_dir: data_dir.into(), media_dir: None }
  }

  pub fn with_media_dir(mut self, media_dir: impl Into<PathBuf>) -> Self {
    self.media_dir = Some(media_dir.into());
    self
  }

  pub fn media_dir(&self) -> PathBuf {
    self
      .media_dir
      .clone()
      .unwrap_or_else(|| self.data_dir.join("media"))
  }

  pub fn table_path(&self, table: TableKind) -> PathBuf {
    self.data_dir.join(table.file_name())
  }
}
