//! [`Table`]: one CSV file holding the rows of a single record kind.
//!
//! Loading checks the header against the declared columns before any row is
//! decoded. Saving writes a temporary file next to the target and renames it
//! over the old file, so a crash mid-write never leaves a truncated table.

use std::{
  fs::File,
  marker::PhantomData,
  path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{Error, Result, encode::Row};

/// Smallest id not used by any of `records`: 1 for an empty table, otherwise
/// the current maximum plus one.
pub fn next_id<R: Row>(records: &[R::Record]) -> u64 {
  records.iter().map(R::key).max().map_or(1, |max| max + 1)
}

pub struct Table<R> {
  path: PathBuf,
  _row: PhantomData<fn() -> R>,
}

impl<R: Row> Table<R> {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into(), _row: PhantomData }
  }

  pub fn path(&self) -> &Path { &self.path }

  pub fn exists(&self) -> Result<bool> {
    self.path.try_exists().map_err(|e| Error::io(&self.path, e))
  }

  /// Read and decode every row in file order.
  pub fn load(&self) -> Result<Vec<R::Record>> {
    let file = File::open(&self.path).map_err(|e| Error::io(&self.path, e))?;
    let mut reader = csv::ReaderBuilder::new()
      .trim(csv::Trim::Headers)
      .from_reader(file);

    let headers = reader.headers()?.clone();
    for &column in R::TABLE.columns() {
      if !headers.iter().any(|h| h == column) {
        return Err(Error::Schema { table: R::TABLE, column });
      }
    }

    let mut records = Vec::new();
    for result in reader.records() {
      let row = result?;
      let line = row.position().map_or(0, |p| p.line());
      let malformed = |reason: String| Error::MalformedRow { table: R::TABLE, line, reason };

      let raw: R = row
        .deserialize(Some(&headers))
        .map_err(|e| malformed(e.to_string()))?;
      records.push(raw.decode().map_err(malformed)?);
    }

    debug!(table = %R::TABLE, rows = records.len(), "loaded table");
    Ok(records)
  }

  /// Replace the file's contents with `records`, header first.
  pub fn save(&self, records: &[R::Record]) -> Result<()> {
    let dir = match self.path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;

    {
      let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(tmp.as_file());
      writer.write_record(R::TABLE.columns())?;
      for record in records {
        writer.serialize(R::encode(record))?;
      }
      writer.flush().map_err(|e| Error::io(tmp.path(), e))?;
    }
    tmp.as_file().sync_all().map_err(|e| Error::io(tmp.path(), e))?;

    tmp
      .persist(&self.path)
      .map_err(|e| Error::io(&self.path, e.error))?;

    debug!(table = %R::TABLE, rows = records.len(), "saved table");
    Ok(())
  }

  /// [`next_id`] over the rows currently on disk; 1 if the file is absent.
  pub fn next_id(&self) -> Result<u64> {
    if !self.exists()? {
      return Ok(1);
    }
    Ok(next_id::<R>(&self.load()?))
  }
}
