//! The managed media directory.
//!
//! Attached images and videos are copied in under a random 128-bit name that
//! keeps the source's extension. Files are never shared between rows, so the
//! row that references a file may delete it.

use std::{
  fs::{self, File},
  io,
  path::{Path, PathBuf},
};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::{Error, Result};

pub struct MediaDir {
  root: PathBuf,
}

impl MediaDir {
  pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

  pub fn root(&self) -> &Path { &self.root }

  /// Create the directory if it does not exist yet.
  pub fn ensure(&self) -> Result<()> {
    fs::create_dir_all(&self.root).map_err(|e| Error::io(&self.root, e))
  }

  /// Copy `source` into the directory and return the new path.
  ///
  /// An empty, missing, non-regular or unreadable source yields `Ok(None)`;
  /// the caller skips that attachment. Failing to write the copy is an error.
  pub fn store(&self, source: &Path) -> Result<Option<PathBuf>> {
    if source.as_os_str().is_empty() {
      warn!("empty media path; skipping");
      return Ok(None);
    }

    let mut input = match File::open(source) {
      Ok(file) => file,
      Err(e) => {
        warn!(source = %source.display(), error = %e, "media source unavailable; skipping");
        return Ok(None);
      }
    };
    if !input.metadata().is_ok_and(|m| m.is_file()) {
      warn!(source = %source.display(), "media source is not a regular file; skipping");
      return Ok(None);
    }

    let dest = self.root.join(unique_name(source));
    let copied = File::create_new(&dest).and_then(|mut output| {
      io::copy(&mut input, &mut output)?;
      output.sync_all()
    });

    if let Err(e) = copied {
      let _ = fs::remove_file(&dest);
      return Err(Error::io(dest, e));
    }

    debug!(source = %source.display(), dest = %dest.display(), "stored media file");
    Ok(Some(dest))
  }

  /// Best-effort removal of a stored file. Never fails.
  pub fn discard(&self, path: &Path) {
    match fs::remove_file(path) {
      Ok(()) => debug!(path = %path.display(), "removed media file"),
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = %path.display(), "media file already gone")
      }
      Err(e) => warn!(path = %path.display(), error = %e, "could not remove media file"),
    }
  }
}

/// A fresh file name for `source`: 32 lowercase hex digits plus the source
/// extension, if any.
fn unique_name(source: &Path) -> String {
  let stem = Uuid::new_v4().simple().to_string();
  match source.extension() {
    Some(ext) => format!("{stem}.{}", ext.to_string_lossy()),
    None => stem,
  }
}
