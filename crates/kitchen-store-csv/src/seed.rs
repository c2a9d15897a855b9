//! First-run initialisation: media directory plus any missing table.
//!
//! A table file that already exists is never rewritten, whatever it holds,
//! so user additions and deletions survive restarts.

use std::fs;

use kitchen_core::catalog;
use tracing::info;

use crate::{CsvStore, Error, Result, schema::TableKind};

impl CsvStore {
  /// Create the data and media directories and every missing table. The
  /// recipe table starts with the built-in catalog; the image tables start
  /// empty. Returns the tables that were created.
  ///
  /// Idempotent: a second call creates nothing.
  pub fn ensure_initialized(&self) -> Result<Vec<TableKind>> {
    let data_dir = &self.config().data_dir;
    fs::create_dir_all(data_dir).map_err(|e| Error::io(data_dir, e))?;
    self.media.ensure()?;

    let mut created = Vec::new();

    if !self.recipes.exists()? {
      let recipes = catalog::builtin_recipes();
      self.recipes.save(&recipes)?;
      info!(path = %self.recipes.path().display(), rows = recipes.len(), "seeded recipe table");
      created.push(TableKind::Recipes);
    }
    if !self.images.exists()? {
      self.images.save(&[])?;
      info!(path = %self.images.path().display(), "created recipe image table");
      created.push(TableKind::RecipeImages);
    }
    if !self.step_images.exists()? {
      self.step_images.save(&[])?;
      info!(path = %self.step_images.path().display(), "created step image table");
      created.push(TableKind::StepImages);
    }

    Ok(created)
  }
}
