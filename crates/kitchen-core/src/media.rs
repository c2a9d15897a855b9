//! Media association records: images attached to a recipe or to one of its
//! steps.
//!
//! Each row owns the file it points at: deleting the parent recipe deletes
//! both the row and the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, recipe::RecipeId};

/// Integer key of an image row. Each association table has its own sequence.
pub type ImageId = u64;

/// An image illustrating a whole recipe. The first one listed for a recipe is
/// its primary image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeImage {
  pub id:        ImageId,
  pub recipe_id: RecipeId,
  pub file_path: PathBuf,
  pub caption:   Option<String>,
}

/// An image illustrating a single step of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepImage {
  pub id:         ImageId,
  pub recipe_id:  RecipeId,
  /// 1-based index into [`crate::recipe::Recipe::steps`].
  pub step_index: u32,
  pub file_path:  PathBuf,
}

/// Input to [`crate::store::RecipeStore::add_recipe_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipeImage {
  pub recipe_id: RecipeId,
  /// A path already inside the media directory.
  pub file_path: PathBuf,
  pub caption:   Option<String>,
}

/// Input to [`crate::store::RecipeStore::add_step_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStepImage {
  pub recipe_id:  RecipeId,
  pub step_index: u32,
  pub file_path:  PathBuf,
}

impl NewRecipeImage {
  /// Reject a blank file path. An empty caption is treated as no caption.
  pub fn validate(self) -> Result<Self> {
    require_path(&self.file_path)?;
    Ok(Self { caption: self.caption.filter(|c| !c.is_empty()), ..self })
  }
}

impl NewStepImage {
  /// Reject step 0 and a blank file path.
  pub fn validate(self) -> Result<Self> {
    if self.step_index == 0 {
      return Err(Error::Validation("step_index is 1-based".into()));
    }
    require_path(&self.file_path)?;
    Ok(self)
  }
}

fn require_path(path: &Path) -> Result<()> {
  if path.to_string_lossy().trim().is_empty() {
    return Err(Error::Validation("missing required field: file_path".into()));
  }
  Ok(())
}
