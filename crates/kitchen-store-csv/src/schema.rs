//! Declared shape of the three CSV tables.
//!
//! Column order here is the order written to disk. On load, columns are
//! matched by header name, so reordered or extra columns are tolerated but a
//! missing one is a schema error.

use std::fmt;

pub const RECIPE_COLUMNS: &[&str] = &[
  "id",
  "name",
  "category",
  "ingredients",
  "steps",
  "video_path",
  "is_default",
];

pub const RECIPE_IMAGE_COLUMNS: &[&str] = &["id", "recipe_id", "file_path", "caption"];

pub const STEP_IMAGE_COLUMNS: &[&str] = &["id", "recipe_id", "step_index", "file_path"];

/// One of the persisted tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
  Recipes,
  RecipeImages,
  StepImages,
}

impl TableKind {
  pub const ALL: [TableKind; 3] = [Self::Recipes, Self::RecipeImages, Self::StepImages];

  /// File name inside the data directory.
  pub fn file_name(self) -> &'static str {
    match self {
      Self::Recipes => "recipes.csv",
      Self::RecipeImages => "recipe_images.csv",
      Self::StepImages => "step_images.csv",
    }
  }

  pub fn columns(self) -> &'static [&'static str] {
    match self {
      Self::Recipes => RECIPE_COLUMNS,
      Self::RecipeImages => RECIPE_IMAGE_COLUMNS,
      Self::StepImages => STEP_IMAGE_COLUMNS,
    }
  }
}

impl fmt::Display for TableKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.file_name())
  }
}
