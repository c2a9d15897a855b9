//! Encoding and decoding helpers between domain types and the plain-text
//! cells stored in CSV files.
//!
//! Categories are stored by their persisted name, flags as `1`/`0`, and an
//! absent optional value (video path, caption) as an empty cell.

use std::path::{Path, PathBuf};

use kitchen_core::{
  media::{ImageId, RecipeImage, StepImage},
  recipe::{Category, Recipe, RecipeId},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::schema::TableKind;

// ─── Row mapping ─────────────────────────────────────────────────────────────

/// A raw CSV row shape and its mapping to a domain record.
///
/// Struct field order must match [`TableKind::columns`], since rows are
/// written without a serde-generated header.
pub trait Row: Serialize + DeserializeOwned {
  const TABLE: TableKind;

  type Record;

  /// Convert to the domain record; `Err` carries a human-readable reason.
  fn decode(self) -> Result<Self::Record, String>;

  fn encode(record: &Self::Record) -> Self;

  /// The record's primary key.
  fn key(record: &Self::Record) -> u64;
}

/// Rows of the association tables, owned by a recipe and by a media file.
pub trait MediaRow: Row {
  fn recipe_id(record: &Self::Record) -> RecipeId;

  fn file_path(record: &Self::Record) -> &Path;
}

// ─── Cells ───────────────────────────────────────────────────────────────────

pub fn encode_flag(flag: bool) -> String { String::from(if flag { "1" } else { "0" }) }

pub fn decode_flag(s: &str) -> Result<bool, String> {
  match s.trim().to_ascii_lowercase().as_str() {
    "1" | "true" => Ok(true),
    "0" | "false" => Ok(false),
    other => Err(format!("invalid flag: {other:?}")),
  }
}

pub fn encode_path(path: Option<&Path>) -> String {
  path.map(|p| p.to_string_lossy().into_owned()).unwrap_or_default()
}

pub fn decode_path(s: String) -> Option<PathBuf> {
  (!s.trim().is_empty()).then(|| PathBuf::from(s))
}

fn decode_text(s: String) -> Option<String> { (!s.is_empty()).then_some(s) }

fn require_path(s: String) -> Result<PathBuf, String> {
  decode_path(s).ok_or_else(|| "empty file_path".to_owned())
}

// ─── Recipes ─────────────────────────────────────────────────────────────────

/// Raw cells of a `recipes.csv` row.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawRecipe {
  pub id:          RecipeId,
  pub name:        String,
  pub category:    String,
  pub ingredients: String,
  pub steps:       String,
  pub video_path:  String,
  pub is_default:  String,
}

impl Row for RawRecipe {
  const TABLE: TableKind = TableKind::Recipes;

  type Record = Recipe;

  fn decode(self) -> Result<Recipe, String> {
    let recipe = Recipe {
      id:          self.id,
      category:    Category::parse(&self.category).map_err(|e| e.to_string())?,
      is_default:  decode_flag(&self.is_default)?,
      video_path:  decode_path(self.video_path),
      name:        self.name,
      ingredients: self.ingredients,
      steps:       self.steps,
    };
    recipe.to_new().validate().map_err(|e| e.to_string())?;
    Ok(recipe)
  }

  fn encode(r: &Recipe) -> Self {
    Self {
      id:          r.id,
      name:        r.name.clone(),
      category:    r.category.as_str().to_owned(),
      ingredients: r.ingredients.clone(),
      steps:       r.steps.clone(),
      video_path:  encode_path(r.video_path.as_deref()),
      is_default:  encode_flag(r.is_default),
    }
  }

  fn key(r: &Recipe) -> u64 { r.id }
}

// ─── Recipe images ───────────────────────────────────────────────────────────

/// Raw cells of a `recipe_images.csv` row.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawRecipeImage {
  pub id:        ImageId,
  pub recipe_id: RecipeId,
  pub file_path: String,
  pub caption:   String,
}

impl Row for RawRecipeImage {
  const TABLE: TableKind = TableKind::RecipeImages;

  type Record = RecipeImage;

  fn decode(self) -> Result<RecipeImage, String> {
    Ok(RecipeImage {
      id:        self.id,
      recipe_id: self.recipe_id,
      file_path: require_path(self.file_path)?,
      caption:   decode_text(self.caption),
    })
  }

  fn encode(img: &RecipeImage) -> Self {
    Self {
      id:        img.id,
      recipe_id: img.recipe_id,
      file_path: encode_path(Some(&img.file_path)),
      caption:   img.caption.clone().unwrap_or_default(),
    }
  }

  fn key(img: &RecipeImage) -> u64 { img.id }
}

impl MediaRow for RawRecipeImage {
  fn recipe_id(img: &RecipeImage) -> RecipeId { img.recipe_id }

  fn file_path(img: &RecipeImage) -> &Path { &img.file_path }
}

// ─── Step images ─────────────────────────────────────────────────────────────

/// Raw cells of a `step_images.csv` row.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawStepImage {
  pub id:         ImageId,
  pub recipe_id:  RecipeId,
  pub step_index: u32,
  pub file_path:  String,
}

impl Row for RawStepImage {
  const TABLE: TableKind = TableKind::StepImages;

  type Record = StepImage;

  fn decode(self) -> Result<StepImage, String> {
    if self.step_index == 0 {
      return Err("step_index is 1-based".to_owned());
    }
    Ok(StepImage {
      id:         self.id,
      recipe_id:  self.recipe_id,
      step_index: self.step_index,
      file_path:  require_path(self.file_path)?,
    })
  }

  fn encode(img: &StepImage) -> Self {
    Self {
      id:         img.id,
      recipe_id:  img.recipe_id,
      step_index: img.step_index,
      file_path:  encode_path(Some(&img.file_path)),
    }
  }

  fn key(img: &StepImage) -> u64 { img.id }
}

impl MediaRow for RawStepImage {
  fn recipe_id(img: &StepImage) -> RecipeId { img.recipe_id }

  fn file_path(img: &StepImage) -> &Path { &img.file_path }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn raw_recipe() -> RawRecipe {
    RawRecipe {
      id:          7,
      name:        "Pav Bhaji".into(),
      category:    "VEGETARIAN".into(),
      ingredients: "Butter\nPav".into(),
      steps:       "Mash.\nToast.".into(),
      video_path:  String::new(),
      is_default:  "1".into(),
    }
  }

  #[test]
  fn flags_accept_numbers_and_words() {
    assert_eq!(decode_flag("1"), Ok(true));
    assert_eq!(decode_flag(" False "), Ok(false));
    assert!(decode_flag("yes").is_err());
    assert_eq!(encode_flag(true), "1");
  }

  #[test]
  fn empty_video_cell_is_none() {
    let recipe = raw_recipe().decode().unwrap();
    assert_eq!(recipe.video_path, None);
    assert!(recipe.is_default);
    assert_eq!(RawRecipe::encode(&recipe).video_path, "");
  }

  #[test]
  fn unknown_category_is_malformed() {
    let mut raw = raw_recipe();
    raw.category = "VEGAN".into();
    assert!(raw.decode().unwrap_err().contains("VEGAN"));
  }

  #[test]
  fn blank_steps_are_malformed() {
    let mut raw = raw_recipe();
    raw.steps = " ".into();
    assert!(raw.decode().unwrap_err().contains("steps"));
  }

  #[test]
  fn empty_caption_is_none() {
    let img = RawRecipeImage {
      id:        1,
      recipe_id: 108,
      file_path: "media/abc.png".into(),
      caption:   String::new(),
    }
    .decode()
    .unwrap();
    assert_eq!(img.caption, None);
    assert_eq!(img.file_path, PathBuf::from("media/abc.png"));
  }

  #[test]
  fn step_index_zero_is_malformed() {
    let raw = RawStepImage {
      id:         1,
      recipe_id:  108,
      step_index: 0,
      file_path:  "media/abc.png".into(),
    };
    assert!(raw.decode().is_err());
  }
}
