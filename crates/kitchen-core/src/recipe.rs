//! Recipe types: one row per dish.
//!
//! A recipe is either a built-in default (seeded on first run, immutable and
//! protected from deletion) or user-added (deletable).

use std::{path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::{Error, Result};

/// Integer key of a recipe row. Allocated as max-existing + 1.
pub type RecipeId = u64;

// ─── Category ────────────────────────────────────────────────────────────────

/// The dietary category a recipe is filed under.
///
/// The string forms are the ones persisted in the recipe table.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
  #[serde(rename = "VEGETARIAN")]
  #[strum(serialize = "VEGETARIAN")]
  Vegetarian,
  #[serde(rename = "EGG-ETARIAN")]
  #[strum(serialize = "EGG-ETARIAN")]
  EggEtarian,
  #[serde(rename = "NON-VEGETARIAN")]
  #[strum(serialize = "NON-VEGETARIAN")]
  NonVegetarian,
}

impl Category {
  /// All categories in display order.
  pub fn all() -> impl Iterator<Item = Category> { Self::iter() }

  /// The persisted string form, e.g. `"EGG-ETARIAN"`.
  pub fn as_str(self) -> &'static str { self.into() }

  /// Parse user input, ignoring ASCII case and surrounding whitespace.
  pub fn parse(s: &str) -> Result<Self> {
    Self::from_str(s.trim()).map_err(|_| Error::UnknownCategory(s.to_owned()))
  }
}

// ─── Steps ───────────────────────────────────────────────────────────────────

/// Split free-form steps text into individual steps: the non-blank lines,
/// trimmed. Step `n` (1-based) is `parse_steps(text)[n - 1]`.
pub fn parse_steps(text: &str) -> Vec<&str> {
  text
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .collect()
}

// ─── Recipe ──────────────────────────────────────────────────────────────────

/// A persisted recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
  pub id:          RecipeId,
  pub name:        String,
  pub category:    Category,
  /// Free text; newlines are preserved.
  pub ingredients: String,
  /// Free text; see [`parse_steps`] for the structural reading.
  pub steps:       String,
  /// A file inside the media directory, if a video was attached.
  pub video_path:  Option<PathBuf>,
  /// Built-in rows are immutable and cannot be deleted.
  pub is_default:  bool,
}

impl Recipe {
  /// The individual steps of this recipe.
  pub fn steps(&self) -> Vec<&str> { parse_steps(&self.steps) }

  pub fn is_deletable(&self) -> bool { !self.is_default }

  /// The user-supplied part of this recipe.
  pub fn to_new(&self) -> NewRecipe {
    NewRecipe {
      name:        self.name.clone(),
      category:    self.category,
      ingredients: self.ingredients.clone(),
      steps:       self.steps.clone(),
    }
  }
}

// ─── NewRecipe ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::RecipeStore::create_recipe`].
/// The id is allocated by the store and `is_default` is always `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
  pub name:        String,
  pub category:    Category,
  pub ingredients: String,
  pub steps:       String,
}

impl NewRecipe {
  /// Reject the recipe if any required text field is blank.
  pub fn validate(&self) -> Result<()> {
    let missing: Vec<&str> = [
      ("name", &self.name),
      ("ingredients", &self.ingredients),
      ("steps", &self.steps),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
      Ok(())
    } else {
      Err(Error::Validation(format!(
        "missing required field(s): {}",
        missing.join(", ")
      )))
    }
  }
}
