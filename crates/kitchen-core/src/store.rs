//! The `RecipeStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `kitchen-store-csv`).
//! Front ends (`kitchen-cli`) depend on this abstraction, not on any concrete
//! backend.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
  media::{NewRecipeImage, NewStepImage, RecipeImage, StepImage},
  recipe::{Category, NewRecipe, Recipe, RecipeId},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`RecipeStore::list_recipes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeQuery {
  /// Restrict to one category (exact match).
  pub category: Option<Category>,
  /// Case-insensitive substring matched against name and ingredients.
  /// Blank text means no text filter.
  pub text:     Option<String>,
}

impl RecipeQuery {
  pub fn all() -> Self { Self::default() }

  pub fn category(category: Category) -> Self {
    Self { category: Some(category), text: None }
  }

  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  /// Whether `recipe` passes both filters.
  pub fn matches(&self, recipe: &Recipe) -> bool {
    if self.category.is_some_and(|c| c != recipe.category) {
      return false;
    }
    match self.needle() {
      None => true,
      Some(needle) => {
        recipe.name.to_lowercase().contains(&needle)
          || recipe.ingredients.to_lowercase().contains(&needle)
      }
    }
  }

  /// Filter `recipes` and sort the survivors by name.
  ///
  /// Names compare with `str` ordering (code points, case-sensitive). The sort
  /// is stable, so equal names keep their table order.
  pub fn apply(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
    let mut hits: Vec<Recipe> =
      recipes.into_iter().filter(|r| self.matches(r)).collect();
    hits.sort_by(|a, b| a.name.cmp(&b.name));
    hits
  }

  fn needle(&self) -> Option<String> {
    self
      .text
      .as_deref()
      .filter(|t| !t.trim().is_empty())
      .map(str::to_lowercase)
  }
}

// ─── Results ─────────────────────────────────────────────────────────────────

/// What [`RecipeStore::delete_recipe`] removed.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedRecipe {
  pub recipe:              Recipe,
  pub images_removed:      usize,
  pub step_images_removed: usize,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a recipe catalog backend.
///
/// Every call reads the authoritative storage afresh; implementations keep no
/// cached rows between calls. Calls are synchronous and assume a single
/// writer.
pub trait RecipeStore {
  type Error: std::error::Error + From<crate::Error> + Send + Sync + 'static;

  // ── Recipes ───────────────────────────────────────────────────────────

  /// Recipes matching `query`, sorted by name.
  fn list_recipes(&self, query: &RecipeQuery) -> Result<Vec<Recipe>, Self::Error>;

  /// Retrieve a recipe by id. Returns `None` if not found.
  fn get_recipe(&self, id: RecipeId) -> Result<Option<Recipe>, Self::Error>;

  /// Validate and persist a user recipe under a freshly allocated id.
  fn create_recipe(&self, input: NewRecipe) -> Result<Recipe, Self::Error>;

  /// Delete a user recipe together with its images and their files.
  ///
  /// Fails without any effect if the recipe is missing or a default one.
  fn delete_recipe(&self, id: RecipeId) -> Result<DeletedRecipe, Self::Error>;

  /// Copy `source` into the media directory and record it as the recipe's
  /// video. Returns `None`, leaving the recipe untouched, if the source is
  /// unavailable.
  fn attach_video(
    &self,
    id: RecipeId,
    source: &Path,
  ) -> Result<Option<PathBuf>, Self::Error>;

  // ── Media ─────────────────────────────────────────────────────────────

  /// Copy `source` into the media directory under a fresh unique name.
  /// Returns `None` if the source is empty, missing or unreadable.
  fn store_media(&self, source: &Path) -> Result<Option<PathBuf>, Self::Error>;

  /// Images of a recipe in insertion order.
  fn list_recipe_images(
    &self,
    recipe_id: RecipeId,
  ) -> Result<Vec<RecipeImage>, Self::Error>;

  fn add_recipe_image(&self, input: NewRecipeImage) -> Result<RecipeImage, Self::Error>;

  /// Step images of a recipe in insertion order.
  fn list_step_images(&self, recipe_id: RecipeId) -> Result<Vec<StepImage>, Self::Error>;

  fn add_step_image(&self, input: NewStepImage) -> Result<StepImage, Self::Error>;
}

#[cfg(test)]
mod tests {
  use super::*;

  fn recipe(id: RecipeId, name: &str, category: Category, ingredients: &str) -> Recipe {
    Recipe {
      id,
      name: name.into(),
      category,
      ingredients: ingredients.into(),
      steps: "Cook.".into(),
      video_path: None,
      is_default: false,
    }
  }

  fn sample() -> Vec<Recipe> {
    vec![
      recipe(1, "Omelette", Category::EggEtarian, "2 eggs\nSalt"),
      recipe(2, "Lemon Tea", Category::Vegetarian, "Water\nLemon"),
      recipe(3, "Chicken Curry", Category::NonVegetarian, "Chicken\nTEA masala"),
      recipe(4, "aloo fry", Category::Vegetarian, "Potato"),
      recipe(5, "Aloo Paratha", Category::Vegetarian, "Potato\nFlour"),
    ]
  }

  fn ids(recipes: &[Recipe]) -> Vec<RecipeId> { recipes.iter().map(|r| r.id).collect() }

  #[test]
  fn empty_query_sorts_everything_by_name() {
    let hits = RecipeQuery::all().apply(sample());
    // Uppercase sorts before lowercase.
    assert_eq!(ids(&hits), vec![5, 3, 2, 1, 4]);
  }

  #[test]
  fn category_filter_is_exact() {
    let hits = RecipeQuery::category(Category::Vegetarian).apply(sample());
    assert_eq!(ids(&hits), vec![5, 2, 4]);
    assert!(hits.iter().all(|r| r.category == Category::Vegetarian));
  }

  #[test]
  fn text_matches_name_or_ingredients_ignoring_case() {
    let hits = RecipeQuery::all().with_text("tea").apply(sample());
    assert_eq!(ids(&hits), vec![3, 2]);
  }

  #[test]
  fn text_and_category_combine() {
    let hits = RecipeQuery::category(Category::Vegetarian)
      .with_text("POTATO")
      .apply(sample());
    assert_eq!(ids(&hits), vec![5, 4]);
  }

  #[test]
  fn blank_text_is_no_filter() {
    let hits = RecipeQuery::all().with_text("   ").apply(sample());
    assert_eq!(hits.len(), 5);
  }

  #[test]
  fn text_is_matched_literally() {
    let hits = RecipeQuery::all().with_text("a.o").apply(sample());
    assert!(hits.is_empty());
  }
}
