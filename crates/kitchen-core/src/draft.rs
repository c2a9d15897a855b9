//! Recipe drafts: a new recipe together with the media the user picked for
//! it, saved in one go.
//!
//! Media attachment is best effort: a source file that has vanished or cannot
//! be read is skipped and reported, and the recipe is still saved.

use std::path::PathBuf;

use serde::Serialize;

use crate::{
  Error, Result,
  media::{NewRecipeImage, NewStepImage, RecipeImage, StepImage},
  recipe::{NewRecipe, Recipe, parse_steps},
  store::RecipeStore,
};

/// An image the user selected for the recipe as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftImage {
  pub source:  PathBuf,
  pub caption: Option<String>,
}

/// An image the user selected for one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftStepImage {
  /// 1-based step number.
  pub step_index: u32,
  pub source:     PathBuf,
}

/// Input to [`submit_recipe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
  pub recipe:      NewRecipe,
  pub images:      Vec<DraftImage>,
  pub step_images: Vec<DraftStepImage>,
  pub video:       Option<PathBuf>,
}

impl RecipeDraft {
  pub fn new(recipe: NewRecipe) -> Self {
    Self { recipe, images: Vec::new(), step_images: Vec::new(), video: None }
  }

  /// Check the recipe fields and that every step image points at an existing
  /// step.
  pub fn validate(&self) -> Result<()> {
    self.recipe.validate()?;

    let steps = parse_steps(&self.recipe.steps).len();
    if let Some(bad) = self
      .step_images
      .iter()
      .find(|img| img.step_index == 0 || img.step_index as usize > steps)
    {
      return Err(Error::InvalidStepIndex { index: bad.step_index, steps });
    }
    Ok(())
  }
}

/// The outcome of [`submit_recipe`].
#[derive(Debug, Clone, Serialize)]
pub struct SubmittedRecipe {
  pub recipe:      Recipe,
  pub images:      Vec<RecipeImage>,
  pub step_images: Vec<StepImage>,
  /// Sources that could not be copied and were left out.
  pub skipped:     Vec<PathBuf>,
}

/// Validate `draft`, create its recipe, then attach every available image,
/// step image and the video.
///
/// Nothing is written if validation fails. Once the recipe row exists, an
/// unavailable media source only lands in [`SubmittedRecipe::skipped`].
pub fn submit_recipe<S: RecipeStore>(
  store: &S,
  draft: RecipeDraft,
) -> Result<SubmittedRecipe, S::Error> {
  draft.validate()?;

  let mut recipe = store.create_recipe(draft.recipe)?;
  let mut skipped = Vec::new();

  let mut images = Vec::with_capacity(draft.images.len());
  for image in draft.images {
    match store.store_media(&image.source)? {
      Some(file_path) => images.push(store.add_recipe_image(NewRecipeImage {
        recipe_id: recipe.id,
        file_path,
        caption: image.caption,
      })?),
      None => skipped.push(image.source),
    }
  }

  let mut step_images = Vec::with_capacity(draft.step_images.len());
  for image in draft.step_images {
    match store.store_media(&image.source)? {
      Some(file_path) => step_images.push(store.add_step_image(NewStepImage {
        recipe_id: recipe.id,
        step_index: image.step_index,
        file_path,
      })?),
      None => skipped.push(image.source),
    }
  }

  if let Some(video) = draft.video {
    match store.attach_video(recipe.id, &video)? {
      Some(path) => recipe.video_path = Some(path),
      None => skipped.push(video),
    }
  }

  Ok(SubmittedRecipe { recipe, images, step_images, skipped })
}
