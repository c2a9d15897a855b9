//! [`CsvStore`]: the flat-file implementation of [`RecipeStore`].

use std::path::{Path, PathBuf};

use kitchen_core::{
  media::{NewRecipeImage, NewStepImage, RecipeImage, StepImage},
  recipe::{NewRecipe, Recipe, RecipeId},
  store::{DeletedRecipe, RecipeQuery, RecipeStore},
};
use tracing::{debug, info};

use crate::{
  Error, Result, StoreConfig,
  encode::{MediaRow, RawRecipe, RawRecipeImage, RawStepImage},
  media::MediaDir,
  schema::TableKind,
  table::{Table, next_id},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A recipe catalog kept in three CSV files plus a media directory.
///
/// Holds paths only; every operation goes back to disk.
pub struct CsvStore {
  config:                 StoreConfig,
  pub(crate) recipes:     Table<RawRecipe>,
  pub(crate) images:      Table<RawRecipeImage>,
  pub(crate) step_images: Table<RawStepImage>,
  pub(crate) media:       MediaDir,
}

impl CsvStore {
  /// Open the store described by `config`, creating and seeding whatever is
  /// missing.
  pub fn open(config: StoreConfig) -> Result<Self> {
    let store = Self::new(config);
    store.ensure_initialized()?;
    Ok(store)
  }

  /// Build a store without touching the filesystem.
  pub fn new(config: StoreConfig) -> Self {
    Self {
      recipes: Table::new(config.table_path(TableKind::Recipes)),
      images: Table::new(config.table_path(TableKind::RecipeImages)),
      step_images: Table::new(config.table_path(TableKind::StepImages)),
      media: MediaDir::new(config.media_dir()),
      config,
    }
  }

  pub fn config(&self) -> &StoreConfig { &self.config }

  pub fn table_path(&self, table: TableKind) -> &Path {
    match table {
      TableKind::Recipes => self.recipes.path(),
      TableKind::RecipeImages => self.images.path(),
      TableKind::StepImages => self.step_images.path(),
    }
  }

  pub fn media_dir(&self) -> &Path { self.media.root() }

  /// The id the next row appended to `table` will receive.
  pub fn next_id(&self, table: TableKind) -> Result<u64> {
    match table {
      TableKind::Recipes => self.recipes.next_id(),
      TableKind::RecipeImages => self.images.next_id(),
      TableKind::StepImages => self.step_images.next_id(),
    }
  }

  /// Rows of `table` owned by `recipe_id`, in file order.
  fn media_rows<R: MediaRow>(
    &self,
    table: &Table<R>,
    recipe_id: RecipeId,
  ) -> Result<Vec<R::Record>> {
    let mut rows = table.load()?;
    rows.retain(|row| R::recipe_id(row) == recipe_id);
    Ok(rows)
  }

  /// Drop every row of `table` owned by `recipe_id` and discard its file.
  /// Returns the number of rows removed.
  fn purge<R: MediaRow>(&self, table: &Table<R>, recipe_id: RecipeId) -> Result<usize> {
    let (doomed, kept): (Vec<_>, Vec<_>) = table
      .load()?
      .into_iter()
      .partition(|row| R::recipe_id(row) == recipe_id);

    if doomed.is_empty() {
      return Ok(0);
    }
    for row in &doomed {
      self.media.discard(R::file_path(row));
    }
    table.save(&kept)?;
    Ok(doomed.len())
  }
}

// ─── RecipeStore impl ────────────────────────────────────────────────────────

impl RecipeStore for CsvStore {
  type Error = Error;

  // ── Recipes ───────────────────────────────────────────────────────────────

  fn list_recipes(&self, query: &RecipeQuery) -> Result<Vec<Recipe>> {
    let recipes = query.apply(self.recipes.load()?);
    debug!(?query, hits = recipes.len(), "listed recipes");
    Ok(recipes)
  }

  fn get_recipe(&self, id: RecipeId) -> Result<Option<Recipe>> {
    Ok(self.recipes.load()?.into_iter().find(|r| r.id == id))
  }

  fn create_recipe(&self, input: NewRecipe) -> Result<Recipe> {
    input.validate()?;

    let mut recipes = self.recipes.load()?;
    let recipe = Recipe {
      id:          next_id::<RawRecipe>(&recipes),
      name:        input.name,
      category:    input.category,
      ingredients: input.ingredients,
      steps:       input.steps,
      video_path:  None,
      is_default:  false,
    };
    recipes.push(recipe.clone());
    self.recipes.save(&recipes)?;

    info!(id = recipe.id, name = %recipe.name, "created recipe");
    Ok(recipe)
  }

  fn delete_recipe(&self, id: RecipeId) -> Result<DeletedRecipe> {
    let mut recipes = self.recipes.load()?;
    let index = recipes
      .iter()
      .position(|r| r.id == id)
      .ok_or(Error::RecipeNotFound(id))?;
    if recipes[index].is_default {
      return Err(Error::ProtectedRecipe(id));
    }

    let recipe = recipes.remove(index);
    self.recipes.save(&recipes)?;

    let images_removed = self.purge(&self.images, id)?;
    let step_images_removed = self.purge(&self.step_images, id)?;
    if let Some(video) = &recipe.video_path {
      self.media.discard(video);
    }

    info!(id, images_removed, step_images_removed, "deleted recipe");
    Ok(DeletedRecipe { recipe, images_removed, step_images_removed })
  }

  fn attach_video(&self, id: RecipeId, source: &Path) -> Result<Option<PathBuf>> {
    let mut recipes = self.recipes.load()?;
    let recipe = recipes
      .iter_mut()
      .find(|r| r.id == id)
      .ok_or(Error::RecipeNotFound(id))?;
    if recipe.is_default {
      return Err(Error::ProtectedRecipe(id));
    }

    let Some(stored) = self.media.store(source)? else {
      return Ok(None);
    };
    let previous = recipe.video_path.replace(stored.clone());

    if let Err(e) = self.recipes.save(&recipes) {
      self.media.discard(&stored);
      return Err(e);
    }
    if let Some(previous) = previous {
      self.media.discard(&previous);
    }

    info!(id, video = %stored.display(), "attached video");
    Ok(Some(stored))
  }

  // ── Media ─────────────────────────────────────────────────────────────────

  fn store_media(&self, source: &Path) -> Result<Option<PathBuf>> { self.media.store(source) }

  fn list_recipe_images(&self, recipe_id: RecipeId) -> Result<Vec<RecipeImage>> {
    self.media_rows(&self.images, recipe_id)
  }

  fn add_recipe_image(&self, input: NewRecipeImage) -> Result<RecipeImage> {
    let input = input.validate()?;
    let mut images = self.images.load()?;
    let image = RecipeImage {
      id:        next_id::<RawRecipeImage>(&images),
      recipe_id: input.recipe_id,
      file_path: input.file_path,
      caption:   input.caption,
    };
    images.push(image.clone());
    self.images.save(&images)?;

    debug!(id = image.id, recipe_id = image.recipe_id, "added recipe image");
    Ok(image)
  }

  fn list_step_images(&self, recipe_id: RecipeId) -> Result<Vec<StepImage>> {
    self.media_rows(&self.step_images, recipe_id)
  }

  fn add_step_image(&self, input: NewStepImage) -> Result<StepImage> {
    let input = input.validate()?;
    let mut images = self.step_images.load()?;
    let image = StepImage {
      id:         next_id::<RawStepImage>(&images),
      recipe_id:  input.recipe_id,
      step_index: input.step_index,
      file_path:  input.file_path,
    };
    images.push(image.clone());
    self.step_images.save(&images)?;

    debug!(
      id = image.id,
      recipe_id = image.recipe_id,
      step = image.step_index,
      "added step image"
    );
    Ok(image)
  }
}
