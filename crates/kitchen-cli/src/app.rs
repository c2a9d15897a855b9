//! Command handlers. Each one talks to the store and prints the outcome.

use std::{
  fs,
  io::{self, BufRead, Write},
  path::{Path, PathBuf},
};

use anyhow::{Context as _, anyhow, bail};
use kitchen_core::{
  draft::{DraftImage, RecipeDraft, submit_recipe},
  recipe::{Category, NewRecipe, Recipe, RecipeId},
  store::{RecipeQuery, RecipeStore},
};
use kitchen_store_csv::{CsvStore, TableKind};
use serde::Serialize;

use crate::{AddArgs, render, viewer};

#[derive(Serialize)]
struct CategoryCount {
  category: Category,
  count:    usize,
}

#[derive(Serialize)]
struct RecipeView<'a> {
  #[serde(flatten)]
  recipe:      &'a Recipe,
  images:      Vec<kitchen_core::media::RecipeImage>,
  step_images: Vec<kitchen_core::media::StepImage>,
}

pub struct App {
  store: CsvStore,
  json:  bool,
}

impl App {
  pub fn new(store: CsvStore, json: bool) -> Self { Self { store, json } }

  // ── Browsing ──────────────────────────────────────────────────────────────

  pub fn categories(&self) -> anyhow::Result<()> {
    let all = self.store.list_recipes(&RecipeQuery::all())?;
    let counts: Vec<(Category, usize)> = Category::all()
      .map(|c| (c, all.iter().filter(|r| r.category == c).count()))
      .collect();

    let mut out = io::stdout().lock();
    if self.json {
      let rows: Vec<_> = counts
        .iter()
        .map(|&(category, count)| CategoryCount { category, count })
        .collect();
      render::json(&mut out, &rows)?;
    } else {
      render::category_counts(&mut out, &counts)?;
    }
    Ok(())
  }

  pub fn list(&self, category: Option<Category>, search: Option<String>) -> anyhow::Result<()> {
    let mut query = RecipeQuery { category, ..RecipeQuery::all() };
    if let Some(term) = search {
      query = query.with_text(term);
    }
    let recipes = self.store.list_recipes(&query)?;

    let mut out = io::stdout().lock();
    if self.json {
      render::json(&mut out, &recipes)?;
    } else {
      render::recipe_list(&mut out, &recipes)?;
    }
    Ok(())
  }

  pub fn show(&self, id: RecipeId) -> anyhow::Result<()> {
    let recipe = self.recipe(id)?;
    let images = self.store.list_recipe_images(id)?;
    let step_images = self.store.list_step_images(id)?;

    let mut out = io::stdout().lock();
    if self.json {
      render::json(&mut out, &RecipeView { recipe: &recipe, images, step_images })?;
    } else {
      render::recipe_detail(&mut out, &recipe, &images, &step_images)?;
    }
    Ok(())
  }

  // ── Editing ───────────────────────────────────────────────────────────────

  pub fn add(&self, args: AddArgs) -> anyhow::Result<()> {
    let ingredients = text_or_file(args.ingredients, args.ingredients_file.as_deref())?;
    let steps = text_or_file(args.steps, args.steps_file.as_deref())?;

    let mut draft = RecipeDraft::new(NewRecipe {
      name: args.name.trim().to_owned(),
      category: args.category,
      ingredients: ingredients.trim().to_owned(),
      steps: steps.trim().to_owned(),
    });
    draft.images = args
      .images
      .into_iter()
      .map(|source| DraftImage { source, caption: None })
      .collect();
    draft.step_images = args.step_images;
    draft.video = args.video;

    let submitted = submit_recipe(&self.store, draft).context("could not save recipe")?;

    let mut out = io::stdout().lock();
    if self.json {
      render::json(&mut out, &submitted)?;
    } else {
      writeln!(
        out,
        "Added recipe #{} \"{}\" with {} image(s) and {} step image(s).",
        submitted.recipe.id,
        submitted.recipe.name,
        submitted.images.len(),
        submitted.step_images.len(),
      )?;
      for source in &submitted.skipped {
        writeln!(out, "Skipped unavailable media: {}", source.display())?;
      }
    }
    Ok(())
  }

  pub fn delete(&self, id: RecipeId, yes: bool) -> anyhow::Result<()> {
    let recipe = self.recipe(id)?;
    if !recipe.is_deletable() {
      bail!("\"{}\" is a built-in recipe and cannot be deleted", recipe.name);
    }
    if !yes && !confirm(&format!("Delete \"{}\" and all of its media?", recipe.name))? {
      println!("Nothing deleted.");
      return Ok(());
    }

    let deleted = self.store.delete_recipe(id)?;

    let mut out = io::stdout().lock();
    if self.json {
      render::json(&mut out, &deleted)?;
    } else {
      writeln!(
        out,
        "Deleted \"{}\" ({} image(s), {} step image(s)).",
        deleted.recipe.name, deleted.images_removed, deleted.step_images_removed,
      )?;
    }
    Ok(())
  }

  pub fn attach_video(&self, id: RecipeId, path: &Path) -> anyhow::Result<()> {
    let stored = self
      .store
      .attach_video(id, path)?
      .ok_or_else(|| anyhow!("video {} is not available", path.display()))?;

    let mut out = io::stdout().lock();
    if self.json {
      render::json(&mut out, &stored)?;
    } else {
      writeln!(out, "Attached {} to recipe #{id}.", stored.display())?;
    }
    Ok(())
  }

  pub fn open_video(&self, id: RecipeId) -> anyhow::Result<()> {
    let recipe = self.recipe(id)?;
    let video = recipe
      .video_path
      .ok_or_else(|| anyhow!("\"{}\" has no video", recipe.name))?;
    viewer::open(&video)
  }

  pub fn init(&self) -> anyhow::Result<()> {
    let created = self.store.ensure_initialized()?;
    let mut out = io::stdout().lock();

    if self.json {
      let tables: Vec<PathBuf> = TableKind::ALL
        .iter()
        .map(|&t| self.store.table_path(t).to_path_buf())
        .collect();
      render::json(
        &mut out,
        &serde_json::json!({ "tables": tables, "media_dir": self.store.media_dir() }),
      )?;
    } else {
      for table in TableKind::ALL {
        let note = if created.contains(&table) { "  (created)" } else { "" };
        writeln!(out, "{}{note}", self.store.table_path(table).display())?;
      }
      writeln!(out, "{}", self.store.media_dir().display())?;
    }
    Ok(())
  }

  fn recipe(&self, id: RecipeId) -> anyhow::Result<Recipe> {
    self
      .store
      .get_recipe(id)?
      .ok_or_else(|| anyhow!("no recipe with id {id}"))
  }
}

/// The inline text if given, otherwise the contents of `file`.
fn text_or_file(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
  match (text, file) {
    (Some(text), _) => Ok(text),
    (None, Some(path)) => {
      fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
    (None, None) => Ok(String::new()),
  }
}

/// Ask a yes/no question on stdin. Anything but `y` or `yes` is a no.
fn confirm(question: &str) -> anyhow::Result<bool> {
  print!("{question} [y/N] ");
  io::stdout().flush()?;
  let mut answer = String::new();
  io::stdin().lock().read_line(&mut answer)?;
  Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
