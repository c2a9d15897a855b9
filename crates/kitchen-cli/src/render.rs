//! Plain-text rendering of store results.

use std::io::{self, Write};

use kitchen_core::{
  media::{RecipeImage, StepImage},
  recipe::{Category, Recipe},
};

/// One line per recipe: id, name, and a marker for user-added rows.
pub fn recipe_list(out: &mut impl Write, recipes: &[Recipe]) -> io::Result<()> {
  if recipes.is_empty() {
    return writeln!(out, "No recipes found.");
  }
  let width = recipes.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
  for recipe in recipes {
    let marker = if recipe.is_default { "" } else { "  (yours)" };
    writeln!(out, "{:>width$}  {}{marker}", recipe.id, recipe.name)?;
  }
  Ok(())
}

pub fn category_counts(out: &mut impl Write, counts: &[(Category, usize)]) -> io::Result<()> {
  for (category, count) in counts {
    writeln!(out, "{:<16}{count}", category.as_str())?;
  }
  Ok(())
}

/// The full recipe view: ingredients, numbered steps with their images,
/// recipe images with the primary one first, then the video.
pub fn recipe_detail(
  out: &mut impl Write,
  recipe: &Recipe,
  images: &[RecipeImage],
  step_images: &[StepImage],
) -> io::Result<()> {
  let origin = if recipe.is_default { "built-in" } else { "yours" };
  writeln!(out, "{}", recipe.name)?;
  writeln!(out, "#{} · {} · {origin}", recipe.id, recipe.category)?;

  writeln!(out, "\nIngredients")?;
  for line in recipe.ingredients.lines().map(str::trim).filter(|l| !l.is_empty()) {
    writeln!(out, "  {line}")?;
  }

  writeln!(out, "\nSteps")?;
  for (n, step) in (1u32..).zip(recipe.steps()) {
    writeln!(out, "  {n}. {step}")?;
    for image in step_images.iter().filter(|i| i.step_index == n) {
      writeln!(out, "     [image] {}", image.file_path.display())?;
    }
  }

  if !images.is_empty() {
    writeln!(out, "\nImages")?;
    for (i, image) in images.iter().enumerate() {
      let primary = if i == 0 { " (primary)" } else { "" };
      match &image.caption {
        Some(caption) => writeln!(out, "  {}{primary}: {caption}", image.file_path.display())?,
        None => writeln!(out, "  {}{primary}", image.file_path.display())?,
      }
    }
  }

  if let Some(video) = &recipe.video_path {
    writeln!(out, "\nVideo: {}", video.display())?;
  }
  Ok(())
}

/// Pretty-printed JSON followed by a newline.
pub fn json(out: &mut impl Write, value: &impl serde::Serialize) -> io::Result<()> {
  serde_json::to_writer_pretty(&mut *out, value)?;
  writeln!(out)
}
