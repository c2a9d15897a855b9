//! Integration tests for `CsvStore` against a temporary directory.

use std::{
  fs,
  path::{Path, PathBuf},
};

use kitchen_core::{
  catalog::BUILTIN_RECIPES,
  draft::{DraftImage, DraftStepImage, RecipeDraft, submit_recipe},
  media::{NewRecipeImage, NewStepImage},
  recipe::{Category, NewRecipe},
  store::{RecipeQuery, RecipeStore},
};
use tempfile::TempDir;

use crate::{CsvStore, Error, StoreConfig, TableKind};

fn store() -> (TempDir, CsvStore) {
  let dir = TempDir::new().expect("temp dir");
  let store = CsvStore::open(StoreConfig::new(dir.path())).expect("open store");
  (dir, store)
}

fn tea() -> NewRecipe {
  NewRecipe {
    name:        "Tea".into(),
    category:    Category::Vegetarian,
    ingredients: "Water, tea leaves".into(),
    steps:       "Boil. Steep. Serve.".into(),
  }
}

fn chai() -> NewRecipe {
  NewRecipe {
    name:        "Masala Chai".into(),
    category:    Category::Vegetarian,
    ingredients: "Milk\nTea leaves\nCardamom".into(),
    steps:       "Boil milk.\nAdd tea and spices.\nStrain and serve.".into(),
  }
}

/// Write a small source file outside the media directory.
fn source_file(dir: &TempDir, name: &str) -> PathBuf {
  let path = dir.path().join(name);
  fs::write(&path, name.as_bytes()).unwrap();
  path
}

fn count_all(s: &CsvStore) -> usize { s.list_recipes(&RecipeQuery::all()).unwrap().len() }

// ─── Initialisation ──────────────────────────────────────────────────────────

#[test]
fn fresh_store_is_seeded_with_the_catalog() {
  let (dir, s) = store();

  let all = s.list_recipes(&RecipeQuery::all()).unwrap();
  assert_eq!(all.len(), 107);
  assert!(all.iter().all(|r| r.is_default));

  for table in TableKind::ALL {
    assert!(dir.path().join(table.file_name()).exists());
  }
  assert!(s.media_dir().is_dir());
  assert!(s.list_recipe_images(1).unwrap().is_empty());
  assert!(s.list_step_images(1).unwrap().is_empty());
}

#[test]
fn seeded_rows_match_the_catalog() {
  let (_dir, s) = store();
  for entry in BUILTIN_RECIPES {
    assert_eq!(s.get_recipe(entry.id).unwrap(), Some(entry.to_recipe()));
  }
}

#[test]
fn ensure_initialized_twice_changes_nothing() {
  let (_dir, s) = store();
  let created = s.create_recipe(tea()).unwrap();
  let before = fs::read(s.table_path(TableKind::Recipes)).unwrap();

  assert!(s.ensure_initialized().unwrap().is_empty());

  assert_eq!(fs::read(s.table_path(TableKind::Recipes)).unwrap(), before);
  assert_eq!(s.get_recipe(created.id).unwrap(), Some(created));
}

#[test]
fn existing_empty_recipe_table_is_not_reseeded() {
  let dir = TempDir::new().unwrap();
  fs::write(
    dir.path().join("recipes.csv"),
    "id,name,category,ingredients,steps,video_path,is_default\n",
  )
  .unwrap();

  let s = CsvStore::open(StoreConfig::new(dir.path())).unwrap();

  assert_eq!(count_all(&s), 0);
  assert_eq!(s.next_id(TableKind::Recipes).unwrap(), 1);
}

#[test]
fn first_open_reports_created_tables() {
  let dir = TempDir::new().unwrap();
  let s = CsvStore::new(StoreConfig::new(dir.path().join("nested/data")));

  assert_eq!(s.ensure_initialized().unwrap(), TableKind::ALL.to_vec());
  assert!(s.ensure_initialized().unwrap().is_empty());
}

#[test]
fn media_dir_can_live_elsewhere() {
  let dir = TempDir::new().unwrap();
  let config = StoreConfig::new(dir.path().join("data")).with_media_dir(dir.path().join("assets"));
  let s = CsvStore::open(config).unwrap();

  let stored = s.store_media(&source_file(&dir, "a.png")).unwrap().unwrap();
  assert_eq!(stored.parent(), Some(dir.path().join("assets").as_path()));
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[test]
fn category_listing_is_filtered_and_sorted() {
  let (_dir, s) = store();
  for category in Category::all() {
    let hits = s.list_recipes(&RecipeQuery::category(category)).unwrap();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|r| r.category == category));
    assert!(hits.windows(2).all(|w| w[0].name <= w[1].name));
  }
}

#[test]
fn search_matches_name_or_ingredients_case_insensitively() {
  let (_dir, s) = store();
  let all = s.list_recipes(&RecipeQuery::all()).unwrap();

  for term in ["paneer", "EGG", "Rice", "coconut milk", "zzz"] {
    let hits = s.list_recipes(&RecipeQuery::all().with_text(term)).unwrap();
    let needle = term.to_lowercase();
    let expected: Vec<_> = all
      .iter()
      .filter(|r| {
        r.name.to_lowercase().contains(&needle) || r.ingredients.to_lowercase().contains(&needle)
      })
      .map(|r| r.id)
      .collect();
    let mut got: Vec<_> = hits.iter().map(|r| r.id).collect();
    let mut want = expected.clone();
    got.sort_unstable();
    want.sort_unstable();
    assert_eq!(got, want, "term {term:?}");
  }
}

#[test]
fn paneer_search_finds_paneer_dishes() {
  let (_dir, s) = store();
  let hits = s.list_recipes(&RecipeQuery::all().with_text("PANEER")).unwrap();
  let names: Vec<_> = hits.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(names, vec![
    "Egg Paneer Bhurji",
    "Malai Kofta",
    "Paneer 65",
    "Paneer Butter Masala",
  ]);
}

#[test]
fn empty_search_term_returns_the_category() {
  let (_dir, s) = store();
  let plain = s.list_recipes(&RecipeQuery::category(Category::EggEtarian)).unwrap();
  let blank = s
    .list_recipes(&RecipeQuery::category(Category::EggEtarian).with_text(""))
    .unwrap();
  assert_eq!(plain, blank);
  assert_eq!(plain.len(), 40);
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[test]
fn create_then_get_round_trips() {
  let (_dir, s) = store();
  let input = chai();

  let created = s.create_recipe(input.clone()).unwrap();
  assert_eq!(created.id, 108);
  assert!(!created.is_default);

  let fetched = s.get_recipe(created.id).unwrap().unwrap();
  assert_eq!(fetched.to_new(), input);
  assert!(!fetched.is_default);
  assert_eq!(fetched.video_path, None);
  assert_eq!(fetched.steps().len(), 3);
}

#[test]
fn create_rejects_blank_fields_without_writing() {
  let (_dir, s) = store();
  let before = fs::read(s.table_path(TableKind::Recipes)).unwrap();

  let mut input = tea();
  input.ingredients = "  \n ".into();
  let err = s.create_recipe(input).unwrap_err();

  assert!(matches!(err, Error::Core(kitchen_core::Error::Validation(_))), "{err}");
  assert_eq!(fs::read(s.table_path(TableKind::Recipes)).unwrap(), before);
}

#[test]
fn get_missing_recipe_is_none() {
  let (_dir, s) = store();
  assert_eq!(s.get_recipe(9999).unwrap(), None);
}

#[test]
fn next_id_exceeds_every_existing_id() {
  let (_dir, s) = store();
  assert_eq!(s.next_id(TableKind::Recipes).unwrap(), 108);
  assert_eq!(s.next_id(TableKind::RecipeImages).unwrap(), 1);

  let a = s.create_recipe(tea()).unwrap();
  let b = s.create_recipe(chai()).unwrap();
  s.delete_recipe(a.id).unwrap();

  // Ids are never reused while a larger one exists.
  assert_eq!(s.next_id(TableKind::Recipes).unwrap(), b.id + 1);
}

#[test]
fn next_id_of_deleted_table_file_is_one() {
  let (_dir, s) = store();
  fs::remove_file(s.table_path(TableKind::StepImages)).unwrap();
  assert_eq!(s.next_id(TableKind::StepImages).unwrap(), 1);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[test]
fn default_recipe_is_protected() {
  let (_dir, s) = store();
  let before = fs::read(s.table_path(TableKind::Recipes)).unwrap();

  let err = s.delete_recipe(1).unwrap_err();

  assert!(matches!(err, Error::ProtectedRecipe(1)), "{err}");
  assert_eq!(fs::read(s.table_path(TableKind::Recipes)).unwrap(), before);
  assert_eq!(count_all(&s), 107);
}

#[test]
fn deleting_missing_recipe_is_not_found() {
  let (_dir, s) = store();
  assert!(matches!(s.delete_recipe(500), Err(Error::RecipeNotFound(500))));
}

#[test]
fn delete_cascades_to_images_and_files() {
  let (dir, s) = store();
  let recipe = s.create_recipe(chai()).unwrap();
  let other = s.create_recipe(tea()).unwrap();

  let mut files = Vec::new();
  for (i, name) in ["a.png", "b.jpg"].into_iter().enumerate() {
    let stored = s.store_media(&source_file(&dir, name)).unwrap().unwrap();
    s.add_recipe_image(NewRecipeImage {
      recipe_id: recipe.id,
      file_path: stored.clone(),
      caption:   (i == 0).then(|| "plated".to_owned()),
    })
    .unwrap();
    files.push(stored);
  }
  for (step, name) in [(1, "s1.png"), (3, "s3.png"), (3, "s3b.png")] {
    let stored = s.store_media(&source_file(&dir, name)).unwrap().unwrap();
    s.add_step_image(NewStepImage { recipe_id: recipe.id, step_index: step, file_path: stored.clone() })
      .unwrap();
    files.push(stored);
  }
  let kept = s.store_media(&source_file(&dir, "other.png")).unwrap().unwrap();
  s.add_recipe_image(NewRecipeImage { recipe_id: other.id, file_path: kept.clone(), caption: None })
    .unwrap();

  let deleted = s.delete_recipe(recipe.id).unwrap();

  assert_eq!(deleted.recipe.id, recipe.id);
  assert_eq!(deleted.images_removed, 2);
  assert_eq!(deleted.step_images_removed, 3);
  assert_eq!(s.get_recipe(recipe.id).unwrap(), None);
  assert!(s.list_recipe_images(recipe.id).unwrap().is_empty());
  assert!(s.list_step_images(recipe.id).unwrap().is_empty());
  assert!(files.iter().all(|f| !f.exists()));

  // The other recipe's media is untouched.
  assert_eq!(s.list_recipe_images(other.id).unwrap().len(), 1);
  assert!(kept.exists());
}

#[test]
fn delete_survives_already_missing_media_files() {
  let (dir, s) = store();
  let recipe = s.create_recipe(tea()).unwrap();
  let stored = s.store_media(&source_file(&dir, "gone.png")).unwrap().unwrap();
  s.add_recipe_image(NewRecipeImage { recipe_id: recipe.id, file_path: stored.clone(), caption: None })
    .unwrap();
  fs::remove_file(&stored).unwrap();

  let deleted = s.delete_recipe(recipe.id).unwrap();
  assert_eq!(deleted.images_removed, 1);
  assert!(s.list_recipe_images(recipe.id).unwrap().is_empty());
}

// ─── Media associations ──────────────────────────────────────────────────────

#[test]
fn images_are_listed_in_insertion_order() {
  let (_dir, s) = store();
  let recipe = s.create_recipe(tea()).unwrap();
  for name in ["media/z.png", "media/a.png", "media/m.png"] {
    s.add_recipe_image(NewRecipeImage {
      recipe_id: recipe.id,
      file_path: name.into(),
      caption:   None,
    })
    .unwrap();
  }

  let images = s.list_recipe_images(recipe.id).unwrap();
  let paths: Vec<_> = images.iter().map(|i| i.file_path.as_path()).collect();
  assert_eq!(paths, vec![
    Path::new("media/z.png"),
    Path::new("media/a.png"),
    Path::new("media/m.png"),
  ]);
  let ids: Vec<_> = images.iter().map(|i| i.id).collect();
  assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn step_images_keep_their_index() {
  let (_dir, s) = store();
  let recipe = s.create_recipe(chai()).unwrap();
  let added = s
    .add_step_image(NewStepImage {
      recipe_id:  recipe.id,
      step_index: 2,
      file_path:  "media/step.png".into(),
    })
    .unwrap();

  assert_eq!(s.list_step_images(recipe.id).unwrap(), vec![added]);
}

#[test]
fn step_image_zero_is_rejected_and_table_stays_loadable() {
  let (_dir, s) = store();
  let recipe = s.create_recipe(chai()).unwrap();
  let before = fs::read(s.table_path(TableKind::StepImages)).unwrap();

  let err = s
    .add_step_image(NewStepImage { recipe_id: recipe.id, step_index: 0, file_path: "media/s.png".into() })
    .unwrap_err();

  assert!(matches!(err, Error::Core(kitchen_core::Error::Validation(_))), "{err}");
  assert_eq!(fs::read(s.table_path(TableKind::StepImages)).unwrap(), before);
  assert!(s.list_step_images(recipe.id).unwrap().is_empty());
  s.delete_recipe(recipe.id).unwrap();
}

#[test]
fn blank_image_paths_are_rejected_and_tables_stay_loadable() {
  let (_dir, s) = store();
  let recipe = s.create_recipe(chai()).unwrap();
  let images_before = fs::read(s.table_path(TableKind::RecipeImages)).unwrap();
  let steps_before = fs::read(s.table_path(TableKind::StepImages)).unwrap();

  let err = s
    .add_recipe_image(NewRecipeImage { recipe_id: recipe.id, file_path: "".into(), caption: None })
    .unwrap_err();
  assert!(matches!(err, Error::Core(kitchen_core::Error::Validation(_))), "{err}");
  let err = s
    .add_step_image(NewStepImage { recipe_id: recipe.id, step_index: 1, file_path: "  ".into() })
    .unwrap_err();
  assert!(matches!(err, Error::Core(kitchen_core::Error::Validation(_))), "{err}");

  assert_eq!(fs::read(s.table_path(TableKind::RecipeImages)).unwrap(), images_before);
  assert_eq!(fs::read(s.table_path(TableKind::StepImages)).unwrap(), steps_before);
  assert!(s.list_recipe_images(recipe.id).unwrap().is_empty());
  s.delete_recipe(recipe.id).unwrap();
}

#[test]
fn empty_caption_is_stored_as_none() {
  let (_dir, s) = store();
  let recipe = s.create_recipe(tea()).unwrap();
  let added = s
    .add_recipe_image(NewRecipeImage {
      recipe_id: recipe.id,
      file_path: "media/a.png".into(),
      caption:   Some(String::new()),
    })
    .unwrap();

  assert_eq!(added.caption, None);
  assert_eq!(s.list_recipe_images(recipe.id).unwrap(), vec![added]);
}

#[test]
fn store_media_skips_missing_source() {
  let (_dir, s) = store();
  assert_eq!(s.store_media(Path::new("/nonexistent/path.png")).unwrap(), None);
}

// ─── Video ───────────────────────────────────────────────────────────────────

#[test]
fn attach_video_sets_the_path() {
  let (dir, s) = store();
  let recipe = s.create_recipe(tea()).unwrap();

  let stored = s
    .attach_video(recipe.id, &source_file(&dir, "clip.mp4"))
    .unwrap()
    .unwrap();

  assert_eq!(stored.extension().unwrap(), "mp4");
  assert_eq!(s.get_recipe(recipe.id).unwrap().unwrap().video_path, Some(stored));
}

#[test]
fn attach_unavailable_video_leaves_recipe_unchanged() {
  let (dir, s) = store();
  let recipe = s.create_recipe(tea()).unwrap();
  let first = s.attach_video(recipe.id, &source_file(&dir, "clip.mp4")).unwrap();

  let second = s.attach_video(recipe.id, Path::new("/nonexistent/clip.mov")).unwrap();

  assert_eq!(second, None);
  assert_eq!(s.get_recipe(recipe.id).unwrap().unwrap().video_path, first);
}

#[test]
fn replacing_a_video_discards_the_old_copy() {
  let (dir, s) = store();
  let recipe = s.create_recipe(tea()).unwrap();
  let first = s.attach_video(recipe.id, &source_file(&dir, "a.mp4")).unwrap().unwrap();
  let second = s.attach_video(recipe.id, &source_file(&dir, "b.mp4")).unwrap().unwrap();

  assert!(!first.exists());
  assert!(second.exists());
}

#[test]
fn default_recipes_take_no_video() {
  let (dir, s) = store();
  let err = s.attach_video(3, &source_file(&dir, "clip.mp4")).unwrap_err();
  assert!(matches!(err, Error::ProtectedRecipe(3)));
  assert_eq!(fs::read_dir(s.media_dir()).unwrap().count(), 0);
}

#[test]
fn attach_video_to_missing_recipe_copies_nothing() {
  let (dir, s) = store();
  let err = s.attach_video(4242, &source_file(&dir, "clip.mp4")).unwrap_err();
  assert!(matches!(err, Error::RecipeNotFound(4242)));
  assert_eq!(fs::read_dir(s.media_dir()).unwrap().count(), 0);
}

#[test]
fn deleting_a_recipe_removes_its_video() {
  let (dir, s) = store();
  let recipe = s.create_recipe(tea()).unwrap();
  let video = s.attach_video(recipe.id, &source_file(&dir, "clip.mp4")).unwrap().unwrap();

  s.delete_recipe(recipe.id).unwrap();
  assert!(!video.exists());
}

// ─── Drafts ──────────────────────────────────────────────────────────────────

#[test]
fn submit_draft_with_all_media() {
  let (dir, s) = store();
  let mut draft = RecipeDraft::new(chai());
  draft.images.push(DraftImage { source: source_file(&dir, "hero.png"), caption: Some("hero".into()) });
  draft.step_images.push(DraftStepImage { step_index: 2, source: source_file(&dir, "s2.png") });
  draft.video = Some(source_file(&dir, "how-to.mkv"));

  let submitted = submit_recipe(&s, draft).unwrap();

  assert!(submitted.skipped.is_empty());
  let id = submitted.recipe.id;
  assert_eq!(s.list_recipe_images(id).unwrap(), submitted.images);
  assert_eq!(s.list_step_images(id).unwrap(), submitted.step_images);
  assert_eq!(submitted.step_images[0].step_index, 2);
  let stored = s.get_recipe(id).unwrap().unwrap();
  assert_eq!(stored, submitted.recipe);
  assert!(stored.video_path.is_some_and(|p| p.exists()));
}

#[test]
fn submit_draft_skips_unavailable_media() {
  let (_dir, s) = store();
  let mut draft = RecipeDraft::new(tea());
  draft.images.push(DraftImage { source: "/nonexistent/path.png".into(), caption: None });

  let submitted = submit_recipe(&s, draft).unwrap();

  assert_eq!(submitted.skipped, vec![PathBuf::from("/nonexistent/path.png")]);
  assert!(submitted.images.is_empty());
  assert!(s.list_recipe_images(submitted.recipe.id).unwrap().is_empty());
  assert!(s.get_recipe(submitted.recipe.id).unwrap().is_some());
}

#[test]
fn submit_draft_with_bad_step_writes_nothing() {
  let (dir, s) = store();
  let mut draft = RecipeDraft::new(tea());
  draft.step_images.push(DraftStepImage { step_index: 2, source: source_file(&dir, "s.png") });

  let err = submit_recipe(&s, draft).unwrap_err();

  assert!(matches!(
    err,
    Error::Core(kitchen_core::Error::InvalidStepIndex { index: 2, steps: 1 })
  ));
  assert_eq!(count_all(&s), 107);
  assert_eq!(fs::read_dir(s.media_dir()).unwrap().count(), 0);
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn add_find_and_delete_a_user_recipe() {
  let (_dir, s) = store();
  assert_eq!(count_all(&s), 107);

  let created = s.create_recipe(tea()).unwrap();

  let hits = s
    .list_recipes(&RecipeQuery::category(Category::Vegetarian).with_text("Tea"))
    .unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].name, "Tea");
  assert!(!hits[0].is_default);

  s.delete_recipe(created.id).unwrap();
  let all = s.list_recipes(&RecipeQuery::all()).unwrap();
  assert_eq!(all.len(), 107);
  assert!(all.iter().all(|r| r.id != created.id));
}

#[test]
fn user_edits_survive_reopening() {
  let dir = TempDir::new().unwrap();
  let config = StoreConfig::new(dir.path());
  let created = {
    let s = CsvStore::open(config.clone()).unwrap();
    s.create_recipe(tea()).unwrap()
  };

  let s = CsvStore::open(config).unwrap();
  assert_eq!(s.get_recipe(created.id).unwrap(), Some(created));
  assert_eq!(count_all(&s), 108);
}

// ─── Malformed files ─────────────────────────────────────────────────────────

#[test]
fn recipe_table_missing_a_column_fails_to_load() {
  let (_dir, s) = store();
  fs::write(
    s.table_path(TableKind::Recipes),
    "id,name,category,ingredients,instrustepsctions,video_path,is_default\n",
  )
  .unwrap();

  let err = s.list_recipes(&RecipeQuery::all()).unwrap_err();
  assert!(matches!(err, Error::Schema { table: TableKind::Recipes, column: "steps" }), "{err}");
}

#[test]
fn recipe_row_with_blank_steps_fails_to_load() {
  let (_dir, s) = store();
  fs::write(
    s.table_path(TableKind::Recipes),
    "id,name,category,ingredients,steps,video_path,is_default\n\
     1,Toast,VEGETARIAN,Bread,Toast it.,,1\n\
     2,Broken,VEGETARIAN,Bread,,,0\n",
  )
  .unwrap();

  let err = s.get_recipe(1).unwrap_err();
  assert!(matches!(err, Error::MalformedRow { line: 3, .. }), "{err}");
}
