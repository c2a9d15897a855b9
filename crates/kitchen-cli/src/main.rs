//! `kitchen`: command-line front end for the recipe catalog.
//!
//! # Usage
//!
//! ```
//! kitchen list --category vegetarian --search paneer
//! kitchen show 12
//! kitchen add --name Tea --category VEGETARIAN --ingredients "Water, tea" \
//!   --steps-file tea-steps.txt --image ~/Pictures/tea.jpg
//! kitchen --data-dir ~/.local/share/kitchen delete 108 -y
//! ```

mod app;
mod render;
mod settings;
mod viewer;

use std::path::PathBuf;

use anyhow::Context as _;
use app::App;
use clap::{Args, Parser, Subcommand};
use kitchen_core::{
  draft::DraftStepImage,
  recipe::{Category, RecipeId},
};
use kitchen_store_csv::CsvStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "kitchen", author, version, about = "The Simple Kitchen recipe catalog")]
struct Cli {
  /// Path to a TOML settings file (data_dir, media_dir).
  #[arg(short, long, global = true, value_name = "FILE", default_value = "kitchen.toml")]
  config: PathBuf,

  /// Directory holding the recipe tables.
  #[arg(long, global = true, value_name = "DIR")]
  data_dir: Option<PathBuf>,

  /// Directory attached media is copied into.
  #[arg(long, global = true, value_name = "DIR")]
  media_dir: Option<PathBuf>,

  /// Print results as JSON instead of text.
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List the categories with their recipe counts.
  Categories,

  /// List recipes, sorted by name.
  List {
    /// Only recipes in this category.
    #[arg(short = 'C', long, value_parser = parse_category)]
    category: Option<Category>,

    /// Only recipes whose name or ingredients contain this text.
    #[arg(short, long, value_name = "TERM")]
    search: Option<String>,
  },

  /// Show one recipe with its steps and media.
  Show { id: RecipeId },

  /// Add a recipe.
  Add(AddArgs),

  /// Delete a user-added recipe and its media.
  Delete {
    id: RecipeId,

    /// Do not ask for confirmation.
    #[arg(short = 'y', long)]
    yes: bool,
  },

  /// Copy a video into the media directory and attach it to a recipe.
  AttachVideo { id: RecipeId, path: PathBuf },

  /// Open a recipe's video in the default player.
  OpenVideo { id: RecipeId },

  /// Create the tables and media directory, then print where they live.
  Init,
}

#[derive(Args, Debug)]
struct AddArgs {
  #[arg(long)]
  name: String,

  #[arg(long, value_parser = parse_category)]
  category: Category,

  /// Ingredients text.
  #[arg(long, required_unless_present = "ingredients_file", conflicts_with = "ingredients_file")]
  ingredients: Option<String>,

  /// Read the ingredients from a file.
  #[arg(long, value_name = "FILE")]
  ingredients_file: Option<PathBuf>,

  /// Steps text, one step per line.
  #[arg(long, required_unless_present = "steps_file", conflicts_with = "steps_file")]
  steps: Option<String>,

  /// Read the steps from a file.
  #[arg(long, value_name = "FILE")]
  steps_file: Option<PathBuf>,

  /// Recipe image; the first one is the primary image. Repeatable.
  #[arg(long = "image", value_name = "PATH")]
  images: Vec<PathBuf>,

  /// Image for step N, written `N=PATH`. Repeatable.
  #[arg(long = "step-image", value_name = "N=PATH", value_parser = parse_step_image)]
  step_images: Vec<DraftStepImage>,

  /// Video to attach.
  #[arg(long, value_name = "PATH")]
  video: Option<PathBuf>,
}

fn parse_category(s: &str) -> Result<Category, String> {
  Category::parse(s).map_err(|e| e.to_string())
}

fn parse_step_image(s: &str) -> Result<DraftStepImage, String> {
  let (index, path) = s
    .split_once('=')
    .ok_or_else(|| format!("expected N=PATH, got {s:?}"))?;
  let step_index = index
    .trim()
    .parse::<u32>()
    .map_err(|e| format!("bad step number {index:?}: {e}"))?;
  if path.is_empty() {
    return Err(format!("missing path in {s:?}"));
  }
  Ok(DraftStepImage { step_index, source: PathBuf::from(path) })
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let config = settings::load(&cli.config, settings::Overrides {
    data_dir:  cli.data_dir,
    media_dir: cli.media_dir,
  })?;
  let data_dir = config.data_dir.clone();
  let store = CsvStore::open(config)
    .with_context(|| format!("failed to open recipe store in {}", data_dir.display()))?;

  let app = App::new(store, cli.json);
  match cli.command {
    Command::Categories => app.categories(),
    Command::List { category, search } => app.list(category, search),
    Command::Show { id } => app.show(id),
    Command::Add(args) => app.add(args),
    Command::Delete { id, yes } => app.delete(id, yes),
    Command::AttachVideo { id, path } => app.attach_video(id, &path),
    Command::OpenVideo { id } => app.open_video(id),
    Command::Init => app.init(),
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_definition_is_consistent() { Cli::command().debug_assert(); }

  #[test]
  fn step_image_argument_parses() {
    let parsed = parse_step_image("3=/tmp/photo one.png").unwrap();
    assert_eq!(parsed, DraftStepImage {
      step_index: 3,
      source:     PathBuf::from("/tmp/photo one.png"),
    });
  }

  #[test]
  fn step_image_argument_needs_number_and_path() {
    assert!(parse_step_image("/tmp/a.png").is_err());
    assert!(parse_step_image("two=/tmp/a.png").is_err());
    assert!(parse_step_image("2=").is_err());
  }

  #[test]
  fn add_requires_ingredients_from_somewhere() {
    let err = Cli::try_parse_from([
      "kitchen", "add", "--name", "Tea", "--category", "vegetarian", "--steps", "Boil.",
    ])
    .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
  }

  #[test]
  fn add_collects_repeated_media() {
    let cli = Cli::try_parse_from([
      "kitchen",
      "--data-dir",
      "/srv/kitchen",
      "add",
      "--name",
      "Tea",
      "--category",
      "egg-etarian",
      "--ingredients",
      "Water",
      "--steps-file",
      "steps.txt",
      "--image",
      "a.png",
      "--image",
      "b.png",
      "--step-image",
      "1=s.png",
    ])
    .unwrap();

    assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/kitchen")));
    let Command::Add(args) = cli.command else { panic!("expected add") };
    assert_eq!(args.category, Category::EggEtarian);
    assert_eq!(args.images, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
    assert_eq!(args.step_images.len(), 1);
    assert_eq!(args.steps_file, Some(PathBuf::from("steps.txt")));
  }

  #[test]
  fn store_flags_work_after_the_subcommand() {
    let cli = Cli::try_parse_from([
      "kitchen", "list", "--data-dir", "/srv/kitchen", "--media-dir", "/srv/media", "-c", "k.toml",
      "--json",
    ])
    .unwrap();
    assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/kitchen")));
    assert_eq!(cli.media_dir, Some(PathBuf::from("/srv/media")));
    assert_eq!(cli.config, PathBuf::from("k.toml"));
    assert!(cli.json);
  }

  #[test]
  fn list_accepts_category_in_any_case() {
    let cli = Cli::try_parse_from(["kitchen", "list", "-C", "Non-Vegetarian", "-s", "rice"]).unwrap();
    let Command::List { category, search } = cli.command else { panic!("expected list") };
    assert_eq!(category, Some(Category::NonVegetarian));
    assert_eq!(search.as_deref(), Some("rice"));
  }
}
