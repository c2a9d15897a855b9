//! Store location settings, layered: TOML file, then `KITCHEN_*` environment
//! variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use kitchen_store_csv::StoreConfig;

/// Values given on the command line; they win over every other source.
#[derive(Debug, Default)]
pub struct Overrides {
  pub data_dir:  Option<PathBuf>,
  pub media_dir: Option<PathBuf>,
}

/// Resolve the store configuration. A missing settings file is not an error.
pub fn load(file: &Path, overrides: Overrides) -> anyhow::Result<StoreConfig> {
  let settings = config::Config::builder()
    .add_source(config::File::from(file).required(false))
    .add_source(config::Environment::with_prefix("KITCHEN"))
    .build()
    .with_context(|| format!("failed to read settings from {}", file.display()))?;

  let mut store: StoreConfig = settings
    .try_deserialize()
    .context("failed to deserialise store settings")?;

  if let Some(data_dir) = overrides.data_dir {
    store.data_dir = data_dir;
  }
  if overrides.media_dir.is_some() {
    store.media_dir = overrides.media_dir;
  }

  store.data_dir = expand_tilde(&store.data_dir);
  store.media_dir = store.media_dir.as_deref().map(expand_tilde);
  Ok(store)
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
