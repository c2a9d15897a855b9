//! Hand a media file to the platform's default application.

use std::{
  path::Path,
  process::{Command, Stdio},
};

use anyhow::{Context as _, bail};

fn launcher(path: &Path) -> Command {
  let mut cmd = if cfg!(target_os = "windows") {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]);
    cmd
  } else if cfg!(target_os = "macos") {
    Command::new("open")
  } else {
    Command::new("xdg-open")
  };
  cmd.arg(path).stdin(Stdio::null()).stdout(Stdio::null());
  cmd
}

/// Open `path` with the default player. A missing file or a launcher that
/// cannot start or exits non-zero is an error; nothing is retried.
pub fn open(path: &Path) -> anyhow::Result<()> {
  if !path.is_file() {
    bail!("video file {} does not exist", path.display());
  }

  let mut cmd = launcher(path);
  let program = cmd.get_program().to_string_lossy().into_owned();
  let status = cmd
    .status()
    .with_context(|| format!("failed to launch {program}"))?;
  if !status.success() {
    bail!("{program} could not open {} ({status})", path.display());
  }

  tracing::debug!(path = %path.display(), %program, "opened video");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_video_is_reported_before_launching() {
    let err = open(Path::new("/nonexistent/clip.mp4")).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
  }

  #[test]
  fn launcher_passes_the_path_last() {
    let cmd = launcher(Path::new("/tmp/clip.mp4"));
    assert_eq!(cmd.get_args().last().unwrap(), "/tmp/clip.mp4");
  }
}
