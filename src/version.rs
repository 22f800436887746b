//! Docs version resolution from version-control tags.
//!
//! In production builds the version label shown in the nav comes from the
//! most recent git tag. Everywhere else (local preview, CI without tags,
//! exported tarballs) the configured fallback label is used. The resolved
//! value is returned to the caller and passed explicitly into site assembly,
//! never stashed in process-global state.

use std::path::Path;
use std::process::Command;
use tracing::warn;

/// Resolve the docs version label.
///
/// When `production` is set, runs `git describe --tags --abbrev=0` in
/// `repo_dir` and returns the trimmed tag. Any failure (no git binary, not a
/// repository, no tags) logs a warning and falls back to `fallback`. When
/// `production` is not set, `fallback` is returned directly.
pub fn resolve(production: bool, repo_dir: &Path, fallback: &str) -> String {
    if !production {
        return fallback.to_string();
    }
    match latest_tag(repo_dir) {
        Some(tag) => tag,
        None => {
            warn!(%fallback, "could not resolve version from git tags, using fallback");
            fallback.to_string()
        }
    }
}

fn latest_tag(repo_dir: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .current_dir(repo_dir)
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if tag.is_empty() { None } else { Some(tag) }
}
