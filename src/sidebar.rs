//! Sidebar-entry derivation and sidebar tree assembly.
//!
//! The deriver turns a directory of markdown documents into an ordered list
//! of navigation entries, one per file, excluding the designated index
//! document. Labels come from the document's first `# ` heading when present,
//! otherwise from the title-cased filename (see [`crate::labels`]).
//!
//! ## Fail-Soft Contract
//!
//! Derivation never aborts the larger build:
//! - an unreadable directory is logged and yields an empty sequence;
//! - an unreadable file is logged and that entry is skipped.
//!
//! Entries are emitted in directory-listing order. No deduplication, no
//! ordering guarantee beyond what the filesystem returns, but re-running on
//! an unchanged directory always yields the same sequence.

use crate::config::SiteConfig;
use crate::labels;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// A derived navigation entry: display label plus link path.
///
/// The link is the section's route prefix followed by the filename stem
/// (extension stripped). Entries have no identity beyond their position in
/// the emitted sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarEntry {
    pub text: String,
    pub link: String,
}

/// A node in the emitted sidebar tree: either a flat link or a section with
/// child entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarNode {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarEntry>,
}

/// Derive sidebar entries from a directory of markdown documents.
///
/// Lists `dir`, keeps `.md` files, excludes `index_file`, and emits one
/// entry per document in listing order. Read failures degrade to an
/// incomplete (possibly empty) sequence rather than an error.
pub fn derive_entries(dir: &Path, route_prefix: &str, index_file: &str) -> Vec<SidebarEntry> {
    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(err) => {
            warn!(dir = %dir.display(), %err, "sidebar directory unreadable, emitting no entries");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for dir_entry in listing.filter_map(|e| e.ok()) {
        let path = dir_entry.path();
        if !is_markdown(&path) {
            continue;
        }
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            continue;
        };
        let file_name = path.file_name().map(|s| s.to_string_lossy().to_string());
        if file_name.as_deref() == Some(index_file) {
            continue;
        }

        let text = match fs::read_to_string(&path) {
            Ok(content) => labels::heading_label(&content).unwrap_or_else(|| labels::stem_label(&stem)),
            Err(err) => {
                warn!(file = %path.display(), %err, "sidebar document unreadable, skipping");
                continue;
            }
        };

        entries.push(SidebarEntry {
            text,
            link: format!("{route_prefix}{stem}"),
        });
    }
    entries
}

/// Assemble the full sidebar tree from the configured sections.
///
/// Flat entries and static sections pass through as configured; derived
/// sections get their entries from the filesystem via [`derive_entries`].
pub fn build_sidebar(config: &SiteConfig, docs_root: &Path) -> Vec<SidebarNode> {
    config
        .sidebar
        .iter()
        .map(|source| {
            let items = if let Some(dir) = &source.dir {
                let prefix = source
                    .effective_route_prefix()
                    .unwrap_or_else(|| "/".to_string());
                derive_entries(&docs_root.join(dir), &prefix, &config.index_file)
            } else {
                source
                    .items
                    .iter()
                    .map(|link| SidebarEntry {
                        text: link.text.clone(),
                        link: link.link.clone(),
                    })
                    .collect()
            };
            SidebarNode {
                text: source.text.clone(),
                link: source.link.clone(),
                collapsed: source.collapsed,
                items,
            }
        })
        .collect()
}

fn is_markdown(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("md"))
            .unwrap_or(false)
}
