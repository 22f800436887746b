//! Centralized display-label derivation for sidebar entries.
//!
//! Every derived entry gets its label the same way: the document's first
//! `# ` heading if one exists, otherwise a title-cased version of the
//! filename stem. This module provides both halves so the deriver and the
//! CLI display stay consistent.
//!
//! ## Heading Extraction
//!
//! Only the single `# ` marker is recognized. Documents using setext
//! headings or `## ` as their first heading fall back to the filename
//! label — intentional, matching how the consuming build tool labels
//! unheaded pages.
//!
//! ## Filename Labels
//!
//! Stems are split on hyphens and each segment is capitalized:
//! - `foo-bar` → "Foo Bar"
//! - `getting-started` → "Getting Started"
//! - `ui` → "Ui"

/// Extract a label from the first `# ` heading line, if any.
///
/// Scans line by line and returns the remainder of the first line that
/// starts with `# `, trimmed. The marker is stripped exactly once, so the
/// remainder may itself start with `#`. Returns `None` when no such line
/// exists.
pub fn heading_label(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|rest| rest.trim().to_string())
        .filter(|label| !label.is_empty())
}

/// Derive a display label from a filename stem.
///
/// Splits on hyphens and capitalizes the first letter of each segment.
/// Empty segments (doubled hyphens, leading/trailing hyphens) are dropped.
pub fn stem_label(stem: &str) -> String {
    stem.split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
