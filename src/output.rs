//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every entity
//! (nav group, sidebar section, derived entry) is its label, with link
//! targets shown as secondary context. Each command has a `format_*`
//! function (returns `Vec<String>`) for testability and a `print_*` wrapper
//! that writes to stdout. Format functions are pure — no I/O.
//!
//! ```text
//! Nav
//! 001 v1.2.0
//!     001 Changelog → https://example.com/CHANGELOG.md
//!
//! Sidebar
//! 001 Introduction → /
//! 002 Usage
//!     001 General → /usage/general
//!     002 Chat Buffer → /usage/chat
//!
//! Emitted 4 routes → site.json
//! ```

use crate::sidebar::SidebarEntry;
use crate::site::SiteSpec;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a labeled link line: `001 Label → /target`.
fn link_line(index: usize, text: &str, link: &str) -> String {
    format!("{} {} → {}", format_index(index), text, link)
}

/// Format the emitted spec: nav, sidebar tree, and a trailer naming the
/// written file.
pub fn format_spec_output(spec: &SiteSpec, out_path: &Path) -> Vec<String> {
    let mut lines = format_spec_tree(spec);
    lines.push(format!(
        "Emitted {} routes → {}",
        spec.pages.len(),
        out_path.display()
    ));
    lines
}

/// Format the spec for the `check` command: same tree, but the trailer
/// reports validation only — check writes nothing.
pub fn format_check_output(spec: &SiteSpec) -> Vec<String> {
    let mut lines = format_spec_tree(spec);
    lines.push(format!("Validated {} routes", spec.pages.len()));
    lines
}

/// Shared nav + sidebar tree display.
fn format_spec_tree(spec: &SiteSpec) -> Vec<String> {
    let mut lines = Vec::new();

    if !spec.nav.is_empty() {
        lines.push("Nav".to_string());
        for (i, group) in spec.nav.iter().enumerate() {
            match &group.link {
                Some(link) => lines.push(link_line(i + 1, &group.text, link)),
                None => lines.push(format!("{} {}", format_index(i + 1), group.text)),
            }
            for (j, item) in group.items.iter().enumerate() {
                lines.push(format!("{}{}", indent(1), link_line(j + 1, &item.text, &item.link)));
            }
        }
        lines.push(String::new());
    }

    lines.push("Sidebar".to_string());
    for (i, node) in spec.sidebar.iter().enumerate() {
        match &node.link {
            Some(link) => lines.push(link_line(i + 1, &node.text, link)),
            None => lines.push(format!("{} {}", format_index(i + 1), node.text)),
        }
        for (j, entry) in node.items.iter().enumerate() {
            lines.push(format!(
                "{}{}",
                indent(1),
                link_line(j + 1, &entry.text, &entry.link)
            ));
        }
    }
    lines.push(String::new());
    lines
}

/// Format derived entries for the `sidebar` command.
pub fn format_sidebar_output(entries: &[SidebarEntry], dir: &Path) -> Vec<String> {
    let mut lines = vec![format!("Entries from {}", dir.display())];
    if entries.is_empty() {
        lines.push("    (none)".to_string());
        return lines;
    }
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{}{}",
            indent(1),
            link_line(i + 1, &entry.text, &entry.link)
        ));
    }
    lines
}

pub fn print_spec_output(spec: &SiteSpec, out_path: &Path) {
    for line in format_spec_output(spec, out_path) {
        println!("{line}");
    }
}

pub fn print_check_output(spec: &SiteSpec) {
    for line in format_check_output(spec) {
        println!("{line}");
    }
}

pub fn print_sidebar_output(entries: &[SidebarEntry], dir: &Path) {
    for line in format_sidebar_output(entries, dir) {
        println!("{line}");
    }
}
