//! # sitespec
//!
//! Build-time configuration generator for static documentation sites. Your
//! filesystem is the data source: markdown directories become sidebar
//! sections, the newest git tag becomes the version label, and `site.toml`
//! supplies everything else. The output is a single JSON object the external
//! site build tool consumes — sitespec runs once per documentation build and
//! has no runtime component.
//!
//! # Pipeline
//!
//! ```text
//! site.toml + docs/  →  sidebar derivation  →  site.json
//! ```
//!
//! Derivation fails soft: an unreadable directory or document degrades the
//! sidebar instead of failing the build. Config problems, by contrast, are
//! hard errors — the build tool needs a correct configuration or none.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` loading, validation, stock config generation |
//! | [`labels`] | Display-label derivation: first `# ` heading, else title-cased stem |
//! | [`sidebar`] | Directory → sidebar entries deriver and sidebar tree assembly |
//! | [`version`] | Version label from `git describe --tags`, with fallback |
//! | [`head`] | Site-wide head tags and the per-page SEO/social transform |
//! | [`site`] | Final `SiteSpec` assembly and JSON emission |
//! | [`output`] | CLI output formatting — tree-based display of emitted config |
//!
//! # Design Decisions
//!
//! ## Labels Prefer Content Over Filenames
//!
//! A document's first `# ` heading is the author's chosen title; the
//! title-cased filename is only a fallback. Only the single `# ` marker is
//! recognized — documents using other heading styles get filename labels,
//! matching the behavior of the consuming build tool.
//!
//! ## The Version Is a Value, Not a Global
//!
//! [`version::resolve`] returns a plain `String` that callers thread through
//! [`site::build`]. Resolution happens exactly once per invocation and
//! nothing is stashed in process-global state, so two builds with different
//! flags in one process cannot contaminate each other.
//!
//! ## Derived Sections Trust the Filesystem
//!
//! Entries come out in directory-listing order with no deduplication and no
//! cross-platform ordering guarantee. Authors who care about order use
//! static sections; derived sections are for directories where any stable
//! order is fine.

pub mod config;
pub mod head;
pub mod labels;
pub mod output;
pub mod sidebar;
pub mod site;
pub mod version;
