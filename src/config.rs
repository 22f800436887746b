//! Site configuration module.
//!
//! Handles loading and validating `site.toml` from the docs root. The file
//! describes everything about the emitted site configuration that is not
//! derived from the filesystem: title, navigation, static sidebar sections,
//! footer, social links, and theme flags.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "My Project"
//! description = "Project documentation"
//! site_url = "https://example.github.io"
//! index_file = "index.md"          # Excluded from derived sidebar sections
//! fallback_version = "Main"        # Used when git tag resolution fails
//! og_image = "/social-card.png"    # Social preview image (optional)
//!
//! [[nav]]
//! text = "{version}"               # Placeholder replaced with resolved version
//! [[nav.items]]
//! text = "Changelog"
//! link = "https://example.com/CHANGELOG.md"
//!
//! [[sidebar]]
//! text = "Introduction"
//! link = "/"
//!
//! [[sidebar]]
//! text = "Configuration"
//! collapsed = false
//! dir = "configuration"            # Entries derived from docs/configuration/*.md
//! route_prefix = "/configuration/" # Default: "/<dir>/"
//!
//! [[sidebar]]
//! text = "Extending"
//! collapsed = true
//! [[sidebar.items]]
//! text = "Creating Adapters"
//! link = "/extending/adapters"
//!
//! [footer]
//! message = "Released under the MIT License."
//! copyright = "Copyright © 2024-present"
//!
//! [[social]]
//! icon = "github"
//! link = "https://github.com/example/project"
//!
//! [edit_link]
//! pattern = "https://github.com/example/project/edit/main/docs/:path"
//! text = "Edit this page on GitHub"
//!
//! [theme]
//! tabs = true                      # Register the tabs plugin extension
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Placeholder in nav text that gets replaced with the resolved version.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Site configuration loaded from `site.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title shown in the header and in `og:title` fallbacks.
    pub title: String,
    /// One-line site description, also used for SEO meta tags.
    pub description: String,
    /// Fixed site origin used for canonical URLs (scheme + host, no path).
    pub site_url: String,
    /// Index document excluded from derived sidebar sections.
    pub index_file: String,
    /// Version label used when git tag resolution is off or fails.
    pub fallback_version: String,
    /// Social preview image path, appended to `site_url` in og:image.
    pub og_image: Option<String>,
    /// Top navigation links and dropdown groups.
    pub nav: Vec<NavGroup>,
    /// Sidebar layout: static entries, static sections, derived sections.
    pub sidebar: Vec<SidebarSource>,
    /// Footer message and copyright lines.
    pub footer: FooterConfig,
    /// Social icon links shown in the header.
    pub social: Vec<SocialLink>,
    /// "Edit this page" link template.
    pub edit_link: Option<EditLink>,
    /// Theme extension flags.
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
            description: String::new(),
            site_url: "https://localhost".to_string(),
            index_file: "index.md".to_string(),
            fallback_version: "Main".to_string(),
            og_image: None,
            nav: Vec::new(),
            sidebar: Vec::new(),
            footer: FooterConfig::default(),
            social: Vec::new(),
            edit_link: None,
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values before emission.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_url.is_empty() {
            return Err(ConfigError::Validation("site_url must not be empty".into()));
        }
        if !self.site_url.starts_with("http://") && !self.site_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "site_url must start with http:// or https://".into(),
            ));
        }
        for section in &self.sidebar {
            section.validate()?;
        }
        Ok(())
    }
}

/// A top-navigation entry: either a plain link or a dropdown group.
///
/// A group whose `text` is `{version}` has the placeholder replaced with the
/// resolved version label at assembly time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavGroup {
    pub text: String,
    /// Direct link; mutually exclusive with `items` in practice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Dropdown entries. Empty for plain links.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavLink>,
}

/// A single navigation link (nav dropdown entry or static sidebar entry).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

/// One `[[sidebar]]` block: a flat entry, a static section, or a derived
/// section, depending on which fields are set.
///
/// - `link` set → flat entry
/// - `dir` set → section with entries derived from that directory
/// - `items` set → section with the listed static entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarSource {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Directory under the docs root to derive entries from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Route segment prefixed to derived links. Defaults to `/<dir>/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_prefix: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavLink>,
}

impl SidebarSource {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.text.is_empty() {
            return Err(ConfigError::Validation(
                "sidebar entries must have a text label".into(),
            ));
        }
        if self.dir.is_some() && !self.items.is_empty() {
            return Err(ConfigError::Validation(format!(
                "sidebar section '{}' sets both dir and items",
                self.text
            )));
        }
        if self.route_prefix.is_some() && self.dir.is_none() {
            return Err(ConfigError::Validation(format!(
                "sidebar section '{}' sets route_prefix without dir",
                self.text
            )));
        }
        Ok(())
    }

    /// Effective route prefix for a derived section: explicit value or
    /// `/<dir>/`.
    pub fn effective_route_prefix(&self) -> Option<String> {
        let dir = self.dir.as_ref()?;
        Some(
            self.route_prefix
                .clone()
                .unwrap_or_else(|| format!("/{}/", dir.trim_matches('/'))),
        )
    }
}

/// Footer message and copyright.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    pub message: String,
    pub copyright: String,
}

/// A social icon link (e.g. github, discord).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

/// "Edit this page" link template. `:path` is replaced by the build tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditLink {
    pub pattern: String,
    pub text: String,
}

/// Theme extension flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Register the tabs plugin on top of the default theme.
    pub tabs: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { tabs: true }
    }
}

/// Load `site.toml` from the docs root, falling back to defaults when the
/// file does not exist.
pub fn load_config(docs_root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = docs_root.join("site.toml");
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Return a stock `site.toml` with every option documented.
pub fn stock_config_toml() -> String {
    r##"# sitespec configuration
# All options are optional - defaults are shown commented out.

# Site title shown in the header and used for og:title fallbacks.
title = "Documentation"

# One-line description, also emitted as the SEO meta description.
description = ""

# Fixed site origin for canonical URLs (scheme + host, no trailing path).
site_url = "https://localhost"

# Index document excluded from derived sidebar sections.
#index_file = "index.md"

# Version label used when git tag resolution is off or fails.
#fallback_version = "Main"

# Social preview image path, resolved against site_url.
#og_image = "/social-card.png"

# Top navigation. A group whose text is "{version}" shows the resolved
# version as its label.
#[[nav]]
#text = "{version}"
#[[nav.items]]
#text = "Changelog"
#link = "https://example.com/CHANGELOG.md"

# Sidebar layout. Three shapes:
#
# Flat entry:
#[[sidebar]]
#text = "Introduction"
#link = "/"
#
# Derived section (one entry per markdown file in docs/<dir>):
#[[sidebar]]
#text = "Configuration"
#collapsed = false
#dir = "configuration"
#route_prefix = "/configuration/"   # default: "/<dir>/"
#
# Static section:
#[[sidebar]]
#text = "Extending"
#collapsed = true
#[[sidebar.items]]
#text = "Creating Adapters"
#link = "/extending/adapters"

[footer]
#message = "Released under the MIT License."
#copyright = ""

#[[social]]
#icon = "github"
#link = "https://github.com/example/project"

#[edit_link]
#pattern = "https://github.com/example/project/edit/main/docs/:path"
#text = "Edit this page on GitHub"

[theme]
# Register the tabs plugin on top of the default theme.
#tabs = true
"##
    .to_string()
}
