//! Site configuration assembly.
//!
//! Pulls the pieces together into the nested object the external build tool
//! consumes: config values, the resolved version label, the assembled sidebar
//! tree, site-wide head tags, and per-page head tags for every route the
//! sidebar knows about. [`build`] is a pure function of its inputs; emission
//! happens once per build via [`to_json`].

use crate::config::{
    EditLink, FooterConfig, NavGroup, SiteConfig, SocialLink, ThemeConfig, VERSION_PLACEHOLDER,
};
use crate::head::{self, HeadTag, PageMeta};
use crate::sidebar::SidebarNode;
use serde::{Deserialize, Serialize};

/// The emitted site configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSpec {
    pub title: String,
    pub description: String,
    /// Version label shown in the nav (git tag or configured fallback).
    pub version: String,
    /// Sitemap generation settings, hostname taken from the site origin.
    pub sitemap: Sitemap,
    /// Site-wide head tags.
    pub head: Vec<HeadTag>,
    /// Top navigation with the version placeholder resolved.
    pub nav: Vec<NavGroup>,
    /// Full sidebar tree, derived sections included.
    pub sidebar: Vec<SidebarNode>,
    pub footer: FooterConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social: Vec<SocialLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,
    pub theme: ThemeConfig,
    /// Per-page head tags, one record per internal sidebar route.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageSpec>,
}

/// Sitemap settings for the build tool's sitemap generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sitemap {
    pub hostname: String,
}

/// Head tags for one page route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSpec {
    pub route: String,
    pub title: String,
    pub head: Vec<HeadTag>,
}

/// Assemble the site spec from config, resolved version, and sidebar tree.
pub fn build(config: &SiteConfig, version: &str, sidebar: Vec<SidebarNode>) -> SiteSpec {
    let nav = config
        .nav
        .iter()
        .map(|group| NavGroup {
            text: group.text.replace(VERSION_PLACEHOLDER, version),
            link: group.link.clone(),
            items: group.items.clone(),
        })
        .collect();

    let pages = page_specs(config, &sidebar);

    SiteSpec {
        title: config.title.clone(),
        description: config.description.clone(),
        version: version.to_string(),
        sitemap: Sitemap {
            hostname: config.site_url.clone(),
        },
        head: head::base_head(config),
        nav,
        sidebar,
        footer: config.footer.clone(),
        social: config.social.clone(),
        edit_link: config.edit_link.clone(),
        theme: config.theme.clone(),
        pages,
    }
}

/// Run the per-page transform for every internal route in the sidebar.
///
/// External links (scheme-prefixed) get no page record; the build tool
/// cannot serve head tags for pages it does not host.
fn page_specs(config: &SiteConfig, sidebar: &[SidebarNode]) -> Vec<PageSpec> {
    let mut pages = Vec::new();
    for node in sidebar {
        if let Some(link) = &node.link {
            push_page(config, &mut pages, &node.text, link);
        }
        for entry in &node.items {
            push_page(config, &mut pages, &entry.text, &entry.link);
        }
    }
    pages
}

fn push_page(config: &SiteConfig, pages: &mut Vec<PageSpec>, title: &str, route: &str) {
    if route.starts_with("http://") || route.starts_with("https://") {
        return;
    }
    let meta = PageMeta {
        route: route.to_string(),
        title: Some(title.to_string()),
        description: None,
    };
    pages.push(PageSpec {
        route: route.to_string(),
        title: title.to_string(),
        head: head::page_head(config, &meta),
    });
}

/// Serialize the spec as pretty-printed JSON.
pub fn to_json(spec: &SiteSpec) -> serde_json::Result<String> {
    serde_json::to_string_pretty(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NavLink, SidebarSource};
    use crate::sidebar::{SidebarEntry, build_sidebar};
    use tempfile::TempDir;

    fn test_config() -> SiteConfig {
        SiteConfig {
            title: "CodeCompanion".to_string(),
            description: "AI-powered coding".to_string(),
            site_url: "https://codecompanion.github.io".to_string(),
            nav: vec![NavGroup {
                text: "{version}".to_string(),
                link: None,
                items: vec![NavLink {
                    text: "Changelog".to_string(),
                    link: "https://example.com/CHANGELOG.md".to_string(),
                }],
            }],
            ..SiteConfig::default()
        }
    }

    #[test]
    fn version_placeholder_resolved_in_nav() {
        let spec = build(&test_config(), "v1.2.0", Vec::new());
        assert_eq!(spec.nav[0].text, "v1.2.0");
        assert_eq!(spec.version, "v1.2.0");
    }

    #[test]
    fn sitemap_hostname_from_site_url() {
        let spec = build(&test_config(), "Main", Vec::new());
        assert_eq!(spec.sitemap.hostname, "https://codecompanion.github.io");
    }

    #[test]
    fn literal_nav_text_untouched() {
        let config = SiteConfig {
            nav: vec![NavGroup {
                text: "Guide".to_string(),
                link: Some("/guide".to_string()),
                items: Vec::new(),
            }],
            ..test_config()
        };
        let spec = build(&config, "v1.2.0", Vec::new());
        assert_eq!(spec.nav[0].text, "Guide");
    }

    #[test]
    fn pages_built_for_internal_routes_only() {
        let sidebar = vec![SidebarNode {
            text: "Usage".to_string(),
            link: None,
            collapsed: Some(false),
            items: vec![
                SidebarEntry {
                    text: "Chat".to_string(),
                    link: "/usage/chat".to_string(),
                },
                SidebarEntry {
                    text: "Source".to_string(),
                    link: "https://github.com/example".to_string(),
                },
            ],
        }];
        let spec = build(&test_config(), "Main", sidebar);

        assert_eq!(spec.pages.len(), 1);
        assert_eq!(spec.pages[0].route, "/usage/chat");
        assert_eq!(spec.pages[0].title, "Chat");
    }

    #[test]
    fn flat_sidebar_entries_get_pages() {
        let sidebar = vec![SidebarNode {
            text: "Introduction".to_string(),
            link: Some("/".to_string()),
            collapsed: None,
            items: Vec::new(),
        }];
        let spec = build(&test_config(), "Main", sidebar);
        assert_eq!(spec.pages.len(), 1);
        assert_eq!(spec.pages[0].route, "/");
    }

    #[test]
    fn page_head_includes_canonical() {
        let sidebar = vec![SidebarNode {
            text: "Guide".to_string(),
            link: Some("/guide".to_string()),
            collapsed: None,
            items: Vec::new(),
        }];
        let spec = build(&test_config(), "Main", sidebar);
        let canonical = spec.pages[0]
            .head
            .iter()
            .find(|t| t.0 == "link")
            .expect("canonical link tag");
        assert_eq!(
            canonical.1.get("href").unwrap(),
            "https://codecompanion.github.io/guide"
        );
    }

    #[test]
    fn spec_serializes_to_json() {
        let spec = build(&test_config(), "Main", Vec::new());
        let json = to_json(&spec).unwrap();
        assert!(json.contains("\"title\": \"CodeCompanion\""));
        assert!(json.contains("\"version\": \"Main\""));
    }

    #[test]
    fn end_to_end_from_directory() {
        let tmp = TempDir::new().unwrap();
        let usage = tmp.path().join("usage");
        std::fs::create_dir(&usage).unwrap();
        std::fs::write(usage.join("general.md"), "# General Usage").unwrap();

        let config = SiteConfig {
            sidebar: vec![SidebarSource {
                text: "Usage".to_string(),
                dir: Some("usage".to_string()),
                ..SidebarSource::default()
            }],
            ..test_config()
        };

        let sidebar = build_sidebar(&config, tmp.path());
        let spec = build(&config, "Main", sidebar);

        assert_eq!(spec.sidebar[0].items[0].text, "General Usage");
        assert_eq!(spec.pages[0].route, "/usage/general");
    }
}
