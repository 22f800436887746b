//! Head tags and the per-page metadata transform.
//!
//! The build tool consumes head tags as `[tag, attrs]` pairs. Two producers
//! live here: [`base_head`] for site-wide tags emitted once, and
//! [`page_head`] for the per-page transform that appends social/SEO tags and
//! a canonical URL derived from the fixed site origin.

use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single head tag: element name plus attribute map.
///
/// Serializes as `["meta", {"property": "og:title", "content": "..."}]`,
/// the shape the consuming build tool expects. Attributes use a BTreeMap so
/// emission order is stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadTag(pub String, pub BTreeMap<String, String>);

impl HeadTag {
    fn meta(property_key: &str, property: &str, content: &str) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert(property_key.to_string(), property.to_string());
        attrs.insert("content".to_string(), content.to_string());
        HeadTag("meta".to_string(), attrs)
    }

    fn og(property: &str, content: &str) -> Self {
        Self::meta("property", property, content)
    }

    fn named(name: &str, content: &str) -> Self {
        Self::meta("name", name, content)
    }

    fn link(rel: &str, href: &str) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert("rel".to_string(), rel.to_string());
        attrs.insert("href".to_string(), href.to_string());
        HeadTag("link".to_string(), attrs)
    }
}

/// Metadata for one page, fed into the per-page transform.
///
/// `route` is the site-relative path (`/usage/chat`); title and description
/// fall back to the site-level values when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeta {
    pub route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Site-wide head tags emitted once into the configuration.
pub fn base_head(config: &SiteConfig) -> Vec<HeadTag> {
    let mut tags = vec![
        HeadTag::og("og:type", "website"),
        HeadTag::og("og:site_name", &config.title),
        HeadTag::named("twitter:card", "summary_large_image"),
    ];
    if let Some(image) = &config.og_image {
        tags.push(HeadTag::og("og:image", &absolute_url(config, image)));
    }
    tags
}

/// Per-page transform: append social/SEO tags and the canonical URL.
///
/// Title and description prefer the page's own values and fall back to the
/// site config. The canonical link is always the site origin plus the page
/// route.
pub fn page_head(config: &SiteConfig, page: &PageMeta) -> Vec<HeadTag> {
    let title = page.title.as_deref().unwrap_or(&config.title);
    let description = page.description.as_deref().unwrap_or(&config.description);
    let canonical = absolute_url(config, &page.route);

    vec![
        HeadTag::og("og:title", title),
        HeadTag::og("og:description", description),
        HeadTag::og("og:url", &canonical),
        HeadTag::named("twitter:title", title),
        HeadTag::named("twitter:description", description),
        HeadTag::link("canonical", &canonical),
    ]
}

/// Join the site origin and a site-relative path without doubling slashes.
fn absolute_url(config: &SiteConfig, path: &str) -> String {
    let origin = config.site_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{origin}/{path}")
}
