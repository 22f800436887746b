//! End-to-end pipeline test: site.toml + docs tree → emitted JSON.
//!
//! Builds a realistic docs directory in a tempdir, runs the full
//! load → derive → assemble → serialize pipeline, and checks the emitted
//! object against what the consuming build tool expects.

use sitespec::{config, sidebar, site, version};
use std::fs;
use tempfile::TempDir;

fn write_docs(tmp: &TempDir) {
    let root = tmp.path();
    fs::write(
        root.join("site.toml"),
        r#"
title = "CodeCompanion"
description = "AI-powered coding"
site_url = "https://codecompanion.github.io"

[[nav]]
text = "{version}"
[[nav.items]]
text = "Changelog"
link = "https://example.com/CHANGELOG.md"

[[sidebar]]
text = "Introduction"
link = "/"

[[sidebar]]
text = "Configuration"
collapsed = false
dir = "configuration"

[footer]
message = "Released under the MIT License."
copyright = "Copyright 2024-present"

[[social]]
icon = "github"
link = "https://github.com/example/project"

[theme]
tabs = true
"#,
    )
    .unwrap();

    fs::write(root.join("index.md"), "# Home\n\nWelcome.").unwrap();

    let configuration = root.join("configuration");
    fs::create_dir(&configuration).unwrap();
    fs::write(
        configuration.join("adapters.md"),
        "# Configuring Adapters\n\nDetails.",
    )
    .unwrap();
    fs::write(
        configuration.join("prompt-library.md"),
        "No heading in this one.",
    )
    .unwrap();
    fs::write(configuration.join("index.md"), "# Section Index").unwrap();
}

#[test]
fn emit_pipeline_produces_expected_spec() {
    let tmp = TempDir::new().unwrap();
    write_docs(&tmp);

    let config = config::load_config(tmp.path()).unwrap();
    let version = version::resolve(false, tmp.path(), &config.fallback_version);
    let tree = sidebar::build_sidebar(&config, tmp.path());
    let spec = site::build(&config, &version, tree);

    // Version: non-production resolves to the configured fallback and the
    // nav placeholder picks it up.
    assert_eq!(spec.version, "Main");
    assert_eq!(spec.nav[0].text, "Main");

    // Sitemap hostname comes from the fixed site origin.
    assert_eq!(spec.sitemap.hostname, "https://codecompanion.github.io");

    // Sidebar: flat entry plus a derived section, index excluded.
    assert_eq!(spec.sidebar.len(), 2);
    let section = &spec.sidebar[1];
    assert_eq!(section.text, "Configuration");
    assert_eq!(section.items.len(), 2);

    let adapters = section
        .items
        .iter()
        .find(|e| e.link == "/configuration/adapters")
        .unwrap();
    assert_eq!(adapters.text, "Configuring Adapters");

    let library = section
        .items
        .iter()
        .find(|e| e.link == "/configuration/prompt-library")
        .unwrap();
    assert_eq!(library.text, "Prompt Library");

    // Per-page transform ran for every internal route.
    assert_eq!(spec.pages.len(), 3);
    let page = spec
        .pages
        .iter()
        .find(|p| p.route == "/configuration/adapters")
        .unwrap();
    let canonical = page.head.iter().find(|t| t.0 == "link").unwrap();
    assert_eq!(
        canonical.1.get("href").unwrap(),
        "https://codecompanion.github.io/configuration/adapters"
    );
}

#[test]
fn emitted_json_round_trips() {
    let tmp = TempDir::new().unwrap();
    write_docs(&tmp);

    let config = config::load_config(tmp.path()).unwrap();
    let tree = sidebar::build_sidebar(&config, tmp.path());
    let spec = site::build(&config, "v2.0.0", tree);

    let json = site::to_json(&spec).unwrap();
    let parsed: site::SiteSpec = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.title, "CodeCompanion");
    assert_eq!(parsed.version, "v2.0.0");
    assert_eq!(parsed.footer.message, "Released under the MIT License.");
    assert_eq!(parsed.social[0].icon, "github");
    assert!(parsed.theme.tabs);
}

#[test]
fn missing_section_directory_degrades_not_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("site.toml"),
        r#"
site_url = "https://example.com"

[[sidebar]]
text = "Ghost"
dir = "missing"
"#,
    )
    .unwrap();

    let config = config::load_config(tmp.path()).unwrap();
    let tree = sidebar::build_sidebar(&config, tmp.path());
    let spec = site::build(&config, "Main", tree);

    assert_eq!(spec.sidebar.len(), 1);
    assert!(spec.sidebar[0].items.is_empty());
    assert!(spec.pages.is_empty());
}
