use clap::{Parser, Subcommand};
use sitespec::{config, output, sidebar, site, version};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "sitespec")]
#[command(about = "Build-time config generator for documentation sites")]
#[command(long_about = "\
Build-time config generator for documentation sites

Your filesystem is the data source. Markdown directories become sidebar
sections, the newest git tag becomes the version label, and site.toml
supplies everything else.

Docs structure:

  docs/
  ├── site.toml                  # Site config (title, nav, sidebar layout)
  ├── index.md                   # Index document (excluded from derivation)
  ├── installation.md            # Flat pages, linked from static sidebar
  ├── configuration/             # Derived section (one entry per .md file)
  │   ├── adapters.md            # Label from first '# ' heading
  │   └── prompt-library.md      # No heading → label \"Prompt Library\"
  └── usage/
      └── chat.md

Label resolution (first available wins):
  Entry:   first '# ' heading → title-cased filename (foo-bar → \"Foo Bar\")
  Version: git tag (--production only) → fallback_version from site.toml

Run 'sitespec gen-config' to generate a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Docs directory
    #[arg(long, default_value = "docs", global = true)]
    docs: PathBuf,

    /// Output file for the emitted configuration
    #[arg(long, default_value = "site.json", global = true)]
    out: PathBuf,

    /// Resolve the version label from git tags instead of the fallback
    #[arg(long, global = true)]
    production: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the full site configuration and write it as JSON
    Emit,
    /// Derive and print sidebar entries for one directory
    Sidebar {
        /// Directory under the docs root to derive from
        dir: String,
    },
    /// Load and validate config and derivation without writing
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Emit => {
            let config = config::load_config(&cli.docs)?;
            let version =
                version::resolve(cli.production, &cli.docs, &config.fallback_version);
            let tree = sidebar::build_sidebar(&config, &cli.docs);
            let spec = site::build(&config, &version, tree);
            std::fs::write(&cli.out, site::to_json(&spec)?)?;
            output::print_spec_output(&spec, &cli.out);
        }
        Command::Sidebar { dir } => {
            let config = config::load_config(&cli.docs)?;
            let target = cli.docs.join(&dir);
            let prefix = format!("/{}/", dir.trim_matches('/'));
            let entries = sidebar::derive_entries(&target, &prefix, &config.index_file);
            output::print_sidebar_output(&entries, &target);
        }
        Command::Check => {
            println!("==> Checking {}", cli.docs.display());
            let config = config::load_config(&cli.docs)?;
            let version =
                version::resolve(cli.production, &cli.docs, &config.fallback_version);
            let tree = sidebar::build_sidebar(&config, &cli.docs);
            let spec = site::build(&config, &version, tree);
            output::print_check_output(&spec);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
