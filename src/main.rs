//! Command line front-end for resolving and listing WebJar assets.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use webjar_locator::{AssetLocator, ExactlyOne, FirstMatch, LocatorConfig};

#[derive(Parser, Debug)]
#[command(name = "webjar-locate", version, about = "Locate WebJar assets by partial path")]
struct Cli {
  /// Directory, archive or `scheme:` location to scan (repeatable).
  #[arg(long = "root", value_name = "LOCATION", global = true)]
  roots: Vec<String>,

  /// JSON configuration file; defaults to `webjars.config.json` in the current directory.
  #[arg(long, value_name = "FILE", global = true)]
  config: Option<PathBuf>,

  /// Regular expression relative asset paths must match.
  #[arg(long, value_name = "REGEX", global = true)]
  filter: Option<String>,

  /// How to choose between several matching assets.
  #[arg(long, value_enum, default_value_t = Policy::ExactlyOne, global = true)]
  policy: Policy,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print the full path for each partial path.
  Resolve {
    /// Partial paths such as `jquery.js` or `3.1.0/jquery.js`.
    #[arg(required = true)]
    partial_paths: Vec<String>,
  },
  /// Print every asset beneath a folder, e.g. `/jquery`.
  List {
    /// Folder path relative to the resource root, starting with `/`.
    folder: String,
  },
  /// Print the full path index as `reversed key -> full path` lines.
  Index,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Policy {
  ExactlyOne,
  FirstMatch,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();

  let cli = Cli::parse();
  let config = load_config(&cli)?;
  let mut locator = AssetLocator::from_config(&config).context("failed to index webjar assets")?;
  match cli.policy {
    Policy::ExactlyOne => locator.set_resolution_policy(ExactlyOne),
    Policy::FirstMatch => locator.set_resolution_policy(FirstMatch),
  }

  match cli.command {
    Command::Resolve { partial_paths } => {
      for partial_path in &partial_paths {
        let full_path = locator
          .full_path(partial_path)
          .with_context(|| format!("failed to resolve {partial_path}"))?;
        println!("{full_path}");
      }
    }
    Command::List { folder } => {
      for asset in locator.list_assets(&folder_path(&folder)) {
        println!("{asset}");
      }
    }
    Command::Index => {
      for (key, full_path) in locator.full_path_index() {
        println!("{key} -> {full_path}");
      }
    }
  }

  Ok(())
}

fn load_config(cli: &Cli) -> Result<LocatorConfig> {
  let config = match &cli.config {
    Some(path) => LocatorConfig::from_path(path)
      .with_context(|| format!("failed to load {}", path.display()))?,
    None => LocatorConfig::discover(&std::env::current_dir().context("no current directory")?),
  };
  Ok(config.with_overrides(&cli.roots, cli.filter.as_deref()))
}

/// Folder paths are listed relative to the resource root and must start with `/`.
fn folder_path(folder: &str) -> String {
  if folder.starts_with('/') {
    folder.to_string()
  } else {
    format!("/{folder}")
  }
}
