//! Locator configuration loader describing where and what to scan.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::DEFAULT_MAX_DIRECTORY_DEPTH;
use crate::discovery::{AssetFilter, Discoverer, SearchLocation};
use crate::error::{ConfigFailure, LocatorError, Result};

/// File name looked up by [`LocatorConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "webjars.config.json";

/// Environment variable listing the default search roots, using the platform path-list syntax.
pub const SEARCH_PATH_ENV: &str = "WEBJARS_SEARCH_PATH";

/// Discoverable locator configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LocatorConfig {
  /// Directories, archives or virtual locations to scan. Empty means the default roots.
  pub search_roots: Vec<String>,
  /// Regular expression that relative asset paths must match in full.
  pub filter: String,
  /// Deepest directory level tolerated while walking directory roots.
  pub max_directory_depth: usize,
}

impl Default for LocatorConfig {
  fn default() -> Self {
    Self {
      search_roots: Vec::new(),
      filter: ".*".into(),
      max_directory_depth: DEFAULT_MAX_DIRECTORY_DEPTH,
    }
  }
}

impl LocatorConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// When the configuration file does not exist or fails to parse we fall back to default
  /// values so callers can continue with the default search roots.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if !candidate.exists() {
      return Self::default();
    }

    Self::from_path(&candidate).unwrap_or_else(|err| {
      warn!(error = %err, "ignoring unreadable locator configuration");
      Self::default()
    })
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self> {
    let config_error = |source: ConfigFailure| LocatorError::Config {
      path: path.to_path_buf(),
      source,
    };
    let content = fs::read_to_string(path).map_err(|err| config_error(err.into()))?;
    serde_json::from_str(&content).map_err(|err| config_error(err.into()))
  }

  /// Search locations to scan, falling back to [`default_search_roots`].
  pub fn search_locations(&self) -> Vec<SearchLocation> {
    if self.search_roots.is_empty() {
      return default_search_roots()
        .into_iter()
        .map(SearchLocation::from_path)
        .collect();
    }

    self
      .search_roots
      .iter()
      .map(|root| SearchLocation::parse(root))
      .collect()
  }

  /// Replace the search roots and filter with the ones given, when present.
  pub fn with_overrides(mut self, search_roots: &[String], filter: Option<&str>) -> Self {
    if !search_roots.is_empty() {
      self.search_roots = search_roots.to_vec();
    }
    if let Some(filter) = filter {
      self.filter = filter.to_string();
    }
    self
  }

  /// Create a discoverer honouring the filter and depth bound.
  pub fn discoverer(&self) -> Result<Discoverer> {
    Ok(Discoverer::new(AssetFilter::new(&self.filter)?).with_max_depth(self.max_directory_depth))
  }
}

/// Roots listed in [`SEARCH_PATH_ENV`], or the current directory when it is unset.
pub fn default_search_roots() -> Vec<PathBuf> {
  search_roots_from(env::var_os(SEARCH_PATH_ENV).as_deref())
}

/// Split a search path value into roots; unset or empty means the current directory.
pub fn search_roots_from(value: Option<&OsStr>) -> Vec<PathBuf> {
  match value {
    Some(value) if !value.is_empty() => env::split_paths(value).collect(),
    _ => vec![PathBuf::from(".")],
  }
}
