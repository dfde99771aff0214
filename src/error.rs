//! Error types shared by the index, resolver and discovery layers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building a locator or resolving a partial path.
#[derive(Error, Debug)]
pub enum LocatorError {
  /// No index entry matches the requested partial path.
  #[error(
    "{partial_path} could not be found. Make sure you've added the corresponding WebJar and please check for typos."
  )]
  NotFound {
    /// The partial path supplied by the caller.
    partial_path: String,
  },
  /// More than one index entry matches the requested partial path.
  #[error(
    "Multiple matches found for {partial_path}. Please provide a more specific path, for example by including a version number."
  )]
  AmbiguousMatch {
    /// The partial path supplied by the caller.
    partial_path: String,
  },
  /// Enumerating a search location failed.
  #[error("failed to scan {location}: {source}")]
  Discovery {
    /// Location that was being scanned.
    location: String,
    /// Underlying failure.
    #[source]
    source: DiscoveryFailure,
  },
  /// A directory search root nests deeper than the configured bound.
  #[error("got deeper than {max_depth} levels while searching {}", .root.display())]
  DepthExceeded {
    /// Directory the walk started from.
    root: PathBuf,
    /// Configured maximum directory depth.
    max_depth: usize,
  },
  /// The asset filter expression is not a valid regular expression.
  #[error("invalid asset filter: {0}")]
  InvalidFilter(#[from] regex::Error),
  /// A configuration file could not be read or parsed.
  #[error("failed to load configuration {}: {source}", .path.display())]
  Config {
    /// Path of the configuration file.
    path: PathBuf,
    /// Underlying failure.
    #[source]
    source: ConfigFailure,
  },
}

/// I/O level failures raised by the discovery strategies.
#[derive(Error, Debug)]
pub enum DiscoveryFailure {
  /// Filesystem access failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
  /// The archive could not be opened or one of its entries could not be read.
  #[error(transparent)]
  Archive(#[from] zip::result::ZipError),
  /// Walking a directory tree failed.
  #[error(transparent)]
  Walk(#[from] walkdir::Error),
  /// No virtual filesystem adapter is registered for the location's scheme.
  #[error("no adapter registered for `{0}` locations")]
  UnsupportedScheme(String),
  /// A virtual filesystem adapter reported an error.
  #[error(transparent)]
  Adapter(Box<dyn std::error::Error + Send + Sync>),
}

/// Failures raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigFailure {
  /// Reading the file failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
  /// The file is not valid configuration JSON.
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

impl LocatorError {
  pub(crate) fn not_found(partial_path: &str) -> Self {
    Self::NotFound {
      partial_path: partial_path.to_string(),
    }
  }

  pub(crate) fn ambiguous(partial_path: &str) -> Self {
    Self::AmbiguousMatch {
      partial_path: partial_path.to_string(),
    }
  }

  pub(crate) fn discovery(location: impl Into<String>, source: impl Into<DiscoveryFailure>) -> Self {
    Self::Discovery {
      location: location.into(),
      source: source.into(),
    }
  }
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, LocatorError>;
