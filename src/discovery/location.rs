use std::path::{Path, PathBuf};

/// A place the discoverer scans for assets, dispatched by scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchLocation {
  /// Plain directory tree containing the resource root.
  Directory(PathBuf),
  /// Jar or zip archive.
  Archive(PathBuf),
  /// Location served by a registered virtual filesystem adapter.
  Virtual {
    /// URL scheme selecting the adapter.
    scheme: String,
    /// Full location string handed to the adapter.
    location: String,
  },
}

impl SearchLocation {
  /// Parse a location string.
  ///
  /// `jar:file:<path>!/...` names an archive; `file:<path>` and bare paths are classified by
  /// looking at the filesystem; any other scheme of two or more letters is virtual.
  pub fn parse(raw: &str) -> Self {
    if let Some(rest) = raw.strip_prefix("jar:") {
      let archive = rest.split('!').next().unwrap_or(rest);
      let archive = archive.strip_prefix("file:").unwrap_or(archive);
      return Self::Archive(PathBuf::from(archive));
    }

    if let Some(path) = raw.strip_prefix("file:") {
      return Self::from_path(path);
    }

    match scheme_of(raw) {
      Some(scheme) => Self::Virtual {
        scheme: scheme.to_ascii_lowercase(),
        location: raw.to_string(),
      },
      None => Self::from_path(raw),
    }
  }

  /// Classify a filesystem path as a directory or an archive.
  pub fn from_path(path: impl AsRef<Path>) -> Self {
    let path = path.as_ref();
    if path.is_dir() {
      Self::Directory(path.to_path_buf())
    } else {
      Self::Archive(path.to_path_buf())
    }
  }

  /// Human readable description used in logs and errors.
  pub fn describe(&self) -> String {
    match self {
      Self::Directory(path) | Self::Archive(path) => path.display().to_string(),
      Self::Virtual { location, .. } => location.clone(),
    }
  }
}

/// Extract a URL scheme, ignoring single letters so Windows drive prefixes stay paths.
fn scheme_of(raw: &str) -> Option<&str> {
  let (scheme, _) = raw.split_once(':')?;
  let valid = scheme.len() > 1
    && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
    && scheme
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
  valid.then_some(scheme)
}
