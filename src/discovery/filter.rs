use regex::Regex;

use crate::WEBJARS_PATH_PREFIX;
use crate::error::Result;

/// Filter applied to every candidate path found by the discovery strategies.
///
/// Candidates are cut down to the fragment starting at the resource-root marker, and that
/// fragment must match the expression in full.
#[derive(Debug, Clone)]
pub struct AssetFilter {
  expression: Regex,
}

impl AssetFilter {
  /// Compile a filter from a regular expression that must match whole relative paths.
  pub fn new(pattern: &str) -> Result<Self> {
    let expression = Regex::new(&format!("^(?:{pattern})$"))?;
    Ok(Self { expression })
  }

  /// Filter accepting every path beneath the resource root.
  pub fn match_all() -> Self {
    Self {
      expression: Regex::new("^(?:.*)$").expect("invalid match-all regex"),
    }
  }

  /// Strip everything in front of the resource-root marker.
  ///
  /// Returns `None` when `path` does not contain the marker at all.
  pub fn relative_path<'p>(&self, path: &'p str) -> Option<&'p str> {
    path.find(WEBJARS_PATH_PREFIX).map(|start| &path[start..])
  }

  /// Returns `true` when the relative path matches the filter expression.
  pub fn accepts(&self, relative_path: &str) -> bool {
    self.expression.is_match(relative_path)
  }

  /// Combine [`Self::relative_path`] and [`Self::accepts`].
  pub fn candidate<'p>(&self, path: &'p str) -> Option<&'p str> {
    self
      .relative_path(path)
      .filter(|relative| self.accepts(relative))
  }
}
