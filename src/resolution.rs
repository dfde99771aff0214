//! Resolution of partial paths against the full path index.
//!
//! The resolver narrows the index down to its tail view, the ordered run of entries whose
//! reversed key is not less than the reversed partial path, and hands that view to the
//! active [`ResolutionPolicy`]. Because matching keys sort contiguously, a policy only needs
//! to look at the start of the view to decide.

use std::collections::btree_map::Range;
use std::ops::Bound;

use tracing::debug;

use crate::error::{LocatorError, Result};
use crate::index::{FullPathIndex, reverse_path};

/// Trait describing how a single full path is chosen from the tail view.
///
/// Any `fn(&TailView<'_>, &str) -> Result<String>` is a policy as well.
///
/// Implementations must check the prefix condition themselves: the tail view also contains
/// entries past the end of the matching run.
pub trait ResolutionPolicy: Send + Sync {
  /// Choose the full path for `partial_path`, or fail.
  fn resolve(&self, tail: &TailView<'_>, partial_path: &str) -> Result<String>;
}

impl<F> ResolutionPolicy for F
where
  F: Fn(&TailView<'_>, &str) -> Result<String> + Send + Sync,
{
  fn resolve(&self, tail: &TailView<'_>, partial_path: &str) -> Result<String> {
    self(tail, partial_path)
  }
}

/// Ordered view over the index entries starting at the first key not less than the
/// reversed partial path.
#[derive(Clone)]
pub struct TailView<'a> {
  entries: Range<'a, String, String>,
  reversed_partial: String,
}

impl<'a> TailView<'a> {
  /// Compute the tail view of `index` for `partial_path`.
  pub fn new(index: &'a FullPathIndex, partial_path: &str) -> Self {
    let reversed_partial = reverse_path(partial_path);
    let entries = index.range::<str, _>((Bound::Included(reversed_partial.as_str()), Bound::Unbounded));
    Self {
      entries,
      reversed_partial,
    }
  }

  /// The partial path with its segments reversed, i.e. the prefix matching keys share.
  pub fn reversed_partial(&self) -> &str {
    &self.reversed_partial
  }

  /// Iterate over every entry of the view, matching or not, in key order.
  pub fn iter(&self) -> Range<'a, String, String> {
    self.entries.clone()
  }

  /// Iterate over the entries whose key starts with the reversed partial path.
  pub fn matches(&self) -> impl Iterator<Item = (&'a String, &'a String)> + '_ {
    self
      .iter()
      .take_while(|(key, _)| self.is_match(key))
  }

  /// Returns `true` when `key` starts with the reversed partial path.
  pub fn is_match(&self, key: &str) -> bool {
    key.starts_with(&self.reversed_partial)
  }

  /// Returns `true` when no index entry sorts at or after the reversed partial path.
  pub fn is_empty(&self) -> bool {
    self.iter().next().is_none()
  }
}

/// Resolve `partial_path` against `index` with the given policy.
pub fn resolve(
  index: &FullPathIndex,
  partial_path: &str,
  policy: &dyn ResolutionPolicy,
) -> Result<String> {
  let tail = TailView::new(index, partial_path);
  debug!(partial_path, reversed = tail.reversed_partial(), "resolving partial path");
  policy.resolve(&tail, partial_path)
}

/// Default policy: succeed only when exactly one entry matches.
///
/// Only the first two entries of the tail view are inspected. A second matching entry is
/// enough to report [`LocatorError::AmbiguousMatch`]; the total number of matches is never
/// counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactlyOne;

impl ResolutionPolicy for ExactlyOne {
  fn resolve(&self, tail: &TailView<'_>, partial_path: &str) -> Result<String> {
    let mut entries = tail.iter();

    let Some((key, full_path)) = entries.next() else {
      return Err(LocatorError::not_found(partial_path));
    };
    if !tail.is_match(key) {
      return Err(LocatorError::not_found(partial_path));
    }

    if entries.next().is_some_and(|(next_key, _)| tail.is_match(next_key)) {
      return Err(LocatorError::ambiguous(partial_path));
    }

    Ok(full_path.clone())
  }
}

/// Lenient policy returning the first match in key order.
///
/// Suited to deployments that bundle several acceptable versions of the same asset. Only
/// fails when nothing matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMatch;

impl ResolutionPolicy for FirstMatch {
  fn resolve(&self, tail: &TailView<'_>, partial_path: &str) -> Result<String> {
    tail
      .matches()
      .next()
      .map(|(_, full_path)| full_path.clone())
      .ok_or_else(|| LocatorError::not_found(partial_path))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::build_index;

  fn versioned_index() -> FullPathIndex {
    build_index(["A/B/1.0/x.js", "A/B/2.0/x.js"])
  }

  #[test]
  fn tail_view_starts_at_reversed_partial() {
    let index = build_index(["a/x.js", "b/y.js", "c/z.js"]);
    let tail = TailView::new(&index, "y.js");

    let keys: Vec<&str> = tail.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, vec!["y.js/b", "z.js/c"]);
    assert_eq!(tail.reversed_partial(), "y.js");
  }

  #[test]
  fn tail_view_matches_stop_at_first_mismatch() {
    let index = build_index(["a/x.js", "b/x.js", "c/z.js"]);
    let tail = TailView::new(&index, "x.js");

    let matches: Vec<&str> = tail.matches().map(|(_, path)| path.as_str()).collect();
    assert_eq!(matches, vec!["a/x.js", "b/x.js"]);
  }

  #[test]
  fn tail_view_is_empty_past_last_key() {
    let index = build_index(["a/b.js"]);
    assert!(TailView::new(&index, "zzz.js").is_empty());
    assert!(!TailView::new(&index, "b.js").is_empty());
  }

  #[test]
  fn exactly_one_reports_ambiguity() {
    let err = resolve(&versioned_index(), "x.js", &ExactlyOne).unwrap_err();
    assert!(matches!(err, LocatorError::AmbiguousMatch { ref partial_path } if partial_path == "x.js"));
  }

  #[test]
  fn exactly_one_resolves_longer_partial_path() {
    let resolved = resolve(&versioned_index(), "1.0/x.js", &ExactlyOne).unwrap();
    assert_eq!(resolved, "A/B/1.0/x.js");
  }

  #[test]
  fn exactly_one_reports_ambiguity_beyond_two_matches() {
    let index = build_index(["a/1/x.js", "a/2/x.js", "a/3/x.js", "a/4/x.js"]);
    let err = resolve(&index, "x.js", &ExactlyOne).unwrap_err();
    assert!(matches!(err, LocatorError::AmbiguousMatch { .. }));
  }

  #[test]
  fn exactly_one_reports_not_found_on_empty_tail() {
    let index = build_index(["jquery/3.1.0/jquery.js"]);
    let err = resolve(&index, "zepto.js", &ExactlyOne).unwrap_err();
    assert!(matches!(err, LocatorError::NotFound { ref partial_path } if partial_path == "zepto.js"));
  }

  #[test]
  fn exactly_one_reports_not_found_when_first_entry_differs() {
    let index = build_index(["jquery/3.1.0/jquery.js"]);
    let err = resolve(&index, "notfound.js", &ExactlyOne).unwrap_err();
    assert!(matches!(err, LocatorError::NotFound { .. }));
  }

  #[test]
  fn exactly_one_ignores_non_matching_second_entry() {
    let index = build_index(["jquery/3.1.0/jquery.js", "zepto/1.0/zepto.js"]);
    let resolved = resolve(&index, "jquery.js", &ExactlyOne).unwrap();
    assert_eq!(resolved, "jquery/3.1.0/jquery.js");
  }

  #[test]
  fn empty_index_never_resolves() {
    let index = FullPathIndex::new();
    for partial in ["x.js", "", "a/b"] {
      let err = resolve(&index, partial, &ExactlyOne).unwrap_err();
      assert!(matches!(err, LocatorError::NotFound { .. }));
    }
  }

  #[test]
  fn first_match_picks_lowest_key() {
    let resolved = resolve(&versioned_index(), "x.js", &FirstMatch).unwrap();
    assert_eq!(resolved, "A/B/1.0/x.js");
  }

  #[test]
  fn first_match_still_reports_not_found() {
    let err = resolve(&versioned_index(), "y.js", &FirstMatch).unwrap_err();
    assert!(matches!(err, LocatorError::NotFound { .. }));
  }

  fn last_match(tail: &TailView<'_>, partial_path: &str) -> Result<String> {
    tail
      .matches()
      .last()
      .map(|(_, path)| path.clone())
      .ok_or_else(|| LocatorError::not_found(partial_path))
  }

  #[test]
  fn functions_act_as_policies() {
    let resolved = resolve(&versioned_index(), "x.js", &last_match).unwrap();
    assert_eq!(resolved, "A/B/2.0/x.js");
  }

  #[test]
  fn resolves_every_unique_suffix() {
    let paths = [
      "META-INF/resources/webjars/jquery/3.1.0/jquery.js",
      "META-INF/resources/webjars/jquery/3.1.0/jquery.min.js",
      "META-INF/resources/webjars/bootstrap/5.3.0/css/bootstrap.css",
      "META-INF/resources/webjars/bootstrap/5.3.0/js/bootstrap.js",
    ];
    let index = build_index(paths);

    for path in paths {
      let file_name = path.rsplit('/').next().unwrap();
      assert_eq!(resolve(&index, file_name, &ExactlyOne).unwrap(), path);
      assert_eq!(resolve(&index, path, &ExactlyOne).unwrap(), path);
    }
  }
}
