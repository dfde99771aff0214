//! Directory scanning for plain resource roots.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::AssetFilter;
use crate::WEBJARS_PATH_PREFIX;
use crate::error::{LocatorError, Result};

/// Walk the resource root beneath `root`, collecting relative asset paths.
///
/// The walk starts at `<root>/META-INF/resources/webjars` (depth 0); a root without that
/// directory contributes nothing. Meeting a directory nested deeper than `max_depth`, or a
/// symlink cycle, aborts the scan with [`LocatorError::DepthExceeded`]. Files whose names
/// are not valid UTF-8 are skipped.
pub fn collect_directory_assets(
  root: &Path,
  filter: &AssetFilter,
  max_depth: usize,
) -> Result<BTreeSet<String>> {
  let resource_root = root.join(WEBJARS_PATH_PREFIX);
  let mut asset_paths = BTreeSet::new();
  if !resource_root.is_dir() {
    debug!(root = %root.display(), "no webjar resources beneath directory");
    return Ok(asset_paths);
  }

  for entry in WalkDir::new(&resource_root).follow_links(true) {
    let entry = match entry {
      Ok(entry) => entry,
      Err(err) if err.loop_ancestor().is_some() => {
        return Err(LocatorError::DepthExceeded {
          root: resource_root,
          max_depth,
        });
      }
      Err(err) => return Err(LocatorError::discovery(root.display().to_string(), err)),
    };

    if entry.file_type().is_dir() {
      if entry.depth() > max_depth {
        return Err(LocatorError::DepthExceeded {
          root: resource_root,
          max_depth,
        });
      }
      continue;
    }

    let Some(relative) = relative_asset_path(&resource_root, entry.path()) else {
      warn!(path = %entry.path().display(), "skipping asset path that is not valid UTF-8");
      continue;
    };
    if filter.accepts(&relative) {
      asset_paths.insert(relative);
    }
  }

  debug!(root = %root.display(), assets = asset_paths.len(), "scanned directory");
  Ok(asset_paths)
}

/// Rebuild the `/`-separated path of `path` starting at the resource-root marker.
fn relative_asset_path(resource_root: &Path, path: &Path) -> Option<String> {
  let segments = path
    .strip_prefix(resource_root)
    .ok()?
    .components()
    .map(|component| component.as_os_str().to_str())
    .collect::<Option<Vec<_>>>()?;
  Some(format!("{WEBJARS_PATH_PREFIX}/{}", segments.join("/")))
}
