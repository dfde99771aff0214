//! Enumerating assets packaged inside jar/zip archives.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use super::AssetFilter;
use crate::error::{LocatorError, Result};

/// Collect the relative asset paths stored in the archive at `path`.
///
/// Archive entries are already flat, so no depth bound applies. Directory entries are
/// skipped.
pub fn collect_archive_assets(path: &Path, filter: &AssetFilter) -> Result<BTreeSet<String>> {
  let location = path.display().to_string();
  let file = File::open(path).map_err(|err| LocatorError::discovery(&location, err))?;
  let mut archive = ZipArchive::new(file).map_err(|err| LocatorError::discovery(&location, err))?;
  let mut asset_paths = BTreeSet::new();

  for i in 0..archive.len() {
    let entry = archive
      .by_index(i)
      .map_err(|err| LocatorError::discovery(&location, err))?;
    if entry.is_dir() {
      continue;
    }

    if let Some(relative) = filter.candidate(entry.name()) {
      asset_paths.insert(relative.to_string());
    }
  }

  debug!(archive = %location, assets = asset_paths.len(), "scanned archive");
  Ok(asset_paths)
}
