//! Discovery of candidate asset paths beneath the resource root.
//!
//! Each search location is scanned by the strategy matching its kind: plain directories are
//! walked with a depth guard, archives have their entries enumerated, and any other scheme
//! is handed to a registered [`VirtualFsAdapter`]. All strategies share the same
//! [`AssetFilter`] contract and only report paths starting at the resource-root marker.

mod adapter;
mod archive;
mod directory;
mod filter;
mod location;

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::{debug, info};

pub use adapter::VirtualFsAdapter;
pub use archive::collect_archive_assets;
pub use directory::collect_directory_assets;
pub use filter::AssetFilter;
pub use location::SearchLocation;

use crate::DEFAULT_MAX_DIRECTORY_DEPTH;
use crate::error::{DiscoveryFailure, LocatorError, Result};
use crate::index::{FullPathIndex, build_index};

/// Scans search locations for assets matching a filter.
#[derive(Clone)]
pub struct Discoverer {
  filter: AssetFilter,
  max_depth: usize,
  adapters: HashMap<String, Arc<dyn VirtualFsAdapter>>,
}

impl Discoverer {
  /// Create a discoverer using `filter` and the default directory depth bound.
  pub fn new(filter: AssetFilter) -> Self {
    Self {
      filter,
      max_depth: DEFAULT_MAX_DIRECTORY_DEPTH,
      adapters: HashMap::new(),
    }
  }

  /// Override the maximum directory depth tolerated while walking directories.
  pub fn with_max_depth(mut self, max_depth: usize) -> Self {
    self.max_depth = max_depth;
    self
  }

  /// Register an adapter for virtual locations using its scheme.
  pub fn with_adapter(mut self, adapter: impl VirtualFsAdapter + 'static) -> Self {
    let scheme = adapter.scheme().to_ascii_lowercase();
    self.adapters.insert(scheme, Arc::new(adapter));
    self
  }

  /// Collect the union of asset paths found in every location.
  ///
  /// The first failing location aborts the whole scan.
  pub fn discover(&self, locations: &[SearchLocation]) -> Result<BTreeSet<String>> {
    let mut asset_paths = BTreeSet::new();
    for location in locations {
      debug!(location = %location.describe(), "scanning search location");
      asset_paths.extend(self.scan(location)?);
    }
    Ok(asset_paths)
  }

  /// Discover assets in every location and build the full path index from them.
  pub fn build_index(&self, locations: &[SearchLocation]) -> Result<FullPathIndex> {
    let index = build_index(self.discover(locations)?);
    info!(
      locations = locations.len(),
      assets = index.len(),
      "indexed webjar assets"
    );
    Ok(index)
  }

  fn scan(&self, location: &SearchLocation) -> Result<BTreeSet<String>> {
    match location {
      SearchLocation::Directory(path) => {
        collect_directory_assets(path, &self.filter, self.max_depth)
      }
      SearchLocation::Archive(path) => collect_archive_assets(path, &self.filter),
      SearchLocation::Virtual { scheme, location } => {
        let adapter = self.adapters.get(scheme).ok_or_else(|| {
          LocatorError::discovery(location.as_str(), DiscoveryFailure::UnsupportedScheme(scheme.clone()))
        })?;
        adapter
          .asset_paths(location, &self.filter)
          .map_err(|err| LocatorError::discovery(location.as_str(), DiscoveryFailure::Adapter(err)))
      }
    }
  }
}

impl Default for Discoverer {
  fn default() -> Self {
    Self::new(AssetFilter::match_all())
  }
}

/// Build an index of every asset matching `pattern` in the given locations.
pub fn full_path_index(pattern: &str, locations: &[SearchLocation]) -> Result<FullPathIndex> {
  Discoverer::new(AssetFilter::new(pattern)?).build_index(locations)
}
