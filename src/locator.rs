//! The public locator tying the index, the resolver and discovery together.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::WEBJARS_PATH_PREFIX;
use crate::config::LocatorConfig;
use crate::error::Result;
use crate::index::FullPathIndex;
use crate::resolution::{ExactlyOne, ResolutionPolicy, resolve};

/// Locates WebJar assets from partial paths.
///
/// The index is an immutable snapshot shared between clones; build a new locator to pick up
/// newly available resources.
#[derive(Clone)]
pub struct AssetLocator {
  index: Arc<FullPathIndex>,
  policy: Arc<dyn ResolutionPolicy>,
}

impl AssetLocator {
  /// Scan the default search roots for every available asset.
  pub fn new() -> Result<Self> {
    Self::from_config(&LocatorConfig::default())
  }

  /// Scan the locations described by `config`.
  pub fn from_config(config: &LocatorConfig) -> Result<Self> {
    let index = config.discoverer()?.build_index(&config.search_locations())?;
    Ok(Self::from_index(index))
  }

  /// Establish a locator over an existing index.
  pub fn from_index(index: FullPathIndex) -> Self {
    Self {
      index: Arc::new(index),
      policy: Arc::new(ExactlyOne),
    }
  }

  /// Replace the resolution policy, consuming the locator.
  pub fn with_policy(mut self, policy: impl ResolutionPolicy + 'static) -> Self {
    self.set_resolution_policy(policy);
    self
  }

  /// Replace the resolution policy without rebuilding the index.
  pub fn set_resolution_policy(&mut self, policy: impl ResolutionPolicy + 'static) {
    self.policy = Arc::new(policy);
  }

  /// Return the full path of the asset identified by `partial_path`.
  ///
  /// `partial_path` holds the trailing segments of the wanted path, e.g. `jquery.js` or
  /// `abc/someother.js`.
  pub fn full_path(&self, partial_path: &str) -> Result<String> {
    resolve(&self.index, partial_path, self.policy.as_ref())
  }

  /// The index backing this locator.
  pub fn full_path_index(&self) -> &FullPathIndex {
    &self.index
  }

  /// List the assets beneath `folder_path`, which must begin with `/`.
  pub fn list_assets(&self, folder_path: &str) -> BTreeSet<String> {
    let prefix = format!("{WEBJARS_PATH_PREFIX}{folder_path}");
    let assets: BTreeSet<String> = self
      .index
      .values()
      .filter(|asset| asset.starts_with(&prefix))
      .cloned()
      .collect();
    debug!(folder_path, assets = assets.len(), "listed assets");
    assets
  }
}

impl std::fmt::Debug for AssetLocator {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AssetLocator")
      .field("assets", &self.index.len())
      .finish_non_exhaustive()
  }
}
