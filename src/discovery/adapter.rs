use std::collections::BTreeSet;

use super::AssetFilter;

/// Capability for enumerating assets on filesystems the generic strategies cannot walk.
///
/// Adapters are registered per URL scheme on a [`super::Discoverer`]. They must apply the
/// same filter contract as the built-in strategies: only return fragments produced by
/// [`AssetFilter::candidate`].
pub trait VirtualFsAdapter: Send + Sync {
  /// Scheme handled by this adapter, e.g. `vfs`.
  fn scheme(&self) -> &str;

  /// List the relative asset paths available at `location`.
  fn asset_paths(
    &self,
    location: &str,
    filter: &AssetFilter,
  ) -> Result<BTreeSet<String>, Box<dyn std::error::Error + Send + Sync>>;
}
