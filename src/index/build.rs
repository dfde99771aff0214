use tracing::debug;

use super::{FullPathIndex, reverse_path};

/// Build an index from a collection of full asset paths.
///
/// Every path is stored under its segment-reversed key. The input is trusted to already be
/// filtered; repeated paths collapse onto the same key, so the caller's ordering and any
/// duplicates do not influence the result.
pub fn build_index<I, S>(paths: I) -> FullPathIndex
where
  I: IntoIterator<Item = S>,
  S: Into<String>,
{
  let index: FullPathIndex = paths
    .into_iter()
    .map(Into::into)
    .map(|path| (reverse_path(&path), path))
    .collect();

  debug!(entries = index.len(), "built full path index");
  index
}
