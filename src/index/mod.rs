//! Building the ordered full path index used for partial path lookups.
//!
//! Keys are the segment-reversed form of each full path, so that a lookup on the trailing
//! segments of a path (the file name plus optional parent folders) turns into a prefix
//! lookup on an ordered map. The reversal and the index construction live in separate
//! submodules so that each can be tested on its own.

mod build;
mod reverse;

use std::collections::BTreeMap;

pub use build::build_index;
pub use reverse::reverse_path;

/// Ordered mapping from reversed key to full asset path.
pub type FullPathIndex = BTreeMap<String, String>;
