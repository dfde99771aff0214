#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod discovery;
pub mod error;
pub mod index;
pub mod locator;
pub mod resolution;

pub use config::LocatorConfig;
pub use discovery::{AssetFilter, Discoverer, SearchLocation, VirtualFsAdapter, full_path_index};
pub use error::{LocatorError, Result};
pub use index::{FullPathIndex, build_index, reverse_path};
pub use locator::AssetLocator;
pub use resolution::{ExactlyOne, FirstMatch, ResolutionPolicy, TailView};

/// The path to where webjar resources live.
pub const WEBJARS_PATH_PREFIX: &str = "META-INF/resources/webjars";

/// Deepest directory level tolerated beneath the resource root of a directory search root.
pub const DEFAULT_MAX_DIRECTORY_DEPTH: usize = 5;
