/// Reverse the order of the `/`-separated segments of a path.
///
/// Only segment order changes; the characters inside each segment are kept as-is, so
/// `aa/bb/cc` becomes `cc/bb/aa`. Empty segments produced by leading, trailing or doubled
/// separators are preserved, which makes the transform its own inverse.
pub fn reverse_path(path: &str) -> String {
  path.rsplit('/').collect::<Vec<_>>().join("/")
}
