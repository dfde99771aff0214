use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::tempdir;
use webjar_locator::{
  AssetLocator, FirstMatch, LocatorConfig, LocatorError, WEBJARS_PATH_PREFIX, build_index,
};

fn write_jar(path: &Path, entries: &[&str]) {
  let mut zip = zip::ZipWriter::new(fs::File::create(path).unwrap());
  let options = zip::write::SimpleFileOptions::default();
  for name in entries {
    zip.start_file(*name, options).unwrap();
    zip.write_all(b"/* asset */").unwrap();
  }
  zip.finish().unwrap();
}

fn write_directory_asset(root: &Path, relative: &str) {
  let path = root.join(WEBJARS_PATH_PREFIX).join(relative);
  fs::create_dir_all(path.parent().unwrap()).unwrap();
  fs::write(path, "/* asset */").unwrap();
}

#[test]
fn resolves_assets_from_jars_and_directories() {
  let dir = tempdir().unwrap();
  let jar = dir.path().join("jquery-3.1.0.jar");
  write_jar(&jar, &[
    "META-INF/MANIFEST.MF",
    "META-INF/resources/webjars/jquery/3.1.0/jquery.js",
    "META-INF/resources/webjars/jquery/3.1.0/jquery.min.js",
  ]);
  let classes = dir.path().join("classes");
  write_directory_asset(&classes, "bootstrap/5.3.0/css/bootstrap.css");
  write_directory_asset(&classes, "bootstrap/5.3.0/js/bootstrap.js");

  let config = LocatorConfig {
    search_roots: vec![
      jar.display().to_string(),
      format!("file:{}", classes.display()),
    ],
    ..LocatorConfig::default()
  };
  let locator = AssetLocator::from_config(&config).unwrap();

  assert_eq!(locator.full_path_index().len(), 4);
  assert_eq!(
    locator.full_path("jquery.js").unwrap(),
    "META-INF/resources/webjars/jquery/3.1.0/jquery.js"
  );
  assert_eq!(
    locator.full_path("css/bootstrap.css").unwrap(),
    "META-INF/resources/webjars/bootstrap/5.3.0/css/bootstrap.css"
  );
  assert_eq!(locator.list_assets("/bootstrap").len(), 2);
  assert_eq!(locator.list_assets("/jquery/3.1.0").len(), 2);
}

#[test]
fn multiple_versions_need_a_longer_path_or_a_lenient_policy() {
  let dir = tempdir().unwrap();
  let old = dir.path().join("lib-1.0.jar");
  let new = dir.path().join("lib-2.0.jar");
  write_jar(&old, &["META-INF/resources/webjars/lib/1.0/lib.js"]);
  write_jar(&new, &["META-INF/resources/webjars/lib/2.0/lib.js"]);

  let config = LocatorConfig {
    search_roots: vec![old.display().to_string(), new.display().to_string()],
    ..LocatorConfig::default()
  };
  let locator = AssetLocator::from_config(&config).unwrap();

  let err = locator.full_path("lib.js").unwrap_err();
  assert!(matches!(err, LocatorError::AmbiguousMatch { .. }));
  assert!(err.to_string().contains("lib.js"));
  assert_eq!(
    locator.full_path("2.0/lib.js").unwrap(),
    "META-INF/resources/webjars/lib/2.0/lib.js"
  );

  let lenient = locator.with_policy(FirstMatch);
  assert_eq!(
    lenient.full_path("lib.js").unwrap(),
    "META-INF/resources/webjars/lib/1.0/lib.js"
  );
}

#[test]
fn configured_filter_limits_the_index() {
  let dir = tempdir().unwrap();
  write_directory_asset(dir.path(), "lib/1.0/lib.js");
  write_directory_asset(dir.path(), "lib/1.0/lib.css");

  let config = LocatorConfig {
    search_roots: vec![dir.path().display().to_string()],
    filter: r".*\.css".into(),
    ..LocatorConfig::default()
  };
  let locator = AssetLocator::from_config(&config).unwrap();

  assert!(locator.full_path("lib.css").is_ok());
  assert!(matches!(
    locator.full_path("lib.js"),
    Err(LocatorError::NotFound { .. })
  ));
}

#[test]
fn broken_archive_fails_construction() {
  let dir = tempdir().unwrap();
  let jar = dir.path().join("broken.jar");
  fs::write(&jar, b"definitely not a zip").unwrap();

  let config = LocatorConfig {
    search_roots: vec![jar.display().to_string()],
    ..LocatorConfig::default()
  };
  assert!(matches!(
    AssetLocator::from_config(&config),
    Err(LocatorError::Discovery { .. })
  ));
}

#[test]
fn pathological_directory_fails_construction() {
  let dir = tempdir().unwrap();
  write_directory_asset(dir.path(), "a/b/c/d/e/f/g/deep.js");

  let config = LocatorConfig {
    search_roots: vec![dir.path().display().to_string()],
    ..LocatorConfig::default()
  };
  assert!(matches!(
    AssetLocator::from_config(&config),
    Err(LocatorError::DepthExceeded { .. })
  ));
}

#[test]
fn prebuilt_index_serves_concurrent_readers() {
  let locator = AssetLocator::from_index(build_index([
    "META-INF/resources/webjars/jquery/3.1.0/jquery.js",
    "META-INF/resources/webjars/zepto/1.2.0/zepto.js",
  ]));

  std::thread::scope(|scope| {
    for partial in ["jquery.js", "zepto.js", "1.2.0/zepto.js"] {
      let locator = &locator;
      scope.spawn(move || {
        let full_path = locator.full_path(partial).unwrap();
        assert!(full_path.ends_with(partial));
      });
    }
  });
}
