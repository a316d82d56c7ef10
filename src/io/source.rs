// src/io/source.rs

use crate::error::{DataError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Where dataset text comes from. Resource ids are slash-separated paths
/// relative to the data root, e.g. "beta_decay/data_D1M.txt".
pub trait DataSource {
  fn fetch(&self, resource: &str) -> Result<String>;

  /// File names inside a directory resource, `None` if it cannot be listed.
  fn list(&self, dir: &str) -> Option<Vec<String>>;
}

/// Reads resources from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
  root: PathBuf,
}

impl FsSource {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  fn resolve(&self, resource: &str) -> PathBuf {
    resource
      .split('/')
      .filter(|part| !part.is_empty() && *part != "..")
      .fold(self.root.clone(), |acc, part| acc.join(part))
  }
}

impl DataSource for FsSource {
  fn fetch(&self, resource: &str) -> Result<String> {
    let path = self.resolve(resource);
    fs::read_to_string(&path).map_err(|e| DataError::unavailable(resource, e))
  }

  fn list(&self, dir: &str) -> Option<Vec<String>> {
    let entries = fs::read_dir(self.resolve(dir)).ok()?;
    let mut names: Vec<String> = entries
      .filter_map(|e| e.ok())
      .filter(|e| e.path().is_file())
      .map(|e| e.file_name().to_string_lossy().to_string())
      .collect();
    names.sort();
    Some(names)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fetch_and_list() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("beta_decay")).unwrap();
    fs::write(dir.path().join("beta_decay/data_D1M.txt"), "60 50 1 0 2 3 4\n").unwrap();
    fs::write(dir.path().join("beta_decay/data_SLy4.txt"), "").unwrap();

    let src = FsSource::new(dir.path());
    assert_eq!(src.fetch("beta_decay/data_D1M.txt").unwrap(), "60 50 1 0 2 3 4\n");
    assert_eq!(
      src.list("beta_decay"),
      Some(vec!["data_D1M.txt".to_string(), "data_SLy4.txt".to_string()])
    );
    assert!(src.list("strength_functions").is_none());
  }

  #[test]
  fn test_missing_resource_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let src = FsSource::new(dir.path());
    match src.fetch("beta_decay/data_nope.txt") {
      Err(DataError::DataUnavailable { resource, .. }) => {
        assert_eq!(resource, "beta_decay/data_nope.txt")
      }
      other => panic!("expected DataUnavailable, got {:?}", other),
    }
  }

  #[test]
  fn test_parent_segments_stay_under_root() {
    let src = FsSource::new("/data");
    assert_eq!(src.resolve("../etc/passwd"), PathBuf::from("/data/etc/passwd"));
  }
}
