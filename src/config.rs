// src/config.rs

use crate::chart::Property;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

fn default_data_root() -> PathBuf {
  PathBuf::from("data")
}

fn default_interactions() -> Vec<String> {
  vec!["D1M".to_string()]
}

fn default_interaction() -> String {
  "D1M".to_string()
}

fn default_property() -> Property {
  Property::HalfLife
}

fn default_zoom_step() -> f64 {
  0.1
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  /// Directory holding `beta_decay/` and `strength_functions/`.
  #[serde(default = "default_data_root")]
  pub data_root: PathBuf,

  /// Offered when `beta_decay/` cannot be listed.
  #[serde(default = "default_interactions")]
  pub interactions: Vec<String>,

  #[serde(default = "default_interaction")]
  pub default_interaction: String,

  #[serde(default = "default_property")]
  pub default_property: Property,

  #[serde(default = "default_zoom_step")]
  pub zoom_step: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      data_root: default_data_root(),
      interactions: default_interactions(),
      default_interaction: default_interaction(),
      default_property: default_property(),
      zoom_step: default_zoom_step(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/nucview/settings.json)
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  pub fn load_from(path: &Path) -> (Self, String) {
    if path.exists() {
      match File::open(path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    self.save_to(&Self::get_path())
  }

  pub fn save_to(&self, path: &Path) -> String {
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  fn get_path() -> PathBuf {
    // Must match the application id in main.rs
    if let Some(proj) = ProjectDirs::from("org", "nucview", "nucview") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let cfg = Config {
      data_root: PathBuf::from("/srv/nuclear"),
      default_property: Property::FfContribution,
      ..Config::default()
    };
    assert!(cfg.save_to(&path).starts_with("Config saved"));
    let (loaded, msg) = Config::load_from(&path);
    assert!(msg.starts_with("Config loaded"));
    assert_eq!(loaded, cfg);
  }

  #[test]
  fn test_missing_fields_take_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "default_property": "binding" }"#).unwrap();
    let (cfg, _) = Config::load_from(&path);
    assert_eq!(cfg.default_property, Property::Binding);
    assert_eq!(cfg.interactions, vec!["D1M"]);
    assert_eq!(cfg.zoom_step, 0.1);
  }

  #[test]
  fn test_broken_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "not json").unwrap();
    let (cfg, msg) = Config::load_from(&path);
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));

    let (_, msg) = Config::load_from(&dir.path().join("absent.json"));
    assert_eq!(msg, "No config found. Using defaults.");
  }
}
