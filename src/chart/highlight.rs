// src/chart/highlight.rs

use super::palette::{self, Color};
use crate::model::{ChainKind, NuclideRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HighlightMode {
  #[default]
  None,
  Magic,
  Isotope,
  Isotone,
  Isobar,
}

impl HighlightMode {
  pub const ALL: [HighlightMode; 5] = [
    HighlightMode::None,
    HighlightMode::Magic,
    HighlightMode::Isotope,
    HighlightMode::Isotone,
    HighlightMode::Isobar,
  ];

  pub fn display_name(&self) -> &'static str {
    match self {
      HighlightMode::None => "None",
      HighlightMode::Magic => "Magic Numbers",
      HighlightMode::Isotope => "Isotopes of Selection",
      HighlightMode::Isotone => "Isotones of Selection",
      HighlightMode::Isobar => "Isobars of Selection",
    }
  }

  /// Short identifier used in menu action targets.
  pub fn key(&self) -> &'static str {
    match self {
      HighlightMode::None => "none",
      HighlightMode::Magic => "magic",
      HighlightMode::Isotope => "isotope",
      HighlightMode::Isotone => "isotone",
      HighlightMode::Isobar => "isobar",
    }
  }

  pub fn from_key(key: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|m| m.key() == key)
  }
}

impl From<ChainKind> for HighlightMode {
  fn from(kind: ChainKind) -> Self {
    match kind {
      ChainKind::Isotope => HighlightMode::Isotope,
      ChainKind::Isotone => HighlightMode::Isotone,
      ChainKind::Isobar => HighlightMode::Isobar,
    }
  }
}

pub const DEFAULT_WIDTH: f64 = 2.0;
pub const DEFAULT_POINT_SIZE: f64 = 8.0;
pub const MAGIC_WIDTH: f64 = 3.0;
pub const CHAIN_WIDTH: f64 = 4.0;
pub const CHAIN_POINT_SIZE: f64 = 10.0;
pub const DIMMED_WIDTH: f64 = 1.0;
pub const DIMMED_POINT_SIZE: f64 = 6.0;

/// Border and marker attributes of one nuclide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
  pub border: Color,
  pub width: f64,
  pub point_size: f64,
}

impl Appearance {
  pub const DEFAULT: Appearance = Appearance {
    border: palette::DEFAULT_BORDER,
    width: DEFAULT_WIDTH,
    point_size: DEFAULT_POINT_SIZE,
  };

  const DIMMED: Appearance = Appearance {
    border: palette::DEFAULT_BORDER,
    width: DIMMED_WIDTH,
    point_size: DIMMED_POINT_SIZE,
  };

  pub fn is_default(&self) -> bool {
    *self == Self::DEFAULT
  }
}

/// Everything that decides a nuclide's border. Depends only on its
/// arguments, so the caller passes mode and selection explicitly.
pub fn resolve(record: &NuclideRecord, mode: HighlightMode, selected: Option<&NuclideRecord>) -> Appearance {
  match (mode, selected) {
    (HighlightMode::None, _) => Appearance::DEFAULT,
    (HighlightMode::Magic, _) => {
      if record.is_double_magic() {
        Appearance {
          border: palette::RED_600,
          width: MAGIC_WIDTH,
          ..Appearance::DEFAULT
        }
      } else if record.is_single_magic() {
        Appearance {
          border: palette::RED_500,
          width: MAGIC_WIDTH,
          ..Appearance::DEFAULT
        }
      } else {
        Appearance::DEFAULT
      }
    }
    (_, None) => Appearance::DEFAULT,
    (chain_mode, Some(sel)) => {
      let (member, color) = match chain_mode {
        HighlightMode::Isotope => (record.z() == sel.z(), palette::BLUE_600),
        HighlightMode::Isotone => (record.n() == sel.n(), palette::VIOLET_600),
        _ => (record.a() == sel.a(), palette::CYAN_500),
      };
      if member {
        Appearance {
          border: color,
          width: CHAIN_WIDTH,
          point_size: CHAIN_POINT_SIZE,
        }
      } else {
        Appearance::DIMMED
      }
    }
  }
}

pub fn border_color(record: &NuclideRecord, mode: HighlightMode, selected: Option<&NuclideRecord>) -> Color {
  resolve(record, mode, selected).border
}

pub fn border_width(record: &NuclideRecord, mode: HighlightMode, selected: Option<&NuclideRecord>) -> f64 {
  resolve(record, mode, selected).width
}

pub fn point_size(record: &NuclideRecord, mode: HighlightMode, selected: Option<&NuclideRecord>) -> f64 {
  resolve(record, mode, selected).point_size
}

#[cfg(test)]
mod tests {
  use super::*;

  fn r(n: u32, z: u32) -> NuclideRecord {
    NuclideRecord::new(n, z, 0.0, 0.0, 0.0, 0.0, 0.0)
  }

  #[test]
  fn test_mode_keys() {
    for m in HighlightMode::ALL {
      assert_eq!(HighlightMode::from_key(m.key()), Some(m));
    }
    assert_eq!(HighlightMode::from_key("bogus"), None);
  }

  #[test]
  fn test_magic_precedence() {
    let pb208 = r(126, 82);
    let sn110 = r(60, 50);
    let plain = r(61, 51);
    assert_eq!(border_color(&pb208, HighlightMode::Magic, None), palette::RED_600);
    assert_eq!(border_color(&sn110, HighlightMode::Magic, None), palette::RED_500);
    assert_eq!(border_width(&sn110, HighlightMode::Magic, None), MAGIC_WIDTH);
    assert!(resolve(&plain, HighlightMode::Magic, None).is_default());
    // Selection is irrelevant in magic mode
    assert_eq!(border_color(&pb208, HighlightMode::Magic, Some(&plain)), palette::RED_600);
  }

  #[test]
  fn test_chain_modes() {
    let sel = r(62, 50);
    let iso = r(64, 50);
    let isotone = r(62, 48);
    let isobar = r(60, 52);

    assert_eq!(border_color(&iso, HighlightMode::Isotope, Some(&sel)), palette::BLUE_600);
    assert_eq!(border_width(&iso, HighlightMode::Isotope, Some(&sel)), CHAIN_WIDTH);
    assert_eq!(point_size(&iso, HighlightMode::Isotope, Some(&sel)), CHAIN_POINT_SIZE);
    assert_eq!(border_width(&isotone, HighlightMode::Isotope, Some(&sel)), DIMMED_WIDTH);

    assert_eq!(border_color(&isotone, HighlightMode::Isotone, Some(&sel)), palette::VIOLET_600);
    assert_eq!(border_color(&isobar, HighlightMode::Isobar, Some(&sel)), palette::CYAN_500);
    assert_eq!(point_size(&iso, HighlightMode::Isobar, Some(&sel)), DIMMED_POINT_SIZE);
  }

  #[test]
  fn test_defaults_without_selection_or_mode() {
    let sel = r(62, 50);
    let x = r(64, 50);
    for mode in [HighlightMode::Isotope, HighlightMode::Isotone, HighlightMode::Isobar] {
      assert!(resolve(&x, mode, None).is_default());
    }
    assert!(resolve(&x, HighlightMode::None, Some(&sel)).is_default());
  }
}
