// src/model/chain.rs

use super::elements;
use super::nuclide::NuclideRecord;
use serde::{Deserialize, Serialize};

/// Which quantum number a chain holds fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainKind {
  Isotope,
  Isotone,
  Isobar,
}

impl ChainKind {
  pub const ALL: [ChainKind; 3] = [ChainKind::Isotope, ChainKind::Isotone, ChainKind::Isobar];

  pub fn label(&self) -> &'static str {
    match self {
      ChainKind::Isotope => "Isotopes (fixed Z)",
      ChainKind::Isotone => "Isotones (fixed N)",
      ChainKind::Isobar => "Isobars (fixed A)",
    }
  }

  /// Letter of the fixed quantum number.
  pub fn symbol(&self) -> &'static str {
    match self {
      ChainKind::Isotope => "Z",
      ChainKind::Isotone => "N",
      ChainKind::Isobar => "A",
    }
  }

  pub fn with_value(self, value: u32) -> ChainSelection {
    match self {
      ChainKind::Isotope => ChainSelection::Isotope(value),
      ChainKind::Isotone => ChainSelection::Isotone(value),
      ChainKind::Isobar => ChainSelection::Isobar(value),
    }
  }

  /// The chain of this kind that passes through `record`.
  pub fn through(self, record: &NuclideRecord) -> ChainSelection {
    match self {
      ChainKind::Isotope => ChainSelection::Isotope(record.z()),
      ChainKind::Isotone => ChainSelection::Isotone(record.n()),
      ChainKind::Isobar => ChainSelection::Isobar(record.a()),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainSelection {
  Isotope(u32),
  Isotone(u32),
  Isobar(u32),
}

impl ChainSelection {
  pub fn kind(&self) -> ChainKind {
    match self {
      ChainSelection::Isotope(_) => ChainKind::Isotope,
      ChainSelection::Isotone(_) => ChainKind::Isotone,
      ChainSelection::Isobar(_) => ChainKind::Isobar,
    }
  }

  pub fn value(&self) -> u32 {
    match *self {
      ChainSelection::Isotope(v) | ChainSelection::Isotone(v) | ChainSelection::Isobar(v) => v,
    }
  }

  pub fn contains(&self, record: &NuclideRecord) -> bool {
    match *self {
      ChainSelection::Isotope(z) => record.z() == z,
      ChainSelection::Isotone(n) => record.n() == n,
      ChainSelection::Isobar(a) => record.a() == a,
    }
  }

  /// Isotope chains run along N, the others along Z.
  pub fn x_value(&self, record: &NuclideRecord) -> u32 {
    match self {
      ChainSelection::Isotope(_) => record.n(),
      _ => record.z(),
    }
  }

  pub fn x_axis_label(&self) -> &'static str {
    match self {
      ChainSelection::Isotope(_) => "Neutron Number (N)",
      _ => "Proton Number (Z)",
    }
  }

  /// Short form used in chart titles and alerts, e.g. "Z=50".
  pub fn short_label(&self) -> String {
    format!("{}={}", self.kind().symbol(), self.value())
  }

  /// Heading for the chain plot.
  pub fn title(&self) -> String {
    match *self {
      ChainSelection::Isotope(z) => format!("{} Isotopes (Z={})", elements::symbol(z), z),
      ChainSelection::Isotone(n) => format!("Isotones (N={})", n),
      ChainSelection::Isobar(a) => format!("Isobars (A={})", a),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_membership_and_axis() {
    let sn = NuclideRecord::new(62, 50, 0.0, 0.0, 0.0, 0.0, 0.0);
    let iso = ChainKind::Isotope.through(&sn);
    assert_eq!(iso, ChainSelection::Isotope(50));
    assert!(iso.contains(&sn));
    assert_eq!(iso.x_value(&sn), 62);
    assert_eq!(ChainSelection::Isobar(112).x_value(&sn), 50);
    assert!(ChainSelection::Isobar(112).contains(&sn));
    assert!(!ChainSelection::Isotone(60).contains(&sn));
  }

  #[test]
  fn test_labels() {
    assert_eq!(ChainSelection::Isotope(50).title(), "Sn Isotopes (Z=50)");
    assert_eq!(ChainSelection::Isotone(82).title(), "Isotones (N=82)");
    assert_eq!(ChainSelection::Isobar(132).short_label(), "A=132");
    assert_eq!(ChainKind::Isotone.with_value(20).short_label(), "N=20");
  }
}
