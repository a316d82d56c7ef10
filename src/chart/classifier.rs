// src/chart/classifier.rs

use super::palette::{self, Color};
use crate::model::{Dataset, NuclideRecord};
use serde::{Deserialize, Serialize};

pub const BUCKET_COUNT: usize = 5;

/// Observable used to color the chart (and as y value in chain charts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
  #[serde(rename = "halflife")]
  HalfLife,
  #[serde(rename = "qvalue")]
  QValue,
  #[serde(rename = "deformation")]
  Deformation,
  #[serde(rename = "ff-contribution")]
  FfContribution,
  #[serde(rename = "binding")]
  Binding,
}

impl Property {
  pub const ALL: [Property; 5] = [
    Property::HalfLife,
    Property::QValue,
    Property::Deformation,
    Property::FfContribution,
    Property::Binding,
  ];

  /// Value as stored, used for plotting.
  pub fn value(&self, r: &NuclideRecord) -> f64 {
    match self {
      Property::HalfLife => r.hl_log10,
      Property::QValue => r.q,
      Property::Deformation => r.beta2,
      Property::FfContribution => r.ff_percent,
      Property::Binding => r.e_beta,
    }
  }

  /// Value the buckets are defined on. Deformation is bucketed by |β₂|.
  pub fn bucket_value(&self, r: &NuclideRecord) -> f64 {
    match self {
      Property::Deformation => r.beta2.abs(),
      _ => self.value(r),
    }
  }

  pub fn legend_title(&self) -> &'static str {
    match self {
      Property::HalfLife => "Half-life (log₁₀ T½ [s])",
      Property::QValue => "Q-value [MeV]",
      Property::Deformation => "Deformation (β₂)",
      Property::FfContribution => "First-Forbidden Contribution [%]",
      Property::Binding => "Binding Energy [MeV]",
    }
  }

  pub fn plot_title(&self) -> &'static str {
    match self {
      Property::HalfLife => "Half-life",
      Property::QValue => "Q-value",
      Property::Deformation => "Deformation β₂",
      Property::FfContribution => "First-Forbidden Contribution",
      Property::Binding => "Binding Energy",
    }
  }

  pub fn axis_label(&self) -> &'static str {
    match self {
      Property::HalfLife => "log₁₀(T½ [s])",
      Property::QValue => "Q-value [MeV]",
      Property::Deformation => "β₂",
      Property::FfContribution => "FF Contribution [%]",
      Property::Binding => "E(β) [MeV]",
    }
  }

  /// Label for selector widgets.
  pub fn display_name(&self) -> &'static str {
    match self {
      Property::HalfLife => "Half-life",
      Property::QValue => "Q-value",
      Property::Deformation => "Deformation (β₂)",
      Property::FfContribution => "FF Contribution",
      Property::Binding => "Binding Energy",
    }
  }
}

/// The bucket a nuclide falls in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
  pub index: usize,
  pub color: Color,
  pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
  pub color: Color,
  pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
  pub title: &'static str,
  pub entries: Vec<LegendEntry>,
}

impl Legend {
  /// Entries worth showing; unlabeled intermediate buckets are hidden.
  pub fn visible_entries(&self) -> impl Iterator<Item = &LegendEntry> {
    self.entries.iter().filter(|e| !e.label.is_empty())
  }
}

struct Scheme {
  colors: [Color; BUCKET_COUNT],
  labels: [&'static str; BUCKET_COUNT],
  legend: [&'static str; BUCKET_COUNT],
}

fn scheme(property: Property) -> Scheme {
  use palette::*;
  match property {
    Property::HalfLife => Scheme {
      colors: [RED_500, ORANGE_500, YELLOW_500, LIME_500, GREEN_500],
      labels: ["< -2", "-2 to 0", "0 to 2", "2 to 4", "≥ 4"],
      legend: ["< -2 (very short)", "-2 to 0", "0 to 2", "2 to 4", "≥ 4 (very long)"],
    },
    Property::QValue => Scheme {
      colors: [BLUE_500, CYAN_500, EMERALD_500, AMBER_500, RED_500],
      labels: ["< 5", "5 to 10", "10 to 15", "15 to 20", "≥ 20"],
      legend: ["< 5 MeV", "5 to 10 MeV", "10 to 15 MeV", "15 to 20 MeV", "≥ 20 MeV"],
    },
    Property::Deformation => Scheme {
      colors: [VIOLET_500, BLUE_500, CYAN_500, AMBER_500, RED_500],
      labels: ["< 0.05", "0.05 to 0.15", "0.15 to 0.25", "0.25 to 0.35", "≥ 0.35"],
      legend: [
        "< 0.05 (spherical)",
        "0.05 to 0.15",
        "0.15 to 0.25",
        "0.25 to 0.35",
        "≥ 0.35 (highly deformed)",
      ],
    },
    Property::FfContribution => Scheme {
      colors: [SLATE_300, BLUE_300, BLUE_500, VIOLET_600, PINK_600],
      labels: ["< 1", "1 to 10", "10 to 25", "25 to 50", "≥ 50"],
      legend: ["< 1% (negligible)", "1 to 10%", "10 to 25%", "25 to 50%", "≥ 50% (dominant)"],
    },
    // Binding legend text depends on the data, see Classifier::legend.
    Property::Binding => Scheme {
      colors: [BLUE_800, BLUE_500, CYAN_500, EMERALD_500, GREEN_500],
      labels: ["Low", "", "Medium", "", "High"],
      legend: ["", "", "", "", ""],
    },
  }
}

fn fixed_thresholds(property: Property) -> Option<[f64; BUCKET_COUNT - 1]> {
  match property {
    Property::HalfLife => Some([-2.0, 0.0, 2.0, 4.0]),
    Property::QValue => Some([5.0, 10.0, 15.0, 20.0]),
    Property::Deformation => Some([0.05, 0.15, 0.25, 0.35]),
    Property::FfContribution => Some([1.0, 10.0, 25.0, 50.0]),
    Property::Binding => None,
  }
}

/// Index of the first threshold strictly above `value`; values on a
/// boundary land in the upper bucket. NaN compares false everywhere and
/// ends up in the last bucket.
pub fn bucket_index(value: f64, thresholds: &[f64; BUCKET_COUNT - 1]) -> usize {
  thresholds
    .iter()
    .position(|&t| value < t)
    .unwrap_or(BUCKET_COUNT - 1)
}

/// Bucket assignment for one property over one dataset. Rebuild it whenever
/// the dataset or the property changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
  property: Property,
  thresholds: [f64; BUCKET_COUNT - 1],
  /// (min, max) of E_beta, only for Binding.
  range: Option<(f64, f64)>,
}

impl Classifier {
  pub fn new(property: Property, dataset: &Dataset) -> Self {
    match fixed_thresholds(property) {
      Some(thresholds) => Self {
        property,
        thresholds,
        range: None,
      },
      None => {
        let (min, max) = dataset.e_beta_range().unwrap_or((0.0, 0.0));
        let step = (max - min) / BUCKET_COUNT as f64;
        let thresholds = [1.0, 2.0, 3.0, 4.0].map(|k| min + k * step);
        Self {
          property,
          thresholds,
          range: Some((min, max)),
        }
      }
    }
  }

  pub fn property(&self) -> Property {
    self.property
  }

  pub fn thresholds(&self) -> &[f64; BUCKET_COUNT - 1] {
    &self.thresholds
  }

  /// Lower edge of every bucket; the first is unbounded for fixed schemes.
  pub fn lower_bounds(&self) -> [f64; BUCKET_COUNT] {
    let first = self.range.map(|(min, _)| min).unwrap_or(f64::NEG_INFINITY);
    [
      first,
      self.thresholds[0],
      self.thresholds[1],
      self.thresholds[2],
      self.thresholds[3],
    ]
  }

  pub fn classify_value(&self, value: f64) -> Bucket {
    let index = bucket_index(value, &self.thresholds);
    let s = scheme(self.property);
    Bucket {
      index,
      color: s.colors[index],
      label: s.labels[index],
    }
  }

  pub fn classify(&self, record: &NuclideRecord) -> Bucket {
    self.classify_value(self.property.bucket_value(record))
  }

  pub fn legend(&self) -> Legend {
    let s = scheme(self.property);
    let labels: [String; BUCKET_COUNT] = match self.range {
      Some((min, max)) => [
        format!("{:.0} MeV", min),
        String::new(),
        format!("{:.0} MeV", (min + max) / 2.0),
        String::new(),
        format!("{:.0} MeV", max),
      ],
      None => s.legend.map(str::to_string),
    };

    Legend {
      title: self.property.legend_title(),
      entries: s
        .colors
        .iter()
        .zip(labels)
        .map(|(&color, label)| LegendEntry { color, label })
        .collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rec(e_beta: f64) -> NuclideRecord {
    NuclideRecord::new(10, 10, e_beta, 0.0, 0.0, 0.0, 0.0)
  }

  #[test]
  fn test_boundaries_go_up() {
    let c = Classifier::new(Property::HalfLife, &Dataset::new());
    assert_eq!(c.classify_value(0.0).label, "0 to 2");
    assert_eq!(c.classify_value(-2.0).label, "-2 to 0");
    assert_eq!(c.classify_value(-2.0001).index, 0);
    assert_eq!(c.classify_value(4.0).index, 4);
    assert_eq!(c.classify_value(1e9).index, 4);
    assert_eq!(c.classify_value(f64::NEG_INFINITY).index, 0);
  }

  #[test]
  fn test_monotonic_and_exhaustive() {
    for p in [Property::HalfLife, Property::QValue, Property::Deformation, Property::FfContribution] {
      let c = Classifier::new(p, &Dataset::new());
      let mut last = 0;
      let mut v = -10.0;
      while v < 100.0 {
        let b = c.classify_value(v);
        assert!(b.index < BUCKET_COUNT);
        assert!(b.index >= last, "{:?} not monotonic at {}", p, v);
        last = b.index;
        v += 0.01;
      }
    }
  }

  #[test]
  fn test_deformation_uses_magnitude() {
    let c = Classifier::new(Property::Deformation, &Dataset::new());
    let oblate = NuclideRecord::new(10, 10, 0.0, -0.30, 0.0, 0.0, 0.0);
    assert_eq!(c.classify(&oblate).index, 3);
    assert_eq!(c.classify(&oblate).color, palette::AMBER_500);
  }

  #[test]
  fn test_binding_thresholds_follow_dataset() {
    let a = Dataset::from_records([rec(0.0), NuclideRecord::new(11, 10, 10.0, 0.0, 0.0, 0.0, 0.0)]);
    let ca = Classifier::new(Property::Binding, &a);
    assert_eq!(ca.lower_bounds(), [0.0, 2.0, 4.0, 6.0, 8.0]);
    assert_eq!(ca.classify_value(2.0).index, 1);
    assert_eq!(ca.classify_value(10.0).label, "High");

    let b = Dataset::from_records([rec(100.0), NuclideRecord::new(11, 10, 150.0, 0.0, 0.0, 0.0, 0.0)]);
    let cb = Classifier::new(Property::Binding, &b);
    for (k, bound) in cb.lower_bounds().iter().enumerate() {
      assert!((bound - (100.0 + k as f64 * 10.0)).abs() < 1e-9);
    }
    assert_eq!(cb.classify_value(10.0).index, 0);
  }

  #[test]
  fn test_binding_legend_midpoint() {
    let ds = Dataset::from_records([rec(2.0), NuclideRecord::new(11, 10, 12.0, 0.0, 0.0, 0.0, 0.0)]);
    let legend = Classifier::new(Property::Binding, &ds).legend();
    let shown: Vec<&str> = legend.visible_entries().map(|e| e.label.as_str()).collect();
    assert_eq!(shown, vec!["2 MeV", "7 MeV", "12 MeV"]);
    assert_eq!(legend.entries.len(), BUCKET_COUNT);
  }

  #[test]
  fn test_fixed_legend() {
    let legend = Classifier::new(Property::QValue, &Dataset::new()).legend();
    assert_eq!(legend.title, "Q-value [MeV]");
    assert_eq!(legend.entries[4].label, "≥ 20 MeV");
    assert_eq!(legend.visible_entries().count(), 5);
  }
}
