// src/views.rs
// Display-independent content of the beta-decay and strength-function tabs.

use crate::chart::format::to_exponential;
use crate::chart::view::{axis_ticks, Tick};
use crate::chart::Property;
use crate::error::{DataError, Result};
use crate::io::chain_members;
use crate::model::{ChainKind, ChainSelection, Dataset, NuclideRecord, StrengthSpectrum};

/// Reads a chain value typed by the user. Only positive integers are valid.
pub fn parse_chain_value(kind: ChainKind, text: &str) -> Result<ChainSelection> {
  match text.trim().parse::<u32>() {
    Ok(v) if v > 0 => Ok(kind.with_value(v)),
    _ => Err(DataError::InvalidInput { input: text.to_string() }),
  }
}

/// One property plotted along one chain for one interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct BetaChart {
  pub interaction: String,
  pub selection: ChainSelection,
  pub property: Property,
  members: Vec<NuclideRecord>,
}

impl BetaChart {
  /// Filters `dataset` down to the chain; an empty chain names both the chain
  /// and the interaction.
  pub fn build(dataset: &Dataset, interaction: &str, selection: ChainSelection, property: Property) -> Result<Self> {
    let members = chain_members(dataset, selection);
    if members.is_empty() {
      return Err(DataError::empty(format!("{} with {}", selection.short_label(), interaction)));
    }
    Ok(Self {
      interaction: interaction.to_string(),
      selection,
      property,
      members,
    })
  }

  pub fn members(&self) -> &[NuclideRecord] {
    &self.members
  }

  /// "Half-life (Z=50, D1M)"
  pub fn title(&self) -> String {
    format!(
      "{} ({}, {})",
      self.property.plot_title(),
      self.selection.short_label(),
      self.interaction
    )
  }

  pub fn x_label(&self) -> &'static str {
    self.selection.x_axis_label()
  }

  pub fn y_label(&self) -> &'static str {
    self.property.axis_label()
  }

  pub fn points(&self) -> Vec<(f64, f64)> {
    self
      .members
      .iter()
      .map(|r| (self.selection.x_value(r) as f64, self.property.value(r)))
      .collect()
  }

  pub fn x_range(&self) -> (f64, f64) {
    padded(self.points().iter().map(|p| p.0), 1.0)
  }

  pub fn y_range(&self) -> (f64, f64) {
    let (lo, hi) = padded(self.points().iter().map(|p| p.1), 0.0);
    let pad = ((hi - lo) * 0.05).max(0.1);
    (lo - pad, hi + pad)
  }

  pub fn x_ticks(&self) -> Vec<Tick> {
    let (lo, hi) = self.x_range();
    axis_ticks(lo, hi, 2)
  }

  pub fn tooltip(&self, index: usize) -> Option<[String; 2]> {
    let r = self.members.get(index)?;
    Some([
      format!("{} (N={}, Z={})", r.name(), r.n(), r.z()),
      format!("{}: {:.3}", self.y_label(), self.property.value(r)),
    ])
  }

  /// Member whose x coordinate is closest to `x`.
  pub fn nearest_index(&self, x: f64) -> Option<usize> {
    self
      .points()
      .iter()
      .enumerate()
      .min_by(|a, b| (a.1 .0 - x).abs().total_cmp(&(b.1 .0 - x).abs()))
      .map(|(i, _)| i)
  }

  pub fn rows(&self) -> Vec<[String; 9]> {
    self.members.iter().map(NuclideRecord::table_row).collect()
  }
}

/// Finite extent of `values` widened by `pad`; (0, 1) when nothing is finite.
fn padded(values: impl Iterator<Item = f64>, pad: f64) -> (f64, f64) {
  let (lo, hi) = values
    .filter(|v| v.is_finite())
    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
  if lo.is_finite() {
    (lo - pad, hi + pad)
  } else {
    (0.0, 1.0)
  }
}

pub const STRENGTH_X_LABEL: &str = "Excitation Energy [MeV]";
pub const STRENGTH_Y_LABEL: &str = "Strength S(E)";

/// Tooltip text for one spectrum sample, e.g. "S(E) = 1.500e-3".
pub fn strength_tooltip(strength: f64) -> String {
  format!("S(E) = {}", to_exponential(strength, 3))
}

/// Axis extent of a spectrum with headroom above the peak.
pub fn strength_ranges(spectrum: &StrengthSpectrum) -> ((f64, f64), (f64, f64)) {
  match spectrum.extent() {
    Some((e0, e1, s0, s1)) => {
      let x = if e1 > e0 { (e0, e1) } else { (e0 - 0.5, e0 + 0.5) };
      let top = if s1 > 0.0 { s1 * 1.05 } else { 1.0 };
      (x, (s0.min(0.0), top))
    }
    None => ((0.0, 1.0), (0.0, 1.0)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{StrengthPoint, StrengthQuery};

  fn dataset() -> Dataset {
    Dataset::from_records([
      NuclideRecord::new(64, 50, 6.0, 0.15, 4.9, -0.25, 30.0),
      NuclideRecord::new(60, 50, 4.1, 0.02, 3.5, 1.25, 2.0),
      NuclideRecord::new(82, 48, 9.0, 0.00, 8.0, -1.00, 5.0),
    ])
  }

  #[test]
  fn test_chain_value_validation() {
    assert_eq!(parse_chain_value(ChainKind::Isotope, " 50 ").unwrap(), ChainSelection::Isotope(50));
    for bad in ["0", "-4", "abc", ""] {
      assert!(matches!(
        parse_chain_value(ChainKind::Isobar, bad),
        Err(DataError::InvalidInput { .. })
      ));
    }
  }

  #[test]
  fn test_beta_chart_title_and_points() {
    let chart = BetaChart::build(&dataset(), "D1M", ChainSelection::Isotope(50), Property::HalfLife).unwrap();
    assert_eq!(chart.title(), "Half-life (Z=50, D1M)");
    assert_eq!(chart.y_label(), "log₁₀(T½ [s])");
    assert_eq!(chart.points(), vec![(60.0, 1.25), (64.0, -0.25)]);
    assert_eq!(chart.rows()[0][0], "Sn-110");
    let tip = chart.tooltip(1).unwrap();
    assert_eq!(tip[1], "log₁₀(T½ [s]): -0.250");
    assert_eq!(chart.nearest_index(63.2), Some(1));
  }

  #[test]
  fn test_beta_chart_empty_names_chain_and_interaction() {
    match BetaChart::build(&dataset(), "SLy4", ChainSelection::Isobar(7), Property::QValue) {
      Err(e) => assert_eq!(e.to_string(), "No data found for A=7 with SLy4"),
      Ok(_) => panic!("expected empty result"),
    }
  }

  #[test]
  fn test_strength_helpers() {
    assert_eq!(strength_tooltip(0.0015), "S(E) = 1.500e-3");
    let spectrum = StrengthSpectrum {
      query: StrengthQuery::new("Fe60", "GAMTGAMT", "K0"),
      points: vec![
        StrengthPoint { energy: 0.0, strength: 1.0 },
        StrengthPoint { energy: 2.0, strength: 4.0 },
      ],
    };
    let ((x0, x1), (y0, y1)) = strength_ranges(&spectrum);
    assert_eq!((x0, x1), (0.0, 2.0));
    assert_eq!(y0, 0.0);
    assert!((y1 - 4.2).abs() < 1e-9);
  }
}
