// src/chart/chain_plot.rs

use super::format::to_exponential;
use super::palette::{self, Color};
use super::view::{axis_ticks, Tick};
use crate::error::{DataError, Result};
use crate::io::chain_members;
use crate::model::{ChainSelection, Dataset, NuclideRecord};

pub const MAGIC_GRID: Color = Color::rgba(239, 68, 68, 0.3);
pub const PLAIN_GRID: Color = Color::rgba(0, 0, 0, 0.05);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
  Left,
  Right,
}

/// The four quantities drawn along a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
  HalfLife,
  QValue,
  Deformation,
  FfContribution,
}

impl SeriesKind {
  pub const ALL: [SeriesKind; 4] = [
    SeriesKind::HalfLife,
    SeriesKind::QValue,
    SeriesKind::Deformation,
    SeriesKind::FfContribution,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      SeriesKind::HalfLife => "Half-life (log₁₀ T½)",
      SeriesKind::QValue => "Q-value [MeV]",
      SeriesKind::Deformation => "Deformation β₂ (×10)",
      SeriesKind::FfContribution => "FF % (÷10)",
    }
  }

  pub fn color(&self) -> Color {
    match self {
      SeriesKind::HalfLife => palette::BLUE_600,
      SeriesKind::QValue => palette::EMERALD_500,
      SeriesKind::Deformation => palette::AMBER_500,
      SeriesKind::FfContribution => palette::VIOLET_600,
    }
  }

  pub fn axis(&self) -> Axis {
    match self {
      SeriesKind::HalfLife => Axis::Left,
      _ => Axis::Right,
    }
  }

  /// Plotted (scaled) value of a record.
  pub fn plotted(&self, r: &NuclideRecord) -> f64 {
    match self {
      SeriesKind::HalfLife => r.hl_log10,
      SeriesKind::QValue => r.q,
      SeriesKind::Deformation => r.beta2 * 10.0,
      SeriesKind::FfContribution => r.ff_percent / 10.0,
    }
  }

  /// Tooltip line for a plotted value, undoing the display scaling.
  pub fn tooltip_line(&self, plotted: f64) -> String {
    match self {
      SeriesKind::Deformation => format!("Deformation β₂: {:.6}", plotted / 10.0),
      SeriesKind::FfContribution => format!("FF Contribution: {:.2}%", plotted * 10.0),
      SeriesKind::HalfLife => format!(
        "Half-life: {} s (log₁₀: {:.3})",
        to_exponential(10f64.powf(plotted), 2),
        plotted
      ),
      SeriesKind::QValue => format!("{}: {:.3}", self.label(), plotted),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
  pub kind: SeriesKind,
  pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
  pub title: String,
  pub lines: Vec<String>,
}

/// Line chart of one chain, rebuilt whenever the selection changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainPlot {
  pub selection: ChainSelection,
  members: Vec<NuclideRecord>,
  pub series: Vec<Series>,
}

impl ChainPlot {
  pub fn build(dataset: &Dataset, selection: ChainSelection) -> Result<Self> {
    let members = chain_members(dataset, selection);
    if members.is_empty() {
      return Err(DataError::empty(selection.short_label()));
    }

    let series = SeriesKind::ALL
      .iter()
      .map(|&kind| Series {
        kind,
        points: members
          .iter()
          .map(|r| (selection.x_value(r) as f64, kind.plotted(r)))
          .collect(),
      })
      .collect();

    Ok(Self {
      selection,
      members,
      series,
    })
  }

  pub fn members(&self) -> &[NuclideRecord] {
    &self.members
  }

  pub fn title(&self) -> String {
    self.selection.title()
  }

  pub fn x_label(&self) -> &'static str {
    self.selection.x_axis_label()
  }

  pub fn x_tick_step(&self) -> u32 {
    match self.selection {
      ChainSelection::Isotope(_) => 2,
      _ => 1,
    }
  }

  /// X extent with one unit of padding on both sides.
  pub fn x_range(&self) -> (f64, f64) {
    let xs = self.members.iter().map(|r| self.selection.x_value(r) as f64);
    let min = xs.clone().fold(f64::INFINITY, f64::min);
    let max = xs.fold(f64::NEG_INFINITY, f64::max);
    (min - 1.0, max + 1.0)
  }

  pub fn x_ticks(&self) -> Vec<Tick> {
    let (min, max) = self.x_range();
    axis_ticks(min, max, self.x_tick_step())
  }

  /// Padded value range of all series drawn against `axis`.
  pub fn y_range(&self, axis: Axis) -> (f64, f64) {
    let (min, max) = self
      .series
      .iter()
      .filter(|s| s.kind.axis() == axis)
      .flat_map(|s| s.points.iter().map(|p| p.1))
      .filter(|v| v.is_finite())
      .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !min.is_finite() {
      return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.05).max(0.5);
    (min - pad, max + pad)
  }

  /// Tooltip for the member at `index` along the chain.
  pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
    let r = self.members.get(index)?;
    Some(Tooltip {
      title: format!("{} (N={}, Z={})", r.name(), r.n(), r.z()),
      lines: self
        .series
        .iter()
        .map(|s| s.kind.tooltip_line(s.points[index].1))
        .collect(),
    })
  }

  /// Index of the member whose x value is closest to `x`.
  pub fn nearest_index(&self, x: f64) -> Option<usize> {
    self
      .members
      .iter()
      .enumerate()
      .map(|(i, r)| (i, (self.selection.x_value(r) as f64 - x).abs()))
      .min_by(|a, b| a.1.total_cmp(&b.1))
      .map(|(i, _)| i)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn dataset() -> Dataset {
    Dataset::from_records([
      NuclideRecord::new(64, 50, 6.0, 0.15, 4.9, -0.25, 30.0),
      NuclideRecord::new(60, 50, 4.1, 0.123456, 5.0, 2.0, 12.34),
      NuclideRecord::new(62, 50, 5.2, -0.11, 4.1, 0.50, 12.5),
      NuclideRecord::new(82, 50, 9.0, 0.0, 8.0, -1.00, 5.0),
      NuclideRecord::new(82, 48, 9.0, 0.0, 8.0, -1.00, 5.0),
    ])
  }

  #[test]
  fn test_isotope_chain_series() {
    let plot = ChainPlot::build(&dataset(), ChainSelection::Isotope(50)).unwrap();
    assert_eq!(plot.title(), "Sn Isotopes (Z=50)");
    assert_eq!(plot.x_label(), "Neutron Number (N)");
    assert_eq!(plot.x_tick_step(), 2);
    assert_eq!(plot.series.len(), 4);
    let xs: Vec<f64> = plot.series[0].points.iter().map(|p| p.0).collect();
    assert_eq!(xs, vec![60.0, 62.0, 64.0, 82.0]);
    assert_eq!(plot.series[2].points[0].1, 0.123456 * 10.0);
    assert_eq!(plot.series[3].points[0].1, 12.34 / 10.0);
  }

  #[test]
  fn test_tooltip_inverts_scaling() {
    let plot = ChainPlot::build(&dataset(), ChainSelection::Isotope(50)).unwrap();
    let tip = plot.tooltip(0).unwrap();
    assert_eq!(tip.title, "Sn-110 (N=60, Z=50)");
    assert_eq!(
      tip.lines,
      vec![
        "Half-life: 1.00e+2 s (log₁₀: 2.000)",
        "Q-value [MeV]: 5.000",
        "Deformation β₂: 0.123456",
        "FF Contribution: 12.34%",
      ]
    );
    assert!(plot.tooltip(9).is_none());
  }

  #[test]
  fn test_isotone_and_empty() {
    let plot = ChainPlot::build(&dataset(), ChainSelection::Isotone(82)).unwrap();
    assert_eq!(plot.x_tick_step(), 1);
    assert_eq!(plot.members().len(), 2);
    assert_eq!(plot.members()[0].z(), 48);
    let magic: Vec<u32> = plot.x_ticks().iter().filter(|t| t.magic).map(|t| t.value).collect();
    assert_eq!(magic, vec![50]);
    assert_eq!(plot.nearest_index(49.9), Some(1));

    assert!(matches!(
      ChainPlot::build(&dataset(), ChainSelection::Isobar(7)),
      Err(DataError::EmptyResult { .. })
    ));
  }

  #[test]
  fn test_axis_ranges_split() {
    let plot = ChainPlot::build(&dataset(), ChainSelection::Isotope(50)).unwrap();
    let (lo, hi) = plot.y_range(Axis::Left);
    assert!(lo < -1.0 && hi > 2.0);
    let (lo, hi) = plot.y_range(Axis::Right);
    assert!(lo < -1.1 && hi > 8.0);
  }
}
