// src/model/strength.rs

/// One sample of a strength-function spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthPoint {
  pub energy: f64,
  pub strength: f64,
}

/// Transition code used in the file name for Gamow-Teller spectra.
pub const GAMOW_TELLER_CODE: &str = "GAMTGAMT";

/// Known transition codes offered by the viewer.
pub const TRANSITION_CODES: [&str; 2] = [GAMOW_TELLER_CODE, "FF"];

pub const K_COMPONENTS: [&str; 3] = ["K0", "K1", "Total"];

/// Identifies one strength-function file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthQuery {
  pub nucleus: String,
  pub transition: String,
  pub k_component: String,
}

impl StrengthQuery {
  pub fn new(nucleus: &str, transition: &str, k_component: &str) -> Self {
    Self {
      nucleus: nucleus.to_string(),
      transition: transition.to_string(),
      k_component: k_component.to_string(),
    }
  }

  pub fn file_name(&self) -> String {
    format!("{}_DDPCX_{}_{}.txt", self.nucleus, self.transition, self.k_component)
  }

  pub fn transition_label(&self) -> &'static str {
    if self.transition == GAMOW_TELLER_CODE {
      "Gamow-Teller (GT)"
    } else {
      "First-Forbidden (FF)"
    }
  }

  pub fn k_label(&self) -> String {
    if self.k_component == "Total" {
      "Total (K=0 + 2×K=1)".to_string()
    } else {
      format!("K={}", self.k_component.replacen('K', "", 1))
    }
  }

  pub fn title(&self) -> String {
    format!(
      "{} Strength Function - {} ({})",
      self.transition_label(),
      self.nucleus,
      self.k_label()
    )
  }
}

/// A loaded spectrum with its query.
#[derive(Debug, Clone)]
pub struct StrengthSpectrum {
  pub query: StrengthQuery,
  pub points: Vec<StrengthPoint>,
}

impl StrengthSpectrum {
  /// Bounding box (e_min, e_max, s_min, s_max) over finite samples.
  pub fn extent(&self) -> Option<(f64, f64, f64, f64)> {
    let finite = self
      .points
      .iter()
      .filter(|p| p.energy.is_finite() && p.strength.is_finite());
    finite.fold(None, |acc, p| match acc {
      None => Some((p.energy, p.energy, p.strength, p.strength)),
      Some((e0, e1, s0, s1)) => Some((
        e0.min(p.energy),
        e1.max(p.energy),
        s0.min(p.strength),
        s1.max(p.strength),
      )),
    })
  }

  /// Sample closest in energy to `energy`.
  pub fn nearest(&self, energy: f64) -> Option<&StrengthPoint> {
    self
      .points
      .iter()
      .filter(|p| p.energy.is_finite())
      .min_by(|a, b| (a.energy - energy).abs().total_cmp(&(b.energy - energy).abs()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_file_name_and_title() {
    let q = StrengthQuery::new("Fe60", GAMOW_TELLER_CODE, "K0");
    assert_eq!(q.file_name(), "Fe60_DDPCX_GAMTGAMT_K0.txt");
    assert_eq!(q.title(), "Gamow-Teller (GT) Strength Function - Fe60 (K=0)");

    let q = StrengthQuery::new("U249", "FF", "Total");
    assert_eq!(q.k_label(), "Total (K=0 + 2×K=1)");
    assert_eq!(q.transition_label(), "First-Forbidden (FF)");
  }

  #[test]
  fn test_extent_skips_nan() {
    let s = StrengthSpectrum {
      query: StrengthQuery::new("V53", "FF", "K1"),
      points: vec![
        StrengthPoint { energy: 0.5, strength: 1.0 },
        StrengthPoint { energy: f64::NAN, strength: 9.0 },
        StrengthPoint { energy: 3.0, strength: 0.25 },
      ],
    };
    assert_eq!(s.extent(), Some((0.5, 3.0, 0.25, 1.0)));
    assert_eq!(s.nearest(2.0).map(|p| p.energy), Some(3.0));
    assert_eq!(s.nearest(-4.0).map(|p| p.energy), Some(0.5));
  }
}
