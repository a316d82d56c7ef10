// src/io/strength.rs

use super::beta_decay::is_data_line;
use crate::model::StrengthPoint;

/// Reads `energy strength` pairs. Lines that do not start with two numbers
/// (headers, stray text) are skipped.
pub fn parse(text: &str) -> Vec<StrengthPoint> {
  let mut points = Vec::new();

  for line in text.lines().filter(|l| is_data_line(l)) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() >= 2 {
      if let (Ok(energy), Ok(strength)) = (parts[0].parse::<f64>(), parts[1].parse::<f64>()) {
        points.push(StrengthPoint { energy, strength });
      }
    }
  }

  points
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_pairs() {
    let text = "# E S\nEnergy Strength\n0.0 1.5e-3\n0.1 2.0e-3\n\n0.2\n";
    let pts = parse(text);
    assert_eq!(pts.len(), 2);
    assert_eq!(pts[1], StrengthPoint { energy: 0.1, strength: 2.0e-3 });
  }
}
