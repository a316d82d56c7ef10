// src/chart/format.rs
// Number formatting shared by the detail view, tooltips and tables.

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// Scientific notation with an explicit exponent sign: `3.17e+2`.
pub fn to_exponential(value: f64, digits: usize) -> String {
  if !value.is_finite() {
    return value.to_string();
  }
  let raw = format!("{:.*e}", digits, value);
  match raw.split_once('e') {
    Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
    _ => raw,
  }
}

/// Half-life given as log10(seconds), in the most readable unit.
pub fn format_half_life(hl_log10: f64) -> String {
  let seconds = 10f64.powf(hl_log10);
  if seconds < 1.0 {
    format!("{:.2} ms", seconds * 1000.0)
  } else if seconds < MINUTE {
    format!("{:.2} s", seconds)
  } else if seconds < HOUR {
    format!("{:.2} min", seconds / MINUTE)
  } else if seconds < DAY {
    format!("{:.2} h", seconds / HOUR)
  } else if seconds < YEAR {
    format!("{:.2} d", seconds / DAY)
  } else {
    format!("{} y", to_exponential(seconds / YEAR, 2))
  }
}

pub fn format_mev(value: f64) -> String {
  format!("{:.2} MeV", value)
}

pub fn format_percent(value: f64) -> String {
  format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_half_life_units() {
    assert_eq!(format_half_life(-1.0), "100.00 ms");
    assert_eq!(format_half_life(0.5), "3.16 s");
    assert_eq!(format_half_life(2.0), "1.67 min");
    assert_eq!(format_half_life(4.0), "2.78 h");
    assert_eq!(format_half_life(5.0), "1.16 d");
    assert_eq!(format_half_life(10.0), "3.17e+2 y");
  }

  #[test]
  fn test_exponential_sign() {
    assert_eq!(to_exponential(100.0, 2), "1.00e+2");
    assert_eq!(to_exponential(0.00123, 2), "1.23e-3");
    assert_eq!(to_exponential(1.0, 2), "1.00e+0");
  }

  #[test]
  fn test_units() {
    assert_eq!(format_mev(4.1), "4.10 MeV");
    assert_eq!(format_percent(12.5), "12.50%");
  }
}
