// src/io/beta_decay.rs

use crate::error::DataError;
use crate::model::{Dataset, NuclideRecord, MAX_NUCLEON_COUNT};

/// Columns: N Z E_beta beta2 Q HL_log10 FF_percent
pub const FIELD_COUNT: usize = 7;

#[derive(Debug, Default)]
pub struct ParseOutcome {
  pub dataset: Dataset,
  /// Rejected rows, in file order.
  pub skipped: Vec<DataError>,
  /// Rows dropped because their (N,Z) was already present.
  pub duplicates: usize,
}

/// Blank lines and `#` comments are not data.
pub fn is_data_line(line: &str) -> bool {
  let trimmed = line.trim();
  !trimmed.is_empty() && !trimmed.starts_with('#')
}

fn parse_count(field: &str) -> Option<u32> {
  let v = match field.parse::<u32>() {
    Ok(v) => v,
    Err(_) => {
      // Some tables write integers as "60.0"
      let v: f64 = field.parse().ok()?;
      if v < 0.0 || v.fract() != 0.0 || v > MAX_NUCLEON_COUNT as f64 {
        return None;
      }
      v as u32
    }
  };
  (v <= MAX_NUCLEON_COUNT).then_some(v)
}

fn parse_real(field: &str) -> f64 {
  field.parse().unwrap_or(f64::NAN)
}

/// Parses one data line. `line_no` is 1-based and only used for errors.
pub fn parse_row(line: &str, line_no: usize) -> Result<NuclideRecord, DataError> {
  let fields: Vec<&str> = line.split_whitespace().collect();
  if fields.len() < FIELD_COUNT {
    return Err(DataError::MalformedRow {
      line: line_no,
      reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
    });
  }

  let n = parse_count(fields[0]).ok_or_else(|| DataError::MalformedRow {
    line: line_no,
    reason: format!("neutron number '{}' is not an integer in 0..={}", fields[0], MAX_NUCLEON_COUNT),
  })?;
  let z = parse_count(fields[1])
    .filter(|&z| z > 0)
    .ok_or_else(|| DataError::MalformedRow {
      line: line_no,
      reason: format!("proton number '{}' is not an integer in 1..={}", fields[1], MAX_NUCLEON_COUNT),
    })?;

  Ok(NuclideRecord::new(
    n,
    z,
    parse_real(fields[2]),
    parse_real(fields[3]),
    parse_real(fields[4]),
    parse_real(fields[5]),
    parse_real(fields[6]),
  ))
}

/// Parses a whole beta-decay table. Never fails: bad rows are collected in
/// `skipped` and the rest of the file is still loaded.
pub fn parse(text: &str) -> ParseOutcome {
  let mut out = ParseOutcome::default();

  for (idx, line) in text.lines().enumerate() {
    if !is_data_line(line) {
      continue;
    }
    match parse_row(line, idx + 1) {
      Ok(record) => {
        let coord = record.coord();
        if !out.dataset.insert(record) {
          log::warn!("Line {}: duplicate nuclide N={}, Z={} ignored", idx + 1, coord.n, coord.z);
          out.duplicates += 1;
        }
      }
      Err(e) => {
        log::warn!("{}", e);
        out.skipped.push(e);
      }
    }
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::Coord;

  const SAMPLE: &str = "\
# N Z E_beta beta2 Q HL_log10 FF_percent
60 50 4.10 0.020 3.5 1.25 2.0

  # indented comment
62 50 5.20 -0.110 4.1 0.50 12.5
64 50 6.00 0.150 4.9 -0.25 30.0   extra
";

  #[test]
  fn test_parse_sample() {
    let out = parse(SAMPLE);
    assert_eq!(out.dataset.len(), 3);
    assert!(out.skipped.is_empty());

    let r = out.dataset.get(Coord::new(62, 50)).unwrap();
    assert_eq!(r.a(), 112);
    assert_eq!(r.beta2, -0.110);
    assert_eq!(r.ff_percent, 12.5);
  }

  #[test]
  fn test_short_row_is_skipped_not_fatal() {
    let text = "60 50 1 2 3\n62 50 1 2 3 4 5\n";
    let out = parse(text);
    assert_eq!(out.dataset.len(), 1);
    assert_eq!(out.skipped.len(), 1);
    assert!(matches!(out.skipped[0], DataError::MalformedRow { line: 1, .. }));
  }

  #[test]
  fn test_garbled_real_becomes_nan() {
    let out = parse("60 50 abc 0.1 2 3 4\n");
    let r = &out.dataset.records()[0];
    assert!(r.e_beta.is_nan());
    assert_eq!(r.q, 2.0);
  }

  #[test]
  fn test_bad_counts_rejected() {
    let out = parse("-1 50 1 1 1 1 1\n60 x 1 1 1 1 1\n60.5 50 1 1 1 1 1\n60.0 50 1 1 1 1 1\n");
    assert_eq!(out.skipped.len(), 3);
    assert_eq!(out.dataset.len(), 1);
    assert_eq!(out.dataset.records()[0].n(), 60);
  }

  #[test]
  fn test_out_of_range_counts_rejected() {
    let out = parse("60 50 1 1 1 1 1\n4294967295 1 1 1 1 1 1\n1 4294967295 1 1 1 1 1\n401 50 1 1 1 1 1\n");
    assert_eq!(out.skipped.len(), 3);
    assert_eq!(out.dataset.len(), 1);
    assert_eq!(out.dataset.records()[0].a(), 110);

    let edge = parse("400 400 1 1 1 1 1\n");
    assert_eq!(edge.dataset.records()[0].a(), 800);
  }

  #[test]
  fn test_zero_proton_number_rejected() {
    let out = parse("60 0 1 1 1 1 1\n60 0.0 1 1 1 1 1\n0 1 1 1 1 1 1\n");
    assert_eq!(out.skipped.len(), 2);
    assert!(matches!(out.skipped[0], DataError::MalformedRow { line: 1, .. }));
    assert_eq!(out.dataset.len(), 1);
    assert_eq!(out.dataset.records()[0].z(), 1);
  }

  #[test]
  fn test_duplicates_counted() {
    let out = parse("60 50 1 1 1 1 1\n60 50 2 2 2 2 2\n");
    assert_eq!(out.dataset.len(), 1);
    assert_eq!(out.duplicates, 1);
  }
}
