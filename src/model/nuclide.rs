// src/model/nuclide.rs

use super::chain::ChainSelection;
use super::elements;
use std::collections::HashMap;

/// Shell closures for both protons and neutrons.
pub const MAGIC_NUMBERS: [u32; 7] = [2, 8, 20, 28, 50, 82, 126];

/// Largest N or Z a table row may carry.
pub const MAX_NUCLEON_COUNT: u32 = 400;

pub fn is_magic(value: u32) -> bool {
  MAGIC_NUMBERS.contains(&value)
}

/// Grid position of a nuclide on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
  pub n: u32,
  pub z: u32,
}

impl Coord {
  pub fn new(n: u32, z: u32) -> Self {
    Self { n, z }
  }
}

/// One row of a beta-decay dataset. Fields are private so that the mass
/// number can only come from `new`.
#[derive(Debug, Clone, PartialEq)]
pub struct NuclideRecord {
  n: u32,
  z: u32,
  a: u32,
  pub e_beta: f64,
  pub beta2: f64,
  pub q: f64,
  pub hl_log10: f64,
  pub ff_percent: f64,
}

impl NuclideRecord {
  pub fn new(n: u32, z: u32, e_beta: f64, beta2: f64, q: f64, hl_log10: f64, ff_percent: f64) -> Self {
    Self {
      n,
      z,
      a: n.saturating_add(z),
      e_beta,
      beta2,
      q,
      hl_log10,
      ff_percent,
    }
  }

  pub fn n(&self) -> u32 {
    self.n
  }

  pub fn z(&self) -> u32 {
    self.z
  }

  pub fn a(&self) -> u32 {
    self.a
  }

  pub fn coord(&self) -> Coord {
    Coord::new(self.n, self.z)
  }

  pub fn element(&self) -> &'static str {
    elements::symbol(self.z)
  }

  /// Display name such as "Sn-110".
  pub fn name(&self) -> String {
    format!("{}-{}", self.element(), self.a)
  }

  pub fn is_double_magic(&self) -> bool {
    is_magic(self.n) && is_magic(self.z)
  }

  pub fn is_single_magic(&self) -> bool {
    is_magic(self.n) != is_magic(self.z)
  }

  /// Cells of the flat data table: name, N, Z, A, E_beta, beta2, Q, log T½, FF.
  pub fn table_row(&self) -> [String; 9] {
    [
      self.name(),
      self.n.to_string(),
      self.z.to_string(),
      self.a.to_string(),
      format!("{:.2}", self.e_beta),
      format!("{:.6}", self.beta2),
      format!("{:.2}", self.q),
      format!("{:.3}", self.hl_log10),
      format!("{:.2}", self.ff_percent),
    ]
  }
}

pub const TABLE_HEADERS: [&str; 9] = [
  "Nucleus",
  "N",
  "Z",
  "A",
  "E(β) [MeV]",
  "β₂",
  "Q [MeV]",
  "log₁₀ T½ [s]",
  "FF [%]",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
  pub min_n: u32,
  pub max_n: u32,
  pub min_z: u32,
  pub max_z: u32,
}

/// A fully loaded dataset. Replaced wholesale on every load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
  records: Vec<NuclideRecord>,
  index: HashMap<Coord, usize>,
}

impl Dataset {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a record unless its (N,Z) is already present. Returns false on a
  /// duplicate, leaving the first occurrence in place.
  pub fn insert(&mut self, record: NuclideRecord) -> bool {
    let coord = record.coord();
    if self.index.contains_key(&coord) {
      return false;
    }
    self.index.insert(coord, self.records.len());
    self.records.push(record);
    true
  }

  pub fn from_records(records: impl IntoIterator<Item = NuclideRecord>) -> Self {
    let mut ds = Self::new();
    for r in records {
      ds.insert(r);
    }
    ds
  }

  pub fn records(&self) -> &[NuclideRecord] {
    &self.records
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  pub fn get(&self, coord: Coord) -> Option<&NuclideRecord> {
    self.index.get(&coord).map(|&i| &self.records[i])
  }

  pub fn bounds(&self) -> Option<GridBounds> {
    let first = self.records.first()?;
    let mut b = GridBounds {
      min_n: first.n,
      max_n: first.n,
      min_z: first.z,
      max_z: first.z,
    };
    for r in &self.records[1..] {
      b.min_n = b.min_n.min(r.n);
      b.max_n = b.max_n.max(r.n);
      b.min_z = b.min_z.min(r.z);
      b.max_z = b.max_z.max(r.z);
    }
    Some(b)
  }

  /// (min, max) of E_beta over finite values.
  pub fn e_beta_range(&self) -> Option<(f64, f64)> {
    self
      .records
      .iter()
      .map(|r| r.e_beta)
      .filter(|v| v.is_finite())
      .fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
      })
  }

  pub fn filter_by_isotope(&self, z: u32) -> Vec<&NuclideRecord> {
    self.records.iter().filter(|r| r.z == z).collect()
  }

  pub fn filter_by_isotone(&self, n: u32) -> Vec<&NuclideRecord> {
    self.records.iter().filter(|r| r.n == n).collect()
  }

  pub fn filter_by_isobar(&self, a: u32) -> Vec<&NuclideRecord> {
    self.records.iter().filter(|r| r.a == a).collect()
  }

  pub fn filter(&self, selection: ChainSelection) -> Vec<&NuclideRecord> {
    match selection {
      ChainSelection::Isotope(z) => self.filter_by_isotope(z),
      ChainSelection::Isotone(n) => self.filter_by_isotone(n),
      ChainSelection::Isobar(a) => self.filter_by_isobar(a),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::BTreeSet;

  fn sample() -> Dataset {
    let mut ds = Dataset::new();
    for (n, z) in [(60, 50), (62, 50), (64, 50), (82, 50), (82, 48), (80, 52), (126, 82), (10, 8)] {
      ds.insert(NuclideRecord::new(n, z, 5.0, 0.1, 6.0, 1.0, 10.0));
    }
    ds
  }

  #[test]
  fn test_mass_number_is_derived() {
    for r in sample().records() {
      assert_eq!(r.a(), r.n() + r.z());
    }
  }

  #[test]
  fn test_duplicate_coord_keeps_first() {
    let mut ds = Dataset::new();
    assert!(ds.insert(NuclideRecord::new(60, 50, 1.0, 0.0, 0.0, 0.0, 0.0)));
    assert!(!ds.insert(NuclideRecord::new(60, 50, 2.0, 0.0, 0.0, 0.0, 0.0)));
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.get(Coord::new(60, 50)).map(|r| r.e_beta), Some(1.0));
  }

  #[test]
  fn test_filters_partition_dataset() {
    let ds = sample();
    let all: BTreeSet<Coord> = ds.records().iter().map(|r| r.coord()).collect();

    let zs: BTreeSet<u32> = ds.records().iter().map(|r| r.z()).collect();
    let ns: BTreeSet<u32> = ds.records().iter().map(|r| r.n()).collect();
    let as_: BTreeSet<u32> = ds.records().iter().map(|r| r.a()).collect();

    let check = |groups: Vec<Vec<&NuclideRecord>>| {
      let mut seen = BTreeSet::new();
      let mut total = 0;
      for g in groups {
        for r in g {
          seen.insert(r.coord());
          total += 1;
        }
      }
      assert_eq!(total, all.len(), "duplicates or omissions");
      assert_eq!(seen, all);
    };

    check(zs.iter().map(|&z| ds.filter_by_isotope(z)).collect());
    check(ns.iter().map(|&n| ds.filter_by_isotone(n)).collect());
    check(as_.iter().map(|&a| ds.filter_by_isobar(a)).collect());

    assert!(ds.filter_by_isotope(50).iter().all(|r| r.z() == 50));
    assert!(ds.filter_by_isotone(82).iter().all(|r| r.n() == 82));
    assert!(ds.filter_by_isobar(132).iter().all(|r| r.a() == 132));
    assert_eq!(ds.filter_by_isobar(132).len(), 2);
  }

  #[test]
  fn test_magic_flags() {
    let pb208 = NuclideRecord::new(126, 82, 0.0, 0.0, 0.0, 0.0, 0.0);
    let sn110 = NuclideRecord::new(60, 50, 0.0, 0.0, 0.0, 0.0, 0.0);
    let x = NuclideRecord::new(61, 51, 0.0, 0.0, 0.0, 0.0, 0.0);
    assert!(pb208.is_double_magic() && !pb208.is_single_magic());
    assert!(sn110.is_single_magic() && !sn110.is_double_magic());
    assert!(!x.is_single_magic() && !x.is_double_magic());
    assert_eq!(pb208.name(), "Pb-208");
  }

  #[test]
  fn test_bounds_and_range() {
    let ds = sample();
    let b = ds.bounds().unwrap();
    assert_eq!((b.min_n, b.max_n, b.min_z, b.max_z), (10, 126, 8, 82));
    assert!(Dataset::new().bounds().is_none());

    let ds = Dataset::from_records([
      NuclideRecord::new(1, 1, 3.0, 0.0, 0.0, 0.0, 0.0),
      NuclideRecord::new(2, 1, f64::NAN, 0.0, 0.0, 0.0, 0.0),
      NuclideRecord::new(3, 1, -2.0, 0.0, 0.0, 0.0, 0.0),
    ]);
    assert_eq!(ds.e_beta_range(), Some((-2.0, 3.0)));
  }

  #[test]
  fn test_table_row_format() {
    let r = NuclideRecord::new(60, 50, 4.567, -0.1234567, 7.891, 1.23456, 12.345);
    let row = r.table_row();
    assert_eq!(row[0], "Sn-110");
    assert_eq!(row[4], "4.57");
    assert_eq!(row[5], "-0.123457");
    assert_eq!(row[7], "1.235");
  }
}
