// src/model/catalog.rs

use super::elements;
use std::collections::BTreeSet;

/// Nuclei shipped with strength-function data. Used whenever the data
/// directory cannot be listed.
pub const AVAILABLE_NUCLEI: [&str; 105] = [
  "Ac256", "Ac295", "Ag131", "Am247", "Am249", "Am255", "Am260", "Am304", "Am313",
  "As102", "As112", "At220", "At227", "At253", "Au213", "Au215", "Bi218", "Bi226",
  "Bk255", "Br88", "Cd123", "Cf261", "Cf269", "Cf317", "Cr57", "Cu69", "Cu78",
  "Db319", "Ds369", "Dy171", "Er179", "Es275", "Es280", "Es282", "Es285", "Es306",
  "Eu160", "Eu164", "Eu184", "Fe60", "Fe61", "Fe62", "Fe63", "Fe64", "Fm325",
  "Fr236", "Ga87", "Gd167", "Gd201", "Hg211", "Ho185", "Hs335", "In153", "Ir240",
  "Lr300", "Lr329", "Lu184", "Lu188", "Lu193", "Md289", "Mn60", "Mt299", "Nb98",
  "Ni69", "Ni73", "Ni77", "Np244", "Np256", "Os203", "Pa274", "Pr151", "Pr153",
  "Pt229", "Pu271", "Pu291", "Ra239", "Rb90", "Re202", "Re221", "Rh113", "Rh135",
  "Rn235", "Sb132", "Se103", "Se113", "Ta193", "Tb170", "Tc105", "Tc141", "Th243",
  "Th247", "Th297", "Tl216", "Tl220", "Tm200", "Tm220", "U249", "U297", "V53",
  "W233", "Xe139", "Xe171", "Y109", "Yb211", "Zn99",
];

/// Extracts the nucleus prefix of a strength-function file name:
/// one capital, an optional lowercase letter, digits, then `_`.
pub fn nucleus_prefix(file_name: &str) -> Option<&str> {
  let bytes = file_name.as_bytes();
  let mut i = 0;

  if !bytes.first()?.is_ascii_uppercase() {
    return None;
  }
  i += 1;
  if bytes.get(i).is_some_and(|b| b.is_ascii_lowercase()) {
    i += 1;
  }
  let digits_start = i;
  while bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
    i += 1;
  }
  if i == digits_start || bytes.get(i) != Some(&b'_') {
    return None;
  }
  Some(&file_name[..i])
}

/// Sorted, de-duplicated nucleus names found in a directory listing.
pub fn nuclei_from_listing<S: AsRef<str>>(names: &[S]) -> Vec<String> {
  names
    .iter()
    .filter_map(|n| nucleus_prefix(n.as_ref()))
    .map(str::to_string)
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect()
}

/// The catalog as owned strings.
pub fn static_catalog() -> Vec<String> {
  AVAILABLE_NUCLEI.iter().map(|s| s.to_string()).collect()
}

/// Splits "Fe60" into (Z, A).
pub fn parse_nucleus_name(name: &str) -> Option<(u32, u32)> {
  let split = name.find(|c: char| c.is_ascii_digit())?;
  let (sym, mass) = name.split_at(split);
  let z = elements::atomic_number(sym)?;
  let a = mass.parse().ok()?;
  Some((z, a))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_prefix_rules() {
    assert_eq!(nucleus_prefix("Fe60_DDPCX_GAMTGAMT_K0.txt"), Some("Fe60"));
    assert_eq!(nucleus_prefix("V53_DDPCX_FF_K1.txt"), Some("V53"));
    assert_eq!(nucleus_prefix("fe60_x.txt"), None);
    assert_eq!(nucleus_prefix("Fe_x.txt"), None);
    assert_eq!(nucleus_prefix("Fe60.txt"), None);
    assert_eq!(nucleus_prefix("README"), None);
    assert_eq!(nucleus_prefix(""), None);
  }

  #[test]
  fn test_listing_sorted_unique() {
    let listing = [
      "V53_DDPCX_FF_K1.txt",
      "Fe60_DDPCX_GAMTGAMT_K0.txt",
      "Fe60_DDPCX_GAMTGAMT_K1.txt",
      "index.html",
    ];
    assert_eq!(nuclei_from_listing(&listing), vec!["Fe60", "V53"]);
  }

  #[test]
  fn test_catalog_names_decode() {
    for name in AVAILABLE_NUCLEI {
      let (z, a) = parse_nucleus_name(name).unwrap_or_else(|| panic!("bad catalog entry {}", name));
      assert!(a > z, "{}: A must exceed Z", name);
    }
    assert_eq!(parse_nucleus_name("Sb132"), Some((51, 132)));
  }
}
