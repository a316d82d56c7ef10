// src/model/elements.rs

/// Placeholder shown for proton numbers outside the table.
pub const UNKNOWN_SYMBOL: &str = "??";

// Index 0 is unused so that SYMBOLS[z] is the symbol for proton number z.
const SYMBOLS: [&str; 121] = [
  "",
  // --- Period 1-2 ---
  "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
  // --- Period 3-4 ---
  "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
  "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
  "Ga", "Ge", "As", "Se", "Br", "Kr",
  // --- Period 5 ---
  "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd",
  "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe",
  // --- Period 6 ---
  "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
  "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W",
  "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po",
  "At", "Rn",
  // --- Period 7 ---
  "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
  "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg",
  "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv",
  "Ts", "Og",
  // --- Period 8 (placeholder names) ---
  "Uue", "Ubn",
];

/// Element symbol for a proton number, `"??"` when unknown.
pub fn symbol(z: u32) -> &'static str {
  match SYMBOLS.get(z as usize) {
    Some(s) if !s.is_empty() => s,
    _ => UNKNOWN_SYMBOL,
  }
}

/// Reverse lookup, used to decode catalog names such as "Fe60".
pub fn atomic_number(symbol: &str) -> Option<u32> {
  SYMBOLS
    .iter()
    .position(|s| !s.is_empty() && *s == symbol)
    .map(|z| z as u32)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_table_bounds() {
    assert_eq!(symbol(1), "H");
    assert_eq!(symbol(50), "Sn");
    assert_eq!(symbol(82), "Pb");
    assert_eq!(symbol(118), "Og");
    assert_eq!(symbol(120), "Ubn");
    assert_eq!(symbol(0), UNKNOWN_SYMBOL);
    assert_eq!(symbol(121), UNKNOWN_SYMBOL);
  }

  #[test]
  fn test_reverse_lookup() {
    assert_eq!(atomic_number("Fe"), Some(26));
    assert_eq!(atomic_number("U"), Some(92));
    assert_eq!(atomic_number("Xx"), None);
    assert_eq!(atomic_number(""), None);
  }
}
