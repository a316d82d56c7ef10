// src/chart/palette.rs

/// 8-bit RGB with a float alpha, as used by both cairo and plotters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: f64,
}

impl Color {
  /// `0xRRGGBB`, fully opaque.
  pub const fn hex(rgb: u32) -> Self {
    Self {
      r: ((rgb >> 16) & 0xff) as u8,
      g: ((rgb >> 8) & 0xff) as u8,
      b: (rgb & 0xff) as u8,
      a: 1.0,
    }
  }

  pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
    Self { r, g, b, a }
  }

  pub const fn with_alpha(self, a: f64) -> Self {
    Self { a, ..self }
  }

  /// Channels in 0..=1 for cairo's `set_source_rgba`.
  pub fn to_unit(self) -> (f64, f64, f64, f64) {
    (
      self.r as f64 / 255.0,
      self.g as f64 / 255.0,
      self.b as f64 / 255.0,
      self.a,
    )
  }

  pub fn to_css(self) -> String {
    format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}

// --- Named colors ---

pub const RED_500: Color = Color::hex(0xef4444);
pub const RED_600: Color = Color::hex(0xdc2626);
pub const ORANGE_500: Color = Color::hex(0xf97316);
pub const AMBER_500: Color = Color::hex(0xf59e0b);
pub const YELLOW_500: Color = Color::hex(0xeab308);
pub const LIME_500: Color = Color::hex(0x84cc16);
pub const GREEN_500: Color = Color::hex(0x22c55e);
pub const EMERALD_500: Color = Color::hex(0x10b981);
pub const CYAN_500: Color = Color::hex(0x06b6d4);
pub const BLUE_300: Color = Color::hex(0x93c5fd);
pub const BLUE_500: Color = Color::hex(0x3b82f6);
pub const BLUE_600: Color = Color::hex(0x2563eb);
pub const BLUE_800: Color = Color::hex(0x1e40af);
pub const VIOLET_500: Color = Color::hex(0x8b5cf6);
pub const VIOLET_600: Color = Color::hex(0x7c3aed);
pub const PINK_600: Color = Color::hex(0xdb2777);
pub const SLATE_300: Color = Color::hex(0xcbd5e1);
pub const SLATE_500: Color = Color::hex(0x64748b);

pub const DEFAULT_BORDER: Color = Color::rgba(0, 0, 0, 0.4);
pub const GRID_LINE: Color = Color::rgba(0, 0, 0, 0.1);
pub const MAGIC_GRID_LINE: Color = Color::rgba(239, 68, 68, 0.4);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_hex_decoding() {
    assert_eq!(RED_500, Color::rgba(0xef, 0x44, 0x44, 1.0));
    assert_eq!(CYAN_500.to_css(), "#06b6d4");
    let (r, g, b, a) = DEFAULT_BORDER.to_unit();
    assert_eq!((r, g, b, a), (0.0, 0.0, 0.0, 0.4));
  }
}
