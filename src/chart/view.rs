// src/chart/view.rs

use crate::model::{is_magic, GridBounds};

/// Extra units shown around the data at rest.
pub const DISPLAY_PADDING: f64 = 2.0;
/// How far past the data zoom and pan may reach.
pub const LIMIT_PADDING: f64 = 5.0;
/// Smallest span (per axis) zooming in may reach.
pub const MIN_SPAN: f64 = 4.0;
pub const TICK_STEP: u32 = 2;
pub const SQUARE_FILL: f64 = 0.95;

pub const ZOOM_IN: f64 = 0.9;
pub const ZOOM_OUT: f64 = 1.1;

/// Pixel area inside the axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
  pub x: f64,
  pub y: f64,
  pub width: f64,
  pub height: f64,
}

/// Axis margins around the plot rectangle (left, right, top, bottom).
pub const MARGINS: (f64, f64, f64, f64) = (60.0, 20.0, 20.0, 50.0);

impl PlotRect {
  pub fn contains(&self, px: f64, py: f64) -> bool {
    px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
  }

  /// Plot area of a widget of `width` x `height` after the axis margins.
  pub fn inside(width: f64, height: f64) -> Self {
    let (l, r, t, b) = MARGINS;
    Self {
      x: l,
      y: t,
      width: (width - l - r).max(1.0),
      height: (height - t - b).max(1.0),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
  pub min: f64,
  pub max: f64,
}

impl Range {
  pub fn new(min: f64, max: f64) -> Self {
    Self { min, max }
  }

  pub fn span(&self) -> f64 {
    self.max - self.min
  }

  /// Shifts the range by `delta` without leaving `limit`; the span is kept.
  fn shift_within(&mut self, delta: f64, limit: Range) {
    let span = self.span();
    let min = (self.min + delta).clamp(limit.min, (limit.max - span).max(limit.min));
    self.min = min;
    self.max = min + span;
  }

  /// Scales the range about `anchor`, respecting the minimum span and `limit`.
  fn zoom_about(&mut self, anchor: f64, factor: f64, limit: Range) {
    let span = (self.span() * factor).clamp(MIN_SPAN.min(limit.span()), limit.span());
    let ratio = if self.span() > 0.0 {
      (anchor - self.min) / self.span()
    } else {
      0.5
    };
    let mut min = anchor - ratio * span;
    let mut max = min + span;
    if min < limit.min {
      min = limit.min;
      max = min + span;
    }
    if max > limit.max {
      max = limit.max;
      min = max - span;
    }
    self.min = min;
    self.max = max;
  }
}

/// One axis tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
  pub value: u32,
  pub magic: bool,
}

/// Linear ticks every `step` units within [min, max]; magic numbers are
/// flagged for emphasis.
pub fn axis_ticks(min: f64, max: f64, step: u32) -> Vec<Tick> {
  let step = step.max(1);
  let first = (min.max(0.0) / step as f64).ceil() as u32 * step;
  let mut ticks = Vec::new();
  let mut v = first;
  while (v as f64) <= max {
    ticks.push(Tick { value: v, magic: is_magic(v) });
    v += step;
  }
  ticks
}

/// Viewport of the nuclear chart: data ranges on x (N) and y (Z), the pixel
/// rectangle they map onto, and the limits zoom and pan respect.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
  pub x: Range,
  pub y: Range,
  home_x: Range,
  home_y: Range,
  limit_x: Range,
  limit_y: Range,
  rect: PlotRect,
}

impl ChartView {
  pub fn new(bounds: GridBounds, rect: PlotRect) -> Self {
    let home_x = Range::new(bounds.min_n as f64 - DISPLAY_PADDING, bounds.max_n as f64 + DISPLAY_PADDING);
    let home_y = Range::new(bounds.min_z as f64 - DISPLAY_PADDING, bounds.max_z as f64 + DISPLAY_PADDING);
    Self {
      x: home_x,
      y: home_y,
      home_x,
      home_y,
      limit_x: Range::new(bounds.min_n as f64 - LIMIT_PADDING, bounds.max_n as f64 + LIMIT_PADDING),
      limit_y: Range::new(bounds.min_z as f64 - LIMIT_PADDING, bounds.max_z as f64 + LIMIT_PADDING),
      rect,
    }
  }

  pub fn rect(&self) -> PlotRect {
    self.rect
  }

  pub fn set_plot_rect(&mut self, rect: PlotRect) {
    self.rect = rect;
  }

  pub fn limits(&self) -> (Range, Range) {
    (self.limit_x, self.limit_y)
  }

  pub fn px_per_unit(&self) -> (f64, f64) {
    (self.rect.width / self.x.span(), self.rect.height / self.y.span())
  }

  /// Edge length of a nuclide square in pixels for the current zoom.
  pub fn square_size(&self) -> f64 {
    let (ux, uy) = self.px_per_unit();
    ux.min(uy) * SQUARE_FILL
  }

  pub fn to_pixel(&self, n: f64, z: f64) -> (f64, f64) {
    let (ux, uy) = self.px_per_unit();
    (
      self.rect.x + (n - self.x.min) * ux,
      self.rect.y + self.rect.height - (z - self.y.min) * uy,
    )
  }

  pub fn to_data(&self, px: f64, py: f64) -> (f64, f64) {
    let (ux, uy) = self.px_per_unit();
    (
      self.x.min + (px - self.rect.x) / ux,
      self.y.min + (self.rect.y + self.rect.height - py) / uy,
    )
  }

  /// Zooms by `factor` (< 1 zooms in) about the pixel position.
  pub fn zoom_at(&mut self, px: f64, py: f64, factor: f64) {
    let (n, z) = self.to_data(px, py);
    self.x.zoom_about(n, factor, self.limit_x);
    self.y.zoom_about(z, factor, self.limit_y);
  }

  /// Moves the viewport with a pointer drag of (dx, dy) pixels.
  pub fn pan_by(&mut self, dx: f64, dy: f64) {
    let (ux, uy) = self.px_per_unit();
    // Content follows the pointer; y grows downwards on screen.
    self.x.shift_within(-dx / ux, self.limit_x);
    self.y.shift_within(dy / uy, self.limit_y);
  }

  pub fn reset(&mut self) {
    self.x = self.home_x;
    self.y = self.home_y;
  }

  pub fn x_ticks(&self) -> Vec<Tick> {
    axis_ticks(self.x.min, self.x.max, TICK_STEP)
  }

  pub fn y_ticks(&self) -> Vec<Tick> {
    axis_ticks(self.y.min, self.y.max, TICK_STEP)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn view() -> ChartView {
    let bounds = GridBounds {
      min_n: 10,
      max_n: 30,
      min_z: 10,
      max_z: 30,
    };
    ChartView::new(
      bounds,
      PlotRect {
        x: 0.0,
        y: 0.0,
        width: 240.0,
        height: 240.0,
      },
    )
  }

  #[test]
  fn test_transforms_round_trip_and_y_up() {
    let v = view();
    assert_eq!(v.x, Range::new(8.0, 32.0));
    let (px, py) = v.to_pixel(8.0, 8.0);
    assert_eq!((px, py), (0.0, 240.0));
    let (n, z) = v.to_data(120.0, 60.0);
    assert!((n - 20.0).abs() < 1e-9);
    assert!((z - 26.0).abs() < 1e-9);
    assert!((v.square_size() - 9.5).abs() < 1e-9);
  }

  #[test]
  fn test_zoom_keeps_anchor_and_min_span() {
    let mut v = view();
    let (px, py) = v.to_pixel(20.0, 20.0);
    v.zoom_at(px, py, ZOOM_IN);
    let (n, z) = v.to_data(px, py);
    assert!((n - 20.0).abs() < 1e-9 && (z - 20.0).abs() < 1e-9);

    for _ in 0..100 {
      v.zoom_at(px, py, ZOOM_IN);
    }
    assert!((v.x.span() - MIN_SPAN).abs() < 1e-9);
    assert!((v.y.span() - MIN_SPAN).abs() < 1e-9);
  }

  #[test]
  fn test_zoom_out_and_pan_clamped() {
    let mut v = view();
    for _ in 0..50 {
      v.zoom_at(10.0, 10.0, ZOOM_OUT);
    }
    for r in [v.x, v.y] {
      assert!((r.min - 5.0).abs() < 1e-9 && (r.max - 35.0).abs() < 1e-9);
    }

    v.reset();
    v.pan_by(-10_000.0, 10_000.0);
    assert_eq!(v.x.max, 35.0);
    assert_eq!(v.y.max, 35.0);
    assert!((v.x.span() - 24.0).abs() < 1e-9);
  }

  #[test]
  fn test_ticks_flag_magic_numbers() {
    let ticks = axis_ticks(17.0, 29.0, 2);
    let values: Vec<u32> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![18, 20, 22, 24, 26, 28]);
    let magic: Vec<u32> = ticks.iter().filter(|t| t.magic).map(|t| t.value).collect();
    assert_eq!(magic, vec![20, 28]);
    assert_eq!(axis_ticks(-3.0, 4.0, 2).first().map(|t| t.value), Some(0));
  }
}
