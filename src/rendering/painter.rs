// src/rendering/painter.rs
// Cairo drawing of the nuclear chart: grid lines, cells, axes and legend.

use crate::chart::palette::{self, Color};
use crate::chart::view::Tick;
use crate::chart::{Appearance, GridRenderer, PlotRect};
use crate::state::ChartSession;
use cairo::{Context, FontSlant, FontWeight};
use std::error::Error;
use std::f64::consts::PI;
use std::fs::File;
use std::path::Path;

const MAGIC_GRID_WIDTH: f64 = 3.0;
const PLAIN_GRID_WIDTH: f64 = 1.0;

fn set_color(cr: &Context, c: Color) {
  let (r, g, b, a) = c.to_unit();
  cr.set_source_rgba(r, g, b, a);
}

/// `GridRenderer` on a cairo context. The first failing cairo call is kept
/// and reported once the frame is done.
pub struct CairoGrid<'a> {
  cr: &'a Context,
  error: Option<cairo::Error>,
}

impl<'a> CairoGrid<'a> {
  pub fn new(cr: &'a Context) -> Self {
    Self { cr, error: None }
  }

  pub fn finish(self) -> Result<(), cairo::Error> {
    self.cr.reset_clip();
    match self.error {
      Some(e) => Err(e),
      None => Ok(()),
    }
  }
}

impl GridRenderer for CairoGrid<'_> {
  fn clip(&mut self, rect: PlotRect) {
    self.cr.rectangle(rect.x, rect.y, rect.width, rect.height);
    self.cr.clip();
  }

  fn draw_cell(&mut self, center: (f64, f64), size: f64, fill: Color, appearance: &Appearance) {
    let half = size / 2.0;
    self.cr.rectangle(center.0 - half, center.1 - half, size, size);
    set_color(self.cr, fill);
    let filled = self.cr.fill_preserve();

    set_color(self.cr, appearance.border);
    self.cr.set_line_width(appearance.width);
    let stroked = self.cr.stroke();

    if self.error.is_none() {
      self.error = filled.and(stroked).err();
    }
  }
}

fn show_text_at(cr: &Context, text: &str, x: f64, y: f64, center: bool) -> Result<(), cairo::Error> {
  let ext = cr.text_extents(text)?;
  let dx = if center { ext.width() / 2.0 } else { 0.0 };
  cr.move_to(x - dx, y);
  cr.show_text(text)
}

fn tick_color(t: &Tick) -> Color {
  if t.magic {
    palette::RED_500
  } else {
    palette::SLATE_500
  }
}

fn draw_grid_lines(cr: &Context, rect: PlotRect, xs: &[(f64, bool)], ys: &[(f64, bool)]) -> Result<(), cairo::Error> {
  for &(px, magic) in xs {
    let (c, w) = if magic {
      (palette::MAGIC_GRID_LINE, MAGIC_GRID_WIDTH)
    } else {
      (palette::GRID_LINE, PLAIN_GRID_WIDTH)
    };
    set_color(cr, c);
    cr.set_line_width(w);
    cr.move_to(px, rect.y);
    cr.line_to(px, rect.y + rect.height);
    cr.stroke()?;
  }
  for &(py, magic) in ys {
    let (c, w) = if magic {
      (palette::MAGIC_GRID_LINE, MAGIC_GRID_WIDTH)
    } else {
      (palette::GRID_LINE, PLAIN_GRID_WIDTH)
    };
    set_color(cr, c);
    cr.set_line_width(w);
    cr.move_to(rect.x, py);
    cr.line_to(rect.x + rect.width, py);
    cr.stroke()?;
  }
  Ok(())
}

fn draw_legend(cr: &Context, session: &ChartSession, rect: PlotRect) -> Result<(), cairo::Error> {
  let legend = session.legend();
  let entries: Vec<_> = legend.visible_entries().collect();
  let row = 18.0;
  let width = 210.0;
  let height = 28.0 + row * entries.len() as f64;
  let (x, y) = (rect.x + 10.0, rect.y + 10.0);

  cr.set_source_rgba(1.0, 1.0, 1.0, 0.9);
  cr.rectangle(x, y, width, height);
  cr.fill_preserve()?;
  set_color(cr, palette::SLATE_300);
  cr.set_line_width(1.0);
  cr.stroke()?;

  cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Bold);
  cr.set_font_size(12.0);
  cr.set_source_rgb(0.1, 0.1, 0.1);
  show_text_at(cr, legend.title, x + 8.0, y + 18.0, false)?;

  cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
  cr.set_font_size(11.0);
  for (i, entry) in entries.iter().enumerate() {
    let ry = y + 28.0 + row * i as f64;
    set_color(cr, entry.color);
    cr.rectangle(x + 8.0, ry, 14.0, 12.0);
    cr.fill()?;
    cr.set_source_rgb(0.2, 0.2, 0.2);
    show_text_at(cr, &entry.label, x + 30.0, ry + 10.0, false)?;
  }
  Ok(())
}

/// Full frame of the nuclear chart for a widget of `width` x `height`.
pub fn draw_chart(cr: &Context, session: &ChartSession, width: f64, height: f64) -> Result<(), cairo::Error> {
  cr.set_source_rgb(1.0, 1.0, 1.0);
  cr.paint()?;

  let Some(view) = session.view() else {
    cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
    cr.set_font_size(16.0);
    set_color(cr, palette::SLATE_500);
    return show_text_at(cr, "No data loaded. Pick an interaction and press Load.", width / 2.0, height / 2.0, true);
  };
  let rect = view.rect();
  let x_ticks = view.x_ticks();
  let y_ticks = view.y_ticks();

  // 1. Grid lines (clipped to the plot)
  cr.save()?;
  cr.rectangle(rect.x, rect.y, rect.width, rect.height);
  cr.clip();
  let xs: Vec<(f64, bool)> = x_ticks.iter().map(|t| (view.to_pixel(t.value as f64, 0.0).0, t.magic)).collect();
  let ys: Vec<(f64, bool)> = y_ticks.iter().map(|t| (view.to_pixel(0.0, t.value as f64).1, t.magic)).collect();
  draw_grid_lines(cr, rect, &xs, &ys)?;
  cr.restore()?;

  // 2. Nuclides
  let mut grid = CairoGrid::new(cr);
  session.render(&mut grid);
  grid.finish()?;

  // 3. Frame and tick labels
  set_color(cr, palette::SLATE_500);
  cr.set_line_width(1.0);
  cr.rectangle(rect.x, rect.y, rect.width, rect.height);
  cr.stroke()?;

  cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
  cr.set_font_size(11.0);
  for (t, &(px, _)) in x_ticks.iter().zip(&xs) {
    set_color(cr, tick_color(t));
    show_text_at(cr, &t.value.to_string(), px, rect.y + rect.height + 16.0, true)?;
  }
  for (t, &(py, _)) in y_ticks.iter().zip(&ys) {
    set_color(cr, tick_color(t));
    let label = t.value.to_string();
    let w = cr.text_extents(&label)?.width();
    show_text_at(cr, &label, rect.x - 8.0 - w, py + 4.0, false)?;
  }

  // 4. Axis titles
  cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Bold);
  cr.set_font_size(13.0);
  cr.set_source_rgb(0.15, 0.15, 0.15);
  show_text_at(cr, "Neutron Number (N)", rect.x + rect.width / 2.0, height - 10.0, true)?;
  cr.save()?;
  cr.translate(18.0, rect.y + rect.height / 2.0);
  cr.rotate(-PI / 2.0);
  show_text_at(cr, "Proton Number (Z)", 0.0, 0.0, true)?;
  cr.restore()?;

  // 5. Legend on top
  draw_legend(cr, session, rect)
}

/// Writes the current chart to a PNG file.
pub fn export_png(session: &ChartSession, path: &Path, width: i32, height: i32) -> Result<(), Box<dyn Error>> {
  let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
  let cr = Context::new(&surface)?;
  let session = session.resized(width as f64, height as f64);
  draw_chart(&cr, &session, width as f64, height as f64)?;
  drop(cr);

  let mut file = File::create(path)?;
  surface.write_to_png(&mut file)?;
  Ok(())
}
