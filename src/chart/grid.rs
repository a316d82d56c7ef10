// src/chart/grid.rs

use super::classifier::Classifier;
use super::highlight::{resolve, Appearance, HighlightMode};
use super::palette::Color;
use super::view::{ChartView, PlotRect};
use crate::model::{Coord, Dataset, NuclideRecord};

/// Drawing surface for the nuclear chart. The chart walks the dataset and
/// hands every nuclide to `draw_cell`; the backend only has to paint.
pub trait GridRenderer {
  /// Edge length of one cell for the current zoom.
  fn square_size(&self, view: &ChartView) -> f64 {
    view.square_size()
  }

  /// Restricts subsequent drawing to the plot rectangle.
  fn clip(&mut self, rect: PlotRect);

  fn draw_cell(&mut self, center: (f64, f64), size: f64, fill: Color, appearance: &Appearance);
}

/// Everything one frame of the grid depends on.
pub struct GridFrame<'a> {
  pub dataset: &'a Dataset,
  pub view: &'a ChartView,
  pub classifier: &'a Classifier,
  pub mode: HighlightMode,
  pub selected: Option<&'a NuclideRecord>,
}

impl GridFrame<'_> {
  /// Paints every nuclide whose cell touches the plot area. Returns how many
  /// cells were handed to the renderer.
  pub fn render(&self, renderer: &mut dyn GridRenderer) -> usize {
    let rect = self.view.rect();
    let size = renderer.square_size(self.view);
    renderer.clip(rect);

    let half = size / 2.0;
    let mut drawn = 0;
    for record in self.dataset.records() {
      let (cx, cy) = self.view.to_pixel(record.n() as f64, record.z() as f64);
      if cx + half < rect.x || cx - half > rect.x + rect.width || cy + half < rect.y || cy - half > rect.y + rect.height {
        continue;
      }
      let fill = self.classifier.classify(record).color;
      let appearance = resolve(record, self.mode, self.selected);
      renderer.draw_cell((cx, cy), size, fill, &appearance);
      drawn += 1;
    }
    drawn
  }

  /// Nuclide whose centre is nearest to the pixel position, within
  /// `max(square/2, point_size)` pixels but never more than one square.
  pub fn pick(&self, px: f64, py: f64) -> Option<Coord> {
    if !self.view.rect().contains(px, py) {
      return None;
    }
    let square = self.view.square_size();
    let half = square / 2.0;

    self
      .dataset
      .records()
      .iter()
      .filter_map(|r| {
        let (cx, cy) = self.view.to_pixel(r.n() as f64, r.z() as f64);
        let dist = (px - cx).hypot(py - cy);
        let radius = half.max(resolve(r, self.mode, self.selected).point_size).min(square);
        (dist <= radius).then_some((dist, r.coord()))
      })
      .min_by(|a, b| a.0.total_cmp(&b.0))
      .map(|(_, coord)| coord)
  }

  pub fn hover_label(&self, px: f64, py: f64) -> Option<String> {
    self
      .pick(px, py)
      .and_then(|c| self.dataset.get(c))
      .map(hover_text)
  }
}

/// Two-line hover text, e.g. "Sn-110\nN=60, Z=50".
pub fn hover_text(record: &NuclideRecord) -> String {
  format!("{}\nN={}, Z={}", record.name(), record.n(), record.z())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::chart::classifier::Property;
  use crate::model::GridBounds;

  #[derive(Default)]
  struct Recorder {
    clip: Option<PlotRect>,
    cells: Vec<((f64, f64), f64, Color, Appearance)>,
  }

  impl GridRenderer for Recorder {
    fn clip(&mut self, rect: PlotRect) {
      self.clip = Some(rect);
    }

    fn draw_cell(&mut self, center: (f64, f64), size: f64, fill: Color, appearance: &Appearance) {
      self.cells.push((center, size, fill, *appearance));
    }
  }

  fn dataset() -> Dataset {
    Dataset::from_records([
      NuclideRecord::new(60, 50, 0.0, 0.0, 0.0, 1.0, 0.0),
      NuclideRecord::new(62, 50, 0.0, 0.0, 0.0, 3.0, 0.0),
      NuclideRecord::new(82, 50, 0.0, 0.0, 0.0, 5.0, 0.0),
    ])
  }

  fn view(ds: &Dataset) -> ChartView {
    let bounds: GridBounds = ds.bounds().unwrap();
    ChartView::new(bounds, PlotRect::inside(600.0, 400.0))
  }

  #[test]
  fn test_render_walks_dataset() {
    let ds = dataset();
    let v = view(&ds);
    let c = Classifier::new(Property::HalfLife, &ds);
    let frame = GridFrame {
      dataset: &ds,
      view: &v,
      classifier: &c,
      mode: HighlightMode::Magic,
      selected: None,
    };
    let mut rec = Recorder::default();
    assert_eq!(frame.render(&mut rec), 3);
    assert_eq!(rec.clip, Some(v.rect()));
    assert!(rec.cells.iter().all(|cell| cell.1 == v.square_size()));
    // Sn-132 is doubly magic
    assert_eq!(rec.cells[2].3.width, 3.0);
  }

  #[test]
  fn test_pick_nearest_and_miss() {
    let ds = dataset();
    let v = view(&ds);
    let c = Classifier::new(Property::HalfLife, &ds);
    let frame = GridFrame {
      dataset: &ds,
      view: &v,
      classifier: &c,
      mode: HighlightMode::None,
      selected: None,
    };
    let (px, py) = v.to_pixel(62.0, 50.0);
    assert_eq!(frame.pick(px + 1.0, py - 1.0), Some(Coord::new(62, 50)));
    let (px, py) = v.to_pixel(70.0, 50.0);
    assert_eq!(frame.pick(px, py), None);
    assert_eq!(frame.pick(0.0, 0.0), None);

    let (px, py) = v.to_pixel(60.0, 50.0);
    assert_eq!(frame.hover_label(px, py).as_deref(), Some("Sn-110\nN=60, Z=50"));
  }

  #[test]
  fn test_pick_radius_capped_when_zoomed_out() {
    let ds = Dataset::from_records([
      NuclideRecord::new(60, 50, 0.0, 0.0, 0.0, 1.0, 0.0),
      NuclideRecord::new(200, 120, 0.0, 0.0, 0.0, 1.0, 0.0),
    ]);
    let v = ChartView::new(ds.bounds().unwrap(), PlotRect::inside(300.0, 250.0));
    let c = Classifier::new(Property::HalfLife, &ds);
    let frame = GridFrame {
      dataset: &ds,
      view: &v,
      classifier: &c,
      mode: HighlightMode::None,
      selected: None,
    };
    let square = v.square_size();
    assert!(square < 2.0);

    let (px, py) = v.to_pixel(60.0, 50.0);
    assert_eq!(frame.pick(px + square * 0.5, py), Some(Coord::new(60, 50)));
    // Within the 8 px point size but several cells away
    assert_eq!(frame.pick(px + 4.0, py), None);
  }

  #[test]
  fn test_cells_outside_viewport_skipped() {
    let ds = dataset();
    let mut v = view(&ds);
    let (px, py) = v.to_pixel(82.0, 50.0);
    for _ in 0..40 {
      v.zoom_at(px, py, 0.9);
    }
    let c = Classifier::new(Property::HalfLife, &ds);
    let frame = GridFrame {
      dataset: &ds,
      view: &v,
      classifier: &c,
      mode: HighlightMode::None,
      selected: None,
    };
    let mut rec = Recorder::default();
    assert_eq!(frame.render(&mut rec), 1);
  }
}
