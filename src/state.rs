// src/state.rs
use crate::chart::format::{format_half_life, format_mev, format_percent};
use crate::chart::highlight::{self, Appearance, HighlightMode};
use crate::chart::view::ZOOM_OUT;
use crate::chart::{ChainPlot, ChartView, Classifier, GestureEnd, GestureTracker, GridFrame, GridRenderer, Legend, PlotRect, Property};
use crate::config::Config;
use crate::error::Result;
use crate::io::FsSource;
use crate::model::{ChainKind, Coord, Dataset, NuclideRecord, StrengthQuery, StrengthSpectrum};
use crate::views::BetaChart;

/// Formatted fields of the nucleus detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct NucleusDetail {
  pub title: String,
  pub n: String,
  pub z: String,
  pub a: String,
  pub e_beta: String,
  pub beta2: String,
  pub q: String,
  pub half_life: String,
  pub ff: String,
}

impl NucleusDetail {
  pub fn of(r: &NuclideRecord) -> Self {
    Self {
      title: r.name(),
      n: r.n().to_string(),
      z: r.z().to_string(),
      a: r.a().to_string(),
      e_beta: format_mev(r.e_beta),
      beta2: format!("{:.6}", r.beta2),
      q: format_mev(r.q),
      half_life: format_half_life(r.hl_log10),
      ff: format_percent(r.ff_percent),
    }
  }

  /// (label, value) pairs in display order.
  pub fn fields(&self) -> [(&'static str, &str); 8] {
    [
      ("N", self.n.as_str()),
      ("Z", self.z.as_str()),
      ("A", self.a.as_str()),
      ("E(β)", self.e_beta.as_str()),
      ("β₂", self.beta2.as_str()),
      ("Q-value", self.q.as_str()),
      ("Half-life", self.half_life.as_str()),
      ("FF Contribution", self.ff.as_str()),
    ]
  }
}

/// Everything the nuclear chart tab shows. All interaction goes through
/// this object; the widgets only forward events and repaint.
#[derive(Clone)]
pub struct ChartSession {
  dataset: Dataset,
  interaction: Option<String>,
  classifier: Classifier,
  mode: HighlightMode,
  view: Option<ChartView>,
  rect: PlotRect,
  gesture: GestureTracker,
  selected: Option<Coord>,
  detail_open: bool,
  chain_plot: Option<ChainPlot>,
  zoom_step: f64,
}

impl ChartSession {
  pub fn new(property: Property) -> Self {
    let dataset = Dataset::new();
    Self {
      classifier: Classifier::new(property, &dataset),
      dataset,
      interaction: None,
      mode: HighlightMode::None,
      view: None,
      rect: PlotRect::inside(800.0, 600.0),
      gesture: GestureTracker::new(),
      selected: None,
      detail_open: false,
      chain_plot: None,
      zoom_step: ZOOM_OUT - 1.0,
    }
  }

  /// Fraction the viewport grows or shrinks per wheel notch.
  pub fn set_zoom_step(&mut self, step: f64) {
    self.zoom_step = step.clamp(0.01, 0.5);
  }

  /// Replaces the dataset and everything derived from it.
  pub fn load_dataset(&mut self, dataset: Dataset, interaction: &str) {
    self.classifier = Classifier::new(self.classifier.property(), &dataset);
    self.view = dataset.bounds().map(|b| ChartView::new(b, self.rect));
    self.dataset = dataset;
    self.interaction = Some(interaction.to_string());
    self.gesture = GestureTracker::new();
    self.selected = None;
    self.detail_open = false;
    self.chain_plot = None;
    log::debug!("Chart rebuilt with {} nuclides", self.dataset.len());
  }

  pub fn dataset(&self) -> &Dataset {
    &self.dataset
  }

  pub fn interaction(&self) -> Option<&str> {
    self.interaction.as_deref()
  }

  pub fn view(&self) -> Option<&ChartView> {
    self.view.as_ref()
  }

  pub fn property(&self) -> Property {
    self.classifier.property()
  }

  pub fn highlight_mode(&self) -> HighlightMode {
    self.mode
  }

  pub fn legend(&self) -> Legend {
    self.classifier.legend()
  }

  pub fn chain_plot(&self) -> Option<&ChainPlot> {
    self.chain_plot.as_ref()
  }

  /// Called on every widget resize.
  pub fn set_plot_rect(&mut self, rect: PlotRect) {
    self.rect = rect;
    if let Some(view) = self.view.as_mut() {
      view.set_plot_rect(rect);
    }
  }

  /// Copy of the session laid out for a `width` x `height` canvas, with the
  /// same data ranges. Used for off-screen export.
  pub fn resized(&self, width: f64, height: f64) -> ChartSession {
    let mut copy = self.clone();
    copy.set_plot_rect(PlotRect::inside(width, height));
    copy
  }

  pub fn set_property(&mut self, property: Property) {
    self.classifier = Classifier::new(property, &self.dataset);
  }

  pub fn set_highlight_mode(&mut self, mode: HighlightMode) {
    self.mode = mode;
  }

  // --- Pointer ---

  pub fn pointer_down(&mut self, x: f64, y: f64, shift: bool) {
    self.gesture.pointer_down(x, y, shift);
  }

  /// Returns true when the viewport moved.
  pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
    match (self.gesture.pointer_move(x, y), self.view.as_mut()) {
      (Some((dx, dy)), Some(view)) => {
        view.pan_by(dx, dy);
        true
      }
      _ => false,
    }
  }

  /// Finishes a press. A short click on a nuclide selects it.
  pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<Coord> {
    match self.gesture.pointer_up(x, y) {
      GestureEnd::Click { x, y } => {
        let coord = self.frame()?.pick(x, y)?;
        self.select(coord).then_some(coord)
      }
      GestureEnd::Drag | GestureEnd::None => None,
    }
  }

  /// Wheel zoom about the pointer; `dy > 0` zooms out.
  pub fn scroll(&mut self, x: f64, y: f64, dy: f64) -> bool {
    let factor = if dy > 0.0 {
      1.0 + self.zoom_step
    } else {
      1.0 - self.zoom_step
    };
    match self.view.as_mut() {
      Some(view) if dy != 0.0 => {
        view.zoom_at(x, y, factor);
        true
      }
      _ => false,
    }
  }

  pub fn hover(&self, x: f64, y: f64) -> Option<String> {
    self.frame()?.hover_label(x, y)
  }

  // --- Selection ---

  /// Selects a nuclide present in the dataset and opens its detail view.
  pub fn select(&mut self, coord: Coord) -> bool {
    if self.dataset.get(coord).is_none() {
      return false;
    }
    log::debug!("Selected N={}, Z={}", coord.n, coord.z);
    self.selected = Some(coord);
    self.detail_open = true;
    true
  }

  pub fn selected(&self) -> Option<&NuclideRecord> {
    self.selected.and_then(|c| self.dataset.get(c))
  }

  pub fn detail(&self) -> Option<NucleusDetail> {
    if !self.detail_open {
      return None;
    }
    self.selected().map(NucleusDetail::of)
  }

  pub fn close_detail(&mut self) {
    self.detail_open = false;
  }

  /// Highlights the chain of `kind` through the selection and plots it.
  /// Does nothing without a selection.
  pub fn show_chain(&mut self, kind: ChainKind) -> Result<()> {
    let Some(selection) = self.selected().map(|r| kind.through(r)) else {
      return Ok(());
    };
    self.mode = HighlightMode::from(kind);
    self.detail_open = false;
    match ChainPlot::build(&self.dataset, selection) {
      Ok(plot) => {
        self.chain_plot = Some(plot);
        Ok(())
      }
      Err(e) => {
        self.chain_plot = None;
        Err(e)
      }
    }
  }

  pub fn close_chain_plot(&mut self) {
    self.chain_plot = None;
  }

  /// Back to the freshly loaded state: no selection, no highlight, full view.
  pub fn reset(&mut self) {
    self.selected = None;
    self.detail_open = false;
    self.chain_plot = None;
    self.mode = HighlightMode::None;
    if let Some(view) = self.view.as_mut() {
      view.reset();
    }
  }

  // --- Rendering ---

  pub fn appearance(&self, record: &NuclideRecord) -> Appearance {
    highlight::resolve(record, self.mode, self.selected())
  }

  pub fn frame(&self) -> Option<GridFrame<'_>> {
    Some(GridFrame {
      dataset: &self.dataset,
      view: self.view.as_ref()?,
      classifier: &self.classifier,
      mode: self.mode,
      selected: self.selected(),
    })
  }

  pub fn render(&self, renderer: &mut dyn GridRenderer) -> usize {
    self.frame().map(|f| f.render(renderer)).unwrap_or(0)
  }
}

/// Ticket for one asynchronous load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Latest request wins: a completion carrying an older token is dropped.
#[derive(Debug, Default)]
pub struct LoadTracker {
  generation: u64,
  pending: bool,
}

impl LoadTracker {
  pub fn begin(&mut self) -> LoadToken {
    self.generation += 1;
    self.pending = true;
    LoadToken(self.generation)
  }

  /// True when `token` belongs to the newest request; its result should be
  /// applied. Stale completions leave the pending flag alone.
  pub fn finish(&mut self, token: LoadToken) -> bool {
    if token.0 == self.generation {
      self.pending = false;
      true
    } else {
      log::debug!("Discarding stale load #{} (current #{})", token.0, self.generation);
      false
    }
  }

  pub fn is_loading(&self) -> bool {
    self.pending
  }
}

/// Beta-decay chain tab.
#[derive(Default)]
pub struct BetaViewState {
  pub chart: Option<BetaChart>,
  pub loads: LoadTracker,
}

impl BetaViewState {
  /// Installs a finished load. A failed load leaves the previous chart.
  pub fn apply(&mut self, result: Result<BetaChart>) -> Result<&BetaChart> {
    let chart = result?;
    Ok(self.chart.insert(chart))
  }
}

/// Strength-function tab.
#[derive(Default)]
pub struct StrengthViewState {
  pub nuclei: Vec<String>,
  /// Query of the spectrum on screen.
  pub query: Option<StrengthQuery>,
  pub spectrum: Option<StrengthSpectrum>,
  pub loads: LoadTracker,
}

impl StrengthViewState {
  /// Installs a finished load. A failed load leaves the previous spectrum.
  pub fn apply(&mut self, result: Result<StrengthSpectrum>) -> Result<&StrengthSpectrum> {
    let spectrum = result?;
    self.query = Some(spectrum.query.clone());
    Ok(self.spectrum.insert(spectrum))
  }
}

pub struct AppState {
  pub config: Config,
  pub chart: ChartSession,
  pub chart_loads: LoadTracker,
  pub beta: BetaViewState,
  pub strength: StrengthViewState,
}

impl AppState {
  pub fn new(config: Config) -> Self {
    let mut chart = ChartSession::new(config.default_property);
    chart.set_zoom_step(config.zoom_step);
    Self {
      config,
      chart,
      chart_loads: LoadTracker::default(),
      beta: BetaViewState::default(),
      strength: StrengthViewState::default(),
    }
  }

  pub fn source(&self) -> FsSource {
    FsSource::new(&self.config.data_root)
  }

  /// Writes the config to disk and applies the settings that act live.
  pub fn save_config(&mut self) {
    self.chart.set_zoom_step(self.config.zoom_step);
    log::info!("{}", self.config.save());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::chart::view::MARGINS;
  use crate::error::DataError;
  use crate::model::{ChainSelection, StrengthPoint};

  fn dataset() -> Dataset {
    Dataset::from_records([
      NuclideRecord::new(64, 50, 6.0, 0.15, 4.9, -0.25, 30.0),
      NuclideRecord::new(60, 50, 4.1, 0.02, 3.5, 2.0, 2.0),
      NuclideRecord::new(62, 50, 5.2, -0.11, 4.1, 0.50, 12.5),
      NuclideRecord::new(62, 48, 5.0, 0.10, 4.0, 1.00, 8.0),
      NuclideRecord::new(60, 52, 5.5, 0.05, 4.5, 0.10, 3.0),
    ])
  }

  fn session() -> ChartSession {
    let mut s = ChartSession::new(Property::HalfLife);
    s.set_plot_rect(PlotRect::inside(800.0, 600.0));
    s.load_dataset(dataset(), "D1M");
    s
  }

  fn click_on(s: &mut ChartSession, n: u32, z: u32) -> Option<Coord> {
    let (px, py) = s.view().unwrap().to_pixel(n as f64, z as f64);
    s.pointer_down(px, py, false);
    s.pointer_up(px + 2.0, py)
  }

  #[test]
  fn test_click_select_and_isotope_chain() {
    let mut s = session();
    assert_eq!(click_on(&mut s, 62, 50), Some(Coord::new(62, 50)));
    let detail = s.detail().unwrap();
    assert_eq!(detail.title, "Sn-112");
    assert_eq!(detail.half_life, "3.16 s");
    assert_eq!(detail.beta2, "-0.110000");

    s.show_chain(ChainKind::Isotope).unwrap();
    assert_eq!(s.highlight_mode(), HighlightMode::Isotope);
    assert!(s.detail().is_none());

    let plot = s.chain_plot().unwrap();
    assert_eq!(plot.selection, ChainSelection::Isotope(50));
    assert_eq!(plot.title(), "Sn Isotopes (Z=50)");
    let ns: Vec<u32> = plot.members().iter().map(|r| r.n()).collect();
    assert_eq!(ns, vec![60, 62, 64]);

    let sn114 = s.dataset().get(Coord::new(64, 50)).unwrap().clone();
    let cd110 = s.dataset().get(Coord::new(62, 48)).unwrap().clone();
    assert_eq!(s.appearance(&sn114).width, highlight::CHAIN_WIDTH);
    assert_eq!(s.appearance(&cd110).width, highlight::DIMMED_WIDTH);
  }

  #[test]
  fn test_drag_does_not_select() {
    let mut s = session();
    let (px, py) = s.view().unwrap().to_pixel(62.0, 50.0);
    s.pointer_down(px, py, false);
    assert_eq!(s.pointer_up(px + 6.0, py), None);
    assert!(s.selected().is_none());
  }

  #[test]
  fn test_shift_drag_pans() {
    let mut s = session();
    let before = s.view().unwrap().x;
    s.pointer_down(300.0, 300.0, true);
    assert!(s.pointer_move(250.0, 300.0));
    assert!(s.view().unwrap().x.min > before.min);
    assert_eq!(s.pointer_up(250.0, 300.0), None);
  }

  #[test]
  fn test_show_chain_without_selection_is_noop() {
    let mut s = session();
    s.show_chain(ChainKind::Isobar).unwrap();
    assert_eq!(s.highlight_mode(), HighlightMode::None);
    assert!(s.chain_plot().is_none());
  }

  #[test]
  fn test_reset_clears_everything() {
    let mut s = session();
    let home = s.view().unwrap().clone();
    click_on(&mut s, 60, 50);
    s.show_chain(ChainKind::Isotone).unwrap();
    assert!(s.scroll(400.0, 300.0, -1.0));
    assert_ne!(s.view().unwrap(), &home);

    s.reset();
    assert!(s.selected().is_none());
    assert!(s.chain_plot().is_none());
    assert!(s.detail().is_none());
    assert_eq!(s.highlight_mode(), HighlightMode::None);
    assert_eq!(s.view().unwrap(), &home);
    assert!(s.dataset().records().iter().all(|r| s.appearance(r).is_default()));
  }

  #[test]
  fn test_reload_clears_selection() {
    let mut s = session();
    click_on(&mut s, 60, 50);
    s.set_property(Property::Binding);
    assert!(s.selected().is_some());
    s.load_dataset(dataset(), "SLy4");
    assert!(s.selected().is_none());
    assert_eq!(s.property(), Property::Binding);
    assert_eq!(s.interaction(), Some("SLy4"));
  }

  #[test]
  fn test_latest_load_wins() {
    let mut t = LoadTracker::default();
    let first = t.begin();
    let second = t.begin();
    assert!(t.is_loading());
    assert!(!t.finish(first));
    assert!(t.is_loading());
    assert!(t.finish(second));
    assert!(!t.is_loading());
  }

  #[test]
  fn test_resized_copy_fills_export_canvas() {
    let mut s = session();
    assert!(s.scroll(400.0, 300.0, -1.0));
    let on_screen = s.view().unwrap().clone();

    let export = s.resized(1600.0, 1200.0);
    let view = export.view().unwrap();
    assert_eq!(view.rect(), PlotRect::inside(1600.0, 1200.0));
    assert_eq!((view.x, view.y), (on_screen.x, on_screen.y));
    assert_eq!(s.view().unwrap(), &on_screen);

    let (_, bottom) = view.to_pixel(view.x.min, view.y.min);
    assert!((bottom - (1200.0 - MARGINS.3)).abs() < 1e-9);
  }

  #[test]
  fn test_failed_beta_load_keeps_previous_chart() {
    let mut beta = BetaViewState::default();
    let sn = BetaChart::build(&dataset(), "D1M", ChainSelection::Isotope(50), Property::HalfLife);
    assert_eq!(beta.apply(sn).unwrap().members().len(), 3);

    let missing = BetaChart::build(&dataset(), "D1M", ChainSelection::Isotope(99), Property::HalfLife);
    assert!(matches!(beta.apply(missing), Err(DataError::EmptyResult { .. })));
    let unavailable = Err(DataError::unavailable("data/beta_decay/data_X.txt", "not found"));
    assert!(beta.apply(unavailable).is_err());

    let kept = beta.chart.as_ref().unwrap();
    assert_eq!(kept.title(), "Half-life (Z=50, D1M)");
    assert_eq!(kept.rows().len(), 3);
  }

  #[test]
  fn test_failed_strength_load_keeps_previous_spectrum() {
    let mut strength = StrengthViewState::default();
    let fe60 = StrengthQuery::new("Fe60", "GAMTGAMT", "K0");
    let spectrum = StrengthSpectrum {
      query: fe60.clone(),
      points: vec![StrengthPoint { energy: 1.0, strength: 0.5 }],
    };
    assert!(strength.apply(Ok(spectrum)).is_ok());

    let empty = Err(DataError::empty("Ni56"));
    assert!(strength.apply(empty).is_err());
    assert_eq!(strength.query.as_ref(), Some(&fe60));
    assert_eq!(strength.spectrum.as_ref().map(|sp| sp.points.len()), Some(1));
  }
}
