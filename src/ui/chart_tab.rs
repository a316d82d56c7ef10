// src/ui/chart_tab.rs

use crate::chart::{HighlightMode, PlotRect, Property};
use crate::io;
use crate::rendering::{self, plots};
use crate::state::AppState;
use crate::ui::{self, interactions};

use gtk4::prelude::*;
use gtk4::{Align, Button, DropDown, Label, Orientation, Revealer, RevealerTransitionType, Spinner};
use plotters::prelude::IntoDrawingArea;
use plotters_cairo::CairoBackend;
use std::cell::RefCell;
use std::rc::Rc;

/// Widgets of the nuclear chart tab that other parts of the UI poke at.
pub struct ChartTab {
  pub root: gtk4::Box,
  pub drawing_area: gtk4::DrawingArea,
  pub chain_area: gtk4::DrawingArea,
  pub chain_revealer: Revealer,
  pub spinner: Spinner,
  pub interaction: DropDown,
  pub highlight: DropDown,
  interactions: Vec<String>,
  /// Last drawn x geometry of the chain plot, for tooltips.
  chain_geometry: RefCell<Option<plots::PlotGeometry>>,
}

impl ChartTab {
  pub fn selected_interaction(&self) -> Option<String> {
    self.interactions.get(self.interaction.selected() as usize).cloned()
  }

  /// Brings the highlight selector and chain plot in line with the session.
  /// Must be called without an outstanding borrow of the state.
  pub fn sync(&self, state: &Rc<RefCell<AppState>>) {
    let (mode, has_plot) = {
      let st = state.borrow();
      (st.chart.highlight_mode(), st.chart.chain_plot().is_some())
    };
    let index = HighlightMode::ALL.iter().position(|m| *m == mode).unwrap_or(0) as u32;
    if self.highlight.selected() != index {
      self.highlight.set_selected(index);
    }
    self.chain_revealer.set_reveal_child(has_plot);
    self.drawing_area.queue_draw();
    self.chain_area.queue_draw();
  }
}

fn labeled(text: &str, widget: &impl IsA<gtk4::Widget>) -> gtk4::Box {
  let b = gtk4::Box::new(Orientation::Horizontal, 6);
  b.append(&Label::new(Some(text)));
  b.append(widget);
  b
}

pub fn build(state: Rc<RefCell<AppState>>) -> Rc<ChartTab> {
  let root = gtk4::Box::new(Orientation::Vertical, 8);
  root.set_margin_top(10);
  root.set_margin_bottom(10);
  root.set_margin_start(10);
  root.set_margin_end(10);

  // --- Controls ---
  let (interactions, default_interaction, property) = {
    let st = state.borrow();
    (
      io::list_interactions(&st.source(), &st.config.interactions),
      st.config.default_interaction.clone(),
      st.chart.property(),
    )
  };
  let names: Vec<&str> = interactions.iter().map(String::as_str).collect();
  let interaction = DropDown::from_strings(&names);
  if let Some(i) = interactions.iter().position(|s| *s == default_interaction) {
    interaction.set_selected(i as u32);
  }

  let property_names: Vec<&str> = Property::ALL.iter().map(|p| p.display_name()).collect();
  let property_dd = DropDown::from_strings(&property_names);
  property_dd.set_selected(Property::ALL.iter().position(|p| *p == property).unwrap_or(0) as u32);

  let highlight_names: Vec<&str> = HighlightMode::ALL.iter().map(|m| m.display_name()).collect();
  let highlight = DropDown::from_strings(&highlight_names);

  let btn_load = Button::with_label("Load Chart");
  let btn_reset = Button::with_label("Reset View");
  let spinner = Spinner::new();

  let controls = gtk4::Box::new(Orientation::Horizontal, 12);
  controls.append(&labeled("Interaction:", &interaction));
  controls.append(&labeled("Color by:", &property_dd));
  controls.append(&labeled("Highlight:", &highlight));
  controls.append(&btn_load);
  controls.append(&btn_reset);
  controls.append(&spinner);
  root.append(&controls);

  let hint = Label::new(Some("Click a nucleus for details · scroll to zoom · Shift+drag to pan"));
  hint.set_halign(Align::Start);
  hint.add_css_class("dim-label");
  root.append(&hint);

  // --- Chart ---
  let drawing_area = gtk4::DrawingArea::new();
  drawing_area.set_hexpand(true);
  drawing_area.set_vexpand(true);
  drawing_area.set_content_height(480);
  root.append(&drawing_area);

  // --- Chain plot (hidden until a chain is requested) ---
  let chain_area = gtk4::DrawingArea::new();
  chain_area.set_hexpand(true);
  chain_area.set_content_height(320);
  let chain_box = gtk4::Box::new(Orientation::Vertical, 4);
  let btn_close_chain = Button::with_label("Close Chain Plot");
  btn_close_chain.set_halign(Align::End);
  chain_box.append(&btn_close_chain);
  chain_box.append(&chain_area);
  let chain_revealer = Revealer::builder()
    .transition_type(RevealerTransitionType::SlideDown)
    .child(&chain_box)
    .reveal_child(false)
    .build();
  root.append(&chain_revealer);

  let tab = Rc::new(ChartTab {
    root,
    drawing_area,
    chain_area,
    chain_revealer,
    spinner,
    interaction,
    highlight,
    interactions,
    chain_geometry: RefCell::new(None),
  });

  // Draw functions
  let s = state.clone();
  tab.drawing_area.set_draw_func(move |_, cr, w, h| {
    if let Err(e) = rendering::draw_chart(cr, &s.borrow().chart, w as f64, h as f64) {
      log::debug!("Chart draw failed: {}", e);
    }
  });

  let s = state.clone();
  tab.drawing_area.connect_resize(move |_, w, h| {
    s.borrow_mut().chart.set_plot_rect(PlotRect::inside(w as f64, h as f64));
  });

  let s = state.clone();
  let t = Rc::downgrade(&tab);
  tab.chain_area.set_draw_func(move |_, cr, w, h| {
    let Ok(backend) = CairoBackend::new(cr, (w as u32, h as u32)) else {
      return;
    };
    let root_area = backend.into_drawing_area();
    let st = s.borrow();
    let drawn = match st.chart.chain_plot() {
      Some(plot) => plots::draw_chain_plot(&root_area, plot).map(Some),
      None => plots::draw_message(&root_area, "Select a nucleus and pick a chain.").map(|_| None),
    };
    match (drawn, t.upgrade()) {
      (Ok(geometry), Some(tab)) => *tab.chain_geometry.borrow_mut() = geometry,
      (Err(e), _) => log::debug!("Chain plot draw failed: {}", e),
      _ => {}
    }
  });

  // Chain plot tooltip
  let motion = gtk4::EventControllerMotion::new();
  let s = state.clone();
  let t = Rc::downgrade(&tab);
  motion.connect_motion(move |_, x, _| {
    let Some(tab) = t.upgrade() else { return };
    let st = s.borrow();
    let text = st.chart.chain_plot().and_then(|plot| {
      let geometry = tab.chain_geometry.borrow();
      let value = geometry.as_ref()?.x_value(x)?;
      let tip = plot.tooltip(plot.nearest_index(value)?)?;
      Some(format!("{}\n{}", tip.title, tip.lines.join("\n")))
    });
    tab.chain_area.set_tooltip_text(text.as_deref());
  });
  tab.chain_area.add_controller(motion);

  // Selectors
  let s = state.clone();
  let t = Rc::downgrade(&tab);
  property_dd.connect_selected_notify(move |dd| {
    if let Some(p) = Property::ALL.get(dd.selected() as usize) {
      s.borrow_mut().chart.set_property(*p);
      log::debug!("Coloring by {}", p.display_name());
      if let Some(tab) = t.upgrade() {
        tab.drawing_area.queue_draw();
      }
    }
  });

  let s = state.clone();
  let t = Rc::downgrade(&tab);
  tab.highlight.connect_selected_notify(move |dd| {
    if let Some(m) = HighlightMode::ALL.get(dd.selected() as usize) {
      s.borrow_mut().chart.set_highlight_mode(*m);
      if let Some(tab) = t.upgrade() {
        tab.drawing_area.queue_draw();
      }
    }
  });

  // Buttons
  let s = state.clone();
  let t = Rc::downgrade(&tab);
  btn_load.connect_clicked(move |_| {
    if let Some(tab) = t.upgrade() {
      load_chart(&s, &tab);
    }
  });

  let s = state.clone();
  let t = Rc::downgrade(&tab);
  btn_reset.connect_clicked(move |_| {
    if let Some(tab) = t.upgrade() {
      reset_chart(&s, &tab);
    }
  });

  let s = state.clone();
  let t = Rc::downgrade(&tab);
  btn_close_chain.connect_clicked(move |_| {
    s.borrow_mut().chart.close_chain_plot();
    if let Some(tab) = t.upgrade() {
      tab.sync(&s);
    }
  });

  interactions::setup_interactions(state, &tab);
  tab
}

/// Loads the selected interaction in the background and rebuilds the chart.
/// A newer load supersedes this one.
pub fn load_chart(state: &Rc<RefCell<AppState>>, tab: &Rc<ChartTab>) {
  let Some(interaction) = tab.selected_interaction() else {
    ui::alert(ui::parent_window(&tab.root).as_ref(), "No interaction available");
    return;
  };
  let (token, source) = {
    let mut st = state.borrow_mut();
    (st.chart_loads.begin(), st.source())
  };
  tab.spinner.start();
  log::info!("Loading {} chart data...", interaction);

  let s = state.clone();
  let t = tab.clone();
  let name = interaction.clone();
  ui::spawn_load(
    move || io::load_dataset(&source, &interaction),
    move |result| {
      if !s.borrow_mut().chart_loads.finish(token) {
        return;
      }
      t.spinner.stop();
      match result {
        Ok(dataset) => {
          s.borrow_mut().chart.load_dataset(dataset, &name);
          t.sync(&s);
        }
        Err(e) => ui::report_error(&t.root, &e),
      }
    },
  );
}

pub fn reset_chart(state: &Rc<RefCell<AppState>>, tab: &ChartTab) {
  state.borrow_mut().chart.reset();
  log::debug!("Chart reset");
  tab.sync(state);
}
