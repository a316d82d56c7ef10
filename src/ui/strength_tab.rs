// src/ui/strength_tab.rs

use crate::io;
use crate::model::strength::{K_COMPONENTS, TRANSITION_CODES};
use crate::model::StrengthQuery;
use crate::rendering::plots::{self, PlotGeometry};
use crate::state::AppState;
use crate::ui;
use crate::views;

use gtk4::prelude::*;
use gtk4::{Button, DropDown, Label, Orientation, Spinner};
use plotters::prelude::IntoDrawingArea;
use plotters_cairo::CairoBackend;
use std::cell::RefCell;
use std::rc::Rc;

pub struct StrengthTab {
  pub root: gtk4::Box,
  drawing_area: gtk4::DrawingArea,
  spinner: Spinner,
  nucleus: DropDown,
  transition: DropDown,
  k_component: DropDown,
  geometry: RefCell<Option<PlotGeometry>>,
}

impl StrengthTab {
  fn query(&self, nuclei: &[String]) -> Option<StrengthQuery> {
    let nucleus = nuclei.get(self.nucleus.selected() as usize)?;
    let transition = TRANSITION_CODES.get(self.transition.selected() as usize)?;
    let k = K_COMPONENTS.get(self.k_component.selected() as usize)?;
    Some(StrengthQuery::new(nucleus, transition, k))
  }
}

pub fn build(state: Rc<RefCell<AppState>>) -> Rc<StrengthTab> {
  let root = gtk4::Box::new(Orientation::Vertical, 8);
  root.set_margin_top(10);
  root.set_margin_bottom(10);
  root.set_margin_start(10);
  root.set_margin_end(10);

  let nuclei = {
    let source = state.borrow().source();
    io::list_nuclei(&source)
  };
  log::debug!("{} nuclei offered for strength functions", nuclei.len());
  let names: Vec<&str> = nuclei.iter().map(String::as_str).collect();
  let nucleus = DropDown::from_strings(&names);
  nucleus.set_enable_search(true);

  // Labels follow the code order of TRANSITION_CODES / K_COMPONENTS
  let transition_labels: Vec<String> = TRANSITION_CODES
    .iter()
    .map(|code| StrengthQuery::new("", code, "K0").transition_label().to_string())
    .collect();
  let transition_refs: Vec<&str> = transition_labels.iter().map(String::as_str).collect();
  let transition = DropDown::from_strings(&transition_refs);

  let k_labels: Vec<String> = K_COMPONENTS
    .iter()
    .map(|k| StrengthQuery::new("", "", k).k_label())
    .collect();
  let k_refs: Vec<&str> = k_labels.iter().map(String::as_str).collect();
  let k_component = DropDown::from_strings(&k_refs);

  let btn_load = Button::with_label("Load Spectrum");
  let spinner = Spinner::new();

  let controls = gtk4::Box::new(Orientation::Horizontal, 12);
  controls.append(&Label::new(Some("Nucleus:")));
  controls.append(&nucleus);
  controls.append(&Label::new(Some("Transition:")));
  controls.append(&transition);
  controls.append(&Label::new(Some("K:")));
  controls.append(&k_component);
  controls.append(&btn_load);
  controls.append(&spinner);
  root.append(&controls);

  let drawing_area = gtk4::DrawingArea::new();
  drawing_area.set_hexpand(true);
  drawing_area.set_vexpand(true);
  root.append(&drawing_area);

  state.borrow_mut().strength.nuclei = nuclei;

  let tab = Rc::new(StrengthTab {
    root,
    drawing_area,
    spinner,
    nucleus,
    transition,
    k_component,
    geometry: RefCell::new(None),
  });

  let s = state.clone();
  let t = Rc::downgrade(&tab);
  tab.drawing_area.set_draw_func(move |_, cr, w, h| {
    let Ok(backend) = CairoBackend::new(cr, (w as u32, h as u32)) else {
      return;
    };
    let area = backend.into_drawing_area();
    let st = s.borrow();
    let drawn = match st.strength.spectrum.as_ref() {
      Some(spectrum) => plots::draw_strength_chart(&area, spectrum).map(Some),
      None => plots::draw_message(&area, "Pick a nucleus and press Load Spectrum.").map(|_| None),
    };
    match (drawn, t.upgrade()) {
      (Ok(geometry), Some(tab)) => *tab.geometry.borrow_mut() = geometry,
      (Err(e), _) => log::debug!("Strength chart draw failed: {}", e),
      _ => {}
    }
  });

  let motion = gtk4::EventControllerMotion::new();
  let s = state.clone();
  let t = Rc::downgrade(&tab);
  motion.connect_motion(move |_, x, _| {
    let Some(tab) = t.upgrade() else { return };
    let st = s.borrow();
    let text = st.strength.spectrum.as_ref().and_then(|spectrum| {
      let energy = tab.geometry.borrow().as_ref()?.x_value(x)?;
      let point = spectrum.nearest(energy)?;
      Some(format!(
        "E = {:.2} MeV\n{}",
        point.energy,
        views::strength_tooltip(point.strength)
      ))
    });
    tab.drawing_area.set_tooltip_text(text.as_deref());
  });
  tab.drawing_area.add_controller(motion);

  let t = Rc::downgrade(&tab);
  btn_load.connect_clicked(move |_| {
    if let Some(tab) = t.upgrade() {
      load_spectrum(&state, &tab);
    }
  });

  tab
}

fn load_spectrum(state: &Rc<RefCell<AppState>>, tab: &Rc<StrengthTab>) {
  let (query, token, source) = {
    let mut st = state.borrow_mut();
    let Some(query) = tab.query(&st.strength.nuclei) else {
      drop(st);
      ui::alert(ui::parent_window(&tab.root).as_ref(), "Select a nucleus first");
      return;
    };
    (query, st.strength.loads.begin(), st.source())
  };
  tab.spinner.start();
  log::info!("Loading {}...", query.file_name());

  let s = state.clone();
  let t = tab.clone();
  ui::spawn_load(
    move || io::load_strength(&source, &query),
    move |result| {
      if !s.borrow_mut().strength.loads.finish(token) {
        return;
      }
      t.spinner.stop();
      let applied = s.borrow_mut().strength.apply(result).map(|spectrum| {
        log::info!("Plotted {} points from {}", spectrum.points.len(), spectrum.query.file_name());
      });
      match applied {
        Ok(_) => t.drawing_area.queue_draw(),
        Err(e) => ui::report_error(&t.root, &e),
      }
    },
  );
}
