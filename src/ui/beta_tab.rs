// src/ui/beta_tab.rs

use crate::chart::Property;
use crate::io;
use crate::model::{nuclide::TABLE_HEADERS, ChainKind};
use crate::rendering::plots::{self, PlotGeometry};
use crate::state::AppState;
use crate::ui;
use crate::views::{self, BetaChart};

use gtk4::prelude::*;
use gtk4::{Align, Button, DropDown, Entry, Grid, Label, Orientation, PolicyType, ScrolledWindow, Spinner};
use plotters::prelude::IntoDrawingArea;
use plotters_cairo::CairoBackend;
use std::cell::RefCell;
use std::rc::Rc;

pub struct BetaTab {
  pub root: gtk4::Box,
  drawing_area: gtk4::DrawingArea,
  table: Grid,
  spinner: Spinner,
  interaction: DropDown,
  chain_kind: DropDown,
  value: Entry,
  property: DropDown,
  interactions: Vec<String>,
  geometry: RefCell<Option<PlotGeometry>>,
}

pub fn build(state: Rc<RefCell<AppState>>) -> Rc<BetaTab> {
  let root = gtk4::Box::new(Orientation::Vertical, 8);
  root.set_margin_top(10);
  root.set_margin_bottom(10);
  root.set_margin_start(10);
  root.set_margin_end(10);

  let (interactions, default_interaction) = {
    let st = state.borrow();
    (
      io::list_interactions(&st.source(), &st.config.interactions),
      st.config.default_interaction.clone(),
    )
  };
  let names: Vec<&str> = interactions.iter().map(String::as_str).collect();
  let interaction = DropDown::from_strings(&names);
  if let Some(i) = interactions.iter().position(|s| *s == default_interaction) {
    interaction.set_selected(i as u32);
  }

  let kinds: Vec<&str> = ChainKind::ALL.iter().map(|k| k.label()).collect();
  let chain_kind = DropDown::from_strings(&kinds);

  let value = Entry::new();
  value.set_placeholder_text(Some("e.g. 50"));
  value.set_width_chars(6);

  let property_names: Vec<&str> = Property::ALL.iter().map(|p| p.display_name()).collect();
  let property = DropDown::from_strings(&property_names);

  let btn_load = Button::with_label("Plot Chain");
  let spinner = Spinner::new();

  let controls = gtk4::Box::new(Orientation::Horizontal, 12);
  for (text, widget) in [
    ("Interaction:", interaction.upcast_ref::<gtk4::Widget>()),
    ("Chain:", chain_kind.upcast_ref()),
    ("Value:", value.upcast_ref()),
    ("Property:", property.upcast_ref()),
  ] {
    controls.append(&Label::new(Some(text)));
    controls.append(widget);
  }
  controls.append(&btn_load);
  controls.append(&spinner);
  root.append(&controls);

  let drawing_area = gtk4::DrawingArea::new();
  drawing_area.set_hexpand(true);
  drawing_area.set_vexpand(true);
  drawing_area.set_content_height(360);
  root.append(&drawing_area);

  let table = Grid::new();
  table.set_column_spacing(18);
  table.set_row_spacing(4);
  let scroll = ScrolledWindow::builder()
    .hscrollbar_policy(PolicyType::Automatic)
    .vscrollbar_policy(PolicyType::Automatic)
    .min_content_height(180)
    .child(&table)
    .build();
  root.append(&scroll);

  let tab = Rc::new(BetaTab {
    root,
    drawing_area,
    table,
    spinner,
    interaction,
    chain_kind,
    value,
    property,
    interactions,
    geometry: RefCell::new(None),
  });
  fill_table(&tab.table, &[]);

  let s = state.clone();
  let t = Rc::downgrade(&tab);
  tab.drawing_area.set_draw_func(move |_, cr, w, h| {
    let Ok(backend) = CairoBackend::new(cr, (w as u32, h as u32)) else {
      return;
    };
    let area = backend.into_drawing_area();
    let st = s.borrow();
    let drawn = match st.beta.chart.as_ref() {
      Some(chart) => plots::draw_beta_chart(&area, chart).map(Some),
      None => plots::draw_message(&area, "Choose a chain and press Plot Chain.").map(|_| None),
    };
    match (drawn, t.upgrade()) {
      (Ok(geometry), Some(tab)) => *tab.geometry.borrow_mut() = geometry,
      (Err(e), _) => log::debug!("Beta chart draw failed: {}", e),
      _ => {}
    }
  });

  let motion = gtk4::EventControllerMotion::new();
  let s = state.clone();
  let t = Rc::downgrade(&tab);
  motion.connect_motion(move |_, x, _| {
    let Some(tab) = t.upgrade() else { return };
    let st = s.borrow();
    let text = st.beta.chart.as_ref().and_then(|chart| {
      let value = tab.geometry.borrow().as_ref()?.x_value(x)?;
      let [title, line] = chart.tooltip(chart.nearest_index(value)?)?;
      Some(format!("{}\n{}", title, line))
    });
    tab.drawing_area.set_tooltip_text(text.as_deref());
  });
  tab.drawing_area.add_controller(motion);

  let s = state.clone();
  let t = Rc::downgrade(&tab);
  btn_load.connect_clicked(move |_| {
    if let Some(tab) = t.upgrade() {
      load_chain(&s, &tab);
    }
  });

  let t = Rc::downgrade(&tab);
  tab.value.connect_activate(move |_| {
    if let Some(tab) = t.upgrade() {
      load_chain(&state, &tab);
    }
  });

  tab
}

fn load_chain(state: &Rc<RefCell<AppState>>, tab: &Rc<BetaTab>) {
  let Some(interaction) = tab.interactions.get(tab.interaction.selected() as usize).cloned() else {
    ui::alert(ui::parent_window(&tab.root).as_ref(), "No interaction available");
    return;
  };
  let kind = ChainKind::ALL
    .get(tab.chain_kind.selected() as usize)
    .copied()
    .unwrap_or(ChainKind::Isotope);
  let property = Property::ALL
    .get(tab.property.selected() as usize)
    .copied()
    .unwrap_or(Property::HalfLife);

  let selection = match views::parse_chain_value(kind, &tab.value.text()) {
    Ok(sel) => sel,
    Err(e) => {
      ui::report_error(&tab.root, &e);
      return;
    }
  };

  let (token, source) = {
    let mut st = state.borrow_mut();
    (st.beta.loads.begin(), st.source())
  };
  tab.spinner.start();
  log::info!("Loading {} for {}...", selection.title(), interaction);

  let s = state.clone();
  let t = tab.clone();
  let name = interaction.clone();
  ui::spawn_load(
    move || io::load_dataset(&source, &interaction),
    move |result| {
      if !s.borrow_mut().beta.loads.finish(token) {
        return;
      }
      t.spinner.stop();
      let built = result.and_then(|dataset| BetaChart::build(&dataset, &name, selection, property));
      let applied = s.borrow_mut().beta.apply(built).map(|chart| {
        log::info!("Plotted {} nuclei: {}", chart.members().len(), chart.title());
        chart.rows()
      });
      match applied {
        Ok(rows) => {
          fill_table(&t.table, &rows);
          t.drawing_area.queue_draw();
        }
        Err(e) => ui::report_error(&t.root, &e),
      }
    },
  );
}

fn fill_table(table: &Grid, rows: &[[String; 9]]) {
  while let Some(child) = table.first_child() {
    table.remove(&child);
  }
  for (col, header) in TABLE_HEADERS.iter().enumerate() {
    let label = Label::new(None);
    label.set_markup(&format!("<b>{}</b>", header));
    label.set_halign(Align::End);
    table.attach(&label, col as i32, 0, 1, 1);
  }
  for (row, cells) in rows.iter().enumerate() {
    for (col, cell) in cells.iter().enumerate() {
      let label = Label::new(Some(cell));
      label.set_halign(if col == 0 { Align::Start } else { Align::End });
      label.set_selectable(true);
      table.attach(&label, col as i32, row as i32 + 1, 1, 1);
    }
  }
}
