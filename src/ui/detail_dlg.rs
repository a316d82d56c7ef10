// src/ui/detail_dlg.rs

use crate::model::ChainKind;
use crate::state::AppState;
use crate::ui::{self, chart_tab::ChartTab};
use gtk4::prelude::*;
use gtk4::{Align, Dialog, Grid, Label, ResponseType};
use std::cell::RefCell;
use std::rc::Rc;

const ISOTOPES: u16 = 1;
const ISOTONES: u16 = 2;
const ISOBARS: u16 = 3;

/// Shows the selected nucleus with buttons for its three chains.
pub fn show(state: Rc<RefCell<AppState>>, tab: &Rc<ChartTab>) {
  let Some(detail) = state.borrow().chart.detail() else {
    return;
  };

  let parent = ui::parent_window(&tab.root);
  let dialog = Dialog::builder()
    .title(detail.title.as_str())
    .modal(true)
    .default_width(320)
    .build();
  dialog.set_transient_for(parent.as_ref());

  let content = dialog.content_area();
  content.set_margin_top(20);
  content.set_margin_bottom(20);
  content.set_margin_start(20);
  content.set_margin_end(20);

  let heading = Label::new(None);
  heading.set_markup(&format!("<b><big>{}</big></b>", detail.title));
  heading.set_halign(Align::Start);
  content.append(&heading);

  let grid = Grid::new();
  grid.set_column_spacing(16);
  grid.set_row_spacing(6);
  grid.set_margin_top(10);
  for (row, (name, value)) in detail.fields().iter().enumerate() {
    let k = Label::new(Some(name));
    k.set_halign(Align::Start);
    k.add_css_class("dim-label");
    let v = Label::new(Some(value));
    v.set_halign(Align::End);
    v.set_selectable(true);
    grid.attach(&k, 0, row as i32, 1, 1);
    grid.attach(&v, 1, row as i32, 1, 1);
  }
  content.append(&grid);

  dialog.add_button("Show Isotopes", ResponseType::Other(ISOTOPES));
  dialog.add_button("Show Isotones", ResponseType::Other(ISOTONES));
  dialog.add_button("Show Isobars", ResponseType::Other(ISOBARS));
  dialog.add_button("Close", ResponseType::Close);

  let tab_weak = Rc::downgrade(tab);
  dialog.connect_response(move |d, resp| {
    let kind = match resp {
      ResponseType::Other(ISOTOPES) => Some(ChainKind::Isotope),
      ResponseType::Other(ISOTONES) => Some(ChainKind::Isotone),
      ResponseType::Other(ISOBARS) => Some(ChainKind::Isobar),
      _ => None,
    };

    let result = match kind {
      Some(k) => {
        log::debug!("Showing {}", k.label());
        state.borrow_mut().chart.show_chain(k)
      }
      None => {
        state.borrow_mut().chart.close_detail();
        Ok(())
      }
    };
    d.close();

    if let Some(tab) = tab_weak.upgrade() {
      tab.sync(&state);
      if let Err(e) = result {
        ui::report_error(&tab.root, &e);
      }
    }
  });

  dialog.present();
}
