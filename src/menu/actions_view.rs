// src/menu/actions_view.rs

use crate::chart::HighlightMode;
use crate::state::AppState;
use crate::ui::chart_tab::{self, ChartTab};
use gtk4::prelude::*;
use gtk4::{glib, Application};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup(app: &Application, state: Rc<RefCell<AppState>>, chart_tab: &Rc<ChartTab>) {
  // 1. Reset View
  let act_reset = gtk4::gio::SimpleAction::new("view_reset", None);
  let s = state.clone();
  let tab_weak = Rc::downgrade(chart_tab);
  act_reset.connect_activate(move |_, _| {
    if let Some(tab) = tab_weak.upgrade() {
      chart_tab::reset_chart(&s, &tab);
    }
  });
  app.add_action(&act_reset);

  // 2. Highlight mode, target is HighlightMode::key()
  let act_highlight = gtk4::gio::SimpleAction::new("highlight", Some(glib::VariantTy::STRING));
  let s = state.clone();
  let tab_weak = Rc::downgrade(chart_tab);
  act_highlight.connect_activate(move |_, param| {
    let Some(mode) = param.and_then(|p| p.str()).and_then(HighlightMode::from_key) else {
      return;
    };
    s.borrow_mut().chart.set_highlight_mode(mode);
    log::debug!("Highlight: {}", mode.display_name());
    if let Some(tab) = tab_weak.upgrade() {
      tab.sync(&s);
    }
  });
  app.add_action(&act_highlight);

  // 3. Close chain plot
  let act_close = gtk4::gio::SimpleAction::new("close_chain", None);
  let tab_weak = Rc::downgrade(chart_tab);
  act_close.connect_activate(move |_, _| {
    state.borrow_mut().chart.close_chain_plot();
    if let Some(tab) = tab_weak.upgrade() {
      tab.sync(&state);
    }
  });
  app.add_action(&act_close);
}
