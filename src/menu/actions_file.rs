// src/menu/actions_file.rs

use crate::rendering::export_png;
use crate::state::AppState;
use crate::ui::{self, chart_tab, chart_tab::ChartTab, show_preferences_window};
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, FileChooserAction, FileChooserNative, FileFilter, ResponseType};
use std::cell::RefCell;
use std::rc::Rc;

const EXPORT_MIN_WIDTH: i32 = 1600;
const EXPORT_MIN_HEIGHT: i32 = 1200;

pub fn setup(app: &Application, window: &ApplicationWindow, state: Rc<RefCell<AppState>>, chart_tab: &Rc<ChartTab>) {
  // --- LOAD CHART ---
  let load_action = gtk4::gio::SimpleAction::new("load_chart", None);
  let s = state.clone();
  let tab_weak = Rc::downgrade(chart_tab);
  load_action.connect_activate(move |_, _| {
    if let Some(tab) = tab_weak.upgrade() {
      chart_tab::load_chart(&s, &tab);
    }
  });
  app.add_action(&load_action);

  // --- EXPORT PNG ---
  let export_action = gtk4::gio::SimpleAction::new("export", None);
  let win_weak = window.downgrade();
  let state_weak = Rc::downgrade(&state);
  let tab_weak = Rc::downgrade(chart_tab);
  export_action.connect_activate(move |_, _| {
    let Some(win) = win_weak.upgrade() else { return };
    let dialog = FileChooserNative::new(
      Some("Export Chart"),
      Some(&win),
      FileChooserAction::Save,
      Some("Export"),
      Some("Cancel"),
    );
    let filter_png = FileFilter::new();
    filter_png.set_name(Some("PNG Image (*.png)"));
    filter_png.add_pattern("*.png");
    dialog.add_filter(&filter_png);
    dialog.set_current_name("nuclear_chart.png");

    let state_inner = state_weak.clone();
    let tab_inner = tab_weak.clone();
    dialog.connect_response(move |d, response| {
      if response == ResponseType::Accept {
        let path = d.file().and_then(|f| f.path());
        if let (Some(path), Some(st), Some(tab)) = (path, state_inner.upgrade(), tab_inner.upgrade()) {
          let width = tab.drawing_area.width().max(EXPORT_MIN_WIDTH);
          let height = tab.drawing_area.height().max(EXPORT_MIN_HEIGHT);
          let result = export_png(&st.borrow().chart, &path, width, height);
          match result {
            Ok(()) => log::info!("Chart exported to {}", path.display()),
            Err(e) => {
              log::error!("Export failed: {}", e);
              ui::alert(ui::parent_window(&tab.root).as_ref(), &format!("Export failed: {}", e));
            }
          }
        }
      }
      d.destroy();
    });
    dialog.show();
  });
  app.add_action(&export_action);

  // --- PREFERENCES ---
  let pref_action = gtk4::gio::SimpleAction::new("preferences", None);
  let win_weak = window.downgrade();
  let s = state.clone();
  pref_action.connect_activate(move |_, _| {
    if let Some(win) = win_weak.upgrade() {
      show_preferences_window(&win, s.clone());
    }
  });
  app.add_action(&pref_action);

  // --- QUIT ---
  let quit_action = gtk4::gio::SimpleAction::new("quit", None);
  let app_weak = app.downgrade();
  quit_action.connect_activate(move |_, _| {
    if let Some(app) = app_weak.upgrade() {
      app.quit();
    }
  });
  app.add_action(&quit_action);
}
