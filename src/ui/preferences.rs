// src/ui/preferences.rs

use crate::chart::Property;
use crate::state::AppState;
use gtk4::{self as gtk, prelude::*};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

pub fn show_preferences_window(parent: &gtk::ApplicationWindow, state: Rc<RefCell<AppState>>) {
  let window = gtk::Window::builder()
    .title("Preferences")
    .transient_for(parent)
    .modal(true)
    .default_width(480)
    .default_height(360)
    .resizable(false)
    .build();

  let main_vbox = gtk::Box::new(gtk::Orientation::Vertical, 0);
  let notebook = gtk::Notebook::new();
  notebook.set_vexpand(true);

  let data_tab = build_data_tab(state.clone());
  notebook.append_page(&data_tab, Some(&gtk::Label::new(Some("Data"))));

  let chart_tab = build_chart_tab(state);
  notebook.append_page(&chart_tab, Some(&gtk::Label::new(Some("Chart"))));

  main_vbox.append(&notebook);

  let footer = gtk::Box::new(gtk::Orientation::Horizontal, 10);
  footer.set_margin_top(10);
  footer.set_margin_bottom(10);
  footer.set_margin_end(10);
  footer.set_halign(gtk::Align::End);

  let note = gtk::Label::new(Some("Data settings apply to the next load."));
  note.add_css_class("dim-label");
  footer.append(&note);

  let btn_close = gtk::Button::with_label("Close");
  let win_clone = window.clone();
  btn_close.connect_clicked(move |_| win_clone.close());
  footer.append(&btn_close);
  main_vbox.append(&footer);

  window.set_child(Some(&main_vbox));
  window.present();
}

fn page() -> gtk::Box {
  let vbox = gtk::Box::new(gtk::Orientation::Vertical, 12);
  vbox.set_margin_top(20);
  vbox.set_margin_bottom(20);
  vbox.set_margin_start(20);
  vbox.set_margin_end(20);
  vbox
}

fn heading(text: &str) -> gtk::Label {
  let label = gtk::Label::new(Some(text));
  label.set_halign(gtk::Align::Start);
  label
}

fn build_data_tab(state: Rc<RefCell<AppState>>) -> gtk::Box {
  let vbox = page();

  // Data directory
  vbox.append(&heading("Data Directory:"));
  let root_entry = gtk::Entry::new();
  root_entry.set_text(&state.borrow().config.data_root.to_string_lossy());
  let s = state.clone();
  root_entry.connect_activate(move |e| {
    let text = e.text();
    let mut st = s.borrow_mut();
    st.config.data_root = PathBuf::from(text.trim());
    st.save_config();
  });
  vbox.append(&root_entry);

  // Default interaction
  vbox.append(&gtk::Separator::new(gtk::Orientation::Horizontal));
  vbox.append(&heading("Default Interaction:"));
  let interaction_entry = gtk::Entry::new();
  interaction_entry.set_text(&state.borrow().config.default_interaction);
  let s = state.clone();
  interaction_entry.connect_activate(move |e| {
    let text = e.text().trim().to_string();
    if text.is_empty() {
      return;
    }
    let mut st = s.borrow_mut();
    if !st.config.interactions.contains(&text) {
      st.config.interactions.push(text.clone());
    }
    st.config.default_interaction = text;
    st.save_config();
  });
  vbox.append(&interaction_entry);

  let hint = gtk::Label::new(Some("Press Enter to apply."));
  hint.set_halign(gtk::Align::Start);
  hint.add_css_class("dim-label");
  vbox.append(&hint);

  vbox
}

fn build_chart_tab(state: Rc<RefCell<AppState>>) -> gtk::Box {
  let vbox = page();

  // Default coloring
  vbox.append(&heading("Default Color Property:"));
  let names: Vec<&str> = Property::ALL.iter().map(|p| p.display_name()).collect();
  let property_dd = gtk::DropDown::from_strings(&names);
  let current = state.borrow().config.default_property;
  property_dd.set_selected(Property::ALL.iter().position(|p| *p == current).unwrap_or(0) as u32);
  let s = state.clone();
  property_dd.connect_selected_notify(move |d| {
    if let Some(p) = Property::ALL.get(d.selected() as usize) {
      let mut st = s.borrow_mut();
      st.config.default_property = *p;
      st.save_config();
    }
  });
  vbox.append(&property_dd);

  // Zoom step
  vbox.append(&gtk::Separator::new(gtk::Orientation::Horizontal));
  vbox.append(&heading("Zoom Step per Wheel Notch:"));
  let zoom_scale = gtk::Scale::with_range(gtk::Orientation::Horizontal, 0.02, 0.5, 0.01);
  zoom_scale.set_value(state.borrow().config.zoom_step);
  zoom_scale.set_draw_value(true);
  zoom_scale.set_digits(2);
  zoom_scale.set_value_pos(gtk::PositionType::Right);
  zoom_scale.connect_value_changed(move |sc| {
    let mut st = state.borrow_mut();
    st.config.zoom_step = sc.value();
    st.save_config();
  });
  vbox.append(&zoom_scale);

  vbox
}
