use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{Application, ApplicationWindow, Frame, Label, Notebook, Orientation, Paned, ScrolledWindow, TextView};
use std::cell::RefCell;
use std::rc::Rc;

use nucview::config::Config;
use nucview::menu;
use nucview::state::AppState;
use nucview::ui::{beta_tab, chart_tab, strength_tab};
use nucview::utils::logger;

fn main() {
  let app = Application::builder()
    .application_id("org.nucview.nucview")
    .build();

  app.connect_activate(build_ui);
  app.run();
}

fn build_ui(app: &Application) {
  let (config, config_msg) = Config::load();
  let state = Rc::new(RefCell::new(AppState::new(config)));

  let window = ApplicationWindow::builder()
    .application(app)
    .title("NucView - Nuclear Data Viewer")
    .default_width(1200)
    .default_height(900)
    .build();

  // 1. TOP LEVEL: Vertical Box (Menu on top, Main Content below)
  let root_vbox = GtkBox::new(Orientation::Vertical, 0);
  window.set_child(Some(&root_vbox));

  // Console
  let info_frame = Frame::new(None);
  let console_view = TextView::builder()
    .editable(false)
    .cursor_visible(false)
    .monospace(true)
    .left_margin(10)
    .right_margin(10)
    .top_margin(10)
    .bottom_margin(10)
    .build();
  let scroll_win = ScrolledWindow::builder()
    .min_content_height(120)
    .child(&console_view)
    .build();
  info_frame.set_child(Some(&scroll_win));

  if let Err(e) = logger::init(&console_view) {
    eprintln!("Logger already installed: {}", e);
  }
  log::info!("{}", config_msg);

  // 2. MAIN CONTENT: one tab per view
  let chart = chart_tab::build(state.clone());
  let beta = beta_tab::build(state.clone());
  let strength = strength_tab::build(state.clone());

  let notebook = Notebook::new();
  notebook.append_page(&chart.root, Some(&Label::new(Some("Nuclear Chart"))));
  notebook.append_page(&beta.root, Some(&Label::new(Some("Beta Decay"))));
  notebook.append_page(&strength.root, Some(&Label::new(Some("Strength Functions"))));

  let paned = Paned::new(Orientation::Vertical);
  paned.set_start_child(Some(&notebook));
  paned.set_end_child(Some(&info_frame));
  paned.set_resize_start_child(true);
  paned.set_resize_end_child(false);
  paned.set_vexpand(true);

  // 3. Menu Bar
  let menu_bar = menu::build_menu_and_actions(app, &window, state.clone(), &chart);

  root_vbox.append(&menu_bar);
  root_vbox.append(&paned);

  window.present();

  // Initial chart for the default interaction
  chart_tab::load_chart(&state, &chart);
}
