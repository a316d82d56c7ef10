// src/menu/mod.rs

use crate::chart::HighlightMode;
use crate::state::AppState;
use crate::ui::chart_tab::ChartTab;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow};
use std::cell::RefCell;
use std::rc::Rc;

pub mod actions_file;
pub mod actions_help;
pub mod actions_view;

pub fn build_menu_and_actions(
  app: &Application,
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  chart_tab: &Rc<ChartTab>,
) -> gtk4::Box {
  // Register Actions
  actions_file::setup(app, window, state.clone(), chart_tab);
  actions_view::setup(app, state, chart_tab);
  actions_help::setup(app, window);

  // Keyboard Shortcuts
  app.set_accels_for_action("app.load_chart", &["<Primary>l"]);
  app.set_accels_for_action("app.export", &["<Primary>e"]);
  app.set_accels_for_action("app.preferences", &["<Primary>p"]);
  app.set_accels_for_action("app.quit", &["<Primary>q"]);
  app.set_accels_for_action("app.view_reset", &["<Primary>r"]);
  app.set_accels_for_action("app.close_chain", &["<Primary>w"]);

  // --- BUILD MENU BAR ---
  let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
  let root_model = gtk4::gio::Menu::new();

  // --- FILE MENU ---
  let file_menu = gtk4::gio::Menu::new();
  file_menu.append(Some("Load Chart"), Some("app.load_chart"));
  file_menu.append(Some("Export Chart as PNG..."), Some("app.export"));
  file_menu.append(Some("Preferences..."), Some("app.preferences"));
  file_menu.append(Some("Quit"), Some("app.quit"));
  root_model.append_submenu(Some("File"), &file_menu);

  // --- VIEW MENU ---
  let view_menu = gtk4::gio::Menu::new();
  view_menu.append(Some("Reset View"), Some("app.view_reset"));

  let highlight_submenu = gtk4::gio::Menu::new();
  for mode in HighlightMode::ALL {
    let target = format!("app.highlight::{}", mode.key());
    highlight_submenu.append(Some(mode.display_name()), Some(&target));
  }
  view_menu.append_submenu(Some("Highlight"), &highlight_submenu);

  view_menu.append(Some("Close Chain Plot"), Some("app.close_chain"));
  root_model.append_submenu(Some("View"), &view_menu);

  // --- HELP MENU ---
  let help_menu = gtk4::gio::Menu::new();
  help_menu.append(Some("Controls & Shortcuts"), Some("app.help_controls"));
  help_menu.append(Some("About"), Some("app.about"));
  root_model.append_submenu(Some("Help"), &help_menu);

  let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
  menu_bar.append(&popover_bar);

  menu_bar
}
