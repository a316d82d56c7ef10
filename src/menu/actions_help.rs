// src/menu/actions_help.rs

use gtk4::prelude::*;
use gtk4::{AboutDialog, Application, ApplicationWindow, ButtonsType, License, MessageDialog, MessageType};

const CONTROLS: &str = "Nuclear chart\n\
  Click a nucleus: details and chain plots\n\
  Mouse wheel: zoom about the pointer\n\
  Shift + drag: pan\n\
  Ctrl+R: reset view\n\n\
  Ctrl+L: load chart   Ctrl+E: export PNG\n\
  Ctrl+P: preferences   Ctrl+W: close chain plot";

pub fn setup(app: &Application, window: &ApplicationWindow) {
  // --- ABOUT ACTION ---
  let about_action = gtk4::gio::SimpleAction::new("about", None);
  let win_weak = window.downgrade();
  about_action.connect_activate(move |_, _| {
    if let Some(win) = win_weak.upgrade() {
      let dialog = AboutDialog::builder()
        .transient_for(&win)
        .modal(true)
        .program_name("nucview")
        .version(env!("CARGO_PKG_VERSION"))
        .comments("Interactive viewer for beta-decay properties, strength functions and the nuclear chart.")
        .license_type(License::MitX11)
        .logo_icon_name("applications-science")
        .build();
      dialog.present();
    }
  });
  app.add_action(&about_action);

  // --- CONTROLS ---
  let controls_action = gtk4::gio::SimpleAction::new("help_controls", None);
  let win_weak = window.downgrade();
  controls_action.connect_activate(move |_, _| {
    let Some(win) = win_weak.upgrade() else { return };
    let dialog = MessageDialog::builder()
      .transient_for(&win)
      .modal(true)
      .message_type(MessageType::Info)
      .buttons(ButtonsType::Close)
      .text("Controls & Shortcuts")
      .secondary_text(CONTROLS)
      .build();
    dialog.connect_response(|d, _| d.close());
    dialog.present();
  });
  app.add_action(&controls_action);
}
