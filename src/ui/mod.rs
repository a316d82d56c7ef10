// src/ui/mod.rs
pub mod beta_tab;
pub mod chart_tab;
pub mod detail_dlg;
pub mod interactions;
pub mod preferences;
pub mod strength_tab;

// Re-exports
pub use interactions::setup_interactions;
pub use preferences::show_preferences_window;

use crate::error::{DataError, Result};
use gtk4::prelude::*;
use gtk4::{gio, glib, ButtonsType, MessageDialog, MessageType, TextView, Window};

pub fn log_to_console(console_view: &TextView, message: &str) {
  let buffer = console_view.buffer();
  let mut end_iter = buffer.end_iter();
  buffer.insert(&mut end_iter, &format!("{}\n", message));
  let mark = buffer.create_mark(None, &end_iter, false);
  console_view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
  buffer.delete_mark(&mark);
}

/// Top-level window of any widget, for dialog parenting.
pub fn parent_window(widget: &impl IsA<gtk4::Widget>) -> Option<Window> {
  widget.root().and_then(|root| root.downcast::<Window>().ok())
}

/// Modal message box.
pub fn alert(parent: Option<&Window>, message: &str) {
  let dialog = MessageDialog::builder()
    .modal(true)
    .message_type(MessageType::Error)
    .buttons(ButtonsType::Ok)
    .text(message)
    .build();
  dialog.set_transient_for(parent);
  dialog.connect_response(|d, _| d.close());
  dialog.present();
}

/// Reports a failed load: logged, then shown as an alert.
pub fn report_error(widget: &impl IsA<gtk4::Widget>, err: &DataError) {
  match err {
    DataError::EmptyResult { .. } | DataError::InvalidInput { .. } => log::warn!("{}", err),
    _ => log::error!("{}", err),
  }
  alert(parent_window(widget).as_ref(), &err.to_string());
}

/// Runs `work` on a worker thread and hands its result to `apply` back on
/// the main loop.
pub fn spawn_load<T, F, A>(work: F, apply: A)
where
  T: Send + 'static,
  F: FnOnce() -> Result<T> + Send + 'static,
  A: FnOnce(Result<T>) + 'static,
{
  let handle = gio::spawn_blocking(work);
  glib::MainContext::default().spawn_local(async move {
    let result = handle
      .await
      .unwrap_or_else(|_| Err(DataError::unavailable("loader", "worker thread panicked")));
    apply(result);
  });
}
