// src/utils/logger.rs
// Routes the `log` facade into the console pane (and stderr).

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: GtkLogger = GtkLogger;

struct GtkLogger;

/// Colour tag per level: (name, foreground, bold).
const TAGS: [(&str, &str, bool); 4] = [
  ("error", "#ef4444", true),
  ("warn", "#f59e0b", false),
  ("info", "#2563eb", false),
  ("debug", "#94a3b8", false),
];

pub fn init(view: &TextView) -> Result<(), SetLoggerError> {
  let buffer = view.buffer();
  let tag_table = buffer.tag_table();

  for (name, color, bold) in TAGS {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", color);
      if bold {
        tag.set_property("weight", 700);
      }
      tag_table.add(&tag);
    }
  }

  let _ = LOG_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

impl log::Log for GtkLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    // Debug output only from our own crate; GTK and friends stay at info
    metadata.level() <= Level::Info || metadata.target().starts_with("nucview")
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let tag_name = match record.level() {
      Level::Error => "error",
      Level::Warn => "warn",
      Level::Info => "info",
      Level::Debug | Level::Trace => "debug",
    };

    eprintln!("[{:<5}] {}", record.level(), record.args());
    let msg = format!("[{}] {}\n", record.level(), record.args());

    // Loaders log from worker threads; hop to the main loop before touching GTK
    glib::MainContext::default().invoke(move || {
      if let Some(view) = LOG_VIEW.get().and_then(|w| w.upgrade()) {
        let buffer = view.buffer();
        let mut end = buffer.end_iter();
        buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

        // Auto-scroll
        let mark = buffer.create_mark(None, &buffer.end_iter(), false);
        view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
        buffer.delete_mark(&mark);
      }
    });
  }

  fn flush(&self) {}
}
