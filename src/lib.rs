// src/lib.rs
pub mod chart;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod state;
pub mod views;

// GTK front end
#[cfg(feature = "gui")]
pub mod menu;
#[cfg(feature = "gui")]
pub mod rendering;
#[cfg(feature = "gui")]
pub mod ui;
#[cfg(feature = "gui")]
pub mod utils;
