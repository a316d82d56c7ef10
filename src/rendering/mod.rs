// src/rendering/mod.rs
pub mod painter;
pub mod plots;

pub use painter::{draw_chart, export_png};
