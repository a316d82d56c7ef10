// src/chart/mod.rs
// Display-independent chart logic: colors, borders, viewport, picking.
pub mod chain_plot;
pub mod classifier;
pub mod format;
pub mod gesture;
pub mod grid;
pub mod highlight;
pub mod palette;
pub mod view;

pub use chain_plot::ChainPlot;
pub use classifier::{Classifier, Legend, Property};
pub use gesture::{GestureEnd, GestureTracker};
pub use grid::{GridFrame, GridRenderer};
pub use highlight::{Appearance, HighlightMode};
pub use palette::Color;
pub use view::{ChartView, PlotRect};
