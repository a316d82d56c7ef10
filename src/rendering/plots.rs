// src/rendering/plots.rs
// Line/scatter charts drawn with plotters. Every function takes any
// DrawingBackend so the same code draws on screen or into a file.

use crate::chart::chain_plot::{Axis, ChainPlot, MAGIC_GRID, PLAIN_GRID};
use crate::chart::palette::{self, Color};
use crate::chart::view::Tick;
use crate::model::StrengthSpectrum;
use crate::views::{self, BetaChart};

use plotters::backend::DrawingBackend;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::*;
use std::ops::Range;

type DrawResult<T> = Result<T, std::boxed::Box<dyn std::error::Error>>;

/// Pixel x-span of the plotting area and the data range it shows. Used to
/// turn pointer positions back into data for tooltips.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotGeometry {
  pub pixels: Range<i32>,
  pub data: Range<f64>,
}

impl PlotGeometry {
  pub fn x_value(&self, px: f64) -> Option<f64> {
    let (p0, p1) = (self.pixels.start as f64, self.pixels.end as f64);
    if px < p0 || px > p1 || p1 <= p0 {
      return None;
    }
    Some(self.data.start + (px - p0) / (p1 - p0) * (self.data.end - self.data.start))
  }
}

fn rgba(c: Color) -> RGBAColor {
  RGBAColor(c.r, c.g, c.b, c.a)
}

fn finite(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
  points.iter().copied().filter(|p| p.0.is_finite() && p.1.is_finite()).collect()
}

/// Vertical lines at every tick; magic numbers get a red, heavier line and
/// their number printed at the top of the plot.
fn draw_tick_lines<DB: DrawingBackend>(
  chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
  ticks: &[Tick],
  y_span: (f64, f64),
) -> DrawResult<()>
where
  DB::ErrorType: 'static,
{
  for t in ticks {
    let x = t.value as f64;
    let style = if t.magic {
      ShapeStyle::from(&rgba(MAGIC_GRID)).stroke_width(2)
    } else {
      ShapeStyle::from(&rgba(PLAIN_GRID)).stroke_width(1)
    };
    chart.draw_series(std::iter::once(PathElement::new(vec![(x, y_span.0), (x, y_span.1)], style)))?;
    if t.magic {
      chart.draw_series(std::iter::once(Text::new(
        t.value.to_string(),
        (x, y_span.1),
        ("sans-serif", 12).into_font().color(&rgba(palette::RED_500)),
      )))?;
    }
  }
  Ok(())
}

pub fn draw_message<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, message: &str) -> DrawResult<()>
where
  DB::ErrorType: 'static,
{
  root.fill(&WHITE)?;
  let (w, h) = root.dim_in_pixel();
  let style = TextStyle::from(("sans-serif", 16).into_font()).color(&rgba(palette::SLATE_500));
  root.draw_text(message, &style, (w as i32 / 2 - 4 * message.len() as i32, h as i32 / 2))?;
  Ok(())
}

/// The four-series chain plot under the nuclear chart.
pub fn draw_chain_plot<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, plot: &ChainPlot) -> DrawResult<PlotGeometry>
where
  DB::ErrorType: 'static,
{
  root.fill(&WHITE)?;
  let (x0, x1) = plot.x_range();
  let (l0, l1) = plot.y_range(Axis::Left);
  let (r0, r1) = plot.y_range(Axis::Right);

  let mut chart = ChartBuilder::on(root)
    .caption(plot.title(), ("sans-serif", 18))
    .margin(15)
    .x_label_area_size(45)
    .y_label_area_size(60)
    .right_y_label_area_size(60)
    .build_cartesian_2d(x0..x1, l0..l1)?
    .set_secondary_coord(x0..x1, r0..r1);

  chart
    .configure_mesh()
    .disable_x_mesh()
    .light_line_style(&rgba(PLAIN_GRID))
    .x_desc(plot.x_label())
    .y_desc("log₁₀(T½ [s])")
    .axis_desc_style(("sans-serif", 14))
    .draw()?;
  chart
    .configure_secondary_axes()
    .y_desc("Q [MeV] · β₂×10 · FF%÷10")
    .axis_desc_style(("sans-serif", 14))
    .draw()?;

  draw_tick_lines(&mut *chart, &plot.x_ticks(), (l0, l1))?;

  for s in &plot.series {
    let style = ShapeStyle::from(&rgba(s.kind.color())).stroke_width(2);
    let points = finite(&s.points);
    let markers = points.clone();
    match s.kind.axis() {
      Axis::Left => {
        chart
          .draw_series(LineSeries::new(points, style))?
          .label(s.kind.label())
          .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        chart.draw_series(markers.into_iter().map(|p| Circle::new(p, 3, style.filled())))?;
      }
      Axis::Right => {
        chart
          .draw_secondary_series(LineSeries::new(points, style))?
          .label(s.kind.label())
          .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        chart.draw_secondary_series(markers.into_iter().map(|p| Circle::new(p, 3, style.filled())))?;
      }
    }
  }

  chart
    .configure_series_labels()
    .position(SeriesLabelPosition::UpperRight)
    .background_style(&WHITE.mix(0.85))
    .border_style(&BLACK)
    .draw()?;

  Ok(PlotGeometry {
    pixels: chart.plotting_area().get_pixel_range().0,
    data: x0..x1,
  })
}

/// Scatter-with-line chart of one property along a chain.
pub fn draw_beta_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart_data: &BetaChart) -> DrawResult<PlotGeometry>
where
  DB::ErrorType: 'static,
{
  root.fill(&WHITE)?;
  let (x0, x1) = chart_data.x_range();
  let (y0, y1) = chart_data.y_range();

  let mut chart = ChartBuilder::on(root)
    .caption(chart_data.title(), ("sans-serif", 20))
    .margin(20)
    .x_label_area_size(50)
    .y_label_area_size(70)
    .build_cartesian_2d(x0..x1, y0..y1)?;

  chart
    .configure_mesh()
    .disable_x_mesh()
    .light_line_style(&rgba(PLAIN_GRID))
    .x_desc(chart_data.x_label())
    .y_desc(chart_data.y_label())
    .axis_desc_style(("sans-serif", 16))
    .draw()?;

  draw_tick_lines(&mut chart, &chart_data.x_ticks(), (y0, y1))?;

  let line = ShapeStyle::from(&rgba(palette::BLUE_600)).stroke_width(2);
  let fill = rgba(palette::BLUE_600.with_alpha(0.6)).filled();
  let points = finite(&chart_data.points());
  chart.draw_series(LineSeries::new(points.clone(), line))?;
  chart.draw_series(points.into_iter().map(|p| Circle::new(p, 5, fill)))?;

  Ok(PlotGeometry {
    pixels: chart.plotting_area().get_pixel_range().0,
    data: x0..x1,
  })
}

pub fn draw_strength_chart<DB: DrawingBackend>(
  root: &DrawingArea<DB, Shift>,
  spectrum: &StrengthSpectrum,
) -> DrawResult<PlotGeometry>
where
  DB::ErrorType: 'static,
{
  root.fill(&WHITE)?;
  let ((x0, x1), (y0, y1)) = views::strength_ranges(spectrum);

  let mut chart = ChartBuilder::on(root)
    .caption(spectrum.query.title(), ("sans-serif", 20))
    .margin(20)
    .x_label_area_size(50)
    .y_label_area_size(80)
    .build_cartesian_2d(x0..x1, y0..y1)?;

  chart
    .configure_mesh()
    .light_line_style(&rgba(PLAIN_GRID))
    .x_labels(15)
    .x_desc(views::STRENGTH_X_LABEL)
    .y_desc(views::STRENGTH_Y_LABEL)
    .y_label_formatter(&|v| format!("{:.1e}", v))
    .axis_desc_style(("sans-serif", 16))
    .draw()?;

  let points: Vec<(f64, f64)> = spectrum
    .points
    .iter()
    .map(|p| (p.energy, p.strength))
    .filter(|p| p.0.is_finite() && p.1.is_finite())
    .collect();
  chart.draw_series(AreaSeries::new(
    points.iter().copied(),
    0.0,
    &rgba(palette::VIOLET_600.with_alpha(0.1)),
  ))?;
  chart.draw_series(LineSeries::new(
    points,
    ShapeStyle::from(&rgba(palette::VIOLET_600)).stroke_width(2),
  ))?;

  Ok(PlotGeometry {
    pixels: chart.plotting_area().get_pixel_range().0,
    data: x0..x1,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_geometry_inverts_pixels() {
    let g = PlotGeometry {
      pixels: 100..300,
      data: 40.0..60.0,
    };
    assert_eq!(g.x_value(200.0), Some(50.0));
    assert_eq!(g.x_value(99.0), None);
  }
}
