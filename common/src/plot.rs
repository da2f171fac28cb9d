use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::{BLACK, WHITE};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Data {
  pub x: i64,
  pub y: f64,
}

pub struct Series {
  pub data: Vec<Data>,
  pub label: String,
  pub color: RGBColor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
  UpperLeft,
  #[default]
  UpperRight,
  UpperMiddle,
  LowerLeft,
  LowerRight,
  LowerMiddle,
}

impl From<LegendPosition> for SeriesLabelPosition {
  fn from(pos: LegendPosition) -> Self {
    match pos {
      LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
      LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
      LegendPosition::UpperMiddle => SeriesLabelPosition::UpperMiddle,
      LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
      LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
      LegendPosition::LowerMiddle => SeriesLabelPosition::LowerMiddle,
    }
  }
}

pub struct PlotConfig<'a> {
  pub out_file: &'a Path,
  pub title: &'a str,
  pub x_label: &'a str,
  pub y_label: &'a str,
  pub x_range: Range<i64>,
  pub y_range: Range<f64>,
  pub x_labels: usize,
  pub y_labels: usize,
  pub legend: LegendPosition,
  pub grid: bool,
  pub size: (u32, u32),
  pub line_alpha: f64,
}

pub struct Plot;

impl Plot {
  pub fn plot(series: &[Series], cfg: &PlotConfig<'_>) -> anyhow::Result<()> {
    let PlotConfig {
      out_file,
      title,
      x_label,
      y_label,
      x_range,
      y_range,
      x_labels,
      y_labels,
      legend,
      grid,
      size,
      line_alpha,
    } = cfg;

    let root = BitMapBackend::new(out_file, *size).into_drawing_area();
    root
      .fill(&WHITE)
      .map_err(|e| anyhow::anyhow!("Failed to fill drawing area with white: {}", e))?;
    let mut chart = ChartBuilder::on(&root)
      .set_all_label_area_size(80)
      .margin(20)
      .caption(*title, ("sans-serif", 32.0).into_font())
      .build_cartesian_2d(x_range.clone(), y_range.clone())
      .map_err(|e| anyhow::anyhow!("Failed to build cartesian 2d: {}", e))?;

    let y_label_formatter = |y: &f64| format!("{:.0}", y);
    let mut mesh = chart.configure_mesh();
    mesh
      .light_line_style(WHITE)
      .bold_line_style(BLACK.mix(0.3))
      .label_style(("sans-serif", 20, &BLACK).into_text_style(&root))
      .x_desc(*x_label)
      .y_desc(*y_label)
      .x_labels(*x_labels)
      .y_labels(*y_labels)
      .y_label_formatter(&y_label_formatter);
    if !*grid {
      mesh.disable_mesh();
    }
    mesh
      .draw()
      .map_err(|e| anyhow::anyhow!("Failed to draw mesh: {}", e))?;

    for s in series {
      let color = s.color.mix(*line_alpha);
      chart
        .draw_series(LineSeries::new(
          s.data.iter().map(|data| (data.x, data.y)),
          ShapeStyle {
            color,
            filled: true,
            stroke_width: 2,
          },
        ))
        .map_err(|e| anyhow::anyhow!("Failed to draw series: {}", e))?
        .label(s.label.as_str())
        .legend(move |(x, y)| {
          PathElement::new(
            [(x, y), (x + 20, y)],
            ShapeStyle {
              color,
              filled: true,
              stroke_width: 4,
            },
          )
        });
    }

    chart
      .configure_series_labels()
      .position((*legend).into())
      .margin(15)
      .legend_area_size(30)
      .border_style(BLACK)
      .background_style(WHITE.mix(0.9))
      .label_font(("sans-serif", 18))
      .draw()
      .map_err(|e| anyhow::anyhow!("Failed to configure series labels: {}", e))?;

    root
      .present()
      .map_err(|e| anyhow::anyhow!("Failed to present root: {}", e))?;

    Ok(())
  }

  /// Parse `#RRGGBB` (leading `#` optional).
  pub fn hex_color(hex: &str) -> anyhow::Result<RGBColor> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
      return Err(anyhow::anyhow!("Invalid hex color: {:?}", hex));
    }
    let channel = |i: usize| {
      u8::from_str_radix(&digits[i..i + 2], 16)
        .map_err(|e| anyhow::anyhow!("Invalid hex color {:?}: {}", hex, e))
    };
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
  }

  pub fn grey() -> RGBColor {
    RGBColor(0x99, 0x99, 0x99)
  }

  pub fn blue() -> RGBColor {
    RGBColor(0x4A, 0x90, 0xE2)
  }

  pub fn red() -> RGBColor {
    RGBColor(0xFF, 0x6B, 0x6B)
  }
}

#[test]
fn parses_hex_colors() -> anyhow::Result<()> {
  assert_eq!(Plot::hex_color("#4A90E2")?, Plot::blue());
  assert_eq!(Plot::hex_color("ff6b6b")?, Plot::red());
  assert!(Plot::hex_color("#999").is_err());
  assert!(Plot::hex_color("#GG0000").is_err());
  assert!(Plot::hex_color("#+F+F+F").is_err());
  Ok(())
}

#[test]
fn legend_position_maps_to_plotters() {
  assert!(matches!(
    SeriesLabelPosition::from(LegendPosition::default()),
    SeriesLabelPosition::UpperRight
  ));
  assert!(matches!(
    SeriesLabelPosition::from(LegendPosition::LowerMiddle),
    SeriesLabelPosition::LowerMiddle
  ));
}
