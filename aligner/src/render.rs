use std::ops::Range;
use std::path::PathBuf;

use common::{LegendPosition, Plot, PlotConfig, Series};
use log::info;
use serde::Deserialize;

use crate::{ComparisonResult, FrequencyBand};

/// Display names of the three plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLabels {
  pub a: String,
  pub b: String,
  pub difference: String,
}

impl SeriesLabels {
  pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
    Self {
      a: a.into(),
      b: b.into(),
      difference: "Difference".to_string(),
    }
  }

  pub fn with_difference(mut self, label: impl Into<String>) -> Self {
    self.difference = label.into();
    self
  }

  /// `channel (Band)` when a frequency band is tagged.
  pub fn channel(name: &str, band: Option<FrequencyBand>) -> String {
    match band {
      Some(band) => format!("{} ({})", name, band),
      None => name.to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeriesColors {
  pub a: String,
  pub b: String,
  pub difference: String,
}

impl Default for SeriesColors {
  fn default() -> Self {
    Self {
      a: "#999999".to_string(),
      b: "#4A90E2".to_string(),
      difference: "#FF6B6B".to_string(),
    }
  }
}

/// Presentation settings for a comparison chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
  pub title: String,
  pub x_label: String,
  pub y_label: String,
  pub colors: SeriesColors,
  pub x_range: Option<(i64, i64)>,
  pub y_range: Option<(f64, f64)>,
  pub x_ticks: usize,
  pub y_ticks: usize,
  pub legend: LegendPosition,
  pub grid: bool,
  pub width: u32,
  pub height: u32,
  pub line_alpha: f64,
}

impl Default for ChartConfig {
  fn default() -> Self {
    Self {
      title: "EEG Comparison".to_string(),
      x_label: "Samples".to_string(),
      y_label: "Amplitude".to_string(),
      colors: SeriesColors::default(),
      x_range: None,
      y_range: None,
      x_ticks: 6,
      y_ticks: 5,
      legend: LegendPosition::UpperRight,
      grid: true,
      width: 1200,
      height: 600,
      line_alpha: 0.8,
    }
  }
}

impl ChartConfig {
  /// Configured range, or every sample index `0..len`.
  pub fn x_range(&self, len: usize) -> Range<i64> {
    match self.x_range {
      Some((min, max)) => min..max,
      None => 0..(len as i64).max(1),
    }
  }

  /// Configured range, or symmetric around zero with 20% headroom over the largest magnitude.
  /// The headroom is capped at `f64::MAX`.
  pub fn y_range(&self, result: &ComparisonResult) -> Range<f64> {
    if let Some((min, max)) = self.y_range {
      return min..max;
    }
    let max_abs = [
      result.stats_a.max_abs(),
      result.stats_b.max_abs(),
      result.stats_difference.max_abs(),
    ]
    .into_iter()
    .fold(0.0, f64::max);
    if max_abs == 0.0 {
      return -1.0..1.0;
    }
    let bound = (max_abs * 1.2).min(f64::MAX);
    -bound..bound
  }

  /// Plot series for `result`. Fails on an invalid color before anything is drawn.
  pub fn series(&self, result: &ComparisonResult, labels: &SeriesLabels) -> anyhow::Result<Vec<Series>> {
    Ok(vec![
      Series {
        data: result.a.to_data(),
        label: labels.a.clone(),
        color: Plot::hex_color(&self.colors.a)?,
      },
      Series {
        data: result.b.to_data(),
        label: labels.b.clone(),
        color: Plot::hex_color(&self.colors.b)?,
      },
      Series {
        data: result.difference.to_data(),
        label: labels.difference.clone(),
        color: Plot::hex_color(&self.colors.difference)?,
      },
    ])
  }
}

/// Draws a comparison somewhere.
pub trait Renderer {
  fn render(&self, result: &ComparisonResult, labels: &SeriesLabels, cfg: &ChartConfig) -> anyhow::Result<()>;
}

/// Renders a PNG line chart.
pub struct BitmapRenderer {
  pub out_file: PathBuf,
}

impl BitmapRenderer {
  pub fn new(out_file: impl Into<PathBuf>) -> Self {
    Self {
      out_file: out_file.into(),
    }
  }
}

impl Renderer for BitmapRenderer {
  fn render(&self, result: &ComparisonResult, labels: &SeriesLabels, cfg: &ChartConfig) -> anyhow::Result<()> {
    let series = cfg.series(result, labels)?;
    let plot_cfg = PlotConfig {
      out_file: &self.out_file,
      title: &cfg.title,
      x_label: &cfg.x_label,
      y_label: &cfg.y_label,
      x_range: cfg.x_range(result.len()),
      y_range: cfg.y_range(result),
      x_labels: cfg.x_ticks,
      y_labels: cfg.y_ticks,
      legend: cfg.legend,
      grid: cfg.grid,
      size: (cfg.width, cfg.height),
      line_alpha: cfg.line_alpha,
    };
    Plot::plot(&series, &plot_cfg)?;
    info!("Saved chart to {}", self.out_file.display());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::SignalAligner;

  #[test]
  fn default_ranges_follow_the_data() -> anyhow::Result<()> {
    let result = SignalAligner::compare(&[1.0, -2.0, 3.0], &[4.0, 5.0, -10.0, 8.0])?;
    let cfg = ChartConfig::default();
    assert_eq!(cfg.x_range(result.len()), 0..3);
    // largest magnitude is the difference -10 - 3 = -13
    let y = cfg.y_range(&result);
    assert!((y.start + 15.6).abs() < 1e-9);
    assert!((y.end - 15.6).abs() < 1e-9);
    Ok(())
  }

  #[test]
  fn flat_signals_get_a_unit_range() -> anyhow::Result<()> {
    let result = SignalAligner::compare(&[0.0, 0.0], &[0.0, 0.0])?;
    assert_eq!(ChartConfig::default().y_range(&result), -1.0..1.0);
    Ok(())
  }

  #[test]
  fn headroom_saturates_near_max() -> anyhow::Result<()> {
    let max = [f64::MAX, -f64::MAX / 2.0];
    let result = SignalAligner::compare(&max, &max)?;
    assert_eq!(ChartConfig::default().y_range(&result), -f64::MAX..f64::MAX);
    Ok(())
  }

  #[test]
  fn configured_ranges_win() -> anyhow::Result<()> {
    let result = SignalAligner::compare(&[1.0], &[2.0])?;
    let cfg = ChartConfig {
      x_range: Some((0, 3000)),
      y_range: Some((-400.0, 400.0)),
      ..ChartConfig::default()
    };
    assert_eq!(cfg.x_range(result.len()), 0..3000);
    assert_eq!(cfg.y_range(&result), -400.0..400.0);
    Ok(())
  }

  #[test]
  fn series_carry_labels_and_colors() -> anyhow::Result<()> {
    let result = SignalAligner::compare(&[1.0, 2.0], &[3.0, 5.0])?;
    let labels = SeriesLabels::new("Fz1-M1 (CSV 1)", "Fz1-M2 (CSV 2)");
    let series = ChartConfig::default().series(&result, &labels)?;
    assert_eq!(series.len(), 3);
    assert_eq!(series[0].label, "Fz1-M1 (CSV 1)");
    assert_eq!(series[1].color, Plot::blue());
    assert_eq!(series[2].label, "Difference");
    assert_eq!(series[2].data[1].y, 3.0);
    Ok(())
  }

  #[test]
  fn invalid_color_fails_before_drawing() -> anyhow::Result<()> {
    let result = SignalAligner::compare(&[1.0], &[2.0])?;
    let mut cfg = ChartConfig::default();
    cfg.colors.difference = "red".to_string();
    let out_file = std::env::temp_dir().join("aligner_invalid_color.png");
    let labels = SeriesLabels::new("a", "b");
    assert!(BitmapRenderer::new(&out_file).render(&result, &labels, &cfg).is_err());
    assert!(!out_file.exists());
    Ok(())
  }

  #[test]
  fn deserializes_partial_chart_config() -> anyhow::Result<()> {
    let yaml = r##"
title: Session 4
y_range: [-400.0, 400.0]
legend: lower_left
colors:
  difference: "#00FF00"
"##;
    let cfg: ChartConfig = serde_yaml::from_str(yaml)?;
    assert_eq!(cfg.title, "Session 4");
    assert_eq!(cfg.y_range, Some((-400.0, 400.0)));
    assert_eq!(cfg.legend, LegendPosition::LowerLeft);
    assert_eq!(cfg.colors.difference, "#00FF00");
    assert_eq!(cfg.colors.a, "#999999");
    assert_eq!(cfg.x_ticks, 6);
    Ok(())
  }

  #[test]
  fn band_annotates_channel_label() {
    assert_eq!(
      SeriesLabels::channel("Fz1-M1", Some(FrequencyBand::Alpha)),
      "Fz1-M1 (Alpha)"
    );
    assert_eq!(SeriesLabels::channel("Fz1-M1", None), "Fz1-M1");
  }
}
