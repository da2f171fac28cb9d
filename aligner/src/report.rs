use std::fmt;

use log::{log, Level};

use crate::{ComparisonResult, SeriesLabels, Side, SignalStats};

/// Human-readable summary of a comparison.
pub struct ComparisonReport<'a> {
  result: &'a ComparisonResult,
  labels: &'a SeriesLabels,
}

impl<'a> ComparisonReport<'a> {
  pub fn new(result: &'a ComparisonResult, labels: &'a SeriesLabels) -> Self {
    Self { result, labels }
  }

  pub fn truncation_note(&self) -> Option<String> {
    let label = match self.result.truncated_side()? {
      Side::A => &self.labels.a,
      Side::B => &self.labels.b,
      Side::Difference => return None,
    };
    Some(format!(
      "Truncated {} trailing samples from {} ({} vs {} samples)",
      self.result.truncated_by, label, self.result.original_len_a, self.result.original_len_b
    ))
  }

  pub fn stats_lines(&self) -> Vec<String> {
    let result = self.result;
    let labels = self.labels;
    let mut lines = vec![format!("Samples analyzed: {}", result.len())];
    for (label, stats) in [
      (&labels.a, &result.stats_a),
      (&labels.b, &result.stats_b),
      (&labels.difference, &result.stats_difference),
    ] {
      lines.extend(Self::series_lines(label, stats));
    }
    lines
  }

  fn series_lines(label: &str, stats: &SignalStats) -> [String; 2] {
    [
      format!("{} - Mean: {:.3}, Std: {:.3}", label, stats.mean, stats.std_dev),
      format!("{} range: {:.2} to {:.2}", label, stats.min, stats.max),
    ]
  }

  /// Summary lines with their log level, truncation as a warning.
  pub fn entries(&self) -> Vec<(Level, String)> {
    self
      .truncation_note()
      .map(|note| (Level::Warn, note))
      .into_iter()
      .chain(self.stats_lines().into_iter().map(|line| (Level::Info, line)))
      .collect()
  }

  /// Emit the summary through the logger.
  pub fn log(&self) {
    for (level, line) in self.entries() {
      log!(level, "{}", line);
    }
  }
}

impl fmt::Display for ComparisonReport<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "EEG Analysis Complete!")?;
    if let Some(note) = self.truncation_note() {
      writeln!(f, "{}", note)?;
    }
    for line in self.stats_lines() {
      writeln!(f, "{}", line)?;
    }
    Ok(())
  }
}
