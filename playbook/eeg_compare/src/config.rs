use std::path::{Path, PathBuf};

use aligner::{ChartConfig, CsvChannel, DataLoadResult, FrequencyBand, SeriesLabels, Signal, SignalSource};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelInput {
  pub path: PathBuf,
  pub channel: String,
  pub band: Option<FrequencyBand>,
  pub label: Option<String>,
}

impl ChannelInput {
  /// Explicit label, else `<channel> (CSV <position>)`, with the band appended when tagged.
  pub fn label(&self, position: usize) -> String {
    let name = self
      .label
      .clone()
      .unwrap_or_else(|| format!("{} (CSV {})", self.channel, position));
    SeriesLabels::channel(&name, self.band)
  }

  pub fn source(&self, position: usize) -> CsvChannel {
    CsvChannel::new(&self.path, &self.channel).with_label(self.label(position))
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comparison {
  pub name: String,
  pub first: ChannelInput,
  pub second: ChannelInput,
  pub out_file: PathBuf,
  pub table_file: Option<PathBuf>,
}

impl Comparison {
  pub fn labels(&self) -> SeriesLabels {
    SeriesLabels::new(self.first.label(1), self.second.label(2))
  }

  pub fn load(&self) -> DataLoadResult<(Signal, Signal)> {
    Ok((self.first.source(1).load()?, self.second.source(2).load()?))
  }

  fn resolve(&mut self, dir: &Path) {
    let resolve = |path: &mut PathBuf| {
      if path.is_relative() {
        *path = dir.join(&*path);
      }
    };
    resolve(&mut self.first.path);
    resolve(&mut self.second.path);
    resolve(&mut self.out_file);
    if let Some(table_file) = self.table_file.as_mut() {
      resolve(table_file);
    }
  }
}

#[derive(Debug)]
pub struct Config {
  pub comparisons: Vec<Comparison>,
  pub chart: ChartConfig,
}

#[derive(Debug, Deserialize)]
struct YamlConfig {
  pub comparisons: Vec<Comparison>,
  #[serde(default)]
  pub chart: ChartConfig,
}

impl Config {
  /// Reads `CONFIG_PATH` or this crate's `config.yaml`.
  /// `CSV1_PATH` and `CSV2_PATH` replace the inputs of the first comparison.
  pub fn read() -> anyhow::Result<Self> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let path = match std::env::var("CONFIG_PATH") {
      Ok(path) => PathBuf::from(path),
      Err(_) => dir.join("config.yaml"),
    };
    let contents = std::fs::read_to_string(&path)
      .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    let mut cfg = Self::from_yaml(&contents, &dir)?;

    if let Some(first) = cfg.comparisons.first_mut() {
      if let Ok(csv1) = std::env::var("CSV1_PATH") {
        first.first.path = PathBuf::from(csv1);
      }
      if let Ok(csv2) = std::env::var("CSV2_PATH") {
        first.second.path = PathBuf::from(csv2);
      }
    }
    Ok(cfg)
  }

  /// Parse YAML, resolving relative paths against `dir`.
  pub fn from_yaml(contents: &str, dir: &Path) -> anyhow::Result<Self> {
    let yaml: YamlConfig = serde_yaml::from_str(contents)?;
    if yaml.comparisons.is_empty() {
      return Err(anyhow::anyhow!("Config lists no comparisons"));
    }
    let mut comparisons = yaml.comparisons;
    for comparison in comparisons.iter_mut() {
      comparison.resolve(dir);
    }
    Ok(Self {
      comparisons,
      chart: yaml.chart,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use common::LegendPosition;

  #[test]
  fn parses_comparisons_and_resolves_paths() -> anyhow::Result<()> {
    let yaml = r#"
comparisons:
  - name: frontal
    first:
      path: data/session_1.csv
      channel: Fz1-M1
      band: alpha
    second:
      path: /recordings/session_2.csv
      channel: Fz1-M2
      label: Follow-up
    out_file: frontal.png
chart:
  legend: upper_left
"#;
    let cfg = Config::from_yaml(yaml, Path::new("/work"))?;
    let frontal = &cfg.comparisons[0];
    assert_eq!(frontal.first.path, PathBuf::from("/work/data/session_1.csv"));
    assert_eq!(frontal.second.path, PathBuf::from("/recordings/session_2.csv"));
    assert_eq!(frontal.out_file, PathBuf::from("/work/frontal.png"));
    assert!(frontal.table_file.is_none());
    assert_eq!(cfg.chart.legend, LegendPosition::UpperLeft);
    assert_eq!(cfg.chart.title, "EEG Comparison");

    let labels = frontal.labels();
    assert_eq!(labels.a, "Fz1-M1 (CSV 1) (Alpha)");
    assert_eq!(labels.b, "Follow-up");
    Ok(())
  }

  #[test]
  fn rejects_empty_comparison_list() {
    assert!(Config::from_yaml("comparisons: []", Path::new(".")).is_err());
  }

  #[test]
  fn bundled_config_is_valid() -> anyhow::Result<()> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let contents = std::fs::read_to_string(dir.join("config.yaml"))?;
    let cfg = Config::from_yaml(&contents, &dir)?;
    for comparison in &cfg.comparisons {
      let (a, b) = comparison.load()?;
      assert!(!a.is_empty() && !b.is_empty());
    }
    Ok(())
  }
}
