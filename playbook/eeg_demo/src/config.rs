use std::path::{Path, PathBuf};

use aligner::{ChartConfig, Preset, SyntheticSignal};
use serde::Deserialize;

#[derive(Debug)]
pub struct DemoConfig {
  pub preset: Preset,
  pub seed: u64,
  pub samples: usize,
  pub out_file: PathBuf,
  pub table_file: Option<PathBuf>,
  pub chart: ChartConfig,
}

#[derive(Debug, Deserialize)]
struct YamlConfig {
  #[serde(default)]
  pub preset: Preset,
  pub seed: u64,
  pub samples: Option<usize>,
  pub out_file: PathBuf,
  pub table_file: Option<PathBuf>,
  #[serde(default)]
  pub chart: ChartConfig,
}

impl DemoConfig {
  /// Reads this crate's `config.yaml`; `DEMO_SEED` replaces the configured seed.
  pub fn read() -> anyhow::Result<Self> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let path = dir.join("config.yaml");
    let contents = std::fs::read_to_string(&path)
      .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    let mut cfg = Self::from_yaml(&contents, &dir)?;
    if let Ok(seed) = std::env::var("DEMO_SEED") {
      cfg.seed = seed
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid DEMO_SEED {:?}: {}", seed, e))?;
    }
    Ok(cfg)
  }

  pub fn from_yaml(contents: &str, dir: &Path) -> anyhow::Result<Self> {
    let yaml: YamlConfig = serde_yaml::from_str(contents)?;
    let resolve = |path: PathBuf| if path.is_relative() { dir.join(path) } else { path };
    Ok(Self {
      samples: yaml.samples.unwrap_or_else(|| yaml.preset.default_samples()),
      preset: yaml.preset,
      seed: yaml.seed,
      out_file: resolve(yaml.out_file),
      table_file: yaml.table_file.map(resolve),
      chart: yaml.chart,
    })
  }

  pub fn signals(&self) -> (SyntheticSignal, SyntheticSignal) {
    self.preset.pair(self.samples, self.seed)
  }
}

#[test]
fn defaults_samples_from_preset() -> anyhow::Result<()> {
  let cfg = DemoConfig::from_yaml("seed: 42\nout_file: demo.png\n", Path::new("/tmp"))?;
  assert_eq!(cfg.preset, Preset::Random);
  assert_eq!(cfg.samples, 1000);
  assert_eq!(cfg.out_file, PathBuf::from("/tmp/demo.png"));
  assert!(cfg.table_file.is_none());

  let (a, b) = cfg.signals();
  assert_eq!(a.samples, 1000);
  assert_eq!(a.seed, 42);
  assert_eq!(b.seed, 43);
  Ok(())
}

#[test]
fn bundled_config_uses_reference_layout() -> anyhow::Result<()> {
  let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  let contents = std::fs::read_to_string(dir.join("config.yaml"))?;
  let cfg = DemoConfig::from_yaml(&contents, &dir)?;
  assert_eq!(cfg.preset, Preset::Reference);
  assert_eq!(cfg.samples, 3000);
  assert_eq!(cfg.chart.y_range, Some((-400.0, 400.0)));
  Ok(())
}
