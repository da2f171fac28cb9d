use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use statrs::distribution::Normal;

use crate::{DataLoadError, DataLoadResult, Signal, SignalSource};

/// One additive term of a synthetic signal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
  /// Gaussian noise drawn independently per sample.
  Noise { mean: f64, std_dev: f64 },
  /// `amplitude * sin(phase)` with phase spaced evenly over `0..=phase_end`.
  Sine { amplitude: f64, phase_end: f64 },
  /// `amplitude * exp(-((i - center)^2) / width)` over sample index `i`.
  Bump {
    amplitude: f64,
    center: f64,
    width: f64,
  },
}

/// Deterministic EEG-like test signal. The same seed always yields the same samples.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SyntheticSignal {
  pub label: String,
  pub samples: usize,
  pub seed: u64,
  #[serde(default)]
  pub components: Vec<Component>,
}

impl SyntheticSignal {
  pub fn new(label: impl Into<String>, samples: usize, seed: u64) -> Self {
    Self {
      label: label.into(),
      samples,
      seed,
      components: vec![],
    }
  }

  pub fn noise(mut self, mean: f64, std_dev: f64) -> Self {
    self.components.push(Component::Noise { mean, std_dev });
    self
  }

  pub fn sine(mut self, amplitude: f64, phase_end: f64) -> Self {
    self.components.push(Component::Sine {
      amplitude,
      phase_end,
    });
    self
  }

  pub fn bump(mut self, amplitude: f64, center: f64, width: f64) -> Self {
    self.components.push(Component::Bump {
      amplitude,
      center,
      width,
    });
    self
  }

  pub fn generate(&self) -> DataLoadResult<Signal> {
    let n = self.samples;
    let mut rng = StdRng::seed_from_u64(self.seed);
    let mut samples = vec![0.0; n];

    for component in &self.components {
      match *component {
        Component::Noise { mean, std_dev } => {
          if std_dev == 0.0 {
            samples.iter_mut().for_each(|s| *s += mean);
            continue;
          }
          let normal = Normal::new(mean, std_dev)
            .map_err(|e| DataLoadError::InvalidComponent(format!("noise: {}", e)))?;
          for s in samples.iter_mut() {
            *s += normal.sample(&mut rng);
          }
        }
        Component::Sine {
          amplitude,
          phase_end,
        } => {
          let step = if n > 1 { phase_end / (n - 1) as f64 } else { 0.0 };
          for (i, s) in samples.iter_mut().enumerate() {
            *s += amplitude * (step * i as f64).sin();
          }
        }
        Component::Bump {
          amplitude,
          center,
          width,
        } => {
          if width <= 0.0 || !width.is_finite() {
            return Err(DataLoadError::InvalidComponent(format!(
              "bump width must be positive, got {}",
              width
            )));
          }
          for (i, s) in samples.iter_mut().enumerate() {
            *s += amplitude * (-(i as f64 - center).powi(2) / width).exp();
          }
        }
      }
    }
    Ok(Signal::new(samples))
  }
}

impl SignalSource for SyntheticSignal {
  fn label(&self) -> String {
    self.label.clone()
  }

  fn load(&self) -> DataLoadResult<Signal> {
    self.generate()
  }
}

/// Canned pairs of synthetic channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
  /// Two noisy sines, the second with a DC offset.
  #[default]
  Random,
  /// A quiet channel against one carrying a slow wave and a central bump.
  Reference,
}

impl Preset {
  pub fn default_samples(&self) -> usize {
    match self {
      Preset::Random => 1000,
      Preset::Reference => 3000,
    }
  }

  /// Both channels of the preset. The second channel is seeded with `seed + 1`.
  pub fn pair(&self, samples: usize, seed: u64) -> (SyntheticSignal, SyntheticSignal) {
    let second_seed = seed.wrapping_add(1);
    match self {
      Preset::Random => (
        SyntheticSignal::new("Signal 1 (Channel 1)", samples, seed)
          .noise(0.0, 50.0)
          .sine(10.0, 20.0 * std::f64::consts::PI),
        SyntheticSignal::new("Signal 2 (Channel 2)", samples, second_seed)
          .noise(20.0, 60.0)
          .sine(15.0, 25.0 * std::f64::consts::PI),
      ),
      Preset::Reference => {
        let span = samples as f64;
        (
          SyntheticSignal::new("Fz1-M1 (CSV 1)", samples, seed)
            .noise(0.0, 20.0)
            .sine(5.0, span / 100.0),
          SyntheticSignal::new("Fz1-M2 (CSV 2)", samples, second_seed)
            .noise(0.0, 30.0)
            .sine(50.0, span / 200.0)
            .bump(100.0, span / 2.0, 50_000.0),
        )
      }
    }
  }
}
