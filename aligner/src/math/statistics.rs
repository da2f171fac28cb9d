use serde::Serialize;

// Callers guarantee non-empty input; empty slices yield NaN.
// Sums run over samples divided by a power of two near the largest magnitude,
// so squares and sums neither overflow nor underflow. The division is exact.

/// Largest power of two not above the largest magnitude in `x`, or 1 for zero/subnormal data.
fn scale(x: &[f64]) -> f64 {
  let max_abs = x.iter().fold(0.0f64, |acc, a| acc.max(a.abs()));
  if max_abs.is_normal() {
    // exponent bits only
    f64::from_bits(max_abs.to_bits() & 0x7ff0_0000_0000_0000)
  } else {
    1.0
  }
}

/// Population standard deviation (divides by `n`).
pub fn std_dev(x: &[f64]) -> f64 {
  let s = scale(x);
  let n = x.len() as f64;
  let mean_y: f64 = x.iter().map(|a| a / s).sum::<f64>() / n;
  let sum_y_minus_mean: f64 = x.iter().map(|a| (a / s - mean_y).powi(2)).sum();
  (sum_y_minus_mean / n).sqrt() * s
}

pub fn mean(x: &[f64]) -> f64 {
  let s = scale(x);
  let sum: f64 = x.iter().map(|a| a / s).sum();
  let n: f64 = x.len() as f64;
  sum / n * s
}

pub fn mean_abs(x: &[f64]) -> f64 {
  let s = scale(x);
  let sum: f64 = x.iter().map(|a| a.abs() / s).sum();
  sum / x.len() as f64 * s
}

pub fn minmax(x: &[f64]) -> Option<(f64, f64)> {
  let first = *x.first()?;
  Some(
    x.iter()
      .fold((first, first), |acc, &x| (acc.0.min(x), acc.1.max(x))),
  )
}

/// Descriptive statistics of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalStats {
  pub mean: f64,
  pub std_dev: f64,
  pub min: f64,
  pub max: f64,
  /// Mean absolute amplitude.
  pub mean_abs: f64,
}

impl SignalStats {
  /// `None` for an empty series, whose statistics are undefined.
  pub fn compute(x: &[f64]) -> Option<Self> {
    let (min, max) = minmax(x)?;
    Some(Self {
      mean: mean(x),
      std_dev: std_dev(x),
      min,
      max,
      mean_abs: mean_abs(x),
    })
  }

  pub fn max_abs(&self) -> f64 {
    self.min.abs().max(self.max.abs())
  }

  pub fn is_finite(&self) -> bool {
    [self.mean, self.std_dev, self.min, self.max, self.mean_abs]
      .iter()
      .all(|v| v.is_finite())
  }
}

#[test]
fn population_std_dev() {
  let x = [1.0, 2.0, 3.0];
  assert!((mean(&x) - 2.0).abs() < 1e-12);
  assert!((std_dev(&x) - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
  assert_eq!(std_dev(&[3.0, 3.0, 3.0]), 0.0);
}

#[test]
fn stats_of_mixed_signs() -> anyhow::Result<()> {
  let stats = SignalStats::compute(&[-4.0, 1.0, 3.0]).ok_or_else(|| anyhow::anyhow!("empty"))?;
  assert_eq!(stats.min, -4.0);
  assert_eq!(stats.max, 3.0);
  assert!((stats.mean_abs - 8.0 / 3.0).abs() < 1e-12);
  assert_eq!(stats.max_abs(), 4.0);
  assert!(stats.is_finite());
  Ok(())
}

#[test]
fn huge_magnitudes_stay_finite() {
  let x = [1e200, -1e200];
  assert_eq!(mean(&x), 0.0);
  assert_eq!(std_dev(&x), 1e200);
  assert_eq!(mean_abs(&x), 1e200);

  let max = [f64::MAX, f64::MAX];
  assert_eq!(mean(&max), f64::MAX);
  assert_eq!(std_dev(&max), 0.0);

  let spread = [f64::MAX, -f64::MAX];
  assert_eq!(mean(&spread), 0.0);
  assert_eq!(std_dev(&spread), f64::MAX);
}

#[test]
fn tiny_magnitudes_do_not_underflow() {
  let x = [1e-300, 3e-300];
  assert!((mean(&x) - 2e-300).abs() < 1e-310);
  assert!((std_dev(&x) - 1e-300).abs() < 1e-310);
}

#[test]
fn stats_of_empty_series_are_undefined() {
  assert!(SignalStats::compute(&[]).is_none());
  assert!(minmax(&[]).is_none());
}
