use rayon::prelude::*;
use serde::Serialize;

use crate::{AlignError, AlignResult, Side, Signal, SignalStats};

/// Two signals truncated to their common length, their difference `b - a`
/// and the descriptive statistics of all three.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
  pub a: Signal,
  pub b: Signal,
  pub difference: Signal,
  pub stats_a: SignalStats,
  pub stats_b: SignalStats,
  pub stats_difference: SignalStats,
  pub original_len_a: usize,
  pub original_len_b: usize,
  /// Trailing samples dropped from the longer input.
  pub truncated_by: usize,
}

impl ComparisonResult {
  pub fn len(&self) -> usize {
    self.difference.len()
  }

  pub fn is_empty(&self) -> bool {
    self.difference.is_empty()
  }

  /// The input that lost samples to truncation, if any.
  pub fn truncated_side(&self) -> Option<Side> {
    match self.original_len_a.cmp(&self.original_len_b) {
      std::cmp::Ordering::Greater => Some(Side::A),
      std::cmp::Ordering::Less => Some(Side::B),
      std::cmp::Ordering::Equal => None,
    }
  }
}

pub struct SignalAligner;

impl SignalAligner {
  /// Truncate both inputs to `min(len(a), len(b))` samples and compute
  /// `difference[i] = b[i] - a[i]` with population statistics for each series.
  pub fn compare(a: &[f64], b: &[f64]) -> AlignResult<ComparisonResult> {
    let n = a.len().min(b.len());
    if n == 0 {
      return Err(AlignError::EmptyInput {
        len_a: a.len(),
        len_b: b.len(),
      });
    }
    let (head_a, head_b) = (&a[..n], &b[..n]);
    Self::check_finite(head_a, Side::A)?;
    Self::check_finite(head_b, Side::B)?;

    let difference: Vec<f64> = head_a
      .iter()
      .zip(head_b.iter())
      .map(|(a, b)| b - a)
      .collect();
    Self::check_finite(&difference, Side::Difference)?;

    Ok(ComparisonResult {
      stats_a: Self::stats(head_a, Side::A)?,
      stats_b: Self::stats(head_b, Side::B)?,
      stats_difference: Self::stats(&difference, Side::Difference)?,
      a: Signal::new(head_a.to_vec()),
      b: Signal::new(head_b.to_vec()),
      difference: Signal::new(difference),
      original_len_a: a.len(),
      original_len_b: b.len(),
      truncated_by: a.len().abs_diff(b.len()),
    })
  }

  /// Compare independent pairs in parallel. Results keep the order of `pairs`.
  pub fn compare_all(pairs: &[(Signal, Signal)]) -> Vec<AlignResult<ComparisonResult>> {
    pairs
      .par_iter()
      .map(|(a, b)| Self::compare(a.values(), b.values()))
      .collect()
  }

  /// Statistics of a non-empty, finite series.
  fn stats(x: &[f64], side: Side) -> AlignResult<SignalStats> {
    match SignalStats::compute(x) {
      Some(stats) if stats.is_finite() => Ok(stats),
      _ => Err(AlignError::NonFiniteStatistic { side }),
    }
  }

  fn check_finite(x: &[f64], side: Side) -> AlignResult {
    match x.iter().position(|v| !v.is_finite()) {
      Some(index) => Err(AlignError::NonFinite { side, index }),
      None => Ok(()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn assert_close(actual: f64, expected: f64) {
    assert!(
      (actual - expected).abs() < 1e-9,
      "expected {} but got {}",
      expected,
      actual
    );
  }

  #[test]
  fn truncates_longer_first_signal() -> anyhow::Result<()> {
    let result = SignalAligner::compare(&[1.0, 2.0, 3.0, 4.0], &[10.0, 20.0])?;
    assert_eq!(result.a.values(), &[1.0, 2.0]);
    assert_eq!(result.b.values(), &[10.0, 20.0]);
    assert_eq!(result.difference.values(), &[9.0, 18.0]);
    assert_eq!(result.truncated_by, 2);
    assert_eq!(result.truncated_side(), Some(Side::A));
    Ok(())
  }

  #[test]
  fn truncates_longer_second_signal() -> anyhow::Result<()> {
    let result = SignalAligner::compare(&[1.0, 2.0], &[10.0, 20.0, 30.0, 40.0])?;
    assert_eq!(result.a.values(), &[1.0, 2.0]);
    assert_eq!(result.b.values(), &[10.0, 20.0]);
    assert_eq!(result.difference.values(), &[9.0, 18.0]);
    assert_eq!(result.truncated_side(), Some(Side::B));
    Ok(())
  }

  #[test]
  fn statistics_use_population_divisor() -> anyhow::Result<()> {
    let result = SignalAligner::compare(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0])?;
    let expected_std = (2.0f64 / 3.0).sqrt();
    assert_close(result.stats_a.mean, 2.0);
    assert_close(result.stats_a.std_dev, expected_std);
    assert_close(result.stats_b.mean, 5.0);
    assert_close(result.stats_b.std_dev, expected_std);
    assert_eq!(result.difference.values(), &[3.0, 3.0, 3.0]);
    assert_close(result.stats_difference.mean, 3.0);
    assert_close(result.stats_difference.std_dev, 0.0);
    assert_eq!(result.truncated_by, 0);
    assert_eq!(result.truncated_side(), None);
    Ok(())
  }

  #[test]
  fn empty_input_is_an_error() {
    assert_eq!(
      SignalAligner::compare(&[], &[1.0, 2.0, 3.0]),
      Err(AlignError::EmptyInput { len_a: 0, len_b: 3 })
    );
    assert_eq!(
      SignalAligner::compare(&[1.0, 2.0, 3.0], &[]),
      Err(AlignError::EmptyInput { len_a: 3, len_b: 0 })
    );
  }

  #[test]
  fn non_finite_samples_are_rejected() {
    assert_eq!(
      SignalAligner::compare(&[1.0, f64::NAN], &[1.0, 2.0]),
      Err(AlignError::NonFinite {
        side: Side::A,
        index: 1
      })
    );
    assert_eq!(
      SignalAligner::compare(&[1.0], &[f64::INFINITY]),
      Err(AlignError::NonFinite {
        side: Side::B,
        index: 0
      })
    );
    assert_eq!(
      SignalAligner::compare(&[-f64::MAX], &[f64::MAX]),
      Err(AlignError::NonFinite {
        side: Side::Difference,
        index: 0
      })
    );
  }

  #[test]
  fn huge_finite_samples_give_finite_statistics() -> anyhow::Result<()> {
    let result = SignalAligner::compare(&[1e200, -1e200], &[0.0, 0.0])?;
    assert_eq!(result.stats_a.mean, 0.0);
    assert_eq!(result.stats_a.std_dev, 1e200);
    assert_eq!(result.stats_difference.std_dev, 1e200);

    let max = [f64::MAX, f64::MAX];
    let result = SignalAligner::compare(&max, &max)?;
    assert_eq!(result.stats_a.mean, f64::MAX);
    assert_eq!(result.stats_b.std_dev, 0.0);
    assert_eq!(result.stats_difference.mean, 0.0);
    assert!(result.stats_a.is_finite() && result.stats_difference.is_finite());
    Ok(())
  }

  #[test]
  fn samples_past_the_common_length_are_ignored() -> anyhow::Result<()> {
    let result = SignalAligner::compare(&[1.0, 2.0], &[3.0, 4.0, f64::NAN])?;
    assert_eq!(result.difference.values(), &[2.0, 2.0]);
    Ok(())
  }

  #[test]
  fn compare_all_preserves_order() {
    let pairs = vec![
      (Signal::new(vec![1.0, 2.0]), Signal::new(vec![2.0, 4.0])),
      (Signal::new(vec![]), Signal::new(vec![1.0])),
      (Signal::new(vec![5.0]), Signal::new(vec![0.0, 1.0])),
    ];
    let results = SignalAligner::compare_all(&pairs);
    assert_eq!(results.len(), 3);
    for ((a, b), result) in pairs.iter().zip(results.iter()) {
      assert_eq!(result, &SignalAligner::compare(a.values(), b.values()));
    }
    assert!(results[1].is_err());
  }
}
