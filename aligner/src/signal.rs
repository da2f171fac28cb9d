use common::Data;
use serde::{Deserialize, Serialize};

/// Uniformly sampled amplitudes; the sample index is the implicit x-axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signal(pub Vec<f64>);

impl Signal {
  pub fn new(samples: Vec<f64>) -> Self {
    Self(samples)
  }

  pub fn values(&self) -> &[f64] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// First `n` samples, or the whole signal if it is shorter.
  pub fn head(&self, n: usize) -> Signal {
    Signal(self.0[..n.min(self.0.len())].to_vec())
  }

  pub fn to_data(&self) -> Vec<Data> {
    self
      .0
      .iter()
      .enumerate()
      .map(|(i, &y)| Data { x: i as i64, y })
      .collect()
  }
}

impl From<Vec<f64>> for Signal {
  fn from(samples: Vec<f64>) -> Self {
    Self(samples)
  }
}

impl AsRef<[f64]> for Signal {
  fn as_ref(&self) -> &[f64] {
    &self.0
  }
}

#[test]
fn head_clamps_to_length() {
  let signal = Signal::new(vec![1.0, 2.0, 3.0]);
  assert_eq!(signal.head(2).values(), &[1.0, 2.0]);
  assert_eq!(signal.head(10), signal);
  assert!(signal.head(0).is_empty());
}

#[test]
fn data_uses_sample_index_as_x() {
  let data = Signal::new(vec![-1.5, 4.0]).to_data();
  assert_eq!(data, vec![Data { x: 0, y: -1.5 }, Data { x: 1, y: 4.0 }]);
}
