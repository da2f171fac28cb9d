use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which series of a comparison a sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
  A,
  B,
  Difference,
}

impl fmt::Display for Side {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Side::A => write!(f, "A"),
      Side::B => write!(f, "B"),
      Side::Difference => write!(f, "difference"),
    }
  }
}

pub type AlignResult<T = ()> = Result<T, AlignError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
  #[error("Cannot compare signals of length {len_a} and {len_b}: no overlapping samples")]
  EmptyInput { len_a: usize, len_b: usize },

  #[error("Signal {side} has a non-finite sample at index {index}")]
  NonFinite { side: Side, index: usize },

  #[error("Statistics of signal {side} are not representable")]
  NonFiniteStatistic { side: Side },
}

pub type DataLoadResult<T = ()> = Result<T, DataLoadError>;

#[derive(Debug, Error)]
pub enum DataLoadError {
  #[error("Failed to open {}: {source}", path.display())]
  Io {
    path: PathBuf,
    source: std::io::Error,
  },

  #[error("{0}")]
  Csv(#[from] csv::Error),

  #[error("Column {column:?} not found in {}; available columns: {available:?}", path.display())]
  MissingColumn {
    path: PathBuf,
    column: String,
    available: Vec<String>,
  },

  #[error("Invalid sample {value:?} in column {column:?} on line {line}")]
  InvalidSample {
    line: u64,
    column: String,
    value: String,
  },

  #[error("Invalid synthetic signal component: {0}")]
  InvalidComponent(String),
}
