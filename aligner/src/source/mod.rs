pub use synthetic::*;
pub use tabular::*;

pub mod synthetic;
pub mod tabular;

use crate::{DataLoadResult, Signal};

/// Where a signal comes from: a CSV column, a seeded generator or an in-memory fixture.
pub trait SignalSource {
  /// Display name of the channel.
  fn label(&self) -> String;

  fn load(&self) -> DataLoadResult<Signal>;
}

impl SignalSource for Signal {
  fn label(&self) -> String {
    "Signal".to_string()
  }

  fn load(&self) -> DataLoadResult<Signal> {
    Ok(self.clone())
  }
}
