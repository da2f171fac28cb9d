use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;

use crate::{DataLoadError, DataLoadResult, Signal, SignalSource};

/// A header-first CSV file held in memory.
#[derive(Debug, Clone)]
pub struct CsvTable {
  path: PathBuf,
  headers: Vec<String>,
  records: Vec<csv::StringRecord>,
}

impl CsvTable {
  pub fn read(path: &Path) -> DataLoadResult<Self> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    let mut csv = csv::ReaderBuilder::new()
      .trim(csv::Trim::All)
      .from_reader(file);

    let headers = csv.headers()?.iter().map(String::from).collect();
    let records = csv.records().collect::<Result<Vec<_>, _>>()?;
    debug!("Read {} rows from {}", records.len(), path.display());

    Ok(Self {
      path: path.to_path_buf(),
      headers,
      records,
    })
  }

  pub fn headers(&self) -> &[String] {
    &self.headers
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Parse every row of `column` as a sample.
  pub fn column(&self, column: &str) -> DataLoadResult<Signal> {
    let index = self
      .headers
      .iter()
      .position(|h| h == column)
      .ok_or_else(|| DataLoadError::MissingColumn {
        path: self.path.clone(),
        column: column.to_string(),
        available: self.headers.clone(),
      })?;

    let mut samples = Vec::with_capacity(self.records.len());
    for (row, record) in self.records.iter().enumerate() {
      let value = record.get(index).unwrap_or("");
      let sample = f64::from_str(value).map_err(|_| DataLoadError::InvalidSample {
        // header is line 1
        line: record
          .position()
          .map(|p| p.line())
          .unwrap_or(row as u64 + 2),
        column: column.to_string(),
        value: value.to_string(),
      })?;
      samples.push(sample);
    }
    Ok(Signal::new(samples))
  }
}

/// One named column of a CSV file.
#[derive(Debug, Clone)]
pub struct CsvChannel {
  pub path: PathBuf,
  pub column: String,
  pub label: Option<String>,
}

impl CsvChannel {
  pub fn new(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      column: column.into(),
      label: None,
    }
  }

  pub fn with_label(mut self, label: impl Into<String>) -> Self {
    self.label = Some(label.into());
    self
  }
}

impl SignalSource for CsvChannel {
  fn label(&self) -> String {
    self.label.clone().unwrap_or_else(|| self.column.clone())
  }

  fn load(&self) -> DataLoadResult<Signal> {
    CsvTable::read(&self.path)?.column(&self.column)
  }
}
