use std::fs;
use std::path::PathBuf;

use aligner::*;

fn write_fixture(name: &str, contents: &str) -> anyhow::Result<PathBuf> {
  let dir = std::env::temp_dir().join("aligner_sources_tests");
  fs::create_dir_all(&dir)?;
  let path = dir.join(name);
  fs::write(&path, contents)?;
  Ok(path)
}

#[test]
fn loads_named_columns() -> anyhow::Result<()> {
  let path = write_fixture(
    "two_channels.csv",
    "time, Fz1-M1 ,Fz1-M2\n0,1.5,-2\n1, 2.5 ,3e1\n2,-0.25,4\n",
  )?;
  let table = CsvTable::read(&path)?;
  assert_eq!(table.headers(), &["time", "Fz1-M1", "Fz1-M2"]);
  assert_eq!(table.len(), 3);
  assert_eq!(table.column("Fz1-M1")?.values(), &[1.5, 2.5, -0.25]);
  assert_eq!(table.column("Fz1-M2")?.values(), &[-2.0, 30.0, 4.0]);

  let channel = CsvChannel::new(&path, "Fz1-M2").with_label("Fz1-M2 (CSV 2)");
  assert_eq!(channel.label(), "Fz1-M2 (CSV 2)");
  assert_eq!(channel.load()?.len(), 3);
  Ok(())
}

#[test]
fn missing_column_lists_available_headers() -> anyhow::Result<()> {
  let path = write_fixture("missing_column.csv", "a,b\n1,2\n")?;
  match CsvChannel::new(&path, "c").load() {
    Err(DataLoadError::MissingColumn { column, available, .. }) => {
      assert_eq!(column, "c");
      assert_eq!(available, vec!["a".to_string(), "b".to_string()]);
    }
    other => panic!("expected missing column, got {:?}", other),
  }
  Ok(())
}

#[test]
fn non_numeric_cell_reports_its_line() -> anyhow::Result<()> {
  let path = write_fixture("bad_cell.csv", "ch\n1.0\n2.0\nartifact\n")?;
  match CsvChannel::new(&path, "ch").load() {
    Err(DataLoadError::InvalidSample { line, column, value }) => {
      assert_eq!(line, 4);
      assert_eq!(column, "ch");
      assert_eq!(value, "artifact");
    }
    other => panic!("expected invalid sample, got {:?}", other),
  }
  Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
  let path = std::env::temp_dir().join("aligner_sources_tests/does_not_exist.csv");
  let err = CsvChannel::new(&path, "ch").load().unwrap_err();
  assert!(matches!(err, DataLoadError::Io { .. }));
  assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn header_only_file_yields_empty_signal_and_empty_input_error() -> anyhow::Result<()> {
  let path = write_fixture("header_only.csv", "ch\n")?;
  let signal = CsvChannel::new(&path, "ch").load()?;
  assert!(signal.is_empty());
  assert_eq!(
    SignalAligner::compare(signal.values(), &[1.0, 2.0]),
    Err(AlignError::EmptyInput { len_a: 0, len_b: 2 })
  );
  Ok(())
}
