use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::{ComparisonResult, SeriesLabels};

/// Write `Index,<a>,<b>,<difference>` rows with 4-decimal samples.
pub fn export_table<W: Write>(result: &ComparisonResult, labels: &SeriesLabels, writer: W) -> csv::Result<()> {
  let mut csv = csv::Writer::from_writer(writer);
  csv.write_record([
    "Index",
    labels.a.as_str(),
    labels.b.as_str(),
    labels.difference.as_str(),
  ])?;
  let rows = result
    .a
    .values()
    .iter()
    .zip(result.b.values())
    .zip(result.difference.values());
  for (i, ((a, b), difference)) in rows.enumerate() {
    csv.write_record([
      i.to_string(),
      format!("{:.4}", a),
      format!("{:.4}", b),
      format!("{:.4}", difference),
    ])?;
  }
  csv.flush()?;
  Ok(())
}

pub fn export_table_to_path(result: &ComparisonResult, labels: &SeriesLabels, path: &Path) -> anyhow::Result<()> {
  let file = File::create(path)
    .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
  export_table(result, labels, file)?;
  info!("Saved comparison table to {}", path.display());
  Ok(())
}

#[test]
fn writes_one_row_per_sample() -> anyhow::Result<()> {
  let result = crate::SignalAligner::compare(&[1.0, 2.5, 9.0], &[1.5, 2.0])?;
  let labels = SeriesLabels::new("Fz1-M1 (Alpha)", "Fz1-M2 (Beta)");
  let mut buf = Vec::new();
  export_table(&result, &labels, &mut buf)?;
  let text = String::from_utf8(buf)?;
  let lines: Vec<&str> = text.lines().collect();
  assert_eq!(
    lines,
    vec![
      "Index,Fz1-M1 (Alpha),Fz1-M2 (Beta),Difference",
      "0,1.0000,1.5000,0.5000",
      "1,2.5000,2.0000,-0.5000",
    ]
  );
  Ok(())
}
